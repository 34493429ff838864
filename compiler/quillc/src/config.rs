//! Command-line configuration for `quill lex`.
//!
//! Arguments are matched by hand, the same way the other subcommands are
//! dispatched in `main.rs`. Flags may appear before or after the path.

use quill_lexer::{LexOptions, RenderFormat};

/// Environment variable holding the tracing filter (e.g. `quill_lexer=trace`).
pub const LOG_ENV: &str = "QUILL_LOG";

/// Invalid `quill lex` arguments.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ArgError {
    #[error("missing file path")]
    MissingPath,
    #[error("unexpected extra argument '{0}'")]
    ExtraPath(String),
    #[error("unknown format '{0}' (expected 'block' or 'line')")]
    UnknownFormat(String),
    #[error("unknown option '{0}'")]
    UnknownOption(String),
}

/// Settings for one `quill lex` invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexConfig {
    pub path: String,
    pub format: RenderFormat,
    /// Scan punctuator table entries (`--punctuators`).
    pub punctuators: bool,
    /// Exit with status 1 if any token is left unresolved (`--strict`).
    pub strict: bool,
    /// Also print the declared identifiers (`--registry`).
    pub registry: bool,
}

impl LexConfig {
    /// Parse the arguments that follow `lex`.
    pub fn parse(args: &[String]) -> Result<Self, ArgError> {
        let mut path = None;
        let mut format = RenderFormat::default();
        let mut punctuators = false;
        let mut strict = false;
        let mut registry = false;

        for arg in args {
            if let Some(name) = arg.strip_prefix("--format=") {
                format = RenderFormat::from_name(name)
                    .ok_or_else(|| ArgError::UnknownFormat(name.to_string()))?;
            } else if arg == "--punctuators" {
                punctuators = true;
            } else if arg == "--strict" {
                strict = true;
            } else if arg == "--registry" {
                registry = true;
            } else if arg.starts_with('-') {
                return Err(ArgError::UnknownOption(arg.clone()));
            } else if path.is_none() {
                path = Some(arg.clone());
            } else {
                return Err(ArgError::ExtraPath(arg.clone()));
            }
        }

        Ok(LexConfig {
            path: path.ok_or(ArgError::MissingPath)?,
            format,
            punctuators,
            strict,
            registry,
        })
    }

    pub fn lex_options(&self) -> LexOptions {
        LexOptions {
            scan_punctuators: self.punctuators,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn path_only() {
        let config = LexConfig::parse(&args(&["main.ql"])).unwrap();
        assert_eq!(
            config,
            LexConfig {
                path: "main.ql".into(),
                format: RenderFormat::Block,
                punctuators: false,
                strict: false,
                registry: false,
            }
        );
        assert_eq!(config.lex_options(), LexOptions::default());
    }

    #[test]
    fn flags_in_any_position() {
        let config = LexConfig::parse(&args(&[
            "--strict",
            "main.ql",
            "--format=line",
            "--punctuators",
            "--registry",
        ]))
        .unwrap();
        assert_eq!(config.path, "main.ql");
        assert_eq!(config.format, RenderFormat::Line);
        assert!(config.strict && config.registry);
        assert!(config.lex_options().scan_punctuators);
    }

    #[test]
    fn errors() {
        assert_eq!(LexConfig::parse(&[]), Err(ArgError::MissingPath));
        assert_eq!(
            LexConfig::parse(&args(&["a.ql", "b.ql"])),
            Err(ArgError::ExtraPath("b.ql".into()))
        );
        assert_eq!(
            LexConfig::parse(&args(&["a.ql", "--format=json"])),
            Err(ArgError::UnknownFormat("json".into()))
        );
        assert_eq!(
            LexConfig::parse(&args(&["-v", "a.ql"])),
            Err(ArgError::UnknownOption("-v".into()))
        );
    }
}
