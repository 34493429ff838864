//! Command handlers for the Quill CLI.
//!
//! Shared utilities like `read_source` live here in the module root.

use quill_ir::Text;

mod lex;

pub use lex::{lex_file, run_lex};

/// Read a source file, exiting with status 1 and a readable message on failure.
pub(crate) fn read_source(path: &str) -> Text {
    match Text::load_file(path) {
        Ok(text) => text,
        Err(e) => {
            let msg = match e.io_kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                _ => e.to_string(),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}
