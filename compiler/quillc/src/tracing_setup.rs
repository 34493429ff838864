//! Tracing subscriber installation.

use std::sync::Once;

use crate::config::LOG_ENV;

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber if `QUILL_LOG` is set.
///
/// Output is an indented span tree on stderr. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var(LOG_ENV).is_ok() {
            let filter = EnvFilter::from_env(LOG_ENV);
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                )
                .init();
        }
    });
}
