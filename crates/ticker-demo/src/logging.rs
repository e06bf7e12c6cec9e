#![forbid(unsafe_code)]

//! Subscriber setup. Filtering follows `RUST_LOG`, defaulting to `info`.
//! Output goes to stderr so frames on stdout stay clean.

use tracing_subscriber::EnvFilter;

use crate::error::{DemoError, Result};

const DEFAULT_FILTER: &str = "info";

pub fn init(json: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    let installed = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(DemoError::Logging)
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn second_init_keeps_the_cause() {
        let _ = init(false);
        let err = init(true).unwrap_err();
        assert!(matches!(err, DemoError::Logging(_)));
        assert!(err.source().is_some());
        assert_eq!(err.exit_code(), 1);
    }
}
