//! Source formatting for rendered output.
//!
//! When a request asks for formatting, rendered text is parsed back with
//! `syn` and pretty-printed with `prettyplease`. A failure is loud: the
//! caller asked for formatted code, so broken output must not be emitted
//! silently.

use crate::error::{Error, Result};

/// Format rendered Rust source. Returns [`Error::Format`] carrying the first
/// line of the offending text when it does not parse.
pub fn format_source(source: &str) -> Result<String> {
    let file = syn::parse_file(source).map_err(|e| {
        let first_line = source
            .lines()
            .find(|l| !l.trim().is_empty())
            .unwrap_or("<empty>");
        Error::Format(format!("{} (near: {})", e, first_line.trim()))
    })?;
    Ok(prettyplease::unparse(&file))
}
