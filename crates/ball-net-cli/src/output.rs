//! Shared output helpers for command results.

use serde::Serialize;

use crate::OutputFormat;

/// Print a serializable result in the requested format.
///
/// JSON output is emitted even in quiet mode; quiet suppresses the
/// human-readable rendering only, since scripts still need their data.
pub fn print<T: Serialize>(value: &T, format: OutputFormat, _quiet: bool) {
    if let OutputFormat::Json = format {
        match serde_json::to_string_pretty(value) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("failed to serialize output: {}", e),
        }
    }
}
