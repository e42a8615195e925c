//! Report rendering
//!
//! Reports go to the supplied writer, normally stdout. Text output is the
//! human layout from each report's `Display`; JSON output is one
//! pretty-printed object followed by a newline.

use crate::cli::OutputFormat;
use crate::types::{CliError, Report};
use std::io::Write;

/// Write `report` to `output` in the requested format
///
/// # Arguments
///
/// * `report` - The report produced by an operation
/// * `format` - `Text` for the human layout, `Json` for one pretty-printed object
/// * `output` - Mutable reference to the writer, flushed before returning
///
/// # Returns
///
/// `Ok(())` if the whole report was written
///
/// # Errors
///
/// Returns `CliError::Io` if the writer fails and `CliError::Serialization`
/// if the report cannot be encoded as JSON.
pub fn write_report(
    report: &Report,
    format: OutputFormat,
    output: &mut dyn Write,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => write!(output, "{}", report)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *output, report)?;
            writeln!(output)?;
        }
    }
    output.flush()?;
    Ok(())
}
