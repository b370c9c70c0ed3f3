use crate::utils::error::Result;
use std::io::Write;

/// Anything the CLI can print. Each output format gets its own writer method.
pub trait Report {
    fn write_text(&self, out: &mut dyn Write) -> Result<()>;
    fn write_csv(&self, out: &mut dyn Write) -> Result<()>;
    fn write_json(&self, out: &mut dyn Write) -> Result<()>;
}
