use crate::domain::ports::Report;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Csv,
    Json,
}

pub fn render<R: Report + ?Sized>(
    report: &R,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    tracing::debug!("Rendering report as {:?}", format);
    match format {
        OutputFormat::Text => report.write_text(out)?,
        OutputFormat::Csv => report.write_csv(out)?,
        OutputFormat::Json => report.write_json(out)?,
    }
    out.flush()?;
    Ok(())
}
