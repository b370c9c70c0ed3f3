#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, Command};

pub use crate::core::{
    ledger::{format_debtor, has_high_debt, payday, run_payday, sort_descending, PaydayReport},
    raster::{Cell, Cells, GridReport, RasterGrid},
    report::{render, OutputFormat},
};
pub use crate::domain::model::{DebtRecord, Point};
pub use crate::domain::ports::Report;
pub use crate::utils::error::{KataError, Result};
