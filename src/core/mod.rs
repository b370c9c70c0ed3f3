pub mod ledger;
pub mod raster;
pub mod report;
#[cfg(feature = "cli")]
pub mod runner;

pub use crate::domain::model::{CellCenter, DebtRecord, DebtorLine, Point};
pub use crate::domain::ports::Report;
pub use crate::utils::error::Result;
