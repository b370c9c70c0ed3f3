use crate::core::ledger::{demo_ledger, parse_debtor};
use crate::core::raster::RasterGrid;
use crate::core::report::OutputFormat;
use crate::domain::model::{DebtRecord, Point};
use crate::utils::error::{KataError, Result};
use crate::utils::validation::{
    validate_cell_count, validate_finite, validate_non_empty_string, validate_resolution,
    Validate,
};
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "small-katas")]
#[command(about = "Payday ledger and raster grid utilities")]
pub struct CliConfig {
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON on stderr")]
    pub log_json: bool,

    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List debtors, highest debt first
    Payday(PaydayArgs),
    /// Split a rectangle into cells and list their centers
    Grid(GridArgs),
}

#[derive(Debug, Clone, Args)]
pub struct PaydayArgs {
    /// Debtor as NAME=AMOUNT; repeat for more. Defaults to a demo ledger.
    #[arg(
        long = "debtor",
        value_name = "NAME=AMOUNT",
        value_parser = parse_debtor,
        allow_hyphen_values = true
    )]
    pub debtors: Vec<DebtRecord>,
}

impl PaydayArgs {
    pub fn ledger(&self) -> Vec<DebtRecord> {
        if self.debtors.is_empty() {
            demo_ledger()
        } else {
            self.debtors.clone()
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct GridArgs {
    #[arg(
        long,
        value_name = "X,Y",
        default_value = "0,0",
        value_parser = parse_point,
        allow_hyphen_values = true
    )]
    pub lower_left: Point,

    #[arg(
        long,
        value_name = "X,Y",
        default_value = "2,2",
        value_parser = parse_point,
        allow_hyphen_values = true
    )]
    pub upper_right: Point,

    #[arg(long, default_value = "2")]
    pub columns: usize,

    #[arg(long, default_value = "2")]
    pub rows: usize,
}

impl GridArgs {
    pub fn build_grid(&self) -> Result<RasterGrid> {
        RasterGrid::new(self.lower_left, self.upper_right, self.columns, self.rows)
    }
}

/// Parses `X,Y` into a point.
pub fn parse_point(input: &str) -> Result<Point> {
    let invalid = |reason: &str| KataError::ValidationError {
        field: "point".to_string(),
        value: input.to_string(),
        reason: reason.to_string(),
    };

    let (x, y) = input
        .split_once(',')
        .ok_or_else(|| invalid("expected X,Y"))?;
    let x: f64 = x
        .trim()
        .parse()
        .map_err(|_| invalid("x is not a number"))?;
    let y: f64 = y
        .trim()
        .parse()
        .map_err(|_| invalid("y is not a number"))?;

    Ok(Point::new(x, y))
}

impl Validate for PaydayArgs {
    fn validate(&self) -> Result<()> {
        for debtor in &self.debtors {
            validate_non_empty_string("debtor.name", &debtor.name)?;
        }
        Ok(())
    }
}

impl Validate for GridArgs {
    fn validate(&self) -> Result<()> {
        validate_resolution("columns", self.columns)?;
        validate_resolution("rows", self.rows)?;
        validate_cell_count(self.columns, self.rows)?;
        validate_finite("lower_left.x", self.lower_left.x)?;
        validate_finite("lower_left.y", self.lower_left.y)?;
        validate_finite("upper_right.x", self.upper_right.x)?;
        validate_finite("upper_right.y", self.upper_right.y)?;
        Ok(())
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        match &self.command {
            Command::Payday(args) => args.validate(),
            Command::Grid(args) => args.validate(),
        }
    }
}
