use crate::config::{CliConfig, Command};
use crate::core::ledger::PaydayReport;
use crate::core::raster::GridReport;
use crate::core::report::render;
use crate::utils::error::Result;
use std::io::Write;

/// Runs the selected command and writes its report to `out`.
pub fn run(config: &CliConfig, out: &mut dyn Write) -> Result<()> {
    match &config.command {
        Command::Payday(args) => {
            let report = PaydayReport::new(&args.ledger());
            tracing::info!(
                "Payday for {} debtors ({} with high debt)",
                report.records().len(),
                report.high_debt_count()
            );
            render(&report, config.format, out)
        }
        Command::Grid(args) => {
            let grid = args.build_grid()?;
            tracing::info!(
                "Grid with {} x {} = {} cells",
                grid.columns(),
                grid.rows(),
                grid.cell_count()
            );
            render(&GridReport::new(grid), config.format, out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::KataError;
    use clap::Parser;

    fn run_args(args: &[&str]) -> Result<String> {
        let config = CliConfig::try_parse_from(args).unwrap();
        let mut out = Vec::new();
        run(&config, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_run_payday() {
        let text = run_args(&[
            "small-katas",
            "payday",
            "--debtor",
            "Ann=101",
            "--debtor",
            "Ben=100",
        ])
        .unwrap();
        assert_eq!(text, "Ann: !!!101.0!!!\nBen: 100.0\n");
    }

    #[test]
    fn test_run_grid_csv() {
        let csv = run_args(&[
            "small-katas",
            "--format",
            "csv",
            "grid",
            "--columns",
            "3",
            "--rows",
            "1",
        ])
        .unwrap();
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines[0], "column,row,x,y");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_run_grid_rejects_overflowing_resolution() {
        let columns = usize::MAX.to_string();
        let result = run_args(&[
            "small-katas",
            "grid",
            "--columns",
            columns.as_str(),
            "--rows",
            "3",
        ]);
        assert!(matches!(result, Err(KataError::GridTooLarge { .. })));
    }

    #[test]
    fn test_run_grid_rejects_zero_rows() {
        assert!(run_args(&["small-katas", "grid", "--rows", "0"]).is_err());
    }
}
