use crate::domain::model::{DebtRecord, DebtorLine};
use crate::domain::ports::Report;
use crate::utils::error::{KataError, Result};
use std::io::Write;

/// Debts strictly above this amount are highlighted.
pub const HIGH_DEBT_THRESHOLD: f64 = 100.0;

pub fn has_high_debt(amount: f64) -> bool {
    amount > HIGH_DEBT_THRESHOLD
}

/// Renders `"<name>: <amount>"`, wrapping the amount in `!!!` for high debts.
///
/// Amounts use the `Debug` float rendering, so whole numbers keep their `.0`
/// and non-finite values come out as `NaN` / `inf` instead of failing.
pub fn format_debtor(record: &DebtRecord) -> String {
    if has_high_debt(record.amount) {
        format!("{}: !!!{:?}!!!", record.name, record.amount)
    } else {
        format!("{}: {:?}", record.name, record.amount)
    }
}

/// Highest amount first. Equal amounts keep their input order.
pub fn sort_descending(records: &[DebtRecord]) -> Vec<DebtRecord> {
    let mut sorted = records.to_vec();
    // stable sort on the reversed key keeps ties in input order
    sorted.sort_by(|a, b| b.amount.total_cmp(&a.amount));
    sorted
}

/// Writes one formatted line per debtor, highest debt first.
pub fn payday<W: Write + ?Sized>(records: &[DebtRecord], out: &mut W) -> Result<()> {
    let sorted = sort_descending(records);
    tracing::debug!("Paying out {} debtors", sorted.len());

    for record in &sorted {
        writeln!(out, "{}", format_debtor(record))?;
    }
    Ok(())
}

/// [`payday`] on standard output.
pub fn run_payday(records: &[DebtRecord]) -> Result<()> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    payday(records, &mut handle)?;
    handle.flush()?;
    Ok(())
}

/// Parses a `NAME=AMOUNT` pair as typed on the command line.
pub fn parse_debtor(input: &str) -> Result<DebtRecord> {
    let malformed = |reason: &str| KataError::MalformedRecord {
        input: input.to_string(),
        reason: reason.to_string(),
    };

    let (name, amount) = input
        .rsplit_once('=')
        .ok_or_else(|| malformed("expected NAME=AMOUNT"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(malformed("name is empty"));
    }
    let amount: f64 = amount
        .trim()
        .parse()
        .map_err(|_| malformed("amount is not a number"))?;

    Ok(DebtRecord::new(name, amount))
}

/// The ledger the CLI falls back to when no debtors are given.
pub fn demo_ledger() -> Vec<DebtRecord> {
    vec![
        DebtRecord::new("Person1", 100.0),
        DebtRecord::new("Person2", 200.0),
        DebtRecord::new("Person3", 10.0),
        DebtRecord::new("Person4", 50.0),
        DebtRecord::new("Person5", 1250.0),
    ]
}

/// A payday listing, already in payout order.
#[derive(Debug, Clone)]
pub struct PaydayReport {
    records: Vec<DebtRecord>,
}

impl PaydayReport {
    pub fn new(records: &[DebtRecord]) -> Self {
        Self {
            records: sort_descending(records),
        }
    }

    pub fn records(&self) -> &[DebtRecord] {
        &self.records
    }

    pub fn high_debt_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| has_high_debt(r.amount))
            .count()
    }

    fn lines(&self) -> Vec<DebtorLine> {
        self.records
            .iter()
            .map(|r| DebtorLine {
                name: r.name.clone(),
                amount: r.amount,
                high_debt: has_high_debt(r.amount),
            })
            .collect()
    }
}

impl Report for PaydayReport {
    fn write_text(&self, out: &mut dyn Write) -> Result<()> {
        // already sorted, and sorting is stable
        payday(&self.records, out)
    }

    fn write_csv(&self, out: &mut dyn Write) -> Result<()> {
        let mut writer = csv::Writer::from_writer(out);
        for line in self.lines() {
            writer.serialize(line)?;
        }
        writer.flush()?;
        Ok(())
    }

    fn write_json(&self, out: &mut dyn Write) -> Result<()> {
        serde_json::to_writer_pretty(&mut *out, &self.lines())?;
        writeln!(out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_regular_debt() {
        let record = DebtRecord::new("Person3", 10.0);
        assert_eq!(format_debtor(&record), "Person3: 10.0");
    }

    #[test]
    fn test_format_high_debt() {
        let record = DebtRecord::new("Person5", 1250.0);
        assert_eq!(format_debtor(&record), "Person5: !!!1250.0!!!");
    }

    #[test]
    fn test_threshold_is_strict() {
        assert!(!has_high_debt(100.0));
        assert!(has_high_debt(100.5));
        assert_eq!(format_debtor(&DebtRecord::new("P", 100.0)), "P: 100.0");
    }

    #[test]
    fn test_non_finite_amounts_still_format() {
        assert_eq!(format_debtor(&DebtRecord::new("A", f64::NAN)), "A: NaN");
        assert_eq!(
            format_debtor(&DebtRecord::new("B", f64::INFINITY)),
            "B: !!!inf!!!"
        );
        assert_eq!(format_debtor(&DebtRecord::new("C", -2.5)), "C: -2.5");
    }

    #[test]
    fn test_ties_keep_input_order() {
        let records = vec![
            DebtRecord::new("first", 5.0),
            DebtRecord::new("big", 9.0),
            DebtRecord::new("second", 5.0),
            DebtRecord::new("third", 5.0),
        ];
        let names: Vec<_> = sort_descending(&records)
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, ["big", "first", "second", "third"]);
    }

    #[test]
    fn test_sort_leaves_input_untouched() {
        let records = demo_ledger();
        let before = records.clone();
        let _ = sort_descending(&records);
        assert_eq!(records, before);
    }

    #[test]
    fn test_payday_writes_demo_ledger() {
        let mut out = Vec::new();
        payday(&demo_ledger(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "Person5: !!!1250.0!!!\n\
             Person2: !!!200.0!!!\n\
             Person1: 100.0\n\
             Person4: 50.0\n\
             Person3: 10.0\n"
        );
    }

    #[test]
    fn test_payday_empty_ledger_writes_nothing() {
        let mut out = Vec::new();
        payday(&[], &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_parse_debtor() {
        let record = parse_debtor("Alice Smith=42.5").unwrap();
        assert_eq!(record, DebtRecord::new("Alice Smith", 42.5));

        let negative = parse_debtor("Bob=-3").unwrap();
        assert_eq!(negative.amount, -3.0);

        assert!(parse_debtor("Carol").is_err());
        assert!(parse_debtor("=10").is_err());
        assert!(matches!(
            parse_debtor("Dave=lots"),
            Err(KataError::MalformedRecord { .. })
        ));
    }

    #[test]
    fn test_report_counts_high_debts() {
        let report = PaydayReport::new(&demo_ledger());
        assert_eq!(report.high_debt_count(), 2);
        assert_eq!(report.records()[0].name, "Person5");
    }
}
