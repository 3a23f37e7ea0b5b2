//! Loading a lender market from CSV.
//!
//! The expected layout is a header row followed by one lender per row:
//!
//! ```text
//! Lender,Rate,Available
//! Bob,0.075,640
//! Jane,0.069,480
//! ```

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use csv::{ReaderBuilder, StringRecord, Trim};
use rust_decimal::Decimal;
use tracing::debug;

use super::{Lender, LenderPool};
use crate::error::{FieldCause, QuoteError};
use crate::types::{Amount, Rate};
use crate::QuoteResult;

const FIELDS_PER_ROW: usize = 3;
const NAME_INDEX: usize = 0;
const RATE_INDEX: usize = 1;
const AVAILABLE_INDEX: usize = 2;

/// Read a lender market file from disk.
pub fn import_csv(path: impl AsRef<Path>) -> QuoteResult<LenderPool> {
    let path = path.as_ref();
    let file = File::open(path).map_err(csv::Error::from)?;
    let pool = read_lenders(file)?;
    debug!(path = %path.display(), lenders = pool.len(), "imported lender market");
    Ok(pool)
}

/// Parse lenders from any CSV source. The first row is treated as a header
/// and skipped.
pub fn read_lenders<R: Read>(reader: R) -> QuoteResult<LenderPool> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut lenders = Vec::new();
    for (i, record) in rdr.records().enumerate() {
        let record = record?;
        // Header occupies line 1
        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(i as u64 + 2);
        lenders.push(parse_record(&record, line)?);
    }

    Ok(LenderPool::new(lenders))
}

fn parse_record(record: &StringRecord, line: u64) -> QuoteResult<Lender> {
    if record.len() != FIELDS_PER_ROW {
        return Err(QuoteError::FieldCount {
            line,
            expected: FIELDS_PER_ROW,
            found: record.len(),
        });
    }

    let name = &record[NAME_INDEX];
    if name.is_empty() {
        return Err(field_error(line, "name", FieldCause::Empty));
    }

    let rate = parse_rate(&record[RATE_INDEX]).map_err(|c| field_error(line, "rate", c))?;
    let available =
        parse_available(&record[AVAILABLE_INDEX]).map_err(|c| field_error(line, "available", c))?;

    Ok(Lender::new(name, rate, available))
}

fn parse_rate(raw: &str) -> Result<Rate, FieldCause> {
    if raw.is_empty() {
        return Err(FieldCause::Empty);
    }
    let rate = Decimal::from_str(raw)?;
    if rate.is_sign_negative() && !rate.is_zero() {
        return Err(FieldCause::Negative);
    }
    Ok(rate)
}

fn parse_available(raw: &str) -> Result<Amount, FieldCause> {
    if raw.is_empty() {
        return Err(FieldCause::Empty);
    }
    if raw.starts_with('-') {
        return Err(FieldCause::Negative);
    }
    Ok(raw.parse::<Amount>()?)
}

fn field_error(line: u64, field: &'static str, cause: FieldCause) -> QuoteError {
    QuoteError::FieldParse { line, field, cause }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    const HEADER: &str = "Lender,Rate,Available\n";

    fn read(body: &str) -> QuoteResult<LenderPool> {
        read_lenders(format!("{HEADER}{body}").as_bytes())
    }

    #[test]
    fn test_reads_good_market() {
        let pool = read("Lender1,0.075,640\nLender2,0.069,480\n").unwrap();
        let lenders: Vec<&Lender> = pool.iter().collect();
        assert_eq!(lenders.len(), 2);
        assert_eq!(lenders[0], &Lender::new("Lender1", dec!(0.075), 640));
        assert_eq!(lenders[1], &Lender::new("Lender2", dec!(0.069), 480));
    }

    #[test]
    fn test_trims_whitespace() {
        let pool = read(" Bob , 0.05 , 100 \n").unwrap();
        assert_eq!(pool.iter().next(), Some(&Lender::new("Bob", dec!(0.05), 100)));
    }

    #[test]
    fn test_header_only_is_empty_pool() {
        let pool = read("").unwrap();
        assert!(pool.is_empty());
    }

    #[test]
    fn test_bad_rate_reports_line_and_field() {
        let err = read("A,0.075,640\nB,0.069,480\nC,bad_rate,100\n").unwrap_err();
        match err {
            QuoteError::FieldParse { line, field, cause } => {
                assert_eq!(line, 4);
                assert_eq!(field, "rate");
                assert!(matches!(cause, FieldCause::Decimal(_)));
            }
            other => panic!("Expected FieldParse, got {other:?}"),
        }
    }

    #[test]
    fn test_bad_available_reports_line_and_field() {
        let err = read("A,0.075,lots\n").unwrap_err();
        match err {
            QuoteError::FieldParse { line, field, cause } => {
                assert_eq!(line, 2);
                assert_eq!(field, "available");
                assert!(matches!(cause, FieldCause::Integer(_)));
            }
            other => panic!("Expected FieldParse, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_values_rejected() {
        let err = read("A,-0.01,100\n").unwrap_err();
        assert!(matches!(
            err,
            QuoteError::FieldParse { field: "rate", cause: FieldCause::Negative, .. }
        ));

        let err = read("A,0.01,-100\n").unwrap_err();
        assert!(matches!(
            err,
            QuoteError::FieldParse { field: "available", cause: FieldCause::Negative, .. }
        ));
    }

    #[test]
    fn test_missing_field() {
        let err = read("A,0.075,640\nB,0.069\n").unwrap_err();
        match err {
            QuoteError::FieldCount { line, expected, found } => {
                assert_eq!(line, 3);
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            other => panic!("Expected FieldCount, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = read(",0.075,640\n").unwrap_err();
        assert!(matches!(
            err,
            QuoteError::FieldParse { field: "name", cause: FieldCause::Empty, .. }
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = import_csv("definitely/not/a/market.csv").unwrap_err();
        assert!(matches!(err, QuoteError::Csv(_)));
        assert!(err.is_input());
    }
}
