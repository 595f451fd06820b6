//! Transaction loading from CSV and JSON exports

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{Transaction, TransactionType};

/// Column positions resolved from a CSV header row
struct Columns {
    date: usize,
    amount: usize,
    kind: Option<usize>,
    category: Option<usize>,
    description: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let find = |names: &[&str]| {
            headers
                .iter()
                .position(|h| names.iter().any(|n| h.trim().eq_ignore_ascii_case(n)))
        };

        Ok(Self {
            date: find(&["date", "transaction date"])
                .ok_or_else(|| Error::Import("Missing 'date' column".into()))?,
            amount: find(&["amount"])
                .ok_or_else(|| Error::Import("Missing 'amount' column".into()))?,
            kind: find(&["type", "kind"]),
            category: find(&["category"]),
            description: find(&["description", "memo", "name"]),
        })
    }
}

/// Parse a header-driven CSV into transactions.
///
/// `date` and `amount` columns are required. When the `type` column is
/// missing or blank, a negative amount means expense. Stored amounts are
/// always non-negative.
pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<Transaction>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let columns = Columns::from_headers(rdr.headers()?)?;
    let mut transactions = Vec::new();

    for (i, result) in rdr.records().enumerate() {
        let record = result?;
        // Header is line 1
        let line = i + 2;

        let field = |idx: Option<usize>| idx.and_then(|c| record.get(c)).unwrap_or("").trim();

        let date_str = field(Some(columns.date));
        if date_str.is_empty() && record.iter().all(|f| f.trim().is_empty()) {
            continue;
        }

        let date = parse_date(date_str).map_err(|e| at_line(line, e))?;
        let raw_amount =
            parse_amount(field(Some(columns.amount))).map_err(|e| at_line(line, e))?;

        let kind_str = field(columns.kind);
        let kind = if kind_str.is_empty() {
            if raw_amount < 0.0 {
                TransactionType::Expense
            } else {
                TransactionType::Income
            }
        } else {
            kind_str
                .parse::<TransactionType>()
                .map_err(|e| Error::Import(format!("line {}: {}", line, e)))?
        };

        transactions.push(Transaction {
            date,
            amount: raw_amount.abs(),
            kind,
            category: field(columns.category).to_string(),
            description: field(columns.description).to_string(),
        });
    }

    debug!("Parsed {} CSV transactions", transactions.len());
    Ok(transactions)
}

/// Prefix an import error with its CSV line number
fn at_line(line: usize, err: Error) -> Error {
    match err {
        Error::Import(msg) => Error::Import(format!("line {}: {}", line, msg)),
        other => other,
    }
}

/// Parse a JSON array of transactions
pub fn parse_json<R: Read>(reader: R) -> Result<Vec<Transaction>> {
    let transactions: Vec<Transaction> = serde_json::from_reader(reader)?;
    if let Some(tx) = transactions.iter().find(|t| t.amount < 0.0) {
        return Err(Error::InvalidData(format!(
            "Negative amount {} on {} ({:?}); use the 'type' field for direction",
            tx.amount, tx.date, tx.description
        )));
    }

    debug!("Parsed {} JSON transactions", transactions.len());
    Ok(transactions)
}

/// Load transactions from a file, choosing the format by extension
/// (`.json` is JSON, anything else is CSV).
pub fn load_transactions(path: &Path) -> Result<Vec<Transaction>> {
    let file = BufReader::new(File::open(path)?);

    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    if is_json {
        parse_json(file)
    } else {
        parse_csv(file)
    }
}

/// Parse a date in one of the common export formats
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    let s = s.trim();

    let formats = [
        "%Y-%m-%d", // 2024-01-15
        "%m/%d/%Y", // 01/15/2024
        "%m/%d/%y", // 01/15/24
        "%d.%m.%Y", // 15.01.2024
    ];

    for fmt in formats {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Ok(date);
        }
    }

    Err(Error::Import(format!("Unable to parse date: {}", s)))
}

/// Parse an amount string, handling currency symbols and commas
fn parse_amount(s: &str) -> Result<f64> {
    let cleaned: String = s
        .trim()
        .replace(['$', ',', ' '], "")
        .replace('(', "-")
        .replace(')', "");

    cleaned
        .parse::<f64>()
        .map_err(|_| Error::Import(format!("Unable to parse amount: {}", s)))
}
