use crate::error::FeedError;
use csv::{ReaderBuilder, Trim};
use std::collections::HashMap;
use tracing::debug;

/// One data row, addressed by header name
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawRow {
    /// 1-based line of the row in the source text
    pub line: u64,
    fields: HashMap<String, String>,
}

impl RawRow {
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for RawRow
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            line: 0,
            fields: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// A parsed feed: header names in column order, then the rows in feed order
#[derive(Debug, Clone, Default)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

impl Table {
    pub fn has_column(&self, column: &str) -> bool {
        self.headers.iter().any(|h| h == column)
    }

    pub fn require_column(&self, column: &str) -> Result<(), FeedError> {
        if self.has_column(column) {
            Ok(())
        } else {
            Err(FeedError::MissingColumn {
                column: column.to_string(),
                available: self.headers.clone(),
            })
        }
    }
}

/// Parse header-first CSV text.
///
/// Blank lines (whitespace-only included) and rows whose cells are all blank
/// are skipped. Any other row with a different number of cells than the
/// header is a [`FeedError::Parse`].
pub fn parse_table(text: &str) -> Result<Table, FeedError> {
    // Length is checked per row below, after blank rows are dropped
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    debug!("Available CSV columns: {:?}", headers);

    let mut rows = Vec::new();
    let mut skipped = 0usize;
    for result in reader.records() {
        let record = result?;
        if record.iter().all(|cell| cell.trim().is_empty()) {
            skipped += 1;
            continue;
        }
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        if record.len() != headers.len() {
            return Err(FeedError::Parse(format!(
                "line {}: found {} fields, but the header has {}",
                line,
                record.len(),
                headers.len()
            )));
        }
        let fields = headers
            .iter()
            .zip(record.iter())
            .map(|(header, cell)| (header.clone(), cell.to_string()))
            .collect();
        rows.push(RawRow { line, fields });
    }

    debug!(rows = rows.len(), skipped, "Parsed CSV table");
    Ok(Table { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_table_by_header_name() {
        let text = "Title,Year Released,Genres\nGoblin,2016,\"Fantasy, Romance\"\nVincenzo,2021,Comedy\n";
        let table = parse_table(text).unwrap();

        assert_eq!(table.headers, vec!["Title", "Year Released", "Genres"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].get("Title"), Some("Goblin"));
        assert_eq!(table.rows[0].get("Genres"), Some("Fantasy, Romance"));
        assert_eq!(table.rows[1].get("Year Released"), Some("2021"));
        assert_eq!(table.rows[1].get("Rating"), None);
    }

    #[test]
    fn test_parse_table_skips_blank_lines_and_padding_rows() {
        let text = "Title,Date Watched\nA,2021-01-01\n\n,\nB,2021-01-02\n , \n";
        let table = parse_table(text).unwrap();

        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].get("Title"), Some("A"));
        assert_eq!(table.rows[1].get("Title"), Some("B"));
    }

    #[test]
    fn test_parse_table_skips_whitespace_only_lines() {
        let text = "Title,Date Watched\nA,2021-01-01\n   \nB,2021-01-02\n\t\n";
        let table = parse_table(text).unwrap();

        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[1].get("Title"), Some("B"));
        assert_eq!(table.rows[1].line, 4);
    }

    #[test]
    fn test_parse_table_trims_headers() {
        let text = " Title , Date Watched \nA,2021-01-01\n";
        let table = parse_table(text).unwrap();
        assert!(table.has_column("Date Watched"));
        assert_eq!(table.rows[0].get("Date Watched"), Some("2021-01-01"));
    }

    #[test]
    fn test_parse_table_inconsistent_rows() {
        let text = "Title,Year Released\nGoblin,2016\nVincenzo,2021,extra\n";
        match parse_table(text) {
            Err(FeedError::Parse(message)) => assert!(message.contains("line 3")),
            other => panic!("expected Parse error, got {:?}", other),
        }

        let short = "Title,Year Released\nGoblin\n";
        assert!(matches!(parse_table(short), Err(FeedError::Parse(_))));
    }

    #[test]
    fn test_parse_table_empty_text() {
        let table = parse_table("").unwrap();
        assert!(table.rows.is_empty());

        let table = parse_table("Title,Genres\n").unwrap();
        assert!(table.rows.is_empty());
        assert!(table.has_column("Genres"));
    }

    #[test]
    fn test_require_column() {
        let table = parse_table("Name,Year\nA,2020\n").unwrap();
        let err = table.require_column("Title").unwrap_err();
        assert!(err.to_string().contains("missing required column: Title"));
    }
}
