use csv::ReaderBuilder;

/// Verbatim capture of one chart CSV: the header row plus every data row,
/// cells kept as raw strings.
///
/// The study CSVs come out of spreadsheet exports and carry percent signs,
/// stray whitespace and the occasional ragged row. None of that is cleaned
/// here: all interpretation policy lives in the normalizer, so the table
/// stays a faithful record of what the file said.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Parse CSV text into a `RawTable`.
    ///
    /// Rows may be ragged (`flexible`): a short row simply has fewer
    /// cells, which downstream treats as missing values.
    pub fn parse(csv_text: &str) -> anyhow::Result<RawTable> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_text.as_bytes());

        let headers = rdr.headers()?.iter().map(|h| h.to_string()).collect();
        let mut rows = Vec::new();
        for result in rdr.records() {
            let record = result?;
            rows.push(record.iter().map(|c| c.to_string()).collect());
        }
        Ok(RawTable { headers, rows })
    }

    /// Build a table directly from rows, mainly for tests and tooling.
    pub fn from_rows(headers: Vec<String>, rows: Vec<Vec<String>>) -> RawTable {
        RawTable { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// True when the table has no data rows (a header alone is empty).
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Header of the category column, always the first column.
    pub fn category_header(&self) -> Option<&str> {
        self.headers.first().map(|s| s.as_str())
    }

    /// Headers of the measurement columns: everything after the first.
    pub fn data_headers(&self) -> &[String] {
        self.headers.get(1..).unwrap_or(&[])
    }

    /// Cell at (row, col) if present; ragged rows yield `None` past
    /// their end.
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(|s| s.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::RawTable;

    const STUDY_CSV: &str = "\
Categoria,Ola 1,Ola 2
Muy importante,45%,52%
Algo importante, 30 ,28%
Nada importante,12%,
";

    #[test]
    fn parse_keeps_cells_verbatim() {
        let table = RawTable::parse(STUDY_CSV).unwrap();
        assert_eq!(table.column_count(), 3);
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.cell(0, 1), Some("45%"));
        // whitespace is preserved, not trimmed
        assert_eq!(table.cell(1, 1), Some(" 30 "));
        // trailing empty cell is present but empty
        assert_eq!(table.cell(2, 2), Some(""));
    }

    #[test]
    fn header_accessors_split_category_from_data() {
        let table = RawTable::parse(STUDY_CSV).unwrap();
        assert_eq!(table.category_header(), Some("Categoria"));
        assert_eq!(table.data_headers(), ["Ola 1", "Ola 2"]);
    }

    #[test]
    fn ragged_rows_are_allowed() {
        let csv = "Categoria,Ola 1,Ola 2\nEnergia,30\n";
        let table = RawTable::parse(csv).unwrap();
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.cell(0, 1), Some("30"));
        assert_eq!(table.cell(0, 2), None);
    }

    #[test]
    fn header_only_input_is_empty() {
        let table = RawTable::parse("Categoria,Ola 1\n").unwrap();
        assert!(table.is_empty());
        assert_eq!(table.column_count(), 2);
    }

    #[test]
    fn zero_byte_input_has_no_columns() {
        let table = RawTable::parse("").unwrap();
        assert!(table.is_empty());
        assert_eq!(table.column_count(), 0);
        assert_eq!(table.category_header(), None);
        assert!(table.data_headers().is_empty());
    }
}
