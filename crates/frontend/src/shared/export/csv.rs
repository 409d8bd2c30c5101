//! CSV serialization of list views.
//!
//! Exports always cover the currently *filtered* list, not the visible page.

/// Types exportable as CSV rows.
pub trait CsvExportable {
    /// Column headers, in row order.
    fn headers() -> Vec<&'static str>;

    /// One row of cell values.
    fn to_csv_row(&self) -> Vec<String>;
}

/// Serialize rows to CSV text: UTF-8 BOM, header line, one line per row.
pub fn to_csv<T: CsvExportable>(rows: &[T]) -> String {
    let mut csv = String::new();

    // UTF-8 BOM so Excel picks the right encoding
    csv.push('\u{FEFF}');

    csv.push_str(&join_row(
        &T::headers().iter().map(|h| h.to_string()).collect::<Vec<_>>(),
    ));
    csv.push('\n');

    for row in rows {
        csv.push_str(&join_row(&row.to_csv_row()));
        csv.push('\n');
    }

    csv
}

fn join_row(cells: &[String]) -> String {
    cells
        .iter()
        .map(|cell| escape_csv_cell(cell))
        .collect::<Vec<_>>()
        .join(",")
}

/// Quote a cell when it contains the separator, quotes, or newlines;
/// inner quotes are doubled.
fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(',') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row(Vec<String>);

    impl CsvExportable for Row {
        fn headers() -> Vec<&'static str> {
            vec!["Order Id", "Customer", "Total"]
        }
        fn to_csv_row(&self) -> Vec<String> {
            self.0.clone()
        }
    }

    fn row(cells: &[&str]) -> Row {
        Row(cells.iter().map(|c| c.to_string()).collect())
    }

    #[test]
    fn two_rows_produce_three_lines() {
        let csv = to_csv(&[
            row(&["ord-1", "Asha Verma", "80.00"]),
            row(&["ord-2", "Ravi Kumar", "145.00"]),
        ]);
        assert_eq!(csv.lines().count(), 3);
        assert!(csv.starts_with('\u{FEFF}'));
        assert!(csv.contains("ord-2,Ravi Kumar,145.00"));
    }

    #[test]
    fn cells_with_separators_are_quoted() {
        let csv = to_csv(&[row(&["ord-1", "Verma, Asha", "80.00"])]);
        assert!(csv.contains("ord-1,\"Verma, Asha\",80.00"));
        // still one header line and one data line
        assert_eq!(csv.lines().count(), 2);
    }

    #[test]
    fn inner_quotes_are_doubled() {
        let csv = to_csv(&[row(&["ord-1", "the \"Quick\" pharmacy", "1.00"])]);
        assert!(csv.contains("\"the \"\"Quick\"\" pharmacy\""));
    }

    #[test]
    fn empty_list_is_header_only() {
        let csv = to_csv::<Row>(&[]);
        assert_eq!(csv.lines().count(), 1);
    }
}
