//! Live text filter for report tables.

/// Whether a row with this text stays visible for the query.
///
/// Case-insensitive substring match; an empty query matches every row.
pub fn row_matches(row_text: &str, query: &str) -> bool {
    row_text.to_lowercase().contains(&query.to_lowercase())
}

/// Visibility for each row of a table, header included.
///
/// The first row is the header and is always visible.
pub fn row_visibility<S: AsRef<str>>(rows: &[S], query: &str) -> Vec<bool> {
    let query = query.to_lowercase();
    rows.iter()
        .enumerate()
        .map(|(index, text)| index == 0 || row_matches(text.as_ref(), &query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROWS: [&str; 4] = ["ID Status", "1 Changed", "2 Unchanged", "3 Removed"];

    #[test]
    fn test_empty_query_shows_all() {
        assert_eq!(row_visibility(&ROWS, ""), vec![true; 4]);
    }

    #[test]
    fn test_unmatched_query_hides_body_rows() {
        assert_eq!(
            row_visibility(&ROWS, "nothing"),
            vec![true, false, false, false]
        );
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            row_visibility(&ROWS, "CHANGED"),
            vec![true, true, true, false]
        );
        assert!(row_matches("PII 주석 변경", "주석"));
    }

    #[test]
    fn test_header_only_table() {
        assert_eq!(row_visibility(&["header"], "zzz"), vec![true]);
        assert!(row_visibility::<&str>(&[], "a").is_empty());
    }
}
