//! Cell splitting for pipe-delimited table lines.

/// Split a `|`-delimited line into trimmed cells.
///
/// The fields produced by the outer pipes are dropped only when empty, so
/// a row without a trailing pipe keeps its final cell.
pub fn split_cells(line: &str) -> Vec<String> {
    let mut fields: Vec<&str> = line.split('|').collect();
    if fields.first().is_some_and(|f| f.trim().is_empty()) {
        fields.remove(0);
    }
    if fields.last().is_some_and(|f| f.trim().is_empty()) {
        fields.pop();
    }
    fields.into_iter().map(|f| f.trim().to_string()).collect()
}

/// Check whether cells form a header separator row: every cell, after
/// stripping `-` and `:` characters, is empty.
pub fn is_separator_row(cells: &[String]) -> bool {
    !cells.is_empty()
        && cells
            .iter()
            .all(|c| c.chars().all(|ch| matches!(ch, '-' | ':')))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_cells_outer_pipes() {
        assert_eq!(split_cells("| a | b |"), vec!["a", "b"]);
        assert_eq!(split_cells("|a|b|"), vec!["a", "b"]);
    }

    #[test]
    fn test_split_cells_no_trailing_pipe() {
        assert_eq!(split_cells("| a | b"), vec!["a", "b"]);
    }

    #[test]
    fn test_split_cells_embedded_empty() {
        assert_eq!(split_cells("| a || b |"), vec!["a", "", "b"]);
    }

    #[test]
    fn test_separator_row() {
        assert!(is_separator_row(&split_cells("|---|---|")));
        assert!(is_separator_row(&split_cells("| :---: | ---: |")));
        assert!(!is_separator_row(&split_cells("| a | --- |")));
        assert!(!is_separator_row(&[]));
    }
}
