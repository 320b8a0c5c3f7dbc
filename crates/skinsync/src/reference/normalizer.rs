/// Lookup key shared by the loader and the screener.
pub(crate) fn ingredient_key(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.to_lowercase()
}

/// Placeholder cells that spreadsheet exports leave behind for missing ratings.
pub(crate) fn is_missing_rating(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("nan")
        || trimmed.eq_ignore_ascii_case("n/a")
        || trimmed.eq_ignore_ascii_case("null")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_folds_case_and_collapses_whitespace() {
        assert_eq!(ingredient_key("\u{feff}  Zinc   PCA "), "zinc pca");
        assert_eq!(ingredient_key("Isopropyl Myristate"), "isopropyl myristate");
    }

    #[test]
    fn recognises_missing_rating_markers() {
        assert!(is_missing_rating(""));
        assert!(is_missing_rating(" NaN "));
        assert!(is_missing_rating("N/A"));
        assert!(!is_missing_rating("0"));
        assert!(!is_missing_rating("0-1"));
    }
}
