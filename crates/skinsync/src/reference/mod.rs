//! Comedogenic ingredient reference table.
//!
//! The table is read once at startup and never mutated afterwards. Loading
//! never fails: a missing or unreadable file yields an empty table that
//! carries a [`ReferenceWarning`] for the user-facing surfaces to display.

mod normalizer;
mod parser;

pub(crate) use normalizer::ingredient_key;

use serde::Serialize;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

/// One row of the comedogenic reference table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngredientRecord {
    pub name: String,
    pub acne_rating: Option<String>,
    pub irritant_rating: Option<String>,
    pub safety_rating: Option<String>,
}

/// Failure to parse a reference source.
#[derive(Debug, thiserror::Error)]
pub enum ReferenceError {
    #[error("failed to read reference table: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid reference CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("reference table is missing the '{0}' column")]
    MissingColumn(&'static str),
}

/// Non-fatal condition raised while loading the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReferenceWarning {
    MissingReferenceResource { path: String },
    UnreadableReferenceResource { path: String, reason: String },
}

impl ReferenceWarning {
    pub fn message(&self) -> String {
        match self {
            Self::MissingReferenceResource { .. } => {
                "Comedogenic ingredient database not found!".to_string()
            }
            Self::UnreadableReferenceResource { reason, .. } => {
                format!("Comedogenic ingredient database could not be read: {reason}")
            }
        }
    }
}

/// Summary used by status endpoints and the CLI banner.
#[derive(Debug, Clone, Serialize)]
pub struct ReferenceStatus {
    pub records: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// Read-only ingredient table keyed by case-folded name.
#[derive(Debug, Clone, Default)]
pub struct ReferenceTable {
    records: Vec<IngredientRecord>,
    index: HashMap<String, usize>,
    warning: Option<ReferenceWarning>,
}

impl ReferenceTable {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<IngredientRecord>) -> Self {
        let mut index = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            // First occurrence wins for duplicated names.
            index.entry(ingredient_key(&record.name)).or_insert(position);
        }

        Self {
            records,
            index,
            warning: None,
        }
    }

    /// Parses a CSV source with at least `Ingredient` and `Acne Rating` columns.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ReferenceError> {
        let parsed = parser::parse_rows(reader)?;
        if parsed.skipped > 0 {
            warn!(skipped = parsed.skipped, "ignored unusable reference rows");
        }
        Ok(Self::from_records(parsed.records))
    }

    /// Loads the table from disk, degrading to an empty table with a warning.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        let shown = path.display().to_string();

        let file = match std::fs::File::open(path) {
            Ok(file) => file,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                warn!(path = %shown, "comedogenic ingredient database not found");
                return Self::degraded(ReferenceWarning::MissingReferenceResource {
                    path: shown,
                });
            }
            Err(err) => {
                warn!(path = %shown, error = %err, "comedogenic ingredient database unreadable");
                return Self::degraded(ReferenceWarning::UnreadableReferenceResource {
                    path: shown,
                    reason: err.to_string(),
                });
            }
        };

        match Self::from_reader(file) {
            Ok(table) => {
                info!(path = %shown, records = table.len(), "loaded ingredient reference table");
                table
            }
            Err(err) => {
                warn!(path = %shown, error = %err, "comedogenic ingredient database unreadable");
                Self::degraded(ReferenceWarning::UnreadableReferenceResource {
                    path: shown,
                    reason: err.to_string(),
                })
            }
        }
    }

    fn degraded(warning: ReferenceWarning) -> Self {
        Self {
            warning: Some(warning),
            ..Self::default()
        }
    }

    /// Exact lookup on the normalized key.
    pub fn get(&self, name: &str) -> Option<&IngredientRecord> {
        self.index
            .get(&ingredient_key(name))
            .map(|&position| &self.records[position])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(&ingredient_key(name))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn warning(&self) -> Option<&ReferenceWarning> {
        self.warning.as_ref()
    }

    pub fn status(&self) -> ReferenceStatus {
        ReferenceStatus {
            records: self.len(),
            warning: self.warning.as_ref().map(ReferenceWarning::message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const SAMPLE: &str = "Ingredient,Acne Rating,Irritant Rating,Safety Rating\n\
Coconut Oil,4,,\n\
Isopropyl Myristate,5,3,Low\n\
coconut oil,1,0,High\n";

    #[test]
    fn parses_rows_and_treats_blank_ratings_as_absent() {
        let table = ReferenceTable::from_reader(Cursor::new(SAMPLE)).expect("table parses");
        assert_eq!(table.len(), 3);

        let coconut = table.get("COCONUT OIL").expect("coconut oil indexed");
        assert_eq!(coconut.acne_rating.as_deref(), Some("4"));
        assert_eq!(coconut.irritant_rating, None);
        assert_eq!(coconut.safety_rating, None);
        assert!(table.warning().is_none());
    }

    #[test]
    fn first_duplicate_wins() {
        let table = ReferenceTable::from_reader(Cursor::new(SAMPLE)).expect("table parses");
        let coconut = table.get("coconut oil").expect("coconut oil indexed");
        assert_eq!(coconut.name, "Coconut Oil");
        assert_eq!(coconut.acne_rating.as_deref(), Some("4"));
    }

    #[test]
    fn optional_columns_may_be_absent() {
        let csv = "Ingredient,Acne Rating\nLanolin,2\n";
        let table = ReferenceTable::from_reader(Cursor::new(csv)).expect("table parses");
        let lanolin = table.get("lanolin").expect("lanolin indexed");
        assert_eq!(lanolin.acne_rating.as_deref(), Some("2"));
        assert!(lanolin.irritant_rating.is_none());
    }

    #[test]
    fn nan_cells_are_treated_as_missing() {
        let csv = "Ingredient,Acne Rating,Irritant Rating,Safety Rating\nSqualane,1,NaN,nan\n";
        let table = ReferenceTable::from_reader(Cursor::new(csv)).expect("table parses");
        let squalane = table.get("squalane").expect("squalane indexed");
        assert!(squalane.irritant_rating.is_none());
        assert!(squalane.safety_rating.is_none());
    }

    #[test]
    fn rows_without_an_ingredient_are_skipped() {
        let csv = "Ingredient,Acne Rating\n,3\nShea Butter,0\n";
        let table = ReferenceTable::from_reader(Cursor::new(csv)).expect("table parses");
        assert_eq!(table.len(), 1);
        assert!(table.contains("shea butter"));
    }

    #[test]
    fn missing_required_column_is_an_error() {
        let csv = "Ingredient,Irritant Rating\nLanolin,2\n";
        match ReferenceTable::from_reader(Cursor::new(csv)) {
            Err(ReferenceError::MissingColumn(column)) => assert_eq!(column, "Acne Rating"),
            other => panic!("expected missing column error, got {other:?}"),
        }
    }

    #[test]
    fn load_of_missing_file_degrades_to_empty_table() {
        let table = ReferenceTable::load("./does-not-exist/ratings.csv");
        assert!(table.is_empty());
        match table.warning() {
            Some(ReferenceWarning::MissingReferenceResource { path }) => {
                assert!(path.ends_with("ratings.csv"));
            }
            other => panic!("expected missing resource warning, got {other:?}"),
        }
        assert_eq!(
            table.status().warning.as_deref(),
            Some("Comedogenic ingredient database not found!")
        );
    }
}
