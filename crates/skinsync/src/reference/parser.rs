use super::normalizer::is_missing_rating;
use super::{IngredientRecord, ReferenceError};
use serde::{Deserialize, Deserializer};
use std::io::Read;
use tracing::warn;

pub(crate) const INGREDIENT_COLUMN: &str = "Ingredient";
pub(crate) const ACNE_COLUMN: &str = "Acne Rating";

pub(crate) struct ParsedRows {
    pub(crate) records: Vec<IngredientRecord>,
    pub(crate) skipped: usize,
}

pub(crate) fn parse_rows<R: Read>(reader: R) -> Result<ParsedRows, ReferenceError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    for required in [INGREDIENT_COLUMN, ACNE_COLUMN] {
        if !headers.iter().any(|header| header == required) {
            return Err(ReferenceError::MissingColumn(required));
        }
    }

    let mut records = Vec::new();
    let mut skipped = 0;

    for (index, row) in csv_reader.deserialize::<ReferenceRow>().enumerate() {
        let row = match row {
            Ok(row) => row,
            Err(err) => {
                // Header is line 1, so data rows start at line 2.
                warn!(line = index + 2, error = %err, "skipping malformed reference row");
                skipped += 1;
                continue;
            }
        };

        match row.ingredient {
            Some(name) => records.push(IngredientRecord {
                name,
                acne_rating: row.acne_rating,
                irritant_rating: row.irritant_rating,
                safety_rating: row.safety_rating,
            }),
            None => skipped += 1,
        }
    }

    Ok(ParsedRows { records, skipped })
}

#[derive(Debug, Deserialize)]
struct ReferenceRow {
    #[serde(rename = "Ingredient", default, deserialize_with = "blank_as_none")]
    ingredient: Option<String>,
    #[serde(rename = "Acne Rating", default, deserialize_with = "rating")]
    acne_rating: Option<String>,
    #[serde(rename = "Irritant Rating", default, deserialize_with = "rating")]
    irritant_rating: Option<String>,
    #[serde(rename = "Safety Rating", default, deserialize_with = "rating")]
    safety_rating: Option<String>,
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn rating<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !is_missing_rating(value)))
}
