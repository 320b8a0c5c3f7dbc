//! Comedogenic screening of a pasted ingredient list.

use crate::reference::{ingredient_key, IngredientRecord, ReferenceTable};
use serde::Serialize;
use tracing::debug;

/// Marker shown for ratings the reference table leaves blank.
pub const MISSING_RATING: &str = "N/A";

/// Confirmation rendered when nothing in the list is in the table.
pub const NO_MATCH_MESSAGE: &str = "✅ No comedogenic ingredients found in the provided list.";

/// Prompt returned instead of a result when the list is blank.
pub const EMPTY_INPUT_PROMPT: &str = "Please paste the ingredient list to proceed.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScreeningError {
    #[error("Please paste the ingredient list to proceed.")]
    EmptyInput,
}

/// Ratings of one listed ingredient found in the reference table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreeningResult {
    pub ingredient: String,
    pub acne_rating: String,
    pub irritant_rating: String,
    pub safety_rating: String,
}

impl ScreeningResult {
    fn from_record(token: &str, record: &IngredientRecord) -> Self {
        Self {
            ingredient: title_case(token),
            acne_rating: rating_or_missing(record.acne_rating.as_deref()),
            irritant_rating: rating_or_missing(record.irritant_rating.as_deref()),
            safety_rating: rating_or_missing(record.safety_rating.as_deref()),
        }
    }
}

fn rating_or_missing(rating: Option<&str>) -> String {
    rating.unwrap_or(MISSING_RATING).to_string()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreeningOptions {
    /// Also list the tokens that had no match. Off by default: misses are dropped silently.
    pub report_unmatched: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScreeningReport {
    pub matches: Vec<ScreeningResult>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unmatched: Vec<String>,
}

impl ScreeningReport {
    pub fn has_matches(&self) -> bool {
        !self.matches.is_empty()
    }

    /// Positive confirmation for a clean list.
    pub fn message(&self) -> Option<&'static str> {
        if self.has_matches() {
            None
        } else {
            Some(NO_MATCH_MESSAGE)
        }
    }
}

/// Matches each comma-separated entry against the table, keeping input order.
///
/// Entries without an exact (case-folded) match produce no output.
pub fn screen(raw: &str, table: &ReferenceTable) -> Result<Vec<ScreeningResult>, ScreeningError> {
    screen_with(raw, table, ScreeningOptions::default()).map(|report| report.matches)
}

pub fn screen_with(
    raw: &str,
    table: &ReferenceTable,
    options: ScreeningOptions,
) -> Result<ScreeningReport, ScreeningError> {
    if raw.trim().is_empty() {
        return Err(ScreeningError::EmptyInput);
    }

    let mut report = ScreeningReport::default();
    for token in tokens(raw) {
        match table.get(&token) {
            Some(record) => report
                .matches
                .push(ScreeningResult::from_record(&token, record)),
            None if options.report_unmatched => report.unmatched.push(title_case(&token)),
            None => {}
        }
    }

    debug!(
        matched = report.matches.len(),
        unmatched = report.unmatched.len(),
        table_records = table.len(),
        "screened ingredient list"
    );

    Ok(report)
}

fn tokens(raw: &str) -> impl Iterator<Item = String> + '_ {
    raw.split(',')
        .map(ingredient_key)
        .filter(|token| !token.is_empty())
}

/// Upper-cases the first letter of every alphabetic run and lower-cases the rest.
pub fn title_case(value: &str) -> String {
    let mut titled = String::with_capacity(value.len());
    let mut inside_word = false;

    for ch in value.chars() {
        if ch.is_alphabetic() {
            if inside_word {
                titled.extend(ch.to_lowercase());
            } else {
                titled.extend(ch.to_uppercase());
            }
            inside_word = true;
        } else {
            titled.push(ch);
            inside_word = false;
        }
    }

    titled
}
