use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Fixed set of form choices with a wire id and a display label.
pub trait Choice: Copy + Sized + 'static {
    const FIELD: &'static str;

    fn all() -> &'static [Self];
    fn id(self) -> &'static str;
    fn label(self) -> &'static str;

    /// Accepts either the id or the label, ignoring case and surrounding whitespace.
    fn parse(raw: &str) -> Result<Self, UnknownChoice> {
        let wanted = raw.trim();
        Self::all()
            .iter()
            .copied()
            .find(|choice| {
                choice.id().eq_ignore_ascii_case(wanted)
                    || choice.label().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| UnknownChoice {
                field: Self::FIELD,
                value: wanted.to_string(),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{value}' is not a recognised {field}")]
pub struct UnknownChoice {
    pub field: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkinType {
    Dry,
    Oily,
    Combination,
    Sensitive,
    Normal,
}

impl Choice for SkinType {
    const FIELD: &'static str = "skin type";

    fn all() -> &'static [Self] {
        &[
            Self::Dry,
            Self::Oily,
            Self::Combination,
            Self::Sensitive,
            Self::Normal,
        ]
    }

    fn id(self) -> &'static str {
        match self {
            Self::Dry => "dry",
            Self::Oily => "oily",
            Self::Combination => "combination",
            Self::Sensitive => "sensitive",
            Self::Normal => "normal",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Dry => "Dry",
            Self::Oily => "Oily",
            Self::Combination => "Combination",
            Self::Sensitive => "Sensitive",
            Self::Normal => "Normal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkinConcern {
    Acne,
    Pigmentation,
    Redness,
    Dehydration,
    Aging,
    Texture,
}

impl Choice for SkinConcern {
    const FIELD: &'static str = "skin concern";

    fn all() -> &'static [Self] {
        &[
            Self::Acne,
            Self::Pigmentation,
            Self::Redness,
            Self::Dehydration,
            Self::Aging,
            Self::Texture,
        ]
    }

    fn id(self) -> &'static str {
        match self {
            Self::Acne => "acne",
            Self::Pigmentation => "pigmentation",
            Self::Redness => "redness",
            Self::Dehydration => "dehydration",
            Self::Aging => "aging",
            Self::Texture => "texture",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Acne => "Acne",
            Self::Pigmentation => "Pigmentation",
            Self::Redness => "Redness",
            Self::Dehydration => "Dehydration",
            Self::Aging => "Aging",
            Self::Texture => "Texture",
        }
    }
}

/// Steps a user may already have in their routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoutineStepKind {
    Cleanser,
    Moisturizer,
    Sunscreen,
    Toner,
    Exfoliator,
    Serums,
    Mask,
}

impl Choice for RoutineStepKind {
    const FIELD: &'static str = "routine step";

    fn all() -> &'static [Self] {
        &[
            Self::Cleanser,
            Self::Moisturizer,
            Self::Sunscreen,
            Self::Toner,
            Self::Exfoliator,
            Self::Serums,
            Self::Mask,
        ]
    }

    fn id(self) -> &'static str {
        match self {
            Self::Cleanser => "cleanser",
            Self::Moisturizer => "moisturizer",
            Self::Sunscreen => "sunscreen",
            Self::Toner => "toner",
            Self::Exfoliator => "exfoliator",
            Self::Serums => "serums",
            Self::Mask => "mask",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Cleanser => "Cleanser/Face-wash",
            Self::Moisturizer => "Moisturizer",
            Self::Sunscreen => "SPF/Sunscreen",
            Self::Toner => "Toner",
            Self::Exfoliator => "Exfoliator",
            Self::Serums => "Serums",
            Self::Mask => "Mask",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Allergy {
    Fragrance,
    EssentialOils,
    Parabens,
    Alcohol,
    None,
}

impl Choice for Allergy {
    const FIELD: &'static str = "allergy";

    fn all() -> &'static [Self] {
        &[
            Self::Fragrance,
            Self::EssentialOils,
            Self::Parabens,
            Self::Alcohol,
            Self::None,
        ]
    }

    fn id(self) -> &'static str {
        match self {
            Self::Fragrance => "fragrance",
            Self::EssentialOils => "essential_oils",
            Self::Parabens => "parabens",
            Self::Alcohol => "alcohol",
            Self::None => "none",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Fragrance => "Fragrance",
            Self::EssentialOils => "Essential Oils",
            Self::Parabens => "Parabens",
            Self::Alcohol => "Alcohol",
            Self::None => "None",
        }
    }
}

/// One form submission. Not persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub skin_type: SkinType,
    #[serde(default)]
    pub concerns: BTreeSet<SkinConcern>,
    #[serde(default)]
    pub current_routine: BTreeSet<RoutineStepKind>,
    #[serde(default)]
    pub allergies: BTreeSet<Allergy>,
    /// Display-only; no rule reads it.
    #[serde(default)]
    pub current_products: String,
}

impl UserProfile {
    pub fn new(skin_type: SkinType) -> Self {
        Self {
            skin_type,
            concerns: BTreeSet::new(),
            current_routine: BTreeSet::new(),
            allergies: BTreeSet::new(),
            current_products: String::new(),
        }
    }

    pub fn with_concern(mut self, concern: SkinConcern) -> Self {
        self.concerns.insert(concern);
        self
    }

    pub fn with_current_step(mut self, step: RoutineStepKind) -> Self {
        self.current_routine.insert(step);
        self
    }

    pub fn with_allergy(mut self, allergy: Allergy) -> Self {
        self.allergies.insert(allergy);
        self
    }

    pub fn has_concern(&self, concern: SkinConcern) -> bool {
        self.concerns.contains(&concern)
    }

    pub fn already_uses(&self, step: RoutineStepKind) -> bool {
        self.current_routine.contains(&step)
    }

    pub fn is_allergic_to(&self, allergy: Allergy) -> bool {
        self.allergies.contains(&allergy)
    }
}

/// Annotated step text, serialized as a plain string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoutineStep(String);

impl RoutineStep {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn text(&self) -> &str {
        &self.0
    }

    pub(crate) fn qualify(&mut self, qualifier: &str) {
        self.0.push_str(" (");
        self.0.push_str(qualifier);
        self.0.push(')');
    }
}

impl fmt::Display for RoutineStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for RoutineStep {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Morning and evening step lists in rule order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Routine {
    pub morning: Vec<RoutineStep>,
    pub evening: Vec<RoutineStep>,
}

impl Routine {
    pub fn is_empty(&self) -> bool {
        self.morning.is_empty() && self.evening.is_empty()
    }

    pub fn steps_mut(&mut self) -> impl Iterator<Item = &mut RoutineStep> {
        self.morning.iter_mut().chain(self.evening.iter_mut())
    }
}
