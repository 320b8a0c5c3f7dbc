use super::domain::{Allergy, RoutineStepKind, SkinConcern, UserProfile};

/// Profile condition that decides whether a rule fires.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Trigger {
    Missing(RoutineStepKind),
    Concern(SkinConcern),
}

impl Trigger {
    fn fires(self, profile: &UserProfile) -> bool {
        match self {
            Self::Missing(step) => !profile.already_uses(step),
            Self::Concern(concern) => profile.has_concern(concern),
        }
    }
}

/// Condition→append rule contributing at most one step per phase.
#[derive(Debug)]
pub(crate) struct RoutineRule {
    pub(crate) key: &'static str,
    pub(crate) trigger: Trigger,
    pub(crate) morning: Option<&'static str>,
    pub(crate) evening: Option<&'static str>,
}

impl RoutineRule {
    pub(crate) fn applies_to(&self, profile: &UserProfile) -> bool {
        self.trigger.fires(profile)
    }
}

/// Evaluated top to bottom; every rule is checked and all matches fire.
pub(crate) const ROUTINE_RULES: &[RoutineRule] = &[
    RoutineRule {
        key: "cleanser",
        trigger: Trigger::Missing(RoutineStepKind::Cleanser),
        morning: Some("🧼 Gentle Cleanser (e.g. Cetaphil, CeraVe)"),
        evening: Some("🧼 Gentle Cleanser"),
    },
    RoutineRule {
        key: "acne",
        trigger: Trigger::Concern(SkinConcern::Acne),
        morning: Some("💧 Niacinamide Serum"),
        evening: Some("🧪 Salicylic Acid Serum"),
    },
    RoutineRule {
        key: "pigmentation",
        trigger: Trigger::Concern(SkinConcern::Pigmentation),
        morning: Some("✨ Vitamin C Serum"),
        evening: Some("🧴 Azelaic Acid 10%"),
    },
    RoutineRule {
        key: "dehydration",
        trigger: Trigger::Concern(SkinConcern::Dehydration),
        morning: Some("💦 Hyaluronic Acid Serum"),
        evening: Some("💦 Hyaluronic Acid Serum"),
    },
    RoutineRule {
        key: "moisturizer",
        trigger: Trigger::Missing(RoutineStepKind::Moisturizer),
        morning: Some("🧴 Light Moisturizer (non-comedogenic)"),
        evening: Some("🧴 Barrier-repair Moisturizer"),
    },
    RoutineRule {
        key: "sunscreen",
        trigger: Trigger::Missing(RoutineStepKind::Sunscreen),
        morning: Some("🧿 Broad Spectrum SPF 50 Sunscreen"),
        evening: None,
    },
];

/// Qualifiers appended to every step, in this order, when the allergy is selected.
pub(crate) const ALLERGY_QUALIFIERS: &[(Allergy, &str)] = &[
    (Allergy::Fragrance, "Fragrance-Free"),
    (Allergy::EssentialOils, "No Essential Oils"),
];
