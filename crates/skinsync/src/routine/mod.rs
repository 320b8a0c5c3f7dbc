//! Rule-based AM/PM routine composition.

pub mod domain;
mod rules;

pub use domain::{
    Allergy, Choice, Routine, RoutineStep, RoutineStepKind, SkinConcern, SkinType, UnknownChoice,
    UserProfile,
};

use rules::{ALLERGY_QUALIFIERS, ROUTINE_RULES};
use tracing::debug;

/// Builds the morning and evening routine for a profile.
///
/// Pure and deterministic. Rules only ever append, so adding a concern never
/// removes or rewrites a step another rule contributed. Allergy qualifiers are
/// applied afterwards to every step of both phases.
pub fn compose(profile: &UserProfile) -> Routine {
    let mut routine = Routine::default();
    let mut fired = Vec::new();

    for rule in ROUTINE_RULES {
        if !rule.applies_to(profile) {
            continue;
        }

        if let Some(step) = rule.morning {
            routine.morning.push(RoutineStep::new(step));
        }
        if let Some(step) = rule.evening {
            routine.evening.push(RoutineStep::new(step));
        }
        fired.push(rule.key);
    }

    for (allergy, qualifier) in ALLERGY_QUALIFIERS {
        if profile.is_allergic_to(*allergy) {
            routine
                .steps_mut()
                .for_each(|step| step.qualify(qualifier));
        }
    }

    debug!(
        skin_type = profile.skin_type.id(),
        rules = ?fired,
        morning = routine.morning.len(),
        evening = routine.evening.len(),
        "composed routine"
    );

    routine
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_profile_gets_the_baseline() {
        let routine = compose(&UserProfile::new(SkinType::Normal));
        assert_eq!(
            routine.morning,
            vec![
                "🧼 Gentle Cleanser (e.g. Cetaphil, CeraVe)",
                "🧴 Light Moisturizer (non-comedogenic)",
                "🧿 Broad Spectrum SPF 50 Sunscreen",
            ]
        );
        assert_eq!(
            routine.evening,
            vec!["🧼 Gentle Cleanser", "🧴 Barrier-repair Moisturizer"]
        );
    }

    #[test]
    fn concerns_without_rules_add_nothing() {
        let baseline = compose(&UserProfile::new(SkinType::Dry));
        let profile = UserProfile::new(SkinType::Dry)
            .with_concern(SkinConcern::Redness)
            .with_concern(SkinConcern::Aging)
            .with_concern(SkinConcern::Texture);
        assert_eq!(compose(&profile), baseline);
    }

    #[test]
    fn other_allergies_leave_steps_unqualified() {
        let baseline = compose(&UserProfile::new(SkinType::Sensitive));
        let profile = UserProfile::new(SkinType::Sensitive)
            .with_allergy(Allergy::Parabens)
            .with_allergy(Allergy::Alcohol)
            .with_allergy(Allergy::None);
        assert_eq!(compose(&profile), baseline);
    }

    #[test]
    fn skin_type_does_not_change_the_routine() {
        let oily = compose(&UserProfile::new(SkinType::Oily).with_concern(SkinConcern::Acne));
        let dry = compose(&UserProfile::new(SkinType::Dry).with_concern(SkinConcern::Acne));
        assert_eq!(oily, dry);
    }
}
