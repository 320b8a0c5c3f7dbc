use clap::Args;
use skinsync::config::AppConfig;
use skinsync::error::AppError;
use skinsync::reference::ReferenceTable;
use skinsync::routine::{
    Allergy, Choice, Routine, RoutineStepKind, SkinConcern, SkinType, UserProfile,
};
use skinsync::screening::{
    ScreeningError, ScreeningOptions, ScreeningReport, EMPTY_INPUT_PROMPT,
};
use skinsync::SkincareService;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct RoutineArgs {
    /// Skin type (dry, oily, combination, sensitive, normal)
    #[arg(long, value_parser = <SkinType as Choice>::parse)]
    pub(crate) skin_type: SkinType,
    /// Main skin concern; repeat for several
    #[arg(long = "concern", value_parser = <SkinConcern as Choice>::parse)]
    pub(crate) concerns: Vec<SkinConcern>,
    /// Step already in the current routine; repeat for several
    #[arg(long = "current-step", value_parser = <RoutineStepKind as Choice>::parse)]
    pub(crate) current_steps: Vec<RoutineStepKind>,
    /// Allergy or ingredient sensitivity; repeat for several
    #[arg(long = "allergy", value_parser = <Allergy as Choice>::parse)]
    pub(crate) allergies: Vec<Allergy>,
    /// Products currently in use (shown back, not used by the rules)
    #[arg(long)]
    pub(crate) products: Option<String>,
}

impl RoutineArgs {
    pub(crate) fn profile(&self) -> UserProfile {
        UserProfile {
            skin_type: self.skin_type,
            concerns: self.concerns.iter().copied().collect(),
            current_routine: self.current_steps.iter().copied().collect(),
            allergies: self.allergies.iter().copied().collect(),
            current_products: self.products.clone().unwrap_or_default(),
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct CheckArgs {
    /// Comma-separated ingredient list, e.g. "Water, Niacinamide, Zinc PCA"
    #[arg(long)]
    pub(crate) ingredients: String,
    /// Product name (not yet connected to web scraping)
    #[arg(long)]
    pub(crate) product_name: Option<String>,
    /// Override the configured comedogenic reference CSV
    #[arg(long)]
    pub(crate) reference: Option<PathBuf>,
    /// Also list ingredients that are not in the reference table
    #[arg(long)]
    pub(crate) report_unmatched: bool,
}

pub(crate) fn run_routine(args: RoutineArgs) -> Result<(), AppError> {
    let profile = args.profile();
    let service = SkincareService::new(
        Arc::new(ReferenceTable::empty()),
        ScreeningOptions::default(),
    );
    let routine = service.compose_routine(&profile);

    print!("{}", render_routine(&profile, &routine));
    Ok(())
}

pub(crate) fn run_check(args: CheckArgs) -> Result<(), AppError> {
    let CheckArgs {
        ingredients,
        product_name,
        reference,
        report_unmatched,
    } = args;

    let config = AppConfig::load()?;
    let path = reference.unwrap_or(config.reference.path);
    let table = ReferenceTable::load(&path);
    if let Some(warning) = table.warning() {
        println!("⚠️ {}", warning.message());
    }

    let options = ScreeningOptions {
        report_unmatched: report_unmatched || config.reference.report_unmatched,
    };
    let service = SkincareService::new(Arc::new(table), options);
    print!("{}", render_check(&service, &ingredients, product_name.as_deref()));
    Ok(())
}

/// Screening output for the CLI. A blank list prints the input prompt.
pub(crate) fn render_check(
    service: &SkincareService,
    ingredients: &str,
    product_name: Option<&str>,
) -> String {
    let report = match service.check_ingredients(ingredients) {
        Ok(report) => report,
        Err(ScreeningError::EmptyInput) => return format!("{EMPTY_INPUT_PROMPT}\n"),
    };

    let mut out = String::new();
    if let Some(name) = product_name.map(str::trim).filter(|name| !name.is_empty()) {
        out.push_str(&format!("Product: {name}\n"));
    }
    out.push_str(&render_report(&report));
    out
}

pub(crate) fn render_routine(profile: &UserProfile, routine: &Routine) -> String {
    let mut out = String::from("🌞 Your Personalized Skincare Routine\n");
    out.push_str(&format!("Skin type: {}\n", profile.skin_type.label()));
    let products = profile.current_products.trim();
    if !products.is_empty() {
        out.push_str(&format!("Current products: {products}\n"));
    }

    out.push_str("\n🌅 Morning Routine (AM)\n");
    for step in &routine.morning {
        out.push_str(&format!("- {step}\n"));
    }

    out.push_str("\n🌙 Night Routine (PM)\n");
    for step in &routine.evening {
        out.push_str(&format!("- {step}\n"));
    }

    out
}

pub(crate) fn render_report(report: &ScreeningReport) -> String {
    let mut out = String::from("🔍 Comedogenic Ingredient Analysis\n");

    match report.message() {
        Some(message) => out.push_str(&format!("{message}\n")),
        None => {
            for result in &report.matches {
                out.push_str(&format!(
                    "- **{}** → Acne: `{}`, Irritant: `{}`, Safety: `{}`\n",
                    result.ingredient,
                    result.acne_rating,
                    result.irritant_rating,
                    result.safety_rating
                ));
            }
        }
    }

    if !report.unmatched.is_empty() {
        out.push_str(&format!(
            "Not in reference table: {}\n",
            report.unmatched.join(", ")
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use skinsync::reference::IngredientRecord;
    use skinsync::routine::compose;
    use skinsync::screening::screen_with;

    #[test]
    fn routine_rendering_lists_both_phases() {
        let profile = UserProfile::new(SkinType::Dry).with_allergy(Allergy::Fragrance);
        let rendered = render_routine(&profile, &compose(&profile));

        assert!(rendered.contains(
            "🌅 Morning Routine (AM)\n- 🧼 Gentle Cleanser (e.g. Cetaphil, CeraVe) (Fragrance-Free)\n"
        ));
        assert!(rendered.contains("🌙 Night Routine (PM)\n- 🧼 Gentle Cleanser (Fragrance-Free)\n"));
        assert!(!rendered.contains("Current products"));
    }

    #[test]
    fn report_rendering_formats_matches() {
        let table = ReferenceTable::from_records(vec![IngredientRecord {
            name: "coconut oil".to_string(),
            acne_rating: Some("4".to_string()),
            irritant_rating: None,
            safety_rating: None,
        }]);
        let report = screen_with("Water, Coconut Oil", &table, ScreeningOptions::default())
            .expect("screening runs");

        let rendered = render_report(&report);
        assert!(rendered
            .contains("- **Coconut Oil** → Acne: `4`, Irritant: `N/A`, Safety: `N/A`\n"));
        assert!(!rendered.contains("Water"));
    }

    #[test]
    fn report_rendering_confirms_clean_lists() {
        let report = ScreeningReport::default();
        let rendered = render_report(&report);
        assert!(rendered.contains("✅ No comedogenic ingredients found in the provided list."));
    }

    fn coconut_service() -> SkincareService {
        let table = ReferenceTable::from_records(vec![IngredientRecord {
            name: "coconut oil".to_string(),
            acne_rating: Some("4".to_string()),
            irritant_rating: None,
            safety_rating: None,
        }]);
        SkincareService::new(Arc::new(table), ScreeningOptions::default())
    }

    #[test]
    fn blank_ingredient_list_prints_the_prompt() {
        let rendered = render_check(&coconut_service(), "  ", Some("Daily Gel"));
        assert_eq!(rendered, "Please paste the ingredient list to proceed.\n");
    }

    #[test]
    fn check_output_names_the_product_before_the_analysis() {
        let rendered = render_check(&coconut_service(), "Water, Coconut Oil", Some(" Daily Gel "));
        assert!(rendered.starts_with("Product: Daily Gel\n🔍 Comedogenic Ingredient Analysis\n"));
        assert!(rendered.contains("- **Coconut Oil** → Acne: `4`"));

        let unnamed = render_check(&coconut_service(), "Water", Some("  "));
        assert!(!unnamed.contains("Product:"));
    }
}
