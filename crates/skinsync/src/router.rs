use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::chatbot::ChatbotPanel;
use crate::error::AppError;
use crate::reference::ReferenceStatus;
use crate::routine::{
    Allergy, Choice, RoutineStep, RoutineStepKind, SkinConcern, SkinType, UserProfile,
};
use crate::screening::ScreeningResult;
use crate::service::SkincareService;

/// Router builder exposing the routine, screening, and chatbot endpoints.
pub fn skincare_router(service: Arc<SkincareService>) -> Router {
    Router::new()
        .route("/api/v1/routine", post(routine_handler))
        .route("/api/v1/ingredients/check", post(ingredient_check_handler))
        .route("/api/v1/chatbot", get(chatbot_handler))
        .route("/api/v1/form/options", get(form_options_handler))
        .route("/api/v1/reference", get(reference_handler))
        .with_state(service)
}

#[derive(Debug, Serialize)]
pub struct RoutineResponse {
    pub skin_type: &'static str,
    pub morning: Vec<RoutineStep>,
    pub evening: Vec<RoutineStep>,
    pub current_products: String,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct IngredientCheckRequest {
    #[serde(default)]
    pub ingredients: String,
    /// Accepted for display; product lookup is not connected.
    #[serde(default)]
    pub product_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct IngredientCheckResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    pub matches: Vec<ScreeningResult>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unmatched: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ChoiceView {
    pub id: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct FormOptions {
    pub skin_types: Vec<ChoiceView>,
    pub concerns: Vec<ChoiceView>,
    pub current_routine: Vec<ChoiceView>,
    pub allergies: Vec<ChoiceView>,
}

impl FormOptions {
    pub fn standard() -> Self {
        Self {
            skin_types: views::<SkinType>(),
            concerns: views::<SkinConcern>(),
            current_routine: views::<RoutineStepKind>(),
            allergies: views::<Allergy>(),
        }
    }
}

fn views<C: Choice>() -> Vec<ChoiceView> {
    C::all()
        .iter()
        .map(|choice| ChoiceView {
            id: choice.id(),
            label: choice.label(),
        })
        .collect()
}

pub(crate) async fn routine_handler(
    State(service): State<Arc<SkincareService>>,
    Json(profile): Json<UserProfile>,
) -> Json<RoutineResponse> {
    let routine = service.compose_routine(&profile);

    Json(RoutineResponse {
        skin_type: profile.skin_type.label(),
        morning: routine.morning,
        evening: routine.evening,
        current_products: profile.current_products,
        generated_at: Utc::now(),
    })
}

pub(crate) async fn ingredient_check_handler(
    State(service): State<Arc<SkincareService>>,
    Json(request): Json<IngredientCheckRequest>,
) -> Result<Json<IngredientCheckResponse>, AppError> {
    let IngredientCheckRequest {
        ingredients,
        product_name,
    } = request;

    let report = service.check_ingredients(&ingredients)?;
    let message = report.message();

    Ok(Json(IngredientCheckResponse {
        product_name: product_name.filter(|name| !name.trim().is_empty()),
        matches: report.matches,
        unmatched: report.unmatched,
        message,
        warning: service.reference_status().warning,
        generated_at: Utc::now(),
    }))
}

pub(crate) async fn chatbot_handler(
    State(service): State<Arc<SkincareService>>,
) -> Json<ChatbotPanel> {
    Json(service.chatbot())
}

pub(crate) async fn form_options_handler() -> Json<FormOptions> {
    Json(FormOptions::standard())
}

pub(crate) async fn reference_handler(
    State(service): State<Arc<SkincareService>>,
) -> Json<ReferenceStatus> {
    Json(service.reference_status())
}
