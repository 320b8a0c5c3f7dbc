//! SkinSync: skincare routine composition and comedogenic ingredient screening.
//!
//! [`routine::compose`] and [`screening::screen`] are pure functions; the
//! [`reference::ReferenceTable`] they read is built once and passed in
//! explicitly. The HTTP router and CLI are thin adapters over
//! [`service::SkincareService`].

pub mod chatbot;
pub mod config;
pub mod error;
pub mod reference;
pub mod router;
pub mod routine;
pub mod screening;
pub mod service;
pub mod telemetry;

pub use reference::{IngredientRecord, ReferenceTable, ReferenceWarning};
pub use router::skincare_router;
pub use routine::{compose, Routine, UserProfile};
pub use screening::{screen, screen_with, ScreeningOptions, ScreeningReport, ScreeningResult};
pub use service::SkincareService;
