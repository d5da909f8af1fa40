//! Hospital appointment service
//!
//! Doctors and appointments held in memory, exposed over HTTP with every
//! parameter passed in the query string.

pub mod error;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod store;

use std::sync::Arc;

use axum::{Router, middleware, routing::get};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use error::HospitalError;
pub use models::{Appointment, Doctor, appointment_status};
pub use store::HospitalStore;

/// Shared state for hospital handlers
#[derive(Debug, Default)]
pub struct HospitalState {
    pub store: HospitalStore,
}

impl HospitalState {
    pub fn new(store: HospitalStore) -> Self {
        Self { store }
    }

    pub fn seeded() -> Self {
        Self::new(HospitalStore::seeded())
    }
}

/// Build the hospital router, docs included.
pub fn router(state: Arc<HospitalState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route(
            "/doctors",
            get(handlers::get_doctors)
                .post(handlers::add_doctor)
                .delete(handlers::delete_doctor),
        )
        .route(
            "/appointments",
            get(handlers::get_appointments)
                .post(handlers::create_appointment)
                .put(handlers::update_appointment)
                .delete(handlers::delete_appointment),
        )
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/openapi.json", openapi::HospitalApiDoc::openapi()))
        .layer(middleware::from_fn(crate::gateway::request_logging))
}
