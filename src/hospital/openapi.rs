//! OpenAPI document for the hospital service
//!
//! - Swagger UI: `http://localhost:8000/docs`
//! - OpenAPI JSON: `http://localhost:8000/openapi.json`

use utoipa::OpenApi;

use super::handlers::{AppointmentChanged, DoctorCreated};
use super::models::{Appointment, Doctor};
use crate::gateway::{ErrorBody, HealthResponse, MessageResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Hospital Appointment System",
        version = "1.0.0",
        description = "Doctors and appointments. All parameters are query parameters."
    ),
    servers((url = "http://localhost:8000", description = "Development")),
    paths(
        super::handlers::health_check,
        super::handlers::get_doctors,
        super::handlers::add_doctor,
        super::handlers::delete_doctor,
        super::handlers::get_appointments,
        super::handlers::create_appointment,
        super::handlers::update_appointment,
        super::handlers::delete_appointment,
    ),
    components(schemas(
        Doctor,
        Appointment,
        DoctorCreated,
        AppointmentChanged,
        MessageResponse,
        HealthResponse,
        ErrorBody,
    )),
    tags(
        (name = "Doctors", description = "Doctor directory"),
        (name = "Appointments", description = "Appointment ledger"),
        (name = "System", description = "Health")
    )
)]
pub struct HospitalApiDoc;
