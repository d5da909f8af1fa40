//! Hospital HTTP handlers.
//!
//! All parameters travel in the query string, including on POST/PUT/DELETE.

use std::sync::Arc;

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::HospitalState;
use super::models::{Appointment, Doctor};
use crate::gateway::{ApiResult, ErrorBody, HealthResponse, MessageResponse, QueryParams};

pub const SERVICE_NAME: &str = "hospital";

// --- Requests ---

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DoctorFilter {
    /// Filter doctors by specialization (case-insensitive)
    pub specialization: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NewDoctorParams {
    /// Doctor's name
    pub name: String,
    /// Doctor's specialization
    pub specialization: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DoctorIdParams {
    /// Doctor ID to delete
    pub doctor_id: i64,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AppointmentFilter {
    /// Filter by doctor ID
    pub doctor_id: Option<i64>,
    /// Filter by appointment status (case-insensitive)
    pub status: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NewAppointmentParams {
    /// Patient name
    pub patient_name: String,
    /// Doctor ID
    pub doctor_id: i64,
    /// Appointment date (YYYY-MM-DD, not validated)
    pub date: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UpdateAppointmentParams {
    /// Appointment ID to update
    pub appointment_id: i64,
    /// New status (pending/confirmed/cancelled)
    pub status: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AppointmentIdParams {
    /// Appointment ID to delete
    pub appointment_id: i64,
}

// --- Responses ---

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DoctorCreated {
    #[schema(example = "Doctor added successfully")]
    pub message: String,
    pub doctor: Doctor,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AppointmentChanged {
    #[schema(example = "Appointment created successfully")]
    pub message: String,
    pub appointment: Appointment,
}

// --- Handlers ---

/// Health check
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service healthy", body = HealthResponse)),
    tag = "System"
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::now(SERVICE_NAME))
}

/// List doctors
///
/// GET /doctors?specialization=Cardiologist
#[utoipa::path(
    get,
    path = "/doctors",
    params(DoctorFilter),
    responses(
        (status = 200, description = "Matching doctors", body = Vec<Doctor>),
        (status = 404, description = "No doctors found", body = ErrorBody),
        (status = 422, description = "Invalid parameters", body = ErrorBody)
    ),
    tag = "Doctors"
)]
pub async fn get_doctors(
    State(state): State<Arc<HospitalState>>,
    QueryParams(filter): QueryParams<DoctorFilter>,
) -> ApiResult<Vec<Doctor>> {
    let doctors = state.store.list_doctors(filter.specialization.as_deref())?;
    Ok(Json(doctors))
}

/// Add a doctor
///
/// POST /doctors?name=..&specialization=..
#[utoipa::path(
    post,
    path = "/doctors",
    params(NewDoctorParams),
    responses(
        (status = 200, description = "Doctor added", body = DoctorCreated),
        (status = 422, description = "Invalid parameters", body = ErrorBody)
    ),
    tag = "Doctors"
)]
pub async fn add_doctor(
    State(state): State<Arc<HospitalState>>,
    QueryParams(params): QueryParams<NewDoctorParams>,
) -> ApiResult<DoctorCreated> {
    let doctor = state.store.add_doctor(&params.name, &params.specialization);
    tracing::info!("[hospital] doctor {} added: {}", doctor.id, doctor.name);
    Ok(Json(DoctorCreated {
        message: "Doctor added successfully".to_string(),
        doctor,
    }))
}

/// Delete a doctor
///
/// DELETE /doctors?doctor_id=1
#[utoipa::path(
    delete,
    path = "/doctors",
    params(DoctorIdParams),
    responses(
        (status = 200, description = "Doctor deleted", body = MessageResponse),
        (status = 404, description = "Doctor not found", body = ErrorBody),
        (status = 422, description = "Invalid parameters", body = ErrorBody)
    ),
    tag = "Doctors"
)]
pub async fn delete_doctor(
    State(state): State<Arc<HospitalState>>,
    QueryParams(params): QueryParams<DoctorIdParams>,
) -> ApiResult<MessageResponse> {
    let doctor = state.store.remove_doctor(params.doctor_id)?;
    tracing::info!("[hospital] doctor {} deleted", doctor.id);
    Ok(Json(MessageResponse::new("Doctor deleted successfully")))
}

/// List appointments
///
/// GET /appointments?doctor_id=1&status=pending
#[utoipa::path(
    get,
    path = "/appointments",
    params(AppointmentFilter),
    responses(
        (status = 200, description = "Matching appointments", body = Vec<Appointment>),
        (status = 404, description = "No matching appointments", body = ErrorBody),
        (status = 422, description = "Invalid parameters", body = ErrorBody)
    ),
    tag = "Appointments"
)]
pub async fn get_appointments(
    State(state): State<Arc<HospitalState>>,
    QueryParams(filter): QueryParams<AppointmentFilter>,
) -> ApiResult<Vec<Appointment>> {
    let appointments = state
        .store
        .list_appointments(filter.doctor_id, filter.status.as_deref())?;
    Ok(Json(appointments))
}

/// Book an appointment
///
/// POST /appointments?patient_name=..&doctor_id=1&date=2025-01-31
#[utoipa::path(
    post,
    path = "/appointments",
    params(NewAppointmentParams),
    responses(
        (status = 200, description = "Appointment created", body = AppointmentChanged),
        (status = 400, description = "Invalid doctor ID", body = ErrorBody),
        (status = 422, description = "Invalid parameters", body = ErrorBody)
    ),
    tag = "Appointments"
)]
pub async fn create_appointment(
    State(state): State<Arc<HospitalState>>,
    QueryParams(params): QueryParams<NewAppointmentParams>,
) -> ApiResult<AppointmentChanged> {
    let appointment = state
        .store
        .create_appointment(&params.patient_name, params.doctor_id, &params.date)
        .inspect_err(|e| tracing::debug!("[hospital] create appointment rejected: {}", e))?;
    tracing::info!(
        "[hospital] appointment {} created for doctor {}",
        appointment.id,
        appointment.doctor_id
    );
    Ok(Json(AppointmentChanged {
        message: "Appointment created successfully".to_string(),
        appointment,
    }))
}

/// Update an appointment's status
///
/// PUT /appointments?appointment_id=1&status=confirmed
#[utoipa::path(
    put,
    path = "/appointments",
    params(UpdateAppointmentParams),
    responses(
        (status = 200, description = "Appointment updated", body = AppointmentChanged),
        (status = 404, description = "Appointment not found", body = ErrorBody),
        (status = 422, description = "Invalid parameters", body = ErrorBody)
    ),
    tag = "Appointments"
)]
pub async fn update_appointment(
    State(state): State<Arc<HospitalState>>,
    QueryParams(params): QueryParams<UpdateAppointmentParams>,
) -> ApiResult<AppointmentChanged> {
    let appointment = state
        .store
        .update_appointment(params.appointment_id, &params.status)?;
    tracing::info!(
        "[hospital] appointment {} status -> {}",
        appointment.id,
        appointment.status
    );
    Ok(Json(AppointmentChanged {
        message: "Appointment updated successfully".to_string(),
        appointment,
    }))
}

/// Delete an appointment
///
/// DELETE /appointments?appointment_id=1
#[utoipa::path(
    delete,
    path = "/appointments",
    params(AppointmentIdParams),
    responses(
        (status = 200, description = "Appointment deleted", body = MessageResponse),
        (status = 404, description = "Appointment not found", body = ErrorBody),
        (status = 422, description = "Invalid parameters", body = ErrorBody)
    ),
    tag = "Appointments"
)]
pub async fn delete_appointment(
    State(state): State<Arc<HospitalState>>,
    QueryParams(params): QueryParams<AppointmentIdParams>,
) -> ApiResult<MessageResponse> {
    let appointment = state.store.remove_appointment(params.appointment_id)?;
    tracing::info!("[hospital] appointment {} deleted", appointment.id);
    Ok(Json(MessageResponse::new("Appointment deleted successfully")))
}
