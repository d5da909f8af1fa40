//! Doctor and appointment records

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Recognized appointment statuses. Updates accept any string; these are
/// only the vocabulary clients are expected to use.
pub mod appointment_status {
    pub const PENDING: &str = "pending";
    pub const CONFIRMED: &str = "confirmed";
    pub const CANCELLED: &str = "cancelled";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Doctor {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Dr. Winny")]
    pub name: String,
    #[schema(example = "Cardiologist")]
    pub specialization: String,
}

impl Doctor {
    pub fn new(id: i64, name: impl Into<String>, specialization: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            specialization: specialization.into(),
        }
    }

    pub fn has_specialization(&self, specialization: &str) -> bool {
        self.specialization.to_lowercase() == specialization.to_lowercase()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Appointment {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Jane Doe")]
    pub patient_name: String,
    #[schema(example = 1)]
    pub doctor_id: i64,
    /// Free-form, not validated as a calendar date
    #[schema(example = "2025-01-31")]
    pub date: String,
    /// pending | confirmed | cancelled (not enforced)
    #[schema(example = "pending")]
    pub status: String,
}

impl Appointment {
    pub fn has_status(&self, status: &str) -> bool {
        self.status.to_lowercase() == status.to_lowercase()
    }
}

/// Doctors present on every fresh start
pub fn seed_doctors() -> Vec<Doctor> {
    vec![
        Doctor::new(1, "Dr. Winny", "Cardiologist"),
        Doctor::new(2, "Dr. Junie", "Dentist"),
        Doctor::new(3, "Dr. Sheeba", "Neurologist"),
    ]
}
