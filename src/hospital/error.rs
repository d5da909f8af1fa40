//! Hospital service errors

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HospitalError {
    /// Lookup by id missed, or a filtered listing came back empty
    #[error("{0}")]
    NotFound(&'static str),

    /// `doctor_id` does not resolve to an existing doctor
    #[error("{0}")]
    InvalidReference(&'static str),
}
