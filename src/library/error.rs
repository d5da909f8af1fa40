//! Library service errors

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LibraryError {
    /// Lookup by book id missed
    #[error("{0}")]
    NotFound(&'static str),
}
