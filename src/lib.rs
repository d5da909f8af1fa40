//! Hospital & Library - two in-memory CRUD services over HTTP
//!
//! # Modules
//!
//! - [`hospital`] - Doctor directory and appointment ledger
//! - [`library`] - Book catalog with summary/detail views
//! - [`gateway`] - Shared HTTP plumbing (errors, extractors, server loop)
//! - [`config`] - YAML configuration
//! - [`logging`] - tracing subscriber setup

pub mod config;
pub mod gateway;
pub mod hospital;
pub mod library;
pub mod logging;

// Convenient re-exports at crate root
pub use gateway::{ApiError, ApiResult};
pub use hospital::{Appointment, Doctor, HospitalError, HospitalState, HospitalStore};
pub use library::{Book, BookDetail, BookSummary, LibraryError, LibraryState, LibraryStore};
