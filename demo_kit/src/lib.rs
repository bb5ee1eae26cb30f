//! # demo_kit - runtime plumbing for small axum services
//!
//! `demo_kit` holds everything a service needs around its handlers, so the
//! service crate itself is only routing, DTOs and handler bodies.
//!
//! ## Core Features:
//!
//! - **[`extract::ValidJson`] / [`extract::QueryParams`]**: extractors that
//!   deserialize (and, for bodies, validate) request input before a handler
//!   runs. Every rejection renders as a JSON [`ErrorBody`].
//!
//! - **[`config::ServerConfig`]**: bind address and log format, read from CLI
//!   flags, environment variables and an optional `.env` file.
//!
//! - **[`telemetry::init`]**: process-wide `tracing` subscriber.
//!
//! - **[`bootstrap`]**: CORS layer, Swagger UI router and the serve loop with
//!   graceful shutdown.

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod extract;
pub mod telemetry;

pub use config::{LogFormat, ServerConfig};
pub use error::{ApiError, Error, ErrorBody, FieldError, Result};
pub use extract::{QueryParams, ValidJson, Validate};
