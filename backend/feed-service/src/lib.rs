/// Feed Service Library
///
/// The feed-interaction core of the Sociable platform: posts with a per-post
/// like-set, comments, symmetric friend edges, notification fan-out, and a
/// naive two-bucket search. Authentication and upload storage live at the
/// gateway; this service enforces ownership, not identity.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers
/// - `models`: entities, projections, and wire DTOs
/// - `services`: business logic layer
/// - `db`: database access layer and schema bootstrap
/// - `media`: stored-asset deletion for the post delete cascade
/// - `middleware`: gateway-identity extraction
/// - `error`: error types and handling
/// - `config`: configuration management
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod media;
pub mod middleware;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};
