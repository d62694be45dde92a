//! Heartbeat: a health-check route for axum services.
//!
//! Mount it on a router and `GET /health` (or a path of your choosing)
//! answers `200 OK` with `{"ENV":"<value>"}`, where the value is the
//! deployment environment name, or `dev` when none is set.

pub mod api;
pub mod config;
pub mod error;

pub use api::health::{EnvName, HealthStatus, Heartbeat, HEALTH_PATH, HEARTBEAT_PATH};
pub use config::AppConfig;
pub use error::HeartbeatError;
