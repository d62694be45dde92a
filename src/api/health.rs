use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::error::{HeartbeatError, Result};

pub const HEALTH_PATH: &str = "/health";
pub const HEARTBEAT_PATH: &str = "/heartbeat";

const FALLBACK_ENV: &str = "dev";

/// Deployment environment name, never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnvName(String);

impl EnvName {
    /// Empty or missing values fall back to `dev`; anything else is kept verbatim.
    pub fn resolve(value: Option<String>) -> Self {
        match value {
            Some(v) if !v.is_empty() => Self(v),
            _ => Self(FALLBACK_ENV.to_string()),
        }
    }

    pub fn as_str(&self) -> &str { &self.0 }
}

impl Default for EnvName {
    fn default() -> Self { Self(FALLBACK_ENV.to_string()) }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    #[serde(rename = "ENV")]
    env: String,
}

impl HealthStatus {
    pub fn env(&self) -> &str { &self.env }
}

impl From<EnvName> for HealthStatus {
    fn from(env: EnvName) -> Self { Self { env: env.0 } }
}

/// A GET route answering `{"ENV":"<value>"}` on a single path.
///
/// The environment name is resolved by the caller and fixed for the life
/// of the route, so requests never read process-global state.
#[derive(Clone, Debug)]
pub struct Heartbeat {
    path: String,
    status: HealthStatus,
}

impl Heartbeat {
    /// Empty `path` means [`HEALTH_PATH`].
    pub fn new(path: &str, env: EnvName) -> Result<Self> {
        Self::with_default(path, HEALTH_PATH, env)
    }

    /// Empty `path` means `default`.
    pub fn with_default(path: &str, default: &str, env: EnvName) -> Result<Self> {
        let path = if path.is_empty() { default } else { path };
        validate_path(path)?;
        Ok(Self { path: path.to_string(), status: env.into() })
    }

    pub fn path(&self) -> &str { &self.path }

    pub fn status(&self) -> &HealthStatus { &self.status }

    /// Adds `GET <path>` to `router`. Everything else stays with the router's
    /// own fallback.
    pub fn mount<S>(self, router: Router<S>) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        tracing::info!(ctrl = "Heartbeat", route = %format!("GET {}", self.path), "mount");
        router.route(&self.path, get(heartbeat).with_state(self.status))
    }
}

async fn heartbeat(State(status): State<HealthStatus>) -> Json<HealthStatus> {
    Json(status)
}

// axum panics on paths without a leading '/' and would match capture segments as parameters.
fn validate_path(path: &str) -> Result<()> {
    let literal = !path.contains([':', '*', '{', '}']);
    if path.starts_with('/') && literal {
        Ok(())
    } else {
        Err(HeartbeatError::InvalidPath(path.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_falls_back_to_dev() {
        assert_eq!(EnvName::resolve(None).as_str(), "dev");
        assert_eq!(EnvName::resolve(Some(String::new())).as_str(), "dev");
        assert_eq!(EnvName::default().as_str(), "dev");
    }

    #[test]
    fn resolve_keeps_value_verbatim() {
        assert_eq!(EnvName::resolve(Some("staging".into())).as_str(), "staging");
        assert_eq!(EnvName::resolve(Some(" prod ".into())).as_str(), " prod ");
    }

    #[test]
    fn empty_path_uses_declared_default() {
        let h = Heartbeat::new("", EnvName::default()).unwrap();
        assert_eq!(h.path(), HEALTH_PATH);
        assert_eq!(h.status().env(), "dev");

        let h = Heartbeat::with_default("", HEARTBEAT_PATH, EnvName::default()).unwrap();
        assert_eq!(h.path(), HEARTBEAT_PATH);

        let h = Heartbeat::with_default("/custom", HEARTBEAT_PATH, EnvName::default()).unwrap();
        assert_eq!(h.path(), "/custom");
    }

    #[test]
    fn rejects_non_literal_paths() {
        for bad in ["health", "/:id", "/*rest", "/{id}"] {
            let err = Heartbeat::new(bad, EnvName::default()).unwrap_err();
            assert!(matches!(err, HeartbeatError::InvalidPath(p) if p == bad));
        }
    }

    #[test]
    fn status_serializes_under_env_key() {
        let status = HealthStatus::from(EnvName::resolve(Some("production".into())));
        assert_eq!(serde_json::to_string(&status).unwrap(), r#"{"ENV":"production"}"#);
    }

    #[test]
    fn status_is_never_empty() {
        for value in [None, Some(String::new())] {
            let status = HealthStatus::from(EnvName::resolve(value));
            assert_eq!(status.env(), "dev");
        }
    }

    #[test]
    fn status_escapes_special_characters() {
        let status = HealthStatus::from(EnvName::resolve(Some("a\"b\n".into())));
        assert_eq!(serde_json::to_string(&status).unwrap(), r#"{"ENV":"a\"b\n"}"#);
    }
}
