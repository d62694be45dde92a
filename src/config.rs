use std::ffi::OsString;

use anyhow::Result;

use crate::api::health::{EnvName, Heartbeat};

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub bind_addr: String,
    heartbeat: Heartbeat,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| os_value(std::env::var_os(key)))
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = lookup("HEARTBEAT_BIND").unwrap_or_else(|| "0.0.0.0:3000".to_string());
        let health_path = lookup("HEARTBEAT_PATH").unwrap_or_default();
        let env = EnvName::resolve(lookup("ENV"));
        let heartbeat = Heartbeat::new(&health_path, env)?;

        Ok(Self { bind_addr, heartbeat })
    }

    pub fn heartbeat(&self) -> &Heartbeat { &self.heartbeat }
}

// Non-UTF-8 values are kept (lossily) rather than treated as unset.
fn os_value(value: Option<OsString>) -> Option<String> {
    value.map(|v| v.to_string_lossy().into_owned())
}
