#[derive(Debug, thiserror::Error)]
pub enum HeartbeatError {
    #[error("invalid heartbeat path {0:?}: must be a literal route starting with '/'")]
    InvalidPath(String),
}

pub type Result<T, E = HeartbeatError> = std::result::Result<T, E>;
