use super::Error;

/// Strategy for handling errors in a retry context
pub enum ErrorRetryStrategy {
    /// Retry with exponential backoff (network failures, remote server errors)
    Retry,
    /// Failed permanently (bad request, missing entity, access denied)
    Fail,
}

impl Error {
    /// Determine error retry strategy based upon application Error type
    pub fn to_retry_strategy(&self) -> ErrorRetryStrategy {
        match self {
            // Remote guild API errors - connection failures, 5xx, and rate limiting resolve
            // themselves; rejections and unmapped 4xx responses never will.
            Self::RemoteError(err) if err.is_transient() => ErrorRetryStrategy::Retry,
            Self::RemoteError(_) => ErrorRetryStrategy::Fail,

            // Session errors - transient, could be Redis connection issues
            Self::SessionError(_) => ErrorRetryStrategy::Retry,
            Self::SessionRedisError(_) => ErrorRetryStrategy::Retry,

            // Configuration errors - permanent failures, won't resolve with retry
            Self::ConfigError(_) => ErrorRetryStrategy::Fail,

            // Access errors - permanent failures for this request
            Self::AuthError(_) => ErrorRetryStrategy::Fail,

            // Loadout errors - validation failures and inconsistent data
            Self::LoadoutError(_) => ErrorRetryStrategy::Fail,

            // Parse errors - permanent failures (bad data format)
            Self::ParseError(_) => ErrorRetryStrategy::Fail,

            // InternalError - permanent failures (internal error within Guildhall's code)
            Self::InternalError(_) => ErrorRetryStrategy::Fail,
        }
    }
}
