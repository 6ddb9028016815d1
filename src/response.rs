use chrono::Utc;
use serde::Serialize;

/// Timestamped envelope for JSON payloads.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceResponse<T> {
    /// Milliseconds since the Unix epoch, taken when the response was built
    pub timestamp: i64,
    pub data: T,
}

impl<T> ServiceResponse<T> {
    /// Wrap `data`, stamping it with the current time.
    pub fn new(data: T) -> Self {
        Self {
            timestamp: Utc::now().timestamp_millis(),
            data,
        }
    }
}
