//! Schedule Source error types.

use std::fmt;

/// Errors from the Schedule Source HTTP client.
#[derive(Debug)]
pub enum ScheduleError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// JSON deserialization failed
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned an error status code
    ApiError { status: u16, message: String },

    /// No schedule published for the requested airport pair and month
    ScheduleNotFound,
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleError::Http(e) => write!(f, "HTTP error: {e}"),
            ScheduleError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            ScheduleError::ApiError { status, message } => {
                write!(f, "API error {status}: {message}")
            }
            ScheduleError::ScheduleNotFound => {
                write!(f, "no schedule published for this airport pair and month")
            }
        }
    }
}

impl std::error::Error for ScheduleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScheduleError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ScheduleError {
    fn from(err: reqwest::Error) -> Self {
        ScheduleError::Http(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ScheduleError::ScheduleNotFound;
        assert_eq!(
            err.to_string(),
            "no schedule published for this airport pair and month"
        );

        let err = ScheduleError::ApiError {
            status: 500,
            message: "Internal Server Error".into(),
        };
        assert_eq!(err.to_string(), "API error 500: Internal Server Error");

        let err = ScheduleError::Json {
            message: "expected string".into(),
            body: Some("{}".into()),
        };
        assert!(err.to_string().contains("JSON parse error"));
        assert!(err.to_string().contains("expected string"));
    }
}
