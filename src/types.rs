use chrono::{DateTime, Local};

/// Outcome of a single probe. Built once by the prober and only read afterwards.
#[derive(Debug, Clone)]
pub struct ProbeResult {
    pub timestamp: DateTime<Local>,
    pub url: String,
    /// Absent when the request never produced a response.
    pub status_code: Option<u16>,
    /// Response headers in the order the client yielded them.
    pub headers: Vec<(String, String)>,
    pub elapsed_seconds: f64,
    pub error: Option<String>,
    /// Leading part of the body, kept only for unexpected statuses.
    pub body_excerpt: Option<String>,
}

impl ProbeResult {
    pub fn classification(&self) -> Classification {
        match self.status_code {
            None => Classification::Unreachable,
            Some(code) => Classification::from_status(code),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Allowed,
    Forbidden,
    Unexpected(u16),
    Unreachable,
}

impl Classification {
    pub fn from_status(code: u16) -> Self {
        match code {
            200..=299 => Classification::Allowed,
            403 => Classification::Forbidden,
            other => Classification::Unexpected(other),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Classification::Allowed => "Success: endpoint accessible (OK/allowed)".to_string(),
            Classification::Forbidden => "Forbidden: access blocked from this host".to_string(),
            Classification::Unexpected(code) => {
                format!("Unexpected response: non-success status {}", code)
            }
            Classification::Unreachable => "Request failed: endpoint unreachable".to_string(),
        }
    }
}
