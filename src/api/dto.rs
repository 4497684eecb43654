//! Backend response bodies
//!
//! Shapes of the JSON the backend returns from create endpoints and on
//! errors. List endpoints return the model types directly.

use serde::{Deserialize, Serialize};

use crate::model::{ClientId, EnrollmentId, ProgramId};

/// `201` body of `POST /api/clients`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientCreated {
    pub client_id: ClientId,
}

/// `201` body of `POST /api/programs`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProgramCreated {
    pub program_id: ProgramId,
}

/// `201` body of `POST /api/enroll`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnrollmentCreated {
    pub enrollment_id: EnrollmentId,
}

/// Error body: `{"msg": "..."}`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    #[serde(default)]
    pub msg: Option<String>,
}

impl ErrorBody {
    /// Parse an error body, tolerating empty or non-JSON text
    pub fn parse(text: &str) -> Self {
        serde_json::from_str(text).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_parse() {
        assert_eq!(
            ErrorBody::parse(r#"{"msg": "Client not found"}"#).msg.as_deref(),
            Some("Client not found")
        );
        assert_eq!(ErrorBody::parse("<html>oops</html>").msg, None);
        assert_eq!(ErrorBody::parse("").msg, None);
    }
}
