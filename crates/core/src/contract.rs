//! Wire Contract
//!
//! The JSON bodies exchanged on `POST /agent`. Both the relay and the client
//! crates serialize through these types so the field names cannot drift.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of a `POST /agent` request.
///
/// Both fields are optional on the wire so that a missing mode or input is
/// reported by the relay's own validation instead of a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AgentRequest {
    #[schema(example = "summarize-text")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[schema(example = "The sky is blue because of Rayleigh scattering.")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
}

/// Successful relay output: the provider's text, unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AgentResult {
    pub result: String,
}

/// Error body returned with every non-2xx relay response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Either shape a relay response body may take.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AgentResponse {
    Error(ErrorResponse),
    Result(AgentResult),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_without_input_omits_field() {
        let request = AgentRequest {
            mode: Some("produce-quote".to_string()),
            input: None,
        };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"mode":"produce-quote"}"#
        );
    }

    #[test]
    fn test_request_fields_default_to_none() {
        let request: AgentRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request, AgentRequest::default());

        let request: AgentRequest =
            serde_json::from_str(r#"{"mode":"tasks","input":"ship it","extra":1}"#).unwrap();
        assert_eq!(request.mode.as_deref(), Some("tasks"));
        assert_eq!(request.input.as_deref(), Some("ship it"));
    }

    #[test]
    fn test_response_bodies() {
        let ok = serde_json::to_string(&AgentResult {
            result: "Keep going.".to_string(),
        })
        .unwrap();
        assert_eq!(ok, r#"{"result":"Keep going."}"#);

        let err = serde_json::to_string(&ErrorResponse {
            error: "Invalid mode".to_string(),
        })
        .unwrap();
        assert_eq!(err, r#"{"error":"Invalid mode"}"#);
    }

    #[test]
    fn test_response_decodes_either_shape() {
        let decoded: AgentResponse = serde_json::from_str(r#"{"result":"hi"}"#).unwrap();
        assert_eq!(
            decoded,
            AgentResponse::Result(AgentResult {
                result: "hi".to_string()
            })
        );

        let decoded: AgentResponse = serde_json::from_str(r#"{"error":"nope"}"#).unwrap();
        assert_eq!(
            decoded,
            AgentResponse::Error(ErrorResponse {
                error: "nope".to_string()
            })
        );

        assert!(serde_json::from_str::<AgentResponse>(r#"{"output":"hi"}"#).is_err());
    }
}
