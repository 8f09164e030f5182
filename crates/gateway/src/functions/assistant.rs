//! Invoker for the `openai-assistant` function.
//!
//! The function reports failures two ways: a non-2xx status whose body
//! is `{error, details?}`, or a 200 whose body carries the same shape.
//! Both paths map onto the closed `AssistantError` code set; anything
//! without a recognized code falls back to the uniform gateway errors.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use smartplan_core::assistant::{AssistantError, AssistantGatewayTrait, AssistantReply, AssistantTask};
use smartplan_core::errors::{GatewayError, Result};

use crate::client::{error_from_response, BaasClient};

const ASSISTANT_FUNCTION: &str = "openai-assistant";
const SET_API_KEY_FUNCTION: &str = "set-openai-api-key";

#[derive(Debug, Serialize)]
struct SuggestionsBody<'a> {
    context: &'a str,
    #[serde(rename = "type")]
    task: AssistantTask,
}

#[derive(Debug, Serialize)]
struct PlanBody<'a> {
    goal: &'a str,
    #[serde(rename = "type")]
    task: AssistantTask,
}

#[derive(Debug, Serialize)]
struct SetApiKeyBody<'a> {
    #[serde(rename = "apiKey")]
    api_key: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct AssistantWire {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    details: Option<String>,
    #[serde(default)]
    suggestions: Option<Vec<String>>,
    #[serde(default)]
    steps: Option<Vec<String>>,
}

/// Remote AI function invoker.
pub struct AssistantGateway {
    client: Arc<BaasClient>,
}

impl AssistantGateway {
    pub fn new(client: Arc<BaasClient>) -> Self {
        AssistantGateway { client }
    }
}

#[async_trait]
impl AssistantGatewayTrait for AssistantGateway {
    async fn invoke(&self, task: AssistantTask, input: &str) -> Result<AssistantReply> {
        let (status, body) = match task {
            AssistantTask::Suggestions => {
                self.client
                    .invoke_function(ASSISTANT_FUNCTION, &SuggestionsBody { context: input, task })
                    .await?
            }
            AssistantTask::Plan => {
                self.client
                    .invoke_function(ASSISTANT_FUNCTION, &PlanBody { goal: input, task })
                    .await?
            }
        };
        decode_reply(status, &body)
    }

    async fn store_api_key(&self, api_key: &str) -> Result<()> {
        let (status, body) = self
            .client
            .invoke_function(SET_API_KEY_FUNCTION, &SetApiKeyBody { api_key })
            .await?;

        let wire: AssistantWire = serde_json::from_str(&body).unwrap_or_default();
        if let Some(message) = wire.error {
            return Err(GatewayError::Api(message).into());
        }
        if !status.is_success() {
            return Err(error_from_response(status, &body));
        }
        Ok(())
    }
}

pub(crate) fn decode_reply(status: StatusCode, body: &str) -> Result<AssistantReply> {
    let wire: AssistantWire = match serde_json::from_str(body) {
        Ok(wire) => wire,
        Err(_) if !status.is_success() => return Err(error_from_response(status, body)),
        Err(e) => {
            return Err(GatewayError::ResponseParse(format!(
                "{} - {}",
                e,
                body.chars().take(200).collect::<String>()
            ))
            .into())
        }
    };

    if let Some(code) = wire.error {
        return Err(AssistantError::from_code(&code, wire.details).into());
    }
    if !status.is_success() {
        return Err(error_from_response(status, body));
    }
    if let Some(suggestions) = wire.suggestions {
        return Ok(AssistantReply::Suggestions(suggestions));
    }
    if let Some(steps) = wire.steps {
        return Ok(AssistantReply::Steps(steps));
    }
    Err(GatewayError::ResponseParse(
        "Received an unexpected format from the AI assistant".to_string(),
    )
    .into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartplan_core::errors::Error;

    #[test]
    fn suggestions_reply_decodes() {
        let reply = decode_reply(
            StatusCode::OK,
            r#"{"suggestions":["Run 5k","Meditate daily"]}"#,
        )
        .unwrap();
        assert_eq!(
            reply,
            AssistantReply::Suggestions(vec!["Run 5k".to_string(), "Meditate daily".to_string()])
        );
    }

    #[test]
    fn steps_reply_decodes() {
        let reply = decode_reply(StatusCode::OK, r#"{"steps":["Week 1: walk"]}"#).unwrap();
        assert_eq!(reply, AssistantReply::Steps(vec!["Week 1: walk".to_string()]));
    }

    #[test]
    fn coded_error_in_ok_body_maps_to_variant() {
        let result = decode_reply(StatusCode::OK, r#"{"error":"no_credits_remaining"}"#);
        assert!(matches!(
            result,
            Err(Error::Assistant(AssistantError::NoCreditsRemaining))
        ));
    }

    #[test]
    fn coded_error_in_failure_body_maps_to_variant() {
        let result = decode_reply(
            StatusCode::PAYMENT_REQUIRED,
            r#"{"error":"insufficient_quota","details":"billing hard limit"}"#,
        );
        assert!(matches!(
            result,
            Err(Error::Assistant(AssistantError::InsufficientQuota))
        ));
    }

    #[test]
    fn unknown_code_carries_details() {
        let result = decode_reply(
            StatusCode::OK,
            r#"{"error":"rate_limited","details":"try later"}"#,
        );
        match result {
            Err(Error::Assistant(AssistantError::Unknown(msg))) => assert_eq!(msg, "try later"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn uncoded_failure_uses_uniform_gateway_error() {
        let result = decode_reply(StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded");
        assert!(matches!(result, Err(Error::Gateway(_))));
    }

    #[test]
    fn unexpected_ok_shape_is_parse_error() {
        let result = decode_reply(StatusCode::OK, r#"{"ideas":["nope"]}"#);
        assert!(matches!(
            result,
            Err(Error::Gateway(GatewayError::ResponseParse(_)))
        ));
    }

    #[test]
    fn request_bodies_use_wire_field_names() {
        let body = serde_json::to_value(SuggestionsBody {
            context: "stress relief",
            task: AssistantTask::Suggestions,
        })
        .unwrap();
        assert_eq!(body["type"], "suggestions");
        assert_eq!(body["context"], "stress relief");

        let body = serde_json::to_value(PlanBody {
            goal: "run a marathon",
            task: AssistantTask::Plan,
        })
        .unwrap();
        assert_eq!(body["type"], "plan");
        assert_eq!(body["goal"], "run a marathon");
    }
}
