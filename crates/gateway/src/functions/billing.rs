//! Invokers for the Stripe-backed billing functions.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use smartplan_core::billing::{BillingGatewayTrait, CheckoutRequest, CheckoutSession};
use smartplan_core::errors::{GatewayError, Result};

use crate::client::{error_from_response, BaasClient};

const CHECKOUT_FUNCTION: &str = "create-checkout-session";
const PORTAL_FUNCTION: &str = "stripe-customer-portal";

#[derive(Debug, Serialize)]
struct PortalBody<'a> {
    #[serde(rename = "returnUrl")]
    return_url: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct CheckoutWire {
    #[serde(default, rename = "sessionId")]
    session_id: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct PortalWire {
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Remote billing function invoker.
pub struct BillingGateway {
    client: Arc<BaasClient>,
}

impl BillingGateway {
    pub fn new(client: Arc<BaasClient>) -> Self {
        BillingGateway { client }
    }
}

#[async_trait]
impl BillingGatewayTrait for BillingGateway {
    async fn create_checkout_session(&self, request: CheckoutRequest) -> Result<CheckoutSession> {
        let (status, body) = self.client.invoke_function(CHECKOUT_FUNCTION, &request).await?;
        decode_checkout(status, &body)
    }

    async fn create_portal_session(&self, return_url: &str) -> Result<String> {
        let (status, body) = self
            .client
            .invoke_function(PORTAL_FUNCTION, &PortalBody { return_url })
            .await?;
        decode_portal(status, &body)
    }
}

pub(crate) fn decode_checkout(status: StatusCode, body: &str) -> Result<CheckoutSession> {
    let wire: CheckoutWire = serde_json::from_str(body).unwrap_or_default();
    if let Some(message) = wire.error {
        return Err(GatewayError::Api(message).into());
    }
    if !status.is_success() {
        return Err(error_from_response(status, body));
    }
    match wire.session_id {
        Some(session_id) => Ok(CheckoutSession { session_id }),
        None => Err(GatewayError::ResponseParse(
            "Checkout response carried no session id".to_string(),
        )
        .into()),
    }
}

pub(crate) fn decode_portal(status: StatusCode, body: &str) -> Result<String> {
    let wire: PortalWire = serde_json::from_str(body).unwrap_or_default();
    if let Some(message) = wire.error {
        return Err(GatewayError::Api(message).into());
    }
    if !status.is_success() {
        return Err(error_from_response(status, body));
    }
    wire.url.ok_or_else(|| {
        GatewayError::ResponseParse("Portal response carried no url".to_string()).into()
    })
}
