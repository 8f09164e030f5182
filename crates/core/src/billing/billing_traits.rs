use crate::billing::billing_model::{CheckoutMode, CheckoutRequest, CheckoutSession};
use crate::errors::Result;
use async_trait::async_trait;

/// Trait for the remote payment functions.
///
/// Implemented by the gateway crate; each call is a single serverless
/// function invocation.
#[async_trait]
pub trait BillingGatewayTrait: Send + Sync {
    async fn create_checkout_session(&self, request: CheckoutRequest) -> Result<CheckoutSession>;
    async fn create_portal_session(&self, return_url: &str) -> Result<String>;
}

/// Trait for billing service operations.
#[async_trait]
pub trait BillingServiceTrait: Send + Sync {
    async fn start_checkout(
        &self,
        price_id: &str,
        mode: CheckoutMode,
        success_url: &str,
        cancel_url: &str,
    ) -> Result<CheckoutSession>;
    async fn open_portal(&self, return_url: &str) -> Result<String>;
}
