//! Billing domain models.

use serde::{Deserialize, Serialize};

/// Subscription tier, assigned server-side by the payment webhook.
/// The client only ever reads it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanTier {
    #[default]
    Free,
    Starter,
    Pro,
}

impl PlanTier {
    pub fn display_name(&self) -> &'static str {
        match self {
            PlanTier::Free => "Free Plan",
            PlanTier::Starter => "Starter Plan",
            PlanTier::Pro => "Pro Plan",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PlanTier::Free => "Basic features with AI credit limits.",
            PlanTier::Starter => "More AI credits and advanced features.",
            PlanTier::Pro => "Unlimited power for ultimate productivity.",
        }
    }
}

/// Checkout mode for the hosted payment page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckoutMode {
    /// Recurring subscription (monthly/annual plans).
    Subscription,
    /// One-time payment (lifetime plan).
    Payment,
}

/// Request for the remote checkout-session function.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub price_id: String,
    pub mode: CheckoutMode,
    pub success_url: String,
    pub cancel_url: String,
}

/// A created checkout session. The browser is redirected to the payment
/// processor's hosted page for this session; no payment details ever
/// pass through this client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSession {
    pub session_id: String,
}

impl CheckoutSession {
    /// Hosted checkout URL for this session.
    pub fn redirect_url(&self) -> String {
        format!("https://checkout.stripe.com/c/pay/{}", self.session_id)
    }
}
