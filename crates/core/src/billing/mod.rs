//! Billing module - plan tiers and hosted checkout/portal flows.

mod billing_model;
mod billing_service;
mod billing_traits;

pub use billing_model::{CheckoutMode, CheckoutRequest, CheckoutSession, PlanTier};
pub use billing_service::BillingService;
pub use billing_traits::{BillingGatewayTrait, BillingServiceTrait};
