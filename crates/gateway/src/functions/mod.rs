//! Serverless function invokers - single-shot remote procedure calls.

mod assistant;
mod billing;

pub use assistant::AssistantGateway;
pub use billing::BillingGateway;
