//! AI assistant module - credit gate and remote suggestion/plan calls.

mod assistant_errors;
mod assistant_model;
mod assistant_service;
mod assistant_traits;


pub use assistant_errors::AssistantError;
pub use assistant_model::{AssistantReply, AssistantTask};
pub use assistant_service::AssistantService;
pub use assistant_traits::{AssistantGatewayTrait, AssistantServiceTrait};
