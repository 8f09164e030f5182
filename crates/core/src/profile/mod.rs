//! Profile module - the signed-in user's account record.

mod profile_model;
mod profile_service;
mod profile_traits;

pub use profile_model::{Profile, ProfileUpdate};
pub use profile_service::ProfileService;
pub use profile_traits::{ProfileRepositoryTrait, ProfileServiceTrait};
