//! Role model and per-route role requirements.

pub mod requirement;
pub mod role;

pub use requirement::RoleRequirement;
pub use role::Role;
