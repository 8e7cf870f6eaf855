//! Business logic services for the application layer.

pub mod auth_service;
pub mod fact_service;

pub use auth_service::AuthService;
pub use fact_service::FactService;
