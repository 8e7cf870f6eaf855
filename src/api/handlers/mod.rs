//! HTTP request handlers for API endpoints.

pub mod facts;
pub mod health;
pub mod redirect;
pub mod statistics;

pub use facts::create_fact_handler;
pub use health::health_handler;
pub use redirect::redirect_handler;
pub use statistics::statistics_handler;
