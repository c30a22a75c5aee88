//! Business logic services for the application layer.

pub mod analytics_counter;
pub mod redirection_service;
pub mod shortening_service;

pub use analytics_counter::AnalyticsCounter;
pub use redirection_service::RedirectionService;
pub use shortening_service::ShorteningService;
