pub mod dto;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use error::{PerformanceError, Result};
pub use repository::session::SessionRepository;
pub use services::report::analyze_performance;
