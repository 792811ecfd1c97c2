pub mod error;
pub mod sources;
pub mod traits;

pub use error::{ImporterError, Result};
pub use traits::ResultsSource;

// Re-export USMS types
pub use sources::usms::{
    PageElement, PageExtractor, SwimmerImporter, SwimmerLocator, UsmsClient,
    detect_course_type_from_header, validate_swimmer_id,
};
