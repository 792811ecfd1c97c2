mod course_type;
mod swim_result;

pub use course_type::CourseType;
pub use swim_result::{ScrapedData, SwimResult, SwimmerInfo};
