use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::PerformanceError;

/// Pool length and unit convention a time was recorded under.
///
/// Times are never comparable across course types, so every best-time table
/// is keyed by event and course type together.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum CourseType {
    #[default]
    #[serde(rename = "SCY")]
    Scy,
    #[serde(rename = "SCM")]
    Scm,
    #[serde(rename = "LCM")]
    Lcm,
}

impl CourseType {
    pub const ALL: [CourseType; 3] = [Self::Scy, Self::Scm, Self::Lcm];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scy => "SCY",
            Self::Scm => "SCM",
            Self::Lcm => "LCM",
        }
    }

    pub fn full_name(&self) -> &'static str {
        match self {
            Self::Scy => "Short Course Yards",
            Self::Scm => "Short Course Meters",
            Self::Lcm => "Long Course Meters",
        }
    }

    fn parse_str(s: &str) -> Result<Self, PerformanceError> {
        match s.trim().to_uppercase().as_str() {
            "SCY" => Ok(Self::Scy),
            "SCM" => Ok(Self::Scm),
            "LCM" => Ok(Self::Lcm),
            _ => Err(PerformanceError::InvalidCourseType(s.to_string())),
        }
    }
}

impl std::str::FromStr for CourseType {
    type Err = PerformanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for CourseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
