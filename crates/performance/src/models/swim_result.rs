use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::CourseType;

/// One parsed row of a results table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SwimResult {
    pub event: String,
    pub time: String,
    /// Finishing position, 0 when the page cell was not a number
    pub place: u32,
    /// Date or meet token exactly as it appears on the page
    pub date: String,
    pub club: String,
    pub age_group: String,
    pub course_type: CourseType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SwimmerInfo {
    pub name: String,
    pub age: u32,
    pub team: String,
}

impl SwimmerInfo {
    pub const UNKNOWN_NAME: &'static str = "Unknown Swimmer";
    pub const UNKNOWN_TEAM: &'static str = "Unknown Team";

    pub fn unknown() -> Self {
        Self {
            name: Self::UNKNOWN_NAME.to_string(),
            age: 0,
            team: Self::UNKNOWN_TEAM.to_string(),
        }
    }
}

impl Default for SwimmerInfo {
    fn default() -> Self {
        Self::unknown()
    }
}

/// Everything extracted from a single swimmer results page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScrapedData {
    pub swimmer: SwimmerInfo,
    pub results: Vec<SwimResult>,
}
