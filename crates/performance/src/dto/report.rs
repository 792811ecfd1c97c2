use std::collections::BTreeMap;

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::CourseType;

/// Fastest recorded swim for one event and course type.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BestTime {
    pub event: String,
    pub time: String,
    pub date: String,
    /// The page exposes no meet identity, so this repeats the date token
    pub meet: String,
    /// Comparison key only
    #[serde(skip)]
    pub seconds: f64,
    pub course_type: CourseType,
}

/// Converted times of an event swum more than once, in page order.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PerformanceTrend {
    pub event: String,
    pub times: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MeetResult {
    pub event: String,
    pub place: u32,
    pub time: String,
    pub improvement: String,
    pub age_group: String,
}

/// Results sharing a date token and course type.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MeetData {
    pub name: String,
    pub date: String,
    pub location: String,
    pub course_type: CourseType,
    pub results: Vec<MeetResult>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Improvement {
    pub event: String,
    pub improvement: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct AgeGroupImprovement {
    pub event: String,
    pub improvement: String,
    pub rank: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MeetBreakdown {
    pub meets: Vec<MeetData>,
    pub current_meet: Option<MeetData>,
    pub all_time_improvements: Vec<Improvement>,
    pub age_group_improvements: BTreeMap<String, Vec<AgeGroupImprovement>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PersonalBests {
    pub all_time: Vec<BestTime>,
    pub by_age_group: BTreeMap<String, Vec<BestTime>>,
}

/// Per-club counts. `best_times` is the number of distinct events swum for
/// the club, not a count of best times.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClubInfo {
    pub name: String,
    pub location: String,
    pub years: String,
    pub meets: usize,
    pub events: usize,
    pub best_times: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceSummary {
    pub total_events: usize,
    pub total_points: u32,
    pub average_place: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct PerformanceInsights {
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SwimmerPerformance {
    pub name: String,
    pub age: u32,
    pub total_meets: usize,
    pub total_events: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceData {
    pub best_times: Vec<BestTime>,
    pub recent_times: Vec<PerformanceTrend>,
}

/// Complete analysis of one swimmer's results page.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub swimmer: SwimmerPerformance,
    pub performance: PerformanceData,
    pub meet_breakdown: MeetBreakdown,
    pub personal_bests: PersonalBests,
    pub clubs: Vec<ClubInfo>,
    pub summary: PerformanceSummary,
    pub insights: PerformanceInsights,
    pub event_distribution: BTreeMap<String, usize>,
}
