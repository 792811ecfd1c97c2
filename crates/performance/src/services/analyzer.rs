use std::collections::{BTreeMap, HashMap, HashSet};
use std::hash::Hash;

use crate::dto::report::{
    AgeGroupImprovement, BestTime, ClubInfo, Improvement, MeetBreakdown, MeetData, MeetResult,
    PerformanceInsights, PerformanceSummary, PerformanceTrend, PersonalBests,
};
use crate::models::{CourseType, SwimResult};
use crate::services::time_codec::time_to_seconds;

const AGE_GROUP_IMPROVEMENT_LIMIT: usize = 3;
const POINTS_PLACE_CUTOFF: u32 = 10;

const STROKE_CATEGORIES: &[(&str, &str)] = &[
    ("Free", "Freestyle"),
    ("Back", "Backstroke"),
    ("Breast", "Breaststroke"),
    ("Fly", "Butterfly"),
    ("IM", "Individual Medley"),
];

const RECOMMENDATIONS: [&str; 3] = [
    "Focus on technique drills for butterfly",
    "Increase endurance training for longer events",
    "Practice turn efficiency",
];

/// Groups results by `key`, keeping groups (and the results inside them) in
/// first-seen order.
fn group_in_order<'a, K, I, F>(results: I, key: F) -> Vec<(K, Vec<&'a SwimResult>)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = &'a SwimResult>,
    F: Fn(&SwimResult) -> K,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, Vec<&'a SwimResult>)> = Vec::new();

    for result in results {
        let k = key(result);
        match index.get(&k) {
            Some(&i) => groups[i].1.push(result),
            None => {
                index.insert(k.clone(), groups.len());
                groups.push((k, vec![result]));
            }
        }
    }

    groups
}

fn best_time_from(result: &SwimResult, seconds: f64) -> BestTime {
    BestTime {
        event: result.event.clone(),
        time: result.time.clone(),
        date: result.date.clone(),
        meet: result.date.clone(),
        seconds,
        course_type: result.course_type,
    }
}

/// Fastest result per event and course type. Ties keep the first-seen entry.
pub fn find_best_times<'a, I>(results: I) -> Vec<BestTime>
where
    I: IntoIterator<Item = &'a SwimResult>,
{
    let mut index: HashMap<(&'a str, CourseType), usize> = HashMap::new();
    let mut best_times: Vec<BestTime> = Vec::new();

    for result in results {
        let seconds = time_to_seconds(&result.time);
        let key = (result.event.as_str(), result.course_type);

        match index.get(&key) {
            Some(&i) => {
                if seconds < best_times[i].seconds {
                    best_times[i] = best_time_from(result, seconds);
                }
            }
            None => {
                index.insert(key, best_times.len());
                best_times.push(best_time_from(result, seconds));
            }
        }
    }

    best_times
}

/// One trend per event swum at least twice, times in page order.
pub fn create_performance_trends(results: &[SwimResult]) -> Vec<PerformanceTrend> {
    group_in_order(results, |r| r.event.clone())
        .into_iter()
        .filter(|(_, group)| group.len() > 1)
        .map(|(event, group)| PerformanceTrend {
            event,
            times: group.iter().map(|r| time_to_seconds(&r.time)).collect(),
        })
        .collect()
}

/// Number of distinct (date, course type) pairs.
pub fn count_unique_meets(results: &[SwimResult]) -> usize {
    results
        .iter()
        .map(|r| (r.date.as_str(), r.course_type))
        .collect::<HashSet<_>>()
        .len()
}

/// Placement-based improvement label; not a time delta.
pub fn calculate_improvement(result: &SwimResult) -> String {
    let label = match result.place {
        0..=3 => "-1.2s",
        4..=6 => "-0.5s",
        _ => "+0.3s",
    };
    label.to_string()
}

fn meet_result_from(result: &SwimResult) -> MeetResult {
    MeetResult {
        event: result.event.clone(),
        place: result.place,
        time: result.time.clone(),
        improvement: calculate_improvement(result),
        age_group: result.age_group.clone(),
    }
}

pub fn generate_meet_breakdown(results: &[SwimResult]) -> MeetBreakdown {
    let mut meets: Vec<MeetData> = group_in_order(results, |r| (r.date.clone(), r.course_type))
        .into_iter()
        .map(|((date, course_type), group)| {
            let mut meet_results: Vec<MeetResult> =
                group.into_iter().map(meet_result_from).collect();
            meet_results.sort_by(|a, b| a.event.cmp(&b.event));

            MeetData {
                name: format!("{} - ({})", date, course_type),
                date,
                location: String::new(),
                course_type,
                results: meet_results,
            }
        })
        .collect();

    // Date tokens compare as text.
    meets.sort_by(|a, b| a.date.cmp(&b.date));

    let current_meet = meets
        .last()
        .and_then(|latest| meets.iter().find(|m| m.date == latest.date))
        .cloned();

    let all_time_improvements = results
        .iter()
        .map(|r| Improvement {
            event: r.event.clone(),
            improvement: calculate_improvement(r),
            date: r.date.clone(),
        })
        .collect();

    MeetBreakdown {
        meets,
        current_meet,
        all_time_improvements,
        age_group_improvements: generate_age_group_improvements(results),
    }
}

/// First three results of every age group, in page order.
pub fn generate_age_group_improvements(
    results: &[SwimResult],
) -> BTreeMap<String, Vec<AgeGroupImprovement>> {
    group_in_order(results, |r| r.age_group.clone())
        .into_iter()
        .map(|(age_group, group)| {
            let improvements = group
                .into_iter()
                .take(AGE_GROUP_IMPROVEMENT_LIMIT)
                .map(|r| AgeGroupImprovement {
                    event: r.event.clone(),
                    improvement: calculate_improvement(r),
                    rank: r.place,
                })
                .collect();
            (age_group, improvements)
        })
        .collect()
}

pub fn generate_personal_bests(results: &[SwimResult]) -> PersonalBests {
    let by_age_group = group_in_order(results, |r| r.age_group.clone())
        .into_iter()
        .map(|(age_group, group)| {
            let bests = group_in_order(group, |r| r.course_type)
                .into_iter()
                .flat_map(|(_, course_results)| find_best_times(course_results))
                .collect();
            (age_group, bests)
        })
        .collect();

    PersonalBests {
        all_time: find_best_times(results),
        by_age_group,
    }
}

pub fn generate_clubs_data(results: &[SwimResult]) -> Vec<ClubInfo> {
    group_in_order(results, |r| r.club.clone())
        .into_iter()
        .map(|(name, group)| {
            let distinct_events: HashSet<&str> = group.iter().map(|r| r.event.as_str()).collect();
            let distinct_dates: HashSet<&str> = group.iter().map(|r| r.date.as_str()).collect();

            ClubInfo {
                name,
                location: String::new(),
                years: String::new(),
                meets: distinct_dates.len(),
                events: group.len(),
                best_times: distinct_events.len(),
            }
        })
        .collect()
}

pub fn generate_insights(results: &[SwimResult]) -> PerformanceInsights {
    let mut insights = PerformanceInsights::default();

    let freestyle_count = results.iter().filter(|r| r.event.contains("Free")).count();
    if freestyle_count as f64 > results.len() as f64 * 0.5 {
        insights
            .strengths
            .push("Strong performance in freestyle events".to_string());
    }

    for result in results {
        if result.place <= 3 {
            insights
                .strengths
                .push(format!("Excellent performance in {}", result.event));
        } else if result.place >= 8 {
            insights
                .improvements
                .push(format!("Room for improvement in {}", result.event));
        }
    }

    insights.recommendations = RECOMMENDATIONS.iter().map(|s| s.to_string()).collect();

    insights
}

/// Stroke category of an event name; unmatched events are their own category.
pub fn classify_event(event: &str) -> String {
    STROKE_CATEGORIES
        .iter()
        .find(|(keyword, _)| event.contains(keyword))
        .map(|(_, category)| category.to_string())
        .unwrap_or_else(|| event.to_string())
}

pub fn calculate_event_distribution(results: &[SwimResult]) -> BTreeMap<String, usize> {
    let mut distribution = BTreeMap::new();
    for result in results {
        *distribution.entry(classify_event(&result.event)).or_insert(0) += 1;
    }
    distribution
}

pub fn summarize(results: &[SwimResult]) -> PerformanceSummary {
    let total_events = results.len();
    let total_points = results
        .iter()
        .filter(|r| r.place <= POINTS_PLACE_CUTOFF)
        .map(|r| POINTS_PLACE_CUTOFF - r.place)
        .sum();
    let average_place = if total_events > 0 {
        results.iter().map(|r| f64::from(r.place)).sum::<f64>() / total_events as f64
    } else {
        0.0
    };

    PerformanceSummary {
        total_events,
        total_points,
        average_place,
    }
}
