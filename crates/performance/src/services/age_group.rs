/// Label used whenever an age cannot be placed in a bracket.
pub const UNKNOWN_AGE_GROUP: &str = "Unknown";

/// Masters age brackets, inclusive. `None` as the upper bound is open ended.
const AGE_GROUPS: &[(u32, Option<u32>, &str)] = &[
    (18, Some(24), "18-24"),
    (25, Some(29), "25-29"),
    (30, Some(34), "30-34"),
    (35, Some(39), "35-39"),
    (40, Some(44), "40-44"),
    (45, Some(49), "45-49"),
    (50, Some(54), "50-54"),
    (55, Some(59), "55-59"),
    (60, Some(64), "60-64"),
    (65, Some(69), "65-69"),
    (70, Some(74), "70-74"),
    (75, Some(79), "75-79"),
    (80, None, "80+"),
];

/// Maps the age column of a results row to a bracket label.
///
/// Text that already contains a '-' is assumed to be a bracket and passed
/// through untouched. Plain numbers go through the bracket table; anything
/// else is "Unknown".
pub fn extract_age_group_from_age(text: &str) -> String {
    if text.contains('-') {
        return text.to_string();
    }

    if !text.is_empty() && text.chars().all(|c| c.is_ascii_digit()) {
        return match text.parse::<u32>() {
            Ok(age) => age_to_age_group(age),
            Err(_) => UNKNOWN_AGE_GROUP.to_string(),
        };
    }

    UNKNOWN_AGE_GROUP.to_string()
}

pub fn age_to_age_group(age: u32) -> String {
    AGE_GROUPS
        .iter()
        .find(|(min, max, _)| age >= *min && max.is_none_or(|max| age <= max))
        .map(|(_, _, label)| label.to_string())
        .unwrap_or_else(|| UNKNOWN_AGE_GROUP.to_string())
}

pub fn is_valid_age_group(label: &str) -> bool {
    AGE_GROUPS.iter().any(|(_, _, group)| *group == label)
}

/// Inclusive range of a bracket label, `None` upper bound for "80+".
pub fn age_group_range(label: &str) -> Option<(u32, Option<u32>)> {
    AGE_GROUPS
        .iter()
        .find(|(_, _, group)| *group == label)
        .map(|(min, max, _)| (*min, *max))
}
