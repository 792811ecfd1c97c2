use lazy_static::lazy_static;
use performance::models::CourseType;
use regex::Regex;

lazy_static! {
    static ref COURSE_RESULTS_PATTERN: Regex =
        Regex::new(r"(SCY|SCM|LCM)\s+RESULTS").expect("course pattern is valid");
    static ref AGE_GROUP_PATTERN: Regex =
        Regex::new(r"(?i)(\d+)-(\d+)\s*Age Group").expect("age group pattern is valid");
    static ref SWIMMER_PATTERN: Regex =
        Regex::new(r"for (.+?) \((\d+) swims?\)").expect("swimmer pattern is valid");
}

/// Course type announced by a section heading, if any.
///
/// Age-group subheadings such as "25-29 Age Group" never name a course and
/// return `None`, so the active course type carries over them.
pub fn detect_course_type_from_header(text: &str) -> Option<CourseType> {
    let upper = text.to_uppercase();

    let named = CourseType::ALL.into_iter().find(|course| {
        upper.contains(&course.full_name().to_uppercase())
            || upper.contains(&format!("{} RESULTS", course.as_str()))
    });
    if named.is_some() {
        return named;
    }

    // Catches "<CODE> RESULTS" split by tabs, newlines or repeated spaces.
    if let Some(course) = COURSE_RESULTS_PATTERN
        .captures(&upper)
        .and_then(|caps| caps[1].parse::<CourseType>().ok())
    {
        return Some(course);
    }

    if !upper.contains("RESULTS") {
        return None;
    }

    CourseType::ALL
        .into_iter()
        .find(|course| upper.contains(course.as_str()))
}

/// Lower bound of the bracket named by an age-group heading.
pub fn age_from_heading(text: &str) -> Option<u32> {
    AGE_GROUP_PATTERN
        .captures(text)
        .and_then(|caps| caps[1].parse::<u32>().ok())
}

/// Name and swim count from "... Results for Jane Doe (45 swims)".
pub fn swimmer_from_heading(text: &str) -> Option<(String, u32)> {
    let caps = SWIMMER_PATTERN.captures(text)?;
    let name = caps[1].trim().to_string();
    let swims = caps[2].parse().ok()?;
    Some((name, swims))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_course_names() {
        assert_eq!(
            detect_course_type_from_header("Short Course Yards Results [ SCM | LCM ]"),
            Some(CourseType::Scy)
        );
        assert_eq!(
            detect_course_type_from_header("Short Course Meters Results"),
            Some(CourseType::Scm)
        );
        assert_eq!(
            detect_course_type_from_header("long course meters results"),
            Some(CourseType::Lcm)
        );
    }

    #[test]
    fn test_abbreviated_course_names() {
        assert_eq!(
            detect_course_type_from_header("LCM Results for 25-29 Age Group"),
            Some(CourseType::Lcm)
        );
        assert_eq!(
            detect_course_type_from_header("Results (SCM)"),
            Some(CourseType::Scm)
        );
    }

    #[test]
    fn test_headings_without_course() {
        assert_eq!(detect_course_type_from_header("25-29 Age Group"), None);
        assert_eq!(detect_course_type_from_header("30-34 Age Group"), None);
        assert_eq!(
            detect_course_type_from_header("USMS Individual Meet Results for Jane Doe (12 swims)"),
            None
        );
        assert_eq!(detect_course_type_from_header(""), None);
    }

    #[test]
    fn test_course_code_split_from_results_by_whitespace() {
        assert_eq!(
            detect_course_type_from_header("LCM\tResults (SCY archive below)"),
            Some(CourseType::Lcm)
        );
        assert_eq!(
            detect_course_type_from_header("SCM\n    Results"),
            Some(CourseType::Scm)
        );
    }

    #[test]
    fn test_age_from_heading() {
        assert_eq!(age_from_heading("40-44 age group"), Some(40));
        assert_eq!(age_from_heading("35-39 Age Group"), Some(35));
        assert_eq!(age_from_heading("Results"), None);
    }

    #[test]
    fn test_swimmer_from_heading() {
        assert_eq!(
            swimmer_from_heading("USMS Individual Meet Results for Jennifer Tran (45 swims)"),
            Some(("Jennifer Tran".to_string(), 45))
        );
        assert_eq!(
            swimmer_from_heading("Results for Sam Lee (1 swim)"),
            Some(("Sam Lee".to_string(), 1))
        );
        assert_eq!(swimmer_from_heading("Results"), None);
    }
}
