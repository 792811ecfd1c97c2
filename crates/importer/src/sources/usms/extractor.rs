use performance::models::{CourseType, ScrapedData, SwimResult, SwimmerInfo};
use performance::services::age_group::extract_age_group_from_age;
use performance::services::time_codec::SwimTimeBounds;
use scraper::Html;
use tracing::{debug, warn};

use super::headings::{age_from_heading, detect_course_type_from_header, swimmer_from_heading};
use super::page::{PageElement, TableRow, collect_elements};

/// Minimum cells of a result row: name, date, age, club, event, heat/lane,
/// time, place.
const RESULT_ROW_CELLS: usize = 8;

/// State threaded through the element walk.
#[derive(Debug, Default)]
struct Walk {
    course_type: CourseType,
    results: Vec<SwimResult>,
}

/// Turns a USMS individual results page into swimmer info and result rows.
#[derive(Debug, Clone, Default)]
pub struct PageExtractor {
    bounds: SwimTimeBounds,
}

impl PageExtractor {
    pub fn new(bounds: SwimTimeBounds) -> Self {
        Self { bounds }
    }

    /// `None` when the page holds no usable result rows.
    pub fn extract(&self, html: &str) -> Option<ScrapedData> {
        let document = Html::parse_document(html);
        let elements = collect_elements(&document);
        self.extract_elements(&elements)
    }

    pub fn extract_elements(&self, elements: &[PageElement]) -> Option<ScrapedData> {
        log_page_structure(elements);

        let results = self.extract_results(elements);
        if results.is_empty() {
            warn!("No results found on the page");
            return None;
        }

        debug!(results = results.len(), "Extracted results");
        Some(ScrapedData {
            swimmer: extract_swimmer_info(elements),
            results,
        })
    }

    /// Walks headings and tables in order. Each table takes the course type
    /// of the last heading that named one, short course yards before any.
    pub fn extract_results(&self, elements: &[PageElement]) -> Vec<SwimResult> {
        elements
            .iter()
            .fold(Walk::default(), |walk, element| self.visit(walk, element))
            .results
    }

    fn visit(&self, mut walk: Walk, element: &PageElement) -> Walk {
        match element {
            PageElement::Heading(text) => {
                if let Some(course_type) = detect_course_type_from_header(text) {
                    debug!(heading = %text, %course_type, "Course type heading");
                    walk.course_type = course_type;
                }
            }
            PageElement::Table(rows) => {
                let course_type = walk.course_type;
                walk.results.extend(
                    rows.iter()
                        .filter_map(|row| self.parse_result_row(&row.cells, course_type)),
                );
            }
        }
        walk
    }

    pub fn parse_result_row(&self, cells: &[String], course_type: CourseType) -> Option<SwimResult> {
        if cells.len() < RESULT_ROW_CELLS
            || cells.iter().all(|cell| cell.chars().count() < 2)
        {
            return None;
        }

        let [_name, date, age, club, event, _heat_lane, time, place, ..] = cells else {
            return None;
        };

        if !self.bounds.accepts(time) {
            return None;
        }

        Some(SwimResult {
            event: event.clone(),
            time: time.clone(),
            place: parse_place(place),
            date: date.clone(),
            club: club.clone(),
            age_group: extract_age_group_from_age(age),
            course_type,
        })
    }
}

fn parse_place(text: &str) -> u32 {
    if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
        return 0;
    }
    text.parse().unwrap_or(0)
}

/// Swimmer identity from the page headings and the first result row.
/// Missing pieces fall back to the "Unknown" placeholders.
pub fn extract_swimmer_info(elements: &[PageElement]) -> SwimmerInfo {
    let headings: Vec<&str> = elements
        .iter()
        .filter_map(|element| match element {
            PageElement::Heading(text) => Some(text.as_str()),
            PageElement::Table(_) => None,
        })
        .collect();

    let name = headings
        .iter()
        .find_map(|text| swimmer_from_heading(text))
        .map(|(name, swims)| {
            debug!(swimmer = %name, swims, "Found swimmer heading");
            name
        })
        .unwrap_or_else(|| SwimmerInfo::UNKNOWN_NAME.to_string());

    let age = headings
        .iter()
        .find_map(|text| age_from_heading(text))
        .unwrap_or(0);

    let team = elements
        .iter()
        .filter_map(|element| match element {
            PageElement::Table(rows) => Some(rows),
            PageElement::Heading(_) => None,
        })
        .flatten()
        .find(|row: &&TableRow| !row.is_header && row.cells.len() >= 4)
        .map(|row| row.cells[3].clone())
        .unwrap_or_else(|| SwimmerInfo::UNKNOWN_TEAM.to_string());

    SwimmerInfo { name, age, team }
}

fn log_page_structure(elements: &[PageElement]) {
    for (index, element) in elements.iter().enumerate() {
        match element {
            PageElement::Heading(text) => debug!(index, heading = %text, "Page heading"),
            PageElement::Table(rows) => debug!(index, rows = rows.len(), "Page table"),
        }
    }
}
