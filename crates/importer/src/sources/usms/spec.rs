use lazy_static::lazy_static;
use regex::Regex;

use crate::{ImporterError, Result};

pub const RESULTS_BASE_URL: &str = "https://www.usms.org/comp/meets/indresults.php";

lazy_static! {
    static ref SWIMMER_ID_PATTERN: Regex =
        Regex::new(r"^[A-Z]{2}\d{2,3}[A-Z]$").expect("swimmer id pattern is valid");
}

/// USMS swimmer ids are two letters, two or three digits and a letter,
/// e.g. "MZ99C". Case does not matter.
pub fn validate_swimmer_id(swimmer_id: &str) -> bool {
    SWIMMER_ID_PATTERN.is_match(&swimmer_id.to_uppercase())
}

/// Individual results page for a swimmer, all strokes and courses.
pub fn profile_url(swimmer_id: &str) -> String {
    format!(
        "{}?SwimmerID={}&Sex=&StrokeID=0&Distance=&CourseID=0&lowage=&highage=",
        RESULTS_BASE_URL, swimmer_id
    )
}

/// Reads the `SwimmerID` query parameter of a results URL.
pub fn swimmer_id_from_url(url: &str) -> Option<String> {
    let parsed = reqwest::Url::parse(url).ok()?;
    parsed
        .query_pairs()
        .find(|(key, _)| key == "SwimmerID")
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

/// A resolved results page address, built from either a full URL or a bare
/// swimmer id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwimmerLocator {
    url: String,
    swimmer_id: Option<String>,
}

impl SwimmerLocator {
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();

        if input.is_empty() {
            return Err(ImporterError::InvalidLocator(
                "a results URL or swimmer id is required".to_string(),
            ));
        }

        if input.starts_with("http") {
            return Ok(Self::from_url(input.to_string()));
        }

        if input.contains("usms.org") {
            return Ok(Self::from_url(format!("https://{}", input)));
        }

        Self::from_swimmer_id(input)
    }

    pub fn from_swimmer_id(swimmer_id: &str) -> Result<Self> {
        if !validate_swimmer_id(swimmer_id) {
            return Err(ImporterError::InvalidLocator(format!(
                "'{}' is neither a URL nor a swimmer id like MZ99C",
                swimmer_id
            )));
        }

        let swimmer_id = swimmer_id.to_uppercase();
        Ok(Self {
            url: profile_url(&swimmer_id),
            swimmer_id: Some(swimmer_id),
        })
    }

    fn from_url(url: String) -> Self {
        let swimmer_id = swimmer_id_from_url(&url);
        Self { url, swimmer_id }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn swimmer_id(&self) -> Option<&str> {
        self.swimmer_id.as_deref()
    }
}

impl std::str::FromStr for SwimmerLocator {
    type Err = ImporterError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for SwimmerLocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.url)
    }
}
