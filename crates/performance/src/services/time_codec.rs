use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref SWIM_TIME_PATTERN: Regex =
        Regex::new(r"^(\d+:)?\d+\.\d+s?$").expect("swim time pattern is valid");
}

/// Inclusive range of plausible swim times, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwimTimeBounds {
    pub min_seconds: f64,
    pub max_seconds: f64,
}

impl SwimTimeBounds {
    pub const DEFAULT_MIN_SECONDS: f64 = 10.0;
    pub const DEFAULT_MAX_SECONDS: f64 = 7200.0;

    pub fn new(min_seconds: f64, max_seconds: f64) -> Self {
        Self {
            min_seconds,
            max_seconds,
        }
    }

    /// Returns true when `text` looks like a clock time and its value falls
    /// inside the bounds.
    pub fn accepts(&self, text: &str) -> bool {
        let text = text.trim();
        if !SWIM_TIME_PATTERN.is_match(text) {
            return false;
        }

        let seconds = time_to_seconds(text);
        self.min_seconds <= seconds && seconds <= self.max_seconds
    }
}

impl Default for SwimTimeBounds {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MIN_SECONDS, Self::DEFAULT_MAX_SECONDS)
    }
}

/// Converts "SS.hh" or "M:SS.hh" to seconds. Anything else yields 0.0.
pub fn time_to_seconds(text: &str) -> f64 {
    let text = text.trim();
    let text = text.strip_suffix('s').unwrap_or(text);

    let parts: Vec<&str> = text.split(':').collect();
    let seconds = match parts.as_slice() {
        [seconds] => seconds.parse::<f64>().ok(),
        [minutes, seconds] => match (minutes.parse::<u32>(), seconds.parse::<f64>()) {
            (Ok(minutes), Ok(seconds)) => Some(f64::from(minutes) * 60.0 + seconds),
            _ => None,
        },
        _ => None,
    };

    seconds.filter(|s| s.is_finite()).unwrap_or(0.0)
}

pub fn is_valid_swim_time(text: &str) -> bool {
    SwimTimeBounds::default().accepts(text)
}

pub fn format_time_display(seconds: f64) -> String {
    if seconds < 60.0 {
        format!("{:.2}", seconds)
    } else {
        let minutes = (seconds / 60.0).floor() as u64;
        let remaining = seconds % 60.0;
        format!("{}:{:05.2}", minutes, remaining)
    }
}

/// Signed one-decimal difference between two clock strings, e.g. "-0.4s".
pub fn time_improvement(old_time: &str, new_time: &str) -> String {
    let difference = time_to_seconds(new_time) - time_to_seconds(old_time);

    if difference < 0.0 {
        format!("-{:.1}s", difference.abs())
    } else if difference > 0.0 {
        format!("+{:.1}s", difference)
    } else {
        "0.0s".to_string()
    }
}
