pub mod age_group;
pub mod analyzer;
pub mod report;
pub mod time_codec;
