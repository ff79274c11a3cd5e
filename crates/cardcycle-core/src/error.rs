use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Invalid month: {0}")]
    InvalidMonth(u32),
    #[error("Invalid date: {year}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    #[error("Date out of range: {0}")]
    DateOutOfRange(String),
}
