use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::shared::errors::AppError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ReadingStatus {
    NotStarted,
    InProgress,
    Completed,
    OnHold,
    Dropped,
}

impl ReadingStatus {
    pub const ALL: [ReadingStatus; 5] = [
        ReadingStatus::NotStarted,
        ReadingStatus::InProgress,
        ReadingStatus::Completed,
        ReadingStatus::OnHold,
        ReadingStatus::Dropped,
    ];

    /// Fixed ordering used by the status sort: active reads first, then the
    /// backlog, then finished and shelved books. Not alphabetical.
    pub fn sort_rank(self) -> u8 {
        match self {
            ReadingStatus::InProgress => 0,
            ReadingStatus::NotStarted => 1,
            ReadingStatus::Completed => 2,
            ReadingStatus::OnHold => 3,
            ReadingStatus::Dropped => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ReadingStatus::NotStarted => "NotStarted",
            ReadingStatus::InProgress => "InProgress",
            ReadingStatus::Completed => "Completed",
            ReadingStatus::OnHold => "OnHold",
            ReadingStatus::Dropped => "Dropped",
        }
    }
}

impl std::fmt::Display for ReadingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReadingStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NotStarted" => Ok(ReadingStatus::NotStarted),
            "InProgress" => Ok(ReadingStatus::InProgress),
            "Completed" => Ok(ReadingStatus::Completed),
            "OnHold" => Ok(ReadingStatus::OnHold),
            "Dropped" => Ok(ReadingStatus::Dropped),
            other => Err(AppError::InvalidInput(format!(
                "Unknown reading status '{}'",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_storage_text() {
        for status in ReadingStatus::ALL {
            assert_eq!(status.to_string().parse::<ReadingStatus>().unwrap(), status);
        }
        assert!("Reading".parse::<ReadingStatus>().is_err());
    }

    #[test]
    fn active_reads_rank_first() {
        let mut ranked = ReadingStatus::ALL;
        ranked.sort_by_key(|s| s.sort_rank());
        assert_eq!(
            ranked,
            [
                ReadingStatus::InProgress,
                ReadingStatus::NotStarted,
                ReadingStatus::Completed,
                ReadingStatus::OnHold,
                ReadingStatus::Dropped,
            ]
        );
    }
}
