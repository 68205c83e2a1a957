//! Reservation duration and group size choices

use chrono::{NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};

/// Durations offered by the duration picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationDuration {
    HalfHour,
    OneHour,
    OneHourHalf,
    TwoHours,
    TwoHoursHalf,
    ThreeHours,
}

impl ReservationDuration {
    pub const ALL: [ReservationDuration; 6] = [
        Self::HalfHour,
        Self::OneHour,
        Self::OneHourHalf,
        Self::TwoHours,
        Self::TwoHoursHalf,
        Self::ThreeHours,
    ];

    pub fn minutes(self) -> i64 {
        match self {
            Self::HalfHour => 30,
            Self::OneHour => 60,
            Self::OneHourHalf => 90,
            Self::TwoHours => 120,
            Self::TwoHoursHalf => 150,
            Self::ThreeHours => 180,
        }
    }

    /// End time as `HH:mm`, wrapping past midnight.
    pub fn end_time_after(self, now: NaiveTime) -> String {
        let end = now + TimeDelta::minutes(self.minutes());
        end.format("%H:%M").to_string()
    }
}

/// Party sizes offered for group reservations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum GroupSize {
    Two,
    Three,
    Four,
}

impl GroupSize {
    pub fn count(self) -> u8 {
        match self {
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
        }
    }
}

impl TryFrom<u8> for GroupSize {
    type Error = String;

    fn try_from(count: u8) -> Result<Self, Self::Error> {
        match count {
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            4 => Ok(Self::Four),
            other => Err(format!("group size must be 2, 3 or 4, got {other}")),
        }
    }
}

impl From<GroupSize> for u8 {
    fn from(size: GroupSize) -> u8 {
        size.count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_end_time_after() {
        assert_eq!(ReservationDuration::HalfHour.end_time_after(at(9, 45)), "10:15");
        assert_eq!(ReservationDuration::ThreeHours.end_time_after(at(12, 0)), "15:00");
        assert_eq!(ReservationDuration::TwoHoursHalf.end_time_after(at(22, 40)), "01:10");
    }

    #[test]
    fn test_picker_minutes() {
        let minutes: Vec<i64> = ReservationDuration::ALL.iter().map(|d| d.minutes()).collect();
        assert_eq!(minutes, vec![30, 60, 90, 120, 150, 180]);
    }

    #[test]
    fn test_group_size() {
        assert_eq!(GroupSize::try_from(3), Ok(GroupSize::Three));
        assert!(GroupSize::try_from(5).is_err());
        assert_eq!(serde_json::to_string(&GroupSize::Four).unwrap(), "4");
        assert!(serde_json::from_str::<GroupSize>("1").is_err());
    }
}
