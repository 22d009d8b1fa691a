use std::{fmt::Display, str::FromStr};

use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const MINUTES_PER_HOUR: u16 = 60;
const MINUTES_PER_DAY: u16 = 24 * MINUTES_PER_HOUR;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid time of day {0:?}, expected HH:MM")]
pub struct InvalidClockTime(pub String);

/// Time of day with minute precision, stored as minutes since midnight.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime(u16);

impl ClockTime {
    pub const fn from_minutes(minutes: u16) -> Option<Self> {
        if minutes < MINUTES_PER_DAY {
            Some(Self(minutes))
        } else {
            None
        }
    }

    pub const fn as_minutes(&self) -> u16 {
        self.0
    }

    /// Minute-of-day of a timestamp, seconds are dropped.
    pub fn of(when: &NaiveDateTime) -> Self {
        let minutes = when.hour() * MINUTES_PER_HOUR as u32 + when.minute();
        Self(minutes as u16)
    }

    pub fn to_hm_string(&self) -> String {
        let h = self.0 / MINUTES_PER_HOUR;
        let m = self.0 % MINUTES_PER_HOUR;
        format!("{:02}:{:02}", h, m)
    }

    pub fn from_hm(time: &str) -> Option<Self> {
        let mut split = time.split(':');
        let hours = parse_field(split.next()?)?;
        let minutes = parse_field(split.next()?)?;
        if split.next().is_some() || hours >= 24 || minutes >= MINUTES_PER_HOUR {
            return None;
        }
        Some(Self(hours * MINUTES_PER_HOUR + minutes))
    }
}

// Digits only, no sign or whitespace
fn parse_field(field: &str) -> Option<u16> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

impl Display for ClockTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hm_string())
    }
}

impl FromStr for ClockTime {
    type Err = InvalidClockTime;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hm(s).ok_or_else(|| InvalidClockTime(s.to_string()))
    }
}

impl TryFrom<String> for ClockTime {
    type Error = InvalidClockTime;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(value: ClockTime) -> Self {
        value.to_hm_string()
    }
}

/// Source of "now" for the few places that stamp time implicitly.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

#[test]
fn parse_unparse_1() {
    let time = "00:00";
    let ctime = ClockTime::from_hm(time).unwrap();
    assert_eq!(time, ctime.to_hm_string())
}

#[test]
fn parse_unparse_2() {
    let time = "07:30";
    let ctime = ClockTime::from_hm(time).unwrap();
    assert_eq!(time, ctime.to_hm_string())
}

#[test]
fn parse_unparse_3() {
    let time = "23:59";
    let ctime = ClockTime::from_hm(time).unwrap();
    assert_eq!(time, ctime.to_hm_string())
}

#[test]
fn valid_time_test_1() {
    assert_eq!(ClockTime::from_hm("00:01").unwrap().as_minutes(), 1);
}

#[test]
fn valid_time_test_2() {
    assert_eq!(ClockTime::from_hm("17:30").unwrap().as_minutes(), 1050);
}

#[test]
fn valid_time_test_3() {
    assert_eq!(ClockTime::from_hm("7:05").unwrap().as_minutes(), 425);
}

#[test]
fn invalid_time_test_1() {
    assert!(ClockTime::from_hm("07:3a").is_none())
}

#[test]
fn invalid_time_test_2() {
    assert!(ClockTime::from_hm("07").is_none())
}

#[test]
fn invalid_time_test_3() {
    assert!(ClockTime::from_hm("24:00").is_none());
    assert!(ClockTime::from_hm("10:60").is_none());
}

#[test]
fn invalid_time_test_4() {
    assert!(ClockTime::from_hm("10:30:00").is_none())
}

#[test]
fn invalid_time_test_5() {
    assert!(ClockTime::from_hm("+7:+5").is_none());
    assert!(ClockTime::from_hm("07:+5").is_none());
    assert!(ClockTime::from_hm(" 7:05").is_none());
}

#[test]
fn minute_of_day_test() {
    let when = chrono::NaiveDate::from_ymd_opt(2024, 3, 1)
        .unwrap()
        .and_hms_opt(17, 45, 59)
        .unwrap();
    assert_eq!(ClockTime::of(&when).to_hm_string(), "17:45");
}
