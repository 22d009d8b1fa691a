use std::{collections::BTreeMap, fmt::Display, fs, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    fare,
    shared::{Amount, ClockTime},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiderType {
    #[default]
    Adult,
    Student,
    Senior,
}

impl RiderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiderType::Adult => "adult",
            RiderType::Student => "student",
            RiderType::Senior => "senior",
        }
    }
}

impl Display for RiderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiderType {
    type Err = fare::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "adult" => Ok(Self::Adult),
            "student" => Ok(Self::Student),
            "senior" => Ok(Self::Senior),
            other => Err(fare::Error::UnknownRiderType(other.to_string())),
        }
    }
}

/// Time of day interval, both ends included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeakWindow {
    pub start: ClockTime,
    pub end: ClockTime,
}

impl PeakWindow {
    pub fn new(start: ClockTime, end: ClockTime) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, time: ClockTime) -> bool {
        time >= self.start && time <= self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassRule {
    pub price: Amount,
    pub duration_days: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FareRules {
    pub base: Amount,
    pub per_hop: Amount,
    pub peak_multiplier: f64,
    pub off_peak_multiplier: f64,
    pub student_discount: f64,
    pub senior_discount: f64,
    /// Most a rider pays for single journeys within one calendar day.
    pub daily_cap: Amount,
    pub passes: BTreeMap<String, PassRule>,
    pub peak_hours: Vec<PeakWindow>,
}

impl Default for FareRules {
    fn default() -> Self {
        // Both windows are well formed, from_minutes only rejects >= 24h.
        let window = |start: u16, end: u16| {
            PeakWindow::new(
                ClockTime::from_minutes(start).unwrap_or_default(),
                ClockTime::from_minutes(end).unwrap_or_default(),
            )
        };
        Self {
            base: 10,
            per_hop: 5,
            peak_multiplier: 1.25,
            off_peak_multiplier: 1.0,
            student_discount: 0.5,
            senior_discount: 0.6,
            daily_cap: 120,
            passes: BTreeMap::from([
                (
                    "weekly".to_string(),
                    PassRule {
                        price: 499,
                        duration_days: 7,
                    },
                ),
                (
                    "monthly".to_string(),
                    PassRule {
                        price: 1599,
                        duration_days: 30,
                    },
                ),
            ]),
            peak_hours: vec![window(7 * 60 + 30, 10 * 60 + 30), window(17 * 60 + 30, 20 * 60)],
        }
    }
}

impl FareRules {
    /// Parses rules from json, keys that are left out keep their default.
    pub fn from_json_str(json: &str) -> Result<Self, fare::Error> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, fare::Error> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn pass(&self, kind: &str) -> Option<&PassRule> {
        self.passes.get(kind)
    }

    pub fn is_peak(&self, time: ClockTime) -> bool {
        self.peak_hours.iter().any(|window| window.contains(time))
    }
}
