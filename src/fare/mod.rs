mod rules;
pub use rules::*;

use std::io;

use chrono::NaiveDateTime;
use thiserror::Error;
use tracing::trace;

use crate::shared::{Amount, ClockTime};

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unknown rider type: {0}")]
    UnknownRiderType(String),
}

#[derive(Debug, Clone, Copy)]
pub struct FareOptions {
    pub when: NaiveDateTime,
    pub rider_type: RiderType,
}

impl FareOptions {
    pub fn new(when: NaiveDateTime, rider_type: RiderType) -> Self {
        Self { when, rider_type }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FareCalculator {
    rules: FareRules,
}

impl FareCalculator {
    pub fn new(rules: FareRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &FareRules {
        &self.rules
    }

    pub fn is_peak(&self, when: &NaiveDateTime) -> bool {
        self.rules.is_peak(ClockTime::of(when))
    }

    /// Fare for a journey of `hops` hops, rounded up.
    ///
    /// The first hop is covered by the base fare. The time multiplier and
    /// the rider discount are applied in that order.
    pub fn compute_fare(&self, hops: usize, opts: &FareOptions) -> Amount {
        let rules = &self.rules;
        let extra_hops = hops.saturating_sub(1) as Amount;
        let multiplier = if self.is_peak(&opts.when) {
            rules.peak_multiplier
        } else {
            rules.off_peak_multiplier
        };
        let mut fare = (rules.base + rules.per_hop * extra_hops) as f64 * multiplier;
        match opts.rider_type {
            RiderType::Adult => {}
            RiderType::Student => fare *= rules.student_discount,
            RiderType::Senior => fare *= rules.senior_discount,
        }
        let fare = (fare.ceil() as Amount).max(0);
        trace!(
            "Fare for {hops} hops as {} at {}: {fare}",
            opts.rider_type, opts.when
        );
        fare
    }
}
