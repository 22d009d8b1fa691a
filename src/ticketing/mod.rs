use std::{fmt::Display, sync::Arc};

use chrono::NaiveDateTime;
use serde::Serialize;
use thiserror::Error;

use crate::{fare::RiderType, network::Journey, rider::Rider, shared::Amount};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Ticket {0} already used or invalid")]
    AlreadyUsed(Arc<str>),
}

#[derive(Debug, Clone, Serialize)]
pub struct Ticket {
    pub id: Arc<str>,
    pub rider_id: Arc<str>,
    pub src: Arc<str>,
    pub dst: Arc<str>,
    pub hops: usize,
    pub fare: Amount,
    pub rider_type: RiderType,
    pub issued_at: NaiveDateTime,
    valid: bool,
    used_at: Option<NaiveDateTime>,
}

impl Ticket {
    pub fn new(
        id: Arc<str>,
        rider: &Rider,
        journey: &Journey,
        fare: Amount,
        issued_at: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            rider_id: rider.id.clone(),
            src: journey.path.first().cloned().unwrap_or_default(),
            dst: journey.path.last().cloned().unwrap_or_default(),
            hops: journey.hops,
            fare,
            rider_type: rider.rider_type,
            issued_at,
            valid: true,
            used_at: None,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn used_at(&self) -> Option<NaiveDateTime> {
        self.used_at
    }

    /// Consumes the ticket, this can only happen once.
    pub fn mark_used(&mut self, at: NaiveDateTime) -> Result<(), self::Error> {
        if !self.valid {
            return Err(self::Error::AlreadyUsed(self.id.clone()));
        }
        self.valid = false;
        self.used_at = Some(at);
        Ok(())
    }
}

impl Display for Ticket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[Ticket {}] {} -> {} | hops: {} | fare: ₹{} | {}",
            self.id, self.src, self.dst, self.hops, self.fare, self.rider_type
        )
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Pass {
    pub id: Arc<str>,
    pub rider_id: Arc<str>,
    pub kind: Arc<str>,
    pub price: Amount,
    pub rider_type: RiderType,
    pub issued_at: NaiveDateTime,
    pub expires_at: NaiveDateTime,
    active: bool,
}

impl Pass {
    pub fn new(
        id: Arc<str>,
        rider: &Rider,
        kind: Arc<str>,
        price: Amount,
        issued_at: NaiveDateTime,
        expires_at: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            rider_id: rider.id.clone(),
            kind,
            price,
            rider_type: rider.rider_type,
            issued_at,
            expires_at,
            active: true,
        }
    }

    /// Not revoked and not yet expired at `at`.
    pub fn is_active(&self, at: NaiveDateTime) -> bool {
        self.active && self.expires_at > at
    }

    pub fn is_revoked(&self) -> bool {
        !self.active
    }

    pub fn revoke(&mut self) {
        self.active = false;
    }
}

impl Display for Pass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[Pass {}] {} | ₹{} | rider: {} | expires: {}",
            self.id,
            self.kind,
            self.price,
            self.rider_type,
            self.expires_at.date()
        )
    }
}
