use std::{collections::HashMap, sync::Arc};

use chrono::{Days, NaiveDateTime};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    fare::{FareCalculator, FareOptions, RiderType},
    network::{Journey, Network},
    rider::Rider,
    shared::{Amount, Clock, IdSequence, SystemClock},
    ticketing::{self, Pass, Ticket},
    wallet,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("No route found from {from} to {to}")]
    NoRouteFound { from: String, to: String },
    #[error("Unknown pass type: {0}")]
    UnknownPassType(String),
    #[error("Ticket not found: {0}")]
    TicketNotFound(String),
    #[error("Ticket {0} already used or invalid")]
    TicketAlreadyUsed(String),
    #[error("Pass not found: {0}")]
    PassNotFound(String),
    #[error("Pass {0} expired or inactive")]
    PassExpiredOrInactive(String),
    #[error(transparent)]
    Wallet(#[from] wallet::Error),
}

impl From<ticketing::Error> for Error {
    fn from(value: ticketing::Error) -> Self {
        match value {
            ticketing::Error::AlreadyUsed(id) => Self::TicketAlreadyUsed(id.to_string()),
        }
    }
}

/// What a journey costs a given rider at a given time.
#[derive(Debug, Clone, Serialize)]
pub struct Quote {
    pub journey: Journey,
    pub fare: Amount,
    /// The pass covering the journey, if any.
    pub pass: Option<Arc<str>>,
}

/// Plans, prices and issues tickets and passes, and validates them at the gate.
pub struct MetroSystem {
    network: Network,
    fares: FareCalculator,
    clock: Arc<dyn Clock>,
    issued_tickets: HashMap<Arc<str>, Ticket>,
    issued_passes: HashMap<Arc<str>, Pass>,
    ticket_ids: IdSequence,
    pass_ids: IdSequence,
    rider_ids: IdSequence,
}

impl MetroSystem {
    pub fn new(network: Network, fares: FareCalculator) -> Self {
        Self {
            network,
            fares,
            clock: Arc::new(SystemClock),
            issued_tickets: HashMap::new(),
            issued_passes: HashMap::new(),
            ticket_ids: IdSequence::new("TKT"),
            pass_ids: IdSequence::new("PASS"),
            rider_ids: IdSequence::new("RIDER"),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    pub fn fares(&self) -> &FareCalculator {
        &self.fares
    }

    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    pub fn register_rider(&mut self, name: &str, rider_type: RiderType) -> Rider {
        let rider = Rider::new(self.rider_ids.next_id(), name, rider_type);
        info!("Registered rider {} ({})", rider.id, rider.rider_type);
        rider
    }

    pub fn plan(&self, src: &str, dst: &str) -> Result<Journey, self::Error> {
        let journey = self.network.planner().shortest_path(src, dst);
        if journey.is_empty() {
            return Err(self::Error::NoRouteFound {
                from: src.to_string(),
                to: dst.to_string(),
            });
        }
        Ok(journey)
    }

    pub fn ticket(&self, id: &str) -> Option<&Ticket> {
        self.issued_tickets.get(id)
    }

    pub fn pass(&self, id: &str) -> Option<&Pass> {
        self.issued_passes.get(id)
    }

    /// Tickets this system issued to `rider`. Ids the rider holds from
    /// another system are skipped even when they collide with ours.
    pub fn tickets_for<'a>(&'a self, rider: &Rider) -> impl Iterator<Item = &'a Ticket> {
        rider
            .tickets
            .iter()
            .filter_map(|id| self.ticket(id))
            .filter(|ticket| ticket.rider_id == rider.id)
    }

    pub fn passes_for<'a>(&'a self, rider: &Rider) -> impl Iterator<Item = &'a Pass> {
        rider
            .passes
            .iter()
            .filter_map(|id| self.pass(id))
            .filter(|pass| pass.rider_id == rider.id)
    }

    /// First of the rider's passes that is usable at `at`.
    pub fn active_pass(&self, rider: &Rider, at: NaiveDateTime) -> Option<&Pass> {
        self.passes_for(rider).find(|pass| pass.is_active(at))
    }

    /// Prices a journey without charging anything.
    ///
    /// A rider holding an active pass travels for free. Otherwise the fare is
    /// capped by what is left of the daily cap on the calendar day of `when`.
    pub fn price_journey(
        &self,
        rider: &Rider,
        src: &str,
        dst: &str,
        when: NaiveDateTime,
    ) -> Result<Quote, self::Error> {
        let journey = self.plan(src, dst)?;
        if let Some(pass) = self.active_pass(rider, when) {
            debug!("{} travels on pass {}", rider.id, pass.id);
            return Ok(Quote {
                journey,
                fare: 0,
                pass: Some(pass.id.clone()),
            });
        }
        let opts = FareOptions::new(when, rider.rider_type);
        let fare = self.fares.compute_fare(journey.hops, &opts);
        let remaining = (self.fares.rules().daily_cap - rider.spent_today(when)).max(0);
        if fare > remaining {
            debug!("Capping fare {fare} to {remaining} for {}", rider.id);
        }
        Ok(Quote {
            journey,
            fare: fare.min(remaining),
            pass: None,
        })
    }

    pub fn buy_ticket(
        &mut self,
        rider: &mut Rider,
        src: &str,
        dst: &str,
        when: NaiveDateTime,
    ) -> Result<&Ticket, self::Error> {
        let quote = self.price_journey(rider, src, dst, when)?;
        if quote.pass.is_none() {
            rider
                .wallet
                .charge(quote.fare, format!("Ticket {src}→{dst}"), when)?;
            rider.add_spent(quote.fare, when);
        }
        let ticket = Ticket::new(
            self.ticket_ids.next_id(),
            rider,
            &quote.journey,
            quote.fare,
            when,
        );
        info!("Issued {ticket}");
        rider.tickets.push(ticket.id.clone());
        let ticket = self
            .issued_tickets
            .entry(ticket.id.clone())
            .or_insert(ticket);
        Ok(ticket)
    }

    pub fn buy_pass(
        &mut self,
        rider: &mut Rider,
        kind: &str,
        at: NaiveDateTime,
    ) -> Result<&Pass, self::Error> {
        let Some(rule) = self.fares.rules().pass(kind).copied() else {
            warn!("Unknown pass type {kind}");
            return Err(self::Error::UnknownPassType(kind.to_string()));
        };
        let expires_at = at
            .checked_add_days(Days::new(rule.duration_days.into()))
            .unwrap_or(NaiveDateTime::MAX);
        rider.wallet.charge(rule.price, format!("{kind} pass"), at)?;
        let pass = Pass::new(
            self.pass_ids.next_id(),
            rider,
            kind.into(),
            rule.price,
            at,
            expires_at,
        );
        info!("Issued {pass}");
        rider.passes.push(pass.id.clone());
        let pass = self.issued_passes.entry(pass.id.clone()).or_insert(pass);
        Ok(pass)
    }

    /// Consumes a ticket at the gate.
    pub fn validate_ticket(&mut self, id: &str) -> Result<(), self::Error> {
        let now = self.clock.now();
        let ticket = self
            .issued_tickets
            .get_mut(id)
            .ok_or_else(|| self::Error::TicketNotFound(id.to_string()))?;
        if let Err(err) = ticket.mark_used(now) {
            warn!("Rejected ticket {id} at gate");
            return Err(err.into());
        }
        info!("Ticket {id} validated");
        Ok(())
    }

    /// Checks a pass at the gate. The pass stays usable afterwards.
    pub fn validate_pass(&self, id: &str, at: NaiveDateTime) -> Result<(), self::Error> {
        let pass = self
            .pass(id)
            .ok_or_else(|| self::Error::PassNotFound(id.to_string()))?;
        if !pass.is_active(at) {
            warn!("Rejected pass {id} at gate");
            return Err(self::Error::PassExpiredOrInactive(id.to_string()));
        }
        debug!("Pass {id} validated");
        Ok(())
    }

    pub fn revoke_pass(&mut self, id: &str) -> Result<(), self::Error> {
        let pass = self
            .issued_passes
            .get_mut(id)
            .ok_or_else(|| self::Error::PassNotFound(id.to_string()))?;
        pass.revoke();
        info!("Pass {id} revoked");
        Ok(())
    }
}
