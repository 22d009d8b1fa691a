use std::{collections::BTreeMap, sync::Arc};

use chrono::{NaiveDate, NaiveDateTime};

use crate::{
    fare::RiderType,
    shared::Amount,
    wallet::{self, Wallet},
};

#[derive(Debug, Clone)]
pub struct Rider {
    pub id: Arc<str>,
    pub name: Arc<str>,
    pub rider_type: RiderType,
    pub wallet: Wallet,
    // Ids into the issuing system's registries
    pub(crate) tickets: Vec<Arc<str>>,
    pub(crate) passes: Vec<Arc<str>>,
    daily_spent: BTreeMap<NaiveDate, Amount>,
}

impl Rider {
    pub fn new(id: Arc<str>, name: &str, rider_type: RiderType) -> Self {
        let name: Arc<str> = name.into();
        Self {
            id,
            wallet: Wallet::new(name.clone()),
            name,
            rider_type,
            tickets: Vec::new(),
            passes: Vec::new(),
            daily_spent: BTreeMap::new(),
        }
    }

    pub fn deposit(&mut self, amount: Amount, at: NaiveDateTime) -> Result<Amount, wallet::Error> {
        self.wallet.deposit(amount, "Deposit", at)
    }

    pub fn ticket_ids(&self) -> &[Arc<str>] {
        &self.tickets
    }

    pub fn pass_ids(&self) -> &[Arc<str>] {
        &self.passes
    }

    pub fn add_spent(&mut self, amount: Amount, at: NaiveDateTime) {
        *self.daily_spent.entry(at.date()).or_default() += amount;
    }

    pub fn spent_on(&self, date: NaiveDate) -> Amount {
        self.daily_spent.get(&date).copied().unwrap_or_default()
    }

    /// Spend on the calendar day of `at`.
    pub fn spent_today(&self, at: NaiveDateTime) -> Amount {
        self.spent_on(at.date())
    }
}
