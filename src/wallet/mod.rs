use std::sync::Arc;

use chrono::NaiveDateTime;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::shared::{Amount, IdSequence};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid amount: {0}")]
    InvalidAmount(Amount),
    #[error("Insufficient balance: have {balance}, need {requested}")]
    InsufficientBalance { balance: Amount, requested: Amount },
    #[error("Balance limit exceeded: have {balance}, adding {requested}")]
    BalanceOverflow { balance: Amount, requested: Amount },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Credit,
    Debit,
}

#[derive(Debug, Clone, Serialize)]
pub struct Transaction {
    pub id: Arc<str>,
    pub kind: TransactionKind,
    pub amount: Amount,
    pub note: String,
    pub at: NaiveDateTime,
}

/// Balance with an append-only history. The balance never goes below zero.
#[derive(Debug, Clone)]
pub struct Wallet {
    owner: Arc<str>,
    balance: Amount,
    history: Vec<Transaction>,
    ids: IdSequence,
}

impl Wallet {
    pub fn new(owner: impl Into<Arc<str>>) -> Self {
        Self {
            owner: owner.into(),
            balance: 0,
            history: Vec::new(),
            ids: IdSequence::new("TXN"),
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }

    pub fn history(&self) -> &[Transaction] {
        &self.history
    }

    /// Adds `amount` and returns the new balance.
    pub fn deposit(
        &mut self,
        amount: Amount,
        note: impl Into<String>,
        at: NaiveDateTime,
    ) -> Result<Amount, self::Error> {
        if amount <= 0 {
            warn!("Rejected deposit of {amount} to {}", self.owner);
            return Err(self::Error::InvalidAmount(amount));
        }
        let Some(balance) = self.balance.checked_add(amount) else {
            warn!("Rejected deposit of {amount} to {}, balance would overflow", self.owner);
            return Err(self::Error::BalanceOverflow {
                balance: self.balance,
                requested: amount,
            });
        };
        self.balance = balance;
        self.record(TransactionKind::Credit, amount, note.into(), at);
        Ok(self.balance)
    }

    /// Takes `amount` and returns the new balance. A zero charge is allowed
    /// and still recorded.
    pub fn charge(
        &mut self,
        amount: Amount,
        note: impl Into<String>,
        at: NaiveDateTime,
    ) -> Result<Amount, self::Error> {
        if amount < 0 {
            warn!("Rejected charge of {amount} to {}", self.owner);
            return Err(self::Error::InvalidAmount(amount));
        }
        if self.balance < amount {
            warn!(
                "Insufficient balance for {}: have {}, need {amount}",
                self.owner, self.balance
            );
            return Err(self::Error::InsufficientBalance {
                balance: self.balance,
                requested: amount,
            });
        }
        self.balance -= amount;
        self.record(TransactionKind::Debit, amount, note.into(), at);
        Ok(self.balance)
    }

    /// The last `limit` entries, oldest first.
    pub fn statement(&self, limit: usize) -> &[Transaction] {
        let start = self.history.len().saturating_sub(limit);
        &self.history[start..]
    }

    fn record(&mut self, kind: TransactionKind, amount: Amount, note: String, at: NaiveDateTime) {
        let id = self.ids.next_id();
        debug!("{} {kind:?} {amount} ({note})", self.owner);
        self.history.push(Transaction {
            id,
            kind,
            amount,
            note,
            at,
        });
    }
}
