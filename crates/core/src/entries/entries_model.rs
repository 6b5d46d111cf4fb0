//! Entry domain models.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// Whether an entry adds to or subtracts from the user's balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntryType {
    Income,
    Expense,
}

impl EntryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryType::Income => "INCOME",
            EntryType::Expense => "EXPENSE",
        }
    }
}

impl FromStr for EntryType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "INCOME" => Ok(EntryType::Income),
            "EXPENSE" => Ok(EntryType::Expense),
            _ => Err(format!("Unknown entry type: {}", s)),
        }
    }
}

/// Settlement state of an entry.
///
/// New entries start as `Pending` unless the caller sets a status explicitly.
/// Any transition between states is permitted once the entry is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntryStatus {
    #[default]
    Pending,
    Settled,
    Canceled,
}

impl EntryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryStatus::Pending => "PENDING",
            EntryStatus::Settled => "SETTLED",
            EntryStatus::Canceled => "CANCELED",
        }
    }
}

impl FromStr for EntryStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(EntryStatus::Pending),
            "SETTLED" => Ok(EntryStatus::Settled),
            "CANCELED" => Ok(EntryStatus::Canceled),
            _ => Err(format!("Unknown entry status: {}", s)),
        }
    }
}

/// A single financial entry (lançamento) for a given month and year.
///
/// The same immutable record is used as the input to the lifecycle
/// operations and as their persisted result: `id` is `None` until the
/// repository assigns one, and the business fields stay optional so the
/// validation rules can report which one is missing. Lifecycle operations
/// return fresh values instead of mutating their argument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub description: Option<String>,
    pub month: Option<i32>,
    pub year: Option<i32>,
    /// Owning user. Entries reference a persisted user by id; the user's own
    /// lifecycle is independent of the entries pointing at it.
    pub user_id: Option<i64>,
    pub amount: Option<Decimal>,
    pub kind: Option<EntryType>,
    pub status: Option<EntryStatus>,
    /// Registration date, stamped by the storage layer at insert when absent.
    pub recorded_at: Option<NaiveDate>,
}

impl Entry {
    /// Checks the business fields of this entry.
    ///
    /// The checks run in a fixed order and stop at the first failure, so a
    /// single actionable message is surfaced per call - the same contract a
    /// form-validation UI relies on. Callers and tests depend on the order.
    pub fn validate(&self) -> Result<()> {
        match self.description.as_deref() {
            Some(description) if !description.trim().is_empty() => {}
            _ => return Err(Error::BusinessRule("Informe uma Descrição válida.".to_string())),
        }

        match self.month {
            Some(month) if (1..=12).contains(&month) => {}
            _ => return Err(Error::BusinessRule("Informe um Mês válido.".to_string())),
        }

        match self.year {
            Some(year) if (1000..=9999).contains(&year) => {}
            _ => return Err(Error::BusinessRule("Informe um Ano válido.".to_string())),
        }

        if self.user_id.is_none() {
            return Err(Error::BusinessRule("Informe um Usuário.".to_string()));
        }

        match self.amount {
            Some(amount) if amount > Decimal::ZERO => {}
            _ => return Err(Error::BusinessRule("Informe um Valor válido.".to_string())),
        }

        if self.kind.is_none() {
            return Err(Error::BusinessRule(
                "Informe um Tipo de Lançamento.".to_string(),
            ));
        }

        Ok(())
    }
}

/// Optional-field filter for entry retrieval.
///
/// Absent fields are wildcards; present fields must all match. The
/// description matches as a case-insensitive substring, everything else by
/// equality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct EntryFilter {
    pub user_id: Option<i64>,
    pub description: Option<String>,
    pub month: Option<i32>,
    pub year: Option<i32>,
    pub kind: Option<EntryType>,
    pub status: Option<EntryStatus>,
}
