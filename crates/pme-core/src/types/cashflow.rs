//! Cash flow types for private investment transactions.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Date;

/// Opaque transaction type identifier.
///
/// The host application owns the taxonomy (contribution, distribution, fee,
/// ...). This library only compares identifiers for equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionTypeId(pub u32);

impl TransactionTypeId {
    /// Creates a new transaction type identifier.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for TransactionTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A dated, typed cash flow of a single investment.
///
/// `value` may be missing in the source records, in which case it counts
/// as zero wherever flows are summed. `transaction_type` may be missing on
/// derived flows, which then only take part in unfiltered aggregation.
///
/// # Example
///
/// ```rust
/// use pme_core::types::{CashFlow, Date, TransactionTypeId};
///
/// let contribution = CashFlow::new(
///     Date::from_ymd(2020, 1, 1).unwrap(),
///     1000.0,
///     TransactionTypeId::new(1),
/// );
/// assert_eq!(contribution.amount(), 1000.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlow {
    /// Transaction date
    pub date: Date,
    /// Signed amount
    #[serde(default)]
    pub value: Option<f64>,
    /// Transaction type, if classified
    #[serde(default, rename = "transactionTypeId")]
    pub transaction_type: Option<TransactionTypeId>,
}

impl CashFlow {
    /// Creates a typed cash flow.
    #[must_use]
    pub fn new(date: Date, value: f64, transaction_type: TransactionTypeId) -> Self {
        Self {
            date,
            value: Some(value),
            transaction_type: Some(transaction_type),
        }
    }

    /// Creates a cash flow without a transaction type.
    #[must_use]
    pub fn untyped(date: Date, value: f64) -> Self {
        Self {
            date,
            value: Some(value),
            transaction_type: None,
        }
    }

    /// Returns the amount, treating a missing value as zero.
    #[must_use]
    pub fn amount(&self) -> f64 {
        self.value.unwrap_or(0.0)
    }

    /// Returns true if this flow carries the given type.
    #[must_use]
    pub fn is_type(&self, transaction_type: TransactionTypeId) -> bool {
        self.transaction_type == Some(transaction_type)
    }
}

/// A single net value on a date.
///
/// Output of aggregation, and the input record of the XIRR solver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DatedValue {
    /// Date of the value
    pub date: Date,
    /// Net value
    pub value: f64,
}

impl DatedValue {
    /// Creates a new dated value.
    #[must_use]
    pub fn new(date: Date, value: f64) -> Self {
        Self { date, value }
    }
}

impl From<DatedValue> for CashFlow {
    fn from(flow: DatedValue) -> Self {
        CashFlow::untyped(flow.date, flow.value)
    }
}
