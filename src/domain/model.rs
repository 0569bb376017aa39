use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// A monetary amount in integer minor currency units (cents, rupiah).
///
/// Receipt prices never carry fractional subunits, so the domain works in
/// whole units end to end; only the unrounded intermediates inside the
/// allocation step use `Decimal`. The wrapper may hold a negative value in
/// transit so that validation can report it instead of panicking at
/// construction time.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize, Hash,
)]
#[serde(transparent)]
pub struct Money(pub i64);

impl Money {
    pub const ZERO: Self = Self(0);

    pub fn new(units: i64) -> Self {
        Self(units)
    }

    pub fn units(&self) -> i64 {
        self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        Decimal::from(money.0)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl Add for Money {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

/// Opaque participant identifier, unique within one split computation.
///
/// Identity management (accounts, display names) lives outside the core.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(pub String);

impl ParticipantId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ParticipantId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One receipt line as the engine sees it.
///
/// `price` is the line total (already qty × unit price). An empty
/// `assigned_to` marks an orphaned item: it feeds the subtotal but, under the
/// default policy, nobody's share.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub price: Money,
    pub assigned_to: Vec<ParticipantId>,
}

impl Item {
    pub fn new(price: Money, assigned_to: Vec<ParticipantId>) -> Self {
        Self { price, assigned_to }
    }
}

/// Input to one allocation computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitRequest {
    pub items: Vec<Item>,
    /// Full candidate set; every id here keys the result, zero shares
    /// included.
    pub participants: Vec<ParticipantId>,
    pub tax_percent: Decimal,
    pub service_percent: Decimal,
}

/// Result of one allocation computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitOutcome {
    pub shares: HashMap<ParticipantId, Money>,
    pub subtotal: Money,
    /// Sum of the rounded shares actually billed to participants.
    pub total_billed: Money,
}

impl SplitOutcome {
    pub fn share(&self, participant: &ParticipantId) -> Option<Money> {
        self.shares.get(participant).copied()
    }
}

/// One line of an extracted receipt, as the vision collaborator reports it.
///
/// `price` is the unit price and `total` the line total; extraction output
/// has drifted on which of the two is authoritative, so [`line_total`]
/// reconciles them before anything downstream sees the line.
///
/// [`line_total`]: ReceiptLine::line_total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptLine {
    pub name: String,
    pub qty: u32,
    pub price: Money,
    pub total: Money,
}

impl ReceiptLine {
    /// The amount this line adds to the bill. Falls back to qty × unit price
    /// when the extractor left `total` at zero.
    pub fn line_total(&self) -> Money {
        if self.total == Money::ZERO && self.qty > 0 && self.price != Money::ZERO {
            Money::new(i64::from(self.qty) * self.price.units())
        } else {
            self.total
        }
    }
}

/// Structured receipt data extracted from a photo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanResult {
    pub merchant: String,
    pub date: String,
    pub items: Vec<ReceiptLine>,
    pub total_amount: Money,
}

/// A persisted split, as handed to the storage collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitRecord {
    pub id: u64,
    pub outcome: SplitOutcome,
}
