use crate::domain::model::{Money, ParticipantId, SplitOutcome, SplitRequest};
use crate::error::{Result, SplitError};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::{HashMap, HashSet};

/// What happens to the cost of items nobody claimed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrphanPolicy {
    /// Orphaned cost feeds the subtotal (and therefore tax/service) but is
    /// dropped from the per-participant distribution.
    #[default]
    Absorb,
    /// Orphaned cost is split evenly across every participant.
    Redistribute,
}

/// How per-participant rounding residue is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rounding {
    /// Round each share half-up on its own. The sum of shares can drift from
    /// the exact total by up to half a unit per participant.
    #[default]
    Independent,
    /// Largest-remainder correction: shares sum exactly to the rounded total.
    Exact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SplitOptions {
    pub orphans: OrphanPolicy,
    pub rounding: Rounding,
}

/// Distributes a receipt total across participants in proportion to what each
/// consumed.
///
/// Item prices accumulate into unrounded raw totals (an item shared by N
/// people contributes price/N to each), tax and service charge are then
/// allocated proportionally to each raw total's share of the subtotal, and
/// only the final per-participant amount is rounded, half-up, to whole
/// currency units. A zero subtotal yields zero for every participant no
/// matter the percentages.
///
/// Every id in `request.participants` keys the result, zero shares included.
/// The computation is pure: no I/O, no mutation of the request, same output
/// for the same input.
pub fn compute_split(request: &SplitRequest, options: SplitOptions) -> Result<SplitOutcome> {
    validate(request)?;

    let subtotal: Money = request.items.iter().map(|item| item.price).sum();
    let subtotal_dec = Decimal::from(subtotal);
    let tax_amount = subtotal_dec * request.tax_percent / Decimal::ONE_HUNDRED;
    let service_amount = subtotal_dec * request.service_percent / Decimal::ONE_HUNDRED;

    let mut raw_totals: HashMap<&ParticipantId, Decimal> = request
        .participants
        .iter()
        .map(|p| (p, Decimal::ZERO))
        .collect();

    for item in &request.items {
        let price = Decimal::from(item.price);
        if item.assigned_to.is_empty() {
            if options.orphans == OrphanPolicy::Redistribute && !raw_totals.is_empty() {
                let share = price / Decimal::from(raw_totals.len() as u64);
                for raw in raw_totals.values_mut() {
                    *raw += share;
                }
            }
            continue;
        }
        let share = price / Decimal::from(item.assigned_to.len() as u64);
        for participant in &item.assigned_to {
            // validate() guarantees the key exists
            if let Some(raw) = raw_totals.get_mut(participant) {
                *raw += share;
            }
        }
    }

    // Exact (unrounded) final share per participant, in a stable order so
    // the largest-remainder pass is deterministic.
    let mut exact_shares: Vec<(&ParticipantId, Decimal)> = raw_totals
        .into_iter()
        .map(|(participant, raw)| {
            let ratio = if subtotal_dec.is_zero() {
                Decimal::ZERO
            } else {
                raw / subtotal_dec
            };
            (participant, raw + tax_amount * ratio + service_amount * ratio)
        })
        .collect();
    exact_shares.sort_by(|(a, _), (b, _)| a.cmp(b));

    let shares = match options.rounding {
        Rounding::Independent => round_independent(&exact_shares)?,
        Rounding::Exact => round_exact(&exact_shares)?,
    };

    let total_billed: Money = shares.values().copied().sum();
    Ok(SplitOutcome {
        shares,
        subtotal,
        total_billed,
    })
}

fn validate(request: &SplitRequest) -> Result<()> {
    if request.tax_percent < Decimal::ZERO {
        return Err(SplitError::NegativePercent {
            which: "tax",
            value: request.tax_percent,
        });
    }
    if request.service_percent < Decimal::ZERO {
        return Err(SplitError::NegativePercent {
            which: "service",
            value: request.service_percent,
        });
    }

    let known: HashSet<&ParticipantId> = request.participants.iter().collect();
    for (index, item) in request.items.iter().enumerate() {
        if item.price.is_negative() {
            return Err(SplitError::NegativePrice {
                index,
                price: item.price.units(),
            });
        }
        let mut seen: HashSet<&ParticipantId> = HashSet::with_capacity(item.assigned_to.len());
        for participant in &item.assigned_to {
            if !known.contains(participant) {
                return Err(SplitError::UnknownParticipant {
                    index,
                    participant: participant.to_string(),
                });
            }
            if !seen.insert(participant) {
                return Err(SplitError::DuplicateAssignment {
                    index,
                    participant: participant.to_string(),
                });
            }
        }
    }
    Ok(())
}

fn round_independent(
    exact_shares: &[(&ParticipantId, Decimal)],
) -> Result<HashMap<ParticipantId, Money>> {
    exact_shares
        .iter()
        .map(|(participant, exact)| {
            let rounded = exact
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
                .to_i64()
                .ok_or_else(|| SplitError::AmountOverflow {
                    participant: participant.to_string(),
                })?;
            Ok(((*participant).clone(), Money::new(rounded)))
        })
        .collect()
}

/// Floors every share, then hands the leftover whole units to the largest
/// fractional remainders until the rounded exact total is reached.
fn round_exact(
    exact_shares: &[(&ParticipantId, Decimal)],
) -> Result<HashMap<ParticipantId, Money>> {
    let exact_total: Decimal = exact_shares.iter().map(|(_, exact)| *exact).sum();
    let target = exact_total
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or_else(|| SplitError::AmountOverflow {
            participant: String::from("<total>"),
        })?;

    let mut floored: Vec<(&ParticipantId, i64, Decimal)> = Vec::with_capacity(exact_shares.len());
    for (participant, exact) in exact_shares {
        let floor = exact
            .floor()
            .to_i64()
            .ok_or_else(|| SplitError::AmountOverflow {
                participant: participant.to_string(),
            })?;
        floored.push((*participant, floor, *exact - exact.floor()));
    }

    let mut residue = target - floored.iter().map(|(_, floor, _)| floor).sum::<i64>();
    // Input slice is id-sorted, so equal remainders resolve by id.
    floored.sort_by(|(id_a, _, rem_a), (id_b, _, rem_b)| {
        rem_b.cmp(rem_a).then_with(|| id_a.cmp(id_b))
    });

    let mut shares = HashMap::with_capacity(floored.len());
    for (participant, floor, _) in floored {
        let extra = if residue > 0 { 1 } else { 0 };
        residue -= extra;
        shares.insert(participant.clone(), Money::new(floor + extra));
    }
    Ok(shares)
}
