use crate::domain::model::{Item, ParticipantId, ScanResult, SplitRequest};
use crate::error::{Result, SplitError};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

/// The reviewed assignment of receipt lines to participants, as produced by
/// the review step upstream of the engine.
///
/// `assignments[i]` names who consumed scan line `i`; an empty list leaves
/// the line orphaned.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AssignmentSheet {
    pub participants: Vec<ParticipantId>,
    pub assignments: Vec<Vec<ParticipantId>>,
}

/// Reads an assignment sheet from any `Read` source.
pub fn read_assignments<R: Read>(source: R) -> Result<AssignmentSheet> {
    Ok(serde_json::from_reader(source)?)
}

/// Pairs a scan with its assignment sheet into a [`SplitRequest`].
///
/// The sheet must cover every scan line exactly once; normalization of the
/// extractor's line totals happens here so the engine only ever sees final
/// per-line prices.
pub fn build_request(
    scan: &ScanResult,
    sheet: AssignmentSheet,
    tax_percent: Decimal,
    service_percent: Decimal,
) -> Result<SplitRequest> {
    if scan.items.len() != sheet.assignments.len() {
        return Err(SplitError::LineCountMismatch {
            lines: scan.items.len(),
            assignments: sheet.assignments.len(),
        });
    }

    let items = scan
        .items
        .iter()
        .zip(sheet.assignments)
        .map(|(line, assigned_to)| Item::new(line.line_total(), assigned_to))
        .collect();

    Ok(SplitRequest {
        items,
        participants: sheet.participants,
        tax_percent,
        service_percent,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Money, ReceiptLine};
    use rust_decimal_macros::dec;

    fn scan() -> ScanResult {
        ScanResult {
            merchant: "WARUNG KOPI".to_owned(),
            date: "2025-11-21".to_owned(),
            items: vec![
                ReceiptLine {
                    name: "Kopi susu".to_owned(),
                    qty: 2,
                    price: Money::new(18000),
                    total: Money::new(36000),
                },
                ReceiptLine {
                    name: "Pisang goreng".to_owned(),
                    qty: 1,
                    price: Money::new(15000),
                    total: Money::ZERO, // drifted schema: only unit price set
                },
            ],
            total_amount: Money::new(51000),
        }
    }

    #[test]
    fn test_read_assignment_sheet() {
        let json = r#"{
            "participants": ["alice", "bob"],
            "assignments": [["alice", "bob"], ["bob"]]
        }"#;
        let sheet = read_assignments(json.as_bytes()).unwrap();
        assert_eq!(sheet.participants.len(), 2);
        assert_eq!(sheet.assignments[1], vec![ParticipantId::from("bob")]);
    }

    #[test]
    fn test_build_request_normalizes_line_totals() {
        let sheet = AssignmentSheet {
            participants: vec![ParticipantId::from("alice"), ParticipantId::from("bob")],
            assignments: vec![
                vec![ParticipantId::from("alice"), ParticipantId::from("bob")],
                vec![ParticipantId::from("bob")],
            ],
        };
        let request = build_request(&scan(), sheet, dec!(10), dec!(5)).unwrap();

        assert_eq!(request.items[0].price, Money::new(36000));
        // zero total falls back to qty * unit price
        assert_eq!(request.items[1].price, Money::new(15000));
        assert_eq!(request.tax_percent, dec!(10));
    }

    #[test]
    fn test_line_count_mismatch_rejected() {
        let sheet = AssignmentSheet {
            participants: vec![ParticipantId::from("alice")],
            assignments: vec![vec![ParticipantId::from("alice")]],
        };
        let err = build_request(&scan(), sheet, dec!(0), dec!(0)).unwrap_err();
        assert!(matches!(
            err,
            SplitError::LineCountMismatch {
                lines: 2,
                assignments: 1
            }
        ));
    }
}
