//! Domain models for per-room rent collection records.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::{Amounted, Identifiable};

/// One rent-collection event for a room. Totals are derived on read and
/// never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LedgerEntry {
    pub id: Uuid,
    pub room_number: u32,
    pub name: String,
    pub mobile_number: String,
    pub rent_advance: f64,
    pub rent_month: f64,
    pub rent_paid: f64,
    pub maintenance: f64,
    pub electricity_bill: f64,
    pub parking_bill: f64,
    pub payment_status: PaymentStatus,
    pub payment_mode: PaymentMode,
    #[serde(with = "crate::dates::day_month_year")]
    pub date: NaiveDate,
}

impl LedgerEntry {
    /// Rent owed for the period: monthly rent plus the utility bills.
    pub fn total_rent(&self) -> f64 {
        self.rent_month + self.parking_bill + self.electricity_bill + self.maintenance
    }

    /// Amount actually received: rent paid plus the utility bills.
    pub fn total_paid(&self) -> f64 {
        self.rent_paid + self.parking_bill + self.electricity_bill + self.maintenance
    }

    pub fn remaining(&self) -> f64 {
        self.total_rent() - self.total_paid()
    }
}

impl Identifiable for LedgerEntry {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Amounted for LedgerEntry {
    fn amount(&self) -> f64 {
        self.total_paid()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Whether the rent for the period has been settled.
pub enum PaymentStatus {
    Paid,
    #[serde(rename = "Not Paid")]
    NotPaid,
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PaymentStatus::Paid => "Paid",
            PaymentStatus::NotPaid => "Not Paid",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "mode")]
/// How the rent was handed over. Cheque payments carry their number
/// structurally; cheque and UPI payments may carry a proof-image reference.
pub enum PaymentMode {
    Cash,
    Cheque {
        cheque_number: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        proof_image: Option<String>,
    },
    #[serde(rename = "UPI")]
    Upi {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        proof_image: Option<String>,
    },
}

impl PaymentMode {
    pub fn cheque_number(&self) -> Option<&str> {
        match self {
            PaymentMode::Cheque { cheque_number, .. } => Some(cheque_number),
            _ => None,
        }
    }

    /// Opaque reference to the payment proof, when one was attached.
    pub fn proof_image(&self) -> Option<&str> {
        match self {
            PaymentMode::Cash => None,
            PaymentMode::Cheque { proof_image, .. } | PaymentMode::Upi { proof_image } => {
                proof_image.as_deref()
            }
        }
    }
}

impl fmt::Display for PaymentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PaymentMode::Cash => "Cash",
            PaymentMode::Cheque { .. } => "Cheque",
            PaymentMode::Upi { .. } => "UPI",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry() -> LedgerEntry {
        LedgerEntry {
            id: Uuid::new_v4(),
            room_number: 101,
            name: "Ravi".into(),
            mobile_number: "9876543210".into(),
            rent_advance: 5000.0,
            rent_month: 8000.0,
            rent_paid: 6000.0,
            maintenance: 500.0,
            electricity_bill: 1200.0,
            parking_bill: 300.0,
            payment_status: PaymentStatus::Paid,
            payment_mode: PaymentMode::Cash,
            date: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
        }
    }

    #[test]
    fn totals_follow_the_contract() {
        let entry = entry();
        assert_eq!(entry.total_rent(), 8000.0 + 300.0 + 1200.0 + 500.0);
        assert_eq!(entry.total_paid(), 6000.0 + 300.0 + 1200.0 + 500.0);
        assert_eq!(entry.remaining(), entry.total_rent() - entry.total_paid());
    }

    #[test]
    fn payment_mode_exposes_payload() {
        let cheque = PaymentMode::Cheque {
            cheque_number: "004512".into(),
            proof_image: Some("img://cheque-004512".into()),
        };
        assert_eq!(cheque.cheque_number(), Some("004512"));
        assert_eq!(cheque.proof_image(), Some("img://cheque-004512"));
        assert_eq!(PaymentMode::Cash.cheque_number(), None);
        assert_eq!(PaymentMode::Cash.proof_image(), None);
    }

    #[test]
    fn entry_serializes_date_day_first() {
        let json = serde_json::to_string(&entry()).expect("serialize");
        assert!(json.contains("\"10-01-2025\""), "unexpected json: {json}");
    }

    #[test]
    fn not_paid_uses_spaced_label() {
        let json = serde_json::to_string(&PaymentStatus::NotPaid).expect("serialize");
        assert_eq!(json, "\"Not Paid\"");
        assert_eq!(PaymentStatus::NotPaid.to_string(), "Not Paid");
    }
}
