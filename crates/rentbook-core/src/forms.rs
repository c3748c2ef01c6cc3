//! Form boundary: string-typed input parsed into domain records.
//!
//! Money fields arrive as free text and must never reach the ledger
//! unparsed; empty or non-numeric values are rejected as `Validation`
//! before any store request is issued.

use chrono::NaiveDate;
use rentbook_domain::{dates, ExpenseEntry, LedgerEntry, PaymentMode, PaymentStatus};
use uuid::Uuid;

use crate::{CoreError, CoreResult};

/// Raw submission for a rent-collection entry.
#[derive(Debug, Clone)]
pub struct LedgerEntryForm {
    pub room_number: u32,
    pub name: String,
    pub mobile_number: String,
    pub rent_advance: String,
    pub rent_month: String,
    pub rent_paid: String,
    pub maintenance: String,
    pub electricity_bill: String,
    pub parking_bill: String,
    pub date: String,
    pub payment_status: PaymentStatus,
    pub payment_mode: PaymentMode,
}

impl LedgerEntryForm {
    /// Parses the form into a ledger entry carrying `id`.
    pub fn into_entry(self, id: Uuid) -> CoreResult<LedgerEntry> {
        require_text("customer name", &self.name)?;
        require_text("mobile number", &self.mobile_number)?;
        if let PaymentMode::Cheque { cheque_number, .. } = &self.payment_mode {
            require_text("cheque number", cheque_number)?;
        }
        Ok(LedgerEntry {
            id,
            room_number: self.room_number,
            name: self.name.trim().to_string(),
            mobile_number: self.mobile_number.trim().to_string(),
            rent_advance: parse_amount("rent advance", &self.rent_advance)?,
            rent_month: parse_amount("monthly rent", &self.rent_month)?,
            rent_paid: parse_amount("rent paid", &self.rent_paid)?,
            maintenance: parse_amount("maintenance", &self.maintenance)?,
            electricity_bill: parse_amount("electricity bill", &self.electricity_bill)?,
            parking_bill: parse_amount("parking bill", &self.parking_bill)?,
            payment_status: self.payment_status,
            payment_mode: self.payment_mode,
            date: parse_form_date(&self.date)?,
        })
    }
}

/// Raw submission for one cash outflow row.
#[derive(Debug, Clone, Default)]
pub struct ExpenseForm {
    pub person: String,
    pub purpose: String,
    pub date: String,
    pub amount: String,
}

impl ExpenseForm {
    /// True when every field is blank; such rows are skipped, not rejected.
    pub fn is_blank(&self) -> bool {
        self.person.trim().is_empty()
            && self.purpose.trim().is_empty()
            && self.date.trim().is_empty()
            && self.amount.trim().is_empty()
    }

    pub fn into_entry(self, id: Uuid) -> CoreResult<ExpenseEntry> {
        Ok(ExpenseEntry {
            id,
            person: self.person.trim().to_string(),
            purpose: self.purpose.trim().to_string(),
            date: parse_form_date(&self.date)?,
            amount: parse_amount("amount", &self.amount)?,
        })
    }
}

/// Parses a monetary field, rejecting empty and non-numeric input.
pub fn parse_amount(field: &str, raw: &str) -> CoreResult<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| CoreError::Validation(format!("{field} must be numeric, got `{trimmed}`")))?;
    if !value.is_finite() {
        return Err(CoreError::Validation(format!(
            "{field} must be numeric, got `{trimmed}`"
        )));
    }
    Ok(value)
}

fn require_text(field: &str, raw: &str) -> CoreResult<()> {
    if raw.trim().is_empty() {
        Err(CoreError::Validation(format!("{field} is required")))
    } else {
        Ok(())
    }
}

fn parse_form_date(raw: &str) -> CoreResult<NaiveDate> {
    if raw.trim().is_empty() {
        return Err(CoreError::Validation("date is required".into()));
    }
    dates::parse_date(raw)
        .map_err(|_| CoreError::Validation(format!("date must be dd-mm-yyyy, got `{}`", raw.trim())))
}
