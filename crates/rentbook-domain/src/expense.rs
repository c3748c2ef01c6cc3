//! Miscellaneous cash outflow records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::{Amounted, Identifiable};

/// A single cash expense, independent of any room.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseEntry {
    pub id: Uuid,
    pub person: String,
    pub purpose: String,
    #[serde(with = "crate::dates::day_month_year")]
    pub date: NaiveDate,
    pub amount: f64,
}

impl Identifiable for ExpenseEntry {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Amounted for ExpenseEntry {
    fn amount(&self) -> f64 {
        self.amount
    }
}
