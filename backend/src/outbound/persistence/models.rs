//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::{Calculation, CalculationId, NewCalculation};

use super::schema::calculations;

/// Row struct for reading from the calculations table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = calculations)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CalculationRow {
    pub id: i64,
    pub shape: String,
    pub input_value: f64,
    pub result: f64,
    pub created_at: DateTime<Utc>,
}

impl From<CalculationRow> for Calculation {
    fn from(row: CalculationRow) -> Self {
        Self {
            id: CalculationId::new(row.id),
            shape: row.shape,
            input_value: row.input_value,
            result: row.result,
            created_at: row.created_at,
        }
    }
}

/// Insertable struct for new calculation records.
///
/// `id` and `created_at` are left to column defaults.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = calculations)]
pub(crate) struct NewCalculationRow<'a> {
    pub shape: &'a str,
    pub input_value: f64,
    pub result: f64,
}

impl<'a> From<&'a NewCalculation> for NewCalculationRow<'a> {
    fn from(value: &'a NewCalculation) -> Self {
        Self {
            shape: &value.shape,
            input_value: value.input_value,
            result: value.result,
        }
    }
}
