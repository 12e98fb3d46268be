//! Salary adjustment arithmetic and the adjustment history record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ─── Adjustment ──────────────────────────────────────────────────────────────

/// A proposed change relative to the current salary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Adjustment {
  /// Add a fixed amount (negative for a cut).
  Amount(f64),
  /// Add a percentage of the current salary.
  Percentage(f64),
}

impl Adjustment {
  /// The resulting salary; never below zero.
  pub fn apply(&self, current: f64) -> f64 {
    let next = match *self {
      Self::Amount(delta) => current + delta,
      Self::Percentage(pct) => current + current * pct / 100.0,
    };
    next.max(0.0)
  }
}

/// A named one-click adjustment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
  pub label:      &'static str,
  pub adjustment: Adjustment,
}

pub const PRESETS: [Preset; 4] = [
  Preset { label: "5% Increase",   adjustment: Adjustment::Percentage(5.0) },
  Preset { label: "10% Increase",  adjustment: Adjustment::Percentage(10.0) },
  Preset { label: "$5K Increase",  adjustment: Adjustment::Amount(5_000.0) },
  Preset { label: "$10K Increase", adjustment: Adjustment::Amount(10_000.0) },
];

// ─── Change summary ──────────────────────────────────────────────────────────

/// Difference between a current and a proposed salary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SalaryChange {
  pub difference: f64,
  /// Relative change in percent; 0 when the current salary is 0.
  pub percentage: f64,
}

impl SalaryChange {
  pub fn between(current: f64, proposed: f64) -> Self {
    let difference = proposed - current;
    let percentage = if current == 0.0 {
      0.0
    } else {
      difference / current * 100.0
    };
    Self { difference, percentage }
  }

  pub fn is_raise(&self) -> bool { self.difference > 0.0 }
}

// ─── History ─────────────────────────────────────────────────────────────────

/// One applied salary change, with the reason given for it. Append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryAdjustment {
  pub employee_id:     Uuid,
  pub previous_salary: f64,
  pub new_salary:      f64,
  pub reason:          String,
  pub recorded_at:     DateTime<Utc>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn percentage_and_amount() {
    assert_eq!(Adjustment::Percentage(10.0).apply(50_000.0), 55_000.0);
    assert_eq!(Adjustment::Amount(5_000.0).apply(50_000.0), 55_000.0);
  }

  #[test]
  fn apply_clamps_at_zero() {
    assert_eq!(Adjustment::Amount(-80_000.0).apply(50_000.0), 0.0);
    assert_eq!(Adjustment::Percentage(-150.0).apply(40_000.0), 0.0);
  }

  #[test]
  fn presets_match_labels() {
    assert_eq!(PRESETS[0].adjustment.apply(100_000.0), 105_000.0);
    assert_eq!(PRESETS[3].adjustment.apply(100_000.0), 110_000.0);
  }

  #[test]
  fn change_against_zero_salary() {
    let change = SalaryChange::between(0.0, 1_000.0);
    assert_eq!(change.difference, 1_000.0);
    assert_eq!(change.percentage, 0.0);
  }

  #[test]
  fn change_percentage() {
    let change = SalaryChange::between(80_000.0, 88_000.0);
    assert!(change.is_raise());
    assert!((change.percentage - 10.0).abs() < 1e-9);
  }
}
