//! Department records.
//!
//! Departments carry no stored headcount; use
//! [`crate::views::department_stats`] to count members from the employee
//! collection.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
  pub id:          Uuid,
  /// Join key matched against `Employee::department`.
  pub name:        String,
  pub description: String,
  /// Free-text manager name, not a reference to an employee.
  pub manager:     String,
  pub budget:      f64,
}

impl Department {
  pub fn from_new(id: Uuid, input: NewDepartment) -> Self {
    Self {
      id,
      name: input.name,
      description: input.description,
      manager: input.manager,
      budget: input.budget,
    }
  }

  pub fn to_new(&self) -> NewDepartment {
    NewDepartment {
      name:        self.name.clone(),
      description: self.description.clone(),
      manager:     self.manager.clone(),
      budget:      self.budget,
    }
  }
}

/// Input to [`crate::directory::Directory::add_department`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewDepartment {
  pub name:        String,
  pub description: String,
  pub manager:     String,
  pub budget:      f64,
}
