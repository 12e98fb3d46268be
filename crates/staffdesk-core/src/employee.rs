//! Employee records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use uuid::Uuid;

use crate::role::Role;

/// Employment status. Serialised and parsed as `active` / `inactive`.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString,
  EnumIter, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EmployeeStatus {
  #[default]
  Active,
  Inactive,
}

/// A single employee.
///
/// `department` is a loose reference to [`Department::name`]; nothing
/// enforces that it matches an existing department.
///
/// [`Department::name`]: crate::department::Department::name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
  pub id:         Uuid,
  pub first_name: String,
  pub last_name:  String,
  pub email:      String,
  pub phone:      String,
  pub department: String,
  pub position:   String,
  pub salary:     f64,
  pub hire_date:  NaiveDate,
  pub status:     EmployeeStatus,
  pub role:       Role,
  pub avatar:     Option<String>,
}

impl Employee {
  /// Attach an id to a [`NewEmployee`].
  pub fn from_new(id: Uuid, input: NewEmployee) -> Self {
    Self {
      id,
      first_name: input.first_name,
      last_name: input.last_name,
      email: input.email,
      phone: input.phone,
      department: input.department,
      position: input.position,
      salary: input.salary,
      hire_date: input.hire_date,
      status: input.status,
      role: input.role,
      avatar: input.avatar,
    }
  }

  pub fn full_name(&self) -> String {
    format!("{} {}", self.first_name, self.last_name)
  }

  /// First letter of each name, e.g. `"JD"`.
  pub fn initials(&self) -> String {
    self
      .first_name
      .chars()
      .take(1)
      .chain(self.last_name.chars().take(1))
      .collect()
  }

  pub fn is_active(&self) -> bool { self.status == EmployeeStatus::Active }

  /// The editable fields of this record, without the id.
  pub fn to_new(&self) -> NewEmployee {
    NewEmployee {
      first_name: self.first_name.clone(),
      last_name:  self.last_name.clone(),
      email:      self.email.clone(),
      phone:      self.phone.clone(),
      department: self.department.clone(),
      position:   self.position.clone(),
      salary:     self.salary,
      hire_date:  self.hire_date,
      status:     self.status,
      role:       self.role.clone(),
      avatar:     self.avatar.clone(),
    }
  }
}

/// Input to [`crate::directory::Directory::add_employee`]. The id is always
/// assigned by the directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEmployee {
  pub first_name: String,
  pub last_name:  String,
  pub email:      String,
  pub phone:      String,
  pub department: String,
  pub position:   String,
  pub salary:     f64,
  pub hire_date:  NaiveDate,
  pub status:     EmployeeStatus,
  pub role:       Role,
  pub avatar:     Option<String>,
}
