//! [`Directory`]: the in-memory owner of employees and departments.
//!
//! All mutations are synchronous and use whole-record replacement. Operations
//! addressed at an id that is not present are silent no-ops; the boolean or
//! `Option` return tells the caller whether anything changed.

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use crate::{
  department::{Department, NewDepartment},
  employee::{Employee, NewEmployee},
  role::Role,
  salary::SalaryAdjustment,
  seed,
};

#[derive(Debug, Clone, Default)]
pub struct Directory {
  employees:   Vec<Employee>,
  departments: Vec<Department>,
  adjustments: Vec<SalaryAdjustment>,
}

impl Directory {
  /// An empty directory.
  pub fn new() -> Self { Self::default() }

  /// A directory initialised from the static seed data.
  pub fn seeded() -> Self {
    Self::from_parts(seed::employees(), seed::departments())
  }

  /// Build from existing records. Later duplicates of an id are dropped so
  /// ids stay unique.
  pub fn from_parts(
    employees: Vec<Employee>,
    departments: Vec<Department>,
  ) -> Self {
    let mut dir = Self::new();
    for e in employees {
      if dir.employee(e.id).is_none() {
        dir.employees.push(e);
      }
    }
    for d in departments {
      if dir.department(d.id).is_none() {
        dir.departments.push(d);
      }
    }
    dir
  }

  // ── Reads ─────────────────────────────────────────────────────────────

  pub fn employees(&self) -> &[Employee] { &self.employees }

  pub fn departments(&self) -> &[Department] { &self.departments }

  pub fn employee(&self, id: Uuid) -> Option<&Employee> {
    self.employees.iter().find(|e| e.id == id)
  }

  pub fn department(&self, id: Uuid) -> Option<&Department> {
    self.departments.iter().find(|d| d.id == id)
  }

  /// Salary changes for `employee_id`, oldest first.
  pub fn salary_history(
    &self,
    employee_id: Uuid,
  ) -> impl Iterator<Item = &SalaryAdjustment> + '_ {
    self
      .adjustments
      .iter()
      .filter(move |a| a.employee_id == employee_id)
  }

  // ── Employees ─────────────────────────────────────────────────────────

  /// Append a new employee and return its freshly generated id.
  pub fn add_employee(&mut self, input: NewEmployee) -> Uuid {
    let id = self.fresh_employee_id();
    self.employees.push(Employee::from_new(id, input));
    debug!(%id, "employee added");
    id
  }

  /// Replace the employee with the same id. Returns `false` if absent.
  pub fn edit_employee(&mut self, employee: Employee) -> bool {
    match self.employees.iter_mut().find(|e| e.id == employee.id) {
      Some(slot) => {
        debug!(id = %employee.id, "employee edited");
        *slot = employee;
        true
      }
      None => false,
    }
  }

  /// Remove an employee. Returns `false` if absent.
  pub fn delete_employee(&mut self, id: Uuid) -> bool {
    let before = self.employees.len();
    self.employees.retain(|e| e.id != id);
    let removed = self.employees.len() != before;
    if removed {
      debug!(%id, "employee deleted");
    }
    removed
  }

  /// Set an employee's salary and log the change with its reason.
  ///
  /// The amount is not validated here; see
  /// [`crate::validate::salary_adjustment`].
  pub fn adjust_salary(
    &mut self,
    employee_id: Uuid,
    new_salary: f64,
    reason: impl Into<String>,
  ) -> Option<&SalaryAdjustment> {
    let employee = self.employees.iter_mut().find(|e| e.id == employee_id)?;
    let previous_salary = employee.salary;
    employee.salary = new_salary;
    debug!(%employee_id, previous_salary, new_salary, "salary adjusted");

    self.adjustments.push(SalaryAdjustment {
      employee_id,
      previous_salary,
      new_salary,
      reason: reason.into(),
      recorded_at: Utc::now(),
    });
    self.adjustments.last()
  }

  /// Set an employee's role. Returns `false` if absent.
  pub fn assign_role(&mut self, employee_id: Uuid, role: Role) -> bool {
    match self.employees.iter_mut().find(|e| e.id == employee_id) {
      Some(employee) => {
        debug!(%employee_id, %role, "role assigned");
        employee.role = role;
        true
      }
      None => false,
    }
  }

  // ── Departments ───────────────────────────────────────────────────────

  pub fn add_department(&mut self, input: NewDepartment) -> Uuid {
    let id = self.fresh_department_id();
    self.departments.push(Department::from_new(id, input));
    debug!(%id, "department added");
    id
  }

  pub fn edit_department(&mut self, department: Department) -> bool {
    match self.departments.iter_mut().find(|d| d.id == department.id) {
      Some(slot) => {
        debug!(id = %department.id, "department edited");
        *slot = department;
        true
      }
      None => false,
    }
  }

  /// Remove a department. Employees that referenced it by name are left as
  /// they are.
  pub fn delete_department(&mut self, id: Uuid) -> bool {
    let before = self.departments.len();
    self.departments.retain(|d| d.id != id);
    let removed = self.departments.len() != before;
    if removed {
      debug!(%id, "department deleted");
    }
    removed
  }

  // ── Ids ───────────────────────────────────────────────────────────────

  fn fresh_employee_id(&self) -> Uuid {
    loop {
      let id = Uuid::new_v4();
      if self.employee(id).is_none() {
        return id;
      }
    }
  }

  fn fresh_department_id(&self) -> Uuid {
    loop {
      let id = Uuid::new_v4();
      if self.department(id).is_none() {
        return id;
      }
    }
  }
}
