//! Derived views over the directory: dashboard aggregates, list filtering,
//! role counts.
//!
//! Every function here is pure. Results borrow from their inputs and are
//! recomputed on each call.

use crate::{
  department::Department,
  employee::{Employee, EmployeeStatus},
  role::{Role, RoleDefinition},
};

/// How many hires the dashboard lists.
pub const RECENT_HIRES: usize = 5;

// ─── Dashboard ───────────────────────────────────────────────────────────────

/// Headcount and salary rollup for one department.
#[derive(Debug, Clone, PartialEq)]
pub struct DepartmentStats<'a> {
  pub department:     &'a Department,
  /// Employees whose `department` equals this department's name.
  pub employee_count: usize,
  /// 0 when the department has no employees.
  pub average_salary: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary<'a> {
  pub total_employees:  usize,
  pub active_employees: usize,
  pub department_count: usize,
  /// Mean salary across all employees; 0 when there are none.
  pub average_salary:   f64,
  /// One entry per department, in department order.
  pub departments:      Vec<DepartmentStats<'a>>,
  /// Newest hires first; ties keep collection order.
  pub recent_hires:     Vec<&'a Employee>,
}

fn mean<'a>(employees: impl Iterator<Item = &'a Employee>) -> f64 {
  let (sum, count) =
    employees.fold((0.0, 0usize), |(sum, n), e| (sum + e.salary, n + 1));
  if count == 0 { 0.0 } else { sum / count as f64 }
}

pub fn department_stats<'a>(
  department: &'a Department,
  employees: &[Employee],
) -> DepartmentStats<'a> {
  let members = || employees.iter().filter(|e| e.department == department.name);
  DepartmentStats {
    department,
    employee_count: members().count(),
    average_salary: mean(members()),
  }
}

pub fn dashboard_summary<'a>(
  employees: &'a [Employee],
  departments: &'a [Department],
) -> DashboardSummary<'a> {
  let mut recent_hires: Vec<&Employee> = employees.iter().collect();
  // `sort_by` is stable, so equal dates keep their original order.
  recent_hires.sort_by(|a, b| b.hire_date.cmp(&a.hire_date));
  recent_hires.truncate(RECENT_HIRES);

  DashboardSummary {
    total_employees: employees.len(),
    active_employees: employees.iter().filter(|e| e.is_active()).count(),
    department_count: departments.len(),
    average_salary: mean(employees.iter()),
    departments: departments
      .iter()
      .map(|d| department_stats(d, employees))
      .collect(),
    recent_hires,
  }
}

// ─── Employee list filter ────────────────────────────────────────────────────

/// Criteria for [`filter_employees`]. The default matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeFilter {
  /// Case-insensitive substring over first name, last name, email and
  /// position. Empty matches all.
  pub search:     String,
  /// Exact department name. `None` or empty matches all.
  pub department: Option<String>,
  pub status:     Option<EmployeeStatus>,
}

impl EmployeeFilter {
  pub fn is_empty(&self) -> bool {
    self.search.is_empty()
      && self.department.as_deref().is_none_or(str::is_empty)
      && self.status.is_none()
  }

  pub fn matches(&self, employee: &Employee) -> bool {
    let needle = self.search.to_lowercase();
    let matches_search = needle.is_empty()
      || [
        &employee.first_name,
        &employee.last_name,
        &employee.email,
        &employee.position,
      ]
      .iter()
      .any(|field| field.to_lowercase().contains(&needle));

    let matches_department = match self.department.as_deref() {
      None | Some("") => true,
      Some(dept) => employee.department == dept,
    };

    let matches_status = self.status.is_none_or(|s| employee.status == s);

    matches_search && matches_department && matches_status
  }
}

/// The employees matching `filter`, in their original order.
pub fn filter_employees<'a>(
  employees: &'a [Employee],
  filter: &EmployeeFilter,
) -> Vec<&'a Employee> {
  employees.iter().filter(|e| filter.matches(e)).collect()
}

// ─── Roles ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct RoleCount {
  pub role:       Role,
  pub definition: &'static RoleDefinition,
  pub count:      usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoleStats {
  /// One entry per fixed role, in [`Role::KNOWN`] order.
  pub roles:        Vec<RoleCount>,
  /// Employees whose role is outside the fixed set.
  pub unrecognized: usize,
}

impl RoleStats {
  pub fn count(&self, role: &Role) -> usize {
    self
      .roles
      .iter()
      .find(|rc| &rc.role == role)
      .map_or(0, |rc| rc.count)
  }
}

pub fn role_stats(employees: &[Employee]) -> RoleStats {
  let roles = Role::KNOWN
    .into_iter()
    .map(|role| RoleCount {
      count: employees.iter().filter(|e| e.role == role).count(),
      definition: role.definition(),
      role,
    })
    .collect();
  let unrecognized = employees.iter().filter(|e| !e.role.is_known()).count();
  RoleStats { roles, unrecognized }
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;
  use uuid::Uuid;

  use super::*;
  use crate::seed;

  fn employee(first: &str, salary: f64, hired: (i32, u32, u32)) -> Employee {
    Employee {
      id:         Uuid::new_v4(),
      first_name: first.into(),
      last_name:  "Doe".into(),
      email:      format!("{}@company.com", first.to_lowercase()),
      phone:      "555".into(),
      department: "Engineering".into(),
      position:   "Engineer".into(),
      salary,
      hire_date:  NaiveDate::from_ymd_opt(hired.0, hired.1, hired.2).unwrap(),
      status:     EmployeeStatus::Active,
      role:       Role::Developer,
      avatar:     None,
    }
  }

  fn with_role(role: &str) -> Employee {
    let mut e = employee("R", 1.0, (2020, 1, 1));
    e.role = Role::from(role.to_owned());
    e
  }

  #[test]
  fn average_of_two_salaries() {
    let employees = [
      employee("A", 50_000.0, (2020, 1, 1)),
      employee("B", 70_000.0, (2021, 1, 1)),
    ];
    let summary = dashboard_summary(&employees, &[]);
    assert_eq!(summary.average_salary, 60_000.0);
    assert_eq!(summary.total_employees, 2);
  }

  #[test]
  fn seeded_directory_summary() {
    let employees = seed::employees();
    let departments = seed::departments();
    let summary = dashboard_summary(&employees, &departments);

    assert_eq!(summary.total_employees, 9);
    assert_eq!(summary.active_employees, 8);
    assert_eq!(summary.department_count, 5);
    assert_eq!(summary.departments.len(), 5);

    let recent: Vec<_> = summary
      .recent_hires
      .iter()
      .map(|e| e.first_name.as_str())
      .collect();
    assert_eq!(recent, ["Priya", "Anna", "Robert", "James", "Emily"]);
  }

  #[test]
  fn empty_directory_average_is_zero() {
    let summary = dashboard_summary(&[], &[]);
    assert_eq!(summary.average_salary, 0.0);
    assert!(summary.recent_hires.is_empty());
  }

  #[test]
  fn recent_hires_newest_first_and_stable() {
    let employees = [
      employee("Old", 1.0, (2018, 1, 1)),
      employee("TieA", 1.0, (2023, 5, 5)),
      employee("New", 1.0, (2024, 2, 2)),
      employee("TieB", 1.0, (2023, 5, 5)),
      employee("Mid", 1.0, (2021, 1, 1)),
      employee("Older", 1.0, (2017, 1, 1)),
    ];
    let summary = dashboard_summary(&employees, &[]);
    let names: Vec<_> = summary
      .recent_hires
      .iter()
      .map(|e| e.first_name.as_str())
      .collect();
    assert_eq!(names, ["New", "TieA", "TieB", "Mid", "Old"]);
    // The input order is untouched.
    assert_eq!(employees[0].first_name, "Old");
  }

  #[test]
  fn department_rollup_counts_by_name_and_skips_dangling() {
    let departments = seed::departments();
    let mut employees = seed::employees();
    employees[0].department = "Nowhere".into();

    let summary = dashboard_summary(&employees, &departments);
    let total: usize =
      summary.departments.iter().map(|d| d.employee_count).sum();
    assert_eq!(total, employees.len() - 1);

    let hr = summary
      .departments
      .iter()
      .find(|d| d.department.name == "Human Resources")
      .unwrap();
    assert_eq!(hr.employee_count, 1);
    assert_eq!(hr.average_salary, 105_000.0);
  }

  #[test]
  fn empty_department_has_zero_average() {
    let dept = Department {
      id:          Uuid::new_v4(),
      name:        "Research".into(),
      description: String::new(),
      manager:     String::new(),
      budget:      0.0,
    };
    let stats = department_stats(&dept, &seed::employees());
    assert_eq!(stats.employee_count, 0);
    assert_eq!(stats.average_salary, 0.0);
  }

  #[test]
  fn empty_filter_returns_everything_in_order() {
    let employees = seed::employees();
    let filter = EmployeeFilter::default();
    assert!(filter.is_empty());
    let out = filter_employees(&employees, &filter);
    let ids: Vec<_> = out.iter().map(|e| e.id).collect();
    let expected: Vec<_> = employees.iter().map(|e| e.id).collect();
    assert_eq!(ids, expected);
  }

  #[test]
  fn search_is_case_insensitive_across_fields() {
    let employees = seed::employees();
    let by_position = EmployeeFilter {
      search: "DEVELOPER".into(),
      ..Default::default()
    };
    assert_eq!(filter_employees(&employees, &by_position).len(), 2);

    let by_email = EmployeeFilter {
      search: "chen@".into(),
      ..Default::default()
    };
    let found = filter_employees(&employees, &by_email);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].last_name, "Chen");
  }

  #[test]
  fn filters_are_anded() {
    let employees = seed::employees();
    let filter = EmployeeFilter {
      search:     String::new(),
      department: Some("Sales".into()),
      status:     Some(EmployeeStatus::Inactive),
    };
    let found = filter_employees(&employees, &filter);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].first_name, "Robert");

    let none = EmployeeFilter {
      search: "robert".into(),
      department: Some("Engineering".into()),
      status: None,
    };
    assert!(filter_employees(&employees, &none).is_empty());
  }

  #[test]
  fn empty_department_string_matches_all() {
    let employees = seed::employees();
    let filter = EmployeeFilter {
      department: Some(String::new()),
      ..Default::default()
    };
    assert!(filter.is_empty());
    assert_eq!(filter_employees(&employees, &filter).len(), employees.len());
  }

  #[test]
  fn role_counts() {
    let employees = [with_role("admin"), with_role("admin"), with_role("manager")];
    let stats = role_stats(&employees);
    assert_eq!(stats.count(&Role::Admin), 2);
    assert_eq!(stats.count(&Role::Manager), 1);
    assert_eq!(stats.count(&Role::Developer), 0);
    assert_eq!(stats.count(&Role::Employee), 0);
    assert_eq!(stats.unrecognized, 0);
    let order: Vec<_> = stats.roles.iter().map(|rc| rc.definition.key).collect();
    assert_eq!(order, ["admin", "manager", "developer", "employee"]);
  }

  #[test]
  fn unknown_roles_land_in_their_own_bucket() {
    let employees = [with_role("intern"), with_role("employee")];
    let stats = role_stats(&employees);
    assert_eq!(stats.count(&Role::Employee), 1);
    assert_eq!(stats.unrecognized, 1);
  }
}
