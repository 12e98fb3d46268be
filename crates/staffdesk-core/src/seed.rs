//! Static sample data used to initialise a [`crate::directory::Directory`].
//!
//! Ids are fixed so that runs are reproducible.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::{
  department::Department,
  employee::{Employee, EmployeeStatus},
  role::Role,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
  NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

pub fn departments() -> Vec<Department> {
  let dept = |n: u128, name: &str, description: &str, manager: &str, budget| {
    Department {
      id:          Uuid::from_u128(0xd000 + n),
      name:        name.to_owned(),
      description: description.to_owned(),
      manager:     manager.to_owned(),
      budget,
    }
  };

  vec![
    dept(
      1,
      "Engineering",
      "Software development and infrastructure",
      "Sarah Johnson",
      2_500_000.0,
    ),
    dept(
      2,
      "Marketing",
      "Brand, campaigns and market research",
      "Michael Chen",
      800_000.0,
    ),
    dept(
      3,
      "Sales",
      "Revenue generation and client relations",
      "Emily Rodriguez",
      1_200_000.0,
    ),
    dept(
      4,
      "Human Resources",
      "Hiring, benefits and employee relations",
      "David Wilson",
      500_000.0,
    ),
    dept(
      5,
      "Finance",
      "Accounting, payroll and planning",
      "Lisa Thompson",
      600_000.0,
    ),
  ]
}

pub fn employees() -> Vec<Employee> {
  struct Row {
    first:      &'static str,
    last:       &'static str,
    phone:      &'static str,
    department: &'static str,
    position:   &'static str,
    salary:     f64,
    hired:      NaiveDate,
    status:     EmployeeStatus,
    role:       Role,
  }

  let rows = [
    Row {
      first:      "Sarah",
      last:       "Johnson",
      phone:      "+1 (555) 123-4567",
      department: "Engineering",
      position:   "Engineering Manager",
      salary:     145_000.0,
      hired:      date(2020, 3, 15),
      status:     EmployeeStatus::Active,
      role:       Role::Manager,
    },
    Row {
      first:      "Michael",
      last:       "Chen",
      phone:      "+1 (555) 234-5678",
      department: "Marketing",
      position:   "Marketing Director",
      salary:     125_000.0,
      hired:      date(2019, 7, 22),
      status:     EmployeeStatus::Active,
      role:       Role::Manager,
    },
    Row {
      first:      "Emily",
      last:       "Rodriguez",
      phone:      "+1 (555) 345-6789",
      department: "Sales",
      position:   "Sales Manager",
      salary:     110_000.0,
      hired:      date(2021, 1, 10),
      status:     EmployeeStatus::Active,
      role:       Role::Manager,
    },
    Row {
      first:      "David",
      last:       "Wilson",
      phone:      "+1 (555) 456-7890",
      department: "Human Resources",
      position:   "HR Director",
      salary:     105_000.0,
      hired:      date(2018, 11, 5),
      status:     EmployeeStatus::Active,
      role:       Role::Admin,
    },
    Row {
      first:      "Lisa",
      last:       "Thompson",
      phone:      "+1 (555) 567-8901",
      department: "Finance",
      position:   "Finance Manager",
      salary:     115_000.0,
      hired:      date(2020, 9, 1),
      status:     EmployeeStatus::Active,
      role:       Role::Manager,
    },
    Row {
      first:      "James",
      last:       "Park",
      phone:      "+1 (555) 678-9012",
      department: "Engineering",
      position:   "Senior Developer",
      salary:     130_000.0,
      hired:      date(2022, 4, 18),
      status:     EmployeeStatus::Active,
      role:       Role::Developer,
    },
    Row {
      first:      "Anna",
      last:       "Kowalski",
      phone:      "+1 (555) 789-0123",
      department: "Engineering",
      position:   "Frontend Developer",
      salary:     95_000.0,
      hired:      date(2023, 2, 6),
      status:     EmployeeStatus::Active,
      role:       Role::Developer,
    },
    Row {
      first:      "Robert",
      last:       "Brown",
      phone:      "+1 (555) 890-1234",
      department: "Sales",
      position:   "Account Executive",
      salary:     72_000.0,
      hired:      date(2022, 8, 29),
      status:     EmployeeStatus::Inactive,
      role:       Role::Employee,
    },
    Row {
      first:      "Priya",
      last:       "Natarajan",
      phone:      "+1 (555) 901-2345",
      department: "Marketing",
      position:   "Content Strategist",
      salary:     68_000.0,
      hired:      date(2023, 6, 12),
      status:     EmployeeStatus::Active,
      role:       Role::Employee,
    },
  ];

  rows
    .into_iter()
    .enumerate()
    .map(|(i, r)| Employee {
      id:         Uuid::from_u128(0xe000 + i as u128 + 1),
      email:      format!("{}.{}@company.com", r.first, r.last).to_lowercase(),
      first_name: r.first.to_owned(),
      last_name:  r.last.to_owned(),
      phone:      r.phone.to_owned(),
      department: r.department.to_owned(),
      position:   r.position.to_owned(),
      salary:     r.salary,
      hire_date:  r.hired,
      status:     r.status,
      role:       r.role,
      avatar:     None,
    })
    .collect()
}
