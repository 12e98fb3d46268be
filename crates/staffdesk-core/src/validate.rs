//! Input validation performed by callers before records reach a store.
//!
//! The stores accept whatever they are given; these checks are what the
//! forms run first. Each failure names the field it belongs to so a form can
//! show it inline.

use thiserror::Error;

use crate::{department::NewDepartment, employee::NewEmployee};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
  #[error("{0} is required")]
  Required(&'static str),

  #[error("email is invalid")]
  InvalidEmail,

  #[error("salary must be greater than 0")]
  NonPositiveSalary,

  #[error("budget cannot be negative")]
  NegativeBudget,

  #[error("a reason is required for salary changes")]
  MissingReason,

  #[error("please fill in all fields")]
  IncompleteForm,

  #[error("password does not meet the requirements")]
  WeakPassword,

  #[error("passwords do not match")]
  PasswordMismatch,

  #[error("please accept the terms and conditions")]
  TermsNotAccepted,
}

impl ValidationError {
  /// The form field this error belongs to, if it is tied to one.
  pub fn field(&self) -> Option<&'static str> {
    match self {
      Self::Required(field) => Some(*field),
      Self::InvalidEmail => Some("email"),
      Self::NonPositiveSalary => Some("salary"),
      Self::NegativeBudget => Some("budget"),
      Self::MissingReason => Some("reason"),
      Self::WeakPassword => Some("password"),
      Self::PasswordMismatch => Some("confirm_password"),
      Self::TermsNotAccepted => Some("accept_terms"),
      Self::IncompleteForm => None,
    }
  }
}

fn blank(s: &str) -> bool { s.trim().is_empty() }

/// Loose `local@domain.tld` shape check: three non-empty runs without
/// whitespace, split by an `@` and a later `.`.
pub fn is_valid_email(email: &str) -> bool {
  if email.chars().any(char::is_whitespace) {
    return false;
  }
  let Some((local, domain)) = email.rsplit_once('@') else {
    return false;
  };
  let Some((host, tld)) = domain.rsplit_once('.') else {
    return false;
  };
  !local.is_empty() && !host.is_empty() && !tld.is_empty()
}

/// Check every field of an employee form, reporting all failures.
pub fn employee(input: &NewEmployee) -> Result<(), Vec<ValidationError>> {
  let mut errors = Vec::new();

  if blank(&input.first_name) {
    errors.push(ValidationError::Required("first_name"));
  }
  if blank(&input.last_name) {
    errors.push(ValidationError::Required("last_name"));
  }
  if blank(&input.email) {
    errors.push(ValidationError::Required("email"));
  } else if !is_valid_email(input.email.trim()) {
    errors.push(ValidationError::InvalidEmail);
  }
  if blank(&input.phone) {
    errors.push(ValidationError::Required("phone"));
  }
  if input.department.is_empty() {
    errors.push(ValidationError::Required("department"));
  }
  if blank(&input.position) {
    errors.push(ValidationError::Required("position"));
  }
  if !(input.salary > 0.0) {
    errors.push(ValidationError::NonPositiveSalary);
  }

  if errors.is_empty() { Ok(()) } else { Err(errors) }
}

pub fn department(input: &NewDepartment) -> Result<(), Vec<ValidationError>> {
  let mut errors = Vec::new();
  if blank(&input.name) {
    errors.push(ValidationError::Required("name"));
  }
  if !(input.budget >= 0.0) {
    errors.push(ValidationError::NegativeBudget);
  }
  if errors.is_empty() { Ok(()) } else { Err(errors) }
}

pub fn salary_adjustment(
  new_salary: f64,
  reason: &str,
) -> Result<(), Vec<ValidationError>> {
  let mut errors = Vec::new();
  if !(new_salary > 0.0) {
    errors.push(ValidationError::NonPositiveSalary);
  }
  if blank(reason) {
    errors.push(ValidationError::MissingReason);
  }
  if errors.is_empty() { Ok(()) } else { Err(errors) }
}

// ─── Authentication forms ────────────────────────────────────────────────────

pub fn login(email: &str, password: &str) -> Result<(), ValidationError> {
  if email.is_empty() || password.is_empty() {
    return Err(ValidationError::IncompleteForm);
  }
  Ok(())
}

/// Which parts of the password policy a candidate satisfies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordCheck {
  pub min_length: bool,
  pub has_upper:  bool,
  pub has_lower:  bool,
  pub has_digit:  bool,
}

impl PasswordCheck {
  pub const MIN_LENGTH: usize = 8;

  pub fn of(password: &str) -> Self {
    Self {
      min_length: password.chars().count() >= Self::MIN_LENGTH,
      has_upper:  password.chars().any(|c| c.is_ascii_uppercase()),
      has_lower:  password.chars().any(|c| c.is_ascii_lowercase()),
      has_digit:  password.chars().any(|c| c.is_ascii_digit()),
    }
  }

  pub fn is_valid(&self) -> bool {
    self.min_length && self.has_upper && self.has_lower && self.has_digit
  }
}

/// Raw signup form input.
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
  pub first_name:       String,
  pub last_name:        String,
  pub email:            String,
  pub password:         String,
  pub confirm_password: String,
  pub accept_terms:     bool,
}

/// Checks run in the order a user would fix them; the first failure wins.
pub fn signup(form: &SignupForm) -> Result<(), ValidationError> {
  let fields = [
    &form.first_name,
    &form.last_name,
    &form.email,
    &form.password,
    &form.confirm_password,
  ];
  if fields.iter().any(|f| f.is_empty()) {
    return Err(ValidationError::IncompleteForm);
  }
  if !PasswordCheck::of(&form.password).is_valid() {
    return Err(ValidationError::WeakPassword);
  }
  if form.password != form.confirm_password {
    return Err(ValidationError::PasswordMismatch);
  }
  if !form.accept_terms {
    return Err(ValidationError::TermsNotAccepted);
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;

  use super::*;
  use crate::{employee::EmployeeStatus, role::Role};

  fn valid_employee() -> NewEmployee {
    NewEmployee {
      first_name: "Ada".into(),
      last_name:  "Lovelace".into(),
      email:      "ada@company.com".into(),
      phone:      "555-0101".into(),
      department: "Engineering".into(),
      position:   "Analyst".into(),
      salary:     90_000.0,
      hire_date:  NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
      status:     EmployeeStatus::Active,
      role:       Role::Employee,
      avatar:     None,
    }
  }

  #[test]
  fn email_shapes() {
    assert!(is_valid_email("a@b.co"));
    assert!(is_valid_email("first.last@sub.example.org"));
    assert!(!is_valid_email("a@b"));
    assert!(!is_valid_email("@b.co"));
    assert!(!is_valid_email("a b@c.d"));
    assert!(!is_valid_email("a@.d"));
  }

  #[test]
  fn valid_employee_passes() {
    assert!(employee(&valid_employee()).is_ok());
  }

  #[test]
  fn employee_reports_every_failure() {
    let mut input = valid_employee();
    input.first_name = "  ".into();
    input.email = "nope".into();
    input.salary = 0.0;
    let errors = employee(&input).unwrap_err();
    assert_eq!(errors, vec![
      ValidationError::Required("first_name"),
      ValidationError::InvalidEmail,
      ValidationError::NonPositiveSalary,
    ]);
    assert_eq!(errors[1].field(), Some("email"));
  }

  #[test]
  fn nan_salary_is_rejected() {
    let mut input = valid_employee();
    input.salary = f64::NAN;
    assert!(employee(&input).is_err());
  }

  #[test]
  fn salary_adjustment_needs_reason() {
    assert!(salary_adjustment(50_000.0, "merit").is_ok());
    assert_eq!(
      salary_adjustment(-1.0, " ").unwrap_err(),
      vec![
        ValidationError::NonPositiveSalary,
        ValidationError::MissingReason
      ]
    );
  }

  #[test]
  fn password_policy() {
    assert!(PasswordCheck::of("Secret123").is_valid());
    let weak = PasswordCheck::of("secret");
    assert!(!weak.min_length);
    assert!(!weak.has_upper);
    assert!(weak.has_lower);
    assert!(!weak.has_digit);
  }

  #[test]
  fn signup_checks_in_order() {
    let mut form = SignupForm {
      first_name:       "New".into(),
      last_name:        "Person".into(),
      email:            "new@company.com".into(),
      password:         "Passw0rdX".into(),
      confirm_password: "Passw0rdY".into(),
      accept_terms:     false,
    };
    assert_eq!(signup(&form), Err(ValidationError::PasswordMismatch));
    form.confirm_password = form.password.clone();
    assert_eq!(signup(&form), Err(ValidationError::TermsNotAccepted));
    form.accept_terms = true;
    assert_eq!(signup(&form), Ok(()));
    form.email.clear();
    assert_eq!(signup(&form), Err(ValidationError::IncompleteForm));
  }

  #[test]
  fn login_requires_both_fields() {
    assert_eq!(login("", "x"), Err(ValidationError::IncompleteForm));
    assert!(login("a@b.c", "x").is_ok());
  }
}
