//! Application state machine and event dispatcher.

use std::{str::FromStr, sync::Arc};

use chrono::{Local, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use staffdesk_core::{
  department::{Department, NewDepartment},
  directory::Directory,
  employee::{Employee, EmployeeStatus, NewEmployee},
  role::Role,
  salary::{PRESETS, SalaryChange},
  validate::{self, SignupForm, ValidationError},
  views::{self, EmployeeFilter},
};
use staffdesk_session::SessionStore;
use staffdesk_store_sqlite::SqliteSlot;
use tokio::task::JoinHandle;
use tracing::{info, warn};
use uuid::Uuid;

use crate::form::{Field, Form, FormAction};

pub type Session = SessionStore<SqliteSlot>;

// ─── Screens ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
  Login,
  Signup,
  /// Signed in; one of the [`Tab`]s is showing.
  Main,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
  Dashboard,
  Employees,
  Departments,
  Roles,
}

impl Tab {
  pub const ALL: [Tab; 4] =
    [Tab::Dashboard, Tab::Employees, Tab::Departments, Tab::Roles];

  pub fn title(self) -> &'static str {
    match self {
      Tab::Dashboard => "Dashboard",
      Tab::Employees => "Employees",
      Tab::Departments => "Departments",
      Tab::Roles => "Roles",
    }
  }

  pub fn index(self) -> usize {
    Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
  }

  fn next(self) -> Tab { Self::ALL[(self.index() + 1) % Self::ALL.len()] }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteTarget {
  Employee(Uuid),
  Department(Uuid),
}

/// A dialog drawn over the current tab. Only one is open at a time.
#[derive(Debug, Clone)]
pub enum Modal {
  Employee { editing: Option<Uuid>, form: Form },
  Department { editing: Option<Uuid>, form: Form },
  Salary { employee_id: Uuid, current: f64, form: Form },
  ConfirmDelete(DeleteTarget),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AuthRequest {
  Login,
  Signup,
}

struct Pending {
  kind:   AuthRequest,
  handle: JoinHandle<staffdesk_session::Result<bool>>,
}

// ─── App ──────────────────────────────────────────────────────────────────────

/// Top-level application state.
pub struct App {
  pub screen: Screen,
  pub tab:    Tab,

  pub session:   Arc<Session>,
  pub directory: Directory,

  pub login_form:  Form,
  pub signup_form: Form,

  /// Employee list criteria; `search_active` while the user types a query.
  pub filter:        EmployeeFilter,
  pub search_active: bool,

  pub employee_cursor:   usize,
  pub department_cursor: usize,
  pub role_cursor:       usize,

  pub modal: Option<Modal>,

  /// One-line status message shown in the status bar.
  pub status_msg: String,

  pending: Option<Pending>,
}

fn login_form() -> Form {
  Form::new("Sign in", vec![
    Field::text("email", "Email"),
    Field::secret("password", "Password"),
  ])
}

fn signup_form() -> Form {
  Form::new("Create account", vec![
    Field::text("first_name", "First name"),
    Field::text("last_name", "Last name"),
    Field::text("email", "Email"),
    Field::secret("password", "Password"),
    Field::secret("confirm_password", "Confirm password"),
    Field::toggle("accept_terms", "Accept terms"),
  ])
}

fn employee_form(title: &str, input: Option<&NewEmployee>) -> Form {
  let (salary, hire_date, status, role) = match input {
    Some(e) => (
      e.salary.to_string(),
      e.hire_date.to_string(),
      e.status.to_string(),
      e.role.to_string(),
    ),
    None => (
      String::new(),
      Local::now().date_naive().to_string(),
      EmployeeStatus::Active.to_string(),
      Role::Employee.to_string(),
    ),
  };
  let text = |f: fn(&NewEmployee) -> &str| input.map(f).unwrap_or_default();

  Form::new(title, vec![
    Field::text("first_name", "First name").with_value(text(|e| e.first_name.as_str())),
    Field::text("last_name", "Last name").with_value(text(|e| e.last_name.as_str())),
    Field::text("email", "Email").with_value(text(|e| e.email.as_str())),
    Field::text("phone", "Phone").with_value(text(|e| e.phone.as_str())),
    Field::text("department", "Department").with_value(text(|e| e.department.as_str())),
    Field::text("position", "Position").with_value(text(|e| e.position.as_str())),
    Field::text("salary", "Salary").with_value(salary),
    Field::text("hire_date", "Hire date (YYYY-MM-DD)").with_value(hire_date),
    Field::text("status", "Status (active/inactive)").with_value(status),
    Field::text("role", "Role").with_value(role),
  ])
}

fn department_form(title: &str, input: Option<&NewDepartment>) -> Form {
  let input = input.cloned().unwrap_or_default();
  Form::new(title, vec![
    Field::text("name", "Name").with_value(input.name),
    Field::text("description", "Description").with_value(input.description),
    Field::text("manager", "Manager").with_value(input.manager),
    Field::text("budget", "Budget").with_value(input.budget.to_string()),
  ])
}

fn salary_form(current: f64) -> Form {
  Form::new("Salary adjustment", vec![
    Field::text("new_salary", "New salary").with_value(current.to_string()),
    Field::text("reason", "Reason"),
  ])
}

/// Read an employee form into a record, reporting every problem on the form.
fn read_employee_form(form: &mut Form) -> Option<NewEmployee> {
  form.clear_errors();

  let salary = form.value("salary").trim().parse::<f64>().unwrap_or(0.0);
  let hire_date =
    NaiveDate::parse_from_str(form.value("hire_date").trim(), "%Y-%m-%d").ok();
  let status = EmployeeStatus::from_str(form.value("status").trim()).ok();

  let input = NewEmployee {
    first_name: form.value("first_name").trim().to_owned(),
    last_name:  form.value("last_name").trim().to_owned(),
    email:      form.value("email").trim().to_owned(),
    phone:      form.value("phone").trim().to_owned(),
    department: form.value("department").trim().to_owned(),
    position:   form.value("position").trim().to_owned(),
    salary,
    hire_date:  hire_date.unwrap_or_else(|| Local::now().date_naive()),
    status:     status.unwrap_or_default(),
    role:       Role::from(form.value("role").trim().to_owned()),
    avatar:     None,
  };

  if let Err(errors) = validate::employee(&input) {
    form.apply_errors(&errors);
  }
  if hire_date.is_none() {
    form.apply_errors(&[ValidationError::Required("hire_date")]);
  }
  if status.is_none() {
    form.set_error("status", "status must be active or inactive");
  }

  (!form.has_errors()).then_some(input)
}

fn read_department_form(form: &mut Form) -> Option<NewDepartment> {
  form.clear_errors();
  let budget = form.value("budget").trim().parse::<f64>().unwrap_or(-1.0);
  let input = NewDepartment {
    name:        form.value("name").trim().to_owned(),
    description: form.value("description").trim().to_owned(),
    manager:     form.value("manager").trim().to_owned(),
    budget,
  };
  if let Err(errors) = validate::department(&input) {
    form.apply_errors(&errors);
  }
  (!form.has_errors()).then_some(input)
}

fn clamp_cursor(cursor: &mut usize, len: usize) {
  if len == 0 {
    *cursor = 0;
  } else if *cursor >= len {
    *cursor = len - 1;
  }
}

impl App {
  /// Create an [`App`], starting on the main screen if the session was
  /// resumed.
  pub fn new(session: Arc<Session>, directory: Directory) -> Self {
    let screen = if session.state().is_authenticated() {
      Screen::Main
    } else {
      Screen::Login
    };
    Self {
      screen,
      tab: Tab::Dashboard,
      session,
      directory,
      login_form: login_form(),
      signup_form: signup_form(),
      filter: EmployeeFilter::default(),
      search_active: false,
      employee_cursor: 0,
      department_cursor: 0,
      role_cursor: 0,
      modal: None,
      status_msg: String::new(),
      pending: None,
    }
  }

  // ── Derived data ──────────────────────────────────────────────────────────

  /// Employees passing the current list filter.
  pub fn filtered_employees(&self) -> Vec<&Employee> {
    views::filter_employees(self.directory.employees(), &self.filter)
  }

  /// The employee under the cursor on the Employees tab.
  pub fn cursor_employee(&self) -> Option<&Employee> {
    self.filtered_employees().get(self.employee_cursor).copied()
  }

  pub fn cursor_department(&self) -> Option<&Department> {
    self.directory.departments().get(self.department_cursor)
  }

  pub fn is_authenticating(&self) -> bool { self.pending.is_some() }

  // ── Authentication tasks ──────────────────────────────────────────────────

  /// Collect the result of a login/signup task once it has finished.
  pub async fn tick(&mut self) {
    if self.pending.as_ref().is_some_and(|p| p.handle.is_finished()) {
      self.finish_pending().await;
    }
  }

  /// Wait for the in-flight login/signup, if any, and apply its outcome.
  pub async fn finish_pending(&mut self) {
    let Some(Pending { kind, handle }) = self.pending.take() else {
      return;
    };

    let failure = match handle.await {
      Ok(Ok(true)) => {
        self.login_form.reset();
        self.signup_form.reset();
        self.screen = Screen::Main;
        self.tab = Tab::Dashboard;
        self.status_msg = self
          .session
          .state()
          .user
          .map(|u| format!("Welcome, {}", u.display_name()))
          .unwrap_or_default();
        return;
      }
      Ok(Ok(false)) => match kind {
        AuthRequest::Login => "Invalid email or password".to_owned(),
        AuthRequest::Signup => "An account with this email already exists".to_owned(),
      },
      Ok(Err(staffdesk_session::Error::Busy)) => {
        "Another sign-in is already in progress".to_owned()
      }
      Ok(Err(staffdesk_session::Error::Superseded)) => {
        "Signed out before the request finished; please try again".to_owned()
      }
      Ok(Err(e)) => {
        warn!(error = %e, "authentication request failed");
        format!("Error: {e}")
      }
      Err(e) => {
        warn!(error = %e, "authentication task panicked");
        "Error: sign-in task failed".to_owned()
      }
    };

    let form = match kind {
      AuthRequest::Login => &mut self.login_form,
      AuthRequest::Signup => &mut self.signup_form,
    };
    form.message = Some(failure);
  }

  fn submit_login(&mut self) {
    if self.pending.is_some() {
      return;
    }
    let email = self.login_form.value("email").to_owned();
    let password = self.login_form.value("password").to_owned();
    self.login_form.clear_errors();
    if let Err(e) = validate::login(&email, &password) {
      self.login_form.message = Some(e.to_string());
      return;
    }

    let session = Arc::clone(&self.session);
    let handle =
      tokio::spawn(async move { session.login(&email, &password).await });
    self.pending = Some(Pending { kind: AuthRequest::Login, handle });
  }

  fn submit_signup(&mut self) {
    if self.pending.is_some() {
      return;
    }
    let form = SignupForm {
      first_name:       self.signup_form.value("first_name").to_owned(),
      last_name:        self.signup_form.value("last_name").to_owned(),
      email:            self.signup_form.value("email").to_owned(),
      password:         self.signup_form.value("password").to_owned(),
      confirm_password: self.signup_form.value("confirm_password").to_owned(),
      accept_terms:     self.signup_form.checked("accept_terms"),
    };
    self.signup_form.clear_errors();
    if let Err(e) = validate::signup(&form) {
      self.signup_form.message = Some(e.to_string());
      return;
    }

    let session = Arc::clone(&self.session);
    let handle = tokio::spawn(async move {
      session
        .signup(&form.email, &form.password, &form.first_name, &form.last_name)
        .await
    });
    self.pending = Some(Pending { kind: AuthRequest::Signup, handle });
  }

  async fn logout(&mut self) {
    if let Err(e) = self.session.logout().await {
      warn!(error = %e, "failed to clear stored session");
    }
    self.screen = Screen::Login;
    self.modal = None;
    self.search_active = false;
    self.status_msg = "Signed out.".into();
  }

  // ── Key handling ──────────────────────────────────────────────────────────

  /// Process a key event. Returns `true` to continue, `false` to quit.
  pub async fn handle_key(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
    // Global: Ctrl-C quits from anywhere.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
      return Ok(false);
    }

    match self.screen {
      Screen::Login => Ok(self.handle_login_key(key)),
      Screen::Signup => Ok(self.handle_signup_key(key)),
      Screen::Main => {
        if self.modal.is_some() {
          self.handle_modal_key(key);
          return Ok(true);
        }
        if self.search_active {
          self.handle_search_key(key);
          return Ok(true);
        }
        self.handle_main_key(key).await
      }
    }
  }

  fn handle_login_key(&mut self, key: KeyEvent) -> bool {
    if key.code == KeyCode::F(2) {
      self.screen = Screen::Signup;
      return true;
    }
    match self.login_form.handle_key(key) {
      FormAction::Cancel => return false,
      FormAction::Submit => self.submit_login(),
      FormAction::None => {}
    }
    true
  }

  fn handle_signup_key(&mut self, key: KeyEvent) -> bool {
    if key.code == KeyCode::F(2) {
      self.screen = Screen::Login;
      return true;
    }
    match self.signup_form.handle_key(key) {
      FormAction::Cancel => self.screen = Screen::Login,
      FormAction::Submit => self.submit_signup(),
      FormAction::None => {}
    }
    true
  }

  fn handle_search_key(&mut self, key: KeyEvent) {
    match key.code {
      KeyCode::Esc => {
        self.search_active = false;
        self.filter.search.clear();
      }
      KeyCode::Enter => self.search_active = false,
      KeyCode::Backspace => {
        self.filter.search.pop();
      }
      KeyCode::Char(c) => self.filter.search.push(c),
      _ => {}
    }
    self.employee_cursor = 0;
  }

  async fn handle_main_key(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
    match key.code {
      KeyCode::Char('q') => return Ok(false),
      KeyCode::Char('L') => {
        self.logout().await;
        return Ok(true);
      }
      KeyCode::Tab => self.tab = self.tab.next(),
      KeyCode::Char(c @ '1'..='4') => {
        let idx = c as usize - '1' as usize;
        self.tab = Tab::ALL[idx];
      }
      _ => match self.tab {
        Tab::Dashboard => {}
        Tab::Employees => self.handle_employees_key(key),
        Tab::Departments => self.handle_departments_key(key),
        Tab::Roles => self.handle_roles_key(key),
      },
    }
    Ok(true)
  }

  fn handle_employees_key(&mut self, key: KeyEvent) {
    let len = self.filtered_employees().len();
    match key.code {
      KeyCode::Down | KeyCode::Char('j') => {
        if self.employee_cursor + 1 < len {
          self.employee_cursor += 1;
        }
      }
      KeyCode::Up | KeyCode::Char('k') => {
        self.employee_cursor = self.employee_cursor.saturating_sub(1);
      }
      KeyCode::Char('/') => {
        self.search_active = true;
        self.filter.search.clear();
        self.employee_cursor = 0;
      }
      KeyCode::Char('d') => {
        self.cycle_department_filter();
        self.employee_cursor = 0;
      }
      KeyCode::Char('s') => {
        self.filter.status = match self.filter.status {
          None => Some(EmployeeStatus::Active),
          Some(EmployeeStatus::Active) => Some(EmployeeStatus::Inactive),
          Some(EmployeeStatus::Inactive) => None,
        };
        self.employee_cursor = 0;
      }
      KeyCode::Char('c') => {
        self.filter = EmployeeFilter::default();
        self.employee_cursor = 0;
      }
      KeyCode::Char('a') => {
        self.modal = Some(Modal::Employee {
          editing: None,
          form:    employee_form("Add employee", None),
        });
      }
      KeyCode::Char('e') | KeyCode::Enter => {
        if let Some(emp) = self.cursor_employee() {
          let form = employee_form("Edit employee", Some(&emp.to_new()));
          self.modal = Some(Modal::Employee { editing: Some(emp.id), form });
        }
      }
      KeyCode::Char('$') => {
        if let Some(emp) = self.cursor_employee() {
          self.modal = Some(Modal::Salary {
            employee_id: emp.id,
            current:     emp.salary,
            form:        salary_form(emp.salary),
          });
        }
      }
      KeyCode::Char('x') | KeyCode::Delete => {
        if let Some(emp) = self.cursor_employee() {
          self.modal = Some(Modal::ConfirmDelete(DeleteTarget::Employee(emp.id)));
        }
      }
      _ => {}
    }
  }

  /// None → each department in order → None.
  fn cycle_department_filter(&mut self) {
    let names: Vec<&str> = self
      .directory
      .departments()
      .iter()
      .map(|d| d.name.as_str())
      .collect();
    let next = match self.filter.department.as_deref() {
      None => names.first().copied(),
      Some(current) => names
        .iter()
        .position(|n| *n == current)
        .and_then(|i| names.get(i + 1).copied()),
    };
    self.filter.department = next.map(str::to_owned);
  }

  fn handle_departments_key(&mut self, key: KeyEvent) {
    let len = self.directory.departments().len();
    match key.code {
      KeyCode::Down | KeyCode::Char('j') => {
        if self.department_cursor + 1 < len {
          self.department_cursor += 1;
        }
      }
      KeyCode::Up | KeyCode::Char('k') => {
        self.department_cursor = self.department_cursor.saturating_sub(1);
      }
      KeyCode::Char('a') => {
        self.modal = Some(Modal::Department {
          editing: None,
          form:    department_form("Add department", None),
        });
      }
      KeyCode::Char('e') | KeyCode::Enter => {
        if let Some(dept) = self.cursor_department() {
          let form = department_form("Edit department", Some(&dept.to_new()));
          self.modal = Some(Modal::Department { editing: Some(dept.id), form });
        }
      }
      KeyCode::Char('x') | KeyCode::Delete => {
        if let Some(dept) = self.cursor_department() {
          self.modal =
            Some(Modal::ConfirmDelete(DeleteTarget::Department(dept.id)));
        }
      }
      _ => {}
    }
  }

  fn handle_roles_key(&mut self, key: KeyEvent) {
    let len = self.directory.employees().len();
    match key.code {
      KeyCode::Down | KeyCode::Char('j') => {
        if self.role_cursor + 1 < len {
          self.role_cursor += 1;
        }
      }
      KeyCode::Up | KeyCode::Char('k') => {
        self.role_cursor = self.role_cursor.saturating_sub(1);
      }
      KeyCode::Char('r') | KeyCode::Enter => {
        if let Some(emp) = self.directory.employees().get(self.role_cursor) {
          let (id, role) = (emp.id, emp.role.next_known());
          self.status_msg =
            format!("{} is now {}", emp.full_name(), role.definition().name);
          self.directory.assign_role(id, role);
        }
      }
      _ => {}
    }
  }

  // ── Modals ────────────────────────────────────────────────────────────────

  fn handle_modal_key(&mut self, key: KeyEvent) {
    let Some(modal) = self.modal.take() else { return };
    self.modal = match modal {
      Modal::ConfirmDelete(target) => {
        if matches!(key.code, KeyCode::Char('y') | KeyCode::Enter) {
          self.delete(target);
        }
        None
      }
      Modal::Employee { editing, mut form } => match form.handle_key(key) {
        FormAction::Cancel => None,
        FormAction::None => Some(Modal::Employee { editing, form }),
        FormAction::Submit => match read_employee_form(&mut form) {
          Some(input) => {
            self.save_employee(editing, input);
            None
          }
          None => Some(Modal::Employee { editing, form }),
        },
      },
      Modal::Department { editing, mut form } => match form.handle_key(key) {
        FormAction::Cancel => None,
        FormAction::None => Some(Modal::Department { editing, form }),
        FormAction::Submit => match read_department_form(&mut form) {
          Some(input) => {
            self.save_department(editing, input);
            None
          }
          None => Some(Modal::Department { editing, form }),
        },
      },
      Modal::Salary { employee_id, current, mut form } => {
        if let KeyCode::F(n @ 1..=4) = key.code {
          let preset = PRESETS[usize::from(n) - 1];
          let proposed = preset.adjustment.apply(current).round();
          form.set_value("new_salary", proposed.to_string());
          self.modal = Some(Modal::Salary { employee_id, current, form });
          return;
        }
        match form.handle_key(key) {
          FormAction::Cancel => None,
          FormAction::None => Some(Modal::Salary { employee_id, current, form }),
          FormAction::Submit => {
            form.clear_errors();
            let new_salary =
              form.value("new_salary").trim().parse::<f64>().unwrap_or(0.0);
            let reason = form.value("reason").trim().to_owned();
            match validate::salary_adjustment(new_salary, &reason) {
              Ok(()) => {
                self.directory.adjust_salary(employee_id, new_salary, reason);
                let change = SalaryChange::between(current, new_salary);
                self.status_msg = format!(
                  "Salary updated ({:+.1}%)",
                  change.percentage
                );
                None
              }
              Err(errors) => {
                form.apply_errors(&errors);
                Some(Modal::Salary { employee_id, current, form })
              }
            }
          }
        }
      }
    };
  }

  fn save_employee(&mut self, editing: Option<Uuid>, input: NewEmployee) {
    match editing {
      Some(id) => {
        let mut input = input;
        input.avatar = self.directory.employee(id).and_then(|e| e.avatar.clone());
        self.directory.edit_employee(Employee::from_new(id, input));
        self.status_msg = "Employee updated.".into();
      }
      None => {
        let id = self.directory.add_employee(input);
        info!(%id, "employee created from form");
        self.status_msg = "Employee added.".into();
      }
    }
  }

  fn save_department(&mut self, editing: Option<Uuid>, input: NewDepartment) {
    match editing {
      Some(id) => {
        self.directory.edit_department(Department::from_new(id, input));
        self.status_msg = "Department updated.".into();
      }
      None => {
        self.directory.add_department(input);
        self.status_msg = "Department added.".into();
      }
    }
  }

  fn delete(&mut self, target: DeleteTarget) {
    match target {
      DeleteTarget::Employee(id) => {
        self.directory.delete_employee(id);
        let len = self.filtered_employees().len();
        clamp_cursor(&mut self.employee_cursor, len);
        clamp_cursor(&mut self.role_cursor, self.directory.employees().len());
        self.status_msg = "Employee deleted.".into();
      }
      DeleteTarget::Department(id) => {
        self.directory.delete_department(id);
        clamp_cursor(&mut self.department_cursor, self.directory.departments().len());
        self.status_msg = "Department deleted.".into();
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use std::time::Duration;

  use staffdesk_session::{CredentialTable, SessionConfig};

  use super::*;

  async fn app_with_latency(latency: Duration) -> App {
    let slot = SqliteSlot::open_in_memory("user").await.unwrap();
    let session = SessionStore::restore(
      slot,
      CredentialTable::demo().unwrap(),
      SessionConfig { latency },
    )
    .await
    .unwrap();
    App::new(Arc::new(session), Directory::seeded())
  }

  async fn app() -> App { app_with_latency(Duration::ZERO).await }

  fn key(code: KeyCode) -> KeyEvent { KeyEvent::new(code, KeyModifiers::NONE) }

  async fn type_str(app: &mut App, s: &str) {
    for c in s.chars() {
      app.handle_key(key(KeyCode::Char(c))).await.unwrap();
    }
  }

  async fn sign_in(app: &mut App, email: &str, password: &str) {
    type_str(app, email).await;
    app.handle_key(key(KeyCode::Tab)).await.unwrap();
    type_str(app, password).await;
    app.handle_key(key(KeyCode::Enter)).await.unwrap();
    app.finish_pending().await;
  }

  #[tokio::test]
  async fn starts_on_login_and_signs_in() {
    let mut app = app().await;
    assert_eq!(app.screen, Screen::Login);

    sign_in(&mut app, "admin@company.com", "admin123").await;

    assert_eq!(app.screen, Screen::Main);
    assert!(app.session.state().is_authenticated());
  }

  #[tokio::test]
  async fn bad_login_shows_message() {
    let mut app = app().await;
    sign_in(&mut app, "admin@company.com", "nope").await;

    assert_eq!(app.screen, Screen::Login);
    assert_eq!(
      app.login_form.message.as_deref(),
      Some("Invalid email or password")
    );
  }

  #[tokio::test]
  async fn empty_login_is_caught_before_the_session() {
    let mut app = app().await;
    app.handle_key(key(KeyCode::Enter)).await.unwrap();
    assert!(!app.is_authenticating());
    assert_eq!(
      app.login_form.message.as_deref(),
      Some("please fill in all fields")
    );
  }

  #[tokio::test]
  async fn logout_returns_to_login() {
    let mut app = app().await;
    sign_in(&mut app, "admin@company.com", "admin123").await;
    app.handle_key(key(KeyCode::Char('L'))).await.unwrap();
    assert_eq!(app.screen, Screen::Login);
    assert!(!app.session.state().is_authenticated());
  }

  #[tokio::test]
  async fn logout_during_signup_is_reported_separately() {
    let mut app = app_with_latency(Duration::from_millis(200)).await;
    app.handle_key(key(KeyCode::F(2))).await.unwrap();
    for (field, value) in [
      ("first_name", "Sam"),
      ("last_name", "Lee"),
      ("email", "sam@company.com"),
      ("password", "Passw0rdX"),
      ("confirm_password", "Passw0rdX"),
    ] {
      app.signup_form.set_value(field, value);
    }
    for f in &mut app.signup_form.fields {
      if f.key == "accept_terms" {
        f.checked = true;
      }
    }
    app.submit_signup();
    assert!(app.is_authenticating());

    tokio::time::sleep(Duration::from_millis(20)).await;
    app.session.logout().await.unwrap();
    app.finish_pending().await;

    assert_eq!(app.screen, Screen::Signup);
    assert_eq!(
      app.signup_form.message.as_deref(),
      Some("Signed out before the request finished; please try again")
    );
    assert_eq!(app.session.credential_count(), 2);
  }

  #[tokio::test]
  async fn search_filters_employee_list() {
    let mut app = app().await;
    sign_in(&mut app, "admin@company.com", "admin123").await;
    app.handle_key(key(KeyCode::Char('2'))).await.unwrap();
    app.handle_key(key(KeyCode::Char('/'))).await.unwrap();
    type_str(&mut app, "park").await;
    app.handle_key(key(KeyCode::Enter)).await.unwrap();

    let names: Vec<_> =
      app.filtered_employees().iter().map(|e| e.last_name.clone()).collect();
    assert_eq!(names, ["Park"]);
  }

  #[test]
  fn employee_form_reports_bad_fields() {
    let mut form = employee_form("Add employee", None);
    form.set_value("first_name", "Ada");
    form.set_value("salary", "abc");
    form.set_value("hire_date", "yesterday");
    assert!(read_employee_form(&mut form).is_none());
    assert!(form.fields.iter().any(|f| f.key == "salary" && f.error.is_some()));
    assert!(form.fields.iter().any(|f| f.key == "hire_date" && f.error.is_some()));
    assert!(form.fields.iter().any(|f| f.key == "last_name" && f.error.is_some()));
  }

  #[test]
  fn employee_form_round_trips_a_record() {
    let seed = staffdesk_core::seed::employees().remove(0);
    let mut form = employee_form("Edit employee", Some(&seed.to_new()));
    assert_eq!(read_employee_form(&mut form), Some(seed.to_new()));
  }

  #[tokio::test]
  async fn salary_modal_applies_preset_and_logs_reason() {
    let mut app = app().await;
    sign_in(&mut app, "admin@company.com", "admin123").await;
    app.handle_key(key(KeyCode::Char('2'))).await.unwrap();
    let (id, before) = {
      let emp = app.cursor_employee().unwrap();
      (emp.id, emp.salary)
    };

    app.handle_key(key(KeyCode::Char('$'))).await.unwrap();
    app.handle_key(key(KeyCode::F(2))).await.unwrap();
    app.handle_key(key(KeyCode::Tab)).await.unwrap();
    type_str(&mut app, "review").await;
    app.handle_key(key(KeyCode::Enter)).await.unwrap();

    assert!(app.modal.is_none());
    assert_eq!(app.directory.employee(id).unwrap().salary, (before * 1.1).round());
    let history: Vec<_> = app.directory.salary_history(id).collect();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].reason, "review");
  }
}
