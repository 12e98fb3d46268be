//! Text-entry forms shared by the login, signup and record editors.

use crossterm::event::{KeyCode, KeyEvent};
use staffdesk_core::validate::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
  Text,
  /// Rendered as bullets.
  Secret,
  /// A checkbox toggled with space.
  Toggle,
}

#[derive(Debug, Clone)]
pub struct Field {
  pub key:     &'static str,
  pub label:   &'static str,
  pub kind:    FieldKind,
  pub value:   String,
  pub checked: bool,
  pub error:   Option<String>,
}

impl Field {
  pub fn text(key: &'static str, label: &'static str) -> Self {
    Self {
      key,
      label,
      kind: FieldKind::Text,
      value: String::new(),
      checked: false,
      error: None,
    }
  }

  pub fn secret(key: &'static str, label: &'static str) -> Self {
    Self { kind: FieldKind::Secret, ..Self::text(key, label) }
  }

  pub fn toggle(key: &'static str, label: &'static str) -> Self {
    Self { kind: FieldKind::Toggle, ..Self::text(key, label) }
  }

  pub fn with_value(mut self, value: impl Into<String>) -> Self {
    self.value = value.into();
    self
  }

  /// What the field shows on screen.
  pub fn display(&self) -> String {
    match self.kind {
      FieldKind::Text => self.value.clone(),
      FieldKind::Secret => "•".repeat(self.value.chars().count()),
      FieldKind::Toggle => {
        if self.checked { "[x]".into() } else { "[ ]".into() }
      }
    }
  }
}

/// What a key press asks the owner of a form to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
  None,
  Submit,
  Cancel,
}

#[derive(Debug, Clone)]
pub struct Form {
  pub title:   String,
  pub fields:  Vec<Field>,
  pub focus:   usize,
  /// Form-level message, e.g. a failed login.
  pub message: Option<String>,
}

impl Form {
  pub fn new(title: impl Into<String>, fields: Vec<Field>) -> Self {
    Self { title: title.into(), fields, focus: 0, message: None }
  }

  fn field(&self, key: &str) -> Option<&Field> {
    self.fields.iter().find(|f| f.key == key)
  }

  fn field_mut(&mut self, key: &str) -> Option<&mut Field> {
    self.fields.iter_mut().find(|f| f.key == key)
  }

  pub fn value(&self, key: &str) -> &str {
    self.field(key).map_or("", |f| f.value.as_str())
  }

  pub fn checked(&self, key: &str) -> bool {
    self.field(key).is_some_and(|f| f.checked)
  }

  pub fn set_value(&mut self, key: &str, value: impl Into<String>) {
    if let Some(f) = self.field_mut(key) {
      f.value = value.into();
    }
  }

  /// Attach an inline message to one field.
  pub fn set_error(&mut self, key: &str, message: impl Into<String>) {
    if let Some(f) = self.field_mut(key) {
      f.error = Some(message.into());
    }
  }

  /// Spread validation errors onto their fields; errors without a field go
  /// to the form message.
  pub fn apply_errors(&mut self, errors: &[ValidationError]) {
    for e in errors {
      match e.field() {
        Some(key) if self.field(key).is_some() => self.set_error(key, e.to_string()),
        _ => self.message = Some(e.to_string()),
      }
    }
  }

  pub fn clear_errors(&mut self) {
    self.message = None;
    for f in &mut self.fields {
      f.error = None;
    }
  }

  pub fn has_errors(&self) -> bool {
    self.message.is_some() || self.fields.iter().any(|f| f.error.is_some())
  }

  /// Empty every field and message, keeping the layout.
  pub fn reset(&mut self) {
    for f in &mut self.fields {
      f.value.clear();
      f.checked = false;
      f.error = None;
    }
    self.message = None;
    self.focus = 0;
  }

  pub fn handle_key(&mut self, key: KeyEvent) -> FormAction {
    let len = self.fields.len();
    match key.code {
      KeyCode::Esc => return FormAction::Cancel,
      KeyCode::Enter => return FormAction::Submit,
      KeyCode::Tab | KeyCode::Down => self.focus = (self.focus + 1) % len.max(1),
      KeyCode::BackTab | KeyCode::Up => {
        self.focus = (self.focus + len.max(1) - 1) % len.max(1);
      }
      KeyCode::Backspace => {
        if let Some(f) = self.fields.get_mut(self.focus) {
          f.value.pop();
          f.error = None;
        }
        self.message = None;
      }
      KeyCode::Char(c) => {
        if let Some(f) = self.fields.get_mut(self.focus) {
          match f.kind {
            FieldKind::Toggle if c == ' ' => f.checked = !f.checked,
            FieldKind::Toggle => {}
            _ => f.value.push(c),
          }
          f.error = None;
        }
        self.message = None;
      }
      _ => {}
    }
    FormAction::None
  }
}

#[cfg(test)]
mod tests {
  use crossterm::event::KeyModifiers;

  use super::*;

  fn key(code: KeyCode) -> KeyEvent { KeyEvent::new(code, KeyModifiers::NONE) }

  fn type_str(form: &mut Form, s: &str) {
    for c in s.chars() {
      form.handle_key(key(KeyCode::Char(c)));
    }
  }

  fn sample() -> Form {
    Form::new("Sample", vec![
      Field::text("email", "Email"),
      Field::secret("password", "Password"),
      Field::toggle("accept_terms", "Accept terms"),
    ])
  }

  #[test]
  fn typing_and_focus() {
    let mut form = sample();
    type_str(&mut form, "a@b.c");
    form.handle_key(key(KeyCode::Tab));
    type_str(&mut form, "pw");
    form.handle_key(key(KeyCode::Backspace));
    assert_eq!(form.value("email"), "a@b.c");
    assert_eq!(form.value("password"), "p");
    assert_eq!(form.fields[1].display(), "•");

    form.handle_key(key(KeyCode::Up));
    form.handle_key(key(KeyCode::Up));
    assert_eq!(form.focus, 2);
    type_str(&mut form, " ");
    assert!(form.checked("accept_terms"));
  }

  #[test]
  fn enter_and_esc_are_actions() {
    let mut form = sample();
    assert_eq!(form.handle_key(key(KeyCode::Enter)), FormAction::Submit);
    assert_eq!(form.handle_key(key(KeyCode::Esc)), FormAction::Cancel);
  }

  #[test]
  fn errors_land_on_fields_and_clear_on_typing() {
    let mut form = sample();
    form.apply_errors(&[
      ValidationError::InvalidEmail,
      ValidationError::IncompleteForm,
    ]);
    assert_eq!(form.fields[0].error.as_deref(), Some("email is invalid"));
    assert_eq!(form.message.as_deref(), Some("please fill in all fields"));

    type_str(&mut form, "x");
    assert!(form.fields[0].error.is_none());
    assert!(form.message.is_none());
  }
}
