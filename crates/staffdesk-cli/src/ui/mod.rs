//! TUI rendering: orchestrates all panes.

pub mod auth;
pub mod dashboard;
pub mod departments;
pub mod employees;
pub mod form;
pub mod roles;

use chrono::Local;
use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Clear, Paragraph, Tabs},
};

use crate::app::{App, DeleteTarget, Modal, Screen, Tab};

// ─── Root draw ────────────────────────────────────────────────────────────────

/// Main draw function called each frame.
pub fn draw(f: &mut Frame, app: &App) {
  let area = f.area();

  // Vertical stack: header, body, status bar.
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1), // header
      Constraint::Min(0),    // body
      Constraint::Length(1), // status bar
    ])
    .split(area);

  draw_header(f, rows[0], app);
  match app.screen {
    Screen::Login => auth::draw(f, rows[1], &app.login_form, app),
    Screen::Signup => auth::draw(f, rows[1], &app.signup_form, app),
    Screen::Main => draw_main(f, rows[1], app),
  }
  draw_status(f, rows[2], app);

  if let Some(modal) = &app.modal {
    draw_modal(f, area, modal, app);
  }
}

// ─── Header ───────────────────────────────────────────────────────────────────

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
  let date = Local::now().format("%Y-%m-%d").to_string();
  let who = app
    .session
    .state()
    .user
    .map(|u| format!("{} ({})  ", u.display_name(), u.role.definition().name))
    .unwrap_or_default();

  let left = Span::styled(
    " staffdesk",
    Style::default()
      .fg(Color::White)
      .add_modifier(Modifier::BOLD),
  );
  let right = Span::styled(
    format!("{who}{date} "),
    Style::default().fg(Color::Gray),
  );

  // Simple left-right header: pad the middle.
  let left_width = left.content.chars().count() as u16;
  let right_width = right.content.chars().count() as u16;
  let pad = area
    .width
    .saturating_sub(left_width)
    .saturating_sub(right_width);

  let line = Line::from(vec![
    left,
    Span::raw(" ".repeat(pad as usize)),
    right,
  ]);

  let block = Block::default().style(Style::default().bg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);
  f.render_widget(Paragraph::new(line), inner);
}

// ─── Body ─────────────────────────────────────────────────────────────────────

fn draw_main(f: &mut Frame, area: Rect, app: &App) {
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([Constraint::Length(1), Constraint::Min(0)])
    .split(area);

  let titles = Tab::ALL
    .iter()
    .enumerate()
    .map(|(i, t)| format!("{} {}", i + 1, t.title()));
  let tabs = Tabs::new(titles)
    .select(app.tab.index())
    .style(Style::default().fg(Color::DarkGray))
    .highlight_style(
      Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD),
    );
  f.render_widget(tabs, rows[0]);

  match app.tab {
    Tab::Dashboard => dashboard::draw(f, rows[1], app),
    Tab::Employees => employees::draw(f, rows[1], app),
    Tab::Departments => departments::draw(f, rows[1], app),
    Tab::Roles => roles::draw(f, rows[1], app),
  }
}

// ─── Modals ───────────────────────────────────────────────────────────────────

fn draw_modal(f: &mut Frame, area: Rect, modal: &Modal, app: &App) {
  match modal {
    Modal::Employee { form, .. } => {
      let rect = centered(area, 60, form.fields.len() as u16 * 2 + 4);
      form::draw(f, rect, form);
    }
    Modal::Department { form, .. } => {
      let rect = centered(area, 60, form.fields.len() as u16 * 2 + 4);
      form::draw(f, rect, form);
    }
    Modal::Salary { employee_id, current, form } => {
      let rect = centered(area, 60, 16);
      employees::draw_salary(f, rect, app, *employee_id, *current, form);
    }
    Modal::ConfirmDelete(target) => {
      let name = match *target {
        DeleteTarget::Employee(id) => app.directory.employee(id).map(|e| e.full_name()),
        DeleteTarget::Department(id) => app.directory.department(id).map(|d| d.name.clone()),
      }
      .unwrap_or_default();

      let rect = centered(area, 50, 5);
      f.render_widget(Clear, rect);
      let block = Block::default()
        .title(" Confirm delete ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
      let text = vec![
        Line::from(format!("Delete {name}?")),
        Line::from(Span::styled(
          "y/Enter confirm  any other key cancels",
          Style::default().fg(Color::DarkGray),
        )),
      ];
      f.render_widget(Paragraph::new(text).block(block), rect);
    }
  }
}

/// A `width` × `height` rectangle centred in `area`, clipped to fit.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
  let width = width.min(area.width);
  let height = height.min(area.height);
  Rect {
    x: area.x + (area.width - width) / 2,
    y: area.y + (area.height - height) / 2,
    width,
    height,
  }
}

// ─── Formatting ───────────────────────────────────────────────────────────────

/// Whole dollars with thousands separators, e.g. `$95,000`.
pub fn money(amount: f64) -> String {
  let rounded = amount.round();
  let digits = format!("{:.0}", rounded.abs());
  let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
  for (i, c) in digits.chars().enumerate() {
    if i > 0 && (digits.len() - i) % 3 == 0 {
      grouped.push(',');
    }
    grouped.push(c);
  }
  let sign = if rounded < 0.0 { "-" } else { "" };
  format!("{sign}${grouped}")
}

pub fn role_color(color: &str) -> Color { color.parse().unwrap_or(Color::Gray) }

// ─── Status bar ───────────────────────────────────────────────────────────────

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
  let (mode_label, hints) = match app.screen {
    Screen::Login if app.is_authenticating() => ("WAIT", "Signing in…"),
    Screen::Signup if app.is_authenticating() => ("WAIT", "Creating account…"),
    Screen::Login => ("LOGIN", "Tab next field  Enter sign in  F2 sign up  Esc quit"),
    Screen::Signup => (
      "SIGNUP",
      "Tab next field  Space toggle  Enter create  F2/Esc back",
    ),
    Screen::Main if app.modal.is_some() => ("EDIT", "Tab next field  Enter save  Esc cancel"),
    Screen::Main if app.search_active => ("SEARCH", "Type to filter  Esc clear  Enter done"),
    Screen::Main => match app.tab {
      Tab::Employees => (
        "NORMAL",
        "/ search  d dept  s status  c clear  a add  e edit  $ salary  x delete",
      ),
      Tab::Departments => ("NORMAL", "↑↓/jk move  a add  e edit  x delete"),
      Tab::Roles => ("NORMAL", "↑↓/jk move  r change role"),
      Tab::Dashboard => ("NORMAL", "1-4/Tab switch  L sign out  q quit"),
    },
  };

  let status = if app.status_msg.is_empty() {
    hints.to_string()
  } else {
    app.status_msg.clone()
  };

  let mode_span = Span::styled(
    format!(" {mode_label} "),
    Style::default()
      .fg(Color::Black)
      .bg(Color::Cyan)
      .add_modifier(Modifier::BOLD),
  );
  let hint_span = Span::styled(
    format!("  {status}"),
    Style::default().fg(Color::DarkGray),
  );

  let line = Line::from(vec![mode_span, hint_span]);
  f.render_widget(
    Paragraph::new(line).style(Style::default().bg(Color::Black)),
    area,
  );
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn money_groups_thousands() {
    assert_eq!(money(0.0), "$0");
    assert_eq!(money(950.0), "$950");
    assert_eq!(money(95_000.0), "$95,000");
    assert_eq!(money(1_234_567.4), "$1,234,567");
    assert_eq!(money(-5_000.0), "-$5,000");
  }

  #[test]
  fn centered_fits_inside() {
    let area = Rect::new(0, 0, 80, 24);
    assert_eq!(centered(area, 40, 10), Rect::new(20, 7, 40, 10));
    assert_eq!(centered(area, 100, 30), area);
  }
}
