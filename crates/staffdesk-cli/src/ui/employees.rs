//! Employees tab and the salary adjustment dialog.

use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Clear, Paragraph, Row, Table, TableState},
};
use staffdesk_core::{
  employee::EmployeeStatus,
  salary::{PRESETS, SalaryChange},
};
use uuid::Uuid;

use super::{form, money, role_color};
use crate::{app::App, form::Form};

pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([Constraint::Length(1), Constraint::Min(0)])
    .split(area);

  draw_filter_bar(f, rows[0], app);

  let filtered = app.filtered_employees();
  let total = app.directory.employees().len();
  let title = if app.filter.is_empty() {
    format!(" Employees ({total}) ")
  } else {
    format!(" Employees ({}/{total}) ", filtered.len())
  };

  let table_rows = filtered.iter().map(|e| {
    let status_style = match e.status {
      EmployeeStatus::Active => Style::default().fg(Color::Green),
      EmployeeStatus::Inactive => Style::default().fg(Color::DarkGray),
    };
    let def = e.role.definition();
    Row::new(vec![
      Span::raw(format!("{} {}", e.initials(), e.full_name())),
      Span::raw(e.email.clone()),
      Span::raw(e.department.clone()),
      Span::raw(e.position.clone()),
      Span::raw(money(e.salary)),
      Span::styled(e.status.to_string(), status_style),
      Span::styled(def.name, Style::default().fg(role_color(def.color))),
    ])
  });

  let table = Table::new(table_rows, [
    Constraint::Min(18),
    Constraint::Min(22),
    Constraint::Length(16),
    Constraint::Length(18),
    Constraint::Length(10),
    Constraint::Length(8),
    Constraint::Length(10),
  ])
  .header(
    Row::new(vec![
      "Name", "Email", "Department", "Position", "Salary", "Status", "Role",
    ])
    .style(
      Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD),
    ),
  )
  .block(
    Block::default()
      .title(title)
      .borders(Borders::ALL)
      .border_style(Style::default().fg(Color::DarkGray)),
  )
  .row_highlight_style(
    Style::default()
      .bg(Color::Blue)
      .fg(Color::White)
      .add_modifier(Modifier::BOLD),
  );

  let mut state = TableState::default();
  state.select((!filtered.is_empty()).then_some(app.employee_cursor));
  f.render_stateful_widget(table, rows[1], &mut state);
}

fn draw_filter_bar(f: &mut Frame, area: Rect, app: &App) {
  let search = if app.search_active {
    format!("/{}_", app.filter.search)
  } else if app.filter.search.is_empty() {
    "/ (none)".to_string()
  } else {
    format!("/{}", app.filter.search)
  };
  let department = app.filter.department.as_deref().unwrap_or("all");
  let status = app
    .filter
    .status
    .map_or_else(|| "all".to_string(), |s| s.to_string());

  let dim = Style::default().fg(Color::DarkGray);
  let line = Line::from(vec![
    Span::styled(" search ", dim),
    Span::styled(search, Style::default().fg(Color::Yellow)),
    Span::styled("  department ", dim),
    Span::raw(department.to_string()),
    Span::styled("  status ", dim),
    Span::raw(status),
  ]);
  f.render_widget(Paragraph::new(line), area);
}

/// The salary dialog: presets, the form, a live preview and past changes.
pub fn draw_salary(
  f: &mut Frame,
  area: Rect,
  app: &App,
  employee_id: Uuid,
  current: f64,
  salary_form: &Form,
) {
  f.render_widget(Clear, area);

  let name = app
    .directory
    .employee(employee_id)
    .map(|e| e.full_name())
    .unwrap_or_default();

  let mut lines = vec![
    Line::from(vec![
      Span::styled(name, Style::default().add_modifier(Modifier::BOLD)),
      Span::styled(
        format!("  current {}", money(current)),
        Style::default().fg(Color::Gray),
      ),
    ]),
    Line::from(Span::styled(
      PRESETS
        .iter()
        .enumerate()
        .map(|(i, p)| format!("F{} {}", i + 1, p.label))
        .collect::<Vec<_>>()
        .join("  "),
      Style::default().fg(Color::DarkGray),
    )),
    Line::default(),
  ];
  lines.extend(form::lines(salary_form));

  if let Ok(proposed) = salary_form.value("new_salary").trim().parse::<f64>() {
    let change = SalaryChange::between(current, proposed);
    let color = if change.is_raise() {
      Color::Green
    } else if change.difference < 0.0 {
      Color::Red
    } else {
      Color::Gray
    };
    let sign = if change.difference < 0.0 { "-" } else { "+" };
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
      format!(
        "{sign}{} ({:+.1}%)",
        money(change.difference.abs()),
        change.percentage
      ),
      Style::default().fg(color),
    )));
  }

  let history: Vec<_> = app.directory.salary_history(employee_id).collect();
  if let Some(last) = history.last() {
    lines.push(Line::from(Span::styled(
      format!(
        "last change {} → {} on {}: {}",
        money(last.previous_salary),
        money(last.new_salary),
        last.recorded_at.format("%Y-%m-%d"),
        last.reason
      ),
      Style::default().fg(Color::DarkGray),
    )));
  }

  let block = Block::default()
    .title(format!(" {} ", salary_form.title))
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::Cyan));
  f.render_widget(Paragraph::new(lines).block(block), area);
}
