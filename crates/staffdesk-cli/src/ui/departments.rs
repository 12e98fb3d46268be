//! Departments tab.

use ratatui::{
  Frame,
  layout::{Constraint, Rect},
  style::{Color, Modifier, Style},
  widgets::{Block, Borders, Row, Table, TableState},
};
use staffdesk_core::views;

use super::money;
use crate::app::App;

pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let departments = app.directory.departments();
  let employees = app.directory.employees();

  // Headcounts are derived on every frame.
  let rows = departments.iter().map(|d| {
    let stats = views::department_stats(d, employees);
    Row::new(vec![
      d.name.clone(),
      d.manager.clone(),
      stats.employee_count.to_string(),
      money(d.budget),
      d.description.clone(),
    ])
  });

  let table = Table::new(rows, [
    Constraint::Length(18),
    Constraint::Length(18),
    Constraint::Length(6),
    Constraint::Length(12),
    Constraint::Min(10),
  ])
  .header(
    Row::new(vec!["Name", "Manager", "Staff", "Budget", "Description"]).style(
      Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD),
    ),
  )
  .block(
    Block::default()
      .title(format!(" Departments ({}) ", departments.len()))
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
  state.select((!departments.is_empty()).then_some(app.department_cursor));
  f.render_stateful_widget(table, area, &mut state);
}
