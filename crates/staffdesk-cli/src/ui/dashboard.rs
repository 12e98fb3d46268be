//! Dashboard tab: headline figures, departments and recent hires.

use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph, Row, Table},
};
use staffdesk_core::views;

use super::money;
use crate::app::App;

pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let summary = views::dashboard_summary(
    app.directory.employees(),
    app.directory.departments(),
  );

  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([Constraint::Length(4), Constraint::Min(0)])
    .split(area);

  // Four stat cards across the top.
  let cards = Layout::default()
    .direction(Direction::Horizontal)
    .constraints([Constraint::Ratio(1, 4); 4])
    .split(rows[0]);
  let stats = [
    ("Total employees", summary.total_employees.to_string()),
    ("Active", summary.active_employees.to_string()),
    ("Departments", summary.department_count.to_string()),
    ("Average salary", money(summary.average_salary)),
  ];
  for ((label, value), rect) in stats.into_iter().zip(cards.iter()) {
    let block = Block::default()
      .title(format!(" {label} "))
      .borders(Borders::ALL)
      .border_style(Style::default().fg(Color::DarkGray));
    let text = Line::from(Span::styled(
      value,
      Style::default().add_modifier(Modifier::BOLD),
    ));
    f.render_widget(Paragraph::new(text).block(block), *rect);
  }

  let cols = Layout::default()
    .direction(Direction::Horizontal)
    .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
    .split(rows[1]);

  let header_style = Style::default()
    .fg(Color::Cyan)
    .add_modifier(Modifier::BOLD);

  let dept_rows = summary.departments.iter().map(|d| {
    Row::new(vec![
      d.department.name.clone(),
      d.employee_count.to_string(),
      money(d.average_salary),
    ])
  });
  let dept_table = Table::new(dept_rows, [
    Constraint::Min(16),
    Constraint::Length(9),
    Constraint::Length(12),
  ])
  .header(Row::new(vec!["Department", "Staff", "Avg salary"]).style(header_style))
  .block(
    Block::default()
      .title(" Departments ")
      .borders(Borders::ALL)
      .border_style(Style::default().fg(Color::DarkGray)),
  );
  f.render_widget(dept_table, cols[0]);

  let hire_rows = summary.recent_hires.iter().map(|e| {
    Row::new(vec![
      e.full_name(),
      e.position.clone(),
      e.hire_date.format("%Y-%m-%d").to_string(),
    ])
  });
  let hire_table = Table::new(hire_rows, [
    Constraint::Min(16),
    Constraint::Min(12),
    Constraint::Length(10),
  ])
  .header(Row::new(vec!["Name", "Position", "Hired"]).style(header_style))
  .block(
    Block::default()
      .title(" Recent hires ")
      .borders(Borders::ALL)
      .border_style(Style::default().fg(Color::DarkGray)),
  );
  f.render_widget(hire_table, cols[1]);
}
