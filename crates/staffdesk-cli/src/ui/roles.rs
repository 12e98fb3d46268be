//! Roles tab: role definitions with counts, and per-employee assignment.

use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph, Row, Table, TableState, Wrap},
};
use staffdesk_core::views;

use super::role_color;
use crate::app::App;

pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let cols = Layout::default()
    .direction(Direction::Horizontal)
    .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
    .split(area);

  draw_definitions(f, cols[0], app);
  draw_assignments(f, cols[1], app);
}

fn draw_definitions(f: &mut Frame, area: Rect, app: &App) {
  let stats = views::role_stats(app.directory.employees());
  let mut lines = Vec::new();

  for rc in &stats.roles {
    let def = rc.definition;
    lines.push(Line::from(vec![
      Span::styled(
        def.name,
        Style::default()
          .fg(role_color(def.color))
          .add_modifier(Modifier::BOLD),
      ),
      Span::styled(
        format!("  {} assigned", rc.count),
        Style::default().fg(Color::DarkGray),
      ),
    ]));
    lines.push(Line::from(format!("  {}", def.description)));
    lines.push(Line::from(Span::styled(
      format!("  {}", def.permissions.join(", ")),
      Style::default().fg(Color::Gray),
    )));
    lines.push(Line::default());
  }
  if stats.unrecognized > 0 {
    lines.push(Line::from(Span::styled(
      format!("{} with an unrecognized role", stats.unrecognized),
      Style::default().fg(Color::Yellow),
    )));
  }

  let block = Block::default()
    .title(" Roles ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  f.render_widget(
    Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
    area,
  );
}

fn draw_assignments(f: &mut Frame, area: Rect, app: &App) {
  let employees = app.directory.employees();
  let rows = employees.iter().map(|e| {
    let def = e.role.definition();
    let label = if e.role.is_known() {
      def.name.to_string()
    } else {
      format!("{} (unrecognized)", e.role)
    };
    Row::new(vec![
      Span::raw(e.full_name()),
      Span::raw(e.department.clone()),
      Span::styled(label, Style::default().fg(role_color(def.color))),
    ])
  });

  let table = Table::new(rows, [
    Constraint::Min(16),
    Constraint::Length(16),
    Constraint::Length(22),
  ])
  .header(Row::new(vec!["Employee", "Department", "Role"]).style(
    Style::default()
      .fg(Color::Cyan)
      .add_modifier(Modifier::BOLD),
  ))
  .block(
    Block::default()
      .title(" Assignments ")
      .borders(Borders::ALL)
      .border_style(Style::default().fg(Color::DarkGray)),
  )
  .row_highlight_style(Style::default().bg(Color::Blue).fg(Color::White));

  let mut state = TableState::default();
  state.select((!employees.is_empty()).then_some(app.role_cursor));
  f.render_stateful_widget(table, area, &mut state);
}
