//! Generic form renderer used by the auth screens and the editor dialogs.

use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::form::Form;

/// Width reserved for field labels.
const LABEL_WIDTH: usize = 26;

/// Draw `form` over whatever is in `area`.
pub fn draw(f: &mut Frame, area: Rect, form: &Form) {
  f.render_widget(Clear, area);
  let block = Block::default()
    .title(format!(" {} ", form.title))
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::Cyan));

  f.render_widget(
    Paragraph::new(lines(form))
      .block(block)
      .wrap(Wrap { trim: false }),
    area,
  );
}

/// One line per field, plus an error line under any field that has one.
pub fn lines(form: &Form) -> Vec<Line<'static>> {
  let mut out = Vec::with_capacity(form.fields.len() * 2 + 1);

  for (i, field) in form.fields.iter().enumerate() {
    let focused = i == form.focus;
    let label_style = if focused {
      Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
      Style::default().fg(Color::Gray)
    };
    let cursor = if focused { "_" } else { "" };

    out.push(Line::from(vec![
      Span::styled(format!("{:<w$}", field.label, w = LABEL_WIDTH), label_style),
      Span::raw(format!("{}{cursor}", field.display())),
    ]));
    if let Some(err) = &field.error {
      out.push(Line::from(Span::styled(
        format!("{:w$}{err}", "", w = LABEL_WIDTH),
        Style::default().fg(Color::Red),
      )));
    }
  }

  if let Some(msg) = &form.message {
    out.push(Line::default());
    out.push(Line::from(Span::styled(
      msg.clone(),
      Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    )));
  }
  out
}
