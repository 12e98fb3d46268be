//! Sign-in and sign-up screens.

use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph},
};
use staffdesk_core::validate::PasswordCheck;

use super::{centered, form::lines};
use crate::{
  app::{App, Screen},
  form::Form,
};

pub fn draw(f: &mut Frame, area: Rect, form: &Form, app: &App) {
  let mut body = lines(form);
  body.push(Line::default());

  match app.screen {
    Screen::Signup => {
      let check = PasswordCheck::of(form.value("password"));
      let rule = |ok: bool, text: &'static str| {
        let (mark, color) = if ok { ("✓", Color::Green) } else { ("·", Color::DarkGray) };
        Line::from(Span::styled(format!("  {mark} {text}"), Style::default().fg(color)))
      };
      body.push(rule(check.min_length, "at least 8 characters"));
      body.push(rule(check.has_upper, "an uppercase letter"));
      body.push(rule(check.has_lower, "a lowercase letter"));
      body.push(rule(check.has_digit, "a digit"));
    }
    _ => {
      let hint = Style::default().fg(Color::DarkGray);
      body.push(Line::from(Span::styled("Demo accounts:", hint)));
      body.push(Line::from(Span::styled("  admin@company.com / admin123", hint)));
      body.push(Line::from(Span::styled("  manager@company.com / manager123", hint)));
    }
  }

  if app.is_authenticating() {
    body.push(Line::default());
    body.push(Line::from(Span::styled(
      "Please wait…",
      Style::default().fg(Color::Yellow),
    )));
  }

  let rect = centered(area, 64, body.len() as u16 + 2);
  let block = Block::default()
    .title(format!(" {} ", form.title))
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::Cyan));
  f.render_widget(Paragraph::new(body).block(block), rect);
}
