use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::{Model, Screen};

/// Spans for the session bar (extracted for testability)
fn build_session_spans(model: &Model, server: &str) -> Vec<Span<'static>> {
    let mut spans = vec![];

    if model.session.logged_in {
        spans.push(Span::styled("● ", Style::default().fg(Color::Green)));
        spans.push(Span::raw(model.session.display_name().to_string()));
    } else if !model.session.checked {
        spans.push(Span::styled(
            "● Checking session...",
            Style::default().fg(Color::Yellow),
        ));
    } else {
        spans.push(Span::styled("● ", Style::default().fg(Color::Red)));
        spans.push(Span::raw(model.session.display_name().to_string()));
    }

    if model.ui.screen == Screen::Library {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled("Books:", Style::default().fg(Color::Yellow)));
        if model.library.loaded {
            spans.push(Span::raw(format!(" {}", model.library.books.len())));
        } else {
            spans.push(Span::raw(" ..."));
        }
    }

    spans.push(Span::raw(" | "));
    spans.push(Span::raw(server.to_string()));

    spans
}

/// Render the session bar at the top of the screen
pub fn render_session_bar(f: &mut Frame, area: Rect, model: &Model, server: &str) {
    let widget = Paragraph::new(Line::from(build_session_spans(model, server)))
        .block(Block::default().borders(Borders::ALL).title("Shelf"))
        .style(Style::default().fg(Color::Gray));

    f.render_widget(widget, area);
}
