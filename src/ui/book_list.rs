use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::api::{Book, BookStatus};
use crate::logic::formatting::{
    author_line, cover_marker, status_badge, status_info_line, truncate_to_width, EMPTY_LIBRARY_TEXT,
};
use crate::model::LibraryModel;

fn badge_color(status: BookStatus) -> Color {
    match status {
        BookStatus::InPlan => Color::Blue,
        BookStatus::Reading => Color::Yellow,
        BookStatus::Finished => Color::Green,
    }
}

/// One card per book: cover marker and title, author, badge and info line
fn build_card(book: &Book, width: usize) -> ListItem<'static> {
    let marker = cover_marker(book);
    let title_width = width.saturating_sub(marker.len() + 1);

    let title_line = Line::from(vec![
        Span::styled(marker, Style::default().fg(Color::DarkGray)),
        Span::raw(" "),
        Span::styled(
            truncate_to_width(&book.title, title_width),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]);

    let author = Line::from(Span::styled(
        format!("  {}", truncate_to_width(author_line(book), width.saturating_sub(2))),
        Style::default().fg(Color::Rgb(150, 150, 150)),
    ));

    let mut status_spans = vec![
        Span::raw("  "),
        Span::styled(
            status_badge(book.status),
            Style::default().fg(badge_color(book.status)),
        ),
    ];
    if let Some(info) = status_info_line(book) {
        status_spans.push(Span::raw(format!("  {}", info)));
    }

    ListItem::new(vec![title_line, author, Line::from(status_spans)])
}

/// Render the book list; shows a placeholder when there is nothing to list
pub fn render_book_list(f: &mut Frame, area: Rect, library: &LibraryModel, is_focused: bool) {
    let block = Block::default()
        .title("Books")
        .borders(Borders::ALL)
        .border_style(if is_focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        });

    if library.books.is_empty() {
        let text = if library.loaded {
            EMPTY_LIBRARY_TEXT
        } else {
            "Loading..."
        };
        let placeholder = Paragraph::new(text)
            .block(block)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(placeholder, area);
        return;
    }

    // Borders plus the highlight symbol
    let card_width = area.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = library
        .books
        .iter()
        .map(|book| build_card(book, card_width))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(library.selected);
    f.render_stateful_widget(list, area, &mut state);
}
