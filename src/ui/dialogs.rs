use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::forms::input_spans;
use super::layout::centered_rect;
use crate::api::BookStatus;
use crate::model::{DetailField, DetailForm};

/// Status selector: every status listed, the chosen one highlighted
fn status_selector(current: BookStatus, focused: bool) -> Line<'static> {
    let label_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let mut spans = vec![Span::styled("Status: ", label_style)];
    if focused {
        spans.push(Span::styled("◀ ", Style::default().fg(Color::Yellow)));
    }
    for (idx, status) in BookStatus::ALL.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw(" "));
        }
        let style = if *status == current {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {} ", status.as_str()), style));
    }
    if focused {
        spans.push(Span::styled(" ▶", Style::default().fg(Color::Yellow)));
    }
    Line::from(spans)
}

fn detail_lines(form: &DetailForm) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            form.author.clone(),
            Style::default().fg(Color::Rgb(150, 150, 150)),
        )),
        Line::from(""),
        Line::from(input_spans(
            "Image URL",
            form.image_url.as_str(),
            form.focus == DetailField::ImageUrl,
            false,
        )),
        Line::from(input_spans(
            "Description",
            form.description.as_str(),
            form.focus == DetailField::Description,
            false,
        )),
        status_selector(form.status, form.focus == DetailField::Status),
    ];

    // Hidden inputs keep their values, they are just not drawn
    if form.is_visible(DetailField::CurrentPage) {
        let mut spans = input_spans(
            "Current page",
            form.current_page.text(),
            form.focus == DetailField::CurrentPage,
            false,
        );
        spans.push(Span::styled(
            format!(" / {}", form.current_page.max()),
            Style::default().fg(Color::DarkGray),
        ));
        lines.push(Line::from(spans));
    }
    if form.is_visible(DetailField::Rating) {
        let mut spans = input_spans(
            "Rating",
            form.rating.text(),
            form.focus == DetailField::Rating,
            false,
        );
        spans.push(Span::styled(
            format!(" / {}", form.rating.max()),
            Style::default().fg(Color::DarkGray),
        ));
        lines.push(Line::from(spans));
    }

    lines
}

/// Render the book detail/edit modal
pub fn render_detail_modal(f: &mut Frame, form: &DetailForm) {
    let lines = detail_lines(form);
    let prompt_area = centered_rect(f.area(), 70, lines.len() as u16 + 2);

    let modal = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", form.title))
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White).bg(Color::Black))
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, prompt_area);
    f.render_widget(modal, prompt_area);
}

/// Render the delete confirmation dialog
pub fn render_delete_confirmation(f: &mut Frame, title: Option<&str>) {
    let prompt_text = format!(
        "Delete this book?\n\n\
        {}\n\n\
        WARNING: This action cannot be undone!\n\n\
        Continue? (y/n)",
        title.unwrap_or("(unknown book)")
    );

    let prompt_area = centered_rect(f.area(), 50, 11);

    let prompt = Paragraph::new(prompt_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Confirm Delete")
                .border_style(Style::default().fg(Color::Red)),
        )
        .style(Style::default().fg(Color::White).bg(Color::Black))
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, prompt_area);
    f.render_widget(prompt, prompt_area);
}

/// Render a blocking alert; Enter or Esc dismisses it
pub fn render_alert(f: &mut Frame, message: &str) {
    let width = (message.len() as u16 + 6).clamp(30, 70);
    let prompt_area = centered_rect(f.area(), width, 7);

    let prompt = Paragraph::new(format!("{}\n\n(Enter to dismiss)", message))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Alert")
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .style(Style::default().fg(Color::White).bg(Color::Black))
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, prompt_area);
    f.render_widget(prompt, prompt_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Book;

    fn lines_text(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    fn form(status: BookStatus) -> DetailForm {
        DetailForm::from_book(&Book {
            id: 1,
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            status,
            current_page: 120,
            rating: 9,
            image_url: None,
            description: None,
        })
    }

    #[test]
    fn test_reading_shows_page_only() {
        let text = lines_text(&detail_lines(&form(BookStatus::Reading)));
        assert!(text.iter().any(|l| l.starts_with("Current page: 120")));
        assert!(!text.iter().any(|l| l.starts_with("Rating:")));
    }

    #[test]
    fn test_finished_shows_rating_only() {
        let text = lines_text(&detail_lines(&form(BookStatus::Finished)));
        assert!(text.iter().any(|l| l.starts_with("Rating: 9 / 10")));
        assert!(!text.iter().any(|l| l.starts_with("Current page:")));
    }

    #[test]
    fn test_in_plan_hides_both() {
        let text = lines_text(&detail_lines(&form(BookStatus::InPlan)));
        assert!(!text.iter().any(|l| l.starts_with("Rating:") || l.starts_with("Current page:")));
    }
}
