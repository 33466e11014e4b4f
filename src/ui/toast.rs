use std::time::Instant;

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::logic::flash::FlashPhase;
use crate::model::FlashMessage;

const TOAST_HEIGHT: u16 = 3;

/// Style of a flash in the given phase; every kind looks the same
fn toast_style(phase: FlashPhase) -> Style {
    let style = Style::default().fg(Color::White).bg(Color::Red);
    match phase {
        FlashPhase::Fading => style.add_modifier(Modifier::DIM),
        _ => style.add_modifier(Modifier::BOLD),
    }
}

/// Render flash messages stacked from the top right, oldest first
pub fn render_toasts(f: &mut Frame, area: Rect, flashes: &[FlashMessage], now: Instant) {
    let max_width = area.width.min(60);
    let mut y = area.y + 1;

    for flash in flashes {
        let phase = flash.phase_at(now);
        if phase == FlashPhase::Expired {
            continue;
        }
        if y + TOAST_HEIGHT > area.y + area.height {
            break;
        }

        let width = (flash.text.width() as u16 + 4).min(max_width);
        let toast_area = Rect {
            x: area.x + area.width.saturating_sub(width + 1),
            y,
            width,
            height: TOAST_HEIGHT,
        };

        let style = toast_style(phase);
        let toast = Paragraph::new(Line::from(Span::styled(flash.text.clone(), style)))
            .block(Block::default().borders(Borders::ALL).border_style(style))
            .style(style)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false });

        // Clear the area first to prevent background bleed-through
        f.render_widget(Clear, toast_area);
        f.render_widget(toast, toast_area);

        y += TOAST_HEIGHT;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FlashKind;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Duration;

    fn flash(text: &str, kind: FlashKind, shown_at: Instant) -> FlashMessage {
        FlashMessage {
            text: text.to_string(),
            kind,
            shown_at,
        }
    }

    #[test]
    fn test_fading_flash_is_dimmed() {
        assert!(toast_style(FlashPhase::Fading).add_modifier.contains(Modifier::DIM));
        assert!(!toast_style(FlashPhase::Visible).add_modifier.contains(Modifier::DIM));
    }

    #[test]
    fn test_expired_flashes_are_not_drawn() {
        let start = Instant::now();
        let flashes = vec![
            flash("Book deleted successfully!", FlashKind::Success, start),
            flash("Network error!", FlashKind::Error, start + Duration::from_millis(4000)),
        ];
        let now = start + Duration::from_millis(4000);

        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal
            .draw(|f| render_toasts(f, f.area(), &flashes, now))
            .unwrap();

        let screen: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(!screen.contains("Book deleted"));
        assert!(screen.contains("Network error!"));
    }
}
