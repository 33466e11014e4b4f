use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::{LibraryFocus, Model, Screen};

/// What currently receives keys, which decides the hotkeys shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendContext {
    Login,
    Register,
    List,
    AddForm,
    Detail,
    Confirm,
    Alert,
}

impl LegendContext {
    /// Same priority order as the keyboard handler
    pub fn from_model(model: &Model) -> Self {
        if model.ui.alert.is_some() {
            LegendContext::Alert
        } else if model.ui.confirm_delete.is_some() {
            LegendContext::Confirm
        } else if model.ui.detail.is_some() {
            LegendContext::Detail
        } else {
            match (model.ui.screen, model.ui.library_focus) {
                (Screen::Login, _) => LegendContext::Login,
                (Screen::Register, _) => LegendContext::Register,
                (Screen::Library, LibraryFocus::List) => LegendContext::List,
                (Screen::Library, LibraryFocus::AddForm) => LegendContext::AddForm,
            }
        }
    }
}

fn key(k: &'static str, action: &'static str) -> [Span<'static>; 2] {
    [
        Span::styled(k, Style::default().fg(Color::Yellow)),
        Span::raw(action),
    ]
}

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(context: LegendContext, vim_mode: bool) -> Vec<Span<'static>> {
    let mut hotkey_spans = vec![];

    match context {
        LegendContext::Login => {
            hotkey_spans.extend(key("Tab", ":Next field  "));
            hotkey_spans.extend(key("Enter", ":Log in  "));
            hotkey_spans.extend(key("^R", ":Register  "));
            hotkey_spans.extend(key("Esc", ":Quit"));
        }
        LegendContext::Register => {
            hotkey_spans.extend(key("Tab", ":Next field  "));
            hotkey_spans.extend(key("Enter", ":Register  "));
            hotkey_spans.extend(key("^L", ":Log in  "));
            hotkey_spans.extend(key("Esc", ":Quit"));
        }
        LegendContext::List => {
            if vim_mode {
                hotkey_spans.extend(key("j/k", ":Nav  "));
                hotkey_spans.extend(key("g/G", ":First/Last  "));
            } else {
                hotkey_spans.extend(key("↑/↓", ":Nav  "));
            }
            hotkey_spans.extend(key("Enter", ":Details  "));
            hotkey_spans.extend(key("a", ":Add  "));
            hotkey_spans.extend(key("s", ":Next status  "));
            hotkey_spans.extend(key("d", ":Delete  "));
            hotkey_spans.extend(key("r", ":Reload  "));
            hotkey_spans.extend(key("L", ":Log out  "));
            hotkey_spans.extend(key("q", ":Quit"));
        }
        LegendContext::AddForm => {
            hotkey_spans.extend(key("Tab", ":Title/Author  "));
            hotkey_spans.extend(key("Enter", ":Add book  "));
            hotkey_spans.extend(key("Esc", ":Back to list"));
        }
        LegendContext::Detail => {
            hotkey_spans.extend(key("Tab", ":Next field  "));
            hotkey_spans.extend(key("←/→", ":Status  "));
            hotkey_spans.extend(key("^S", ":Save  "));
            hotkey_spans.extend(key("^D", ":Delete  "));
            hotkey_spans.extend(key("Esc", ":Close"));
        }
        LegendContext::Confirm => {
            hotkey_spans.extend(key("y", ":Delete  "));
            hotkey_spans.extend(key("n", ":Cancel"));
        }
        LegendContext::Alert => {
            hotkey_spans.extend(key("Enter", ":Dismiss"));
        }
    }

    hotkey_spans
}

/// Build the legend paragraph (reusable for both rendering and height calculation)
pub fn build_legend_paragraph(context: LegendContext, vim_mode: bool) -> Paragraph<'static> {
    let hotkey_line = Line::from(build_hotkey_spans(context, vim_mode));

    Paragraph::new(vec![hotkey_line])
        .block(Block::default().borders(Borders::ALL).title("Hotkeys"))
        .style(Style::default().fg(Color::Gray))
        .wrap(ratatui::widgets::Wrap { trim: false })
}

pub fn render_legend(f: &mut Frame, area: Rect, context: LegendContext, vim_mode: bool) {
    f.render_widget(build_legend_paragraph(context, vim_mode), area);
}

/// Calculate required height for legend based on terminal width and content
pub fn calculate_legend_height(terminal_width: u16, context: LegendContext, vim_mode: bool) -> u16 {
    // line_count() doesn't account for borders correctly when block is attached
    let paragraph_for_counting = Paragraph::new(vec![Line::from(build_hotkey_spans(context, vim_mode))])
        .wrap(ratatui::widgets::Wrap { trim: false });

    let available_width = terminal_width.saturating_sub(2);
    let line_count = paragraph_for_counting.line_count(available_width);

    (line_count as u16).saturating_add(2).max(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper function to convert spans to plain text for assertions
    fn spans_to_text(spans: &[Span]) -> String {
        spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect::<Vec<_>>()
            .join("")
    }

    #[test]
    fn test_list_legend_switches_with_vim_mode() {
        let text = spans_to_text(&build_hotkey_spans(LegendContext::List, true));
        assert!(text.contains("j/k"));

        let text = spans_to_text(&build_hotkey_spans(LegendContext::List, false));
        assert!(text.contains("↑/↓"));
        assert!(!text.contains("j/k"));
    }

    #[test]
    fn test_context_follows_dialog_priority() {
        let mut model = Model::new(false);
        model.ui.switch_screen(Screen::Library);
        assert_eq!(LegendContext::from_model(&model), LegendContext::List);

        model.ui.open_confirm(1);
        assert_eq!(LegendContext::from_model(&model), LegendContext::Confirm);

        model.ui.show_alert("x".to_string());
        assert_eq!(LegendContext::from_model(&model), LegendContext::Alert);
    }

    #[test]
    fn test_legend_height_grows_on_narrow_terminal() {
        let wide = calculate_legend_height(200, LegendContext::List, false);
        let narrow = calculate_legend_height(30, LegendContext::List, false);
        assert_eq!(wide, 3);
        assert!(narrow > wide);
    }
}
