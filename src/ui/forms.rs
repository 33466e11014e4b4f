//! Form UI
//!
//! Renders the add-book form and the login/register screens. Every input is
//! a single line with a block cursor on the focused field.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::layout::centered_rect;
use crate::logic::formatting::mask;
use crate::model::{AddBookForm, LoginField, LoginForm, RegisterField, RegisterForm};

/// Label, value and the cursor when focused
pub(crate) fn input_spans(label: &str, value: &str, focused: bool, secret: bool) -> Vec<Span<'static>> {
    let shown = if secret { mask(value) } else { value.to_string() };
    let label_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let mut spans = vec![
        Span::styled(format!("{}: ", label), label_style),
        Span::styled(shown, Style::default().fg(Color::White)),
    ];
    if focused {
        spans.push(Span::styled(
            "█",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::SLOW_BLINK),
        ));
    }
    spans
}

/// Render the add-book form below the list
pub fn render_add_form(f: &mut Frame, area: Rect, form: &AddBookForm, active: bool) {
    let border_color = if active { Color::Cyan } else { Color::Gray };
    let title = if active {
        " Add Book - Enter to add, Esc to cancel "
    } else {
        " Add Book (a) "
    };

    let mut spans = input_spans("Title", form.title.as_str(), active && !form.author_focused, false);
    spans.push(Span::raw("   "));
    spans.extend(input_spans(
        "Author",
        form.author.as_str(),
        active && form.author_focused,
        false,
    ));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(Style::default().fg(border_color));

    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Render the login screen
pub fn render_login_form(f: &mut Frame, area: Rect, form: &LoginForm) {
    let lines = vec![
        Line::from(""),
        Line::from(input_spans(
            "Username",
            form.username.as_str(),
            form.focus == LoginField::Username,
            false,
        )),
        Line::from(input_spans(
            "Password",
            form.password.as_str(),
            form.focus == LoginField::Password,
            true,
        )),
        Line::from(""),
        Line::from(Span::styled(
            "No account yet? Press Ctrl-R to register.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    render_form_box(f, area, " Log In ", lines);
}

fn register_label(field: RegisterField) -> &'static str {
    match field {
        RegisterField::Username => "Username",
        RegisterField::Email => "Email",
        RegisterField::Password => "Password",
        RegisterField::Confirm => "Confirm",
    }
}

/// Render the registration screen
pub fn render_register_form(f: &mut Frame, area: Rect, form: &RegisterForm) {
    let mut lines = vec![Line::from("")];
    for field in RegisterField::ALL {
        lines.push(Line::from(input_spans(
            register_label(field),
            form.input(field).as_str(),
            form.focus == field,
            field.is_secret(),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Only @gmail.com addresses are accepted. Ctrl-L to log in.",
        Style::default().fg(Color::DarkGray),
    )));

    render_form_box(f, area, " Register ", lines);
}

fn render_form_box(f: &mut Frame, area: Rect, title: &'static str, lines: Vec<Line<'static>>) {
    let height = lines.len() as u16 + 2;
    let form_area = centered_rect(area, 64, height);

    let form = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(Clear, form_area);
    f.render_widget(form, form_area);
}
