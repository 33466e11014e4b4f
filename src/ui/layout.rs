use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout information for rendering
pub struct LayoutInfo {
    /// Top session bar area
    pub header_area: Rect,
    /// Book list, or the login/register form
    pub content_area: Rect,
    /// Add-book form (library screen only)
    pub add_form_area: Option<Rect>,
    /// Hotkey legend area (full width)
    pub legend_area: Rect,
}

/// Calculate the screen layout for all UI components
pub fn calculate_layout(terminal_size: Rect, show_add_form: bool, legend_height: u16) -> LayoutInfo {
    let add_form_height = if show_add_form { 3 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),               // Session bar
            Constraint::Min(3),                  // Content
            Constraint::Length(add_form_height), // Add-book form
            Constraint::Length(legend_height),   // Legend
        ])
        .split(terminal_size);

    LayoutInfo {
        header_area: chunks[0],
        content_area: chunks[1],
        add_form_area: show_add_form.then_some(chunks[2]),
        legend_area: chunks[3],
    }
}

/// Rectangle of at most `width` x `height` centered in `area`
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}
