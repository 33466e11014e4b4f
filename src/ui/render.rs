use std::time::Instant;

use ratatui::Frame;

use super::{
    book_list, dialogs, forms, layout,
    legend::{self, LegendContext},
    session_bar, toast,
};
use crate::model::{LibraryFocus, Model, Screen};

/// Main render function - orchestrates all UI rendering
pub fn render(f: &mut Frame, model: &Model, server: &str) {
    render_at(f, model, server, Instant::now());
}

/// Render with an explicit clock so flash phases are reproducible
pub fn render_at(f: &mut Frame, model: &Model, server: &str, now: Instant) {
    let size = f.area();

    let context = LegendContext::from_model(model);
    let legend_height = legend::calculate_legend_height(size.width, context, model.ui.vim_mode);
    let show_add_form = model.ui.screen == Screen::Library;
    let layout_info = layout::calculate_layout(size, show_add_form, legend_height);

    session_bar::render_session_bar(f, layout_info.header_area, model, server);

    match model.ui.screen {
        Screen::Login => forms::render_login_form(f, layout_info.content_area, &model.ui.login_form),
        Screen::Register => {
            forms::render_register_form(f, layout_info.content_area, &model.ui.register_form)
        }
        Screen::Library => {
            let list_focused = model.ui.library_focus == LibraryFocus::List && !model.has_modal();
            book_list::render_book_list(f, layout_info.content_area, &model.library, list_focused);

            if let Some(area) = layout_info.add_form_area {
                let active = model.ui.library_focus == LibraryFocus::AddForm && !model.has_modal();
                forms::render_add_form(f, area, &model.ui.add_form, active);
            }
        }
    }

    legend::render_legend(f, layout_info.legend_area, context, model.ui.vim_mode);

    // Dialogs stack in keyboard priority order, the topmost drawn last
    if let Some(detail) = &model.ui.detail {
        dialogs::render_detail_modal(f, detail);
    }

    if let Some(pending) = &model.ui.confirm_delete {
        let title = model.library.get(pending.book_id).map(|b| b.title.as_str());
        dialogs::render_delete_confirmation(f, title);
    }

    if let Some(message) = &model.ui.alert {
        dialogs::render_alert(f, message);
    }

    toast::render_toasts(f, size, &model.ui.flashes, now);
}
