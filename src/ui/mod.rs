// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Calculates screen layout (header, content, add form, legend)
// - render: Main orchestration function that coordinates all rendering
// - session_bar: Renders top bar (signed-in user, book count, server)
// - book_list: Renders the book cards
// - forms: Renders the add-book form and the login/register screens
// - legend: Renders hotkey legend
// - dialogs: Renders the detail modal, delete confirmation and alerts
// - toast: Renders flash messages (brief pop-up messages)

pub mod book_list;
pub mod dialogs;
pub mod forms;
pub mod layout;
pub mod legend;
pub mod render;
pub mod session_bar;
pub mod toast;

// Re-export main render function for convenience
pub use render::render;
