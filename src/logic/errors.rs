use crate::api::ApiError;
use crate::model::Notice;

/// Operations that can fail against the server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    LoadBooks,
    OpenDetails,
    SaveDetails,
    UpdateStatus,
    AddBook,
    DeleteBook,
    Register,
    Login,
    CheckSession,
    Logout,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::LoadBooks => "load books",
            Operation::OpenDetails => "open book details",
            Operation::SaveDetails => "save book details",
            Operation::UpdateStatus => "update status",
            Operation::AddBook => "add book",
            Operation::DeleteBook => "delete book",
            Operation::Register => "register",
            Operation::Login => "log in",
            Operation::CheckSession => "check session",
            Operation::Logout => "log out",
        }
    }
}

/// Format error message - walk the chain to the root cause
pub fn format_error_message(error: &ApiError) -> String {
    let mut deepest = error.to_string();
    let mut source = std::error::Error::source(error);

    while let Some(err) = source {
        deepest = err.to_string();
        source = err.source();
    }

    deepest
}

/// How a failed operation is presented
///
/// Callers handle the auth redirects (status update → login, add book →
/// register) before asking for a notice; everything else lands here.
pub fn failure_notice(operation: Operation, error: &ApiError) -> Notice {
    match (operation, error) {
        // Not signed in yet: the list just stays empty
        (Operation::LoadBooks, ApiError::Unauthorized) => Notice::Silent,

        (Operation::DeleteBook, ApiError::Network(_)) => Notice::flash_error("Network error!"),
        (Operation::DeleteBook, _) => Notice::flash_error("Error: Could not delete book."),

        (Operation::AddBook, ApiError::Status { message, .. }) => {
            Notice::Alert(format!("Error: {}", message))
        }

        (Operation::Register, _) => Notice::Alert(format!(
            "Registration failed: {}",
            format_error_message(error)
        )),

        (Operation::Login, ApiError::Network(_)) => Notice::Alert(format!(
            "Could not reach the server: {}",
            format_error_message(error)
        )),
        (Operation::Login, _) => Notice::Alert("Invalid username or password".to_string()),

        (operation, error) => Notice::Log(format!(
            "Failed to {}: {}",
            operation.as_str(),
            format_error_message(error)
        )),
    }
}
