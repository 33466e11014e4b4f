use tokio::sync::mpsc;

use crate::api::{
    ApiError, AuthStatus, Book, BookClient, BookId, BookPatch, BookStatus, CreatedBook,
    Credentials, NewBook, RegisterResponse, Registration,
};

/// API request types
///
/// Requests are independent: each runs on its own task, responses arrive in
/// completion order and nothing is de-duplicated or retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRequest {
    /// Fetch the book collection
    LoadBooks,

    /// Fetch one book for the detail modal
    GetBook { id: BookId },

    /// Create a book from the add form
    CreateBook(NewBook),

    /// Full update from the detail modal
    SaveDetails { id: BookId, patch: BookPatch },

    /// Status-only update
    UpdateStatus { id: BookId, status: BookStatus },

    DeleteBook { id: BookId },

    Register(Registration),

    Login(Credentials),

    /// Ask the server whether the session cookie is still valid
    CheckSession,

    Logout,
}

/// API response types
#[derive(Debug)]
pub enum ApiResponse {
    BooksLoaded(Result<Vec<Book>, ApiError>),

    BookLoaded {
        id: BookId,
        book: Result<Book, ApiError>,
    },

    BookCreated(Result<CreatedBook, ApiError>),

    DetailsSaved {
        id: BookId,
        result: Result<(), ApiError>,
    },

    StatusUpdated {
        id: BookId,
        status: BookStatus,
        result: Result<(), ApiError>,
    },

    BookDeleted {
        id: BookId,
        result: Result<(), ApiError>,
    },

    Registered(Result<RegisterResponse, ApiError>),

    LoggedIn(Result<AuthStatus, ApiError>),

    SessionChecked(Result<AuthStatus, ApiError>),

    LoggedOut(Result<(), ApiError>),
}

/// API service worker that runs requests in the background
pub struct ApiService {
    client: BookClient,
    response_tx: mpsc::UnboundedSender<ApiResponse>,
}

impl ApiService {
    pub fn new(client: BookClient, response_tx: mpsc::UnboundedSender<ApiResponse>) -> Self {
        Self {
            client,
            response_tx,
        }
    }

    /// Spawn a task for the request; its response is sent when it completes
    fn dispatch(&self, request: ApiRequest) {
        let client = self.client.clone();
        let response_tx = self.response_tx.clone();

        tokio::spawn(async move {
            tracing::debug!(?request, "sending request");
            let response = Self::execute_request(&client, request).await;
            tracing::debug!(?response, "request finished");

            // Receiver only goes away on shutdown
            let _ = response_tx.send(response);
        });
    }

    /// Execute an API request and return the response
    pub async fn execute_request(client: &BookClient, request: ApiRequest) -> ApiResponse {
        match request {
            ApiRequest::LoadBooks => ApiResponse::BooksLoaded(client.list_books().await),

            ApiRequest::GetBook { id } => ApiResponse::BookLoaded {
                id,
                book: client.get_book(id).await,
            },

            ApiRequest::CreateBook(book) => {
                ApiResponse::BookCreated(client.create_book(&book).await)
            }

            ApiRequest::SaveDetails { id, patch } => ApiResponse::DetailsSaved {
                id,
                result: client.update_book(id, &patch).await,
            },

            ApiRequest::UpdateStatus { id, status } => ApiResponse::StatusUpdated {
                id,
                status,
                result: client.update_book(id, &BookPatch::status_only(status)).await,
            },

            ApiRequest::DeleteBook { id } => ApiResponse::BookDeleted {
                id,
                result: client.delete_book(id).await,
            },

            ApiRequest::Register(registration) => {
                ApiResponse::Registered(client.register(&registration).await)
            }

            ApiRequest::Login(credentials) => {
                ApiResponse::LoggedIn(client.login(&credentials).await)
            }

            ApiRequest::CheckSession => ApiResponse::SessionChecked(client.auth_status().await),

            ApiRequest::Logout => ApiResponse::LoggedOut(client.logout().await),
        }
    }
}

/// Spawn the API service worker
pub fn spawn_api_service(
    client: BookClient,
) -> (
    mpsc::UnboundedSender<ApiRequest>,
    mpsc::UnboundedReceiver<ApiResponse>,
) {
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<ApiRequest>();
    let (response_tx, response_rx) = mpsc::unbounded_channel::<ApiResponse>();

    tokio::spawn(async move {
        let service = ApiService::new(client, response_tx);

        while let Some(request) = request_rx.recv().await {
            service.dispatch(request);
        }

        tracing::debug!("request channel closed, API service stopping");
    });

    (request_tx, response_rx)
}
