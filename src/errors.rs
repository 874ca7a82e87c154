use crate::backend::BackendError;
use axum::http::StatusCode;
use tracing::error;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    /// A backend call failed. The user-facing message only names the
    /// operation; the cause goes to the log.
    pub fn upstream(what: &str, err: BackendError) -> Self {
        error!("failed to load {what}: {err}");
        Self {
            status: StatusCode::BAD_GATEWAY,
            message: format!("Failed to load {what}."),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_error_names_the_operation() {
        let err = AppError::upstream("project hours", BackendError::Status(500));
        assert_eq!(err.status, StatusCode::BAD_GATEWAY);
        assert_eq!(err.message, "Failed to load project hours.");
    }
}
