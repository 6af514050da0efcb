use aws_smithy_runtime_api::client::result::SdkError;
use aws_smithy_types::error::display::DisplayErrorContext;
use aws_smithy_types::error::operation::BuildError;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0} must be set in environment")]
    MissingConfig(&'static str),
    #[error("invalid value {value:?} for {name}")]
    InvalidConfig { name: &'static str, value: String },
    #[error("invalid invocation event: {0}")]
    InvalidEvent(String),
    #[error("no identity center instance found")]
    IdentityStoreNotFound,
    #[error("user {0} does not exist in the identity store")]
    UserNotFound(String),
    #[error("aws request failed: {0}")]
    Aws(String),
}

impl<E, R> From<SdkError<E, R>> for AppError
where
    E: std::error::Error + Send + Sync + 'static,
    R: std::fmt::Debug + Send + Sync + 'static,
{
    fn from(err: SdkError<E, R>) -> Self {
        let error_message = DisplayErrorContext(&err).to_string();
        let error_type = "aws_sdk".to_string();
        error!(error_message, error_type, "unexpected error");
        Self::Aws(error_message)
    }
}

impl From<BuildError> for AppError {
    fn from(err: BuildError) -> Self {
        let error_message = err.to_string();
        let error_type = "build_error".to_string();
        error!(error_message, error_type, "unexpected error");
        Self::Aws(error_message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidEvent(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
