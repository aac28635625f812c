use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PiiError {
    #[error("Could not load {path}: {reason}")]
    ImageLoadFailure { path: String, reason: String },

    #[error("Invalid text input: {0}")]
    InvalidTextInput(String),

    #[error("Preprocessing failed: {0}")]
    PreprocessingError(String),

    #[error("Text recognition failed: {0}")]
    RecognitionError(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl PiiError {
    /// Stable machine-readable code for this error kind
    pub fn code(&self) -> &'static str {
        match self {
            PiiError::ImageLoadFailure { .. } => "IMAGE_LOAD_FAILURE",
            PiiError::InvalidTextInput(_) => "INVALID_TEXT_INPUT",
            PiiError::PreprocessingError(_) => "PREPROCESSING_ERROR",
            PiiError::RecognitionError(_) => "RECOGNITION_ERROR",
            PiiError::InvalidConfig(_) => "INVALID_CONFIG",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl From<&PiiError> for ErrorResponse {
    fn from(err: &PiiError) -> Self {
        Self {
            error: err.to_string(),
            code: err.code().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_load_failure_message_names_path() {
        let err = PiiError::ImageLoadFailure {
            path: "page_35.jpg".to_string(),
            reason: "No such file or directory".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Could not load page_35.jpg: No such file or directory"
        );
        assert_eq!(err.code(), "IMAGE_LOAD_FAILURE");
    }

    #[test]
    fn test_error_response_carries_code() {
        let err = PiiError::InvalidTextInput("invalid utf-8 sequence".to_string());
        let response = ErrorResponse::from(&err);
        assert_eq!(response.code, "INVALID_TEXT_INPUT");
        assert!(response.error.contains("invalid utf-8"));

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["code"], "INVALID_TEXT_INPUT");
    }
}
