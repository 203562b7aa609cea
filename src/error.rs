use thiserror::Error;

/// Application-wide result type alias.
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// I/O errors from storage operations (copy, remove, rename, mkdir).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A directory could not be opened or enumerated.
    #[error("Directory unavailable: {path}: {source}")]
    DirectoryUnavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Terminal initialization or rendering errors.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Invalid path provided by the user.
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// Unusable configuration value.
    #[error("Config error: {0}")]
    Config(String),
}

impl AppError {
    /// Wrap an I/O error raised while listing `path`.
    pub fn unavailable(path: &str, source: std::io::Error) -> Self {
        AppError::DirectoryUnavailable {
            path: path.to_string(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
        assert!(app_err.to_string().contains("file not found"));
    }

    #[test]
    fn directory_unavailable_display() {
        let err = AppError::unavailable(
            "/any/nfc",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory"),
        );
        assert_eq!(
            err.to_string(),
            "Directory unavailable: /any/nfc: no such directory"
        );
    }

    #[test]
    fn terminal_error_display() {
        let err = AppError::Terminal("failed to enter raw mode".into());
        assert_eq!(err.to_string(), "Terminal error: failed to enter raw mode");
    }

    #[test]
    fn invalid_path_error_display() {
        let err = AppError::InvalidPath("/nonexistent".into());
        assert_eq!(err.to_string(), "Invalid path: /nonexistent");
    }
}
