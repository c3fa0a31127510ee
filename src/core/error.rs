use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ConfigBaseDirNotFound,
    ConfigInvalidJson,

    ValidationMissingArgument,
    ValidationInvalidArgument,

    ConflictDirectoryExists,
    ConflictFileExists,

    InternalIoError,
    InternalJsonError,
    InternalUnexpected,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ConfigBaseDirNotFound => "config.base_dir_not_found",
            ErrorCode::ConfigInvalidJson => "config.invalid_json",

            ErrorCode::ValidationMissingArgument => "validation.missing_argument",
            ErrorCode::ValidationInvalidArgument => "validation.invalid_argument",

            ErrorCode::ConflictDirectoryExists => "conflict.directory_exists",
            ErrorCode::ConflictFileExists => "conflict.file_exists",

            ErrorCode::InternalIoError => "internal.io_error",
            ErrorCode::InternalJsonError => "internal.json_error",
            ErrorCode::InternalUnexpected => "internal.unexpected",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hint {
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingArgumentDetails {
    pub args: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidArgumentDetails {
    pub field: String,
    pub problem: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathDetails {
    pub path: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigInvalidJsonDetails {
    pub path: String,
    pub error: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalIoErrorDetails {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    pub details: Value,
    pub hints: Vec<Hint>,
}

pub type Result<T> = std::result::Result<T, Error>;

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

fn to_details<T: Serialize>(details: T) -> Value {
    serde_json::to_value(details).unwrap_or_else(|_| Value::Object(serde_json::Map::new()))
}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>, details: Value) -> Self {
        Self {
            code,
            message: message.into(),
            details,
            hints: Vec::new(),
        }
    }

    pub fn validation_missing_argument(args: Vec<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ValidationMissingArgument,
            message,
            to_details(MissingArgumentDetails { args }),
        )
    }

    pub fn validation_invalid_argument(
        field: impl Into<String>,
        problem: impl Into<String>,
        id: Option<String>,
    ) -> Self {
        let problem = problem.into();
        Self::new(
            ErrorCode::ValidationInvalidArgument,
            problem.clone(),
            to_details(InvalidArgumentDetails {
                field: field.into(),
                problem,
                id,
            }),
        )
    }

    pub fn config_base_dir_not_found(path: impl Into<String>) -> Self {
        let path = path.into();
        Self::new(
            ErrorCode::ConfigBaseDirNotFound,
            format!("Base directory does not exist: {}", path),
            to_details(PathDetails { path }),
        )
    }

    pub fn config_invalid_json(path: impl Into<String>, err: serde_json::Error) -> Self {
        let path = path.into();
        Self::new(
            ErrorCode::ConfigInvalidJson,
            format!("Invalid JSON in configuration file {}", path),
            to_details(ConfigInvalidJsonDetails {
                path,
                error: err.to_string(),
            }),
        )
        .with_hint("Fix or remove the file, or point GLSCAFFOLD_CONFIG at another one")
    }

    pub fn conflict_directory_exists(path: impl Into<String>) -> Self {
        let path = path.into();
        Self::new(
            ErrorCode::ConflictDirectoryExists,
            format!("Project directory already exists: {}", path),
            to_details(PathDetails { path }),
        )
        .with_hint("Re-run with --force to reuse the existing directory")
    }

    pub fn conflict_file_exists(path: impl Into<String>) -> Self {
        let path = path.into();
        Self::new(
            ErrorCode::ConflictFileExists,
            format!("{} already exists", path),
            to_details(PathDetails { path }),
        )
        .with_hint("Re-run with --force to overwrite existing files")
    }

    pub fn internal_io(error: impl Into<String>, context: Option<String>) -> Self {
        let error = error.into();
        let message = match &context {
            Some(context) => format!("Failed to {}: {}", context, error),
            None => format!("IO error: {}", error),
        };
        Self::new(
            ErrorCode::InternalIoError,
            message,
            to_details(InternalIoErrorDetails { error, context }),
        )
    }

    pub fn internal_json(error: impl Into<String>, context: Option<String>) -> Self {
        Self::new(
            ErrorCode::InternalJsonError,
            "JSON error",
            serde_json::json!({ "error": error.into(), "context": context }),
        )
    }

    pub fn internal_unexpected(error: impl Into<String>) -> Self {
        let error = error.into();
        Self::new(
            ErrorCode::InternalUnexpected,
            format!("Unexpected error: {}", error),
            serde_json::json!({ "error": error }),
        )
    }

    pub fn with_hint(mut self, message: impl Into<String>) -> Self {
        self.hints.push(Hint {
            message: message.into(),
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unexpected_error_message_names_the_cause() {
        let err = Error::internal_unexpected("stdin closed");

        assert_eq!(err.message, "Unexpected error: stdin closed");
        assert_eq!(err.details["error"], "stdin closed");
    }

    #[test]
    fn conflict_file_exists_carries_path_and_hint() {
        let err = Error::conflict_file_exists("/tmp/demo/CMakeLists.txt");

        assert_eq!(err.code.as_str(), "conflict.file_exists");
        assert_eq!(err.details["path"], "/tmp/demo/CMakeLists.txt");
        assert_eq!(err.hints.len(), 1);
        assert!(err.hints[0].message.contains("--force"));
    }

    #[test]
    fn internal_io_message_includes_context() {
        let err = Error::internal_io("permission denied", Some("write build.sh".to_string()));

        assert_eq!(err.message, "Failed to write build.sh: permission denied");
        assert_eq!(err.details["context"], "write build.sh");
    }

    #[test]
    fn invalid_argument_uses_problem_as_message() {
        let err = Error::validation_invalid_argument("name", "Name is bad", None);

        assert_eq!(err.to_string(), "Name is bad");
        assert!(err.details.get("id").is_none());
    }
}
