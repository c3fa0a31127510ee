//! CLI response formatting and output.
//!
//! Provides the human-readable report, the JSON envelope, and exit code mapping.

use glscaffold::error::Hint;
use glscaffold::{Error, ErrorCode, GenerateOutput, Result};
use serde::Serialize;
use std::io::{self, Write};

#[derive(Debug, Serialize)]
pub struct CliResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<CliError>,
}

#[derive(Debug, Serialize)]
pub struct CliError {
    pub code: String,
    pub message: String,
    pub details: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hints: Option<Vec<Hint>>,
}

impl<T: Serialize> CliResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            Error::internal_json(e.to_string(), Some("serialize response".to_string()))
        })
    }
}

impl CliResponse<()> {
    pub fn from_error(err: &Error) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(CliError {
                code: err.code.as_str().to_string(),
                message: err.message.clone(),
                details: err.details.clone(),
                hints: if err.hints.is_empty() {
                    None
                } else {
                    Some(err.hints.clone())
                },
            }),
        }
    }
}

fn write_stdout(payload: &str) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(e) = writeln!(handle, "{}", payload) {
        if e.kind() == io::ErrorKind::BrokenPipe {
            return Ok(()); // Exit gracefully on SIGPIPE
        }
        return Err(Error::internal_io(
            e.to_string(),
            Some("write stdout".to_string()),
        ));
    }
    Ok(())
}

fn print_response<T: Serialize>(response: &CliResponse<T>) -> Result<()> {
    write_stdout(&response.to_json()?)
}

/// Print the JSON envelope for a command result.
pub fn print_json_result<T: Serialize>(result: &std::result::Result<T, Error>) -> Result<()> {
    match result {
        Ok(data) => print_response(&CliResponse::success(data)),
        Err(err) => print_response(&CliResponse::<()>::from_error(err)),
    }
}

/// Human-readable success report: confirmation line followed by next steps.
pub fn render_report(output: &GenerateOutput) -> String {
    let mut out = format!("✅ Created project at {}\nNext steps:", output.project_dir);
    for step in &output.next_steps {
        out.push_str("\n  ");
        out.push_str(step);
    }
    out
}

pub fn print_report(output: &GenerateOutput) -> Result<()> {
    write_stdout(&render_report(output))
}

/// Human-readable error: message plus any hints.
pub fn render_error(err: &Error) -> String {
    let mut out = format!("Error: {}", err.message);
    for hint in &err.hints {
        out.push_str("\n  hint: ");
        out.push_str(&hint.message);
    }
    out
}

pub fn print_error(err: &Error) {
    eprintln!("{}", render_error(err));
}

pub fn exit_code_for_error(code: ErrorCode) -> i32 {
    match code {
        ErrorCode::ConfigBaseDirNotFound
        | ErrorCode::ConfigInvalidJson
        | ErrorCode::ValidationMissingArgument
        | ErrorCode::ValidationInvalidArgument => 2,

        ErrorCode::ConflictDirectoryExists | ErrorCode::ConflictFileExists => 3,

        ErrorCode::InternalIoError
        | ErrorCode::InternalJsonError
        | ErrorCode::InternalUnexpected => 1,
    }
}
