use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};

use bytes::Bytes;
use tokio::process::Command;

use crate::config::InterpreterConfig;
use crate::handler::{resolve, ResolveError};
use crate::http::request::{QueryArgs, RequestLine};
use crate::http::response::Response;

/// Environment variable carrying the query string to a script.
pub const QUERY_STRING: &str = "QUERY_STRING";

/// Dynamic responses are always labelled as HTML.
const CONTENT_TYPE: &str = "text/html";

#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    #[error("no interpreter for {0}")]
    NoInterpreter(String),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("resolving script path {path}: {source}")]
    Path {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("running {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("{program} exited with {status} and produced no output")]
    Failed { program: String, status: ExitStatus },
}

/// Picks the interpreter whose extension occurs in `script`, first match wins.
pub fn interpreter_for<'a>(script: &str, interpreters: &'a [InterpreterConfig]) -> Option<&'a str> {
    interpreters
        .iter()
        .find(|i| script.contains(i.extension.as_str()))
        .map(|i| i.program.as_str())
}

/// Runs the script named by the request target and answers with its stdout.
pub async fn serve(root: &Path, interpreters: &[InterpreterConfig], req: &RequestLine) -> Response {
    match execute(root, interpreters, req.query_args()).await {
        Ok(out) => Response::ok(CONTENT_TYPE, out),
        Err(e) => {
            tracing::error!(uri = %req.target, error = %e, "Dynamic request failed");
            Response::not_found()
        }
    }
}

/// Runs the interpreter for `args.script` to completion and returns its stdout.
///
/// The query string, when present, is handed to this child only; without
/// one `QUERY_STRING` is removed from the child's environment. stderr is
/// discarded and the exit status only matters when stdout is empty.
pub async fn execute(
    root: &Path,
    interpreters: &[InterpreterConfig],
    args: QueryArgs<'_>,
) -> Result<Bytes, ExecError> {
    let program = interpreter_for(args.script, interpreters)
        .ok_or_else(|| ExecError::NoInterpreter(args.script.to_string()))?;

    let relative = resolve(root, args.script)?;
    let script = std::path::absolute(&relative).map_err(|source| ExecError::Path {
        path: relative.clone(),
        source,
    })?;

    let mut command = Command::new(program);
    command
        .arg(&script)
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .kill_on_drop(true);

    match args.query {
        Some(query) => command.env(QUERY_STRING, query),
        None => command.env_remove(QUERY_STRING),
    };

    tracing::debug!(program, script = %script.display(), query = ?args.query, "Executing script");

    let output = command.output().await.map_err(|source| ExecError::Spawn {
        program: program.to_string(),
        source,
    })?;

    if !output.status.success() {
        if output.stdout.is_empty() {
            return Err(ExecError::Failed {
                program: program.to_string(),
                status: output.status,
            });
        }
        tracing::warn!(program, status = %output.status, "Script exited unsuccessfully, serving its output");
    }

    Ok(Bytes::from(output.stdout))
}
