//! Runs external programs and checks how they exited.

use std::process::{Command, Output, Stdio};

use crate::error::Error;

/// Runs the command to completion, capturing its output.
///
/// Fails with [`Error::ToolLaunch`] if the program cannot be started and with
/// [`Error::ToolFailed`] if it exits unsuccessfully.
pub(crate) fn run(command: &mut Command) -> Result<Output, Error> {
    let tool = command.get_program().to_string_lossy().into_owned();
    log::debug!("running {command:?}");

    let output = command
        .stdin(Stdio::null())
        .output()
        .map_err(|source| Error::ToolLaunch {
            tool: tool.clone(),
            source,
        })?;

    if !output.status.success() {
        return Err(Error::ToolFailed {
            tool,
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
        });
    }

    Ok(output)
}
