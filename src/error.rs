//! The failure categories of a screenshot run.

use std::{path::PathBuf, process::ExitStatus};

/// A typed failure, grouped into categories that map to distinct exit statuses.
#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
    /// The external program could not be started at all.
    #[error("could not launch `{tool}`: {source}")]
    ToolLaunch {
        /// The program that was launched.
        tool: String,
        /// The underlying launch error.
        #[source]
        source: std::io::Error,
    },
    /// The external program ran but reported failure.
    #[error("`{tool}` exited with {status}{}", fmt_stderr(.stderr))]
    ToolFailed {
        /// The program that failed.
        tool: String,
        /// Its exit status.
        status: ExitStatus,
        /// What it wrote to stderr, trimmed.
        stderr: String,
    },
    /// The capture program reported success but no readable image was written.
    #[error("`{tool}` did not write an image to {}: {source}", .path.display())]
    CaptureMissing {
        /// The capture program.
        tool: String,
        /// Where the image was expected.
        path: PathBuf,
        /// Why the file could not be read back.
        #[source]
        source: image::ImageError,
    },
    /// The workspace list was not the expected JSON.
    #[error("malformed workspace list: {0}")]
    MalformedResponse(#[from] serde_json::Error),
    /// No workspace in the list claimed focus.
    #[error("no focused workspace among {count} workspaces")]
    NoFocusedWorkspace {
        /// How many workspaces were reported.
        count: usize,
    },
    /// The home directory could not be determined.
    #[error("could not determine the home directory")]
    NoHomeDir,
    /// The output directory could not be created.
    #[error("could not create {}: {source}", .path.display())]
    OutputDir {
        /// The directory that was being created.
        path: PathBuf,
        /// The underlying io error.
        #[source]
        source: std::io::Error,
    },
}

fn fmt_stderr(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {stderr}")
    }
}

impl Error {
    /// The process exit status reported for this failure.
    pub(crate) fn exit_code(&self) -> u8 {
        match self {
            Self::ToolLaunch { .. } | Self::ToolFailed { .. } | Self::CaptureMissing { .. } => 2,
            Self::MalformedResponse(_) => 3,
            Self::NoFocusedWorkspace { .. } => 4,
            Self::NoHomeDir | Self::OutputDir { .. } => 5,
        }
    }
}

/// Looks for a typed [`Error`] anywhere in the chain and returns its exit status.
pub(crate) fn exit_code_of(err: &anyhow::Error) -> u8 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<Error>())
        .map_or(1, Error::exit_code)
}
