//! Takes a screenshot of the focused workspace.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use chrono::{DateTime, Local};

use crate::{
    error::Error,
    i3::{self, Workspace},
    Geometry,
};

/// The directory below the home directory where screenshots are stored.
pub(crate) const DEFAULT_DIR: &str = "screenshots";

/// Something that can list the current workspaces.
pub(crate) trait WorkspaceSource {
    /// Returns the workspaces in the order the window manager reports them.
    fn workspaces(&self) -> Result<Vec<Workspace>, Error>;
}

/// Something that can save a region of the screen to a file.
pub(crate) trait Capture {
    /// Saves the given region of the root window to `path`.
    fn capture(&self, geometry: &Geometry, path: &Path) -> Result<(), Error>;
}

/// Returns `~/screenshots`.
pub(crate) fn default_dir() -> Result<PathBuf, Error> {
    Ok(dirs::home_dir().ok_or(Error::NoHomeDir)?.join(DEFAULT_DIR))
}

/// Builds the path of a screenshot taken at `time`.
pub(crate) fn output_path(dir: &Path, time: DateTime<Local>) -> PathBuf {
    dir.join(format!("{}.png", time.format("%Y%m%d-%H%M%S")))
}

/// Captures the focused workspace into `dir`, returning the path of the new file.
pub(crate) fn take(
    source: &impl WorkspaceSource,
    capture: &impl Capture,
    dir: &Path,
    time: DateTime<Local>,
) -> anyhow::Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .map_err(|source| Error::OutputDir {
            path: dir.to_owned(),
            source,
        })
        .context("preparing output directory")?;

    let workspaces = source.workspaces().context("querying workspaces")?;
    let workspace =
        i3::focused_workspace(&workspaces).context("selecting focused workspace")?;

    let geometry = workspace.rect.geometry();
    log::info!("workspace {:?} is focused at {geometry}", workspace.name);

    let path = output_path(dir, time);
    capture
        .capture(&geometry, &path)
        .context("capturing screenshot")?;

    log::info!("saved {}", path.display());

    Ok(path)
}
