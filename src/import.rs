//! Handles taking screenshots through ImageMagick's `import`.

use std::{path::Path, process::Command};

use crate::{error::Error, process, screenshot::Capture, Geometry};

/// The capture program.
pub(crate) const DEFAULT_PROGRAM: &str = "import";

/// The quality used unless another one is configured.
pub(crate) const DEFAULT_QUALITY: u8 = 100;

/// Captures a region of the root window with `import`.
#[derive(Debug, Clone)]
pub(crate) struct Import {
    /// The program to invoke.
    program: String,
    /// The `-quality` setting passed to the program.
    quality: u8,
}

impl Import {
    pub(crate) fn new(program: impl Into<String>, quality: u8) -> Self {
        Import {
            program: program.into(),
            quality,
        }
    }
}

impl Capture for Import {
    fn capture(&self, geometry: &Geometry, path: &Path) -> Result<(), Error> {
        process::run(
            Command::new(&self.program)
                .args(["-window", "root"])
                .args(["-crop", &geometry.to_string()])
                .args(["-quality", &self.quality.to_string()])
                .arg(path),
        )?;

        verify_capture(&self.program, geometry, path)?;

        Ok(())
    }
}

/// Checks that an image was written to `path` and returns its size.
///
/// A size other than the requested one is only logged, since `import` clips the
/// crop to the root window.
fn verify_capture(tool: &str, geometry: &Geometry, path: &Path) -> Result<(u32, u32), Error> {
    let (width, height) =
        image::image_dimensions(path).map_err(|source| Error::CaptureMissing {
            tool: tool.to_owned(),
            path: path.to_owned(),
            source,
        })?;

    if (width, height) != (geometry.width, geometry.height) {
        log::warn!(
            "requested {geometry} but {} is {width}x{height}",
            path.display()
        );
    }

    Ok((width, height))
}
