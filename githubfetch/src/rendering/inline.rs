// ABOUTME: Inline avatar display through the Kitty image helper (`kitten icat`)
// ABOUTME: Stages bytes in a scoped temp file that is removed on every exit path

use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;
use tempfile::{Builder, NamedTempFile};
use tokio::process::Command;

use super::{ImageAcquirer, RenderError, RenderableVisual};
use crate::constants::inline::{ALIGN, DEFAULT_HELPER, HELPER_SUBCOMMAND, PLACE, TEMP_PREFIX};

/// Avatar bytes written to disk for the helper to read.
///
/// The file is deleted when this value is dropped, including during unwinding.
#[derive(Debug)]
pub struct StagedImage {
    file: NamedTempFile,
}

impl StagedImage {
    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

pub struct InlineImageRenderer {
    acquirer: ImageAcquirer,
    helper: String,
    temp_dir: Option<PathBuf>,
}

impl InlineImageRenderer {
    pub fn new(acquirer: ImageAcquirer) -> Self {
        Self {
            acquirer,
            helper: DEFAULT_HELPER.to_string(),
            temp_dir: None,
        }
    }

    /// Use a different helper executable; it receives the same arguments as `kitten`
    pub fn with_helper(mut self, helper: impl Into<String>) -> Self {
        self.helper = helper.into();
        self
    }

    /// Stage avatars in `dir` instead of the system temp directory
    pub fn with_temp_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.temp_dir = Some(dir.into());
        self
    }

    pub fn helper(&self) -> &str {
        &self.helper
    }

    /// Download the avatar and have the helper draw it into the terminal.
    ///
    /// The image never passes through our output buffer, so success is
    /// reported as a placeholder that only reserves layout space.
    pub async fn render(&self, url: &str) -> Result<RenderableVisual, RenderError> {
        let staged = {
            let bytes = self.acquirer.acquire(url).await?;
            self.stage(&bytes)?
        };

        self.show(&staged).await?;
        Ok(RenderableVisual::InlinePlaceholder)
    }

    /// Write `bytes` into a uniquely named temp file
    pub fn stage(&self, bytes: &[u8]) -> Result<StagedImage, RenderError> {
        let mut builder = Builder::new();
        builder.prefix(TEMP_PREFIX);
        let mut file = match &self.temp_dir {
            Some(dir) => builder.tempfile_in(dir)?,
            None => builder.tempfile()?,
        };

        file.write_all(bytes)?;
        file.flush()?;
        log::debug!("Staged {} bytes at {}", bytes.len(), file.path().display());

        Ok(StagedImage { file })
    }

    /// Run the helper on a staged image and wait for it to exit.
    ///
    /// Ctrl-C while the helper runs kills it and reports `Interrupted`, as
    /// does a helper that died from SIGINT itself. The child is also killed
    /// if this future is dropped.
    pub async fn show(&self, staged: &StagedImage) -> Result<(), RenderError> {
        let mut child = Command::new(&self.helper)
            .args(helper_args(staged.path()))
            .kill_on_drop(true)
            .spawn()?;

        tokio::select! {
            biased;
            _ = tokio::signal::ctrl_c() => {
                child.kill().await?;
                Err(RenderError::Interrupted)
            }
            status = child.wait() => {
                let status = status?;
                if status.success() {
                    Ok(())
                } else if killed_by_interrupt(&status) {
                    Err(RenderError::Interrupted)
                } else {
                    Err(RenderError::HelperExit(status.code()))
                }
            }
        }
    }
}

#[cfg(unix)]
fn killed_by_interrupt(status: &ExitStatus) -> bool {
    use crate::constants::inline::SIGINT;
    use std::os::unix::process::ExitStatusExt;
    status.signal() == Some(SIGINT)
}

#[cfg(not(unix))]
fn killed_by_interrupt(_status: &ExitStatus) -> bool {
    false
}

/// `icat --align left --place 24x12@2x1 <path>`
pub fn helper_args(path: &Path) -> Vec<OsString> {
    vec![
        HELPER_SUBCOMMAND.into(),
        "--align".into(),
        ALIGN.into(),
        "--place".into(),
        PLACE.into(),
        path.as_os_str().to_owned(),
    ]
}
