//! Opening and exclusively grabbing an evdev node.
//!
//! The grab is tied to the open file description: the kernel drops it when
//! the last descriptor is closed, including when the process dies. So the
//! grab is modelled as a type that owns the file, and there is no ungrab.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{self, Read};
use std::os::unix::io::{AsRawFd, RawFd};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Opens `path` read-only. No retry.
pub fn open_device(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })
}

/// A device node holding an exclusive EVIOCGRAB claim.
///
/// Only constructible through a successful grab, so a claim never exists
/// without its handle. Dropping it closes the file, which releases the claim.
#[derive(Debug)]
pub struct GrabbedDevice {
    file: File,
    path: PathBuf,
}

impl GrabbedDevice {
    /// Opens and grabs `path`.
    pub fn open(path: &Path) -> Result<Self> {
        let file = open_device(path)?;
        Self::grab(file, path)
    }

    /// Takes ownership of an open handle and grabs it.
    ///
    /// On failure the handle is closed before the error is returned.
    pub fn grab(file: File, path: &Path) -> Result<Self> {
        // SAFETY: the fd is valid for the lifetime of `file` and EVIOCGRAB
        // takes its argument by value.
        if unsafe { input_linux_sys::ev_grab(file.as_raw_fd(), 1) }.is_err() {
            // errno still holds the ioctl's failure; nothing ran since.
            let source = io::Error::last_os_error();
            drop(file);
            return Err(Error::Grab {
                path: path.to_path_buf(),
                source,
            });
        }
        Ok(Self {
            file,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AsRawFd for GrabbedDevice {
    fn as_raw_fd(&self) -> RawFd {
        self.file.as_raw_fd()
    }
}

impl Read for GrabbedDevice {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.file.read(buf)
    }
}

impl Drop for GrabbedDevice {
    fn drop(&mut self) {
        // The file closes right after this; that is the release.
        debug!(device = %self.path.display(), fd = self.file.as_raw_fd(), "closing device, grab released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_missing_node_is_open_error() {
        let err = GrabbedDevice::open(Path::new("/dev/does-not-exist")).unwrap_err();
        assert!(matches!(err, Error::Open { .. }), "unexpected error: {err:?}");
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn grab_on_non_evdev_node_is_grab_error() {
        // /dev/null opens fine but does not implement EVIOCGRAB.
        let err = GrabbedDevice::open(Path::new("/dev/null")).unwrap_err();
        match &err {
            Error::Grab { path, source } => {
                assert_eq!(path, Path::new("/dev/null"));
                assert_eq!(source.raw_os_error(), Some(libc::ENOTTY));
            }
            other => panic!("expected Grab error, got {other:?}"),
        }
    }
}
