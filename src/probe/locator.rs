//! Install root resolution.
//!
//! The probe starts from a well-known installation root. On Windows that is
//! the Program Files special folder; tests and the diagnostic CLI substitute
//! a fixed directory.

use std::path::{Path, PathBuf};

use crate::error::{InstallHelperError, Result};

/// Resolves the directory the SDK subpath is appended to.
pub trait InstallRoot {
    /// Resolve the root directory.
    fn resolve(&self) -> Result<PathBuf>;

    /// Short human-readable description for logs and CLI output.
    fn describe(&self) -> String;
}

/// The Program Files special folder (`CSIDL_PROGRAM_FILES`, non-roaming).
#[derive(Debug, Clone, Copy, Default)]
pub struct ProgramFilesFolder;

impl InstallRoot for ProgramFilesFolder {
    fn resolve(&self) -> Result<PathBuf> {
        program_files_path()
    }

    fn describe(&self) -> String {
        "Program Files special folder".to_string()
    }
}

#[cfg(windows)]
fn program_files_path() -> Result<PathBuf> {
    use std::ffi::OsString;
    use std::os::windows::ffi::OsStringExt;
    use windows::Win32::Foundation::{BOOL, HWND};
    use windows::Win32::UI::Shell::{SHGetSpecialFolderPathW, CSIDL_PROGRAM_FILES};

    let mut buffer = [0u16; crate::config::MAX_PATH];

    // SAFETY: Calling Win32 API as documented. The buffer is MAX_PATH wide
    // and fCreate is FALSE, so nothing is written to disk.
    let ok = unsafe {
        SHGetSpecialFolderPathW(
            HWND::default(),
            &mut buffer,
            CSIDL_PROGRAM_FILES as i32,
            BOOL::from(false),
        )
    };

    if !ok.as_bool() {
        return Err(InstallHelperError::RootUnresolved {
            reason: "SHGetSpecialFolderPathW returned FALSE".to_string(),
        });
    }

    let len = buffer.iter().position(|&c| c == 0).unwrap_or(buffer.len());
    if len == 0 {
        return Err(InstallHelperError::RootUnresolved {
            reason: "SHGetSpecialFolderPathW returned an empty path".to_string(),
        });
    }

    Ok(PathBuf::from(OsString::from_wide(&buffer[..len])))
}

#[cfg(not(windows))]
fn program_files_path() -> Result<PathBuf> {
    Err(InstallHelperError::RootUnresolved {
        reason: "special folders are only available on Windows".to_string(),
    })
}

/// A root given explicitly.
#[derive(Debug, Clone)]
pub struct FixedRoot(PathBuf);

impl FixedRoot {
    /// Create a fixed root at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    /// The configured path.
    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl InstallRoot for FixedRoot {
    fn resolve(&self) -> Result<PathBuf> {
        Ok(self.0.clone())
    }

    fn describe(&self) -> String {
        format!("fixed root {}", self.0.display())
    }
}

/// A root that never resolves. Stands in for a broken shell in tests.
#[derive(Debug, Clone, Default)]
pub struct UnresolvableRoot {
    reason: String,
}

impl UnresolvableRoot {
    /// Create a root that fails with `reason`.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl InstallRoot for UnresolvableRoot {
    fn resolve(&self) -> Result<PathBuf> {
        Err(InstallHelperError::RootUnresolved {
            reason: self.reason.clone(),
        })
    }

    fn describe(&self) -> String {
        "unresolvable root".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_root_resolves_to_its_path() {
        let root = FixedRoot::new("/opt/pf");
        assert_eq!(root.resolve().unwrap(), PathBuf::from("/opt/pf"));
        assert_eq!(root.path(), Path::new("/opt/pf"));
        assert!(root.describe().contains("/opt/pf"));
    }

    #[test]
    fn unresolvable_root_reports_reason() {
        let root = UnresolvableRoot::new("shell32 unavailable");
        let err = root.resolve().unwrap_err();
        assert!(err.is_fatal());
        assert!(err.to_string().contains("shell32 unavailable"));
    }

    #[cfg(not(windows))]
    #[test]
    fn program_files_is_unresolved_off_windows() {
        let err = ProgramFilesFolder.resolve().unwrap_err();
        assert!(matches!(err, InstallHelperError::RootUnresolved { .. }));
    }

    #[cfg(windows)]
    #[test]
    fn program_files_resolves_on_windows() {
        let path = ProgramFilesFolder.resolve().unwrap();
        assert!(path.is_absolute());
    }
}
