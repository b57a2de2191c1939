use std::path::{Path, PathBuf, absolute};

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::LaunchError;

/// File name of the java executable inside a runtime's binary directory.
pub const JAVA_EXECUTABLE: &str = "java";

/// An installed java runtime, as reported by runtime discovery.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct JavaRuntime {
    /// Installation directory, or the path of the executable itself.
    pub dir: PathBuf,
    /// Major version number, e.g. `8` for java 1.8 and `17` for java 17.
    pub major_version: u32,
}

impl JavaRuntime {
    pub fn new(dir: impl Into<PathBuf>, major_version: u32) -> Self {
        Self {
            dir: dir.into(),
            major_version,
        }
    }

    /// Locate the directory that holds the java executable.
    ///
    /// The installation path is made absolute first. If it points at a file,
    /// its parent directory is used instead. A `bin` subdirectory is descended
    /// into when present.
    pub fn bin_dir(&self) -> Result<PathBuf, LaunchError> {
        let not_found = || LaunchError::RuntimeNotFound {
            path: self.dir.clone(),
        };
        let mut path = absolute(&self.dir).map_err(|_| not_found())?;

        if !path.exists() {
            return Err(LaunchError::RuntimeNotFound { path });
        }
        if path.is_file()
            && let Some(parent) = path.parent()
        {
            path = parent.to_path_buf();
        }

        let bin = path.join("bin");
        if bin.is_dir() {
            path = bin;
        }

        trace!("resolved java binary directory {path:?}");
        Ok(path)
    }

    /// Absolute path of the java executable of this runtime.
    pub fn java_path(&self) -> Result<PathBuf, LaunchError> {
        Ok(self.bin_dir()?.join(JAVA_EXECUTABLE))
    }
}

/// The runtime a process is launched with.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Runtime {
    /// No runtime selected, `java` is looked up from the search path.
    #[default]
    Unresolved,
    Resolved(JavaRuntime),
}

impl Runtime {
    /// Major version of the runtime, if known.
    pub fn major_version(&self) -> Option<u32> {
        match self {
            Runtime::Unresolved => None,
            Runtime::Resolved(java) => Some(java.major_version),
        }
    }

    /// The first token of the command line.
    pub fn executable(&self) -> Result<String, LaunchError> {
        match self {
            Runtime::Unresolved => Ok(JAVA_EXECUTABLE.into()),
            Runtime::Resolved(java) => path_to_string(java.java_path()?),
        }
    }
}

/// Convert a path to a command line token without lossy replacement.
pub(crate) fn path_to_string(path: impl AsRef<Path>) -> Result<String, LaunchError> {
    let path = path.as_ref();
    path.to_str()
        .map(str::to_string)
        .ok_or_else(|| LaunchError::NonUnicodePath { path: path.into() })
}

impl From<JavaRuntime> for Runtime {
    fn from(value: JavaRuntime) -> Self {
        Runtime::Resolved(value)
    }
}

impl From<Option<JavaRuntime>> for Runtime {
    fn from(value: Option<JavaRuntime>) -> Self {
        value.map_or(Runtime::Unresolved, Runtime::Resolved)
    }
}

#[cfg(test)]
mod tests {
    use std::fs::{File, create_dir, create_dir_all};

    use super::*;

    #[test]
    fn unresolved_runtime_uses_search_path() {
        assert_eq!(Runtime::Unresolved.executable().unwrap(), "java");
        assert_eq!(Runtime::Unresolved.major_version(), None);
    }

    #[test]
    fn descends_into_bin() {
        let home = tempfile::tempdir().unwrap();
        create_dir(home.path().join("bin")).unwrap();
        let java = JavaRuntime::new(home.path(), 17);
        assert_eq!(java.bin_dir().unwrap(), home.path().join("bin"));
        assert_eq!(
            java.java_path().unwrap(),
            home.path().join("bin").join("java")
        );
    }

    #[test]
    fn directory_without_bin_is_used_directly() {
        let home = tempfile::tempdir().unwrap();
        let java = JavaRuntime::new(home.path(), 8);
        assert_eq!(java.bin_dir().unwrap(), home.path());
    }

    #[test]
    fn file_is_replaced_by_parent() {
        let home = tempfile::tempdir().unwrap();
        let bin = home.path().join("bin");
        create_dir(&bin).unwrap();
        let exe = bin.join("java");
        File::create(&exe).unwrap();
        let java = JavaRuntime::new(&exe, 21);
        // `bin/bin` does not exist, so the parent is kept as is
        assert_eq!(java.bin_dir().unwrap(), bin);
    }

    #[test]
    fn missing_path_is_reported() {
        let home = tempfile::tempdir().unwrap();
        let java = JavaRuntime::new(home.path().join("nope"), 8);
        let err = java.bin_dir().unwrap_err();
        assert!(matches!(err, LaunchError::RuntimeNotFound { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn non_unicode_runtime_dir_is_rejected() {
        use std::{ffi::OsStr, os::unix::ffi::OsStrExt};

        let home = tempfile::tempdir().unwrap();
        let jre = home.path().join(OsStr::from_bytes(b"jre\xff"));
        create_dir_all(jre.join("bin")).unwrap();
        let runtime = Runtime::Resolved(JavaRuntime::new(&jre, 17));
        match runtime.executable() {
            Err(LaunchError::NonUnicodePath { path }) => {
                assert_eq!(path, jre.join("bin").join("java"))
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
