//! Remembered settings. Only the grid size is stored.

use alloc::string::String;
use core::fmt;
use log::warn;

use crate::config::{clamp_grid_size, DEFAULT_GRID_SIZE};

/// Errors raised while loading or saving preferences.
#[derive(Debug)]
pub enum PrefsError {
    #[cfg(feature = "std")]
    Io(std::io::Error),
    /// The stored document could not be parsed or written.
    Corrupt(String),
}

impl fmt::Display for PrefsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            #[cfg(feature = "std")]
            PrefsError::Io(e) => write!(f, "Preference file error: {}", e),
            PrefsError::Corrupt(msg) => write!(f, "Corrupt preferences: {}", msg),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PrefsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PrefsError::Io(e) => Some(e),
            PrefsError::Corrupt(_) => None,
        }
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for PrefsError {
    fn from(err: std::io::Error) -> Self {
        PrefsError::Io(err)
    }
}

/// Somewhere to keep the player's chosen grid size between sessions.
pub trait PreferenceStore {
    fn grid_size(&self) -> Option<usize>;
    fn set_grid_size(&mut self, size: usize) -> Result<(), PrefsError>;
}

/// Preferences that live only as long as the value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryPrefs {
    grid_size: Option<usize>,
}

impl MemoryPrefs {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPrefs {
    fn grid_size(&self) -> Option<usize> {
        self.grid_size
    }

    fn set_grid_size(&mut self, size: usize) -> Result<(), PrefsError> {
        self.grid_size = Some(size);
        Ok(())
    }
}

/// Grid size to start with: the stored one clamped into range, or the default.
pub fn startup_grid_size<P: PreferenceStore + ?Sized>(prefs: &P) -> usize {
    prefs
        .grid_size()
        .map(clamp_grid_size)
        .unwrap_or(DEFAULT_GRID_SIZE)
}

/// Store `size`, logging instead of failing when the store refuses.
pub fn remember_grid_size<P: PreferenceStore + ?Sized>(prefs: &mut P, size: usize) -> bool {
    match prefs.set_grid_size(size) {
        Ok(()) => true,
        Err(e) => {
            warn!("could not save grid size {}: {}", size, e);
            false
        }
    }
}

#[cfg(feature = "std")]
pub use file::JsonFilePrefs;

#[cfg(feature = "std")]
mod file {
    use std::fs;
    use std::io::ErrorKind;
    use std::path::{Path, PathBuf};
    use std::string::ToString;

    use serde::{Deserialize, Serialize};

    use super::{PreferenceStore, PrefsError};

    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    struct PrefsDocument {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        grid_size: Option<usize>,
    }

    /// Preferences kept in a small JSON document, e.g. `{"grid_size":8}`.
    #[derive(Debug, Clone)]
    pub struct JsonFilePrefs {
        path: PathBuf,
        doc: PrefsDocument,
    }

    impl JsonFilePrefs {
        /// Load the document at `path`. A missing file yields empty
        /// preferences; an unreadable or malformed one is an error.
        pub fn open(path: impl Into<PathBuf>) -> Result<Self, PrefsError> {
            let path = path.into();
            let doc = match fs::read_to_string(&path) {
                Ok(text) => serde_json::from_str(&text)
                    .map_err(|e| PrefsError::Corrupt(e.to_string()))?,
                Err(e) if e.kind() == ErrorKind::NotFound => PrefsDocument::default(),
                Err(e) => return Err(e.into()),
            };
            Ok(Self { path, doc })
        }

        /// Empty preferences that will be written to `path` on the first change.
        pub fn empty(path: impl Into<PathBuf>) -> Self {
            Self {
                path: path.into(),
                doc: PrefsDocument::default(),
            }
        }

        pub fn path(&self) -> &Path {
            &self.path
        }

        fn save(&self) -> Result<(), PrefsError> {
            let text = serde_json::to_string_pretty(&self.doc)
                .map_err(|e| PrefsError::Corrupt(e.to_string()))?;
            if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
                fs::create_dir_all(dir)?;
            }
            fs::write(&self.path, text)?;
            Ok(())
        }
    }

    impl PreferenceStore for JsonFilePrefs {
        fn grid_size(&self) -> Option<usize> {
            self.doc.grid_size
        }

        fn set_grid_size(&mut self, size: usize) -> Result<(), PrefsError> {
            self.doc.grid_size = Some(size);
            self.save()
        }
    }
}
