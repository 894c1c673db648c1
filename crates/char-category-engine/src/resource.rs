use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::CategoryError;

/// The `char.def` bundled with the crate.
pub const DEFAULT_CHAR_DEF: &[u8] = include_bytes!("../resources/char.def");

/// A source of definition bytes.
///
/// `consume` opens the underlying stream, hands it to `body`, and releases it
/// once `body` returns, whether or not it succeeded.
pub trait Resource {
    /// Human-readable name of the source, for diagnostics.
    fn locator(&self) -> String;

    fn consume<T, F>(self, body: F) -> Result<T, CategoryError>
    where
        Self: Sized,
        F: FnOnce(&mut dyn BufRead) -> Result<T, CategoryError>;
}

/// A definition file on disk.
#[derive(Debug, Clone)]
pub struct FileResource {
    path: PathBuf,
}

impl FileResource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Resource for FileResource {
    fn locator(&self) -> String {
        self.path.display().to_string()
    }

    fn consume<T, F>(self, body: F) -> Result<T, CategoryError>
    where
        F: FnOnce(&mut dyn BufRead) -> Result<T, CategoryError>,
    {
        let file = File::open(&self.path).map_err(|source| CategoryError::Open {
            locator: self.locator(),
            source,
        })?;
        let mut reader = BufReader::new(file);
        body(&mut reader)
    }
}

/// A definition held in memory.
#[derive(Debug, Clone)]
pub struct BytesResource {
    name: String,
    bytes: Cow<'static, [u8]>,
}

impl BytesResource {
    pub fn new(name: impl Into<String>, bytes: impl Into<Cow<'static, [u8]>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }
}

impl Resource for BytesResource {
    fn locator(&self) -> String {
        self.name.clone()
    }

    fn consume<T, F>(self, body: F) -> Result<T, CategoryError>
    where
        F: FnOnce(&mut dyn BufRead) -> Result<T, CategoryError>,
    {
        let mut reader: &[u8] = &self.bytes;
        body(&mut reader)
    }
}

/// The bundled default definition ([`DEFAULT_CHAR_DEF`]).
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultResource;

impl Resource for DefaultResource {
    fn locator(&self) -> String {
        "<bundled char.def>".to_string()
    }

    fn consume<T, F>(self, body: F) -> Result<T, CategoryError>
    where
        F: FnOnce(&mut dyn BufRead) -> Result<T, CategoryError>,
    {
        BytesResource::new(self.locator(), DEFAULT_CHAR_DEF).consume(body)
    }
}
