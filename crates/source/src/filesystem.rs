use crate::{ContentSource, SourceError};
use log::debug;
use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

/// Reads artifacts from the files of one content directory.
///
/// The build step writes every artifact next to the others, so a name must be
/// a single plain path component. Nested, absolute and `..` names never reach
/// the filesystem.
#[derive(Debug, Clone)]
pub struct FilesystemSource {
    dir: PathBuf,
}

impl FilesystemSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn artifact_path(&self, name: &str) -> Result<PathBuf, SourceError> {
        let mut components = Path::new(name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(file)), None) => Ok(self.dir.join(file)),
            _ => Err(SourceError::InvalidName(name.to_string())),
        }
    }
}

impl ContentSource for FilesystemSource {
    fn load_optional(&self, name: &str) -> Result<Option<Vec<u8>>, SourceError> {
        let path = self.artifact_path(name)?;
        match fs::read(&path) {
            Ok(bytes) => {
                debug!("Read {} ({} bytes)", path.display(), bytes.len());
                Ok(Some(bytes))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No {} in {}", name, self.dir.display());
                Ok(None)
            }
            Err(source) => Err(SourceError::Io {
                name: name.to_string(),
                source,
            }),
        }
    }

    fn describe(&self) -> String {
        format!("content directory {}", self.dir.display())
    }
}
