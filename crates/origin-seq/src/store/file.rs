use crate::{CounterStore, Result, SequenceNumber, parse_counter};
use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};
use tempfile::NamedTempFile;

/// A counter kept as a single base-10 integer in a plain-text file.
///
/// A missing file means "never allocated". Every write goes to a temporary
/// file in the same directory which is then renamed over the counter, so a
/// failed write leaves the previous value in place.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

impl CounterStore for FileStore {
    fn load(&mut self) -> Result<Option<SequenceNumber>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => parse_counter(&content).map(Some),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn store(&mut self, next: SequenceNumber) -> Result<()> {
        let mut tmp = NamedTempFile::new_in(self.dir())?;
        tmp.write_all(next.to_string().as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|err| err.error)?;
        Ok(())
    }
}
