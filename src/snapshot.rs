#![cfg(feature = "std")]

//! Destinations for the plain-text board dumps written after each placement and turn.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

pub trait SnapshotSink {
    /// Store `contents` under `name`, replacing anything saved there before.
    fn save(&mut self, name: &str, contents: &str) -> io::Result<()>;
}

/// Writes each snapshot to `<dir>/<name>`.
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl SnapshotSink for DirectorySink {
    fn save(&mut self, name: &str, contents: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(name);
        debug!("writing snapshot {}", path.display());
        fs::write(path, contents)
    }
}

/// Keeps the latest snapshot per name in memory.
#[derive(Default, Debug)]
pub struct MemorySink {
    files: HashMap<String, String>,
    writes: usize,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.files.get(name).map(String::as_str)
    }

    /// Total number of saves, including overwrites.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl SnapshotSink for MemorySink {
    fn save(&mut self, name: &str, contents: &str) -> io::Result<()> {
        self.files.insert(name.to_string(), contents.to_string());
        self.writes += 1;
        Ok(())
    }
}

/// Discards every snapshot.
pub struct NullSink;

impl SnapshotSink for NullSink {
    fn save(&mut self, _name: &str, _contents: &str) -> io::Result<()> {
        Ok(())
    }
}

impl<S: SnapshotSink + ?Sized> SnapshotSink for Box<S> {
    fn save(&mut self, name: &str, contents: &str) -> io::Result<()> {
        (**self).save(name, contents)
    }
}
