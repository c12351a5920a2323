use std::{
    fs::File,
    io::{ErrorKind, Read, Write},
    ops::Deref,
    path::PathBuf,
};

use anyhow::{Context, Result};
use fs4::fs_std::FileExt;
use tracing::debug;

/// Interface for abstracting the string key-value store the log collection is persisted in.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore {
    /// Returns the raw bytes stored under `key`, or [None] if nothing was ever stored. Whether
    /// they are valid text is up to the caller to decide.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Replaces whatever is stored under `key` with `value`.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

impl<T: Deref> KeyValueStore for T
where
    T::Target: KeyValueStore,
{
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        self.deref().get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.deref().set(key, value)
    }
}

/// The main realization of [KeyValueStore]. Every key is a `<key>.json` file in one directory.
pub struct FileStore {
    store_dir: PathBuf,
}

impl FileStore {
    pub fn new(store_dir: PathBuf) -> Result<Self, std::io::Error> {
        std::fs::create_dir_all(&store_dir)?;

        Ok(Self { store_dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.store_dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.path_for(key);
        debug!("Reading {path:?}");
        let mut file = match File::open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e).with_context(|| format!("Failed to open {path:?}")),
        };
        FileExt::lock_shared(&file)?;
        let mut content = Vec::new();
        let read = file.read_to_end(&mut content);
        FileExt::unlock(&file)?;
        read.with_context(|| format!("Failed to read {path:?}"))?;
        Ok(Some(content))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key);
        debug!("Writing {} bytes into {path:?}", value.len());
        let mut file = File::options()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)
            .with_context(|| format!("Failed to open {path:?}"))?;

        // Truncate only while holding the lock.
        FileExt::lock_exclusive(&file)?;
        let written = file
            .set_len(0)
            .and_then(|_| file.write_all(value.as_bytes()))
            .and_then(|_| file.flush());
        FileExt::unlock(&file)?;
        written.with_context(|| format!("Failed to write {path:?}"))?;
        Ok(())
    }
}
