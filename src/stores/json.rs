//! Implements a transaction store backed by a single JSON document.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;

use crate::{Error, stores::TransactionStore, transaction::Transaction};

/// Stores transactions as a JSON array in a single file.
///
/// The file is opened for every operation rather than held open. Saving
/// writes the new list to a temporary file next to the document and renames
/// it over the document, so a failed save never leaves a half-written file.
///
/// There is no locking: two overlapping load-modify-save cycles can lose one
/// of the updates.
#[derive(Debug, Clone)]
pub struct JsonTransactionStore {
    path: PathBuf,
}

impl JsonTransactionStore {
    /// Create a store for the JSON document at `path`.
    ///
    /// Nothing is read or written until [TransactionStore::initialize],
    /// [TransactionStore::load] or [TransactionStore::save] is called.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path of the backing JSON document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    fn write_error(&self, error: impl std::fmt::Display) -> Error {
        Error::StoreWriteError(format!("{}: {error}", self.path.display()))
    }
}

impl TransactionStore for JsonTransactionStore {
    /// Create the document with an empty list if it does not exist yet.
    ///
    /// Missing parent directories are created as well.
    fn initialize(&self) -> Result<(), Error> {
        if self.path.exists() {
            tracing::debug!("Using existing transaction store {}", self.path.display());
            return Ok(());
        }

        fs::create_dir_all(self.parent_dir()).map_err(|error| self.write_error(error))?;
        self.save(&[])?;
        tracing::info!("Created empty transaction store {}", self.path.display());

        Ok(())
    }

    fn load(&self) -> Result<Vec<Transaction>, Error> {
        let text = fs::read_to_string(&self.path).map_err(|error| {
            Error::StoreReadError(format!("{}: {error}", self.path.display()))
        })?;

        serde_json::from_str(&text).map_err(|error| {
            Error::StoreReadError(format!("{}: {error}", self.path.display()))
        })
    }

    fn save(&self, transactions: &[Transaction]) -> Result<(), Error> {
        let json =
            serde_json::to_string_pretty(transactions).map_err(|error| self.write_error(error))?;

        let mut file =
            NamedTempFile::new_in(self.parent_dir()).map_err(|error| self.write_error(error))?;
        file.write_all(json.as_bytes())
            .and_then(|_| file.as_file().sync_all())
            .map_err(|error| self.write_error(error))?;
        file.persist(&self.path)
            .map_err(|error| self.write_error(error.error))?;

        Ok(())
    }
}
