//! SharedTable - a thread-safe handle to a [`Table`].

use std::path::Path;
use std::sync::Arc;

use parking_lot::Mutex;

use super::{Row, Table};
use crate::common::Result;

/// A cloneable handle that serializes every operation on one table.
///
/// Each call holds the table lock for its whole duration, so a split is
/// never observed half-done and a select sees a consistent tree. Results
/// are collected under the lock rather than streamed.
///
/// # Example
/// ```no_run
/// use litlesql::SharedTable;
/// use std::thread;
///
/// let table = SharedTable::open("users.db")?;
/// let writer = table.clone();
/// thread::spawn(move || writer.insert(1, "alice", "alice@example.com"))
///     .join()
///     .unwrap()?;
/// assert_eq!(table.select_all()?.len(), 1);
/// # Ok::<(), litlesql::Error>(())
/// ```
#[derive(Clone)]
pub struct SharedTable {
    inner: Arc<Mutex<Table>>,
}

impl SharedTable {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(Table::open(path)?))
    }

    pub fn new(table: Table) -> Self {
        Self {
            inner: Arc::new(Mutex::new(table)),
        }
    }

    /// See [`Table::execute_insert`].
    pub fn insert(&self, id: i32, username: &str, email: &str) -> Result<()> {
        self.inner.lock().execute_insert(id, username, email)
    }

    /// Every row, in ascending id order.
    pub fn select_all(&self) -> Result<Vec<Row>> {
        self.inner.lock().execute_select()?.collect()
    }

    /// Every line of the tree dump.
    pub fn dump_tree(&self) -> Result<Vec<String>> {
        self.inner.lock().dump_tree().collect()
    }

    pub fn flush(&self) -> Result<()> {
        self.inner.lock().flush()
    }
}
