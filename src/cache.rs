// Explicit dataset cache.
//
// The dashboard recomputes everything on every interaction; this cache is
// what keeps "load" from re-reading the file each time. It holds at most
// one dataset, keyed by the path it was loaded from, and is invalidated
// only by `clear`; there is no file-change detection.
use crate::loader::{self, LoadError, LoadReport};
use crate::types::EmployeeRecord;
use std::path::Path;
use std::sync::{Arc, Mutex};

#[derive(Default)]
pub struct DatasetCache {
    slot: Mutex<Option<Entry>>,
}

struct Entry {
    key: String,
    rows: Arc<Vec<EmployeeRecord>>,
    report: LoadReport,
}

/// A cache lookup result: the immutable dataset plus its load diagnostics.
#[derive(Debug, Clone)]
pub struct CachedLoad {
    pub rows: Arc<Vec<EmployeeRecord>>,
    pub report: LoadReport,
    pub from_cache: bool,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `path` through the real CSV loader, serving the cached dataset
    /// when the path matches the stored key.
    pub fn load(&self, path: &Path) -> Result<CachedLoad, LoadError> {
        self.get_or_load(path, loader::load_and_clean)
    }

    /// Cache-or-load with an injectable loader. On a miss the closure runs
    /// exactly once while the lock is held, so concurrent first loads from
    /// a multi-threaded host cannot race the population.
    pub fn get_or_load<F>(&self, path: &Path, load: F) -> Result<CachedLoad, LoadError>
    where
        F: FnOnce(&Path) -> Result<(Vec<EmployeeRecord>, LoadReport), LoadError>,
    {
        let key = path.display().to_string();
        let mut slot = self.slot.lock().unwrap();
        if let Some(entry) = slot.as_ref() {
            if entry.key == key {
                return Ok(CachedLoad {
                    rows: Arc::clone(&entry.rows),
                    report: entry.report.clone(),
                    from_cache: true,
                });
            }
        }
        let (rows, report) = load(path)?;
        let rows = Arc::new(rows);
        *slot = Some(Entry {
            key,
            rows: Arc::clone(&rows),
            report: report.clone(),
        });
        Ok(CachedLoad {
            rows,
            report,
            from_cache: false,
        })
    }

    /// Drop the cached dataset; the next load re-reads the file.
    pub fn clear(&self) {
        *self.slot.lock().unwrap() = None;
    }
}
