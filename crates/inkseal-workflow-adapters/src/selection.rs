use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use eyre::{Result, WrapErr};

use inkseal_workflow_core::{FileHandle, FileSelectorPort};

/// UI-held selection state: which file is currently chosen for each named
/// input slot. The workflow core only ever reads it through the port.
#[derive(Debug, Clone, Default)]
pub struct SelectionStore {
    slots: Arc<Mutex<HashMap<String, FileHandle>>>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn choose(&self, input: impl Into<String>, handle: FileHandle) {
        self.lock().insert(input.into(), handle);
    }

    pub fn clear(&self, input: &str) {
        self.lock().remove(input);
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, FileHandle>> {
        match self.slots.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl FileSelectorPort for SelectionStore {
    fn selected(&self, input: &str) -> Option<FileHandle> {
        self.lock().get(input).cloned()
    }
}

/// Read a user-picked path into a handle. Shell-side convenience; the core
/// never touches the filesystem itself.
pub fn load_file_handle(path: impl AsRef<Path>) -> Result<FileHandle> {
    let path = path.as_ref();
    let bytes =
        fs::read(path).wrap_err_with(|| format!("failed to read {}", path.display()))?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload.bin".to_owned());
    Ok(FileHandle::new(name, bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choose_then_clear_roundtrip() {
        let store = SelectionStore::new();
        assert!(store.selected("file").is_none());

        store.choose("file", FileHandle::new("a.txt", b"hello".to_vec()));
        let handle = store.selected("file").expect("handle present");
        assert_eq!(handle.name(), "a.txt");
        assert_eq!(handle.bytes(), b"hello");

        store.clear("file");
        assert!(store.selected("file").is_none());
    }

    #[test]
    fn load_missing_path_reports_the_path() {
        let err = load_file_handle("/nonexistent/inkseal-test-file").expect_err("must fail");
        assert!(format!("{err:#}").contains("/nonexistent/inkseal-test-file"));
    }
}
