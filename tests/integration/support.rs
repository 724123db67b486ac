use std::sync::Arc;

use classifier::{ClassifierService, MemoryRecordStore, RecordStore, ServiceOptions, TreeNode};
use tempfile::TempDir;

pub fn memory_service() -> ClassifierService {
    ClassifierService::new(Arc::new(MemoryRecordStore::new()), ServiceOptions::default()).unwrap()
}

pub fn sled_service(temp_dir: &TempDir) -> ClassifierService {
    let store = classifier::SledRecordStore::new(&temp_dir.path().join("store")).unwrap();
    ClassifierService::new(Arc::new(store), ServiceOptions::default()).unwrap()
}

/// Sorted `(name, path)` pairs of everything in the store.
pub fn snapshot(store: &Arc<dyn RecordStore>) -> Vec<(String, String)> {
    let mut all: Vec<(String, String)> = store
        .find_all()
        .unwrap()
        .into_iter()
        .map(|r| (r.name, r.path))
        .collect();
    all.sort();
    all
}

pub fn child_names(node: &TreeNode) -> Vec<&str> {
    node.children.iter().map(|c| c.name.as_str()).collect()
}
