//! Test helpers for writing request and catalogue fixtures.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// A temporary directory addressed by UTF-8 paths.
#[derive(Debug)]
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.path(name);
        write_utf8(&path, contents.as_bytes());
        path
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write fixture");
}

/// A catalogue with one three-stop list and one empty list.
pub(super) const SMALL_CATALOGUE: &str = r#"{
    "places": [
        { "id": "A", "name": "Maxwell", "location": { "lat": 1.2805, "lng": 103.8447 } },
        { "id": "B", "name": "Crawford Lane", "location": { "lat": 1.3067, "lng": 103.8617 } },
        { "id": "C", "name": "Lau Pa Sat", "location": { "lat": 1.2806, "lng": 103.8505 } }
    ],
    "lists": [
        { "id": "trio", "title": "Trio", "shareCode": "trio", "category": "hawker",
          "entries": [{ "placeId": "A" }, { "placeId": "B" }, { "placeId": "C" }] },
        { "id": "empty", "title": "Empty", "shareCode": "none", "category": "hawker" }
    ]
}"#;

/// Parse the JSON written to `stdout`.
pub(super) fn stdout_json(stdout: &[u8]) -> serde_json::Value {
    serde_json::from_slice(stdout).expect("stdout should hold a JSON envelope")
}
