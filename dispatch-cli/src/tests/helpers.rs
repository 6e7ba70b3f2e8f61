//! Test helpers for writing manifests and address tables to disk.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

pub(super) fn write_utf8(path: &Utf8Path, contents: impl AsRef<[u8]>) {
    std::fs::write(path, contents).expect("write fixture file");
}

pub(super) fn utf8_tempdir() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    (tmp, root)
}

/// Two orders to Сущёвский Вал and two to Ямская around the bundled pickup point.
pub(super) const CLOSE_ORDERS_MANIFEST: &str = r#"{
    "max_deliveries": 3,
    "orders": [
        { "address_key": "Сущёвский Вал 55", "duration": 45 },
        { "address_key": "Сущёвский Вал 55", "duration": 30 },
        { "address_key": "Ямская 10", "duration": 15 },
        { "address_key": "Ямская 10", "duration": 60 }
    ]
}"#;
