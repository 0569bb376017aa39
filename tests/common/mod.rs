use std::fs;
use std::path::{Path, PathBuf};

pub const SCAN_JSON: &str = r#"{
    "merchant": "INDOMARET POINT",
    "date": "2025-11-21",
    "items": [
        {"name": "Aqua 600ml", "qty": 2, "price": 3500, "total": 7000},
        {"name": "Sari Roti", "qty": 1, "price": 12000, "total": 12000}
    ],
    "total_amount": 19000
}"#;

pub const ASSIGNMENTS_JSON: &str = r#"{
    "participants": ["alice", "bob"],
    "assignments": [["alice", "bob"], ["bob"]]
}"#;

pub fn write_fixture(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("failed to write fixture");
    path
}
