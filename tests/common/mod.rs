//! Brute-force oracles shared by the integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

/// `ceil(len / capacity)`, zero for empty input.
pub fn expected_zone_count(len: usize, capacity: usize) -> usize {
    len.div_ceil(capacity)
}

/// Sub-sequence of `data` in `[low, high)`, original order.
pub fn naive_range(data: &[i32], low: i32, high: i32) -> Vec<i32> {
    data.iter().copied().filter(|&e| low <= e && e < high).collect()
}

/// Write `values` as a flat native-endian file under the temp directory.
pub fn write_dataset(name: &str, values: &[i32]) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("zonemap-tests-{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("create temp directory");
    let path = dir.join(name);
    let bytes: Vec<u8> = values.iter().flat_map(|v| v.to_ne_bytes()).collect();
    std::fs::write(&path, bytes).expect("write dataset");
    path
}
