use std::path::Path;

use super::WorkloadError;

/// Bytes per stored value.
pub const VALUE_WIDTH: usize = std::mem::size_of::<i32>();

/// Read a flat file of native-endian `i32` values.
pub fn load_i32_file<P: AsRef<Path>>(path: P) -> Result<Vec<i32>, WorkloadError> {
    let path = path.as_ref();
    let _span = tracing::info_span!("load_i32_file", path = %path.display()).entered();

    let bytes = std::fs::read(path)?;
    let values = decode_i32s(&bytes)?;
    tracing::info!(bytes = bytes.len(), values = values.len(), "loaded dataset");
    Ok(values)
}

/// Decode a byte buffer into `i32` values.
///
/// A trailing partial value is rejected rather than dropped.
pub fn decode_i32s(bytes: &[u8]) -> Result<Vec<i32>, WorkloadError> {
    if bytes.len() % VALUE_WIDTH != 0 {
        return Err(WorkloadError::MisalignedInput {
            len: bytes.len(),
            width: VALUE_WIDTH,
        });
    }

    Ok(bytes
        .chunks_exact(VALUE_WIDTH)
        .map(|c| i32::from_ne_bytes([c[0], c[1], c[2], c[3]]))
        .collect())
}

/// Content hash of a dataset, stable across runs on the same platform.
pub fn fingerprint(values: &[i32]) -> blake3::Hash {
    let mut hasher = blake3::Hasher::new();
    for value in values {
        hasher.update(&value.to_ne_bytes());
    }
    hasher.finalize()
}
