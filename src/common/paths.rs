//! Base directory resolution
//!
//! The wrapper operates relative to its own location, not the caller's
//! working directory: the binary sits next to the solution file it drives,
//! like the scripts it replaces did.

use std::path::PathBuf;

use super::{Error, Result};

/// Directory containing the running executable
///
/// Symlinks are resolved so the solution file is looked up next to the real
/// binary.
pub fn base_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let exe = exe.canonicalize().unwrap_or(exe);
    exe.parent()
        .map(PathBuf::from)
        .ok_or_else(|| Error::Internal("executable has no parent directory".to_string()))
}
