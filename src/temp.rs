//! Safe temporary directory base so per-equation build dirs are never
//! created under the current working directory (e.g. when TMPDIR=tmp or
//! TMPDIR=./tmp).

use std::env;
use std::path::PathBuf;

/// Returns an absolute directory path suitable for creating the per-equation
/// build directories in.
pub fn temp_dir_base() -> PathBuf {
    let t = env::temp_dir();
    if t.is_absolute() {
        t
    } else {
        #[cfg(windows)]
        {
            env::var("TEMP")
                .or_else(|_| env::var("TMP"))
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("C:\\Windows\\Temp"))
        }
        #[cfg(not(windows))]
        {
            PathBuf::from("/tmp")
        }
    }
}
