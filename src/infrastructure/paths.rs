//! Path manipulation utilities for Zellij sandbox environment.
//!
//! Handles tilde expansion, display normalization, and the default locations
//! of the inventory export and the trace file.

use std::path::PathBuf;

/// File name of the inventory export inside [`get_data_dir`].
pub const EXPORT_FILE_NAME: &str = "inventory.json";

/// Returns the data directory for Stockroom.
///
/// The directory is `/host/.local/share/zellij/stockroom` in the Zellij
/// sandbox. `/host` points to the cwd of the last focused terminal, or the
/// folder Zellij was started in, which is usually the user's home directory.
///
/// # Examples
///
/// ```
/// use stockroom::infrastructure::get_data_dir;
///
/// let data_dir = get_data_dir();
/// assert_eq!(data_dir.to_str().unwrap(), "/host/.local/share/zellij/stockroom");
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("stockroom")
}

/// Where the backend's export is read from when `data_file` is not configured.
#[must_use]
pub fn default_export_path() -> PathBuf {
    get_data_dir().join(EXPORT_FILE_NAME)
}

/// Expands tilde paths to use the `/host` prefix for Zellij sandbox.
///
/// # Examples
///
/// ```
/// use stockroom::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/exports/inventory.json"), "/host/exports/inventory.json");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}

/// Removes the `/host` prefix from sandbox paths for display purposes.
///
/// Only a whole leading `/host` component is stripped, so `/hostname/x` is
/// left alone.
///
/// # Examples
///
/// ```
/// use stockroom::infrastructure::strip_host_prefix;
///
/// assert_eq!(strip_host_prefix("/host/.local/share/inventory.json"), "~/.local/share/inventory.json");
/// assert_eq!(strip_host_prefix("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn strip_host_prefix(path: &str) -> String {
    match path.strip_prefix("/host") {
        Some("") => "~".to_string(),
        Some(rest) if rest.starts_with('/') => format!("~{rest}"),
        _ => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_export_lives_in_the_data_dir() {
        assert_eq!(
            default_export_path(),
            PathBuf::from("/host/.local/share/zellij/stockroom/inventory.json")
        );
    }

    #[test]
    fn tilde_only_expands_at_the_start() {
        assert_eq!(expand_tilde("~/a/~/b"), "/host/a/~/b");
        assert_eq!(expand_tilde("relative/~"), "relative/~");
    }

    #[test]
    fn host_prefix_round_trips_with_tilde() {
        let sandbox = expand_tilde("~/exports/inventory.json");
        assert_eq!(strip_host_prefix(&sandbox), "~/exports/inventory.json");
        assert_eq!(strip_host_prefix("/host"), "~");
        assert_eq!(strip_host_prefix("/hostname/file"), "/hostname/file");
    }
}
