//! Infrastructure layer for filesystem and environment interactions.
//!
//! Zellij plugins run in a WASI sandbox where the host filesystem is mounted
//! under `/host`. Everything that turns user-facing paths into sandbox paths
//! (and back) lives here.

pub mod paths;

pub use paths::{default_export_path, expand_tilde, get_data_dir, strip_host_prefix};
