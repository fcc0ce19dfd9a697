//! Utility functions for the CLI.

use indicatif::{ProgressBar, ProgressStyle};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// File extension for compressed output.
pub const COMPRESSED_EXT: &str = "ohf";

/// Create a progress bar with standard styling.
pub fn create_progress_bar(len: u64, enable: bool) -> ProgressBar {
    if !enable {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .expect("progress bar template is valid")
            .progress_chars("█▓▒░ "),
    );
    pb
}

/// Default output path for compression: the input name plus `.ohf`.
pub fn default_compressed_name(input: &Path) -> PathBuf {
    let mut name = OsString::from(input.as_os_str());
    name.push(".");
    name.push(COMPRESSED_EXT);
    PathBuf::from(name)
}

/// Default output path for decompression.
///
/// Strips a `.ohf` suffix when present, otherwise appends `.out` so the
/// input is never overwritten.
pub fn default_decompressed_name(input: &Path) -> PathBuf {
    let is_compressed_ext = input
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(COMPRESSED_EXT));

    if is_compressed_ext {
        input.with_extension("")
    } else {
        let mut name = OsString::from(input.as_os_str());
        name.push(".out");
        PathBuf::from(name)
    }
}
