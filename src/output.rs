//! Output directory management and stage-snapshot naming.
//!
//! Each run wipes and recreates its output directory, then writes the
//! intermediate stages alongside the final image, prefixed with the stage
//! name: `edges_<file>`, `zoomed_edges_<file>`, `combined_<file>`, `<file>`.

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A prepared (empty) output directory.
#[derive(Debug, Clone)]
pub struct OutputDir {
    root: PathBuf,
}

impl OutputDir {
    /// Remove any existing directory at `root` and recreate it empty.
    pub fn prepare(root: impl Into<PathBuf>) -> io::Result<Self> {
        let root = root.into();
        if root.exists() {
            fs::remove_dir_all(&root)?;
        }
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Path for a stage snapshot of `input`, named `<prefix>_<file name>`.
    pub fn stage_path(&self, prefix: &str, input: &Path) -> PathBuf {
        let name = file_name(input);
        self.root.join(format!("{}_{}", prefix, name.to_string_lossy()))
    }

    /// Path for the final image, keeping the input's file name.
    pub fn final_path(&self, input: &Path) -> PathBuf {
        self.root.join(file_name(input))
    }

    /// The directory root.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn file_name(input: &Path) -> &OsStr {
    input.file_name().unwrap_or_else(|| OsStr::new("image.png"))
}
