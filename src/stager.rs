use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tempfile::TempDir;
use tracing::{info, warn};

use crate::error::{ConvertError, Result};

/// Root of an export, either given as a directory or extracted from a zip.
/// An extracted root removes its temporary directory when dropped.
pub enum ExportRoot {
    Directory(PathBuf),
    Extracted(TempDir),
}

impl ExportRoot {
    pub fn path(&self) -> &Path {
        match self {
            ExportRoot::Directory(path) => path,
            ExportRoot::Extracted(dir) => dir.path(),
        }
    }
}

pub fn is_zip_archive(path: &Path) -> bool {
    path.to_string_lossy().to_lowercase().ends_with(".zip")
}

pub fn stage(export_path: &Path) -> Result<ExportRoot> {
    if !is_zip_archive(export_path) {
        return Ok(ExportRoot::Directory(export_path.components().collect()));
    }

    let dir = tempfile::Builder::new()
        .prefix("grayjay-export-")
        .tempdir()?;

    let extracted = extract_zip(export_path, dir.path())?;
    info!(
        "Extracted {} files from {} to {}",
        extracted,
        export_path.display(),
        dir.path().display()
    );

    Ok(ExportRoot::Extracted(dir))
}

fn extract_zip(archive_path: &Path, dest_path: &Path) -> Result<usize> {
    let archive_error = |source| ConvertError::Archive {
        path: archive_path.to_path_buf(),
        source,
    };

    let file = fs::File::open(archive_path)?;
    let mut archive = zip::ZipArchive::new(file).map_err(archive_error)?;

    let mut count: usize = 0;
    for i in 0..archive.len() {
        let mut entry = archive.by_index(i).map_err(archive_error)?;

        let entry_path = match entry.enclosed_name() {
            Some(p) => p.to_path_buf(),
            None => {
                warn!("Skipping archive entry with unsafe path: {}", entry.name());
                continue;
            }
        };

        let output_path = dest_path.join(&entry_path);

        if entry.is_dir() {
            fs::create_dir_all(&output_path)?;
        } else {
            if let Some(parent) = output_path.parent() {
                fs::create_dir_all(parent)?;
            }
            let mut outfile = fs::File::create(&output_path)?;
            io::copy(&mut entry, &mut outfile)?;
            count += 1;
        }
    }

    Ok(count)
}
