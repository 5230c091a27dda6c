use std::path::{Path, PathBuf};

use crate::error::{ConvertError, Result};

pub const OUTPUT_DIR_NAME: &str = "converter_output";
pub const PLAYLISTS_DIR_NAME: &str = "playlists";

/// Everything a conversion run needs, resolved from the export path alone.
#[derive(Debug)]
pub struct Config {
    export_path: PathBuf,
    output_dir: PathBuf,
}

impl Config {
    pub fn new(export_path: &str) -> Result<Config> {
        let expanded = shellexpand::tilde(export_path.trim());

        let config = Config::from_path(PathBuf::from(expanded.as_ref()));

        config.validate().and(Ok(config))
    }

    /// Output goes next to the export, in `converter_output`.
    pub fn from_path(export_path: PathBuf) -> Config {
        let parent = export_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        let output_dir = parent.join(OUTPUT_DIR_NAME);

        Config {
            export_path,
            output_dir,
        }
    }

    pub fn get_export_path(&self) -> &Path {
        &self.export_path
    }

    pub fn get_output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn get_playlists_dir(&self) -> PathBuf {
        self.output_dir.join(PLAYLISTS_DIR_NAME)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.export_path.exists() {
            return Err(ConvertError::InvalidExportPath(self.export_path.clone()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod validation {
    use std::path::PathBuf;

    use tempfile::tempdir;

    use super::Config;

    #[test]
    fn it_should_reject_not_existing_export_path() -> () {
        let config = Config::from_path(PathBuf::from("/foobar/export.zip"));

        assert!(config.validate().is_err());
    }

    #[test]
    fn it_should_accept_existing_export_path() -> () {
        let dir = tempdir().unwrap();
        let export = dir.path().join("export");
        std::fs::create_dir(&export).unwrap();

        let config = Config::new(&export.to_string_lossy()).unwrap();

        assert_eq!(config.get_export_path(), export);
        assert_eq!(config.get_output_dir(), dir.path().join("converter_output"));
    }

    #[test]
    fn it_should_place_output_next_to_export() -> () {
        let config = Config::from_path(PathBuf::from("/data/exports/grayjay.zip"));

        assert_eq!(config.get_output_dir(), PathBuf::from("/data/exports/converter_output"));
        assert_eq!(
            config.get_playlists_dir(),
            PathBuf::from("/data/exports/converter_output/playlists")
        );
    }

    #[test]
    fn it_should_use_current_dir_for_bare_names() -> () {
        let config = Config::from_path(PathBuf::from("grayjay.zip"));

        assert_eq!(config.get_output_dir(), PathBuf::from("./converter_output"));
    }
}
