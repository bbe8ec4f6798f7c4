//! Team photo lookup under the configured asset directory.
//!
//! Photos live at `<assets>/team/<lowercased first name>.png`. A photo that is
//! missing on disk degrades to [`PLACEHOLDER_SVG`] so the roster still renders.

use std::{
    io,
    path::{Path, PathBuf},
};

use anyhow::{Result, bail};
use thiserror::Error;

pub(crate) const TEAM_DIR: &str = "team";
pub(crate) const TEAM_URL_PREFIX: &str = "/assets/team";

/// Grey silhouette served in place of a missing photo.
pub(crate) const PLACEHOLDER_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="40" height="40" viewBox="0 0 40 40"><rect width="40" height="40" rx="20" fill="#cbd5e1"/><circle cx="20" cy="15" r="7" fill="#f8fafc"/><path d="M7 35c2-8 7-11 13-11s11 3 13 11" fill="#f8fafc"/></svg>"##;

#[derive(Debug, Error)]
pub(crate) enum AssetError {
    #[error("asset {path:?} does not exist")]
    Missing { path: PathBuf },
    #[error("invalid asset name {name:?}")]
    InvalidName { name: String },
    #[error("failed to read asset {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Public URL of a team member's photo.
pub(crate) fn team_photo_url(name: &str) -> String {
    format!("{TEAM_URL_PREFIX}/{}.png", name.to_lowercase())
}

/// Map a requested file name onto a path inside `<assets>/team`.
///
/// Only flat `<name>.png` file names made of lowercase letters, digits, `-`
/// and `_` are accepted.
pub(crate) fn resolve_team_photo(assets_dir: &Path, file: &str) -> Result<PathBuf, AssetError> {
    let stem = file.strip_suffix(".png").unwrap_or_default();
    let valid = !stem.is_empty()
        && stem
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_');
    if !valid {
        return Err(AssetError::InvalidName {
            name: file.to_string(),
        });
    }
    Ok(assets_dir.join(TEAM_DIR).join(file))
}

pub(crate) async fn load_team_photo(
    assets_dir: &Path,
    file: &str,
) -> Result<Vec<u8>, AssetError> {
    let path = resolve_team_photo(assets_dir, file)?;
    match tokio::fs::read(&path).await {
        Ok(bytes) => Ok(bytes),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Err(AssetError::Missing { path }),
        Err(source) => Err(AssetError::Io { path, source }),
    }
}

/// Fail startup when the asset directory is absent.
pub(crate) fn ensure_assets_dir(assets_dir: &Path) -> Result<()> {
    if !assets_dir.is_dir() {
        bail!("asset directory {} does not exist", assets_dir.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn photo_urls_use_lowercased_names() {
        assert_eq!(team_photo_url("Gabriel"), "/assets/team/gabriel.png");
        assert_eq!(team_photo_url("Zhe"), "/assets/team/zhe.png");
    }

    #[test]
    fn resolves_flat_png_names() {
        let path = resolve_team_photo(Path::new("assets"), "ines.png").unwrap();
        assert_eq!(path, Path::new("assets").join("team").join("ines.png"));
    }

    #[test]
    fn rejects_traversal_and_other_extensions() {
        for name in [
            "../secret.png",
            "ines.jpg",
            ".png",
            "Ines.png",
            "a/b.png",
            "ines.png.bak",
        ] {
            assert!(
                matches!(
                    resolve_team_photo(Path::new("assets"), name),
                    Err(AssetError::InvalidName { .. })
                ),
                "{name}"
            );
        }
    }

    #[actix_web::test]
    async fn missing_photo_is_reported_as_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_team_photo(dir.path(), "romain.png").await.unwrap_err();
        assert!(matches!(err, AssetError::Missing { .. }));
    }

    #[actix_web::test]
    async fn reads_existing_photo() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join(TEAM_DIR)).unwrap();
        std::fs::write(dir.path().join(TEAM_DIR).join("sophie.png"), b"png").unwrap();
        let bytes = load_team_photo(dir.path(), "sophie.png").await.unwrap();
        assert_eq!(bytes, b"png");
    }

    #[test]
    fn startup_requires_assets_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ensure_assets_dir(dir.path()).is_ok());
        assert!(ensure_assets_dir(&dir.path().join("nope")).is_err());
    }
}
