//! The image store: filename-to-pixels resolution over a fixed directory.
//!
//! The store is read-only and cache-free. Every call hits the filesystem, so
//! the listing always reflects the current directory contents; the image set
//! is small and local, and staleness would confuse a classroom more than the
//! extra reads cost.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::convert::buffer_from_gray;
use crate::error::Error;
use crate::models::AppConfig;
use luma_ops::GrayBuffer;

/// Extensions the listing considers. Loading by explicit filename accepts
/// anything the decoder recognizes.
const LISTED_EXTENSIONS: [&str; 4] = ["tif", "tiff", "png", "jpg"];

/// One listed image with its metadata.
#[derive(Debug, Clone, Serialize)]
pub struct ImageEntry {
    pub filename: String,
    pub width: u32,
    pub height: u32,
    /// File size in kilobytes, rounded to one decimal.
    pub size_kb: f64,
    /// Human-readable label parsed from the filename.
    pub display_name: String,
}

/// Resolves filenames to grayscale pixel data from a fixed base directory.
#[derive(Debug, Clone)]
pub struct ImageStore {
    base_dir: PathBuf,
}

impl ImageStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.images_dir.clone())
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Loads an image as 8-bit grayscale.
    ///
    /// Color inputs are converted to luma. Fails with
    /// [`Error::NotFound`] when the file is missing, escapes the base
    /// directory, or cannot be decoded.
    pub fn load(&self, filename: &str) -> Result<GrayBuffer, Error> {
        let path = self.resolve(filename)?;
        let img = image::open(&path)
            .map_err(|e| {
                tracing::debug!(%filename, %e, "Failed to decode image");
                Error::NotFound(filename.to_string())
            })?
            .to_luma8();
        Ok(buffer_from_gray(&img))
    }

    /// Size of the raw file on disk in kilobytes, rounded to one decimal.
    pub fn file_size_kb(&self, filename: &str) -> Result<f64, Error> {
        let path = self.resolve(filename)?;
        let bytes = fs::metadata(&path)?.len();
        Ok((bytes as f64 / 1024.0 * 10.0).round() / 10.0)
    }

    /// Size of the raw file on disk in bytes.
    pub fn file_size_bytes(&self, filename: &str) -> Result<u64, Error> {
        let path = self.resolve(filename)?;
        Ok(fs::metadata(&path)?.len())
    }

    /// Lists decodable images in the base directory, sorted by filename.
    ///
    /// Files that fail to decode are skipped rather than failing the whole
    /// listing; a course image set frequently carries stray files.
    pub fn list_available(&self) -> Vec<ImageEntry> {
        let mut names: Vec<String> = Vec::new();
        if let Ok(entries) = fs::read_dir(&self.base_dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                let listed = path
                    .extension()
                    .and_then(|e| e.to_str())
                    .map(|e| LISTED_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
                    .unwrap_or(false);
                if !listed {
                    continue;
                }
                if let Some(name) = entry.file_name().to_str() {
                    names.push(name.to_string());
                }
            }
        }
        names.sort();

        let mut images = Vec::with_capacity(names.len());
        for filename in names {
            let Ok(buf) = self.load(&filename) else {
                tracing::debug!(%filename, "Skipping undecodable file in listing");
                continue;
            };
            let size_kb = self.file_size_kb(&filename).unwrap_or(0.0);
            images.push(ImageEntry {
                display_name: display_label(&filename),
                width: buf.width() as u32,
                height: buf.height() as u32,
                size_kb,
                filename,
            });
        }
        images
    }

    /// Resolves a filename inside the base directory, rejecting anything
    /// that could walk out of it.
    fn resolve(&self, filename: &str) -> Result<PathBuf, Error> {
        let candidate = Path::new(filename);
        let escapes = candidate.is_absolute()
            || candidate
                .components()
                .any(|c| !matches!(c, std::path::Component::Normal(_)));
        if escapes {
            return Err(Error::InvalidInput(format!(
                "filename must be a plain file name: {filename}"
            )));
        }
        let path = self.base_dir.join(candidate);
        if !path.exists() {
            return Err(Error::NotFound(filename.to_string()));
        }
        Ok(path)
    }
}

/// Extracts a human-readable label from a course filename.
///
/// `"Fig0228(a)(angiography_mask_image).tif"` becomes
/// `"Fig0228: a - angiography_mask_image"`: the part before the first `(`
/// is the figure id, the rest (minus one trailing `)`) is the description
/// with remaining parentheses flattened to `" - "` separators. Filenames
/// without parentheses come back as the bare stem.
pub fn display_label(filename: &str) -> String {
    let name = filename
        .rsplit_once('.')
        .map(|(stem, _)| stem)
        .unwrap_or(filename);
    match name.split_once('(') {
        Some((fig, rest)) => {
            let fig = fig.trim();
            let desc = rest
                .strip_suffix(')')
                .unwrap_or(rest)
                .replace('(', " - ")
                .replace(')', "");
            format!("{fig}: {desc}")
        }
        None => name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_with_two_parenthesized_parts() {
        assert_eq!(
            display_label("Fig0228(a)(angiography_mask_image).tif"),
            "Fig0228: a - angiography_mask_image"
        );
    }

    #[test]
    fn test_label_with_single_group() {
        assert_eq!(display_label("Fig0219(rose1024).tif"), "Fig0219: rose1024");
    }

    #[test]
    fn test_label_with_spaces() {
        assert_eq!(
            display_label("Fig0241(a)(einstein low contrast).tif"),
            "Fig0241: a - einstein low contrast"
        );
    }

    #[test]
    fn test_label_without_parentheses() {
        assert_eq!(display_label("lenna.tif"), "lenna");
    }

    #[test]
    fn test_resolve_rejects_traversal() {
        let store = ImageStore::new("images");
        assert!(matches!(
            store.load("../etc/passwd"),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            store.load("/etc/passwd"),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = ImageStore::new(dir.path());
        assert!(matches!(
            store.load("absent.tif"),
            Err(Error::NotFound(_))
        ));
    }
}
