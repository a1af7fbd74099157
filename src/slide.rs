use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

const IMAGE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "bmp", "gif", "webp"];

/// Source descriptor for one slide, as authored in a config file or derived
/// from an image on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideSource {
    pub src: String,
    #[serde(default)]
    pub alt: String,
}

impl SlideSource {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self { src: src.into(), alt: alt.into() }
    }
}

/// A slide owned by a carousel. Immutable once the carousel is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    src: String,
    alt: String,
    index: usize,
}

impl Slide {
    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn alt(&self) -> &str {
        &self.alt
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

/// Turns source descriptors into indexed slides, in order.
pub fn build_slides(sources: impl IntoIterator<Item = SlideSource>) -> Vec<Slide> {
    sources
        .into_iter()
        .enumerate()
        .map(|(index, s)| Slide { src: s.src, alt: s.alt, index })
        .collect()
}

/// Alt text for an image file: the file stem with separators turned into spaces.
pub fn alt_from_file_stem(stem: &str) -> String {
    stem.split(['_', '-', '.'])
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Image files in `dir`, sorted by file name, as slide sources. The alt text
/// is derived from each file stem.
pub fn sources_from_dir(dir: &Path) -> Result<Vec<SlideSource>> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let is_image = path
            .extension()
            .and_then(|s| s.to_str())
            .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()));
        if is_image {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    if paths.is_empty() {
        return Err(Error::NoSlides(dir.display().to_string()));
    }

    Ok(paths
        .into_iter()
        .map(|path| {
            let alt = path
                .file_stem()
                .and_then(|s| s.to_str())
                .map(alt_from_file_stem)
                .unwrap_or_default();
            SlideSource::new(path.to_string_lossy(), alt)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slides_are_indexed_in_order() {
        let slides = build_slides(vec![
            SlideSource::new("a.jpg", "first"),
            SlideSource::new("b.jpg", "second"),
        ]);
        assert_eq!(slides.len(), 2);
        assert_eq!(slides[0].index(), 0);
        assert_eq!(slides[1].index(), 1);
        assert_eq!(slides[1].src(), "b.jpg");
        assert_eq!(slides[1].alt(), "second");
    }

    #[test]
    fn alt_text_from_stem() {
        assert_eq!(alt_from_file_stem("table_tennis-practice"), "table tennis practice");
        assert_eq!(alt_from_file_stem("__odd__"), "odd");
        assert_eq!(alt_from_file_stem(""), "");
    }

    #[test]
    fn alt_defaults_to_empty_when_missing() {
        let source: SlideSource = toml::from_str(r#"src = "x.png""#).unwrap();
        assert_eq!(source.alt, "");
    }

    #[test]
    fn directory_scan_sorts_and_filters() {
        let dir = std::env::temp_dir().join(format!("orbit-slides-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("b_second.JPG"), b"").unwrap();
        fs::write(dir.join("a-first.png"), b"").unwrap();
        fs::write(dir.join("notes.txt"), b"").unwrap();

        let sources = sources_from_dir(&dir).unwrap();
        fs::remove_dir_all(&dir).unwrap();

        assert_eq!(sources.len(), 2);
        assert!(sources[0].src.ends_with("a-first.png"));
        assert_eq!(sources[0].alt, "a first");
        assert_eq!(sources[1].alt, "b second");
    }

    #[test]
    fn directory_without_images_is_an_error() {
        let dir = std::env::temp_dir().join(format!("orbit-empty-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let result = sources_from_dir(&dir);
        fs::remove_dir_all(&dir).unwrap();
        assert!(matches!(result, Err(Error::NoSlides(_))));
    }
}
