//! Shared test utilities for the folio test suite.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let data = sample_data();
//! let project = find_project(&data, "Flood Extent Mapper");
//! assert_eq!(project.tags, vec!["PyTorch", "SAR", "U-Net"]);
//!
//! let tmp = setup_fixtures();
//! let report = generate(tmp.path(), out.path()).unwrap();
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::types::{Project, SiteData};

/// The fixture data document, parsed.
///
/// Two projects (one legacy `link`, one `links` array), three publications
/// (`links` array, legacy `link`, none), two jobs, three skill groups and
/// two resume variants.
pub fn sample_data() -> SiteData {
    let json = include_str!("../fixtures/site/data.json");
    crate::source::parse(json).unwrap()
}

/// Copy `fixtures/site/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/site");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Find a project by title. Panics if not found.
pub fn find_project<'a>(data: &'a SiteData, title: &str) -> &'a Project {
    data.projects
        .iter()
        .find(|p| p.title == title)
        .unwrap_or_else(|| {
            let titles: Vec<&str> = data.projects.iter().map(|p| p.title.as_str()).collect();
            panic!("project '{title}' not found. Available: {titles:?}")
        })
}

/// Number of non-overlapping occurrences of `needle` in `haystack`.
pub fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}
