use crate::{ResourceError, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Directory holding game assets, relative to a search root.
pub const ASSET_DIR: &str = "assets";

/// Candidate asset directories, in lookup order: the working directory first,
/// then the directory holding the executable.
pub fn search_roots() -> Vec<PathBuf> {
    let mut roots = Vec::with_capacity(2);
    if let Ok(cwd) = env::current_dir() {
        roots.push(cwd.join(ASSET_DIR));
    }
    if let Some(dir) = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        let candidate = dir.join(ASSET_DIR);
        if !roots.contains(&candidate) {
            roots.push(candidate);
        }
    }
    roots
}

/// Resolves `relative` against the default search roots.
pub fn locate(relative: &str) -> Result<PathBuf> {
    locate_in(&search_roots(), relative)
}

pub fn locate_in(roots: &[PathBuf], relative: &str) -> Result<PathBuf> {
    for root in roots {
        let candidate = root.join(relative);
        if candidate.is_file() {
            log::debug!("asset {relative} resolved to {}", candidate.display());
            return Ok(candidate);
        }
    }
    let searched = roots
        .iter()
        .map(|r| r.display().to_string())
        .collect::<Vec<_>>()
        .join(", ");
    Err(ResourceError::NotFound {
        name: relative.to_string(),
        searched,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("color-game-assets-{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn locate_prefers_first_root_that_has_the_file() {
        let first = scratch_dir("first");
        let second = scratch_dir("second");
        fs::create_dir_all(second.join("img")).unwrap();
        fs::write(second.join("img/intro.png"), b"x").unwrap();

        let found = locate_in(&[first.clone(), second.clone()], "img/intro.png").unwrap();
        assert_eq!(found, second.join("img/intro.png"));

        fs::create_dir_all(first.join("img")).unwrap();
        fs::write(first.join("img/intro.png"), b"x").unwrap();
        let found = locate_in(&[first.clone(), second.clone()], "img/intro.png").unwrap();
        assert_eq!(found, first.join("img/intro.png"));

        fs::remove_dir_all(first).unwrap();
        fs::remove_dir_all(second).unwrap();
    }

    #[test]
    fn locate_reports_every_searched_root() {
        let root = scratch_dir("missing");
        let err = locate_in(&[root.clone()], "fonts/nope.ttf").unwrap_err();
        match err {
            ResourceError::NotFound { name, searched } => {
                assert_eq!(name, "fonts/nope.ttf");
                assert!(searched.contains(&root.display().to_string()));
            }
            other => panic!("unexpected error: {other}"),
        }
        fs::remove_dir_all(root).unwrap();
    }

    #[test]
    fn directories_are_not_assets() {
        let root = scratch_dir("dir");
        fs::create_dir_all(root.join("img")).unwrap();
        assert!(locate_in(&[root.clone()], "img").is_err());
        fs::remove_dir_all(root).unwrap();
    }
}
