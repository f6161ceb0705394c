//! Test helpers for temporary catalog files.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// A temporary directory addressed with UTF-8 paths.
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.path(name);
        write_utf8(&path, contents.as_bytes());
        path
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write test file");
}

/// Two destinations far apart on every axis.
pub(super) const TWO_DESTINATIONS: &str = r#"[
  {"id":"dunhuang","name":"Dunhuang","label":"Oasis","summary":"Desert caves.",
   "profile":{"history":95,"natureUrban":10,"culturalComfort":85,
              "activityLevel":80,"socialVibe":15,"adventure":90}},
  {"id":"shanghai","name":"Shanghai","label":"Skyline","summary":"Towers.",
   "profile":{"history":45,"natureUrban":100,"culturalComfort":30,
              "activityLevel":55,"socialVibe":95,"adventure":25}}
]"#;
