use std::path::{Path, PathBuf};

/// A rendered dashboard and where it goes.
#[derive(Debug, Clone)]
pub struct Artifact {
    html: String,
    path: PathBuf,
}

impl Artifact {
    pub fn new(html: String, path: PathBuf) -> Self {
        Self { html, path }
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.html.len()
    }

    pub fn is_empty(&self) -> bool {
        self.html.is_empty()
    }
}
