use std::path::{Component, Path, PathBuf};

#[derive(Debug)]
pub(crate) struct Context {
    pub root_dir: PathBuf,
    /// Relative to `root_dir`.
    pub entries_dir: PathBuf,

    pub latest_count: usize,

    pub handlebars: handlebars::Handlebars<'static>,
}

impl Context {
    pub fn new(
        root_dir: PathBuf,
        entries_dir: PathBuf,
        latest_count: usize,
        handlebars: handlebars::Handlebars<'static>,
    ) -> Self {
        Self {
            root_dir,
            entries_dir,
            latest_count,
            handlebars,
        }
    }

    pub fn entries_path(&self) -> PathBuf {
        self.root_dir.join(&self.entries_dir)
    }

    pub fn shelf_path(&self) -> PathBuf {
        self.entries_path().join("index.html")
    }

    pub fn cover_path(&self) -> PathBuf {
        self.root_dir.join("index.html")
    }

    /// Prefix prepended to entry file names on the cover page, e.g. `entries/`.
    pub fn cover_link_prefix(&self) -> String {
        link_prefix(&self.entries_dir)
    }

    /// Link from the shelf page back up to `root_dir`, e.g. `../`.
    pub fn root_href(&self) -> String {
        root_href(&self.entries_dir)
    }
}

fn link_prefix(dir: &Path) -> String {
    let mut res = String::new();
    for c in dir.components() {
        if let Component::Normal(name) = c {
            res.push_str(&name.to_string_lossy());
            res.push('/');
        }
    }
    res
}

fn root_href(dir: &Path) -> String {
    dir.components()
        .filter(|c| matches!(c, Component::Normal(_)))
        .map(|_| "../")
        .collect()
}
