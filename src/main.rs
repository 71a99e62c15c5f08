use std::path::{Component, Path, PathBuf};

use anyhow::{bail, Context as _};
use clap::{command, Arg};
use context::Context;
use generator::generate;
use log::info;

mod context;
mod generator;
mod renderer;

fn is_plain_relative(path: &Path) -> bool {
    path.components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
        && path.components().any(|c| matches!(c, Component::Normal(_)))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let matches = command!()
        .about("Rebuilds the shelf and cover index pages from dated entry files")
        .args(&[
            Arg::new("root_dir")
                .help("Root directory of the site. The cover page (index.html) is written here.")
                .value_parser(clap::value_parser!(PathBuf))
                .default_value("."),
            Arg::new("entries_dir")
                .help("Directory of dated entries (YYYY-MM-DD.html), relative to root_dir. The shelf page is written here.")
                .value_parser(clap::value_parser!(PathBuf))
                .default_value("entries"),
            Arg::new("latest")
                .long("latest")
                .help("Number of entries listed on the cover page")
                .value_parser(clap::value_parser!(usize))
                .default_value("10"),
            Arg::new("template_dir")
                .long("template-dir")
                .help("Directory containing shelf.hbs and cover.hbs to use instead of the built-in templates")
                .value_parser(clap::value_parser!(PathBuf)),
        ])
        .get_matches();

    let root_dir: &PathBuf = matches.get_one("root_dir").context("root_dir")?;
    if !root_dir.is_dir() {
        bail!("root_dir must be a directory.");
    }
    let entries_dir: &PathBuf = matches.get_one("entries_dir").context("entries_dir")?;
    if !is_plain_relative(entries_dir) {
        bail!("entries_dir must be a relative path below root_dir.");
    }
    if !root_dir.join(entries_dir).is_dir() {
        bail!("entries_dir must be a directory.");
    }
    let latest_count = *matches.get_one::<usize>("latest").context("latest")?;

    let template_dir: Option<&PathBuf> = matches.get_one("template_dir");
    if let Some(template_dir) = template_dir {
        if !template_dir.is_dir() {
            bail!("template_dir must be a directory.");
        }
    }
    let handlebars = renderer::generate_renderer(template_dir.map(PathBuf::as_path))?;

    let ctx = Context::new(
        root_dir.to_owned(),
        entries_dir.to_owned(),
        latest_count,
        handlebars,
    );
    let count = generate(&ctx)?;
    info!("listed {count} entries");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_dir_must_stay_below_root() {
        assert!(is_plain_relative(Path::new("entries")));
        assert!(is_plain_relative(Path::new("./site/entries")));
        assert!(!is_plain_relative(Path::new(".")));
        assert!(!is_plain_relative(Path::new("../entries")));
        assert!(!is_plain_relative(Path::new("/entries")));
    }
}
