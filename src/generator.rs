use std::{
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use chrono::NaiveDate;
use log::{debug, info, warn};

use crate::context::Context;

mod data;
mod utils;

use data::{EntryMetadata, ListItem, ListPageData};
use utils::{parse_entry_file_name, sort_entry, SUBTITLE_ANCHOR, TITLE_ANCHOR};

const SHELF_PLACEHOLDER: &str = "The latest page.";
const COVER_PLACEHOLDER: &str = "A page from the road.";

/// Dated entry files directly under `entries_path`, in directory order.
fn discover(entries_path: &Path) -> anyhow::Result<Vec<(NaiveDate, String)>> {
    let mut found = vec![];
    let read_dir = fs::read_dir(entries_path)
        .with_context(|| format!("while reading {:?}", entries_path))?;
    for entry in read_dir {
        let entry = entry.with_context(|| format!("while reading {:?}", entries_path))?;
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            debug!("{file_name:?} is not valid UTF-8. ignoring...");
            continue;
        };
        if name == "index.html" {
            continue;
        }
        let Some(date) = parse_entry_file_name(name) else {
            debug!("{name} is not a dated entry. ignoring...");
            continue;
        };
        if !entry.path().is_file() {
            debug!("{name} is not a file. ignoring...");
            continue;
        }
        found.push((date, name.to_string()));
    }

    Ok(found)
}

fn preprocess_file(
    entries_path: &Path,
    date: NaiveDate,
    filename: String,
) -> anyhow::Result<EntryMetadata> {
    let path = entries_path.join(&filename);
    let content = fs::read_to_string(&path)?;

    let stem = filename.strip_suffix(".html").unwrap_or(&filename);
    let title = TITLE_ANCHOR
        .extract(&content)
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| stem.to_string());
    let subtitle = SUBTITLE_ANCHOR.extract(&content).unwrap_or_default();

    Ok(EntryMetadata {
        date,
        filename,
        title,
        subtitle,
    })
}

/// Every readable entry under `entries_path`, newest first.
fn collect_entries(entries_path: &Path) -> anyhow::Result<Vec<EntryMetadata>> {
    let mut entries = vec![];
    for (date, filename) in discover(entries_path)? {
        let display_name = filename.clone();
        match preprocess_file(entries_path, date, filename)
            .with_context(|| format!("while preprocessing {display_name:?}"))
        {
            Ok(entry) => entries.push(entry),
            Err(e) => warn!("{e:#}. skipping..."),
        }
    }
    entries.sort_by(sort_entry);

    Ok(entries)
}

fn list_items<'a>(
    entries: &'a [EntryMetadata],
    href_prefix: &str,
    placeholder: &'a str,
) -> Vec<ListItem<'a>> {
    entries
        .iter()
        .map(|entry| ListItem {
            date: entry.date,
            href: format!("{href_prefix}{}", entry.filename),
            title: &entry.title,
            meta: if entry.subtitle.is_empty() {
                placeholder
            } else {
                &entry.subtitle
            },
        })
        .collect()
}

/// Renders `(shelf, cover)`.
fn render_pages(ctx: &Context, entries: &[EntryMetadata]) -> anyhow::Result<(String, String)> {
    let prefix = ctx.cover_link_prefix();

    let shelf_data = ListPageData {
        root_href: Some(ctx.root_href()),
        entries_href: None,
        items: list_items(entries, "", SHELF_PLACEHOLDER),
    };
    let shelf = ctx
        .handlebars
        .render("shelf", &shelf_data)
        .context("while rendering the shelf page")?;

    let latest = &entries[..entries.len().min(ctx.latest_count)];
    let cover_data = ListPageData {
        root_href: None,
        entries_href: Some(prefix.clone()),
        items: list_items(latest, &prefix, COVER_PLACEHOLDER),
    };
    let cover = ctx
        .handlebars
        .render("cover", &cover_data)
        .context("while rendering the cover page")?;

    Ok((shelf, cover))
}

/// Replaces `path` with `contents` through a sibling temporary file.
fn write_replacing(path: &Path, contents: &str) -> anyhow::Result<()> {
    let mut tmp: OsString = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    fs::write(&tmp, contents).with_context(|| format!("while writing {:?}", tmp))?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e).with_context(|| format!("while replacing {:?}", path));
    }
    info!("wrote {path:?}");

    Ok(())
}

/// Rebuilds the shelf and cover pages. Returns the number of entries listed.
pub(crate) fn generate(ctx: &Context) -> anyhow::Result<usize> {
    let entries = collect_entries(&ctx.entries_path())?;
    info!("found {} entries", entries.len());

    // nothing touches the disk until both pages are rendered
    let (shelf, cover) = render_pages(ctx, &entries)?;
    write_replacing(&ctx.shelf_path(), &shelf)?;
    write_replacing(&ctx.cover_path(), &cover)?;

    Ok(entries.len())
}
