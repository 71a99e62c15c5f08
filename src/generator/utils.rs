use std::{borrow::Borrow, cmp::Ordering, sync::LazyLock};

use chrono::NaiveDate;
use regex::Regex;

use super::data::EntryMetadata;

static ENTRY_FILE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}\.html$").expect("valid entry pattern"));

/// A pair of literal opening/closing tags marking a field inside an entry page.
#[derive(Debug, Clone, Copy)]
pub(super) struct Anchor {
    pub open: &'static str,
    pub close: &'static str,
}

pub(super) const TITLE_ANCHOR: Anchor = Anchor {
    open: "<h1 class=\"title\">",
    close: "</h1>",
};

pub(super) const SUBTITLE_ANCHOR: Anchor = Anchor {
    open: "<p class=\"subtitle\">",
    close: "</p>",
};

impl Anchor {
    /// Raw text between the first `open` and the first `close` after it.
    pub fn find<'a>(&self, html: &'a str) -> Option<&'a str> {
        let start = html.find(self.open)? + self.open.len();
        let len = html[start..].find(self.close)?;
        Some(&html[start..start + len])
    }

    /// Like [`Anchor::find`], with nested tags and surrounding whitespace removed.
    pub fn extract(&self, html: &str) -> Option<String> {
        self.find(html).map(|raw| strip_tags(raw).trim().to_string())
    }
}

/// Removes every `<...>` run holding at least one character (`<` included).
/// A `<` with no closing `>`, or an empty `<>`, is kept as text.
pub(super) fn strip_tags(s: &str) -> String {
    let mut res = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(lt) = rest.find('<') {
        res.push_str(&rest[..lt]);
        let after = &rest[lt + 1..];
        match after.find('>') {
            Some(gt) if gt > 0 => rest = &after[gt + 1..],
            _ => {
                res.push('<');
                rest = after;
            }
        }
    }
    res.push_str(rest);
    res
}

/// Date of an entry file, or `None` when the name is not a dated entry.
pub(super) fn parse_entry_file_name(name: &str) -> Option<NaiveDate> {
    if !ENTRY_FILE_NAME.is_match(name) {
        return None;
    }
    let stem = name.strip_suffix(".html")?;
    NaiveDate::parse_from_str(stem, "%Y-%m-%d").ok()
}

// newest first. same date: by file name.
pub(super) fn sort_entry<T: Borrow<EntryMetadata>>(a: &T, b: &T) -> Ordering {
    let (a, b) = (a.borrow(), b.borrow());
    b.date.cmp(&a.date).then_with(|| a.filename.cmp(&b.filename))
}
