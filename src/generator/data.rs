use serde::Serialize;

#[derive(Debug)]
pub(super) struct EntryMetadata {
    pub date: chrono::NaiveDate,
    pub filename: String,
    pub title: String,
    pub subtitle: String,
}

#[derive(Serialize, Debug)]
pub(super) struct ListItem<'a> {
    pub date: chrono::NaiveDate,
    pub href: String,
    pub title: &'a str,
    pub meta: &'a str,
}

#[derive(Serialize, Debug)]
pub(super) struct ListPageData<'a> {
    /// Link from the shelf page up to the site root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_href: Option<String>,
    /// Link from the cover page to the entries directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entries_href: Option<String>,
    pub items: Vec<ListItem<'a>>,
}
