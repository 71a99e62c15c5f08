use std::path::Path;

use anyhow::Context;
use handlebars::Handlebars;

const SHELF_TEMPLATE: &str = include_str!("../template/shelf.hbs");
const COVER_TEMPLATE: &str = include_str!("../template/cover.hbs");

/// Registers the `shelf` and `cover` templates, from `template_dir` when given.
pub(super) fn generate_renderer(
    template_dir: Option<&Path>,
) -> anyhow::Result<Handlebars<'static>> {
    let mut handlebars = handlebars::Handlebars::new();
    match template_dir {
        Some(template_dir) => {
            handlebars
                .register_template_file("shelf", template_dir.join("shelf.hbs"))
                .context("shelf.hbs")?;
            handlebars
                .register_template_file("cover", template_dir.join("cover.hbs"))
                .context("cover.hbs")?;
        }
        None => {
            handlebars
                .register_template_string("shelf", SHELF_TEMPLATE)
                .context("built-in shelf template")?;
            handlebars
                .register_template_string("cover", COVER_TEMPLATE)
                .context("built-in cover template")?;
        }
    }

    Ok(handlebars)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_templates_register() {
        let handlebars = generate_renderer(None).unwrap();
        assert!(handlebars.has_template("shelf"));
        assert!(handlebars.has_template("cover"));
    }

    #[test]
    fn template_dir_overrides_built_in() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("shelf.hbs"),
            "S{{#each items}}[{{{href}}}]{{/each}}",
        )
        .unwrap();
        std::fs::write(dir.path().join("cover.hbs"), "C").unwrap();

        let handlebars = generate_renderer(Some(dir.path())).unwrap();
        let data = one_item();
        assert_eq!(handlebars.render("shelf", &data).unwrap(), "S[a.html]");
        assert_eq!(handlebars.render("cover", &data).unwrap(), "C");
    }

    #[test]
    fn missing_template_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("shelf.hbs"), "S").unwrap();

        let err = generate_renderer(Some(dir.path())).unwrap_err();
        assert!(format!("{err:#}").contains("cover.hbs"));
    }

    #[derive(serde::Serialize)]
    struct Item {
        href: &'static str,
    }

    #[derive(serde::Serialize)]
    struct Items {
        items: Vec<Item>,
    }

    fn one_item() -> Items {
        Items {
            items: vec![Item { href: "a.html" }],
        }
    }
}
