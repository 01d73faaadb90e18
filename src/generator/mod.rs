//! Generator module - writes entry pages and regenerates the aggregate pages

use std::fs;
use std::path::PathBuf;

use crate::content::Entry;
use crate::error::Result;
use crate::helpers::current_year;
use crate::store::EntryStore;
use crate::templates;
use crate::Blog;

/// Renders pages for one blog and writes them into its directory layout
pub struct Generator<'a> {
    blog: &'a Blog,
}

impl<'a> Generator<'a> {
    /// Create a new generator
    pub fn new(blog: &'a Blog) -> Self {
        Self { blog }
    }

    /// Render a single entry's page and write it under the entries
    /// directory. An existing page with the same slug is overwritten.
    pub fn write_entry_page(&self, entry: &Entry) -> Result<PathBuf> {
        let config = &self.blog.config;
        let year = current_year();
        let html = templates::render(
            templates::ENTRY_PAGE,
            &[
                ("language", config.language.as_str()),
                ("theme", config.default_theme.as_str()),
                ("site_title", config.title.as_str()),
                ("author", config.author.as_str()),
                ("year", year.as_str()),
                ("date", entry.date.as_str()),
                ("title", entry.title.as_str()),
                ("content", entry.content.as_str()),
            ],
        );

        let path = self.blog.entries_dir.join(entry.file_name());
        fs::write(&path, html)?;
        tracing::debug!("Wrote entry page {:?}", path);
        Ok(path)
    }

    /// Rewrite the homepage with the most recent entry. With no entries
    /// there is nothing to show and the homepage is left untouched.
    pub fn update_index(&self, store: &EntryStore) -> Result<()> {
        let latest = match store.latest() {
            Some(entry) => entry,
            None => return Ok(()),
        };

        let config = &self.blog.config;
        let year = current_year();
        let html = templates::render(
            templates::INDEX_PAGE,
            &[
                ("language", config.language.as_str()),
                ("theme", config.default_theme.as_str()),
                ("site_title", config.title.as_str()),
                ("author", config.author.as_str()),
                ("year", year.as_str()),
                ("date", latest.date.as_str()),
                ("title", latest.title.as_str()),
                ("content", latest.content.as_str()),
            ],
        );

        fs::write(self.blog.base_dir.join("index.html"), html)?;
        Ok(())
    }

    /// Rewrite the archive page, listing every entry newest first
    pub fn update_archive(&self, store: &EntryStore) -> Result<()> {
        let mut items = String::new();
        for entry in store.entries() {
            items.push_str(&templates::render(
                templates::ARCHIVE_ITEM,
                &[
                    ("date", entry.date.as_str()),
                    ("slug", entry.slug.as_str()),
                    ("title", entry.title.as_str()),
                ],
            ));
        }

        let config = &self.blog.config;
        let year = current_year();
        let html = templates::render(
            templates::ARCHIVE_PAGE,
            &[
                ("language", config.language.as_str()),
                ("theme", config.default_theme.as_str()),
                ("site_title", config.title.as_str()),
                ("author", config.author.as_str()),
                ("year", year.as_str()),
                ("items", items.as_str()),
            ],
        );

        fs::write(self.blog.base_dir.join("archive.html"), html)?;
        Ok(())
    }

    /// Regenerate both aggregate pages from the store
    pub fn regenerate(&self, store: &EntryStore) -> Result<()> {
        self.update_index(store)?;
        self.update_archive(store)?;
        tracing::info!("Updated index.html and archive.html");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blog_in(dir: &std::path::Path) -> Blog {
        let blog = Blog::open(dir).unwrap();
        blog.prepare().unwrap();
        blog
    }

    fn seeded_store(dir: &std::path::Path, titles: &[&str]) -> EntryStore {
        let mut store = EntryStore::load(dir).unwrap();
        for title in titles {
            store.prepend(Entry::new(
                title.to_string(),
                format!("thoughts on {}", title),
                "May 01, 2024".to_string(),
            ));
        }
        store
    }

    #[test]
    fn test_entry_page_interpolates_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let blog = blog_in(dir.path());
        let entry = Entry::new(
            "Markup & Such".to_string(),
            "a <b>bold</b> claim".to_string(),
            "May 01, 2024".to_string(),
        );

        let path = Generator::new(&blog).write_entry_page(&entry).unwrap();
        let html = fs::read_to_string(path).unwrap();
        // Nothing is escaped: titles and bodies land in the page as-is.
        assert!(html.contains("<h2 class=\"entry-title\">Markup & Such</h2>"));
        assert!(html.contains("a <b>bold</b> claim"));
        assert!(html.contains("../assets/styles.css"));
    }

    #[test]
    fn test_index_shows_latest_entry() {
        let dir = tempfile::tempdir().unwrap();
        let blog = blog_in(dir.path());
        let store = seeded_store(dir.path(), &["Older", "Newer"]);

        Generator::new(&blog).update_index(&store).unwrap();
        let html = fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(html.contains("Newer"));
        assert!(!html.contains("Older"));
    }

    #[test]
    fn test_index_untouched_when_no_entries() {
        let dir = tempfile::tempdir().unwrap();
        let blog = blog_in(dir.path());
        let store = EntryStore::load(dir.path()).unwrap();

        Generator::new(&blog).update_index(&store).unwrap();
        assert!(!dir.path().join("index.html").exists());
    }

    #[test]
    fn test_archive_lists_all_entries_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        let blog = blog_in(dir.path());
        let store = seeded_store(dir.path(), &["First", "Second", "Third"]);

        Generator::new(&blog).update_archive(&store).unwrap();
        let html = fs::read_to_string(dir.path().join("archive.html")).unwrap();

        assert_eq!(html.matches("<li class=\"archive-item\">").count(), 3);
        assert_eq!(
            html.matches("<li class=\"archive-item\">").count(),
            html.matches("</li>").count()
        );

        let third = html.find("entries/third.html").unwrap();
        let second = html.find("entries/second.html").unwrap();
        let first = html.find("entries/first.html").unwrap();
        assert!(third < second && second < first);
    }

    #[test]
    fn test_archive_written_even_when_empty() {
        let dir = tempfile::tempdir().unwrap();
        let blog = blog_in(dir.path());
        let store = EntryStore::load(dir.path()).unwrap();

        Generator::new(&blog).update_archive(&store).unwrap();
        let html = fs::read_to_string(dir.path().join("archive.html")).unwrap();
        assert_eq!(html.matches("<li class=\"archive-item\">").count(), 0);
    }

    #[test]
    fn test_configured_theme_reaches_the_page() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("_config.yml"), "default_theme: light\n").unwrap();
        let blog = blog_in(dir.path());
        let store = seeded_store(dir.path(), &["Only"]);

        Generator::new(&blog).update_index(&store).unwrap();
        let html = fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(html.contains("data-theme=\"light\""));
        assert!(html.contains("localStorage.getItem('theme') || 'light'"));
    }
}
