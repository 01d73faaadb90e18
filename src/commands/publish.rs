//! Publish a new entry from a text file

use std::fs;
use std::path::Path;

use chrono::Local;

use crate::content::{parse_entry, Entry};
use crate::error::{Error, Result};
use crate::generator::Generator;
use crate::helpers::format_date;
use crate::store::EntryStore;
use crate::Blog;

/// Process an entry file end to end: parse it, write its page, prepend it
/// to the entry list, and regenerate the homepage and archive.
///
/// The page is written before the list is saved; a failure in between
/// leaves the page orphaned from the list. Nothing is rolled back.
pub fn run(blog: &Blog, file: &Path) -> Result<Entry> {
    blog.prepare()?;

    if !file.exists() {
        return Err(Error::FileNotFound(file.to_path_buf()));
    }

    let raw = fs::read_to_string(file)?;
    let (title, body) = parse_entry(&raw)?;

    let date = format_date(&Local::now(), &blog.config.date_format);
    let entry = Entry::new(title, body, date);

    let generator = Generator::new(blog);
    let page_path = generator.write_entry_page(&entry)?;
    tracing::info!("Created entry file: {:?}", page_path);

    let mut store = EntryStore::load(&blog.base_dir)?;
    store.prepend(entry.clone());
    store.save()?;

    generator.regenerate(&store)?;

    Ok(entry)
}
