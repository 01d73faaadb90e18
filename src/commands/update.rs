//! Regenerate the aggregate pages without creating a new entry

use crate::error::Result;
use crate::generator::Generator;
use crate::store::EntryStore;
use crate::Blog;

/// Rebuild the homepage and archive from the stored entry list
pub fn run(blog: &Blog) -> Result<()> {
    blog.prepare()?;

    let store = EntryStore::load(&blog.base_dir)?;
    tracing::info!("Loaded {} entries", store.len());

    Generator::new(blog).regenerate(&store)?;
    Ok(())
}
