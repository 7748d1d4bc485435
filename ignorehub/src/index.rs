//! Cache-or-fetch access to the template index.

use ignorehub_core::TemplateRecord;
use ignorehub_remote::{IndexCache, RemoteSource, Result};

/// Load the template index, preferring the on-disk cache unless `refresh`
/// forces a fetch. A fresh index is written back to the cache; a failed
/// cache write only warns, since the index itself is already in hand.
pub(crate) fn load_index(source: &RemoteSource, refresh: bool) -> Result<Vec<TemplateRecord>> {
    let cache = IndexCache::user();

    if !refresh {
        if let Some(records) = cache.as_ref().and_then(|c| c.load()) {
            return Ok(records);
        }
    }

    let records = source.fetch_index()?;
    if let Some(cache) = &cache {
        if let Err(e) = cache.store(&records) {
            eprintln!("warning: failed to write the index cache: {e}");
        }
    }

    Ok(records)
}
