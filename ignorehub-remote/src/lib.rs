//! Remote template repository access and index caching for ignorehub.
//!
//! Everything here is the I/O shell around `ignorehub-core`: fetching the
//! template tree, fetching template bodies, and keeping a per-user cache of
//! the classified index.

mod cache;
mod error;
mod source;

pub use cache::IndexCache;
pub use error::{Error, Result};
pub use source::{FetchFailure, RemoteSource};
