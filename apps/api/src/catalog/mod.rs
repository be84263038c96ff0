//! Catalog sources: where the recommender gets its postings from.
//!
//! `AppState` holds an `Arc<dyn InternshipCatalog>`. The built-in list is the
//! default; `CATALOG_PATH` swaps in a JSON file at startup.

pub mod builtin;
pub mod handlers;
pub mod json_file;

use anyhow::Result;
use async_trait::async_trait;

use crate::models::internship::InternshipPosting;

pub use builtin::StaticCatalog;
pub use json_file::JsonFileCatalog;

/// Read-only source of internship postings.
#[async_trait]
pub trait InternshipCatalog: Send + Sync {
    /// Active postings in declared order. The order is the tie-break order
    /// of the recommender, so implementations must keep it stable.
    async fn list_active(&self) -> Result<Vec<InternshipPosting>>;

    async fn find(&self, id: &str) -> Result<Option<InternshipPosting>> {
        Ok(self
            .list_active()
            .await?
            .into_iter()
            .find(|posting| posting.id == id))
    }
}
