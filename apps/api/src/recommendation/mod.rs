// Recommendation engine
// Implements: per-criterion sub-scores, weighted ranking, HTTP handlers.
// Postings always come from an `InternshipCatalog`; nothing here reads a store directly.

pub mod handlers;
pub mod recommender;
pub mod scoring;
