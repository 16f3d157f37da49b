pub mod client;
pub mod endpoint;
pub mod error;
pub mod link;
pub mod normalize;
pub mod types;

pub use client::{Lookup, StorefrontClient};
pub use endpoint::{derive_collection_endpoint, derive_item_endpoint, Endpoint};
pub use error::ScraperError;
pub use link::{classify, looks_like_item, ClassifiedLink, LinkKind};
pub use normalize::{normalize_collection, normalize_item};
