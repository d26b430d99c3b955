//! Provider catalogue sources
//!
//! Adapters implementing [`ProviderCatalogSource`](arcana_application::ProviderCatalogSource):
//! one backed by the `[[providers]]` config sections, one by a JSON file.

mod json_file;
mod static_source;

pub use json_file::JsonFileCatalogSource;
pub use static_source::StaticCatalogSource;
