pub mod catalog;

pub use catalog::{fetch_catalog, CATALOG_ENDPOINT};
