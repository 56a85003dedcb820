// * The Catalog stage: discover cover links in a saved catalog page and
// * resolve them through the site redirector to unique detail URLs.

pub mod discover;
pub mod redirect;

pub use discover::{discover_cover_links, CoverLink};
pub use redirect::{resolve_destination, unique_destinations};
