// * Bookflow: discovers book detail links in a saved catalog page, resolves
// * them through the site redirector, and harvests title/author/ISBN records
// * into CSV tables.

pub mod catalog;
pub mod config;
pub mod export;
pub mod network;
pub mod pipeline;
pub mod refinery;
