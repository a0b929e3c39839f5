//! Recursive crawling of remote gopher menus
//!
//! The crawler fetches a directory listing, filters it down to in-scope
//! entries, renders one branch line per entry, and descends into
//! sub-directories depth-first. A visited set shared across the
//! recursion keeps malformed or self-referential menus from looping.

mod config;
mod crawler;
mod filter;
mod path;

pub use config::CrawlConfig;
pub use crawler::TreeCrawler;
pub use filter::{filter_menu, in_scope};
pub use path::relative_path;
