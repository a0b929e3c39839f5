//! Burrow - renders remote gopher menus as a recursive directory tree

pub mod client;
pub mod error;
pub mod locator;
pub mod menu;
pub mod output;
pub mod tree;

pub use error::{Error, FormatError, Result};
pub use locator::Locator;
pub use menu::{MenuItem, parse_response};
pub use output::{Renderer, Style};
pub use tree::{CrawlConfig, TreeCrawler, relative_path};
