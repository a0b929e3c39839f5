//! Configuration for one tree crawl

use crate::menu::{TYPE_ERROR, TYPE_HTML, TYPE_INFO};
use crate::output::Style;

/// Crawl behavior, immutable for the duration of one crawl.
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    pub dirs_only: bool,
    pub full_path: bool,
    /// Prefix each item with its type code.
    pub print_type: bool,
    pub style: Style,
    /// Print branch lines as they are generated.
    pub real_time: bool,
    /// Max display depth; 0 means unlimited.
    pub max_depth: usize,
    /// Suppress "(already indexed)" / "(foreign host)" notices.
    pub disable_notices: bool,
    /// Keep entries on foreign hosts in listings (as leaves).
    pub show_foreign: bool,
    /// Item types excluded from listings.
    pub type_filter: Vec<u8>,
    /// Hostnames treated as equivalent to the root host.
    pub alias_hosts: Vec<String>,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            dirs_only: false,
            full_path: false,
            print_type: false,
            style: Style::Plain,
            real_time: false,
            max_depth: 0,
            disable_notices: false,
            show_foreign: false,
            type_filter: vec![TYPE_HTML, TYPE_INFO, TYPE_ERROR],
            alias_hosts: Vec::new(),
        }
    }
}

impl CrawlConfig {
    /// True when `host` does not count as `root_host` for notice
    /// purposes. Subdomains are in scope but still foreign here.
    pub fn is_foreign(&self, host: &str, root_host: &str) -> bool {
        host != root_host && !self.alias_hosts.iter().any(|alias| alias == host)
    }
}
