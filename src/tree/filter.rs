//! Scope and type filtering of parsed menus

use crate::menu::MenuItem;

use super::config::CrawlConfig;

/// True when `host` belongs to the crawl scope anchored at `root_host`.
///
/// Suffix matching keeps subdomains in scope on purpose; this is a
/// string policy, not a security boundary.
pub fn in_scope(host: &str, root_host: &str, config: &CrawlConfig) -> bool {
    host.ends_with(root_host) || config.alias_hosts.iter().any(|alias| alias == host)
}

/// Drop entries that are structurally invalid, of an excluded type, or
/// off-scope by host. Dropped entries are not rendered and never count
/// toward depth or cycle tracking.
pub fn filter_menu(menu: Vec<MenuItem>, root: &MenuItem, config: &CrawlConfig) -> Vec<MenuItem> {
    menu.into_iter()
        .filter(|item| {
            !item.selector.is_empty()
                && !config.type_filter.contains(&item.item_type)
                && (config.show_foreign || in_scope(&item.host, &root.host, config))
        })
        .collect()
}
