//! The recursive tree crawler
//!
//! Depth-first and strictly sequential: one TCP fetch at a time, each
//! directory fully expanded before its next sibling. The only state is
//! the (depth, indentation, visited-set) triple threaded through the
//! recursion.

use log::debug;

use crate::client;
use crate::error::Result;
use crate::menu::{MenuItem, parse_response};
use crate::output::{Renderer, Style};

use super::config::CrawlConfig;
use super::filter::{filter_menu, in_scope};

/// Recursive crawler that renders a remote gopher menu as a tree.
///
/// One call to [`crawl`](TreeCrawler::crawl) handles one starting
/// locator; the visited set lives for exactly that traversal and is
/// never shared between starting points.
pub struct TreeCrawler {
    config: CrawlConfig,
}

impl TreeCrawler {
    pub fn new(config: CrawlConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CrawlConfig {
        &self.config
    }

    /// Heading line for the starting item, in the configured style.
    pub fn title(&self, root: &MenuItem) -> String {
        Renderer::new(&self.config).title(root)
    }

    /// Walk the tree under `root` and return the rendered text.
    ///
    /// A fetch failure anywhere in the recursion propagates here and
    /// aborts the rest of this starting locator's tree; there is no
    /// per-branch isolation.
    pub fn crawl(&self, root: &MenuItem) -> Result<String> {
        let mut visited = vec![String::new()];
        self.crawl_dir(root, "", &mut visited, 1)
    }

    fn crawl_dir(
        &self,
        dir: &MenuItem,
        indent: &str,
        visited: &mut Vec<String>,
        depth: usize,
    ) -> Result<String> {
        let response = client::fetch(dir)?;
        let menu = filter_menu(parse_response(&response), dir, &self.config);
        debug!(
            "depth {depth}: {} entries under {:?} on {}",
            menu.len(),
            dir.selector,
            dir.host
        );

        // A malformed listing can contain the directory itself; record
        // it before iterating so it cannot re-list itself.
        visited.push(dir.selector.clone());

        let renderer = Renderer::new(&self.config);
        let mut tree = String::new();

        for (i, item) in menu.iter().enumerate() {
            if self.config.dirs_only && !item.is_dir() {
                continue;
            }

            // The connector is chosen over the filtered listing, so a
            // trailing non-directory still ends the run of `├──`.
            let is_last = i + 1 == menu.len();
            let connector = if is_last { "└── " } else { "├── " };
            let mut branch = format!("{indent}{connector}");
            branch.push_str(&renderer.entry(item, dir));

            let already_seen = visited.contains(&item.selector);
            if !self.config.disable_notices {
                if already_seen {
                    branch.push_str(" (already indexed)");
                } else if self.config.is_foreign(&item.host, &dir.host) {
                    branch.push_str(" (foreign host)");
                }
            }

            if self.config.style == Style::Html {
                branch.push_str("<br />");
            }

            if self.config.style == Style::GopherMenu {
                // The whole branch becomes the display name of a menu
                // line, keeping the output machine-parseable.
                let mut line_item = item.clone();
                line_item.display_name = branch;
                branch = line_item.to_menu_line();
            } else {
                branch.push('\n');
            }

            if self.config.real_time {
                print!("{branch}");
            }
            tree.push_str(&branch);

            if already_seen {
                continue;
            }
            visited.push(item.selector.clone());

            // max_depth bounds how many listing levels are expanded: at
            // the limit a sub-directory still appears, as a leaf.
            if item.is_dir()
                && in_scope(&item.host, &dir.host, &self.config)
                && (self.config.max_depth == 0 || depth <= self.config.max_depth)
            {
                let extension = if is_last { "    " } else { "│   " };
                let extension = if self.config.style == Style::Html {
                    extension.replace(' ', "&nbsp;&nbsp;")
                } else {
                    extension.to_string()
                };
                let subtree =
                    self.crawl_dir(item, &format!("{indent}{extension}"), visited, depth + 1)?;
                tree.push_str(&subtree);
            }
        }

        Ok(tree)
    }
}
