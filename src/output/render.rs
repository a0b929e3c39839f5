//! Styled text for entries and title lines

use crate::menu::MenuItem;
use crate::tree::{CrawlConfig, relative_path};

use super::style::Style;

/// Renders the textual form of one entry (or the crawl title) in the
/// configured style.
pub struct Renderer<'a> {
    config: &'a CrawlConfig,
}

impl<'a> Renderer<'a> {
    pub fn new(config: &'a CrawlConfig) -> Self {
        Self { config }
    }

    /// Style-dependent text for one entry, excluding tree glyphs and
    /// notices. `root` is the directory whose listing contains `item`.
    ///
    /// Plain (and the gopher-menu label, which embeds the plain form)
    /// falls back to the full URL for entries on a foreign host, since
    /// a bare path would be ambiguous there.
    pub fn entry(&self, item: &MenuItem, root: &MenuItem) -> String {
        let body = match self.config.style {
            Style::Html => item.html(),
            Style::Url => item.url(),
            Style::Plain | Style::GopherMenu => {
                if self.config.is_foreign(&item.host, &root.host) {
                    item.url()
                } else if self.config.full_path {
                    item.selector.clone()
                } else {
                    relative_path(&root.selector, &item.selector)
                }
            }
        };
        if self.config.print_type {
            format!("{} {}", item.item_type as char, body)
        } else {
            body
        }
    }

    /// Heading line for a starting locator, newline included.
    pub fn title(&self, root: &MenuItem) -> String {
        match self.config.style {
            Style::Html => format!("{}<br />\n", root.html()),
            Style::GopherMenu => {
                let mut line_item = root.clone();
                line_item.display_name = root.url();
                line_item.to_menu_line()
            }
            Style::Url | Style::Plain => format!("{}\n", root.url()),
        }
    }
}
