//! Output style selection

/// Rendering style for the whole tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Style {
    /// Paths relative to the listed directory (absolute with full-path).
    #[default]
    Plain,
    /// Full reconstructed gopher URLs.
    Url,
    /// Hyperlinked markup, one `<a>` per entry.
    Html,
    /// Protocol-native menu lines carrying the branch text as label.
    GopherMenu,
}

impl Style {
    /// Resolve the style flags; html wins over gopher-menu, which wins
    /// over url, which wins over plain.
    pub fn select(url: bool, html: bool, gopher: bool) -> Style {
        if html {
            Style::Html
        } else if gopher {
            Style::GopherMenu
        } else if url {
            Style::Url
        } else {
            Style::Plain
        }
    }
}
