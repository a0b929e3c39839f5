//! Per-entry rendering styles
//!
//! One of four mutually exclusive styles is selected once per crawl and
//! consumed everywhere a branch line is built:
//!
//! - `Plain` - selector paths, like tree(1)
//! - `Url` - full gopher URLs
//! - `Html` - hyperlinked markup
//! - `GopherMenu` - re-serialized protocol-format menu lines

mod render;
mod style;

pub use render::Renderer;
pub use style::Style;
