//! Gopher menu items and menu-response parsing
//!
//! A gopher directory listing is a sequence of tab-separated lines,
//! each tagged with a single-character type code (RFC 1436). This
//! module holds the structured form of one line, `MenuItem`, and the
//! lenient parser that turns a raw response into a batch of them.

/// Text file.
pub const TYPE_TEXT: u8 = b'0';
/// Sub-directory: the only type the crawler descends into.
pub const TYPE_DIR: u8 = b'1';
/// Error returned by the server.
pub const TYPE_ERROR: u8 = b'3';
/// Binary file.
pub const TYPE_BINARY: u8 = b'9';
/// Informational line; not an addressable resource.
pub const TYPE_INFO: u8 = b'i';
/// HTML / URL link.
pub const TYPE_HTML: u8 = b'h';

/// Default gopher port.
pub const DEFAULT_PORT: u16 = 70;

/// One structured item from a remote directory listing.
///
/// An item with an empty selector and type `'i'` is a synthetic
/// informational line (e.g. a malformed response line) rather than a
/// real addressable resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    /// Single-byte type code, never multi-character.
    pub item_type: u8,
    /// Human-readable label, may be empty.
    pub display_name: String,
    /// Retrieval path; starts with `/` except when empty.
    pub selector: String,
    /// Bare hostname or IP, brackets already stripped from IPv6 literals.
    pub host: String,
    /// Defaults to 70 when unspecified.
    pub port: u16,
}

impl MenuItem {
    /// Build a synthetic informational item carrying `text` verbatim.
    pub fn info(text: &str) -> MenuItem {
        MenuItem {
            item_type: TYPE_INFO,
            display_name: text.to_string(),
            selector: String::new(),
            host: String::new(),
            port: 0,
        }
    }

    /// Decode one tab-separated menu line.
    ///
    /// Lines with fewer than four fields, or without a leading ASCII
    /// type code, become informational items wrapping the raw line. A
    /// port field that does not parse yields port 0, not an error.
    pub fn from_line(line: &str) -> MenuItem {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() >= 4 {
            if let Some(&item_type) = fields[0].as_bytes().first() {
                if item_type.is_ascii() {
                    return MenuItem {
                        item_type,
                        display_name: fields[0][1..].to_string(),
                        selector: fields[1].to_string(),
                        host: fields[2].to_string(),
                        port: fields[3].parse().unwrap_or(0),
                    };
                }
            }
        }
        MenuItem::info(line)
    }

    /// Re-serialize as a protocol-format menu line, newline included.
    pub fn to_menu_line(&self) -> String {
        format!(
            "{}{}\t{}\t{}\t{}\n",
            self.item_type as char, self.display_name, self.selector, self.host, self.port
        )
    }

    /// True for sub-directory items the crawler can descend into.
    pub fn is_dir(&self) -> bool {
        self.item_type == TYPE_DIR
    }
}

/// Decode a full menu response into items, in line order.
///
/// Blank lines produce no item; nothing is reordered or deduplicated
/// at this stage.
pub fn parse_response(response: &str) -> Vec<MenuItem> {
    response
        .lines()
        .filter(|line| !line.is_empty())
        .map(MenuItem::from_line)
        .collect()
}
