//! Locator parsing and address rendering
//!
//! A locator is the parsed form of a user-supplied (or reconstructed)
//! gopher address: host, port, item type, and selector. Parsing is
//! deliberately forgiving about the `gopher://` scheme, since callers
//! of a gopher tool usually omit it, and about IPv6 literals, whose
//! colons must not be confused with a port separator.

use crate::error::FormatError;
use crate::menu::{DEFAULT_PORT, MenuItem};

/// Parsed gopher address. Same fields as [`MenuItem`] minus the label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locator {
    /// Type code; 0 when the address named only a server.
    pub item_type: u8,
    pub selector: String,
    pub host: String,
    pub port: u16,
}

fn strip_brackets(host: &str) -> &str {
    let host = host.strip_prefix('[').unwrap_or(host);
    host.strip_suffix(']').unwrap_or(host)
}

impl Locator {
    /// Parse locator text into its components.
    ///
    /// The address part is split from the port on the *last* `:` so
    /// IPv6 literals survive. A colon whose tail is not a valid port is
    /// tolerated as "address has no port" when the address is the whole
    /// locator; with further fields present it is an error. The second
    /// `/`-field, when present, must be exactly one character (the type
    /// code); everything after it is rejoined into the selector.
    pub fn parse(text: &str) -> Result<Locator, FormatError> {
        let text = text.trim();
        let text = text.strip_prefix("gopher://").unwrap_or(text);

        let fields: Vec<&str> = text.split('/').collect();
        let addr = fields[0];
        if addr.is_empty() {
            return Err(FormatError::Empty);
        }

        let (host, port) = match addr.rsplit_once(':') {
            Some((host, tail)) => match tail.parse::<u16>() {
                Ok(port) => (strip_brackets(host), port),
                Err(_) if fields.len() == 1 => (strip_brackets(addr), DEFAULT_PORT),
                Err(_) => return Err(FormatError::Port(addr.to_string())),
            },
            None => (strip_brackets(addr), DEFAULT_PORT),
        };

        let item_type = match fields.get(1) {
            Some(field) if field.len() == 1 => field.as_bytes()[0],
            Some(field) => return Err(FormatError::Type(field.to_string())),
            None => 0,
        };

        let selector = if fields.len() >= 3 {
            format!("/{}", fields[2..].join("/"))
        } else {
            "/".to_string()
        };

        Ok(Locator {
            item_type,
            selector,
            host: host.to_string(),
            port,
        })
    }

    /// Reconstruct the address as `gopher://host[:port][/T][selector]`.
    ///
    /// The port is elided when it is 70, the type segment when the code
    /// is 0, and the selector when it is exactly `/` (a bare server
    /// address points at the root menu already).
    pub fn to_url(&self) -> String {
        let mut url = format!("gopher://{}", self.host);
        if self.port != DEFAULT_PORT {
            url.push(':');
            url.push_str(&self.port.to_string());
        }
        if self.item_type != 0 {
            url.push('/');
            url.push(self.item_type as char);
        }
        if self.selector != "/" {
            url.push_str(&self.selector);
        }
        url
    }

    /// Hyperlink form, with `name` (or the URL itself when `name` is
    /// empty) as the anchor text.
    pub fn to_html(&self, name: &str) -> String {
        let url = self.to_url();
        let text = if name.is_empty() { url.as_str() } else { name };
        format!("<a href=\"{url}\">{text}</a>")
    }

    /// Convert into a menu item with an empty display name.
    pub fn into_item(self) -> MenuItem {
        MenuItem {
            item_type: self.item_type,
            display_name: String::new(),
            selector: self.selector,
            host: self.host,
            port: self.port,
        }
    }
}

impl From<&MenuItem> for Locator {
    fn from(item: &MenuItem) -> Locator {
        Locator {
            item_type: item.item_type,
            selector: item.selector.clone(),
            host: item.host.clone(),
            port: item.port,
        }
    }
}

impl MenuItem {
    /// Full gopher URL for this item.
    pub fn url(&self) -> String {
        Locator::from(self).to_url()
    }

    /// Hyperlink for this item, labelled with its display name.
    pub fn html(&self) -> String {
        Locator::from(self).to_html(&self.display_name)
    }
}
