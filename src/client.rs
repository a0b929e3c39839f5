//! Blocking TCP client for the gopher protocol
//!
//! One fetch is one connection: send the selector, read lines until the
//! server closes the connection. Single attempt, fail fast, no timeout;
//! a stalled peer blocks the whole crawl (accepted limitation of the
//! strictly sequential design).

use std::io::{self, BufRead, BufReader, Write};
use std::net::TcpStream;

use log::debug;

use crate::error::{Error, Result};
use crate::menu::MenuItem;

fn connection_error(item: &MenuItem, source: io::Error) -> Error {
    Error::Connection {
        host: item.host.clone(),
        port: item.port,
        source,
    }
}

/// Fetch the raw listing behind `item`.
///
/// The response is re-joined with `\n` terminators; a partial final
/// line without one is still captured. The connection is released on
/// every exit path once opened.
pub fn fetch(item: &MenuItem) -> Result<String> {
    debug!("fetching {}:{} {:?}", item.host, item.port, item.selector);

    let mut stream = TcpStream::connect((item.host.as_str(), item.port))
        .map_err(|e| connection_error(item, e))?;
    stream
        .write_all(format!("{}\n", item.selector).as_bytes())
        .map_err(|e| connection_error(item, e))?;

    let mut response = String::new();
    for line in BufReader::new(stream).lines() {
        let line = line.map_err(|e| connection_error(item, e))?;
        response.push_str(&line);
        response.push('\n');
    }

    debug!("got {} bytes from {}:{}", response.len(), item.host, item.port);
    Ok(response)
}
