//! Test harness for burrow integration tests
//!
//! Spins up an in-process mock gopher server: a `TcpListener` on an
//! ephemeral port serving canned selector -> response maps, one
//! connection at a time, the way a real gopher server would.

use std::collections::HashMap;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;

pub struct GopherServer {
    pub port: u16,
}

impl GopherServer {
    /// Start a server on an ephemeral port. `build` receives the bound
    /// port so menu lines can point back at the server itself, and
    /// returns the selector -> response map to serve.
    pub fn start(build: impl FnOnce(u16) -> Vec<(String, String)>) -> GopherServer {
        let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind mock server");
        let port = listener.local_addr().expect("no local addr").port();
        let menus: HashMap<String, String> = build(port).into_iter().collect();

        thread::spawn(move || {
            for stream in listener.incoming() {
                match stream {
                    Ok(stream) => serve_one(stream, &menus),
                    Err(_) => break,
                }
            }
        });

        GopherServer { port }
    }

    /// Locator text for this server, e.g. `127.0.0.1:7070/1/files`.
    pub fn locator(&self, rest: &str) -> String {
        format!("127.0.0.1:{}{}", self.port, rest)
    }

    /// URL of the server root as burrow renders it.
    pub fn root_url(&self) -> String {
        format!("gopher://127.0.0.1:{}", self.port)
    }
}

/// A menu line pointing at the mock server itself.
pub fn menu_line(item_type: char, name: &str, selector: &str, port: u16) -> String {
    format!("{item_type}{name}\t{selector}\t127.0.0.1\t{port}\n")
}

fn serve_one(stream: TcpStream, menus: &HashMap<String, String>) {
    let mut reader = BufReader::new(stream);
    let mut selector = String::new();
    if reader.read_line(&mut selector).is_err() {
        return;
    }
    let selector = selector.trim_end();
    let response = menus
        .get(selector)
        .cloned()
        .unwrap_or_else(|| format!("3'{selector}' does not exist\t\terror.host\t1\n"));
    let mut stream = reader.into_inner();
    let _ = stream.write_all(response.as_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn test_server_answers_known_selector() {
        let server = GopherServer::start(|port| {
            vec![("/".to_string(), menu_line('0', "A", "/a", port))]
        });

        let mut stream = TcpStream::connect(("127.0.0.1", server.port)).unwrap();
        stream.write_all(b"/\n").unwrap();
        let mut response = String::new();
        stream.read_to_string(&mut response).unwrap();
        assert!(response.starts_with("0A\t/a\t127.0.0.1\t"));
    }

    #[test]
    fn test_server_errors_on_unknown_selector() {
        let server = GopherServer::start(|_| Vec::new());

        let mut stream = TcpStream::connect(("127.0.0.1", server.port)).unwrap();
        stream.write_all(b"/missing\n").unwrap();
        let mut response = String::new();
        stream.read_to_string(&mut response).unwrap();
        assert!(response.starts_with('3'), "unknown selectors get an error item");
    }
}
