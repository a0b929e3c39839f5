//! Library-level crawler tests against the mock server

mod harness;

use burrow::{CrawlConfig, Error, Locator, TreeCrawler};
use harness::{GopherServer, menu_line};

fn root_item(server: &GopherServer) -> burrow::MenuItem {
    Locator::parse(&server.locator(""))
        .expect("mock locator parses")
        .into_item()
}

#[test]
fn test_repeated_selector_is_not_recursed_twice() {
    // The same sub-directory appears twice in one listing.
    let server = GopherServer::start(|port| {
        vec![
            (
                "/".to_string(),
                menu_line('1', "Files", "/files", port)
                    + &menu_line('1', "Files again", "/files", port),
            ),
            (
                "/files".to_string(),
                menu_line('0', "Notes", "/files/notes.txt", port),
            ),
        ]
    });

    let crawler = TreeCrawler::new(CrawlConfig::default());
    let tree = crawler.crawl(&root_item(&server)).unwrap();

    assert_eq!(
        tree.matches("notes.txt").count(),
        1,
        "second sighting contributes no subtree: {tree}"
    );
    assert!(tree.contains("(already indexed)"));
}

#[test]
fn test_depth_one_lists_grandchild_as_leaf() {
    let server = GopherServer::start(|port| {
        vec![
            ("/".to_string(), menu_line('1', "Sub", "/sub", port)),
            (
                "/sub".to_string(),
                menu_line('1', "Deep", "/sub/deep", port),
            ),
            (
                "/sub/deep".to_string(),
                menu_line('0', "Bottom", "/sub/deep/bottom.txt", port),
            ),
        ]
    });

    let config = CrawlConfig {
        max_depth: 1,
        ..Default::default()
    };
    let tree = TreeCrawler::new(config).crawl(&root_item(&server)).unwrap();

    assert!(tree.contains("sub"));
    assert!(tree.contains("deep"), "grandchild listed as a leaf: {tree}");
    assert!(
        !tree.contains("bottom.txt"),
        "grandchild must not be expanded: {tree}"
    );
}

#[test]
fn test_nested_fetch_failure_aborts_whole_crawl() {
    // The sub-directory points at a port that is known to be closed.
    let closed = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let closed_port = closed.local_addr().unwrap().port();
    drop(closed);

    let server = GopherServer::start(|port| {
        vec![(
            "/".to_string(),
            format!("1Broken\t/broken\t127.0.0.1\t{closed_port}\n")
                + &menu_line('0', "Readme", "/readme.txt", port),
        )]
    });

    let result = TreeCrawler::new(CrawlConfig::default()).crawl(&root_item(&server));
    match result {
        Err(Error::Connection { port, .. }) => assert_eq!(port, closed_port),
        other => panic!("expected a connection error, got {other:?}"),
    }
}

#[test]
fn test_visited_set_spans_sibling_branches() {
    // Both sub-directories link to the same target; only the first
    // occurrence anywhere in the crawl is expanded.
    let server = GopherServer::start(|port| {
        vec![
            (
                "/".to_string(),
                menu_line('1', "A", "/a", port) + &menu_line('1', "B", "/b", port),
            ),
            ("/a".to_string(), menu_line('1', "Shared", "/shared", port)),
            ("/b".to_string(), menu_line('1', "Shared", "/shared", port)),
            (
                "/shared".to_string(),
                menu_line('0', "Payload", "/shared/payload.txt", port),
            ),
        ]
    });

    let tree = TreeCrawler::new(CrawlConfig::default())
        .crawl(&root_item(&server))
        .unwrap();

    assert_eq!(tree.matches("payload.txt").count(), 1, "{tree}");
    assert_eq!(tree.matches("(already indexed)").count(), 1, "{tree}");
}

#[test]
fn test_crawl_result_is_ok_for_leaf_only_menu() {
    let server = GopherServer::start(|port| {
        vec![(
            "/".to_string(),
            menu_line('0', "One", "/one.txt", port) + &menu_line('0', "Two", "/two.txt", port),
        )]
    });

    let tree = TreeCrawler::new(CrawlConfig::default())
        .crawl(&root_item(&server))
        .unwrap();

    assert_eq!(tree, "├── one.txt\n└── two.txt\n");
}
