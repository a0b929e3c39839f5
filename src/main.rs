//! CLI entry point for burrow

use std::process;

use clap::Parser;
use log::warn;

use burrow::{CrawlConfig, Locator, Style, TreeCrawler};

#[derive(Parser, Debug)]
#[command(name = "burrow")]
#[command(about = "Renders remote gopher menus as a directory tree")]
#[command(version)]
struct Args {
    /// Gopher locators to crawl (the gopher:// prefix is optional)
    #[arg(required = true, value_name = "LOCATOR")]
    locators: Vec<String>,

    /// List directories only
    #[arg(short = 'd', long = "dirs-only")]
    dirs_only: bool,

    /// Print the full selector for each item
    #[arg(short = 'f', long = "full-path")]
    full_path: bool,

    /// Prefix each item with its type code
    #[arg(short = 't', long = "print-type")]
    print_type: bool,

    /// Print a gopher URL for each item
    #[arg(short = 'u', long = "url")]
    url: bool,

    /// Output the tree as HTML with links to items
    #[arg(long = "html")]
    html: bool,

    /// Output the tree as a gopher menu with links to items
    #[arg(short = 'g', long = "gopher")]
    gopher: bool,

    /// Print individual tree lines as they are generated
    #[arg(short = 'r', long = "real-time")]
    real_time: bool,

    /// Max display depth of the tree (0 = unlimited)
    #[arg(short = 'L', long = "level", value_name = "LEVEL", default_value = "0")]
    level: usize,

    /// Suppress "(already indexed)" and "(foreign host)" notices
    #[arg(short = 'n', long = "no-notices")]
    no_notices: bool,

    /// Comma-separated item types to exclude from listings
    #[arg(short = 'x', long = "exclude", value_name = "TYPES", default_value = "h,i,3")]
    exclude: String,

    /// Comma-separated hostnames treated as the root host
    #[arg(short = 'a', long = "alias", value_name = "HOSTS")]
    alias: Option<String>,

    /// Keep entries on foreign hosts in listings
    #[arg(short = 'F', long = "show-foreign")]
    show_foreign: bool,

    /// Enable debug logging
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

/// Parse the comma-separated excluded-type list. Multi-character
/// tokens are warned about and skipped; crawling continues with the
/// valid subset.
fn parse_type_filter(list: &str) -> Vec<u8> {
    let mut types = Vec::new();
    for token in list.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        if let [code] = token.as_bytes() {
            types.push(*code);
        } else {
            warn!("ignoring excluded type '{token}': not a single character");
        }
    }
    types
}

fn parse_host_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|host| !host.is_empty())
        .map(str::to_string)
        .collect()
}

fn main() {
    let args = Args::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if args.verbose { "debug" } else { "warn" }),
    )
    .init();

    let config = CrawlConfig {
        dirs_only: args.dirs_only,
        full_path: args.full_path,
        print_type: args.print_type,
        style: Style::select(args.url, args.html, args.gopher),
        real_time: args.real_time,
        max_depth: args.level,
        disable_notices: args.no_notices,
        show_foreign: args.show_foreign,
        type_filter: parse_type_filter(&args.exclude),
        alias_hosts: args.alias.as_deref().map(parse_host_list).unwrap_or_default(),
    };

    let real_time = config.real_time;
    let crawler = TreeCrawler::new(config);
    let mut failed = false;

    for locator in &args.locators {
        let root = match Locator::parse(locator) {
            Ok(parsed) => parsed.into_item(),
            Err(e) => {
                eprintln!("burrow: {locator}: {e}");
                failed = true;
                continue;
            }
        };

        // In real-time mode the branch lines are already printed during
        // the crawl, so only the title is emitted here.
        if real_time {
            print!("{}", crawler.title(&root));
        }
        match crawler.crawl(&root) {
            Ok(tree) => {
                if !real_time {
                    print!("{}", crawler.title(&root));
                    print!("{tree}");
                }
            }
            Err(e) => {
                eprintln!("burrow: {e}");
                failed = true;
            }
        }
    }

    if failed {
        process::exit(1);
    }
}
