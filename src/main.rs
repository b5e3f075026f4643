use anyhow::{Context, Result};
use clap::Parser;
use elm_deps_rss::feed::{group_by_author, query_string, rss_feed_url, web_feed_url};
use elm_deps_rss::manifest::Manifest;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process;

/// elm-greenwood.com feed links for the dependencies of an Elm project
#[derive(Parser, Debug)]
#[command(version, about, long_about = None, disable_help_flag = true)]
struct Args {
    /// Path to the elm.json to read
    #[arg(value_name = "PATH")]
    manifest_path: Option<PathBuf>,

    /// Print usage and exit
    #[arg(short = 'h', long = "help")]
    help: bool,
}

fn usage() {
    println!("Usage: elm-deps-rss [path/to/elm.json]");
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.help {
        usage();
        process::exit(1);
    }

    let path = args
        .manifest_path
        .unwrap_or_else(|| PathBuf::from("elm.json"));
    if !path.exists() {
        println!("{} file not found\n", path.display());
        usage();
        process::exit(1);
    }

    let file = File::open(&path).with_context(|| format!("error opening {:?}", path))?;
    let manifest = Manifest::from_reader(BufReader::new(file))
        .with_context(|| format!("error parsing {:?}", path))?;

    let groups = group_by_author(manifest.dependency_ids())?;
    let query = query_string(&groups);

    println!("Web feed:");
    println!("{}", web_feed_url(&query));
    println!();
    println!("RSS feed:");
    println!("{}", rss_feed_url(&query));

    Ok(())
}
