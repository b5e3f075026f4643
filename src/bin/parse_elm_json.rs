use clap::Parser;
use elm_deps_rss::manifest::Manifest;
use std::{error::Error, fs::File, io::BufReader};

#[derive(Parser)]
struct Args {
    manifest_filepath: std::path::PathBuf,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    println!("reading manifest file: {:?}", args.manifest_filepath);

    let file = File::open(args.manifest_filepath)?;
    let reader = BufReader::new(file);
    let manifest: Manifest = serde_json::from_reader(reader)?;

    dbg!(manifest);

    Ok(())
}
