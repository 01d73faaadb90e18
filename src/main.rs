//! CLI entry point for quill-rs

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "quill-rs")]
#[command(version)]
#[command(about = "A tiny static blog publisher for plain-text diary entries", long_about = None)]
struct Cli {
    /// Path to the entry text file to publish
    #[arg(required_unless_present = "update")]
    file: Option<PathBuf>,

    /// Regenerate index and archive pages without creating a new entry
    #[arg(short, long, conflicts_with = "file")]
    update: bool,

    /// Set the blog root directory (defaults to current directory)
    #[arg(short, long)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "quill_rs=debug,info"
    } else {
        "quill_rs=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine the blog root
    let base_dir = cli.cwd.unwrap_or_else(|| std::env::current_dir().unwrap());
    let blog = quill_rs::Blog::open(&base_dir)?;

    if cli.update {
        tracing::info!("Updating blog files in {:?}", blog.base_dir);
        blog.update()?;

        println!("Blog files updated successfully!");
        println!();
        println!("Next steps:");
        println!("  1. git add .");
        println!("  2. git commit -m \"Update blog files\"");
        println!("  3. git push origin main");
    } else {
        let file = cli.file.expect("FILE is required unless --update is given");
        tracing::info!("Publishing entry from {:?}", file);
        let entry = blog.publish(&file)?;

        println!("Successfully created entry: {}", entry.title);
        println!();
        println!("Next steps:");
        println!("  1. git add .");
        println!("  2. git commit -m \"Add new entry: {}\"", entry.title);
        println!("  3. git push origin main");
    }

    Ok(())
}
