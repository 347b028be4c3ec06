mod config;

use clap::Parser;
use colored::Colorize;
use config::Config;
use msgidgen_common::RealFileSystem;
use msgidgen_generator::{generate, GeneratorConfig};
use std::path::PathBuf;
use tracing::Level;

/// Msgidgen CLI - stable message identifiers for .proto declarations
#[derive(Parser, Debug)]
#[command(name = "msgidgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory to scan for .proto files (defaults to current directory)
    #[arg(short, long)]
    path: Option<String>,

    /// Directory to receive the generated tag table
    #[arg(short, long)]
    tag_dir: Option<String>,

    /// Package name substituted into the generated files
    #[arg(long)]
    pack: Option<String>,

    /// Upper-case extracted name words before hashing
    #[arg(long)]
    upper: bool,

    /// Prefix prepended to every message name before hashing
    #[arg(long)]
    prefix: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn resolve(cwd: &str, dir: String) -> PathBuf {
    // Path::join keeps absolute paths absolute
    PathBuf::from(cwd).join(dir)
}

fn run(cli: Cli, cwd: &str) -> anyhow::Result<()> {
    let file_config = Config::load(cwd)?;

    let config = GeneratorConfig {
        input_dir: resolve(cwd, cli.path.unwrap_or(file_config.src_dir)),
        tag_output_dir: resolve(cwd, cli.tag_dir.unwrap_or(file_config.tag_dir)),
        package_name: cli
            .pack
            .or(file_config.package_name)
            .unwrap_or_default(),
        uppercase: cli.upper || file_config.upper,
        prefix: cli.prefix.unwrap_or(file_config.prefix),
    };

    println!(
        "{}",
        "🔨 Generating message identifiers...".bright_blue().bold()
    );

    let stats = generate(&config, &RealFileSystem)?;

    println!(
        "Found {} messages in {} files",
        stats.messages, stats.files_scanned
    );
    println!("  {} {}", "✓".green(), stats.enum_path.display());
    if let Some(tag_path) = &stats.tag_path {
        println!("  {} {}", "✓".green(), tag_path.display());
    } else {
        println!("{}", "⚠️  No dispatch tags found, tag table skipped".yellow());
    }

    println!();
    println!(
        "{} Generated {} identifiers",
        "✅".green(),
        stats.messages + 1
    );

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();

    let cwd = std::env::current_dir()
        .expect("Cannot get current directory")
        .display()
        .to_string();

    if let Err(err) = run(cli, &cwd) {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
