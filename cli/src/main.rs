//! richblocks CLI - render exported messages to HTML fragments

use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use colored::Colorize;
use log::debug;
use serde::Deserialize;

use richblocks::{Block, ChannelDirectory, File, MessageRenderer, UserDirectory};

#[derive(Parser)]
#[command(name = "richblocks")]
#[command(version)]
#[command(about = "Render chat-workspace rich text messages to HTML", long_about = None)]
struct Cli {
    /// Message JSON file (object with "blocks" and "files" arrays)
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// JSON object file mapping user IDs to display names
    #[arg(long, value_name = "FILE")]
    users: Option<PathBuf>,

    /// JSON object file mapping channel IDs to names
    #[arg(long, value_name = "FILE")]
    channels: Option<PathBuf>,

    /// Output file (stdout if not specified)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Emit the intermediate markup instead of HTML
    #[arg(long)]
    markup: bool,
}

/// One exported message, as stored by the import pipeline.
#[derive(Deserialize)]
struct MessageInput {
    #[serde(default)]
    blocks: Vec<Block>,
    #[serde(default)]
    files: Vec<File>,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("{} {}", "error:".red().bold(), err);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let message: MessageInput = serde_json::from_str(&fs::read_to_string(&cli.input)?)?;

    let users = match &cli.users {
        Some(path) => UserDirectory::from_json(&fs::read_to_string(path)?)?,
        None => UserDirectory::new(),
    };
    let channels = match &cli.channels {
        Some(path) => ChannelDirectory::from_json(&fs::read_to_string(path)?)?,
        None => ChannelDirectory::new(),
    };
    debug!(
        "loaded {} users, {} channels",
        users.len(),
        channels.len()
    );

    let renderer = MessageRenderer::new(&users, &channels);
    let rendered = if cli.markup {
        renderer.render_blocks(&message.blocks)?
    } else {
        renderer.render(&message.blocks, &message.files)?
    };

    match &cli.output {
        Some(path) => fs::write(path, rendered)?,
        None => println!("{}", rendered),
    }
    Ok(())
}
