use std::{io::Write, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use parley_core::{ConnectionHandle, Dispatcher, Error, ParsedMessage, ParsingError, ReceiveType};

mod config;
mod render;

use crate::config::{Config, Format};

/// Read raw IRC lines and show how each one is parsed
#[derive(Parser, Debug)]
struct Args {
    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print every field instead of a summary
    #[arg(short, long)]
    full: bool,

    /// File of raw protocol lines, stdin when omitted
    input: Option<PathBuf>,
}

fn build_dispatcher(config: &Config) -> Dispatcher {
    let format = config.format;
    let skip_unknown = config.skip_unknown;

    let mut dispatcher = Dispatcher::new();
    dispatcher
        .on(ReceiveType::Error, |message| {
            log::warn!("server error: {}", message.payload().unwrap_or_default());
        })
        .on_any(move |message| {
            if skip_unknown && message.category() == ReceiveType::Unknown {
                return;
            }
            let mut stdout = std::io::stdout().lock();
            let _ = writeln!(stdout, "{}", render::render(message, format));
        });
    dispatcher
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::default(),
    };
    if args.full {
        config.format = Format::Full;
    }

    let connection = ConnectionHandle::new(&config.server_name, &config.nickname);
    log::info!(
        "reading as {} on {} (connection {})",
        config.nickname,
        config.server_name,
        connection.id()
    );
    let dispatcher = build_dispatcher(&config);

    let reader: Box<dyn AsyncBufRead + Unpin> = match &args.input {
        Some(path) => {
            let file = tokio::fs::File::open(path)
                .await
                .with_context(|| format!("opening input file {path:?}"))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(tokio::io::stdin())),
    };

    let mut lines = reader.lines();
    let (mut parsed, mut dropped) = (0_usize, 0_usize);
    while let Some(line) = lines.next_line().await? {
        match ParsedMessage::from_line(&connection, &line) {
            Ok(message) => {
                parsed += 1;
                dispatcher.dispatch(&message);
            }
            Err(Error::Parsing(ParsingError::Empty)) => {}
            Err(err) => {
                dropped += 1;
                log::warn!("error when parsing line: {err:#}");
            }
        }
    }

    log::info!("{parsed} lines parsed, {dropped} dropped");
    Ok(())
}
