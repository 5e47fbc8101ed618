// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (stderr) at the requested verbosity
// 3. Dispatch to the appropriate subcommand handler
// 4. Exit with proper code (0 = success, 1 = failed, 2 = error)
//
// Output goes to stdout, logs go to stderr, so results can be piped.
// =============================================================================

mod cli;
mod logger;

use anyhow::{bail, Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use gist_share::codec;
use gist_share::gist::{self, GistClient, GistFetchResult};
use log::info;
use std::io::Read;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = command succeeded
//   Ok(1) = command ran but failed (gist not loaded, bad token...)
//   Err   = unexpected error (mapped to exit code 2)
async fn run() -> Result<i32> {
    let cli = Cli::parse();

    logger::initialize(cli.verbose).context("Failed to initialize logger")?;

    match cli.command {
        Commands::Fetch {
            gist,
            file,
            json,
            api_url,
        } => handle_fetch(&gist, file.as_deref(), json, &api_url).await,
        Commands::Id { input } => handle_id(&input),
        Commands::Encode { text, base_url } => handle_encode(text, base_url.as_deref()),
        Commands::Decode { token } => handle_decode(&token),
    }
}

// Handles the 'fetch' subcommand
async fn handle_fetch(input: &str, file: Option<&str>, json: bool, api_url: &str) -> Result<i32> {
    let Some(gist_id) = gist::extract_gist_id(input) else {
        bail!("Not a gist ID or gist.github.com URL: {}", input);
    };

    info!("Fetching gist {}", gist_id);
    let client = GistClient::with_base_url(api_url)
        .with_context(|| format!("Invalid API URL: {}", api_url))?;
    let result = client.fetch_public_gist(&gist_id, file).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    }

    match result {
        GistFetchResult::Success {
            content, filename, ..
        } => {
            info!("Loaded {} from gist {}", filename, gist_id);
            if !json {
                print!("{}", content);
            }
            Ok(0)
        }
        GistFetchResult::Failure { message, .. } => {
            if !json {
                eprintln!("{}", message);
            }
            Ok(1)
        }
    }
}

// Handles the 'id' subcommand
fn handle_id(input: &str) -> Result<i32> {
    match gist::extract_gist_id(input) {
        Some(id) => {
            println!("{}", id);
            Ok(0)
        }
        None => {
            eprintln!("No gist ID found in: {}", input);
            Ok(1)
        }
    }
}

// Handles the 'encode' subcommand
//
// Without a TEXT argument the whole of stdin is encoded, byte for byte.
fn handle_encode(text: Option<String>, base_url: Option<&str>) -> Result<i32> {
    let text = match text {
        Some(text) => text,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read text from stdin")?;
            buffer
        }
    };

    let output = match base_url {
        Some(base) => codec::share_url(base, &text)?,
        None => codec::encode(&text)?,
    };

    println!("{}", output);
    Ok(0)
}

// Handles the 'decode' subcommand
//
// Uses the fallible decode so a token of empty text is not mistaken
// for a failure.
fn handle_decode(input: &str) -> Result<i32> {
    let Some(token) = codec::token_from_input(input) else {
        eprintln!("No token found in: {}", input);
        return Ok(1);
    };

    match codec::decode(&token) {
        Ok(text) => {
            print!("{}", text);
            Ok(0)
        }
        Err(e) => {
            eprintln!("Decoding failed: {}", e);
            Ok(1)
        }
    }
}
