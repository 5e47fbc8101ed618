// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Subcommands:
// - fetch:  print a file from a public gist
// - id:     print the gist ID found in a URL or string
// - encode: turn text into a URL-safe share token (or share link)
// - decode: turn a share token (or share link) back into text
// =============================================================================

use clap::{ArgAction, Parser, Subcommand};

use gist_share::gist::GITHUB_API_BASE;

#[derive(Parser, Debug)]
#[command(
    name = "gist-share",
    version,
    about = "Load text from public GitHub Gists and pack text into URL-safe share tokens",
    long_about = "gist-share reads a file out of a public GitHub Gist, and compresses text into \
                  a short token that can be placed in a URL fragment without escaping."
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). Logs go to stderr.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the content of a file in a public gist
    ///
    /// Example: gist-share fetch https://gist.github.com/alice/aa5a315d61ae9438b18d6d1d4ab1d3e1
    Fetch {
        /// Gist ID or gist.github.com URL
        gist: String,

        /// Exact name of the file to print (default: first .md/.txt file, else the first file)
        #[arg(long)]
        file: Option<String>,

        /// Print the whole result as JSON instead of the raw content
        #[arg(long)]
        json: bool,

        /// GitHub API root, for mirrors or testing
        #[arg(long, default_value = GITHUB_API_BASE)]
        api_url: String,
    },

    /// Print the gist ID contained in a gist URL or string
    Id {
        /// Gist ID or gist.github.com URL
        input: String,
    },

    /// Compress text into a URL-safe token
    ///
    /// Example: echo "hello" | gist-share encode --base-url https://app.example/view
    Encode {
        /// Text to encode (read from stdin when omitted)
        text: Option<String>,

        /// Print a full share link with the token as the URL fragment
        #[arg(long)]
        base_url: Option<String>,
    },

    /// Decode a token (or a share link) back into text
    Decode {
        /// Token, or a URL whose fragment is the token
        token: String,
    },
}
