use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "namescan",
    version,
    long_version = env!("NAMESCAN_LONG_VERSION"),
    about = "Command-line interface for querying username availability on online platforms",
    long_about = "namescan checks whether usernames are already registered on a set of online platforms.\nSupported platforms: GitHub, GitLab, Instagram, Reddit, Snapchat, Steam, Tumblr, Twitter."
)]
pub struct Args {
    /// One or more usernames to query
    #[arg(value_name = "USERNAME")]
    pub usernames: Vec<String>,

    /// Restrict the list of platforms to query (default: all platforms)
    #[arg(short = 'r', long = "restrict", value_name = "PLATFORM", num_args = 0..)]
    pub restrict: Vec<String>,

    /// File from which to read in usernames, one per line
    #[arg(short = 'i', long = "input-file", value_name = "INPUTFILE.TXT")]
    pub input_file: Option<PathBuf>,

    /// Cache tokens for platforms needing more than one request (GitHub, Instagram, Snapchat, Tumblr)
    #[arg(short = 'c', long = "cache-tokens")]
    pub cache_tokens: bool,

    /// Only print usernames that are available
    #[arg(short = 'a', long = "available-only")]
    pub available_only: bool,

    /// Configuration file path
    #[arg(long = "config", value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    /// Verbose logging
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}
