use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "gloss")]
#[command(bin_name = "gloss")]
#[command(about = "Compile entity descriptions into a knowledge base", long_about = None)]
pub struct GlossCli {
    /// Entity document to compile; standard input when omitted.
    pub input: Option<PathBuf>,

    /// Pretty-print the output JSON.
    #[arg(short, long)]
    pub pretty: bool,

    /// Rewriting rounds allowed before giving up.
    #[arg(long, default_value_t = gloss_rewrite::driver::DEFAULT_ROUND_CAP)]
    pub max_rounds: usize,
}
