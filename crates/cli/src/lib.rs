mod tree;

use clap::{Parser, Subcommand};
use url::Url;

#[derive(Parser)]
#[command(
    name = "refscope",
    version,
    about = "A reference tree explorer for remote configuration services",
    long_about = "Refscope walks the reference graph a remote configuration service exposes \
                  and prints it as an indented tree. Resources are addressed by virtual paths \
                  of the form /<collection>/<uuid>; expansion runs concurrently with a bounded \
                  number of in-flight fetches and is safe on cyclic graphs."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the tree of references starting from one or more resources
    #[command(
        long_about = "Fetches each starting resource and recursively expands its references \
                            into a printable tree. Resources already shown anywhere in the output \
                            are not expanded a second time, which also makes cyclic graphs safe."
    )]
    Tree {
        /// Resource path(s) of the form /<collection>/<uuid>
        #[arg(value_name = "PATH")]
        paths: Vec<String>,
        /// Show the tree of back references
        #[arg(short, long, conflicts_with = "parent")]
        reverse: bool,
        /// Show the tree of parents
        #[arg(short, long)]
        parent: bool,
        /// Base URL of the configuration service API
        #[arg(long, value_name = "URL")]
        server: Url,
        /// Maximum number of concurrent fetches
        #[arg(long, value_name = "N", default_value_t = refscope_core::exec::DEFAULT_WORKERS)]
        workers: usize,
    },
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let _guard = refscope_core::logging::init_logging("cli");

    let rt = tokio::runtime::Runtime::new()?;

    match cli.command {
        Commands::Tree {
            paths,
            reverse,
            parent,
            server,
            workers,
        } => rt.block_on(tree::run(paths, reverse, parent, server, workers)),
    }
}
