use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use video_console::repl::{self, Flow};
use video_console::{loader, Console, StdinSelection};

#[derive(Parser, Debug)]
#[command(name = "video-console")]
#[command(about = "Browse and curate an in-memory video catalog", long_about = None)]
struct Args {
    /// Path to a catalog file (defaults to the built-in dataset)
    #[arg(short = 'c', long)]
    catalog: Option<String>,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging (stderr, so the command transcript stays clean)
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Expand ~ in the catalog path
    let catalog = match &args.catalog {
        Some(path) => {
            let path = shellexpand::tilde(path);
            loader::load_catalog(PathBuf::from(path.as_ref()).as_path())?
        }
        None => loader::default_catalog(),
    };
    log::info!("Catalog loaded: {} videos", catalog.len());

    let mut console = Console::new(catalog, io::stdout(), StdinSelection);
    println!("Type HELP for a list of commands, EXIT to leave.");

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        // EOF ends the session like EXIT
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        if repl::execute_line(&mut console, &line)? == Flow::Exit {
            break;
        }
    }

    println!("Goodbye!");
    Ok(())
}
