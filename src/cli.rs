// src/cli.rs
use std::io::{ self, BufWriter, Write };
use std::path::PathBuf;
use std::time::Duration;

use clap::{ Parser, Subcommand };
use color_eyre::eyre::{ Result, eyre };

use crate::{
    config::{ consts::DB_FILE, options::ScrapeOptions },
    csv,
    data::library_headers,
    progress::Progress,
    scrape::{ self, ScrapeOutcome },
    source::BrowserSession,
    store::{ self, Store },
};

/// Scrape public library listings into SQLite and query them.
#[derive(Parser, Debug)]
#[command(name = "pl_scrape", version, about)]
pub struct Cli {
    /// SQLite file to read/write
    #[arg(long, global = true, default_value = DB_FILE)]
    pub db: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scrape every state into the store (skipped if the store is already populated)
    Scrape {
        /// State index page
        #[arg(long)]
        index_url: Option<String>,

        /// Pause after each state page, in milliseconds
        #[arg(long)]
        pause_ms: Option<u64>,

        /// Show the browser window instead of running headless
        #[arg(long)]
        headed: bool,
    },
    /// List state names in the store
    States,
    /// Print a state's libraries as CSV
    Libraries {
        state: String,

        /// Omit the header line
        #[arg(long)]
        no_headers: bool,
    },
}

impl Cli {
    pub fn options(&self) -> ScrapeOptions {
        let mut opts = ScrapeOptions::default().with_db_path(&self.db);
        if let Command::Scrape { index_url, pause_ms, headed } = &self.command {
            if let Some(u) = index_url {
                opts.target.index_url = u.clone();
            }
            if let Some(ms) = pause_ms {
                opts.pause = Duration::from_millis(*ms);
            }
            opts.browser.headless = !headed;
        }
        opts
    }
}

/// Prints status lines as they come.
struct CliProgress {
    done: usize,
    total: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
    fn item_done(&mut self, state: &str, libraries: usize) {
        self.done += 1;
        println!("  {state}: {libraries} libraries ({}/{})", self.done, self.total);
    }
    fn item_skipped(&mut self, state: &str) {
        self.done += 1;
        println!("  {state}: already saved ({}/{})", self.done, self.total);
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    crate::log::init_stderr();

    let opts = cli.options();
    match &cli.command {
        Command::Scrape { .. } => {
            let mut prog = CliProgress { done: 0, total: 0 };
            match scrape::run(&opts, BrowserSession::launch, Some(&mut prog)) {
                ScrapeOutcome::Skipped => {}
                ScrapeOutcome::Completed(s) => {
                    println!("{} states, {} libraries written", s.states, s.libraries);
                }
                ScrapeOutcome::Failed(e) => return Err(eyre!(e)),
            }
        }
        Command::States => {
            let store = open_existing(&opts)?;
            for name in store.state_names()? {
                println!("{name}");
            }
        }
        Command::Libraries { state, no_headers } => {
            let store = open_existing(&opts)?;
            let libs = store.libraries_for(state)?;
            if libs.is_empty() {
                println!("No libraries found for {state}.");
                return Ok(());
            }
            let mut out = BufWriter::new(io::stdout().lock());
            if !no_headers {
                csv::write_row(&mut out, library_headers().as_slice(), ',')?;
            }
            for l in &libs {
                csv::write_row(&mut out, l.cells().as_slice(), ',')?;
            }
            out.flush()?;
        }
    }
    Ok(())
}

fn open_existing(opts: &ScrapeOptions) -> Result<Store> {
    if !store::exists(&opts.db_path) {
        return Err(eyre!("no store at {}; run `scrape` first", opts.db_path.display()));
    }
    Ok(Store::open_read_only(&opts.db_path)?)
}
