//! Vicinity CLI.
//!
//! Reads a query embedding and a stream of located candidate embeddings, then
//! prints the best-matching location as JSON.
//!
//! ```text
//! vicinity --query patch.json --candidates index.jsonl
//! cat index.jsonl | vicinity -q patch.json --metric cosine-similarity --stop-above 0.98
//! ```

mod args;
mod reader;

use std::{
    fs::File,
    io::{self, BufRead, BufReader, Read, Write},
    path::Path,
};

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use vicinity_core::{Embedding, Metric, Observer};
use vicinity_observers::{Both, Progress, StopWhen};
use vicinity_search::nearest::{self, Action, Config, Event};

use args::Args;
use reader::Candidates;

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let query = read_query(&args.query)?;
    let candidates = open_candidates(&args.candidates)?;

    let mut config = Config::new(args.max_candidates, args.target).context("invalid --target")?;
    if let Some(goal) = args.goal {
        config = config.with_goal(goal.into());
    }
    let goal = config.goal().unwrap_or_else(|| args.metric.goal());

    let mut stop = args
        .stop_below
        .map(StopWhen::below)
        .or(args.stop_above.map(StopWhen::above));
    let observer = Both(
        Progress::new(goal, args.progress),
        move |event: &Event<'_>| -> Option<Action> {
            stop.as_mut()
                .and_then(|stop| Observer::<Event<'_>, Action>::observe(stop, event))
        },
    );

    info!(dim = query.dim(), metric = ?args.metric, ?goal, "searching");
    let solution = nearest::try_nearest(
        &query,
        Candidates::new(candidates),
        &args.metric,
        &config,
        observer,
    )
    .context("search failed")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, &solution)?;
    writeln!(out)?;
    Ok(())
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_query(path: &Path) -> Result<Embedding> {
    let file =
        File::open(path).with_context(|| format!("failed to open query {}", path.display()))?;
    parse_query(BufReader::new(file)).with_context(|| format!("invalid query {}", path.display()))
}

fn parse_query<R: Read>(reader: R) -> Result<Embedding> {
    let values: Vec<f32> =
        serde_json::from_reader(reader).context("expected a JSON array of numbers")?;

    if values.is_empty() {
        bail!("query embedding is empty");
    }
    Ok(Embedding::from(values))
}

fn open_candidates(path: &Path) -> Result<Box<dyn BufRead>> {
    if path.as_os_str() == "-" {
        return Ok(Box::new(BufReader::new(io::stdin())));
    }

    let file = File::open(path)
        .with_context(|| format!("failed to open candidates {}", path.display()))?;
    Ok(Box::new(BufReader::new(file)))
}
