use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use vicinity_core::{Goal, Metric};
use vicinity_search::metrics::{CosineDistance, CosineSimilarity, DotProduct, Euclidean};

/// Find the candidate location whose embedding best matches a query.
#[derive(Debug, Parser)]
#[command(name = "vicinity", version, about)]
pub struct Args {
    /// JSON file holding the query embedding as an array of numbers.
    #[arg(short, long)]
    pub query: PathBuf,

    /// JSON Lines file of `{"x", "y", "embedding"}` candidates; `-` reads stdin.
    #[arg(short, long, default_value = "-")]
    pub candidates: PathBuf,

    /// Scoring metric.
    #[arg(short, long, value_enum, default_value_t = MetricKind::CosineDistance)]
    pub metric: MetricKind,

    /// Override the metric's natural direction.
    #[arg(long, value_enum)]
    pub goal: Option<GoalArg>,

    /// Stop after examining this many candidates.
    #[arg(long)]
    pub max_candidates: Option<usize>,

    /// Stop once the best score reaches this value (inclusive).
    #[arg(long)]
    pub target: Option<f64>,

    /// Stop as soon as a candidate scores strictly below this value.
    #[arg(long, conflicts_with = "stop_above")]
    pub stop_below: Option<f64>,

    /// Stop as soon as a candidate scores strictly above this value.
    #[arg(long)]
    pub stop_above: Option<f64>,

    /// Log a progress line every N candidates (0 disables).
    #[arg(long, default_value_t = 0)]
    pub progress: usize,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Metrics selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MetricKind {
    CosineDistance,
    CosineSimilarity,
    Euclidean,
    DotProduct,
}

impl Metric for MetricKind {
    fn score(&self, query: &[f32], candidate: &[f32]) -> f64 {
        match self {
            Self::CosineDistance => CosineDistance.score(query, candidate),
            Self::CosineSimilarity => CosineSimilarity.score(query, candidate),
            Self::Euclidean => Euclidean.score(query, candidate),
            Self::DotProduct => DotProduct.score(query, candidate),
        }
    }

    fn goal(&self) -> Goal {
        match self {
            Self::CosineDistance => CosineDistance.goal(),
            Self::CosineSimilarity => CosineSimilarity.goal(),
            Self::Euclidean => Euclidean.goal(),
            Self::DotProduct => DotProduct.goal(),
        }
    }
}

/// Search direction on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GoalArg {
    Minimize,
    Maximize,
}

impl From<GoalArg> for Goal {
    fn from(arg: GoalArg) -> Self {
        match arg {
            GoalArg::Minimize => Goal::Minimize,
            GoalArg::Maximize => Goal::Maximize,
        }
    }
}
