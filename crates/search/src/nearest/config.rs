use thiserror::Error;

use vicinity_core::Goal;

/// Configuration for a nearest-match scan.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "ConfigRepr", into = "ConfigRepr")
)]
pub struct Config {
    max_candidates: Option<usize>,
    target: Option<f64>,
    goal: Option<Goal>,
}

/// Errors that can occur when validating a scan config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("target must be finite")]
    Target,
}

impl Config {
    /// Creates a new config.
    ///
    /// - `max_candidates` caps how many candidates are pulled from the stream;
    ///   `None` scans until the stream is exhausted.
    /// - `target` stops the scan once the best score reaches it (inclusive).
    ///
    /// # Errors
    ///
    /// Returns an error if `target` is not finite.
    pub fn new(max_candidates: Option<usize>, target: Option<f64>) -> Result<Self, ConfigError> {
        if target.is_some_and(|t| !t.is_finite()) {
            return Err(ConfigError::Target);
        }

        Ok(Self {
            max_candidates,
            target,
            goal: None,
        })
    }

    /// Sets an explicit direction, overriding the metric's natural goal.
    ///
    /// Only [`nearest`](super::nearest) and its variants consult this;
    /// [`minimize`](super::minimize) and [`maximize`](super::maximize) fix
    /// their own direction.
    #[must_use]
    pub fn with_goal(mut self, goal: Goal) -> Self {
        self.goal = Some(goal);
        self
    }

    /// Returns the maximum number of candidates to examine.
    #[must_use]
    pub fn max_candidates(&self) -> Option<usize> {
        self.max_candidates
    }

    /// Returns the target score, if any.
    #[must_use]
    pub fn target(&self) -> Option<f64> {
        self.target
    }

    /// Returns the explicit direction override, if any.
    #[must_use]
    pub fn goal(&self) -> Option<Goal> {
        self.goal
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigRepr {
    #[serde(default)]
    max_candidates: Option<usize>,
    #[serde(default)]
    target: Option<f64>,
    #[serde(default)]
    goal: Option<Goal>,
}

#[cfg(feature = "serde")]
impl TryFrom<ConfigRepr> for Config {
    type Error = ConfigError;

    fn try_from(repr: ConfigRepr) -> Result<Self, Self::Error> {
        let config = Self::new(repr.max_candidates, repr.target)?;
        Ok(match repr.goal {
            Some(goal) => config.with_goal(goal),
            None => config,
        })
    }
}

#[cfg(feature = "serde")]
impl From<Config> for ConfigRepr {
    fn from(config: Config) -> Self {
        Self {
            max_candidates: config.max_candidates,
            target: config.target,
            goal: config.goal,
        }
    }
}
