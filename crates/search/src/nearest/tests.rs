use std::convert::Infallible;

use approx::assert_relative_eq;
use thiserror::Error;

use vicinity_core::{Candidate, Embedder, Embedding, Goal, Location, Metric};

use crate::metrics::{CosineDistance, CosineSimilarity, DotProduct, Euclidean};

use super::{
    Action, Config, Error, Event, Status, locate, maximize_unobserved, minimize,
    minimize_unobserved, nearest_unobserved, try_maximize, try_minimize, try_nearest,
};

fn candidate(x: f64, y: f64, values: &[f32]) -> Candidate {
    Candidate::new(x, y, values)
}

fn embedding(values: &[f32]) -> Embedding {
    Embedding::from(values)
}

/// Unit vector at `angle` radians, on the x/y grid cell `(i, i)`.
fn ray(i: usize, angle: f64) -> Candidate {
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    let (coord, values) = (i as f64, [angle.cos() as f32, angle.sin() as f32]);
    Candidate::new(coord, coord, values)
}

#[test]
fn finds_identical_direction() {
    let query = embedding(&[1.0, 0.0]);
    let candidates = vec![
        candidate(0.0, 0.0, &[1.0, 0.0]),
        candidate(1.0, 1.0, &[0.0, 1.0]),
        candidate(2.0, 2.0, &[0.9, 0.1]),
    ];

    let solution = minimize_unobserved(&query, candidates, &CosineDistance, &Config::default())
        .expect("scan should succeed");

    let best = solution.best.expect("a best match");
    assert_eq!(solution.status, Status::Exhausted);
    assert_eq!(solution.examined, 3);
    assert_eq!(best.location, Location::new(0.0, 0.0));
    assert_eq!(best.index, 0);
    assert_relative_eq!(best.score, 0.0, epsilon = 1e-12);
}

#[test]
fn empty_stream_has_no_best() {
    let query = embedding(&[1.0, 0.0]);

    let solution =
        minimize_unobserved(&query, Vec::new(), &CosineDistance, &Config::default()).unwrap();

    assert_eq!(solution.status, Status::Exhausted);
    assert_eq!(solution.examined, 0);
    assert!(solution.best.is_none());
    assert!(solution.location().is_none());
}

#[test]
fn result_is_optimal_over_whole_stream() {
    // Pseudo-random 4-d vectors from a small LCG.
    let mut state: u32 = 0x2545_f491;
    let mut next = move || {
        state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        f32::from(u16::try_from(state >> 16).unwrap()) / f32::from(u16::MAX) - 0.5
    };
    let candidates: Vec<Candidate> = (0..200)
        .map(|i| {
            let values = [next(), next(), next(), next()];
            Candidate::new(f64::from(i), -f64::from(i), values)
        })
        .collect();
    let query = embedding(&[0.2, -0.1, 0.4, 0.05]);

    let solution =
        minimize_unobserved(&query, candidates.clone(), &Euclidean, &Config::default()).unwrap();
    let best = solution.best.unwrap();

    for c in &candidates {
        assert!(best.score <= Euclidean.score(&query, &c.embedding));
    }
    assert_eq!(best.location, candidates[best.index].location());
}

#[test]
fn ties_keep_first_candidate() {
    let query = embedding(&[1.0, 0.0]);
    let candidates = vec![
        candidate(5.0, 5.0, &[0.0, 1.0]),
        candidate(7.0, 7.0, &[2.0, 0.0]),
        candidate(9.0, 9.0, &[3.0, 0.0]),
    ];

    let solution =
        minimize_unobserved(&query, candidates, &CosineDistance, &Config::default()).unwrap();

    assert_eq!(solution.location(), Some(Location::new(7.0, 7.0)));
}

#[test]
fn dimension_mismatch_halts_scan() {
    let query = embedding(&[1.0, 0.0]);
    let mut pulled = 0;
    let candidates = (0..10).map(|i| {
        pulled += 1;
        if i == 2 {
            candidate(2.0, 2.0, &[1.0, 0.0, 0.0])
        } else {
            candidate(f64::from(i), 0.0, &[1.0, 0.0])
        }
    });

    let result = minimize_unobserved(&query, candidates, &CosineDistance, &Config::default());

    assert!(matches!(
        result,
        Err(Error::DimensionMismatch {
            index: 2,
            expected: 2,
            found: 3
        })
    ));
    assert_eq!(pulled, 3);
}

#[test]
fn maximizing_similarity_agrees_with_minimizing_distance() {
    let query = embedding(&[0.6, 0.8]);
    let candidates: Vec<Candidate> = (0..16_u8)
        .map(|i| ray(usize::from(i), f64::from(i) * 0.2))
        .collect();

    let by_distance =
        minimize_unobserved(&query, candidates.clone(), &CosineDistance, &Config::default())
            .unwrap();
    let by_similarity =
        maximize_unobserved(&query, candidates, &CosineSimilarity, &Config::default()).unwrap();

    let (d, s) = (by_distance.best.unwrap(), by_similarity.best.unwrap());
    assert_eq!(d.index, s.index);
    assert_relative_eq!(d.score, 1.0 - s.score, epsilon = 1e-12);
}

#[test]
fn nearest_follows_metric_goal() {
    let query = embedding(&[1.0, 0.0]);
    let candidates = vec![
        candidate(0.0, 0.0, &[0.5, 0.0]),
        candidate(1.0, 0.0, &[4.0, 0.0]),
    ];

    let by_dot =
        nearest_unobserved(&query, candidates.clone(), &DotProduct, &Config::default()).unwrap();
    let by_l2 = nearest_unobserved(&query, candidates, &Euclidean, &Config::default()).unwrap();

    assert_eq!(by_dot.best.unwrap().index, 1);
    assert_eq!(by_l2.best.unwrap().index, 0);
}

#[test]
fn config_goal_overrides_metric_goal() {
    let query = embedding(&[1.0, 0.0]);
    let candidates = vec![
        candidate(0.0, 0.0, &[1.0, 0.0]),
        candidate(1.0, 0.0, &[-1.0, 0.0]),
    ];
    let config = Config::default().with_goal(Goal::Maximize);

    // Farthest match by cosine distance.
    let solution = nearest_unobserved(&query, candidates, &CosineDistance, &config).unwrap();

    assert_eq!(solution.best.unwrap().index, 1);
    assert_relative_eq!(solution.best.unwrap().score, 2.0, epsilon = 1e-12);
}

#[test]
fn infinite_stream_stops_at_cap() {
    let query = embedding(&[1.0, 0.0]);
    let mut pulled = 0_usize;
    let stream = (0_usize..).map(|i| {
        pulled += 1;
        ray(i, 1.0 + 1.0 / (1.0 + f64::from(u32::try_from(i).unwrap())))
    });
    let config = Config::new(Some(100), None).unwrap();

    let solution = minimize_unobserved(&query, stream, &CosineDistance, &config).unwrap();

    assert_eq!(solution.status, Status::MaxCandidates);
    assert_eq!(solution.examined, 100);
    assert_eq!(pulled, 100);
    // Angles shrink toward 1.0 rad, so the last candidate is closest.
    assert_eq!(solution.best.unwrap().index, 99);
}

#[test]
fn zero_cap_pulls_nothing() {
    let query = embedding(&[1.0, 0.0]);
    let mut pulled = 0;
    let stream = std::iter::repeat_with(|| {
        pulled += 1;
        candidate(0.0, 0.0, &[1.0, 0.0])
    });
    let config = Config::new(Some(0), None).unwrap();

    let solution = minimize_unobserved(&query, stream, &CosineDistance, &config).unwrap();

    assert_eq!(solution.status, Status::MaxCandidates);
    assert!(solution.best.is_none());
    assert_eq!(pulled, 0);
}

#[test]
fn infinite_stream_stops_at_target() {
    let query = embedding(&[1.0, 0.0]);
    // Angles step down from 1.5 rad by 0.1 each candidate.
    let stream = (0_u8..).map(|i| ray(usize::from(i), 1.5 - f64::from(i) * 0.1));
    let config = Config::new(None, Some(1.0 - 0.3_f64.cos())).unwrap();

    let solution = minimize_unobserved(&query, stream, &CosineDistance, &config).unwrap();

    assert_eq!(solution.status, Status::TargetReached);
    // Angle 0.3 rad is reached at index 12 (within float tolerance of the target).
    let best = solution.best.unwrap();
    assert!(best.index == 12 || best.index == 13);
    assert_eq!(solution.examined, best.index + 1);
}

#[test]
fn observer_can_stop_early() {
    let query = embedding(&[1.0, 0.0]);
    let stream = std::iter::repeat_with(|| candidate(0.0, 0.0, &[0.0, 1.0]));

    let mut events = 0;
    let observer = |_event: &Event<'_>| {
        events += 1;
        (events == 25).then_some(Action::StopEarly)
    };

    let solution = minimize(&query, stream, &CosineDistance, &Config::default(), observer)
        .expect("should stop cleanly");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.examined, 25);
    assert_eq!(events, 25);
    // Every candidate ties, so the first one is kept.
    assert_eq!(solution.best.unwrap().index, 0);
}

#[test]
fn stop_early_still_considers_current_candidate() {
    let query = embedding(&[1.0, 0.0]);
    let candidates = vec![
        candidate(0.0, 0.0, &[0.0, 1.0]),
        candidate(1.0, 1.0, &[1.0, 0.0]),
        candidate(2.0, 2.0, &[1.0, 0.0]),
    ];

    let observer = |event: &Event<'_>| (event.score < 0.5).then_some(Action::StopEarly);

    let solution =
        minimize(&query, candidates, &CosineDistance, &Config::default(), observer).unwrap();

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.location(), Some(Location::new(1.0, 1.0)));
}

#[test]
fn skip_excludes_candidate_from_best() {
    let query = embedding(&[1.0, 0.0]);
    let candidates = vec![
        candidate(0.0, 0.0, &[1.0, 0.0]),
        candidate(1.0, 1.0, &[1.0, 0.2]),
        candidate(2.0, 2.0, &[0.0, 1.0]),
    ];

    // Exclude the query's own location.
    let observer = |event: &Event<'_>| {
        (event.location() == Location::new(0.0, 0.0)).then_some(Action::Skip)
    };

    let solution =
        minimize(&query, candidates, &CosineDistance, &Config::default(), observer).unwrap();

    assert_eq!(solution.examined, 3);
    assert_eq!(solution.location(), Some(Location::new(1.0, 1.0)));
}

#[test]
fn events_report_best_before_candidate() {
    let query = embedding(&[1.0, 0.0]);
    let candidates = vec![
        candidate(0.0, 0.0, &[0.0, 1.0]),
        candidate(1.0, 1.0, &[1.0, 0.0]),
        candidate(2.0, 2.0, &[1.0, 1.0]),
    ];

    let mut seen = Vec::new();
    let observer = |event: &Event<'_>| {
        seen.push((event.index, event.best.map(|m| m.index)));
        None
    };

    minimize(&query, candidates, &CosineDistance, &Config::default(), observer).unwrap();

    assert_eq!(seen, vec![(0, None), (1, Some(0)), (2, Some(1))]);
}

/// Scores NaN whenever the candidate's first value is negative.
struct Picky;

impl Metric for Picky {
    fn score(&self, query: &[f32], candidate: &[f32]) -> f64 {
        if candidate[0] < 0.0 {
            f64::NAN
        } else {
            Euclidean.score(query, candidate)
        }
    }

    fn goal(&self) -> Goal {
        Goal::Minimize
    }
}

#[test]
fn nan_scores_never_become_best() {
    let query = embedding(&[0.0, 0.0]);
    let candidates = vec![
        candidate(0.0, 0.0, &[-1.0, 0.0]),
        candidate(1.0, 1.0, &[3.0, 0.0]),
        candidate(2.0, 2.0, &[-0.1, 0.0]),
    ];

    let solution = minimize_unobserved(&query, candidates, &Picky, &Config::default()).unwrap();

    assert_eq!(solution.best.unwrap().index, 1);
}

// --- Fallible sources ---

#[derive(Debug, Clone, PartialEq, Error)]
#[error("tile {tile} is unreadable")]
struct TileError {
    tile: usize,
}

#[test]
fn source_error_passes_through_unchanged() {
    let query = embedding(&[1.0, 0.0]);
    let mut pulled = 0;
    let stream = (0..10).map(|i| {
        pulled += 1;
        if i == 4 {
            Err(TileError { tile: 4 })
        } else {
            Ok(candidate(f64::from(i), 0.0, &[1.0, 0.0]))
        }
    });

    let result = try_nearest(&query, stream, &CosineDistance, &Config::default(), ());

    let err = result.expect_err("source error should abort");
    assert_eq!(err.into_source(), Some(TileError { tile: 4 }));
    assert_eq!(pulled, 5);
}

#[test]
fn fallible_stream_without_errors_matches_infallible() {
    let query = embedding(&[0.0, 1.0]);
    let candidates: Vec<Candidate> = (0..8_u8)
        .map(|i| ray(usize::from(i), f64::from(i) * 0.3))
        .collect();

    let plain =
        nearest_unobserved(&query, candidates.clone(), &CosineDistance, &Config::default())
            .unwrap();
    let fallible = try_nearest(
        &query,
        candidates.into_iter().map(Ok::<_, TileError>),
        &CosineDistance,
        &Config::default(),
        (),
    )
    .unwrap();

    assert_eq!(plain, fallible);
}

#[test]
fn try_minimize_scans_fallible_stream() {
    let query = embedding(&[0.0, 0.0]);
    let stream = vec![
        Ok::<_, TileError>(candidate(0.0, 0.0, &[3.0, 4.0])),
        Ok(candidate(1.0, 0.0, &[1.0, 0.0])),
        Ok(candidate(2.0, 0.0, &[0.0, 2.0])),
    ];
    let mut seen = 0;

    let solution = try_minimize(
        &query,
        stream,
        &Euclidean,
        &Config::default(),
        |_: &Event<'_>| -> Option<Action> {
            seen += 1;
            None
        },
    )
    .unwrap();

    let best = solution.best.unwrap();
    assert_eq!(solution.status, Status::Exhausted);
    assert_eq!(best.index, 1);
    assert_eq!(best.location, Location::new(1.0, 0.0));
    assert_relative_eq!(best.score, 1.0);
    assert_eq!(seen, 3);
}

#[test]
fn try_maximize_stops_at_source_error() {
    let query = embedding(&[1.0, 0.0]);
    let mut pulled = 0;
    let stream = (0_u8..6).map(|i| {
        pulled += 1;
        if i == 2 {
            Err(TileError { tile: 2 })
        } else {
            Ok(candidate(f64::from(i), 0.0, &[f32::from(i), 0.0]))
        }
    });

    let result = try_maximize(&query, stream, &DotProduct, &Config::default(), ());

    assert!(matches!(result, Err(Error::Source(TileError { tile: 2 }))));
    assert_eq!(pulled, 3);
}

// --- Embedding the query ---

/// Embeds a patch as its per-band mean.
struct BandMean;

#[derive(Debug, Error)]
#[error("patch has no pixels")]
struct EmptyPatch;

impl Embedder for BandMean {
    type Input = Vec<[f32; 2]>;
    type Error = EmptyPatch;

    fn embed(&self, patch: &Self::Input) -> Result<Embedding, Self::Error> {
        if patch.is_empty() {
            return Err(EmptyPatch);
        }
        #[allow(clippy::cast_precision_loss)]
        let n = patch.len() as f32;
        let sum = patch
            .iter()
            .fold([0.0_f32; 2], |acc, px| [acc[0] + px[0], acc[1] + px[1]]);
        Ok(Embedding::from([sum[0] / n, sum[1] / n]))
    }
}

#[test]
fn locate_embeds_then_searches() {
    let model = BandMean;
    let patch = vec![[0.9, 0.1], [1.1, -0.1]];
    let candidates = vec![
        candidate(10.0, 20.0, &[0.0, 1.0]),
        candidate(30.0, 40.0, &[2.0, 0.0]),
    ];

    let solution = locate(
        &model,
        &patch,
        candidates.into_iter().map(Ok::<_, Infallible>),
        &CosineDistance,
        &Config::default(),
        (),
    )
    .unwrap();

    assert_eq!(solution.location(), Some(Location::new(30.0, 40.0)));
}

#[test]
fn locate_reports_embedding_failure() {
    let result = locate(
        &BandMean,
        &Vec::new(),
        std::iter::empty::<Result<Candidate, Infallible>>(),
        &CosineDistance,
        &Config::default(),
        (),
    );

    assert!(matches!(result, Err(Error::Embed(_))));
}

#[test]
fn infallible_errors_widen() {
    let err: Error = Error::DimensionMismatch {
        index: 1,
        expected: 2,
        found: 3,
    };

    let widened: Error<TileError> = err.widen();

    assert!(matches!(
        widened,
        Error::DimensionMismatch {
            index: 1,
            expected: 2,
            found: 3
        }
    ));
}
