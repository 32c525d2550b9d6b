use tracing::{debug, debug_span, trace};

use vicinity_core::{Candidate, Embedding, Goal, Metric, Observer};

use super::{Action, Config, Error, Event, Match, Solution, Status, best::Best};

/// Core single-pass scan.
///
/// Candidates are pulled one at a time and dropped after scoring, so memory
/// use does not depend on the stream's length. The stream is never pulled
/// past the candidate that ends the scan.
pub(super) fn scan<I, E, M, Obs>(
    query: &Embedding,
    candidates: I,
    metric: &M,
    config: &Config,
    goal: Goal,
    mut observer: Obs,
) -> Result<Solution, Error<E>>
where
    I: IntoIterator<Item = Result<Candidate, E>>,
    M: Metric + ?Sized,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let span = debug_span!("nearest", dim = query.dim(), ?goal);
    let _guard = span.enter();

    let mut best = Best::empty(goal);
    let mut examined = 0;
    let mut candidates = candidates.into_iter();

    let status = loop {
        if config.max_candidates().is_some_and(|max| examined >= max) {
            break Status::MaxCandidates;
        }

        let Some(next) = candidates.next() else {
            break Status::Exhausted;
        };

        let index = examined;
        let candidate = next.map_err(Error::Source)?;
        if candidate.embedding.dim() != query.dim() {
            return Err(Error::DimensionMismatch {
                index,
                expected: query.dim(),
                found: candidate.embedding.dim(),
            });
        }

        let score = metric.score(query, &candidate.embedding);
        examined += 1;

        let event = Event {
            index,
            candidate: &candidate,
            score,
            best: best.get(),
        };
        let action = observer.observe(&event);

        if action != Some(Action::Skip) {
            let accepted = best.update(Match {
                location: candidate.location(),
                score,
                index,
            });
            if accepted {
                trace!(index, score, x = candidate.x, y = candidate.y, "new best");
            }
        }

        if action == Some(Action::StopEarly) {
            break Status::StoppedByObserver;
        }

        if let Some(target) = config.target()
            && best.reaches(target)
        {
            break Status::TargetReached;
        }
    };

    debug!(?status, examined, "scan finished");
    Ok(best.finish(status, examined))
}
