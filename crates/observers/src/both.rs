use vicinity_core::Observer;

/// Runs two observers on every event.
///
/// Both observers always see the event. If both return an action, the first
/// observer's action wins.
#[derive(Debug, Clone, Default)]
pub struct Both<A, B>(pub A, pub B);

impl<E, Act, A, B> Observer<E, Act> for Both<A, B>
where
    A: Observer<E, Act>,
    B: Observer<E, Act>,
{
    fn observe(&mut self, event: &E) -> Option<Act> {
        let first = self.0.observe(event);
        let second = self.1.observe(event);
        first.or(second)
    }
}
