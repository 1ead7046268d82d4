use super::GameStatus;

/// Receives the status recomputed after each transition of a `Game`.
///
/// Exactly one call is made per applied, undone or redone move, and per
/// snapshot restore or reset.
pub trait StatusListener {
    fn on_status(&mut self, status: &GameStatus);
}

impl<F> StatusListener for F
where
    F: FnMut(&GameStatus),
{
    fn on_status(&mut self, status: &GameStatus) {
        self(status)
    }
}
