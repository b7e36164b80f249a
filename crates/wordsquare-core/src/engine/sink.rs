use crate::core::board::Board;

/// Destination for boards found by a search.
///
/// The coordinator is the only caller and calls it from a single thread, so implementations
/// need no synchronization. A sink cannot stop the search; sinks that can fail should record
/// the failure and report it once the search returns.
pub trait BoardSink {
    fn accept(&mut self, board: Board);
}

impl BoardSink for Vec<Board> {
    fn accept(&mut self, board: Board) {
        self.push(board);
    }
}

/// Sink that hands every board to a closure. Created by [`from_fn`].
pub struct FnSink<F>(F);

impl<F> BoardSink for FnSink<F>
where
    F: FnMut(Board),
{
    fn accept(&mut self, board: Board) {
        (self.0)(board)
    }
}

/// Wraps a closure as a [`BoardSink`].
pub fn from_fn<F>(f: F) -> FnSink<F>
where
    F: FnMut(Board),
{
    FnSink(f)
}
