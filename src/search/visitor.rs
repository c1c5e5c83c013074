use crate::geometry::Position;


/// Why a cell is being reported
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VisitKind {
    /// Popped from the frontier, about to be expanded
    Explored,
    /// Part of the final path (start and goal excluded)
    Path,
}


/// Observer notified as a search progresses
///
/// Explored cells arrive in pop order, before the cell is expanded. The
/// visitor may block (e.g. to pace an animation); searches do not depend on
/// its timing.
pub trait Visitor {
    fn visit(&mut self, pos: Position, kind: VisitKind);
}

impl<F> Visitor for F
where
    F: FnMut(Position, VisitKind),
{
    fn visit(&mut self, pos: Position, kind: VisitKind) {
        self(pos, kind)
    }
}


/// Visitor that ignores everything
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopVisitor;

impl Visitor for NoopVisitor {
    fn visit(&mut self, _pos: Position, _kind: VisitKind) {}
}


/// Visitor that records every report, handy in tests and replays
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordingVisitor {
    pub events: Vec<(Position, VisitKind)>,
}

impl RecordingVisitor {

    pub fn new() -> Self {
        Self::default()
    }

    /// Positions reported with `kind`, in order
    pub fn positions(&self, kind: VisitKind) -> Vec<Position> {
        self.events
            .iter()
            .filter(|(_, k)| *k == kind)
            .map(|(pos, _)| *pos)
            .collect()
    }
}

impl Visitor for RecordingVisitor {
    fn visit(&mut self, pos: Position, kind: VisitKind) {
        self.events.push((pos, kind));
    }
}
