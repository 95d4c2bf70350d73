use crate::game::{Move, State, Tube};

/// Moves still needed by `state`, never overestimated.
///
/// Only the top of a tube moves, so whatever stays in a tube for good is a
/// prefix of what it holds now. A sorted tube keeps at most its bottom run,
/// which means every item above that run has to leave at least once, and a
/// move takes exactly one item out of one tube. Zero exactly on states where
/// every tube is monochrome.
pub fn lower_bound(state: &State) -> usize {
    state.tubes().iter().map(misplaced).sum()
}

fn misplaced(tube: &Tube) -> usize {
    tube.len() - tube.bottom_run()
}

/// Lower bound of the state reached by the legal move `mv`, given the bound
/// of `state` itself.
pub(crate) fn bound_after(state: &State, parent_bound: usize, mv: Move) -> usize {
    let (source, destination) = (&state.tubes()[mv.from], &state.tubes()[mv.to]);
    let mut bound = parent_bound;
    // leaving the source: the item was above the bottom run unless the run was the whole tube
    if source.bottom_run() < source.len() {
        bound -= 1;
    }
    // landing on the destination: misplaced unless it extends a monochrome tube
    if !destination.is_monochrome() {
        bound += 1;
    }
    return bound;
}
