use super::{Move, State};

impl State {
    /// Every legal move, by source tube ascending then destination ascending.
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut result = Vec::new();
        let capacity = self.capacity();
        for (from, source) in self.tubes().iter().enumerate() {
            let item = match source.top() {
                Some(item) => item,
                None => continue,
            };
            for (to, destination) in self.tubes().iter().enumerate() {
                if from == to || destination.is_full(capacity) {
                    continue;
                }
                if destination.top().map_or(true, |top| top == item) {
                    result.push(Move::new(from, to));
                }
            }
        }
        return result;
    }

    /// Moves that can be undone: after `mv` is applied, `mv.reversed()` is
    /// legal. Playing these backwards from a sorted state only reaches states
    /// that sort again.
    pub fn reverse_moves(&self) -> Vec<Move> {
        let mut result = Vec::new();
        let capacity = self.capacity();
        for (from, source) in self.tubes().iter().enumerate() {
            // the item has to land back on its own color or on an empty tube
            if source.is_empty() || (source.len() > 1 && source.top_run() == 1) {
                continue;
            }
            for (to, destination) in self.tubes().iter().enumerate() {
                if from != to && !destination.is_full(capacity) {
                    result.push(Move::new(from, to));
                }
            }
        }
        return result;
    }

    pub fn can_move(&self, mv: Move) -> bool {
        self.check_move(mv).is_ok()
    }

    pub(crate) fn check_move(&self, mv: Move) -> Result<(), &'static str> {
        if mv.from == mv.to {
            return Err("source and destination are the same tube");
        }
        let (source, destination) = match (self.tube(mv.from), self.tube(mv.to)) {
            (Some(source), Some(destination)) => (source, destination),
            _ => return Err("tube index out of range"),
        };
        let item = source.top().ok_or("source tube is empty")?;
        if destination.is_full(self.capacity()) {
            return Err("destination tube is full");
        }
        match destination.top() {
            Some(top) if top != item => Err("destination top has a different color"),
            _ => Ok(()),
        }
    }
}
