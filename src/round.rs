use super::*;

/// One completed round as reported by the orchestrator.
///
/// `winner` is whatever the orchestrator announced. We keep it for
/// standings but never feed it into the replay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    winner: i64,
    moves: Vec<Value>,
}

impl Round {
    /// Validate raw selections against the game. Exactly one selection per
    /// player, each either in `[1, m]` or `NO_MOVE`.
    pub fn new(winner: i64, moves: Vec<i64>, setup: &Setup) -> Result<Self, Error> {
        if moves.len() != setup.players() {
            return Err(Error::MalformedRound(format!(
                "expected {} selections, got {}",
                setup.players(),
                moves.len()
            )));
        }
        let moves = moves
            .into_iter()
            .enumerate()
            .map(|(i, mv)| match usize::try_from(mv) {
                Ok(v) if v == NO_MOVE || setup.allows(v) => Ok(v),
                _ => Err(Error::MalformedRound(format!(
                    "P{} selected {} outside [1, {}]",
                    i + 1,
                    mv,
                    setup.options()
                ))),
            })
            .collect::<Result<Vec<Value>, Error>>()?;
        Ok(Self { winner, moves })
    }
    pub fn winner(&self) -> i64 {
        self.winner
    }
    /// Selection of the 1-indexed player.
    pub fn selection(&self, seat: Seat) -> Value {
        self.moves.get(seat.wrapping_sub(1)).copied().unwrap_or(NO_MOVE)
    }
    /// How many players picked `v`, self included.
    pub fn pickers(&self, v: Value) -> usize {
        self.moves.iter().filter(|mv| **mv == v).count()
    }
    /// `(seat, selection)` pairs in player order.
    pub fn selections(&self) -> impl Iterator<Item = (Seat, Value)> + '_ {
        self.moves.iter().enumerate().map(|(i, v)| (i + 1, *v))
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "winner {} |", self.winner)?;
        self.moves.iter().try_for_each(|mv| write!(f, " {}", mv))
    }
}

/// Histogram of what the *other* players picked in the latest round.
/// Indexed by value, slot 0 unused.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally(Vec<usize>);

impl Tally {
    /// All-zero tally sized for a game.
    pub fn empty(setup: &Setup) -> Self {
        Self(vec![0; setup.options() + 1])
    }
    pub fn count(&self, v: Value) -> usize {
        self.0.get(v).copied().unwrap_or(0)
    }
    /// Largest value this tally covers.
    pub fn options(&self) -> Value {
        self.0.len().saturating_sub(1)
    }
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|c| *c == 0)
    }
}

impl From<(&Round, &Setup)> for Tally {
    fn from((round, setup): (&Round, &Setup)) -> Self {
        let mut tally = Self::empty(setup);
        round
            .selections()
            .filter(|(seat, _)| *seat != setup.seat())
            .filter(|(_, v)| *v != NO_MOVE)
            .for_each(|(_, v)| tally.0[v] += 1);
        tally
    }
}

impl From<Vec<usize>> for Tally {
    fn from(counts: Vec<usize>) -> Self {
        Self(counts)
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let counts = (1..=self.options())
            .map(|v| format!("{}:{}", v, self.count(v)))
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "{{{}}}", counts)
    }
}
