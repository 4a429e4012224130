use super::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Trait for strategies that pick a value each round.
///
/// The session drives a player through `start` once per game, then
/// interleaves `decide` (on `yourmove`) and `observe` (on each valid
/// `move`). Players never see malformed rounds.
pub trait Player {
    /// Forget everything and prepare for a new game.
    fn start(&mut self, setup: &Setup);
    /// Value to propose for the upcoming round.
    fn decide(&mut self) -> Value;
    /// Learn from a completed round. Returns the value this player's own
    /// replay credited with the win, if it replays at all.
    fn observe(&mut self, round: &Round, tally: &Tally) -> Option<Value>;
}

impl<P> Player for Box<P>
where
    P: Player + ?Sized,
{
    fn start(&mut self, setup: &Setup) {
        (**self).start(setup)
    }
    fn decide(&mut self) -> Value {
        (**self).decide()
    }
    fn observe(&mut self, round: &Round, tally: &Tally) -> Option<Value> {
        (**self).observe(round, tally)
    }
}

/// The counting engine. Replays every round against the opponents'
/// histogram and proposes the value with the most replayed wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counter {
    wins: Wins,
    best: Value,
}

impl Default for Counter {
    fn default() -> Self {
        Self {
            wins: Wins::default(),
            best: DEFAULT_MOVE,
        }
    }
}

impl Counter {
    pub fn wins(&self) -> &Wins {
        &self.wins
    }
    pub fn best(&self) -> Value {
        self.best
    }
}

impl Player for Counter {
    fn start(&mut self, setup: &Setup) {
        self.wins = Wins::new(setup);
        self.best = DEFAULT_MOVE;
    }
    fn decide(&mut self) -> Value {
        self.best
    }
    fn observe(&mut self, _: &Round, tally: &Tally) -> Option<Value> {
        let credited = self.wins.replay(tally);
        self.best = self.wins.best(self.best);
        log::debug!("[counter] credited {:?}, wins {}", credited, self.wins);
        credited
    }
}

/// Uniformly random player. Useful as a sparring partner and baseline.
#[derive(Debug, Clone)]
pub struct Fish {
    rng: SmallRng,
    options: Option<Value>,
}

impl Fish {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            options: None,
        }
    }
}

impl Default for Fish {
    fn default() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
            options: None,
        }
    }
}

impl Player for Fish {
    fn start(&mut self, setup: &Setup) {
        self.options = Some(setup.options());
    }
    fn decide(&mut self) -> Value {
        use rand::Rng;
        match self.options {
            Some(m) => self.rng.random_range(1..=m),
            None => DEFAULT_MOVE,
        }
    }
    fn observe(&mut self, _: &Round, _: &Tally) -> Option<Value> {
        None
    }
}
