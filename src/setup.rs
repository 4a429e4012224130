use super::*;

/// Parameters of one game, fixed from `start` until the next `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Setup {
    players: usize,
    seat: Seat,
    options: Value,
    turns: Option<usize>,
}

impl Setup {
    /// Validate raw `start` arguments.
    /// Signed inputs so negative tokens are reported as out of range
    /// rather than as parse failures.
    pub fn new(players: i64, seat: i64, options: i64) -> Result<Self, Error> {
        if players < 1 || players > MAX_PLAYERS as i64 {
            return Err(Error::InvalidSetup(format!(
                "player count {} outside [1, {}]",
                players, MAX_PLAYERS
            )));
        }
        if options < 1 || options > MAX_OPTIONS as i64 {
            return Err(Error::InvalidSetup(format!(
                "max value {} outside [1, {}]",
                options, MAX_OPTIONS
            )));
        }
        if seat < 1 || seat > players {
            return Err(Error::InvalidSetup(format!(
                "seat {} outside [1, {}]",
                seat, players
            )));
        }
        Ok(Self {
            players: players as usize,
            seat: seat as Seat,
            options: options as Value,
            turns: None,
        })
    }
    /// Attach the orchestrator's turn limit. Non-positive limits are ignored.
    pub fn with_turns(self, turns: i64) -> Self {
        Self {
            turns: (turns > 0).then_some(turns as usize),
            ..self
        }
    }
    pub fn players(&self) -> usize {
        self.players
    }
    pub fn seat(&self) -> Seat {
        self.seat
    }
    pub fn options(&self) -> Value {
        self.options
    }
    pub fn turns(&self) -> Option<usize> {
        self.turns
    }
    /// Whether `v` is a value a player may legally pick.
    pub fn allows(&self, v: Value) -> bool {
        (1..=self.options).contains(&v)
    }
}

impl std::fmt::Display for Setup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "P{} of {} choosing in [1, {}]",
            self.seat, self.players, self.options
        )?;
        match self.turns {
            Some(t) => write!(f, " for {} turns", t),
            None => Ok(()),
        }
    }
}
