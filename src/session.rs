use super::*;

/// Game state owned by the protocol loop.
///
/// `AwaitingSetup` while `setup` is `None`, `Ready` otherwise. A valid
/// `start` always yields a fresh `Ready` session; an invalid one drops
/// back to `AwaitingSetup`.
#[derive(Debug, Clone)]
pub struct Session<P> {
    setup: Option<Setup>,
    tally: Tally,
    standings: Standings,
    player: P,
}

impl<P> Session<P>
where
    P: Player,
{
    pub fn new(player: P) -> Self {
        Self {
            setup: None,
            tally: Tally::default(),
            standings: Standings::default(),
            player,
        }
    }
    pub fn setup(&self) -> Option<&Setup> {
        self.setup.as_ref()
    }
    pub fn tally(&self) -> &Tally {
        &self.tally
    }
    pub fn standings(&self) -> &Standings {
        &self.standings
    }
    pub fn player(&self) -> &P {
        &self.player
    }
    pub fn is_ready(&self) -> bool {
        self.setup.is_some()
    }

    /// Begin a new game, discarding all history.
    pub fn start(&mut self, setup: Setup) {
        self.conclude();
        log::info!("[session] start {}", setup);
        self.tally = Tally::empty(&setup);
        self.standings = Standings::default();
        self.player.start(&setup);
        self.setup = Some(setup);
    }
    /// Drop back to `AwaitingSetup` after a rejected `start`.
    pub fn reject(&mut self) {
        self.conclude();
        self.setup = None;
        self.tally = Tally::default();
        self.standings = Standings::default();
    }
    /// Summarize the game in progress, if any.
    pub fn conclude(&self) {
        if self.setup.is_some() && self.standings.rounds() > 0 {
            log::info!("[session] game over: {}", self.standings);
        }
    }

    /// Value to answer `yourmove` with. Without a game there is nothing
    /// to go on, so the default.
    pub fn decide(&mut self) -> Value {
        match self.setup {
            Some(_) => self.player.decide(),
            None => DEFAULT_MOVE,
        }
    }

    /// Validate and learn from one reported round. Either everything is
    /// updated or, on error, nothing is. Returns the value the player's
    /// replay credited, if any.
    pub fn ingest(&mut self, winner: i64, moves: Vec<i64>) -> Result<Option<Value>, Error> {
        let setup = self.setup.ok_or(Error::NotReady)?;
        let round = Round::new(winner, moves, &setup)?;
        let tally = Tally::from((&round, &setup));
        let credited = self.player.observe(&round, &tally);
        self.standings.record(&round, setup.seat(), credited);
        self.tally = tally;
        log::debug!("[session] round {}: {}", self.standings.rounds(), round);
        log::debug!("[session] opponents {}", self.tally);
        log::debug!("[session] {}", self.standings);
        if setup.turns() == Some(self.standings.rounds()) {
            log::info!("[session] turn limit reached");
        }
        Ok(credited)
    }
}

impl Default for Session<Counter> {
    fn default() -> Self {
        Self::new(Counter::default())
    }
}
