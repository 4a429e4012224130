use super::*;
use std::io::BufRead;
use std::io::Write;

/// Blocking request/response loop against the orchestrator.
///
/// Announces readiness, then handles one command at a time until the
/// input closes. Every response is flushed before the next read, since
/// the orchestrator waits on it. Bad input is logged and skipped; only
/// I/O failures end the loop early.
#[derive(Debug)]
pub struct Contestant<R, W, P> {
    tokens: Tokens<R>,
    output: W,
    session: Session<P>,
}

impl<R, W, P> Contestant<R, W, P>
where
    R: BufRead,
    W: Write,
    P: Player,
{
    pub fn new(input: R, output: W, player: P) -> Self {
        Self {
            tokens: Tokens::new(input),
            output,
            session: Session::new(player),
        }
    }

    /// Run to end of input and hand back the final session.
    pub fn run(mut self) -> Result<Session<P>, Error> {
        self.respond(READY)?;
        loop {
            match self.step() {
                Ok(()) => continue,
                Err(Error::StreamClosed) => break,
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => self.recover(e),
            }
        }
        log::info!("[contestant] input closed");
        self.session.conclude();
        Ok(self.session)
    }

    fn step(&mut self) -> Result<(), Error> {
        let command = Command::read(&mut self.tokens, self.session.setup())?;
        log::trace!("[contestant] {}", command);
        match command {
            Command::Start(setup) => self.session.start(setup),
            Command::YourMove => {
                let value = self.session.decide();
                log::debug!("[contestant] proposing {}", value);
                self.respond(value)?;
            }
            Command::Move { winner, moves } => {
                self.session.ingest(winner, moves)?;
            }
        }
        Ok(())
    }

    fn recover(&mut self, e: Error) {
        log::warn!("[contestant] {}", e);
        if let Error::InvalidSetup(_) = e {
            self.session.reject();
        }
    }

    fn respond(&mut self, line: impl std::fmt::Display) -> Result<(), Error> {
        writeln!(self.output, "{}", line)?;
        self.output.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn play<P: Player>(input: &str, player: P) -> (String, Session<P>) {
        let mut output = Vec::new();
        let session = Contestant::new(Cursor::new(input), &mut output, player)
            .run()
            .unwrap();
        (String::from_utf8(output).unwrap(), session)
    }

    #[test]
    fn announces_ready_first() {
        let (output, session) = play("", Counter::default());
        assert_eq!(output, "ready\n");
        assert!(!session.is_ready());
    }
    #[test]
    fn default_move_before_rounds() {
        let (output, _) = play("start 3 1 3\nyourmove\n", Counter::default());
        assert_eq!(output, "ready\n1\n");
    }
    #[test]
    fn default_move_before_setup() {
        let (output, _) = play("yourmove\n", Counter::default());
        assert_eq!(output, "ready\n1\n");
    }
    #[test]
    fn scenarios_a_and_b() {
        let input = "start 3 1 3\nmove 2 1 2 2\nyourmove\nmove 2 2 1 3\nyourmove\n";
        let (output, session) = play(input, Counter::default());
        assert_eq!(output, "ready\n1\n1\n");
        assert_eq!(session.player().wins().count(1), 1);
        assert_eq!(session.player().wins().count(3), 1);
        assert_eq!(session.tally(), &Tally::from(vec![0, 1, 0, 1]));
    }
    #[test]
    fn follows_the_evidence() {
        let input = "start 3 1 3 move 2 2 1 3 move 2 2 1 3 yourmove";
        let (output, session) = play(input, Counter::default());
        assert_eq!(output, "ready\n3\n");
        assert_eq!(session.standings().rounds(), 2);
    }
    #[test]
    fn malformed_round_changes_nothing() {
        let input = "start 3 1 3\nmove 2 1 2 2\nmove 2 2 1\nyourmove\n";
        let (output, session) = play(input, Counter::default());
        assert_eq!(output, "ready\n1\n");
        assert_eq!(session.player().wins().total(), 1);
        assert_eq!(session.standings().rounds(), 1);
        assert_eq!(session.tally(), &Tally::from(vec![0, 0, 2, 0]));
    }
    #[test]
    fn unknown_commands_are_skipped() {
        let input = "start 3 1 3\nbogus\nyourmove\n";
        let (output, session) = play(input, Counter::default());
        assert_eq!(output, "ready\n1\n");
        assert!(session.is_ready());
    }
    #[test]
    fn invalid_setup_drops_session() {
        let input = "start 3 1 3\nmove 2 2 1 3\nstart 3 5 3\nmove 2 2 1 3\nyourmove\n";
        let (output, session) = play(input, Counter::default());
        assert_eq!(output, "ready\n1\n");
        assert!(!session.is_ready());
    }
    #[test]
    fn restart_resets_history() {
        let input = "start 3 1 3 move 2 2 1 3 yourmove start 3 1 3 yourmove";
        let (output, session) = play(input, Counter::default());
        assert_eq!(output, "ready\n3\n1\n");
        assert_eq!(session.player().wins().total(), 0);
        assert!(session.tally().is_empty());
    }
    #[test]
    fn replay_is_deterministic() {
        let input = "start 4 2 5\nmove 1 1 3 1 2\nmove 3 3 4 3 3\nyourmove\nmove 5 2 2 5 0\nyourmove\n";
        let (a, first) = play(input, Counter::default());
        let (b, second) = play(input, Counter::default());
        assert_eq!(a, b);
        assert_eq!(first.player(), second.player());
    }
    #[test]
    fn oversized_setup_is_survivable() {
        let input = "start 3 1 4611686018427387903\nyourmove\n";
        let (output, session) = play(input, Counter::default());
        assert_eq!(output, "ready\n1\n");
        assert!(!session.is_ready());
        let input = "start 4611686018427387903 1 3\nmove 1 1 2 3\nyourmove\n";
        let (output, session) = play(input, Counter::default());
        assert_eq!(output, "ready\n1\n");
        assert!(!session.is_ready());
    }
    #[test]
    fn oversized_setup_keeps_loop_going() {
        let input = "start 3 1 4611686018427387903\nstart 3 1 3\nmove 2 2 1 3\nyourmove\n";
        let (output, session) = play(input, Counter::default());
        assert_eq!(output, "ready\n3\n");
        assert!(session.is_ready());
    }

    struct Broken;
    impl std::io::Write for Broken {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    struct Unreadable;
    impl std::io::Read for Unreadable {
        fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("unreadable"))
        }
    }

    #[test]
    fn failed_write_is_fatal() {
        let input = Cursor::new("start 3 1 3\nyourmove\n");
        let result = Contestant::new(input, Broken, Counter::default()).run();
        assert!(matches!(result, Err(Error::Io(e)) if e.kind() == std::io::ErrorKind::BrokenPipe));
    }
    #[test]
    fn failed_read_is_fatal() {
        let mut output = Vec::new();
        let input = std::io::BufReader::new(Unreadable);
        let result = Contestant::new(input, &mut output, Counter::default()).run();
        assert!(matches!(result, Err(Error::Io(_))));
        assert_eq!(String::from_utf8(output).unwrap(), "ready\n");
    }
    #[test]
    fn random_player_answers_in_range() {
        let input = "start 2 1 4\nyourmove\nyourmove\nyourmove\n";
        let (output, _) = play(input, Fish::seeded(3));
        let values = output
            .lines()
            .skip(1)
            .map(|l| l.parse::<usize>().unwrap())
            .collect::<Vec<_>>();
        assert_eq!(values.len(), 3);
        assert!(values.iter().all(|v| (1..=4).contains(v)));
    }
}
