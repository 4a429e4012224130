use super::*;

/// Running record of how the game is going for us.
///
/// Score follows the orchestrator's rule: every player on the reported
/// winning value shares one point equally.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Standings {
    rounds: usize,
    victories: usize,
    score: f64,
    replays: usize,
    agreements: usize,
}

impl Standings {
    pub fn record(&mut self, round: &Round, seat: Seat, credited: Option<Value>) {
        self.rounds += 1;
        let ours = round.selection(seat);
        if ours != NO_MOVE && i64::try_from(ours).is_ok_and(|v| v == round.winner()) {
            self.victories += 1;
            self.score += 1.0 / round.pickers(ours) as f64;
        }
        if let Some(credited) = credited {
            self.replays += 1;
            if i64::try_from(credited).is_ok_and(|v| v == round.winner()) {
                self.agreements += 1;
            }
        }
    }
    pub fn rounds(&self) -> usize {
        self.rounds
    }
    pub fn victories(&self) -> usize {
        self.victories
    }
    pub fn score(&self) -> f64 {
        self.score
    }
    /// Fraction of replays that credited the reported winner.
    pub fn agreement(&self) -> Option<f64> {
        (self.replays > 0).then(|| self.agreements as f64 / self.replays as f64)
    }
}

impl std::fmt::Display for Standings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} rounds, {} won, score {:.3}",
            self.rounds, self.victories, self.score
        )?;
        match self.agreement() {
            Some(a) => write!(f, ", replay agreement {:.1}%", a * 100.0),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    fn setup() -> Setup {
        Setup::new(4, 2, 5).unwrap()
    }
    #[test]
    fn unique_winner_scores_full_point() {
        let mut standings = Standings::default();
        let round = Round::new(1, vec![3, 1, 3, 2], &setup()).unwrap();
        standings.record(&round, 2, Some(1));
        assert_eq!(standings.rounds(), 1);
        assert_eq!(standings.victories(), 1);
        assert_eq!(standings.score(), 1.0);
        assert_eq!(standings.agreement(), Some(1.0));
    }
    #[test]
    fn shared_winner_splits_point() {
        let mut standings = Standings::default();
        let round = Round::new(3, vec![3, 3, 2, 2], &setup()).unwrap();
        standings.record(&round, 2, None);
        assert_eq!(standings.victories(), 1);
        assert_eq!(standings.score(), 0.5);
        assert_eq!(standings.agreement(), None);
    }
    #[test]
    fn missing_move_never_wins() {
        let mut standings = Standings::default();
        let round = Round::new(0, vec![1, 0, 1, 1], &setup()).unwrap();
        standings.record(&round, 2, Some(5));
        assert_eq!(standings.victories(), 0);
        assert_eq!(standings.score(), 0.0);
        assert_eq!(standings.agreement(), Some(0.0));
    }
}
