use super::*;

/// Cumulative count of rounds each value would have won, as replayed
/// from opponent tallies. Indexed by value, slot 0 unused.
///
/// Entries only ever grow. A fresh game gets a fresh `Wins`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wins(Vec<usize>);

impl Wins {
    pub fn new(setup: &Setup) -> Self {
        Self(vec![0; setup.options() + 1])
    }
    pub fn count(&self, v: Value) -> usize {
        self.0.get(v).copied().unwrap_or(0)
    }
    pub fn options(&self) -> Value {
        self.0.len().saturating_sub(1)
    }
    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    /// Credit one round to the smallest value that no larger value could
    /// undercut. Candidate `i` is rejected if some `j > i` was picked by
    /// at least one opponent but no more than `cnt[i] + 1` of them, i.e. no
    /// more than `i` would have had with us on it.
    ///
    /// Returns the credited value, or `None` if every candidate was
    /// rejected, in which case nothing changes.
    pub fn replay(&mut self, tally: &Tally) -> Option<Value> {
        let m = self.options().min(tally.options());
        let winner = (1..=m).find(|&i| {
            let ceiling = tally.count(i) + 1;
            !((i + 1)..=m)
                .map(|j| tally.count(j))
                .any(|c| c > 0 && c <= ceiling)
        })?;
        self.0[winner] += 1;
        Some(winner)
    }

    /// First value holding the strictly greatest win count. Ties keep the
    /// smaller value. If nothing has won yet, `previous` is kept as is.
    pub fn best(&self, previous: Value) -> Value {
        (1..=self.options())
            .fold((previous, 0), |(best, most), v| match self.count(v) {
                n if n > most => (v, n),
                _ => (best, most),
            })
            .0
    }
}

impl std::fmt::Display for Wins {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let counts = (1..=self.options())
            .map(|v| format!("{}:{}", v, self.count(v)))
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "{{{}}}", counts)
    }
}
