use super::*;
use std::io::BufRead;

/// One parsed orchestrator command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `start n p m [turns]`
    Start(Setup),
    /// `yourmove`
    YourMove,
    /// `move winner mv_1 .. mv_n`
    Move { winner: i64, moves: Vec<i64> },
}

impl Command {
    pub const START: &'static str = "start";
    pub const YOURMOVE: &'static str = "yourmove";
    pub const MOVE: &'static str = "move";

    /// Read the next command. A `move` needs the current setup to know how
    /// many selections follow. Tokens that belong to the next command are
    /// never consumed, so a short command does not swallow its successor.
    pub fn read<R>(tokens: &mut Tokens<R>, setup: Option<&Setup>) -> Result<Self, Error>
    where
        R: BufRead,
    {
        let token = tokens.next()?.ok_or(Error::StreamClosed)?;
        match token.as_str() {
            Self::START => Self::start(tokens),
            Self::YOURMOVE => Ok(Self::YourMove),
            Self::MOVE => Self::round(tokens, setup),
            _ => Err(Error::Protocol(token)),
        }
    }

    fn start<R>(tokens: &mut Tokens<R>) -> Result<Self, Error>
    where
        R: BufRead,
    {
        let ref mut arg = |name: &str| -> Result<i64, Error> {
            tokens
                .next_int()?
                .ok_or_else(|| Error::InvalidSetup(format!("missing {}", name)))
        };
        let players = arg("player count")?;
        let seat = arg("seat")?;
        let options = arg("max value")?;
        let turns = tokens.next_int()?;
        let setup = Setup::new(players, seat, options)?;
        Ok(Self::Start(match turns {
            Some(t) => setup.with_turns(t),
            None => setup,
        }))
    }

    fn round<R>(tokens: &mut Tokens<R>, setup: Option<&Setup>) -> Result<Self, Error>
    where
        R: BufRead,
    {
        let Some(setup) = setup else {
            tokens.drain_ints()?;
            return Err(Error::NotReady);
        };
        let winner = tokens
            .next_int()?
            .ok_or_else(|| Error::MalformedRound(String::from("missing winner")))?;
        let mut moves = Vec::new();
        while moves.len() < setup.players() {
            match tokens.next_int()? {
                Some(mv) => moves.push(mv),
                None => {
                    return Err(Error::MalformedRound(format!(
                        "expected {} selections, got {}",
                        setup.players(),
                        moves.len()
                    )));
                }
            }
        }
        let extra = tokens.drain_ints()?;
        if !extra.is_empty() {
            return Err(Error::MalformedRound(format!(
                "expected {} selections, got {}",
                setup.players(),
                setup.players() + extra.len()
            )));
        }
        Ok(Self::Move { winner, moves })
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Start(setup) => write!(f, "{} ({})", Self::START, setup),
            Self::YourMove => write!(f, "{}", Self::YOURMOVE),
            Self::Move { winner, moves } => {
                write!(f, "{} {}", Self::MOVE, winner)?;
                moves.iter().try_for_each(|mv| write!(f, " {}", mv))
            }
        }
    }
}
