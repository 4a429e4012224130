use super::*;
use std::collections::VecDeque;
use std::io::BufRead;

/// Lazy whitespace-delimited token stream over a line reader.
///
/// Framing is by token, not by line: a command may span lines.
/// `Ok(None)` means the input is exhausted.
#[derive(Debug)]
pub struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
    closed: bool,
}

impl<R> Tokens<R>
where
    R: BufRead,
{
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            closed: false,
        }
    }
    pub fn next(&mut self) -> Result<Option<String>, Error> {
        self.fill()?;
        Ok(self.pending.pop_front())
    }
    pub fn peek(&mut self) -> Result<Option<&str>, Error> {
        self.fill()?;
        Ok(self.pending.front().map(String::as_str))
    }
    /// Consume the next token only if it is an integer.
    pub fn next_int(&mut self) -> Result<Option<i64>, Error> {
        let parsed = self.peek()?.map(str::parse::<i64>);
        match parsed {
            Some(Ok(n)) => {
                self.pending.pop_front();
                Ok(Some(n))
            }
            _ => Ok(None),
        }
    }
    /// Consume integers until the next non-integer token or end of input.
    pub fn drain_ints(&mut self) -> Result<Vec<i64>, Error> {
        let mut ints = Vec::new();
        while let Some(n) = self.next_int()? {
            ints.push(n);
        }
        Ok(ints)
    }
    fn fill(&mut self) -> Result<(), Error> {
        let ref mut line = String::new();
        while self.pending.is_empty() && !self.closed {
            line.clear();
            match self.reader.read_line(line)? {
                0 => self.closed = true,
                _ => self
                    .pending
                    .extend(line.split_whitespace().map(String::from)),
            }
        }
        Ok(())
    }
}
