use eyre::{Result, bail, eyre};
use std::collections::VecDeque;
use std::io::{BufRead, Write};

/// Whitespace-delimited token reader over buffered input, so both integers
/// may arrive on one line or spread across several.
pub struct TokenReader<R> {
    inner: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            pending: VecDeque::new(),
        }
    }

    /// Print `prompt` on stdout, then read the next token as an integer.
    pub fn prompt_int(&mut self, prompt: &str) -> Result<i64> {
        print!("{prompt}");
        std::io::stdout().flush()?;
        self.read_int()
    }

    pub fn read_int(&mut self) -> Result<i64> {
        let token = self.next_token()?;
        token
            .parse()
            .map_err(|_| eyre!("'{token}' is not an integer"))
    }

    fn next_token(&mut self) -> Result<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            if self.inner.read_line(&mut line)? == 0 {
                bail!("unexpected end of input");
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }
}
