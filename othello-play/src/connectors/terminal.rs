//! [`Connector`] for two players sharing one terminal.

use super::Connector;
use crate::render::{Frame, RenderOptions};
use crate::Command;
use anyhow::Context;
use othello_core::Snapshot;
use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};
use tracing::{debug, warn};

pub struct TerminalConnector<R, W> {
    input: R,
    output: W,
    options: RenderOptions,
}

impl TerminalConnector<BufReader<Stdin>, Stdout> {
    /// A connector on the process's stdin and stdout.
    pub fn stdio(options: RenderOptions) -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout(), options)
    }
}

impl<R: BufRead, W: Write> TerminalConnector<R, W> {
    pub fn new(input: R, output: W, options: RenderOptions) -> Self {
        Self {
            input,
            output,
            options,
        }
    }

    /// Give back the output stream, e.g. to inspect what was written.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Connector for TerminalConnector<R, W> {
    fn show(&mut self, snapshot: &Snapshot) -> anyhow::Result<()> {
        let frame = Frame {
            snapshot,
            options: self.options,
        };
        writeln!(self.output, "\n{}\n", frame)
            .context("failed to draw the board")
    }

    fn notify(&mut self, message: &str) -> anyhow::Result<()> {
        writeln!(self.output, "{}", message).context("failed to write message")
    }

    fn next_command(&mut self) -> anyhow::Result<Option<Command>> {
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("failed to read input")?;
            if read == 0 {
                debug!("input closed");
                return Ok(None);
            }

            if line.trim().is_empty() {
                continue;
            }

            match line.parse::<Command>() {
                Ok(command) => {
                    debug!(?command, "read command");
                    return Ok(Some(command));
                }
                Err(err) => {
                    warn!(input = line.trim(), "{}", err);
                    writeln!(self.output, "Cannot parse command. Type `help` for a list.")?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use othello_core::Game;

    fn connector(input: &str) -> TerminalConnector<&[u8], Vec<u8>> {
        let options = RenderOptions {
            hints: true,
            color: false,
        };
        TerminalConnector::new(input.as_bytes(), Vec::new(), options)
    }

    #[test]
    fn reads_commands_until_eof() {
        let mut terminal = connector("d3\n\nnonsense\nnew\n");

        assert_eq!(
            terminal.next_command().unwrap(),
            Some(Command::Move { row: 2, col: 3 })
        );
        assert_eq!(terminal.next_command().unwrap(), Some(Command::NewGame));
        assert_eq!(terminal.next_command().unwrap(), None);

        let output = String::from_utf8(terminal.into_output()).unwrap();
        assert!(output.contains("Cannot parse command"));
    }

    #[test]
    fn shows_snapshot() {
        let mut terminal = connector("");
        terminal.show(&Game::new().snapshot()).unwrap();
        terminal.notify("hello").unwrap();

        let output = String::from_utf8(terminal.into_output()).unwrap();
        assert!(output.contains("Black to move"));
        assert!(output.ends_with("hello\n"));
    }
}
