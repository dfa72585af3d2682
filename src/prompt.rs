// file: src/prompt.rs
// version: 1.0.0
// guid: a27f4c90-6e15-4b8d-93c1-0d58e2b7f416

//! Yes/no confirmation prompts
//!
//! [`query_yes_no`] works over any line source and sink so the console is only
//! one possible operator. [`ConsolePrompt`] binds it to stdin/stdout.

use crate::{ContentError, Result};
use std::io::{self, BufRead, Write};
use std::str::FromStr;

pub const GUIDANCE: &str = "Please respond with 'yes' or 'no' (or 'y' or 'n').\n";

/// Answer assumed when the operator just presses enter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultAnswer {
    Yes,
    No,
    /// An explicit answer is required
    None,
}

impl DefaultAnswer {
    fn suffix(self) -> &'static str {
        match self {
            DefaultAnswer::Yes => " [Y/n] ",
            DefaultAnswer::No => " [y/N] ",
            DefaultAnswer::None => " [y/n] ",
        }
    }

    fn value(self) -> Option<bool> {
        match self {
            DefaultAnswer::Yes => Some(true),
            DefaultAnswer::No => Some(false),
            DefaultAnswer::None => None,
        }
    }
}

impl FromStr for DefaultAnswer {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "yes" => Ok(DefaultAnswer::Yes),
            "no" => Ok(DefaultAnswer::No),
            "none" => Ok(DefaultAnswer::None),
            other => Err(ContentError::config(format!(
                "invalid default answer: '{}'",
                other
            ))),
        }
    }
}

/// Map an answer token to a boolean. Matching is case-insensitive.
pub fn parse_answer(answer: &str) -> Option<bool> {
    match answer.trim().to_lowercase().as_str() {
        "yes" | "ye" | "y" => Some(true),
        "no" | "n" => Some(false),
        _ => None,
    }
}

/// Ask `question` until the operator gives a recognized answer.
///
/// An empty line returns the default when there is one. Anything else
/// unrecognized prints [`GUIDANCE`] and asks again. A closed input stream is an
/// `UnexpectedEof` I/O error.
pub fn query_yes_no<R, W>(
    question: &str,
    default: DefaultAnswer,
    input: &mut R,
    output: &mut W,
) -> Result<bool>
where
    R: BufRead,
    W: Write,
{
    loop {
        write!(output, "{}{}", question, default.suffix())?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while waiting for a yes/no answer",
            )
            .into());
        }

        let answer = line.trim();
        if answer.is_empty() {
            if let Some(value) = default.value() {
                return Ok(value);
            }
        } else if let Some(value) = parse_answer(answer) {
            return Ok(value);
        } else {
            tracing::debug!("Unrecognized answer: {:?}", answer);
        }

        output.write_all(GUIDANCE.as_bytes())?;
    }
}

/// Something that can approve or decline a step
pub trait Confirm {
    fn confirm(&mut self, question: &str) -> Result<bool>;
}

/// Interactive prompt over a line source and sink
pub struct ConsolePrompt<R, W> {
    input: R,
    output: W,
    default: DefaultAnswer,
}

impl<R: BufRead, W: Write> ConsolePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            default: DefaultAnswer::Yes,
        }
    }

    /// Build a prompt with a default given by name (`yes`, `no` or `none`).
    /// Fails before any input is read when the name is not recognized.
    pub fn with_default(input: R, output: W, default: &str) -> Result<Self> {
        let default = default.parse()?;
        Ok(Self {
            input,
            output,
            default,
        })
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl ConsolePrompt<io::StdinLock<'static>, io::Stdout> {
    /// Prompt on the process console
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Confirm for ConsolePrompt<R, W> {
    fn confirm(&mut self, question: &str) -> Result<bool> {
        query_yes_no(question, self.default, &mut self.input, &mut self.output)
    }
}
