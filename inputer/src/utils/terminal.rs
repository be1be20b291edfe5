//! # Terminal Input Helper
//!
//! This module provides [`PromptReader`], which asks the user a question,
//! reads one line and loops until the answer parses into the requested type
//! and passes the validator, or until the user accepts the default.
//!
//! Parsing and validation live in [`crate::utils::sanitize`]; prompt text is
//! built by [`crate::utils::prompt`].
//!
//! ## Features
//! - Strings, `i32`, `i64` and `f64` answers.
//! - Optional validators ([`crate::utils::int_range`], closures, ...).
//! - Optional defaults, accepted by submitting an empty line.
//! - Yes/no confirmations and "press enter" pauses.
//! - Works on any `BufRead`/`Write` pair, stdin/stdout by default.
//!
//! ## Usage
//!
//! ### Example 1: Validated integer
//! ```rust,no_run
//! use inputer::utils::{int_range, PromptReader};
//!
//! let mut reader = PromptReader::stdin();
//! let age = reader.get_int_with("Enter your age", int_range(0, 130).unwrap()).unwrap();
//!
//! println!("The input: {}", age);
//! ```
//!
//! ### Example 2: Full form with a default
//! ```rust,no_run
//! use inputer::utils::{one_of_these, Ask, PromptReader};
//!
//! let mut reader = PromptReader::stdin();
//! let size = reader
//!     .ask(
//!         Ask::new("Pick a size")
//!             .validator(one_of_these(["s", "m", "l"]).unwrap())
//!             .default_value("m".to_string()),
//!     )
//!     .unwrap();
//!
//! println!("The input: {}", size);
//! ```
//!
//! ### Example 3: Loop until confirmed
//! ```rust,no_run
//! use inputer::utils::PromptReader;
//!
//! let mut reader = PromptReader::stdin();
//! let name = loop {
//!     let name = reader.get_string("Enter your name").unwrap();
//!     if reader.get_yn("Is this correct?").unwrap() == 'y' {
//!         break name;
//!     }
//! };
//! ```
use crate::utils::messages::Messages;
use crate::utils::prompt::{format_prompt, with_yes_no_cue};
use crate::utils::sanitize::{Answer, Rejection, Validate, evaluate, yes_or_no};
use log::{debug, trace, warn};
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use thiserror::Error;

/// Fatal failures of a read operation.
///
/// Bad answers are never reported here: they are printed and asked again.
#[derive(Debug, Error)]
pub enum TerminalErrors {
    /// The input stream has no more lines.
    #[error("The input ended before a valid answer was read")]
    EndOfInput,
    /// Reading the input or writing the prompt failed.
    #[error("Couldn't use the terminal: {0}")]
    Io(#[from] io::Error),
}

/// One question: the prompt plus an optional validator and default.
///
/// An empty prompt is replaced by the standard prompt of the answer type.
pub struct Ask<'v, T> {
    prompt: &'v str,
    validator: Option<Box<dyn Validate<T> + 'v>>,
    default: Option<T>,
}

impl<'v, T> Ask<'v, T> {
    pub fn new(prompt: &'v str) -> Self {
        Self {
            prompt,
            validator: None,
            default: None,
        }
    }

    /// Answers refused by `validator` are asked again.
    pub fn validator(mut self, validator: impl Validate<T> + 'v) -> Self {
        self.validator = Some(Box::new(validator));
        self
    }

    /// Returned as-is on an empty line, without running the validator.
    pub fn default_value(mut self, default: T) -> Self {
        self.default = Some(default);
        self
    }
}

impl<T> Default for Ask<'_, T> {
    fn default() -> Self {
        Self::new("")
    }
}

/// Reads validated answers from a line-oriented input.
///
/// The reader owns the input cursor; it is meant to be created once and used
/// by a single caller for the whole session. Every read blocks until an
/// acceptable line arrives.
pub struct PromptReader<R, W> {
    input: R,
    output: W,
    messages: Messages,
}

impl PromptReader<StdinLock<'static>, Stdout> {
    /// A reader on the process' standard input and output.
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> PromptReader<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            messages: Messages::default(),
        }
    }

    /// Replaces the standard prompts and rejection texts.
    pub fn with_messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    /// Gives back the input and output streams.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Asks until an answer parses as `T` and passes the validator, or until
    /// an empty line selects the default.
    ///
    /// Only end of input and I/O failures are returned as errors.
    pub fn ask<T: Answer>(&mut self, ask: Ask<'_, T>) -> Result<T, TerminalErrors> {
        let Ask {
            prompt,
            validator,
            mut default,
        } = ask;

        let shown_default = default.as_ref().map(ToString::to_string);
        let prompt = format_prompt(
            prompt,
            shown_default.as_deref(),
            self.messages.standard_prompt(T::DESIRED),
        );

        loop {
            self.show(&prompt)?;
            let answer = match self.read_line()? {
                Ok(answer) => answer,
                Err(rejection) => {
                    self.complain(rejection)?;
                    continue;
                }
            };

            if answer.is_empty() {
                if let Some(value) = default.take() {
                    debug!("empty answer, using the default {}", T::DESIRED);
                    return Ok(value);
                }
                self.complain(Rejection::Empty)?;
                continue;
            }

            match evaluate(&answer, validator.as_deref()) {
                Ok(value) => return Ok(value),
                Err(rejection) => self.complain(rejection)?,
            }
        }
    }

    /// Prompts for any non-empty string.
    ///
    /// An empty `prompt` selects the standard prompt ("Enter a string: ").
    pub fn get_string(&mut self, prompt: &str) -> Result<String, TerminalErrors> {
        self.ask(Ask::new(prompt))
    }

    pub fn get_string_with(
        &mut self,
        prompt: &str,
        validator: impl Validate<String>,
    ) -> Result<String, TerminalErrors> {
        self.ask(Ask::new(prompt).validator(validator))
    }

    /// An empty line returns `default`. An empty `default` marks the answer optional.
    pub fn get_string_or(&mut self, prompt: &str, default: &str) -> Result<String, TerminalErrors> {
        self.ask(Ask::new(prompt).default_value(default.to_string()))
    }

    /// Prompts for a 32-bit integer.
    ///
    /// An empty `prompt` selects the standard prompt ("Enter an integer: ").
    pub fn get_int(&mut self, prompt: &str) -> Result<i32, TerminalErrors> {
        self.ask(Ask::new(prompt))
    }

    pub fn get_int_with(
        &mut self,
        prompt: &str,
        validator: impl Validate<i32>,
    ) -> Result<i32, TerminalErrors> {
        self.ask(Ask::new(prompt).validator(validator))
    }

    pub fn get_int_or(&mut self, prompt: &str, default: i32) -> Result<i32, TerminalErrors> {
        self.ask(Ask::new(prompt).default_value(default))
    }

    /// Prompts for a 64-bit integer.
    ///
    /// An empty `prompt` selects the standard prompt ("Enter a long integer: ").
    pub fn get_long(&mut self, prompt: &str) -> Result<i64, TerminalErrors> {
        self.ask(Ask::new(prompt))
    }

    pub fn get_long_with(
        &mut self,
        prompt: &str,
        validator: impl Validate<i64>,
    ) -> Result<i64, TerminalErrors> {
        self.ask(Ask::new(prompt).validator(validator))
    }

    pub fn get_long_or(&mut self, prompt: &str, default: i64) -> Result<i64, TerminalErrors> {
        self.ask(Ask::new(prompt).default_value(default))
    }

    /// Prompts for a finite double, in decimal or exponential notation.
    ///
    /// An empty `prompt` selects the standard prompt ("Enter a double (decimal): ").
    pub fn get_double(&mut self, prompt: &str) -> Result<f64, TerminalErrors> {
        self.ask(Ask::new(prompt))
    }

    pub fn get_double_with(
        &mut self,
        prompt: &str,
        validator: impl Validate<f64>,
    ) -> Result<f64, TerminalErrors> {
        self.ask(Ask::new(prompt).validator(validator))
    }

    pub fn get_double_or(&mut self, prompt: &str, default: f64) -> Result<f64, TerminalErrors> {
        self.ask(Ask::new(prompt).default_value(default))
    }

    /// Asks a yes/no question and returns `'y'` or `'n'`.
    ///
    /// ` (y,n)` is appended unless the prompt already ends with such a cue.
    /// Any answer starting with y or n (any case) is accepted.
    pub fn get_yn(&mut self, prompt: &str) -> Result<char, TerminalErrors> {
        let prompt = with_yes_no_cue(prompt);
        let answer = self.ask::<String>(Ask::new(&prompt).validator(yes_or_no()))?;

        Ok(answer
            .chars()
            .next()
            .map_or('n', |c| c.to_ascii_lowercase()))
    }

    /// `true` when [`PromptReader::get_yn`] returns `'y'`.
    pub fn confirm(&mut self, prompt: &str) -> Result<bool, TerminalErrors> {
        Ok(self.get_yn(prompt)? == 'y')
    }

    /// Shows `prompt` (or the continue prompt when empty) and discards one line.
    pub fn pause(&mut self, prompt: &str) -> Result<(), TerminalErrors> {
        let prompt = format_prompt(prompt, None, &self.messages.continue_prompt);
        self.show(&prompt)?;
        // content is ignored, even when it isn't UTF-8
        let _ = self.read_line()?;
        Ok(())
    }

    fn show(&mut self, prompt: &str) -> Result<(), TerminalErrors> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        Ok(())
    }

    fn complain(&mut self, rejection: Rejection) -> Result<(), TerminalErrors> {
        debug!("{}", rejection);
        writeln!(self.output, "{}", self.messages.rejection(&rejection))?;
        Ok(())
    }

    /// Reads one line, trimmed. A closed input is fatal; a line that isn't
    /// UTF-8 is a rejection.
    fn read_line(&mut self) -> Result<Result<String, Rejection>, TerminalErrors> {
        let mut raw = Vec::new();

        if self.input.read_until(b'\n', &mut raw)? == 0 {
            warn!("input closed while waiting for an answer");
            return Err(TerminalErrors::EndOfInput);
        }
        trace!("raw answer {:?}", String::from_utf8_lossy(&raw));

        Ok(String::from_utf8(raw)
            .map(|line| line.trim().to_string())
            .map_err(|_| Rejection::NotText))
    }
}
