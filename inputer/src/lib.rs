//! # Inputer
//!
//! A small Rust library for console programs that need to ask the user for a
//! value: it prints a prompt, reads one line, parses and validates it, and
//! asks again until the answer is acceptable.
//!
//! ## Features
//!
//! - **Typed answers** - strings, `i32`, `i64` and finite `f64`
//! - **Validators** - inclusive ranges, fixed word lists, yes/no, or any closure
//! - **Defaults** - an empty line returns the default, shown in the prompt as `[value]`
//! - **Confirmations** - `get_yn` returns `'y'` or `'n'` for loop conditions
//! - **Pauses** - "Press <enter> to continue"
//! - **Custom texts** - every standard prompt and error line can be replaced
//!
//! ("serde" feature)
//! - `Messages` can be loaded from any serde format
//!
//! ("sync" feature)
//! - `SharedPromptReader`, a reader several threads can take turns on
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! inputer = "0.1"
//! inputer = { version = "0.1", features = ["serde", "sync"] }
//! ```
//!
//! ## Usage Examples
//!
//! ### Basic input & range validation
//!
//! ```rust,no_run
//! use inputer::utils::{int_range, PromptReader};
//!
//! let mut reader = PromptReader::stdin();
//!
//! let name = reader.get_string("Enter your name").unwrap();
//! let age = reader.get_int_with("Enter your age", int_range(0, 130).unwrap()).unwrap();
//! println!("{} is {}", name, age);
//! ```
//!
//! ### Confirmation loop
//!
//! ```rust,no_run
//! use inputer::utils::{double_range, PromptReader};
//!
//! let mut reader = PromptReader::stdin();
//!
//! let extra = loop {
//!     let extra = reader
//!         .get_double_with("Enter extra charge", double_range(1.5, 9.5).unwrap())
//!         .unwrap();
//!     if reader.get_yn("Is this correct?").unwrap() == 'y' {
//!         break extra;
//!     }
//! };
//! ```
//!
//! ### Testing code that prompts
//!
//! `PromptReader` works on any `BufRead` and `Write`, so answers can be scripted:
//!
//! ```rust
//! use inputer::utils::PromptReader;
//! use std::io::Cursor;
//!
//! let mut reader = PromptReader::new(Cursor::new("abc\n42\n"), Vec::new());
//! assert_eq!(reader.get_int("Enter a number").unwrap(), 42);
//!
//! let (_, printed) = reader.into_inner();
//! assert_eq!(
//!     String::from_utf8(printed).unwrap(),
//!     "Enter a number: Invalid integer\nEnter a number: "
//! );
//! ```
//!
//! ## Error Handling
//!
//! Bad answers never reach the caller: they are printed and the question is
//! asked again. Only two things are returned as errors:
//!
//! - [`utils::ValidatorErrors`] when a validator is built with bad arguments
//!   (e.g. `int_range(10, 1)`)
//! - [`utils::TerminalErrors`] when the input ends or the terminal fails
//!
//! ## Architecture
//!
//! - **`utils::terminal`** - `PromptReader` and the ask-until-valid loop
//! - **`utils::sanitize`** - parsing, validators and their factories
//! - **`utils::prompt`** - prompt formatting rules
//! - **`utils::messages`** - standard prompts and error texts
//! - **`utils::shared`** - thread-safe handle ("sync" feature)
//!
//! ## License
//!
//! This project is licensed under the MIT License.

pub mod utils;
