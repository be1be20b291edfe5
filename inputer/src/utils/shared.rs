//! # Shared Prompt Reader
//!
//! [`SharedPromptReader`] lets several threads take turns on one
//! [`PromptReader`]. A plain `PromptReader` assumes a single caller; this
//! handle puts it behind an `Arc<parking_lot::Mutex<_>>` and holds the lock for
//! a whole question, so prompts and answers of two threads never interleave.
//!
//! Enabled with the `sync` feature.
//!
//! ```rust,no_run
//! use inputer::utils::{Ask, PromptReader, SharedPromptReader};
//! use std::io::{self, BufReader};
//! use std::thread;
//!
//! // `StdinLock` can't move between threads, so buffer the `Stdin` handle.
//! let reader = PromptReader::new(BufReader::new(io::stdin()), io::stdout());
//! let shared = SharedPromptReader::new(reader);
//! let worker = shared.clone();
//!
//! let handle = thread::spawn(move || worker.ask::<i32>(Ask::new("Worker count")));
//! let name = shared.ask::<String>(Ask::new("Job name")).unwrap();
//! let workers = handle.join().unwrap().unwrap();
//! ```
use crate::utils::sanitize::Answer;
use crate::utils::terminal::{Ask, PromptReader, TerminalErrors};
use parking_lot::{Mutex, MutexGuard};
use std::io::{BufRead, Write};
use std::sync::Arc;

/// Cloneable, thread-safe handle to a [`PromptReader`].
pub struct SharedPromptReader<R, W> {
    inner: Arc<Mutex<PromptReader<R, W>>>,
}

impl<R, W> Clone for SharedPromptReader<R, W> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: BufRead, W: Write> SharedPromptReader<R, W> {
    pub fn new(reader: PromptReader<R, W>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(reader)),
        }
    }

    /// Locks the reader for a sequence of questions.
    pub fn lock(&self) -> MutexGuard<'_, PromptReader<R, W>> {
        self.inner.lock()
    }

    /// [`PromptReader::ask`] under the lock.
    pub fn ask<T: Answer>(&self, ask: Ask<'_, T>) -> Result<T, TerminalErrors> {
        self.lock().ask(ask)
    }

    pub fn get_yn(&self, prompt: &str) -> Result<char, TerminalErrors> {
        self.lock().get_yn(prompt)
    }

    pub fn pause(&self, prompt: &str) -> Result<(), TerminalErrors> {
        self.lock().pause(prompt)
    }
}
