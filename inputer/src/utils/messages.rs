//! # Messages
//!
//! The texts shown by [`crate::utils::PromptReader`]: the standard prompts used
//! when the caller passes an empty one, and the lines printed when an answer
//! is refused.
//!
//! [`Messages::default`] carries the English texts. Any field can be replaced
//! and the result installed with [`crate::utils::PromptReader::with_messages`].
//!
//! With the `serde` feature the struct can be loaded from any serde format;
//! missing fields keep their default text.
//!
//! ```rust,no_run
//! use inputer::utils::{Messages, PromptReader};
//!
//! let messages = Messages {
//!     invalid_int: "Please type a whole number".to_string(),
//!     ..Messages::default()
//! };
//! let mut reader = PromptReader::stdin().with_messages(messages);
//! let n = reader.get_int("How many").unwrap();
//! ```
use crate::utils::sanitize::{DesiredType, Rejection};

/// Standard prompts and rejection texts.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Messages {
    pub string_prompt: String,
    pub int_prompt: String,
    pub long_prompt: String,
    pub double_prompt: String,
    pub continue_prompt: String,
    /// Printed for an empty answer without default, a line that isn't UTF-8
    /// and a validator refusal.
    pub invalid_value: String,
    pub invalid_int: String,
    pub invalid_long: String,
    pub invalid_double: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            string_prompt: "Enter a string: ".to_string(),
            int_prompt: "Enter an integer: ".to_string(),
            long_prompt: "Enter a long integer: ".to_string(),
            double_prompt: "Enter a double (decimal): ".to_string(),
            continue_prompt: "Press <enter> to continue: ".to_string(),
            invalid_value: "Invalid value".to_string(),
            invalid_int: "Invalid integer".to_string(),
            invalid_long: "Invalid long integer".to_string(),
            invalid_double: "Invalid double (decimal)".to_string(),
        }
    }
}

impl Messages {
    /// The prompt used for `desired` when the caller gives none.
    pub fn standard_prompt(&self, desired: DesiredType) -> &str {
        match desired {
            DesiredType::String => &self.string_prompt,
            DesiredType::Int => &self.int_prompt,
            DesiredType::Long => &self.long_prompt,
            DesiredType::Double => &self.double_prompt,
        }
    }

    /// The line printed to the user for `rejection`.
    pub fn rejection(&self, rejection: &Rejection) -> &str {
        match rejection {
            Rejection::Empty | Rejection::NotText | Rejection::Validator => &self.invalid_value,
            Rejection::NotParsed(DesiredType::Int) => &self.invalid_int,
            Rejection::NotParsed(DesiredType::Long) => &self.invalid_long,
            Rejection::NotParsed(DesiredType::Double) => &self.invalid_double,
            Rejection::NotParsed(DesiredType::String) => &self.invalid_value,
        }
    }
}
