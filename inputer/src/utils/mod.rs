pub mod messages;
pub use messages::Messages;

pub mod prompt;
pub use prompt::{YES_NO_SUFFIX, ends_with_yes_no_cue, format_prompt, with_yes_no_cue};

pub mod sanitize;
pub use sanitize::{
    Answer, DesiredType, MIN_OPTIONS, OneOfThese, Range, Rejection, Validate, ValidatorErrors,
    YesOrNo, double_range, int_range, long_range, one_of_these, yes_or_no,
};

pub mod terminal;
pub use terminal::{Ask, PromptReader, TerminalErrors};

cfg_if::cfg_if! {
    if #[cfg(feature = "sync")] {
        pub mod shared;
        pub use shared::SharedPromptReader;
    }
}
