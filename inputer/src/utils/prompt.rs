//! # Prompt Formatting
//!
//! Pure helpers turning a caller's prompt into the exact text printed before
//! an answer is read.
//!
//! Rules, applied in order:
//! 1. An empty prompt is replaced by the standard prompt of the operation.
//! 2. A default is shown as ` [value]`, or as ` (optional)` when the default
//!    is empty (unless the prompt already mentions "optional").
//! 3. `": "` is appended after a default marker. Without a marker, it is
//!    appended unless the prompt already ends in `:`, `?` or `)`.
//!
//! ```rust
//! use inputer::utils::format_prompt;
//!
//! assert_eq!(format_prompt("Enter name", None, "Enter a string: "), "Enter name: ");
//! assert_eq!(
//!     format_prompt("Enter city", Some("Seattle"), "Enter a string: "),
//!     "Enter city [Seattle]: "
//! );
//! assert_eq!(
//!     format_prompt("Enter note", Some(""), "Enter a string: "),
//!     "Enter note (optional): "
//! );
//! assert_eq!(format_prompt("Agree? (y,n)", None, "Enter a string: "), "Agree? (y,n)");
//! ```
use std::borrow::Cow;

/// Suffix added by [`with_yes_no_cue`] when the prompt lacks one.
pub const YES_NO_SUFFIX: &str = " (y,n) ";

/// Builds the text to print for `prompt`.
///
/// `default` is the displayed form of the default value, if any; `standard`
/// replaces an empty prompt.
pub fn format_prompt(prompt: &str, default: Option<&str>, standard: &str) -> String {
    let base = if prompt.trim().is_empty() {
        standard
    } else {
        prompt
    };

    let marked = default.and_then(|shown| {
        let head = base.trim_end();
        let head = head.strip_suffix(':').map(str::trim_end).unwrap_or(head);

        if !shown.is_empty() {
            Some(format!("{} [{}]: ", head, shown))
        } else if head.to_lowercase().contains("optional") {
            None
        } else {
            Some(format!("{} (optional): ", head))
        }
    });

    // the `)` exception only applies to text the caller wrote
    marked.unwrap_or_else(|| {
        if needs_colon(base) {
            format!("{}: ", base)
        } else {
            base.to_string()
        }
    })
}

fn needs_colon(prompt: &str) -> bool {
    !matches!(prompt.trim_end().chars().last(), Some(':' | '?' | ')'))
}

/// Returns `true` when `prompt` ends with a cue like `(y,n)`, `(Y/N)` or
/// `(yes / no)`, ignoring case and trailing whitespace.
///
/// The cue is `(`, an answer word, an optional `,` or `/`, a second answer
/// word and `)`. Answer words are `y`, `yes`, `n` and `no`; blanks may
/// surround every part.
pub fn ends_with_yes_no_cue(prompt: &str) -> bool {
    let Some(body) = prompt.trim_end().strip_suffix(')') else {
        return false;
    };
    let Some(open) = body.rfind('(') else {
        return false;
    };

    strip_answer_word(body[open + 1..].trim_start())
        .into_iter()
        .any(|rest| {
            let rest = rest.trim_start();
            let rest = rest
                .strip_prefix(|c: char| c == ',' || c == '/')
                .unwrap_or(rest)
                .trim_start();

            strip_answer_word(rest)
                .into_iter()
                .any(|tail| tail.trim().is_empty())
        })
}

/// Appends [`YES_NO_SUFFIX`] unless the prompt already carries a yes/no cue.
pub fn with_yes_no_cue(prompt: &str) -> Cow<'_, str> {
    if ends_with_yes_no_cue(prompt) {
        Cow::Borrowed(prompt)
    } else {
        Cow::Owned(format!("{}{}", prompt.trim_end(), YES_NO_SUFFIX))
    }
}

/// Every remainder of `text` left after removing a leading answer word.
///
/// Both `y` and `yes` are tried so `(yn)` and `(yes no)` are recognised.
fn strip_answer_word(text: &str) -> Vec<&str> {
    ["yes", "y", "no", "n"]
        .iter()
        .filter_map(|word| strip_prefix_ignore_case(text, word))
        .collect()
}

fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let head = text.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        text.get(prefix.len()..)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STANDARD: &str = "Enter a string: ";

    #[test]
    fn test_format_adds_colon() {
        assert_eq!(format_prompt("Enter name", None, STANDARD), "Enter name: ");
    }

    #[test]
    fn test_format_keeps_existing_terminator() {
        assert_eq!(format_prompt("Enter name:", None, STANDARD), "Enter name:");
        assert_eq!(format_prompt("Enter name: ", None, STANDARD), "Enter name: ");
        assert_eq!(format_prompt("Ready? ", None, STANDARD), "Ready? ");
        assert_eq!(
            format_prompt("Enter gender (m/f/t) ", None, STANDARD),
            "Enter gender (m/f/t) "
        );
        assert_eq!(format_prompt("Agree? (y,n)", None, STANDARD), "Agree? (y,n)");
    }

    #[test]
    fn test_format_empty_prompt_uses_standard() {
        assert_eq!(format_prompt("", None, STANDARD), STANDARD);
        assert_eq!(format_prompt("   ", None, STANDARD), STANDARD);
        assert_eq!(
            format_prompt("", None, "Press <enter> to continue: "),
            "Press <enter> to continue: "
        );
    }

    #[test]
    fn test_format_with_default() {
        assert_eq!(
            format_prompt("Enter city", Some("Seattle"), STANDARD),
            "Enter city [Seattle]: "
        );
        assert_eq!(
            format_prompt("Enter city: ", Some("Seattle"), STANDARD),
            "Enter city [Seattle]: "
        );
        assert_eq!(
            format_prompt("", Some("42"), "Enter an integer: "),
            "Enter an integer [42]: "
        );
    }

    #[test]
    fn test_format_with_empty_default() {
        assert_eq!(
            format_prompt("Enter note", Some(""), STANDARD),
            "Enter note (optional): "
        );
        assert_eq!(
            format_prompt("Optional note", Some(""), STANDARD),
            "Optional note: "
        );
        assert_eq!(
            format_prompt("Enter note (OPTIONAL)", Some(""), STANDARD),
            "Enter note (OPTIONAL)"
        );
    }

    #[test]
    fn test_format_default_after_parenthesized_prompt() {
        assert_eq!(
            format_prompt("Pick one (a/b)", Some(""), STANDARD),
            "Pick one (a/b) (optional): "
        );
        assert_eq!(
            format_prompt("Pick one (a/b)", Some("a"), STANDARD),
            "Pick one (a/b) [a]: "
        );
        assert_eq!(
            format_prompt("Continue?", Some(""), STANDARD),
            "Continue? (optional): "
        );
        assert_eq!(
            format_prompt("Agree? (y,n)", None, STANDARD),
            "Agree? (y,n)"
        );
    }

    #[test]
    fn test_yes_no_cue_detected() {
        for prompt in [
            "Agree? (y,n)",
            "Agree? (Y/N)",
            "Agree? (yes/no)",
            "Agree? ( yes , no )  ",
            "Agree? (yn)",
            "Agree? (YES NO)",
            "Agree? (n/y)",
        ] {
            assert!(ends_with_yes_no_cue(prompt), "{prompt}");
        }
    }

    #[test]
    fn test_yes_no_cue_missing() {
        for prompt in [
            "Agree?",
            "Agree? (y,n) now",
            "Agree? (maybe)",
            "Agree? (y)",
            "Agree? (y,n,x)",
            "Agree? (yess/no)",
            "Agree? y,n)",
            "",
        ] {
            assert!(!ends_with_yes_no_cue(prompt), "{prompt}");
        }
    }

    #[test]
    fn test_with_yes_no_cue() {
        assert_eq!(with_yes_no_cue("Is this correct?"), "Is this correct? (y,n) ");
        assert_eq!(with_yes_no_cue("Is this correct? "), "Is this correct? (y,n) ");
        assert!(ends_with_yes_no_cue(&with_yes_no_cue("Save")));
        assert_eq!(with_yes_no_cue("Continue (Y/N)"), "Continue (Y/N)");
    }
}
