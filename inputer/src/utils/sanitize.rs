//! # Answer Parsing & Validation
//!
//! This module holds everything that decides whether a line typed by the user
//! is acceptable. It is pure: nothing here reads from or writes to a terminal.
//!
//! Two steps are applied to every non-empty answer, in order:
//!
//! 1. **Parsing** into the requested type through the [`Answer`] trait
//!    (`String`, `i32`, `i64` or `f64`). A failure here produces a
//!    type-specific message such as "Invalid integer".
//! 2. **Validation** through an optional [`Validate`] predicate. A failure here
//!    produces the generic "Invalid value" message.
//!
//! ## Validators
//! - [`int_range`], [`long_range`] and [`double_range`] accept values inside an
//!   inclusive range.
//! - [`one_of_these`] accepts one of a fixed set of words, ignoring case.
//! - [`yes_or_no`] accepts anything starting with `y` or `n`.
//! - Any closure `Fn(&T) -> bool` is a validator as well.
//!
//! ## Examples
//!
//! ### Validate a numeric range
//! ```rust,no_run
//! use inputer::utils::{int_range, PromptReader};
//!
//! let mut reader = PromptReader::stdin();
//! let age = reader
//!     .get_int_with("Enter your age", int_range(0, 130).unwrap())
//!     .unwrap();
//! println!("Age: {}", age);
//! ```
//!
//! ### Closures as validators
//! ```rust,no_run
//! use inputer::utils::PromptReader;
//!
//! let mut reader = PromptReader::stdin();
//! let total = reader
//!     .get_double_with("Enter a positive amount", |d: &f64| *d > 0.0)
//!     .unwrap();
//! println!("Total: {:.2}", total);
//! ```
use std::cmp::Ordering;
use std::fmt::Display;
use thiserror::Error;

/// A predicate over a parsed answer.
///
/// Returning `false` rejects the answer and the question is asked again.
pub trait Validate<T> {
    fn test(&self, value: &T) -> bool;
}

impl<T, F> Validate<T> for F
where
    F: Fn(&T) -> bool,
{
    fn test(&self, value: &T) -> bool {
        self(value)
    }
}

/// Errors raised while building a validator.
///
/// These are programming mistakes, never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidatorErrors {
    /// The lower bound is greater than the upper bound (or one of them is NaN).
    #[error("The range is invalid: {low} is greater than {high}")]
    InvalidRange { low: String, high: String },
    /// Not enough options were supplied to [`one_of_these`].
    #[error("At least {min} option is required, {given} given")]
    NotEnoughOptions { min: usize, given: usize },
}

/// Minimum number of options accepted by [`one_of_these`].
pub const MIN_OPTIONS: usize = 1;

/// Inclusive range validator built by [`int_range`], [`long_range`] and [`double_range`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range<N> {
    low: N,
    high: N,
}

impl<N: PartialOrd + Display> Range<N> {
    fn checked(low: N, high: N) -> Result<Self, ValidatorErrors> {
        match low.partial_cmp(&high) {
            Some(Ordering::Less | Ordering::Equal) => Ok(Range { low, high }),
            _ => Err(ValidatorErrors::InvalidRange {
                low: low.to_string(),
                high: high.to_string(),
            }),
        }
    }

    pub fn low(&self) -> &N {
        &self.low
    }

    pub fn high(&self) -> &N {
        &self.high
    }
}

impl<N: PartialOrd> Validate<N> for Range<N> {
    fn test(&self, value: &N) -> bool {
        *value >= self.low && *value <= self.high
    }
}

/// Returns a validator accepting any `i32` in `[low, high]`.
///
/// Fails with [`ValidatorErrors::InvalidRange`] when `low > high`.
pub fn int_range(low: i32, high: i32) -> Result<Range<i32>, ValidatorErrors> {
    Range::checked(low, high)
}

/// Same as [`int_range`] for 64-bit integers.
pub fn long_range(low: i64, high: i64) -> Result<Range<i64>, ValidatorErrors> {
    Range::checked(low, high)
}

/// Returns a validator accepting any `f64` in `[low, high]`.
///
/// NaN bounds are rejected like an inverted range.
pub fn double_range(low: f64, high: f64) -> Result<Range<f64>, ValidatorErrors> {
    Range::checked(low, high)
}

/// Validator accepting one of a fixed list of words, ignoring case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneOfThese {
    options: Vec<String>,
}

impl OneOfThese {
    pub fn options(&self) -> &[String] {
        &self.options
    }
}

impl Validate<String> for OneOfThese {
    fn test(&self, value: &String) -> bool {
        let value = value.to_lowercase();
        self.options.iter().any(|option| option.to_lowercase() == value)
    }
}

/// Returns a validator accepting any of `options` (case-insensitive).
///
/// Fails with [`ValidatorErrors::NotEnoughOptions`] when fewer than
/// [`MIN_OPTIONS`] are given.
pub fn one_of_these<I, S>(options: I) -> Result<OneOfThese, ValidatorErrors>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let options: Vec<String> = options.into_iter().map(Into::into).collect();

    if options.len() < MIN_OPTIONS {
        return Err(ValidatorErrors::NotEnoughOptions {
            min: MIN_OPTIONS,
            given: options.len(),
        });
    }

    Ok(OneOfThese { options })
}

/// Validator accepting answers that start with `y`, `Y`, `n` or `N`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct YesOrNo;

impl Validate<String> for YesOrNo {
    fn test(&self, value: &String) -> bool {
        matches!(
            value.chars().next().map(|c| c.to_ascii_lowercase()),
            Some('y' | 'n')
        )
    }
}

/// Returns the [`YesOrNo`] validator.
pub fn yes_or_no() -> YesOrNo {
    YesOrNo
}

/// Why an answer was refused.
///
/// Rejections are reported to the user and the question is asked again; they
/// never reach the caller of a read operation.
///
/// - `Empty`: the line was empty and no default was supplied.
/// - `NotText`: the line is not valid UTF-8.
/// - `NotParsed`: the line is not a valid [`DesiredType`].
/// - `Validator`: the value parsed but the validator refused it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Empty,
    NotText,
    NotParsed(DesiredType),
    Validator,
}

impl Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty answer without a default"),
            Self::NotText => write!(f, "answer is not valid UTF-8"),
            Self::NotParsed(t) => write!(f, "answer is not a valid {}", t),
            Self::Validator => write!(f, "answer refused by the validator"),
        }
    }
}

/// The semantic type an answer is parsed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DesiredType {
    String,
    Int,
    Long,
    Double,
}

impl Display for DesiredType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::String => write!(f, "string"),
            Self::Int => write!(f, "integer"),
            Self::Long => write!(f, "long integer"),
            Self::Double => write!(f, "double"),
        }
    }
}

/// Types a trimmed, non-empty line can be parsed into.
///
/// `Display` is used to show defaults inside the prompt.
pub trait Answer: Sized + Display {
    const DESIRED: DesiredType;

    fn parse_answer(input: &str) -> Result<Self, Rejection>;
}

/// Parses `$input` as `$t`, mapping any failure to `Rejection::NotParsed($desired)`.
macro_rules! parse_type {
    ($input:expr, $t:ty, $desired:expr) => {
        $input
            .parse::<$t>()
            .map_err(|_| Rejection::NotParsed($desired))
    };
}

impl Answer for String {
    const DESIRED: DesiredType = DesiredType::String;

    fn parse_answer(input: &str) -> Result<Self, Rejection> {
        Ok(input.to_string())
    }
}

impl Answer for i32 {
    const DESIRED: DesiredType = DesiredType::Int;

    fn parse_answer(input: &str) -> Result<Self, Rejection> {
        parse_type!(input, i32, DesiredType::Int)
    }
}

impl Answer for i64 {
    const DESIRED: DesiredType = DesiredType::Long;

    fn parse_answer(input: &str) -> Result<Self, Rejection> {
        parse_type!(input, i64, DesiredType::Long)
    }
}

impl Answer for f64 {
    const DESIRED: DesiredType = DesiredType::Double;

    fn parse_answer(input: &str) -> Result<Self, Rejection> {
        let value = parse_type!(input, f64, DesiredType::Double)?;

        // "NaN" and "inf" parse in Rust but can't round-trip as answers
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Rejection::NotParsed(DesiredType::Double))
        }
    }
}

/// Parses `input` and runs the optional validator on the result.
pub(crate) fn evaluate<T: Answer>(
    input: &str,
    validator: Option<&dyn Validate<T>>,
) -> Result<T, Rejection> {
    let value = T::parse_answer(input)?;

    match validator {
        Some(validator) if !validator.test(&value) => Err(Rejection::Validator),
        _ => Ok(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_int_range_inclusive_bounds() {
        let range = int_range(0, 130).unwrap();
        assert!(range.test(&0));
        assert!(range.test(&130));
        assert!(range.test(&42));
        assert!(!range.test(&-1));
        assert!(!range.test(&131));
    }

    #[test]
    fn test_int_range_single_value() {
        let range = int_range(7, 7).unwrap();
        assert!(range.test(&7));
        assert!(!range.test(&8));
    }

    #[test]
    fn test_int_range_inverted_fails_at_construction() {
        let res = int_range(10, 1);
        assert_eq!(
            res,
            Err(ValidatorErrors::InvalidRange {
                low: "10".to_string(),
                high: "1".to_string()
            })
        );
        if let Err(e) = res {
            assert_eq!(format!("{}", e), "The range is invalid: 10 is greater than 1");
        }
    }

    #[test]
    fn test_long_range_beyond_i32() {
        let range = long_range(0, 10_000_000_000).unwrap();
        assert!(range.test(&5_000_000_000));
        assert!(long_range(1, 0).is_err());
    }

    #[test]
    fn test_double_range() {
        let range = double_range(1.5, 9.5).unwrap();
        assert!(range.test(&1.5));
        assert!(range.test(&9.5));
        assert!(!range.test(&1.49));
        assert!(!range.test(&f64::NAN));
        assert!(double_range(9.5, 1.5).is_err());
        assert!(double_range(f64::NAN, 1.0).is_err());
    }

    #[test]
    fn test_one_of_these() {
        let filter = one_of_these(["m", "f", "t"]).unwrap();
        assert!(filter.test(&"m".to_string()));
        assert!(filter.test(&"f".to_string()));
        assert!(filter.test(&"t".to_string()));
        assert!(filter.test(&"M".to_string()));
        assert!(!filter.test(&"x".to_string()));
        assert!(!filter.test(&"mf".to_string()));
    }

    #[test]
    fn test_one_of_these_needs_an_option() {
        let res = one_of_these(Vec::<String>::new());
        assert_eq!(
            res,
            Err(ValidatorErrors::NotEnoughOptions { min: 1, given: 0 })
        );
        assert!(one_of_these(["only"]).is_ok());
    }

    #[test]
    fn test_yes_or_no() {
        let filter = yes_or_no();
        for accepted in ["y", "Y", "yes", "YES", "n", "No", "nope", "yeah"] {
            assert!(filter.test(&accepted.to_string()), "{accepted}");
        }
        for refused in ["", "maybe", "x", " y"] {
            assert!(!filter.test(&refused.to_string()), "{refused}");
        }
    }

    #[test]
    fn test_closure_is_a_validator() {
        let positive = |i: &i32| *i > 0;
        assert!(Validate::test(&positive, &3));
        assert!(!Validate::test(&positive, &0));
    }

    #[test]
    fn test_parse_int() {
        assert_eq!(i32::parse_answer("-123"), Ok(-123));
        assert_eq!(i32::parse_answer("2147483647"), Ok(i32::MAX));
        assert_eq!(
            i32::parse_answer("2147483648"),
            Err(Rejection::NotParsed(DesiredType::Int))
        );
        assert_eq!(
            i32::parse_answer("abc"),
            Err(Rejection::NotParsed(DesiredType::Int))
        );
    }

    #[test]
    fn test_parse_long() {
        assert_eq!(i64::parse_answer("5000000000"), Ok(5_000_000_000));
        assert_eq!(
            i64::parse_answer("4.2"),
            Err(Rejection::NotParsed(DesiredType::Long))
        );
    }

    #[test]
    fn test_parse_double() {
        assert_eq!(f64::parse_answer("4.25"), Ok(4.25));
        assert_eq!(f64::parse_answer("-1e3"), Ok(-1000.0));
        assert_eq!(f64::parse_answer("7"), Ok(7.0));
        for refused in ["NaN", "inf", "-infinity", "1,5", "one"] {
            assert_eq!(
                f64::parse_answer(refused),
                Err(Rejection::NotParsed(DesiredType::Double)),
                "{refused}"
            );
        }
    }

    #[test]
    fn test_evaluate_parses_before_validating() {
        let positive: &dyn Validate<i32> = &|i: &i32| *i > 0;
        assert_eq!(evaluate("5", Some(positive)), Ok(5));
        assert_eq!(evaluate("-5", Some(positive)), Err(Rejection::Validator));
        assert_eq!(
            evaluate("five", Some(positive)),
            Err(Rejection::NotParsed(DesiredType::Int))
        );
        assert_eq!(evaluate::<i32>("-5", None), Ok(-5));
    }

    #[test]
    fn test_rejection_display() {
        assert_eq!(
            format!("{}", Rejection::NotParsed(DesiredType::Long)),
            "answer is not a valid long integer"
        );
    }

    proptest! {
        #[test]
        fn prop_int_range_matches_bounds(a in any::<i32>(), b in any::<i32>(), v in any::<i32>()) {
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            let range = int_range(low, high).unwrap();
            prop_assert_eq!(range.test(&v), low <= v && v <= high);
        }

        #[test]
        fn prop_int_range_inverted_always_fails(a in any::<i32>(), b in any::<i32>()) {
            prop_assume!(a != b);
            let (low, high) = if a > b { (a, b) } else { (b, a) };
            prop_assert!(int_range(low, high).is_err());
        }

        #[test]
        fn prop_int_round_trip(v in any::<i32>()) {
            prop_assert_eq!(i32::parse_answer(&v.to_string()), Ok(v));
        }

        #[test]
        fn prop_double_round_trip(v in -1.0e300f64..1.0e300f64) {
            prop_assert_eq!(f64::parse_answer(&v.to_string()), Ok(v));
        }
    }
}
