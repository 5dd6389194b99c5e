use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced to the caller. None of these are fatal; the caller may
/// retry with different input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The target amount was missing, non-finite, or not greater than zero.
    #[error("Please enter a value greater than 0.")]
    InvalidAmount,

    /// A currency type bound of zero was given.
    #[error("Currency type bounds must be at least 1.")]
    ZeroTypeBound,

    /// The minimum type bound exceeds the maximum.
    #[error("Minimum types ({min}) cannot be greater than maximum types ({max}).")]
    InvertedTypeBounds { min: u32, max: u32 },

    /// The generator ran out of attempts without finding a combination that
    /// settles the amount under the given constraints.
    #[error(
        "Could not create exact combination for {amount}{}. \
         Try a different amount or adjust the currency type constraints.",
        type_window(.min_types, .max_types)
    )]
    Exhausted {
        amount: f64,
        min_types: Option<u32>,
        max_types: Option<u32>,
    },
}

fn type_window(min_types: &Option<u32>, max_types: &Option<u32>) -> String {
    match (min_types, max_types) {
        (Some(min), Some(max)) => format!(" with {min}-{max} different currency types"),
        (Some(min), None) => format!(" with at least {min} different currency types"),
        (None, Some(max)) => format!(" with max {max} different currency types"),
        (None, None) => String::new(),
    }
}
