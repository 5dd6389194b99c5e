pub mod currency;
pub mod error;
pub mod generate;

pub use currency::{Denomination, Gemstone, Tier, DENOMINATIONS};
pub use error::{Error, Result};
pub use generate::{generate, generate_with, Combination, Constraints, PieceSelection};
