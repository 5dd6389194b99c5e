use log::{debug, trace};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::currency::{Denomination, Tier, DENOMINATIONS};
use crate::error::{Error, Result};

/// Upper bound on reset-and-retry cycles per invocation.
const MAX_ATTEMPTS: u32 = 100;

/// Remainders closer to zero than this are treated as settled, and a pick may
/// exceed the remainder by up to this much.
const TOLERANCE: f64 = 0.01;

/// Tier pass order with per-pass selection probabilities: Marks first, then
/// Chips, then Broams at a reduced rate.
///
/// Broams carry the largest unit values of the three tiers, so the largest
/// pieces are tried last and least often rather than first. Output
/// distributions depend on this order staying as-is, so it is kept even though
/// a value-ordered schedule would look more natural.
const PASSES: [(Tier, f64); 3] = [(Tier::Mark, 0.5), (Tier::Chip, 0.5), (Tier::Broam, 0.3)];

/// Validated input for the generator: a target amount in diamond marks and
/// optional bounds on how many distinct denominations the result may use.
///
/// Construction through [`Constraints::new`] is the only way to obtain a
/// value, so the generator itself never re-validates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraints {
    amount: f64,
    min_types: Option<u32>,
    max_types: Option<u32>,
}

impl Constraints {
    /// Validates and builds the generator input.
    ///
    /// # Arguments
    ///
    /// * `amount` - Target amount in diamond marks; must be finite and > 0
    /// * `min_types` - Optional lower bound on distinct denominations used
    /// * `max_types` - Optional upper bound on distinct denominations used
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAmount`] for a non-finite or non-positive
    /// amount, [`Error::ZeroTypeBound`] for a bound of zero, and
    /// [`Error::InvertedTypeBounds`] when both bounds are given with
    /// `min_types > max_types`.
    pub fn new(amount: f64, min_types: Option<u32>, max_types: Option<u32>) -> Result<Self> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(Error::InvalidAmount);
        }
        if min_types == Some(0) || max_types == Some(0) {
            return Err(Error::ZeroTypeBound);
        }
        if let (Some(min), Some(max)) = (min_types, max_types) {
            if min > max {
                return Err(Error::InvertedTypeBounds { min, max });
            }
        }
        Ok(Self {
            amount,
            min_types,
            max_types,
        })
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn min_types(&self) -> Option<u32> {
        self.min_types
    }

    pub fn max_types(&self) -> Option<u32> {
        self.max_types
    }
}

/// One denomination picked by the generator, with the quantity used and the
/// value those pieces add up to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieceSelection {
    pub denomination: Denomination,
    pub quantity: u32,
    pub total_value: f64,
}

impl PieceSelection {
    fn new(denomination: Denomination, quantity: u32) -> Self {
        Self {
            denomination,
            quantity,
            total_value: f64::from(quantity) * denomination.unit_value,
        }
    }
}

/// A successful decomposition: selections sorted by tier (chips first, then
/// marks, then broams) whose values sum to the target within 0.01.
#[derive(Debug, Clone, PartialEq)]
pub struct Combination {
    pub pieces: Vec<PieceSelection>,
}

impl Combination {
    /// Sum of all selection values.
    pub fn total(&self) -> f64 {
        self.pieces.iter().map(|piece| piece.total_value).sum()
    }
}

/// Decomposes the target amount into sphere pieces using the thread-local RNG.
///
/// Convenience wrapper around [`generate_with`]; see there for the algorithm
/// and failure behavior.
pub fn generate(constraints: &Constraints) -> Result<Combination> {
    generate_with(constraints, &mut rand::thread_rng())
}

/// Decomposes the target amount into sphere pieces using the supplied RNG.
///
/// Runs up to 100 independent attempts. Each attempt shuffles the
/// denomination table once, then makes three passes over the shuffled order
/// (Marks, Chips, Broams), greedily picking a random quantity of each
/// denomination it lands on with the pass's selection probability. An attempt
/// succeeds when the remainder settles within 0.01 of zero and the number of
/// distinct denominations used falls inside the constraint window.
///
/// # Arguments
///
/// * `constraints` - Validated target amount and type-count bounds
/// * `rng` - Random source; seed it for reproducible output
///
/// # Errors
///
/// Returns [`Error::Exhausted`] when no attempt satisfies the target and
/// constraints. This is expected behavior for amounts finer than the 0.2
/// granularity of the table or for very narrow constraint windows, and can
/// occasionally happen for satisfiable inputs as well.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha20Rng;
/// use sphere_change::{generate_with, Constraints};
///
/// let constraints = Constraints::new(25.0, None, None).unwrap();
/// let mut rng = ChaCha20Rng::seed_from_u64(7);
/// let combination = generate_with(&constraints, &mut rng).unwrap();
/// assert!((combination.total() - 25.0).abs() < 0.01);
/// ```
pub fn generate_with<R: Rng + ?Sized>(
    constraints: &Constraints,
    rng: &mut R,
) -> Result<Combination> {
    for attempt in 1..=MAX_ATTEMPTS {
        let mut order = DENOMINATIONS.to_vec();
        order.shuffle(rng);

        let mut remaining = constraints.amount;
        let mut pieces = Vec::new();
        for &(tier, probability) in &PASSES {
            run_pass(&order, tier, probability, &mut remaining, &mut pieces, rng);
        }

        if remaining.abs() >= TOLERANCE {
            continue;
        }

        // Each (gemstone, tier) pair is visited at most once per attempt, so
        // the piece count is the distinct-type count.
        let unique_types = pieces.len();
        if let Some(min) = constraints.min_types {
            if (unique_types as u32) < min {
                trace!("attempt {attempt}: {unique_types} types, below minimum {min}");
                continue;
            }
        }
        if let Some(max) = constraints.max_types {
            if (unique_types as u32) > max {
                trace!("attempt {attempt}: {unique_types} types, above maximum {max}");
                continue;
            }
        }

        pieces.sort_by_key(|piece| piece.denomination.tier);
        debug!(
            "settled {} into {unique_types} piece type(s) after {attempt} attempt(s)",
            constraints.amount
        );
        return Ok(Combination { pieces });
    }

    debug!(
        "no combination for {} within {MAX_ATTEMPTS} attempts",
        constraints.amount
    );
    Err(Error::Exhausted {
        amount: constraints.amount,
        min_types: constraints.min_types,
        max_types: constraints.max_types,
    })
}

/// One greedy pass over the shuffled order, restricted to a single tier.
fn run_pass<R: Rng + ?Sized>(
    order: &[Denomination],
    tier: Tier,
    probability: f64,
    remaining: &mut f64,
    pieces: &mut Vec<PieceSelection>,
    rng: &mut R,
) {
    for denomination in order.iter().filter(|d| d.tier == tier) {
        if *remaining < TOLERANCE {
            break;
        }

        let max_qty = (*remaining / denomination.unit_value).floor() as u32;
        if max_qty == 0 {
            continue;
        }
        if rng.gen::<f64>() >= probability {
            continue;
        }

        // Small maxima are taken whole; larger ones stop short of the maximum
        // to leave room for other denominations.
        let quantity = if max_qty <= 3 {
            max_qty
        } else {
            rng.gen_range(1..max_qty)
        };

        let piece = PieceSelection::new(*denomination, quantity);
        if piece.total_value > *remaining + TOLERANCE {
            continue;
        }

        // Round to cents to keep floating-point drift out of the remainder.
        *remaining = ((*remaining - piece.total_value) * 100.0).round() / 100.0;
        pieces.push(piece);
    }
}
