//! Parameter sweep expansion.
//!
//! Discretize named `{min, max, increment}` ranges and expand them into
//! the full cartesian product, one labeled combination per entry.
//!
//! ```
//! use sweep::{discretize_all, expand, ParameterRange};
//!
//! let ranges = vec![ParameterRange::new("a", 0.0, 1.0, 0.5)];
//! let rs = expand(&discretize_all(&ranges).unwrap());
//! assert_eq!(rs.get("050"), Some("0.50 "));
//! ```

pub mod error;
pub mod range;
pub mod label;
pub mod expand;
pub mod input;
pub mod output;

pub use error::{Error, Result};
pub use expand::{
    combination_count, expand, expand_with, CollisionPolicy, Combinations, ExpandOptions, ResultSet,
};
pub use label::{format_combination, label, value_string};
pub use range::{discretize, discretize_all, ParameterRange};

/// Validate, discretize and expand in one call.
pub fn sweep(ranges: &[ParameterRange], opts: &ExpandOptions) -> Result<ResultSet> {
    let seqs = discretize_all(ranges)?;
    expand_with(&seqs, opts)
}
