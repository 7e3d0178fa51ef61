//! Evaluator module reducing arithmetic syntax trees to values.
//!
//! - `value` holds runtime values and native primitive arithmetic
//! - `dispatch` resolves binary operators through forward and reflected
//!   operator methods
//! - `evaluator` walks the tree and collects diagnostics for nodes it does
//!   not evaluate

pub mod dispatch;
pub mod evaluator;
pub mod value;
