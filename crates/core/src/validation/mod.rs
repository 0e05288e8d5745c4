//! Request validation engine.
//!
//! Rule types and a pure-logic evaluator. Rule sets are declared by the
//! layer that owns the commands; evaluation happens here, without any
//! database or transport dependency.

pub mod evaluator;
pub mod rules;
