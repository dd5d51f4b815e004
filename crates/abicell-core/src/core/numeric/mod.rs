//! Exact-or-floating coordinate values and the parser that produces them from
//! collaborator-supplied literals.
//!
//! - [`number`] - the [`Number`](number::Number) type with exact rational arithmetic and float promotion
//! - [`parser`] - the closed [`RawValue`](parser::RawValue) literal type and its resolution rules

pub mod number;
pub mod parser;
