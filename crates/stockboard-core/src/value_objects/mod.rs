//! Value objects - immutable types that represent domain concepts

mod symbol;

pub use symbol::{Symbol, SymbolParseError};
