//! Shared primitive types used across the loader and the interpreter.

/// A 1-based line number within an input file.
pub type LineNo = usize;

/// A state abbreviation as it appears in the dataset. Unvalidated.
pub type StateCode = String;

/// Population counts are summed in a wider type than they are stored in.
pub type PopulationSum = i64;
