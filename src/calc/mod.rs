//! Pure form calculations: leave duration, flat-interest loan quotes and
//! loan form field validation. Nothing in here performs I/O.

pub mod duration;
pub mod loan;
pub mod parse;
pub mod validator;
