//! Arbitrary-precision non-negative integers in the Fibonacci (Zeckendorf)
//! numeral system.
//!
//! This crate is pure: no IO, no async. A [`Fibo`] owns its digits outright,
//! so shared references can be read from any number of threads while
//! mutation follows ordinary `&mut` rules.
//!
//! ```
//! use fibo_types::Fibo;
//!
//! let six: Fibo = "1001".parse().unwrap();
//! let two = Fibo::from(2u32);
//! assert_eq!((six + two).to_string(), "10000");
//! ```

mod digits;
mod engine;
mod error;
mod fibo;
mod ops;
mod weights;

pub use error::{MalformedInput, MalformedInputKind};
pub use fibo::{Fibo, one, zero};
