//! ComputeContext - delegate a computation to a swappable algorithm
//!
//! A [`Context`] holds one [`Algorithm`] at a time and forwards every call to
//! it. Swapping the algorithm changes what the next call computes without the
//! caller knowing which concrete variant is installed.
//!
//! # Example
//!
//! ```ignore
//! use computecontext::{Concat, Context, Sum};
//!
//! let mut context = Context::new(Box::new(Sum));
//! assert_eq!(context.run(23, 34, &mut std::io::sink())?, "57");
//! context.set_algorithm(Box::new(Concat));
//! assert_eq!(context.run(23, 34, &mut std::io::sink())?, "2334");
//! ```

pub mod cli;
pub mod config;
pub mod demo;
mod algorithm;
mod context;
mod error;

pub use algorithm::{Algorithm, AlgorithmKind, Concat, Sum};
pub use context::Context;
pub use error::ContextError;
