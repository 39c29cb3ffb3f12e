//! # Maximum flow
//!
//! Maximum flows in capacitated directed networks are computed on a residual network, using either
//! the shortest augmenting path method of Edmonds and Karp, or the blocking flow method of Dinitz
//! as implemented by Cherkassky.
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod io;

#[cfg(test)]
mod tests;
