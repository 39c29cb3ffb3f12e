//! # Storing of flow networks in memory
//!
//! This module provides the data structures used to represent flow networks, their residual
//! networks and the flows computed on them. Algorithms may introduce their specific working state
//! in `algorithm::my_algorithm`.

pub mod network;
