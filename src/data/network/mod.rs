//! # Network representation
//!
//! Input networks, the residual networks that the algorithms operate on, and the resulting flows.
use std::fmt::{Debug, Display};

use num_traits::{PrimInt, Unsigned};

pub use flow::{Flow, FlowError};
pub use flow_network::{CapacityArc, FlowNetwork, NetworkError};
pub use residual::{ResidualArc, ResidualNetwork};

pub mod flow;
pub mod flow_network;
pub mod residual;

/// Vertices are identified by an index in `0..n`.
pub type Vertex = usize;

/// Number type for arc capacities and flow values.
///
/// Flows are integral and nonnegative; any unsigned primitive integer can be used. The value of a
/// maximum flow is accumulated with checked arithmetic, so a type that is too narrow results in an
/// error rather than a wrong answer.
pub trait Capacity: PrimInt + Unsigned + Debug + Display + Send + Sync + 'static {}

impl<T> Capacity for T
where
    T: PrimInt + Unsigned + Debug + Display + Send + Sync + 'static,
{}
