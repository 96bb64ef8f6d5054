//! Session labeling for pooled connections.
//!
//! A pooled physical connection carries a flat string-keyed label set
//! describing the identity it is currently authenticated as. When a caller
//! requests a connection, the pool ranks idle candidates with [`cost`] — an
//! integer where lower means cheaper to adapt — and, once a candidate is
//! picked, calls [`configure`] to re-authenticate it when its labels do not
//! already satisfy the request.
//!
//! `cost` is pure and safe to call concurrently on label snapshots. The pool
//! guarantees exclusive ownership of a connection during `configure`, which
//! the API expresses as `&mut`.

pub mod configure;
pub mod cost;
pub mod labels;

pub use configure::{LabeledConnection, configure};
pub use cost::{ConnectionMatch, cost, evaluate};
pub use labels::{CONNECTION_TYPE, ConnectionLabels, ConnectionType, TOKEN, USER_ID};
