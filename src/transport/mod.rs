//! Transport layer: wire-format details that plain serde derives do not cover.

mod query;
mod server;

pub use query::{encode_suppression_query, with_query};
pub use server::ServerWire;
