//! The per-federation coordinator and its supporting tables and queues.

pub mod error;
mod handle_tables;
mod inbound;
#[allow(clippy::module_inception)]
mod net_io;

pub use error::NetIoError;
pub use handle_tables::{AttributeKind, HandleTables};
pub use inbound::{Inbound, InboundQueue};
pub use net_io::{NetIo, RegistrationPolicy};
