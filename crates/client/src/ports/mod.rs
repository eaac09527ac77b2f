//! Ports layer. Only outbound ports exist on the client: the UI drives the
//! application layer directly, so no inbound contracts are needed.

pub mod outbound;
