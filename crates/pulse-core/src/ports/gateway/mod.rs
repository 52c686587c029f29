//! Remote gateway port: the network boundary to the Pulse backend.

mod client;
mod error;
mod types;

pub use client::RemoteGatewayPort;
pub use error::{GatewayError, GatewayResult};
pub use types::{ChatTurnReply, ChatTurnRequest, OAuthInitiation};
