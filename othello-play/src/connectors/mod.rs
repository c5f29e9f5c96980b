//! Connectors let players drive a game through different interfaces.

mod connector;
mod terminal;

pub use connector::Connector;
pub use terminal::TerminalConnector;
