//! A terminal front-end for [`othello_core`].
//!
//! The front-end is a thin presentation layer: a [`Connector`](connectors::Connector)
//! turns player input into [`Command`]s and draws each [`Snapshot`](othello_core::Snapshot)
//! the game produces, while [`session::run`] forwards commands to the turn controller.

pub mod cli;
pub mod connectors;
pub mod render;
pub mod session;

mod command;

pub use command::{Command, ParseCommandError, HELP};
