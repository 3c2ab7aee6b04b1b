//! Terminal host for `todo-core`: reqwest transport, stdin/stderr ports,
//! configuration, and the command loop.

pub mod config;
pub mod repl;
pub mod terminal;
pub mod transport;

pub use config::ClientConfig;
pub use terminal::{LineReader, TerminalConfirm, TerminalNotifier};
pub use transport::ReqwestTransport;
