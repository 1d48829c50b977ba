//! Navigation collaborators: session flag and console output

mod console;
mod session;

pub use console::{ConsoleNotifier, ConsoleRenderer};
pub use session::SessionFlag;
