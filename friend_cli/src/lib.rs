//! # Friend CLI
//!
//! Interactive front end for the friendship network. A seed file is loaded
//! once through `friend_graph`, then a line-oriented command loop queries
//! and edits the graph until the user quits.

pub mod command;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod logging;
pub mod output;
pub mod session;

pub use command::{parse_line, Command, CommandKind};
pub use config::CliConfig;
pub use dispatcher::{dispatch, execute, Reply};
pub use error::{CliError, CommandError};
pub use session::{prompt_for_file, Session, SessionEnd};
