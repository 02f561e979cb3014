//! Command line tokenizing.

use crate::error::CommandError;

/// The commands understood by the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Print,
    Add,
    Friends,
    Common,
    Quit,
}

impl CommandKind {
    pub const ALL: [CommandKind; 5] = [
        CommandKind::Print,
        CommandKind::Add,
        CommandKind::Friends,
        CommandKind::Common,
        CommandKind::Quit,
    ];

    /// The full lowercase spelling of the command.
    pub fn word(&self) -> &'static str {
        match self {
            CommandKind::Print => "print",
            CommandKind::Add => "add",
            CommandKind::Friends => "friends",
            CommandKind::Common => "common",
            CommandKind::Quit => "quit",
        }
    }

    /// Usage form shown in messages, e.g. `[Pp]rint`.
    pub fn usage(&self) -> &'static str {
        match self {
            CommandKind::Print => "[Pp]rint",
            CommandKind::Add => "[Aa]dd",
            CommandKind::Friends => "[Ff]riends",
            CommandKind::Common => "[Cc]ommon",
            CommandKind::Quit => "[Qq]uit",
        }
    }

    /// Match a command token.
    ///
    /// Accepts the single letter or the full word, with the first letter in
    /// either case. Only the first letter is case-folded: `Print` matches,
    /// `PRINT` does not.
    pub fn from_token(token: &str) -> Option<Self> {
        let mut chars = token.chars();
        let first = chars.next()?.to_ascii_lowercase();
        let rest = chars.as_str();

        Self::ALL.into_iter().find(|kind| {
            let word = kind.word();
            word.starts_with(first) && (rest.is_empty() || rest == &word[1..])
        })
    }
}

impl std::fmt::Display for CommandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.word())
    }
}

/// One tokenized command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command<'a> {
    pub kind: CommandKind,
    pub args: Vec<&'a str>,
}

/// Split a line on whitespace into a command and its arguments.
pub fn parse_line(line: &str) -> Result<Command<'_>, CommandError> {
    let mut tokens = line.split_whitespace();
    let token = tokens.next().ok_or(CommandError::EmptyLine)?;
    let kind = CommandKind::from_token(token)
        .ok_or_else(|| CommandError::UnknownCommand(token.to_string()))?;

    Ok(Command {
        kind,
        args: tokens.collect(),
    })
}
