//! The interactive command loop.

use friend_graph::FriendshipGraph;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::dispatcher::{dispatch, Reply};
use crate::output::{format_error, COMMAND_PROMPT, FAREWELL, FILE_PROMPT, HELP_LINES};

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user entered the quit command.
    Quit,
    /// The input stream was exhausted.
    EndOfInput,
}

/// A command session over one loaded graph.
#[derive(Debug)]
pub struct Session {
    graph: FriendshipGraph,
    show_help: bool,
}

impl Session {
    /// Create a new session that prints the command summary before each prompt.
    pub fn new(graph: FriendshipGraph) -> Self {
        Self {
            graph,
            show_help: true,
        }
    }

    /// Set whether the command summary is printed.
    pub fn with_help(mut self, show_help: bool) -> Self {
        self.show_help = show_help;
        self
    }

    /// Get the graph.
    pub fn graph(&self) -> &FriendshipGraph {
        &self.graph
    }

    /// Consume the session and return the graph.
    pub fn into_graph(self) -> FriendshipGraph {
        self.graph
    }

    /// Read and execute commands until quit or end of input.
    ///
    /// Command errors are written to `output` and never end the loop; only
    /// I/O failures on the streams themselves are returned. Input bytes that
    /// are not valid UTF-8 are replaced with U+FFFD, so such a line fails
    /// name validation instead of ending the session.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> io::Result<SessionEnd> {
        let mut buf = Vec::new();

        loop {
            if self.show_help {
                writeln!(output)?;
                for help in HELP_LINES {
                    writeln!(output, "{help}")?;
                }
            }
            write!(output, "{COMMAND_PROMPT}")?;
            output.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                debug!("end of input");
                return Ok(SessionEnd::EndOfInput);
            }
            let line = String::from_utf8_lossy(&buf);

            match dispatch(&mut self.graph, &line) {
                Ok(Reply::Output(lines)) => {
                    for text in lines {
                        writeln!(output, "{text}")?;
                    }
                }
                Ok(Reply::Quit) => {
                    writeln!(output, "{FAREWELL}")?;
                    return Ok(SessionEnd::Quit);
                }
                Err(err) => {
                    debug!(error = %err, "command rejected");
                    writeln!(output, "{}", format_error(&err))?;
                }
            }
        }
    }
}

/// Ask for the seed file name, falling back to `default` on an empty answer.
pub fn prompt_for_file<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    default: &Path,
) -> io::Result<PathBuf> {
    write!(output, "{FILE_PROMPT}")?;
    output.flush()?;

    let mut buf = Vec::new();
    input.read_until(b'\n', &mut buf)?;
    let answer = String::from_utf8_lossy(&buf);
    let answer = answer.trim_end_matches(['\r', '\n']);

    if answer.is_empty() {
        Ok(default.to_path_buf())
    } else {
        Ok(PathBuf::from(answer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_quiet(script: &str) -> (Session, SessionEnd, String) {
        let graph = friend_graph::parse_network("Alice;Bob\nCarol;Bob".as_bytes()).unwrap();
        let mut session = Session::new(graph).with_help(false);
        let mut out = Vec::new();

        let end = session.run(Cursor::new(script), &mut out).unwrap();
        (session, end, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_session_runs_until_quit() {
        let (session, end, out) = run_quiet("a Dave Alice\nf Alice\nq\nf Bob\n");

        assert_eq!(end, SessionEnd::Quit);
        assert_eq!(
            out,
            "Enter command: Enter command: Bob\nDave\nEnter command: Farewell cruel world...\n"
        );
        assert!(session.graph().has_person("Dave"));
    }

    #[test]
    fn test_errors_do_not_stop_the_session() {
        let (_, end, out) = run_quiet("\nx\nf Dave\na Alice\nc Alice Alice\nquit\n");

        assert_eq!(end, SessionEnd::Quit);
        let lines: Vec<_> = out.split(COMMAND_PROMPT).filter(|s| !s.is_empty()).collect();
        assert_eq!(
            lines,
            vec![
                "Error: an empty line is not a valid command.\n",
                "Error: unknown command 'x'.\n",
                "Error: 'Dave' is an unknown name.\n",
                "Error: [Aa]dd command requires at least 2 names.\n",
                "Alice has no common friends with themselves.\n",
                "Farewell cruel world...\n",
            ]
        );
    }

    #[test]
    fn test_invalid_utf8_line_is_recoverable() {
        let graph = friend_graph::parse_network("Alice;Bob".as_bytes()).unwrap();
        let mut session = Session::new(graph).with_help(false);
        let mut out = Vec::new();

        let end = session
            .run(Cursor::new(&b"f \xff\xfe\nf Alice\nq\n"[..]), &mut out)
            .unwrap();
        let out = String::from_utf8(out).unwrap();

        assert_eq!(end, SessionEnd::Quit);
        assert_eq!(
            out,
            "Enter command: Error: '\u{fffd}\u{fffd}' is not a valid name.\n\
             Enter command: Bob\n\
             Enter command: Farewell cruel world...\n"
        );
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let (session, end, out) = run_quiet("p\n");

        assert_eq!(end, SessionEnd::EndOfInput);
        assert!(out.contains("Bob\n- Alice\n- Carol\n"));
        assert_eq!(session.into_graph().person_count(), 3);
    }

    #[test]
    fn test_help_is_printed_before_each_prompt() {
        let mut session = Session::new(FriendshipGraph::new());
        let mut out = Vec::new();

        session.run(Cursor::new("q\n"), &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.starts_with("\nEnter one of the commands [Pp]rint/[Aa]dd/[Ff]riends/[Cc]ommon/[Qq]uit\n"));
        assert!(out.contains("followed by one or more names if needed.\nEnter command: "));
    }

    #[test]
    fn test_prompt_for_file() {
        let default = Path::new("friendships.txt");
        let mut out = Vec::new();

        let path = prompt_for_file(Cursor::new("\n"), &mut out, default).unwrap();
        assert_eq!(path, PathBuf::from("friendships.txt"));
        assert_eq!(out, FILE_PROMPT.as_bytes());

        let path = prompt_for_file(Cursor::new("crew.txt\r\n"), Vec::new(), default).unwrap();
        assert_eq!(path, PathBuf::from("crew.txt"));

        let path = prompt_for_file(Cursor::new(""), Vec::new(), default).unwrap();
        assert_eq!(path, PathBuf::from("friendships.txt"));
    }
}
