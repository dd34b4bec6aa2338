//! Interactive session over a transactional store.
//!
//! Parses one command per line and renders one response per command:
//!
//! ```text
//! BEGIN               -> OK
//! SET <key> <value>   -> OK
//! GET <key>           -> <value> | NULL
//! DELETE <key>        -> true | false
//! COMMIT              -> OK | ERROR: no active transaction
//! ROLLBACK            -> OK | ERROR: no active transaction
//! ```
//!
//! Keywords are case-insensitive. The value of `SET` is the remainder of
//! the line, so values may contain spaces.

use layerkv_core::TransactionalStore;
use tracing::debug;

/// A parsed session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open a new transaction.
    Begin,
    /// Set a key to a value.
    Set(String, String),
    /// Look up a key.
    Get(String),
    /// Delete a key.
    Delete(String),
    /// Commit the innermost transaction.
    Commit,
    /// Roll back the innermost transaction.
    Rollback,
    /// End the session.
    Exit,
}

impl Command {
    /// Parses a single input line.
    ///
    /// Returns `Ok(None)` for blank lines and `#` comments, `Err` with a
    /// message for malformed input.
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let mut parts = line.splitn(2, char::is_whitespace);
        let keyword = parts.next().unwrap_or("");
        let rest = parts.next().map(str::trim).unwrap_or("");

        let command = match keyword.to_ascii_uppercase().as_str() {
            "BEGIN" => Self::expect_no_args(Self::Begin, "BEGIN", rest)?,
            "COMMIT" => Self::expect_no_args(Self::Commit, "COMMIT", rest)?,
            "ROLLBACK" => Self::expect_no_args(Self::Rollback, "ROLLBACK", rest)?,
            "EXIT" | "QUIT" => Self::expect_no_args(Self::Exit, keyword, rest)?,
            "GET" => Self::Get(Self::expect_key("GET", rest)?),
            "DELETE" => Self::Delete(Self::expect_key("DELETE", rest)?),
            "SET" => {
                let mut args = rest.splitn(2, char::is_whitespace);
                let key = args.next().filter(|k| !k.is_empty());
                let value = args.next().map(str::trim);
                match (key, value) {
                    (Some(key), Some(value)) if !value.is_empty() => {
                        Self::Set(key.to_string(), value.to_string())
                    }
                    _ => return Err("SET expects a key and a value".to_string()),
                }
            }
            other => return Err(format!("unknown command: {other}")),
        };

        Ok(Some(command))
    }

    fn expect_no_args(command: Self, keyword: &str, rest: &str) -> Result<Self, String> {
        if rest.is_empty() {
            Ok(command)
        } else {
            Err(format!("{keyword} takes no arguments"))
        }
    }

    fn expect_key(keyword: &str, rest: &str) -> Result<String, String> {
        if rest.is_empty() || rest.contains(char::is_whitespace) {
            Err(format!("{keyword} expects exactly one key"))
        } else {
            Ok(rest.to_string())
        }
    }
}

/// Outcome of evaluating one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// A response line to print.
    Line(String),
    /// Nothing to print (blank line or comment).
    Silent,
    /// The session should end.
    Exit,
}

/// A command session owning one store.
#[derive(Debug, Default)]
pub struct Session {
    store: TransactionalStore,
}

impl Session {
    /// Creates a session with an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluates one input line against the store.
    ///
    /// Malformed lines produce an `ERROR: ...` response; the session and
    /// its store remain usable.
    pub fn eval(&mut self, line: &str) -> Response {
        let command = match Command::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Response::Silent,
            Err(message) => return Response::Line(format!("ERROR: {message}")),
        };
        debug!(?command, depth = self.store.depth(), "evaluating");

        match command {
            Command::Begin => {
                self.store.begin();
                Response::Line("OK".to_string())
            }
            Command::Set(key, value) => {
                self.store.set(key, value);
                Response::Line("OK".to_string())
            }
            Command::Get(key) => match self.store.get(&key) {
                Some(value) => Response::Line(value.to_string()),
                None => Response::Line("NULL".to_string()),
            },
            Command::Delete(key) => {
                let existed = self.store.delete(&key);
                Response::Line(existed.to_string())
            }
            Command::Commit => match self.store.commit() {
                Ok(()) => Response::Line("OK".to_string()),
                Err(err) => Response::Line(format!("ERROR: {err}")),
            },
            Command::Rollback => match self.store.rollback() {
                Ok(()) => Response::Line("OK".to_string()),
                Err(err) => Response::Line(format!("ERROR: {err}")),
            },
            Command::Exit => Response::Exit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(session: &mut Session, input: &str) -> String {
        match session.eval(input) {
            Response::Line(text) => text,
            other => panic!("expected a response line for {input:?}, got {other:?}"),
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Command::parse("begin").unwrap(), Some(Command::Begin));
        assert_eq!(
            Command::parse("get counter").unwrap(),
            Some(Command::Get("counter".into()))
        );
    }

    #[test]
    fn parse_skips_blanks_and_comments() {
        assert_eq!(Command::parse("").unwrap(), None);
        assert_eq!(Command::parse("   ").unwrap(), None);
        assert_eq!(Command::parse("# comment").unwrap(), None);
    }

    #[test]
    fn parse_set_keeps_spaces_in_value() {
        assert_eq!(
            Command::parse("SET greeting hello world").unwrap(),
            Some(Command::Set("greeting".into(), "hello world".into()))
        );
    }

    #[test]
    fn parse_rejects_malformed_lines() {
        assert!(Command::parse("SET onlykey").is_err());
        assert!(Command::parse("GET").is_err());
        assert!(Command::parse("GET two keys").is_err());
        assert!(Command::parse("COMMIT now").is_err());
        assert!(Command::parse("FROBNICATE").is_err());
    }

    #[test]
    fn session_basic_flow() {
        let mut session = Session::new();
        assert_eq!(line(&mut session, "SET k v"), "OK");
        assert_eq!(line(&mut session, "GET k"), "v");
        assert_eq!(line(&mut session, "DELETE k"), "true");
        assert_eq!(line(&mut session, "GET k"), "NULL");
        assert_eq!(line(&mut session, "DELETE k"), "false");
    }

    #[test]
    fn session_transaction_flow() {
        let mut session = Session::new();
        assert_eq!(line(&mut session, "SET k committed"), "OK");
        assert_eq!(line(&mut session, "BEGIN"), "OK");
        assert_eq!(line(&mut session, "SET k pending"), "OK");
        assert_eq!(line(&mut session, "GET k"), "pending");
        assert_eq!(line(&mut session, "ROLLBACK"), "OK");
        assert_eq!(line(&mut session, "GET k"), "committed");
    }

    #[test]
    fn session_reports_close_without_transaction() {
        let mut session = Session::new();
        assert_eq!(
            line(&mut session, "COMMIT"),
            "ERROR: no active transaction"
        );
        assert_eq!(
            line(&mut session, "ROLLBACK"),
            "ERROR: no active transaction"
        );
    }

    #[test]
    fn session_survives_malformed_input() {
        let mut session = Session::new();
        assert_eq!(
            line(&mut session, "SET missing-value"),
            "ERROR: SET expects a key and a value"
        );
        assert_eq!(line(&mut session, "SET k v"), "OK");
        assert_eq!(line(&mut session, "GET k"), "v");
    }

    #[test]
    fn session_exit() {
        let mut session = Session::new();
        assert_eq!(session.eval("EXIT"), Response::Exit);
        assert_eq!(session.eval("quit"), Response::Exit);
    }

    #[test]
    fn session_blank_lines_are_silent() {
        let mut session = Session::new();
        assert_eq!(session.eval(""), Response::Silent);
        assert_eq!(session.eval("# setup"), Response::Silent);
    }
}
