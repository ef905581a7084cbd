use std::io::{self, BufRead, Write};

use loadout_core::{
    all_affordable_agents, format, generate_loadout, Command, CommandError, RandomSource, Response,
};
use serde::Serialize;
use tracing::debug;

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Error(String),
    Clear,
}

/// Terminal front end for the command interpreter.
pub struct Console<R> {
    rng: R,
    json: bool,
}

impl<R: RandomSource> Console<R> {
    pub fn new(rng: R, json: bool) -> Self {
        Self { rng, json }
    }

    pub fn respond(&mut self, line: &str) -> Reply {
        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(err) => return Reply::Error(err.to_string()),
        };
        debug!(?command, json = self.json, "console command");

        if self.json {
            if let Some(reply) = self.render_json(&command) {
                return reply;
            }
        }
        match command.execute(&mut self.rng) {
            Ok(Response::Text(text)) => Reply::Text(text),
            Ok(Response::Clear) => Reply::Clear,
            Err(err) => Reply::Error(err.to_string()),
        }
    }

    /// Loadout-producing commands as pretty JSON; `None` for everything else.
    fn render_json(&mut self, command: &Command) -> Option<Reply> {
        let generated = match command {
            Command::Loadout => generate_loadout(None, None, &mut self.rng).map(|l| json_reply(&l)),
            Command::Agent(id) => {
                generate_loadout(Some(id.as_str()), None, &mut self.rng).map(|l| json_reply(&l))
            }
            Command::Budget(budget) => Ok(json_reply(&all_affordable_agents(
                *budget,
                &mut self.rng,
            ))),
            _ => return None,
        };

        Some(generated.unwrap_or_else(|err| Reply::Error(CommandError::from(err).to_string())))
    }

    /// Read commands line by line until EOF, `quit` or `exit`.
    pub fn run<I, O>(
        &mut self,
        mut input: I,
        mut output: O,
        prompt: &str,
        banner: bool,
    ) -> io::Result<()>
    where
        I: BufRead,
        O: Write,
    {
        if banner {
            writeln!(output, "{}", format::help_text())?;
        }

        let mut line = String::new();
        loop {
            write!(output, "{prompt}")?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(output)?;
                break;
            }
            let trimmed = line.trim();
            if trimmed.eq_ignore_ascii_case("quit") || trimmed.eq_ignore_ascii_case("exit") {
                break;
            }

            match self.respond(trimmed) {
                Reply::Text(text) => writeln!(output, "{text}\n")?,
                Reply::Error(err) => writeln!(output, "ERROR: {err}\n")?,
                Reply::Clear => write!(output, "{CLEAR_SCREEN}")?,
            }
        }
        Ok(())
    }
}

fn json_reply<T: Serialize + ?Sized>(value: &T) -> Reply {
    match serde_json::to_string_pretty(value) {
        Ok(text) => Reply::Text(text),
        Err(err) => Reply::Error(format!("could not serialise output: {err}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loadout_core::ScriptedSource;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::BTreeMap;
    use std::io::Cursor;

    fn session(script: &str) -> String {
        let mut console = Console::new(StdRng::seed_from_u64(8), false);
        let mut out = Vec::new();
        console.run(Cursor::new(script), &mut out, "> ", false).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn runs_until_quit() {
        let out = session("help\nagent:sage\nquit\nagents\n");
        assert!(out.starts_with("> "));
        assert!(out.contains("AVAILABLE COMMANDS"));
        assert!(out.contains("SAGE (Sentinel)"));
        assert!(!out.contains("ALL AGENTS"));
    }

    #[test]
    fn errors_and_clear() {
        let out = session("9001\nclear\n");
        assert!(out.contains("ERROR: Budget must be between 0 and 9000 credits."));
        assert!(out.ends_with(&format!("{CLEAR_SCREEN}> \n")));
    }

    #[test]
    fn json_loadout() {
        let mut console = Console::new(ScriptedSource::constant(0.0), true);
        let Reply::Text(text) = console.respond("0") else {
            panic!("expected text");
        };
        let list: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(list.as_array().map(Vec::len), Some(loadout_core::AGENTS.len()));
        assert_eq!(list[0]["total_cost"], 0);
    }

    #[test]
    fn json_mode_keeps_text_for_help() {
        let mut console = Console::new(StdRng::seed_from_u64(1), true);
        assert!(matches!(
            console.respond("help"),
            Reply::Text(t) if t.contains("AVAILABLE COMMANDS")
        ));
        assert!(matches!(console.respond("agent:"), Reply::Error(_)));
    }

    #[test]
    fn unserialisable_output_is_an_error() {
        // JSON object keys must be strings.
        let value = BTreeMap::from([((1u8, 2u8), 3u8)]);
        assert!(matches!(
            json_reply(&value),
            Reply::Error(e) if e.starts_with("could not serialise output")
        ));
    }
}
