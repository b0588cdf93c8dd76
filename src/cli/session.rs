//! Scripted session command.
//!
//! Runs a sequence of session events read from a file or stdin, one per line:
//!
//! ```text
//! seed #3b82f6          # or any color text
//! oklch 0.62 0.19 260   # OKLCH seed picker
//! hsl 217 91 60         # HSL seed picker (s, l in percent)
//! slider 5 hue 10       # step index (0-10) or label (50-950), kind, value
//! wait 600              # milliseconds
//! undo / redo / flush / show
//! reset [hue|lightness|chroma]
//! save [name]
//! load <id>
//! delete <id>
//! ```

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::time::Duration;

use crate::cli::common::{print_json, CliError, CliResult};
use crate::cli::palette::open_store;
use crate::cli::scale::{print_colors, step_rows, StepOutput};
use crate::color_space::OkSpace;
use crate::config::Config;
use crate::constants::STEP_COUNT;
use crate::engine::{Clock, Effect, ManualClock, Session, SessionEvent, SystemClock};
use crate::models::{OffsetKind, Offsets, Step};
use crate::services::PaletteStore;
use clap::Args;
use serde::Serialize;
use tracing::{debug, warn};

/// Run a scripted editing session
#[derive(Debug, Clone, Args)]
pub struct SessionArgs {
    /// Script file (reads stdin when omitted)
    #[arg(short, long, value_name = "FILE")]
    pub script: Option<PathBuf>,

    /// Initial seed color (defaults to the configured seed)
    #[arg(long, value_name = "COLOR")]
    pub seed: Option<String>,

    /// Output the final state as JSON
    #[arg(long)]
    pub json: bool,

    /// Use the wall clock; `wait` really sleeps
    #[arg(long)]
    pub realtime: bool,
}

/// One parsed script line.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptCommand {
    /// Forward to the session
    Event(SessionEvent),
    /// Let time pass, then let the debounce timer fire
    Wait(Duration),
    /// Restore a saved palette by id
    Load(String),
    /// Print the current colors
    Show,
}

/// Parses one script line. Blank lines and comments yield `None`.
///
/// # Errors
///
/// Returns a message naming the problem for unknown commands or bad arguments.
pub fn parse_line(line: &str) -> Result<Option<ScriptCommand>, String> {
    let line = strip_comment(line).trim();
    let Some((keyword, rest)) = split_keyword(line) else {
        return Ok(None);
    };
    let args: Vec<&str> = rest.split_whitespace().collect();

    let command = match keyword.to_ascii_lowercase().as_str() {
        "seed" => {
            if rest.is_empty() {
                return Err("seed needs a color".to_string());
            }
            ScriptCommand::Event(SessionEvent::SetSeed(rest.to_string()))
        }
        "oklch" => {
            let [l, c, h] = numbers(&args, "oklch <l> <c> <h>")?;
            ScriptCommand::Event(SessionEvent::SetSeedOklch { l, c, h })
        }
        "hsl" => {
            let [h, s, l] = numbers(&args, "hsl <h> <s> <l>")?;
            ScriptCommand::Event(SessionEvent::SetSeedHsl { h, s, l })
        }
        "slider" => {
            let [step, kind, value] = args.as_slice() else {
                return Err("usage: slider <step> <kind> <value>".to_string());
            };
            ScriptCommand::Event(SessionEvent::SetSlider {
                step: parse_step(step)?,
                kind: kind.parse::<OffsetKind>()?,
                value: parse_number(value)?,
            })
        }
        "undo" => no_args(&args, ScriptCommand::Event(SessionEvent::Undo))?,
        "redo" => no_args(&args, ScriptCommand::Event(SessionEvent::Redo))?,
        "flush" => no_args(&args, ScriptCommand::Event(SessionEvent::Flush))?,
        "show" => no_args(&args, ScriptCommand::Show)?,
        "reset" => match args.as_slice() {
            [] | ["all"] => ScriptCommand::Event(SessionEvent::ResetAll),
            [kind] => ScriptCommand::Event(SessionEvent::ResetKind(kind.parse::<OffsetKind>()?)),
            _ => return Err("usage: reset [hue|lightness|chroma]".to_string()),
        },
        "wait" => {
            let [ms] = args.as_slice() else {
                return Err("usage: wait <ms>".to_string());
            };
            let ms = ms
                .parse::<u64>()
                .map_err(|_| format!("invalid duration '{ms}'"))?;
            ScriptCommand::Wait(Duration::from_millis(ms))
        }
        "save" => ScriptCommand::Event(SessionEvent::SavePalette {
            name: (!rest.is_empty()).then(|| rest.to_string()),
        }),
        "load" => ScriptCommand::Load(single_id(&args, "load")?),
        "delete" => ScriptCommand::Event(SessionEvent::DeletePalette(single_id(&args, "delete")?)),
        other => return Err(format!("unknown command '{other}'")),
    };

    Ok(Some(command))
}

/// Cuts a trailing comment. A comment starts at a `#` that begins the line or
/// follows whitespace, and is itself followed by whitespace or the line end,
/// so hex colors such as `#3b82f6` survive.
fn strip_comment(line: &str) -> &str {
    let bytes = line.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b != b'#' {
            continue;
        }
        let starts_word = i == 0 || bytes[i - 1].is_ascii_whitespace();
        let ends_word = bytes.get(i + 1).is_none_or(u8::is_ascii_whitespace);
        if starts_word && ends_word {
            return &line[..i];
        }
    }
    line
}

fn split_keyword(line: &str) -> Option<(&str, &str)> {
    if line.is_empty() {
        return None;
    }
    Some(match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (line, ""),
    })
}

fn parse_number(token: &str) -> Result<f64, String> {
    token
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| format!("invalid number '{token}'"))
}

fn numbers(args: &[&str], usage: &str) -> Result<[f64; 3], String> {
    let [a, b, c] = args else {
        return Err(format!("usage: {usage}"));
    };
    Ok([parse_number(a)?, parse_number(b)?, parse_number(c)?])
}

/// Accepts a step index (0-10) or a scale label (50-950).
fn parse_step(token: &str) -> Result<usize, String> {
    let value = token
        .parse::<u16>()
        .map_err(|_| format!("invalid step '{token}'"))?;
    if usize::from(value) < STEP_COUNT {
        return Ok(usize::from(value));
    }
    Step::from_label(value)
        .map(Step::index)
        .ok_or_else(|| format!("invalid step '{token}': expected 0-10 or a scale label"))
}

fn no_args(args: &[&str], command: ScriptCommand) -> Result<ScriptCommand, String> {
    if args.is_empty() {
        Ok(command)
    } else {
        Err(format!("unexpected arguments: {}", args.join(" ")))
    }
}

fn single_id(args: &[&str], keyword: &str) -> Result<String, String> {
    match args {
        [id] => Ok((*id).to_string()),
        _ => Err(format!("usage: {keyword} <id>")),
    }
}

/// Where the session's time comes from.
#[derive(Debug)]
enum Timeline {
    Virtual(ManualClock),
    Realtime,
}

impl Timeline {
    fn clock(&self) -> Box<dyn Clock> {
        match self {
            Self::Virtual(clock) => Box::new(clock.clone()),
            Self::Realtime => Box::new(SystemClock::new()),
        }
    }

    fn wait(&self, duration: Duration) {
        match self {
            Self::Virtual(clock) => clock.advance(duration),
            Self::Realtime => std::thread::sleep(duration),
        }
    }
}

/// History position in the final report.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct HistoryReport {
    /// Committed checkpoints
    pub len: usize,
    /// Current checkpoint index
    pub cursor: usize,
    /// Whether undo is possible
    pub can_undo: bool,
    /// Whether redo is possible
    pub can_redo: bool,
}

/// Final state of a script run.
#[derive(Debug, Serialize)]
pub struct SessionReport {
    /// Seed color text
    pub seed: String,
    /// Displayed colors
    pub colors: Vec<StepOutput>,
    /// Offsets in effect
    pub offsets: Offsets,
    /// Undo history position
    pub history: HistoryReport,
    /// Ids of palettes saved during the run
    pub saved: Vec<String>,
    /// Ids of palettes deleted during the run
    pub deleted: Vec<String>,
}

/// Executes parsed script lines against a session.
struct ScriptRunner<'a> {
    session: Session,
    store: &'a mut dyn PaletteStore,
    timeline: Timeline,
    echo: bool,
    saved: Vec<String>,
    deleted: Vec<String>,
}

impl ScriptRunner<'_> {
    fn run(&mut self, script: &str) -> CliResult<()> {
        for (number, line) in script.lines().enumerate() {
            let command = parse_line(line)
                .map_err(|e| CliError::validation(format!("line {}: {e}", number + 1)))?;
            if let Some(command) = command {
                debug!(line = number + 1, ?command, "script command");
                self.execute(command).map_err(|e| CliError {
                    kind: e.kind,
                    message: format!("line {}: {}", number + 1, e.message),
                })?;
            }
        }

        // Whatever is still pending becomes the last checkpoint
        self.dispatch(SessionEvent::Flush)
    }

    fn execute(&mut self, command: ScriptCommand) -> CliResult<()> {
        match command {
            ScriptCommand::Event(event) => self.dispatch(event),
            ScriptCommand::Wait(duration) => {
                self.timeline.wait(duration);
                self.dispatch(SessionEvent::Tick)
            }
            ScriptCommand::Load(id) => {
                let palette = self
                    .store
                    .get(&id)
                    .cloned()
                    .ok_or_else(|| CliError::validation(format!("Palette not found: {id}")))?;
                self.dispatch(SessionEvent::LoadPalette(palette))
            }
            ScriptCommand::Show => {
                if self.echo {
                    print_colors(self.session.space(), self.session.displayed());
                    println!();
                }
                Ok(())
            }
        }
    }

    fn dispatch(&mut self, event: SessionEvent) -> CliResult<()> {
        let effects = self
            .session
            .handle(event)
            .map_err(|e| CliError::validation(e.to_string()))?;

        for effect in effects {
            match effect {
                Effect::PersistPalette(palette) => {
                    let id = palette.id.clone();
                    let name = palette.name.clone();
                    match self.store.save(palette) {
                        Ok(()) => {
                            if self.echo {
                                println!("Saved palette {id} ({name})");
                            }
                            self.saved.push(id);
                        }
                        Err(e) => {
                            let reason = format!("{e:#}");
                            warn!(error = %reason, "palette not saved");
                            eprintln!("Warning: palette not saved: {reason}");
                        }
                    }
                }
                Effect::DeletePalette(id) => match self.store.delete(&id) {
                    Ok(true) => {
                        if self.echo {
                            println!("Deleted palette {id}");
                        }
                        self.deleted.push(id);
                    }
                    Ok(false) => warn!(%id, "no saved palette to delete"),
                    Err(e) => {
                        let reason = format!("{e:#}");
                        warn!(error = %reason, "palette not deleted");
                        eprintln!("Warning: palette not deleted: {reason}");
                    }
                },
                Effect::CheckpointCommitted(cursor) => debug!(cursor, "checkpoint committed"),
                Effect::Restored(cursor) => debug!(cursor, "restored checkpoint"),
                Effect::DisplayChanged | Effect::CheckpointScheduled => {}
            }
        }
        Ok(())
    }

    fn report(&self) -> SessionReport {
        let history = self.session.history();
        SessionReport {
            seed: self.session.seed().to_string(),
            colors: step_rows(self.session.space(), self.session.displayed()),
            offsets: *self.session.offsets(),
            history: HistoryReport {
                len: history.len(),
                cursor: history.cursor(),
                can_undo: history.can_undo(),
                can_redo: history.can_redo(),
            },
            saved: self.saved.clone(),
            deleted: self.deleted.clone(),
        }
    }
}

/// Runs `script` against a fresh session and returns its final state.
///
/// # Errors
///
/// Returns a validation error for an unparseable seed or script line, or an
/// event the session rejects.
pub fn run_script(
    config: &Config,
    seed: &str,
    script: &str,
    store: &mut dyn PaletteStore,
    realtime: bool,
    echo: bool,
) -> CliResult<SessionReport> {
    let timeline = if realtime {
        Timeline::Realtime
    } else {
        Timeline::Virtual(ManualClock::new())
    };

    let session = Session::new(
        OkSpace::new(),
        config.session_settings(),
        seed,
        timeline.clock(),
    )
    .map_err(|e| CliError::validation(e.to_string()))?;

    let mut runner = ScriptRunner {
        session,
        store,
        timeline,
        echo,
        saved: Vec::new(),
        deleted: Vec::new(),
    };
    runner.run(script)?;
    Ok(runner.report())
}

impl SessionArgs {
    /// Execute the session command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        let script = match &self.script {
            Some(path) => fs::read_to_string(path).map_err(|e| {
                CliError::io(format!("Failed to read script {}: {e}", path.display()))
            })?,
            None => {
                let mut buffer = String::new();
                io::stdin()
                    .read_to_string(&mut buffer)
                    .map_err(|e| CliError::io(format!("Failed to read script from stdin: {e}")))?;
                buffer
            }
        };

        let seed = self
            .seed
            .clone()
            .unwrap_or_else(|| config.session.default_seed.clone());
        let mut store = open_store(&config)?;

        let report = run_script(&config, &seed, &script, &mut store, self.realtime, !self.json)?;

        if self.json {
            return print_json(&report);
        }

        println!("Seed: {}", report.seed);
        for row in &report.colors {
            let [l, c, h] = row.oklch;
            println!(
                "{:>4}  {}  oklch({:.4} {:.4} {:.2})",
                row.label, row.hex, l, c, h
            );
        }
        println!(
            "History: checkpoint {} of {}",
            report.history.cursor + 1,
            report.history.len
        );
        Ok(())
    }
}
