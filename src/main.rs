//! Warfront -- a territory-conquest game engine.
//!
//! This binary reads commands from stdin and writes responses to stdout:
//! the interactive front for the session, combat, and mission engine.
//! Rendering stays line-oriented; anything fancier belongs to a UI layer.

use std::io::{self, BufRead, Write};
use std::path::Path;

use warfront::protocol::parser::{parse_command, Command};
use warfront::protocol::render;
use warfront::scenario::load_scenario;
use warfront::session::{GameSession, SessionPhase};
use warfront::simulate::{simulate_assault, SimulationConfig};

/// Territory limit for sessions built interactively with `register`.
/// Scenario files size their own store.
const DEFAULT_CAPACITY: usize = 5;

/// Runs the main command loop, reading from stdin and writing to stdout.
fn main() {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut session = GameSession::new(DEFAULT_CAPACITY);

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        match cmd {
            Command::Register { name, color, troops } => {
                match session.register(&name, color, troops) {
                    Ok(_) => writeln!(out, "registered {}", name).unwrap(),
                    Err(e) => eprintln!("{}", e),
                }
            }
            Command::Start { color } => match session.start(color) {
                Ok(mission) => writeln!(out, "mission {}", mission.description()).unwrap(),
                Err(e) => eprintln!("{}", e),
            },
            Command::Attack { source, target } => {
                match session.perform_attack(&source, &target) {
                    Ok(outcome) => {
                        writeln!(out, "outcome {}", render::format_outcome(&outcome)).unwrap();
                        if session.phase() == SessionPhase::Finished {
                            report_victory(&session, &mut out);
                        }
                    }
                    Err(e) => eprintln!("{}", e),
                }
            }
            Command::Map => {
                for territory in session.store().iter() {
                    writeln!(out, "territory {}", render::format_territory(territory)).unwrap();
                }
            }
            Command::Mission => match session.player() {
                Some(player) => {
                    writeln!(out, "mission {}", player.mission.description()).unwrap();
                }
                None => eprintln!("no mission assigned yet"),
            },
            Command::Check => {
                if session.check_victory() {
                    report_victory(&session, &mut out);
                } else {
                    writeln!(out, "pending").unwrap();
                }
            }
            Command::Scenario { path } => {
                match load_scenario(Path::new(&path)).and_then(|s| s.into_session(None)) {
                    Ok(loaded) => {
                        session = loaded;
                        writeln!(out, "scenario {} territories", session.store().len()).unwrap();
                        if let Some(player) = session.player() {
                            writeln!(out, "mission {}", player.mission.description()).unwrap();
                        }
                    }
                    Err(e) => eprintln!("{}", e),
                }
            }
            Command::Simulate { source, target, trials } => {
                match simulate_attack(&session, &source, &target, trials) {
                    Ok(line) => writeln!(out, "odds {}", line).unwrap(),
                    Err(e) => eprintln!("{}", e),
                }
            }
            Command::Seed { seed } => {
                session.reseed(seed);
            }
            Command::Quit => {
                session.quit();
                break;
            }
        }
        out.flush().unwrap();
    }
}

/// Writes the `victory` line with the mission text.
fn report_victory<W: Write>(session: &GameSession, out: &mut W) {
    let text = session
        .player()
        .map(|p| p.mission.description())
        .unwrap_or_default();
    writeln!(out, "victory {}", text).unwrap();
}

/// Resolves names and runs the assault simulation for the `simulate` command.
fn simulate_attack(
    session: &GameSession,
    source: &str,
    target: &str,
    trials: usize,
) -> Result<String, String> {
    let store = session.store();
    let attacker = store
        .find_by_name(source)
        .ok_or_else(|| format!("no territory named '{}'", source))?;
    let defender = store
        .find_by_name(target)
        .ok_or_else(|| format!("no territory named '{}'", target))?;

    let config = SimulationConfig {
        trials,
        threads: std::thread::available_parallelism().map_or(1, |n| n.get()),
        ..SimulationConfig::default()
    };
    let report =
        simulate_assault(store, attacker, defender, &config).map_err(|e| e.to_string())?;
    Ok(render::format_report(&report))
}
