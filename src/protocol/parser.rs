//! Command parser for the interactive loop.
//!
//! Parses incoming text commands from raw lines into structured `Command`
//! variants that the binary's main loop can dispatch on.

use crate::board::ArmyColor;

/// A parsed player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Register a territory during setup: `register <name> <color> <troops>`.
    Register {
        name: String,
        color: ArmyColor,
        troops: u32,
    },

    /// End setup and draw the secret mission: `start <color>`.
    Start { color: ArmyColor },

    /// Attack one territory from another: `attack <source> <target>`.
    Attack { source: String, target: String },

    /// Print every territory's owner and garrison.
    Map,

    /// Print the player's mission text.
    Mission,

    /// Check whether the mission is currently satisfied.
    Check,

    /// Load a full setup from a JSON scenario file: `scenario <path>`.
    Scenario { path: String },

    /// Estimate assault odds: `simulate <source> <target> <trials>`.
    Simulate {
        source: String,
        target: String,
        trials: usize,
    },

    /// Reseed the session rng: `seed <n>`.
    Seed { seed: u64 },

    /// End the session and exit.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging to stderr.
pub fn parse_command(line: &str) -> Option<Command> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return None;
    }

    match tokens[0] {
        "map" => Some(Command::Map),
        "mission" => Some(Command::Mission),
        "check" => Some(Command::Check),
        "quit" => Some(Command::Quit),

        "register" => parse_register(&tokens),
        "start" => parse_start(&tokens),
        "attack" => parse_attack(&tokens),
        "scenario" => parse_scenario(&tokens),
        "simulate" => parse_simulate(&tokens),
        "seed" => parse_seed(&tokens),

        other => {
            eprintln!("unknown command: {}", other);
            None
        }
    }
}

/// Parses `register <name> <color> <troops>`.
fn parse_register(tokens: &[&str]) -> Option<Command> {
    if tokens.len() != 4 {
        eprintln!("malformed register: expected 'register <name> <color> <troops>'");
        return None;
    }
    let color = parse_color(tokens[2])?;
    let troops = match tokens[3].parse::<u32>() {
        Ok(t) => t,
        Err(_) => {
            eprintln!("invalid troop count: '{}'", tokens[3]);
            return None;
        }
    };
    Some(Command::Register {
        name: tokens[1].to_string(),
        color,
        troops,
    })
}

/// Parses `start <color>`.
fn parse_start(tokens: &[&str]) -> Option<Command> {
    if tokens.len() != 2 {
        eprintln!("malformed start: expected 'start <color>'");
        return None;
    }
    Some(Command::Start {
        color: parse_color(tokens[1])?,
    })
}

/// Parses `attack <source> <target>`.
fn parse_attack(tokens: &[&str]) -> Option<Command> {
    if tokens.len() != 3 {
        eprintln!("malformed attack: expected 'attack <source> <target>'");
        return None;
    }
    Some(Command::Attack {
        source: tokens[1].to_string(),
        target: tokens[2].to_string(),
    })
}

/// Parses `scenario <path>`.
fn parse_scenario(tokens: &[&str]) -> Option<Command> {
    if tokens.len() != 2 {
        eprintln!("malformed scenario: expected 'scenario <path>'");
        return None;
    }
    Some(Command::Scenario {
        path: tokens[1].to_string(),
    })
}

/// Parses `simulate <source> <target> <trials>`.
fn parse_simulate(tokens: &[&str]) -> Option<Command> {
    if tokens.len() != 4 {
        eprintln!("malformed simulate: expected 'simulate <source> <target> <trials>'");
        return None;
    }
    let trials = match tokens[3].parse::<usize>() {
        Ok(t) if t > 0 => t,
        _ => {
            eprintln!("invalid trial count: '{}'", tokens[3]);
            return None;
        }
    };
    Some(Command::Simulate {
        source: tokens[1].to_string(),
        target: tokens[2].to_string(),
        trials,
    })
}

/// Parses `seed <n>`.
fn parse_seed(tokens: &[&str]) -> Option<Command> {
    if tokens.len() != 2 {
        eprintln!("malformed seed: expected 'seed <n>'");
        return None;
    }
    match tokens[1].parse::<u64>() {
        Ok(seed) => Some(Command::Seed { seed }),
        Err(_) => {
            eprintln!("invalid seed: '{}'", tokens[1]);
            None
        }
    }
}

fn parse_color(token: &str) -> Option<ArmyColor> {
    match ArmyColor::from_name(token) {
        Some(c) => Some(c),
        None => {
            eprintln!("unknown color: '{}'", token);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bare_commands() {
        assert_eq!(parse_command("map"), Some(Command::Map));
        assert_eq!(parse_command("mission"), Some(Command::Mission));
        assert_eq!(parse_command("check"), Some(Command::Check));
        assert_eq!(parse_command("quit"), Some(Command::Quit));
    }

    #[test]
    fn parse_empty_line_returns_none() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("   "), None);
        assert_eq!(parse_command("\t"), None);
    }

    #[test]
    fn parse_unknown_command_returns_none() {
        assert_eq!(parse_command("foobar"), None);
    }

    #[test]
    fn parse_register() {
        assert_eq!(
            parse_command("register attica red 5"),
            Some(Command::Register {
                name: "attica".to_string(),
                color: ArmyColor::Red,
                troops: 5,
            })
        );
    }

    #[test]
    fn parse_register_malformed_returns_none() {
        assert_eq!(parse_command("register"), None);
        assert_eq!(parse_command("register attica red"), None);
        assert_eq!(parse_command("register attica mauve 5"), None);
        assert_eq!(parse_command("register attica red five"), None);
        assert_eq!(parse_command("register attica red -2"), None);
    }

    #[test]
    fn parse_start_all_colors() {
        for color in crate::board::ALL_COLORS {
            let cmd = parse_command(&format!("start {}", color.name()));
            assert_eq!(cmd, Some(Command::Start { color }));
        }
    }

    #[test]
    fn parse_start_malformed_returns_none() {
        assert_eq!(parse_command("start"), None);
        assert_eq!(parse_command("start narnia"), None);
        assert_eq!(parse_command("start red blue"), None);
    }

    #[test]
    fn parse_attack() {
        assert_eq!(
            parse_command("attack attica boeotia"),
            Some(Command::Attack {
                source: "attica".to_string(),
                target: "boeotia".to_string(),
            })
        );
    }

    #[test]
    fn parse_attack_malformed_returns_none() {
        assert_eq!(parse_command("attack"), None);
        assert_eq!(parse_command("attack attica"), None);
        assert_eq!(parse_command("attack a b c"), None);
    }

    #[test]
    fn parse_scenario_path() {
        assert_eq!(
            parse_command("scenario maps/five.json"),
            Some(Command::Scenario {
                path: "maps/five.json".to_string(),
            })
        );
        assert_eq!(parse_command("scenario"), None);
    }

    #[test]
    fn parse_simulate() {
        assert_eq!(
            parse_command("simulate attica boeotia 1000"),
            Some(Command::Simulate {
                source: "attica".to_string(),
                target: "boeotia".to_string(),
                trials: 1000,
            })
        );
    }

    #[test]
    fn parse_simulate_rejects_zero_trials() {
        assert_eq!(parse_command("simulate a b 0"), None);
        assert_eq!(parse_command("simulate a b many"), None);
        assert_eq!(parse_command("simulate a b"), None);
    }

    #[test]
    fn parse_seed_value() {
        assert_eq!(parse_command("seed 42"), Some(Command::Seed { seed: 42 }));
        assert_eq!(parse_command("seed"), None);
        assert_eq!(parse_command("seed x"), None);
    }

    #[test]
    fn parse_with_leading_trailing_whitespace() {
        assert_eq!(parse_command("  map  "), Some(Command::Map));
        assert_eq!(parse_command("  quit  "), Some(Command::Quit));
    }
}
