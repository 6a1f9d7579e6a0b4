//! Scenario files.
//!
//! Loads a complete game setup from a JSON description so a session can be
//! brought to the in-progress phase in one step instead of a sequence of
//! register calls. Scenario files describe initial setups only; saving an
//! in-progress game is out of scope.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::board::ArmyColor;
use crate::session::GameSession;

/// A full game setup parsed from JSON.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    /// The player's army color, by lowercase name.
    pub player: String,
    /// Store capacity; defaults to the number of listed territories.
    #[serde(default)]
    pub capacity: Option<usize>,
    pub territories: Vec<ScenarioTerritory>,
}

/// One territory entry in a scenario file.
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioTerritory {
    pub name: String,
    pub color: String,
    pub troops: u32,
}

/// Loads a scenario from a JSON file at the given path.
pub fn load_scenario(path: &Path) -> Result<Scenario, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
    load_scenario_from_str(&data)
}

/// Loads a scenario from a JSON string.
pub fn load_scenario_from_str(json: &str) -> Result<Scenario, String> {
    serde_json::from_str(json).map_err(|e| format!("failed to parse scenario JSON: {}", e))
}

impl Scenario {
    /// Builds a started session from this scenario.
    ///
    /// Registers every territory, then starts the game as the scenario's
    /// player. With `seed` the session (and therefore the mission draw and
    /// every subsequent dice roll) is reproducible.
    pub fn into_session(self, seed: Option<u64>) -> Result<GameSession, String> {
        let capacity = self.capacity.unwrap_or(self.territories.len());
        let mut session = match seed {
            Some(s) => GameSession::with_seed(capacity, s),
            None => GameSession::new(capacity),
        };

        for t in &self.territories {
            let color = parse_color(&t.color)?;
            session
                .register(&t.name, color, t.troops)
                .map_err(|e| format!("failed to register '{}': {}", t.name, e))?;
        }

        let player = parse_color(&self.player)?;
        session
            .start(player)
            .map_err(|e| format!("failed to start scenario: {}", e))?;
        Ok(session)
    }
}

fn parse_color(name: &str) -> Result<ArmyColor, String> {
    ArmyColor::from_name(name).ok_or_else(|| format!("unknown color: '{}'", name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionPhase;

    const FIVE_TERRITORIES: &str = r#"{
        "player": "red",
        "capacity": 5,
        "territories": [
            { "name": "attica",  "color": "red",  "troops": 5 },
            { "name": "boeotia", "color": "blue", "troops": 3 },
            { "name": "corinth", "color": "red",  "troops": 4 },
            { "name": "delphi",  "color": "blue", "troops": 2 },
            { "name": "epirus",  "color": "red",  "troops": 6 }
        ]
    }"#;

    #[test]
    fn parse_full_scenario() {
        let scenario = load_scenario_from_str(FIVE_TERRITORIES).unwrap();
        assert_eq!(scenario.player, "red");
        assert_eq!(scenario.capacity, Some(5));
        assert_eq!(scenario.territories.len(), 5);
        assert_eq!(scenario.territories[1].name, "boeotia");
        assert_eq!(scenario.territories[1].troops, 3);
    }

    #[test]
    fn capacity_defaults_to_territory_count() {
        let json = r#"{
            "player": "red",
            "territories": [
                { "name": "a", "color": "red",  "troops": 2 },
                { "name": "b", "color": "blue", "troops": 2 }
            ]
        }"#;
        let scenario = load_scenario_from_str(json).unwrap();
        assert_eq!(scenario.capacity, None);
        let session = scenario.into_session(Some(1)).unwrap();
        assert_eq!(session.store().capacity(), 2);
    }

    #[test]
    fn invalid_json_is_reported() {
        let err = load_scenario_from_str("{ not json").unwrap_err();
        assert!(err.contains("failed to parse scenario JSON"));
    }

    #[test]
    fn missing_file_is_reported() {
        let err = load_scenario(Path::new("/no/such/scenario.json")).unwrap_err();
        assert!(err.contains("failed to read"));
    }

    #[test]
    fn into_session_starts_the_game() {
        let scenario = load_scenario_from_str(FIVE_TERRITORIES).unwrap();
        let session = scenario.into_session(Some(42)).unwrap();
        assert_eq!(session.phase(), SessionPhase::InProgress);
        assert_eq!(session.store().len(), 5);
        assert_eq!(session.player().unwrap().color, ArmyColor::Red);
    }

    #[test]
    fn unknown_color_fails_the_build() {
        let json = r#"{
            "player": "red",
            "territories": [
                { "name": "a", "color": "chartreuse", "troops": 2 }
            ]
        }"#;
        let scenario = load_scenario_from_str(json).unwrap();
        let err = scenario.into_session(Some(1)).unwrap_err();
        assert!(err.contains("unknown color"));
    }

    #[test]
    fn duplicate_territory_fails_the_build() {
        let json = r#"{
            "player": "red",
            "territories": [
                { "name": "a", "color": "red",  "troops": 2 },
                { "name": "a", "color": "blue", "troops": 2 }
            ]
        }"#;
        let scenario = load_scenario_from_str(json).unwrap();
        let err = scenario.into_session(Some(1)).unwrap_err();
        assert!(err.contains("failed to register 'a'"));
    }
}
