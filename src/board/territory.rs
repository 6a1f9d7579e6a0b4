//! Territories and their mutable state.

use super::color::ArmyColor;

/// A territory on the map.
///
/// The name is fixed at registration; owner and troop count change only
/// through combat resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Territory {
    name: String,
    pub owner: ArmyColor,
    pub troops: u32,
}

impl Territory {
    /// Creates a territory with the given name, owner, and garrison.
    pub fn new(name: &str, owner: ArmyColor, troops: u32) -> Self {
        Territory {
            name: name.to_string(),
            owner,
            troops,
        }
    }

    /// Returns the territory's name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_territory_holds_initial_state() {
        let t = Territory::new("tundra", ArmyColor::Blue, 3);
        assert_eq!(t.name(), "tundra");
        assert_eq!(t.owner, ArmyColor::Blue);
        assert_eq!(t.troops, 3);
    }
}
