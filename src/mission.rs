//! Secret missions and their verification.
//!
//! A mission is assigned once at the start of a session and never changes.
//! Satisfaction checks are pure reads of the territory store and may be
//! repeated any number of times per turn.

use rand::Rng;

use crate::board::{ArmyColor, TerritoryStore};

/// A player's secret victory condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mission {
    /// Win when no territory is held by the target color.
    DestroyArmy { target: ArmyColor },
    /// Win when the player holds at least `target` territories.
    ConquerCount { target: usize },
}

impl Mission {
    /// Returns true iff the mission is currently satisfied.
    pub fn is_satisfied(&self, player: ArmyColor, store: &TerritoryStore) -> bool {
        match *self {
            Mission::DestroyArmy { target } => store.count_owned_by(target) == 0,
            Mission::ConquerCount { target } => store.count_owned_by(player) >= target,
        }
    }

    /// Returns the mission text shown to the player.
    pub fn description(&self) -> String {
        match *self {
            Mission::DestroyArmy { target } => format!("destroy the {target} army"),
            Mission::ConquerCount { target } => format!("conquer {target} territories"),
        }
    }
}

/// Draws a mission for the player from the current map.
///
/// Chooses uniformly between the two mission kinds. A `DestroyArmy` target
/// is drawn from the colors present at setup, never the player's own; a
/// `ConquerCount` threshold is drawn from `2..=capacity`. When no enemy
/// color exists the draw falls back to `ConquerCount` (the session refuses
/// to start such a game in the first place).
pub fn assign(player: ArmyColor, store: &TerritoryStore, rng: &mut impl Rng) -> Mission {
    let enemies: Vec<ArmyColor> = store
        .colors_present()
        .into_iter()
        .filter(|&c| c != player)
        .collect();

    if !enemies.is_empty() && rng.gen_bool(0.5) {
        let target = enemies[rng.gen_range(0..enemies.len())];
        Mission::DestroyArmy { target }
    } else {
        let target = rng.gen_range(2..=store.capacity().max(2));
        Mission::ConquerCount { target }
    }
}
