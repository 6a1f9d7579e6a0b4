//! Attack resolution.
//!
//! Splits the dice mechanics (pure, roll-list in / casualties out) from the
//! resolver that validates an attack and mutates territory state.

pub mod dice;
pub mod resolver;

pub use dice::{attacker_dice, casualties, defender_dice, roll, Casualties, DiePair};
pub use resolver::{
    resolve_attack, resolve_attack_with_rolls, validate_attack, AttackOutcome, CombatError,
};
