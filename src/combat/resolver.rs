//! Attack resolution.
//!
//! Resolves a single attack between two territories: validates the pairing,
//! rolls dice, applies casualties, and transfers ownership on conquest.
//! Validation happens before any mutation, so an error leaves the store
//! untouched and the whole attack is applied as one atomic step.

use rand::Rng;

use crate::board::color::ArmyColor;
use crate::board::store::{StoreError, TerritoryStore};

use super::dice::{self, Casualties, DiePair};

/// Errors that reject an attack before any dice are rolled.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CombatError {
    #[error("a territory cannot attack itself")]
    SelfAttack,

    #[error("attacker and defender both belong to the {0} army")]
    FriendlyFire(ArmyColor),

    #[error("attacking requires at least 2 troops, found {0}")]
    InsufficientTroops(u32),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Full record of one resolved attack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttackOutcome {
    pub attacker: String,
    pub defender: String,
    /// Attacker's rolls, sorted descending.
    pub attacker_rolls: Vec<u8>,
    /// Defender's rolls, sorted descending.
    pub defender_rolls: Vec<u8>,
    pub pairs: Vec<DiePair>,
    pub losses: Casualties,
    pub attacker_troops: u32,
    pub defender_troops: u32,
    pub conquered: bool,
}

/// Checks the preconditions for an attack without touching the store.
///
/// Index errors surface as `StoreError`; the domain rules are checked in
/// order: self-attack, friendly fire, then troop minimum.
pub fn validate_attack(
    store: &TerritoryStore,
    attacker: usize,
    defender: usize,
) -> Result<(), CombatError> {
    if attacker == defender {
        return Err(CombatError::SelfAttack);
    }
    let atk = store.get(attacker)?;
    let def = store.get(defender)?;
    if atk.owner == def.owner {
        return Err(CombatError::FriendlyFire(atk.owner));
    }
    if atk.troops < 2 {
        return Err(CombatError::InsufficientTroops(atk.troops));
    }
    Ok(())
}

/// Resolves one attack, rolling dice from `rng`.
///
/// Dice counts follow the classic rule: the attacker rolls
/// `min(3, troops - 1)` and the defender `min(2, troops)`. Outcomes are
/// final; there are no retries.
pub fn resolve_attack(
    store: &mut TerritoryStore,
    attacker: usize,
    defender: usize,
    rng: &mut impl Rng,
) -> Result<AttackOutcome, CombatError> {
    validate_attack(store, attacker, defender)?;

    let attacker_rolls = dice::roll(dice::attacker_dice(store.get(attacker)?.troops), rng);
    let defender_rolls = dice::roll(dice::defender_dice(store.get(defender)?.troops), rng);

    apply(store, attacker, defender, attacker_rolls, defender_rolls)
}

/// Resolves one attack from recorded dice instead of a live roll.
///
/// Replay entry point: the rolls are sorted descending here, so callers may
/// pass them in any order. Rolls beyond what the position permits (three for
/// the attacker, two for the defender, fewer for small garrisons) are
/// dropped, keeping the highest. Validation is identical to `resolve_attack`.
pub fn resolve_attack_with_rolls(
    store: &mut TerritoryStore,
    attacker: usize,
    defender: usize,
    attacker_rolls: &[u8],
    defender_rolls: &[u8],
) -> Result<AttackOutcome, CombatError> {
    validate_attack(store, attacker, defender)?;

    let mut atk_rolls = attacker_rolls.to_vec();
    let mut def_rolls = defender_rolls.to_vec();
    atk_rolls.sort_unstable_by(|a, b| b.cmp(a));
    def_rolls.sort_unstable_by(|a, b| b.cmp(a));
    atk_rolls.truncate(dice::attacker_dice(store.get(attacker)?.troops));
    def_rolls.truncate(dice::defender_dice(store.get(defender)?.troops));

    apply(store, attacker, defender, atk_rolls, def_rolls)
}

/// Applies casualties and the conquest step for already-validated rolls.
fn apply(
    store: &mut TerritoryStore,
    attacker: usize,
    defender: usize,
    attacker_rolls: Vec<u8>,
    defender_rolls: Vec<u8>,
) -> Result<AttackOutcome, CombatError> {
    let (pairs, losses) = dice::casualties(&attacker_rolls, &defender_rolls);

    let attacker_color = store.get(attacker)?.owner;
    let attacker_name = store.get(attacker)?.name().to_string();
    let defender_name = store.get(defender)?.name().to_string();

    {
        let atk = store.get_mut(attacker)?;
        atk.troops = atk.troops.saturating_sub(losses.attacker);
    }
    {
        let def = store.get_mut(defender)?;
        def.troops = def.troops.saturating_sub(losses.defender);
    }

    // Conquest: exactly at zero, the defender changes hands and one troop
    // moves in from the attacker.
    let conquered = store.get(defender)?.troops == 0;
    if conquered {
        store.get_mut(attacker)?.troops -= 1;
        let def = store.get_mut(defender)?;
        def.owner = attacker_color;
        def.troops = 1;
    }

    Ok(AttackOutcome {
        attacker: attacker_name,
        defender: defender_name,
        attacker_rolls,
        defender_rolls,
        pairs,
        losses,
        attacker_troops: store.get(attacker)?.troops,
        defender_troops: store.get(defender)?.troops,
        conquered,
    })
}
