//! Dice mechanics for attack resolution.
//!
//! Pure functions over explicit roll lists: dice-count rules, rolling,
//! pairing, and casualty computation. Nothing in this module touches
//! territory state, so every rule is unit-testable without I/O.

use rand::Rng;

/// Number of faces on a battle die.
pub const DIE_FACES: u8 = 6;

/// Maximum dice the attacker may roll in one round.
pub const MAX_ATTACKER_DICE: usize = 3;

/// Maximum dice the defender may roll in one round.
pub const MAX_DEFENDER_DICE: usize = 2;

/// Returns how many dice an attacker with `troops` rolls.
///
/// One troop must stay behind on offense, so the attacker commits at most
/// `troops - 1` dice, capped at three.
pub fn attacker_dice(troops: u32) -> usize {
    (troops.saturating_sub(1) as usize).min(MAX_ATTACKER_DICE)
}

/// Returns how many dice a defender with `troops` rolls, capped at two.
pub fn defender_dice(troops: u32) -> usize {
    (troops as usize).min(MAX_DEFENDER_DICE)
}

/// Rolls `count` dice and returns them sorted in descending order.
pub fn roll(count: usize, rng: &mut impl Rng) -> Vec<u8> {
    let mut dice: Vec<u8> = (0..count).map(|_| rng.gen_range(1..=DIE_FACES)).collect();
    dice.sort_unstable_by(|a, b| b.cmp(a));
    dice
}

/// One compared pair of dice and who lost it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiePair {
    pub attacker: u8,
    pub defender: u8,
    /// True when the defender lost the pair; ties favor the defender.
    pub defender_lost: bool,
}

/// Troop losses from one round of dice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Casualties {
    pub attacker: u32,
    pub defender: u32,
}

/// Pairs two descending-sorted roll lists highest-vs-highest and computes
/// the losses on each side.
///
/// Only `min(len_a, len_d)` pairs are compared; surplus dice on either side
/// are ignored. The attacker must roll strictly higher to win a pair.
pub fn casualties(attacker_rolls: &[u8], defender_rolls: &[u8]) -> (Vec<DiePair>, Casualties) {
    let pairs: Vec<DiePair> = attacker_rolls
        .iter()
        .zip(defender_rolls.iter())
        .map(|(&a, &d)| DiePair {
            attacker: a,
            defender: d,
            defender_lost: a > d,
        })
        .collect();

    let mut losses = Casualties::default();
    for p in &pairs {
        if p.defender_lost {
            losses.defender += 1;
        } else {
            losses.attacker += 1;
        }
    }
    (pairs, losses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn attacker_dice_leaves_one_behind() {
        assert_eq!(attacker_dice(1), 0);
        assert_eq!(attacker_dice(2), 1);
        assert_eq!(attacker_dice(3), 2);
        assert_eq!(attacker_dice(4), 3);
        assert_eq!(attacker_dice(50), 3);
        assert_eq!(attacker_dice(0), 0);
    }

    #[test]
    fn defender_dice_capped_at_two() {
        assert_eq!(defender_dice(0), 0);
        assert_eq!(defender_dice(1), 1);
        assert_eq!(defender_dice(2), 2);
        assert_eq!(defender_dice(9), 2);
    }

    #[test]
    fn roll_is_sorted_descending_and_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let dice = roll(3, &mut rng);
            assert_eq!(dice.len(), 3);
            assert!(dice.windows(2).all(|w| w[0] >= w[1]));
            assert!(dice.iter().all(|&d| (1..=6).contains(&d)));
        }
    }

    #[test]
    fn roll_zero_dice_is_empty() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(roll(0, &mut rng).is_empty());
    }

    #[test]
    fn ties_favor_the_defender() {
        let (pairs, losses) = casualties(&[4], &[4]);
        assert!(!pairs[0].defender_lost);
        assert_eq!(losses, Casualties { attacker: 1, defender: 0 });
    }

    #[test]
    fn strictly_higher_attacker_wins_pair() {
        let (pairs, losses) = casualties(&[5], &[4]);
        assert!(pairs[0].defender_lost);
        assert_eq!(losses, Casualties { attacker: 0, defender: 1 });
    }

    #[test]
    fn split_pairs() {
        // 6v5 defender loses, 3v3 tie goes to defender.
        let (pairs, losses) = casualties(&[6, 3], &[5, 3]);
        assert_eq!(pairs.len(), 2);
        assert!(pairs[0].defender_lost);
        assert!(!pairs[1].defender_lost);
        assert_eq!(losses, Casualties { attacker: 1, defender: 1 });
    }

    #[test]
    fn surplus_dice_are_ignored() {
        let (pairs, losses) = casualties(&[6, 6, 6], &[1]);
        assert_eq!(pairs.len(), 1);
        assert_eq!(losses, Casualties { attacker: 0, defender: 1 });

        let (pairs, losses) = casualties(&[2], &[6, 6]);
        assert_eq!(pairs.len(), 1);
        assert_eq!(losses, Casualties { attacker: 1, defender: 0 });
    }

    #[test]
    fn no_dice_no_losses() {
        let (pairs, losses) = casualties(&[], &[2, 1]);
        assert!(pairs.is_empty());
        assert_eq!(losses, Casualties::default());
    }
}
