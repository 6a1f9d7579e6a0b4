//! Monte Carlo assault simulation.
//!
//! Estimates the odds of a full assault (repeated attack rounds until the
//! defender falls or the attacker can no longer attack) by replaying it
//! many times on scratch copies of the map. The live store is never
//! touched. Trials run concurrently when more than one thread is
//! configured; each trial draws its dice from its own seeded rng so a
//! report is reproducible at any thread count.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::board::TerritoryStore;
use crate::combat::{self, CombatError};

/// Trial count, parallelism, and base seed for one simulation.
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub trials: usize,
    pub threads: usize,
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            trials: 1000,
            threads: 1,
            seed: 0,
        }
    }
}

/// Aggregated result of a batch of assault trials.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulationReport {
    pub trials: usize,
    /// Trials that ended with the defender conquered.
    pub conquests: usize,
    /// Attacker dice casualties summed over all trials (the one-troop
    /// move on conquest is not a casualty).
    pub attacker_losses: u64,
    /// Defender dice casualties summed over all trials.
    pub defender_losses: u64,
}

impl SimulationReport {
    /// Fraction of trials that conquered the defender.
    pub fn conquest_rate(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        self.conquests as f64 / self.trials as f64
    }

    /// Mean attacker casualties per trial.
    pub fn mean_attacker_losses(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        self.attacker_losses as f64 / self.trials as f64
    }

    /// Mean defender casualties per trial.
    pub fn mean_defender_losses(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        self.defender_losses as f64 / self.trials as f64
    }

    fn absorb(mut self, other: SimulationReport) -> SimulationReport {
        self.trials += other.trials;
        self.conquests += other.conquests;
        self.attacker_losses += other.attacker_losses;
        self.defender_losses += other.defender_losses;
        self
    }
}

/// Runs the configured number of assault trials from the current position.
///
/// The attack preconditions are validated once up front; an unattackable
/// position returns the combat error unchanged and runs no trials.
pub fn simulate_assault(
    store: &TerritoryStore,
    attacker: usize,
    defender: usize,
    config: &SimulationConfig,
) -> Result<SimulationReport, CombatError> {
    combat::validate_attack(store, attacker, defender)?;

    let report = if config.threads > 1 {
        run_parallel(store, attacker, defender, config)
    } else {
        (0..config.trials)
            .map(|i| run_trial(store, attacker, defender, config.seed.wrapping_add(i as u64)))
            .fold(SimulationReport::default(), SimulationReport::absorb)
    };
    Ok(report)
}

/// Runs trials concurrently on a dedicated rayon pool.
fn run_parallel(
    store: &TerritoryStore,
    attacker: usize,
    defender: usize,
    config: &SimulationConfig,
) -> SimulationReport {
    use rayon::prelude::*;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()
        .expect("failed to build rayon thread pool");

    pool.install(|| {
        (0..config.trials)
            .into_par_iter()
            .map(|i| run_trial(store, attacker, defender, config.seed.wrapping_add(i as u64)))
            .reduce(SimulationReport::default, SimulationReport::absorb)
    })
}

/// Plays one assault to its end on a scratch copy of the map.
fn run_trial(
    store: &TerritoryStore,
    attacker: usize,
    defender: usize,
    seed: u64,
) -> SimulationReport {
    let mut scratch = store.clone();
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut report = SimulationReport {
        trials: 1,
        ..SimulationReport::default()
    };

    loop {
        let outcome = match combat::resolve_attack(&mut scratch, attacker, defender, &mut rng) {
            Ok(o) => o,
            // The attacker dropped below two troops; the assault stalls.
            Err(_) => break,
        };
        report.attacker_losses += u64::from(outcome.losses.attacker);
        report.defender_losses += u64::from(outcome.losses.defender);
        if outcome.conquered {
            report.conquests = 1;
            break;
        }
    }
    report
}
