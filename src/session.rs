//! Game session orchestration.
//!
//! Holds the territory store, the player's state, and the session's random
//! source, and drives the setup -> in-progress -> finished lifecycle that
//! the UI layer calls into. Combat and mission logic stay in their own
//! stateless modules; the session only sequences them.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::board::{ArmyColor, StoreError, TerritoryStore};
use crate::combat::{self, AttackOutcome, CombatError};
use crate::mission::{self, Mission};

/// Lifecycle phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Setup,
    InProgress,
    Finished,
}

/// The active player's color and secret mission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerState {
    pub color: ArmyColor,
    pub mission: Mission,
}

/// Errors raised by session-level operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("no territory named '{0}'")]
    UnknownTerritory(String),

    #[error("the session is finished")]
    SessionFinished,

    #[error("the session has not started yet")]
    NotStarted,

    #[error("the session has already started")]
    AlreadyStarted,

    #[error("registration is only allowed during setup")]
    RegistrationClosed,

    #[error("the {0} player holds no territory")]
    PlayerWithoutTerritory(ArmyColor),

    #[error("at least two army colors are required to start")]
    NotEnoughArmies,

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Combat(#[from] CombatError),
}

/// One player's game from setup to finish.
#[derive(Debug)]
pub struct GameSession {
    store: TerritoryStore,
    player: Option<PlayerState>,
    phase: SessionPhase,
    rng: SmallRng,
}

impl GameSession {
    /// Creates a session in setup phase with an entropy-seeded rng.
    pub fn new(capacity: usize) -> Self {
        Self::with_rng(capacity, SmallRng::from_entropy())
    }

    /// Creates a session with a fixed seed for reproducible games.
    pub fn with_seed(capacity: usize, seed: u64) -> Self {
        Self::with_rng(capacity, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(capacity: usize, rng: SmallRng) -> Self {
        GameSession {
            store: TerritoryStore::new(capacity),
            player: None,
            phase: SessionPhase::Setup,
            rng,
        }
    }

    /// Returns the current lifecycle phase.
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Returns the territory store for read-only inspection.
    pub fn store(&self) -> &TerritoryStore {
        &self.store
    }

    /// Returns the player state once the session has started.
    pub fn player(&self) -> Option<&PlayerState> {
        self.player.as_ref()
    }

    /// Replaces the session rng, typically to replay a game.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = SmallRng::seed_from_u64(seed);
    }

    /// Registers a territory during setup and returns its index.
    pub fn register(
        &mut self,
        name: &str,
        owner: ArmyColor,
        troops: u32,
    ) -> Result<usize, SessionError> {
        match self.phase {
            SessionPhase::Setup => Ok(self.store.register(name, owner, troops)?),
            SessionPhase::InProgress => Err(SessionError::RegistrationClosed),
            SessionPhase::Finished => Err(SessionError::SessionFinished),
        }
    }

    /// Ends setup: fixes the player's color, draws the secret mission, and
    /// enters the in-progress phase.
    ///
    /// Requires the player's color to hold at least one territory and at
    /// least two colors on the map, so that every mission kind is winnable.
    pub fn start(&mut self, player_color: ArmyColor) -> Result<Mission, SessionError> {
        match self.phase {
            SessionPhase::Setup => {}
            SessionPhase::InProgress => return Err(SessionError::AlreadyStarted),
            SessionPhase::Finished => return Err(SessionError::SessionFinished),
        }
        if self.store.count_owned_by(player_color) == 0 {
            return Err(SessionError::PlayerWithoutTerritory(player_color));
        }
        if self.store.colors_present().len() < 2 {
            return Err(SessionError::NotEnoughArmies);
        }

        let mission = mission::assign(player_color, &self.store, &mut self.rng);
        self.player = Some(PlayerState {
            color: player_color,
            mission,
        });
        self.phase = SessionPhase::InProgress;
        Ok(mission)
    }

    /// Performs one attack between two territories addressed by name.
    ///
    /// On a conquest the mission is evaluated and, when satisfied, the
    /// session latches into the finished phase. Any error leaves the map
    /// untouched.
    pub fn perform_attack(
        &mut self,
        source: &str,
        target: &str,
    ) -> Result<AttackOutcome, SessionError> {
        match self.phase {
            SessionPhase::InProgress => {}
            SessionPhase::Setup => return Err(SessionError::NotStarted),
            SessionPhase::Finished => return Err(SessionError::SessionFinished),
        }

        let attacker = self
            .store
            .find_by_name(source)
            .ok_or_else(|| SessionError::UnknownTerritory(source.to_string()))?;
        let defender = self
            .store
            .find_by_name(target)
            .ok_or_else(|| SessionError::UnknownTerritory(target.to_string()))?;

        let outcome = combat::resolve_attack(&mut self.store, attacker, defender, &mut self.rng)?;

        if outcome.conquered && self.check_victory() {
            self.phase = SessionPhase::Finished;
        }
        Ok(outcome)
    }

    /// Returns true iff the player's mission is currently satisfied.
    /// Pure: never changes session state.
    pub fn check_victory(&self) -> bool {
        match &self.player {
            Some(p) => p.mission.is_satisfied(p.color, &self.store),
            None => false,
        }
    }

    /// Ends the session immediately, regardless of mission state.
    pub fn quit(&mut self) {
        self.phase = SessionPhase::Finished;
    }
}
