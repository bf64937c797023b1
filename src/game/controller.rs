//! Game controller - the single owner of the world state
//!
//! Every state change goes through here: player commands and turn
//! application. A transition either applies completely or is rejected and
//! leaves the state untouched. After each applied transition the snapshot is
//! saved and a fresh `GameView` is published to subscribers.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tokio::sync::watch;

use crate::core::config::GameConfig;
use crate::core::error::{CommandRejected, CommandResult};
use crate::core::types::{clamp_reputation, Money, Ownership};
use crate::game::history::{TurnHistory, TurnSummary};
use crate::game::persistence::SnapshotStore;
use crate::game::state::{WorldState, PRICE_SLIDER_MAX, PRICE_SLIDER_MIN};
use crate::market::{purchase_price, MarketingLevel, Region, RenovationLevel, Segment, StaffingLevel};
use crate::simulation::events::{roll_event, tick_events};
use crate::simulation::turn::{compute_turn, TurnResult};

/// Which way turns are currently advancing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Player ends each turn by hand
    Manual,
    /// The idle timer ends turns
    Auto,
    /// Closed for works; turns still pass, by either means
    Renovating,
}

/// Read-only projection handed to the presentation layer
#[derive(Debug, Clone, PartialEq)]
pub struct GameView {
    pub state: WorldState,
    pub last_result: Option<TurnResult>,
    pub idle_mode: bool,
}

pub struct GameController {
    state: WorldState,
    last_result: Option<TurnResult>,
    history: TurnHistory,
    config: GameConfig,
    rng: ChaCha8Rng,
    store: Box<dyn SnapshotStore>,
    /// Identifies the idle timer allowed to advance turns
    idle_epoch: Option<u64>,
    next_epoch: u64,
    view_tx: watch::Sender<GameView>,
}

impl GameController {
    /// Start a fresh game without looking at the store
    pub fn new(config: GameConfig, store: impl SnapshotStore + 'static) -> Self {
        let state = WorldState::new(config.starting_balance);
        Self::with_state(config, store, state)
    }

    /// Resume the saved game, or start fresh if there is none or it is unreadable
    pub fn load(config: GameConfig, store: impl SnapshotStore + 'static) -> Self {
        let state = match store.load() {
            Ok(Some(state)) => {
                tracing::info!(
                    turn = state.current_turn(),
                    balance = state.balance,
                    "Loaded saved game"
                );
                state
            }
            Ok(None) => {
                tracing::debug!("No saved game, starting fresh");
                WorldState::new(config.starting_balance)
            }
            Err(e) => {
                tracing::warn!("Saved game could not be restored ({}), starting fresh", e);
                WorldState::new(config.starting_balance)
            }
        };
        Self::with_state(config, store, state)
    }

    /// Resume from an explicit state
    pub fn with_state(
        config: GameConfig,
        store: impl SnapshotStore + 'static,
        state: WorldState,
    ) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let (view_tx, _) = watch::channel(GameView {
            state: state.clone(),
            last_result: None,
            idle_mode: false,
        });

        Self {
            state,
            last_result: None,
            history: TurnHistory::new(),
            config,
            rng,
            store: Box::new(store),
            idle_epoch: None,
            next_epoch: 0,
            view_tx,
        }
    }

    pub fn state(&self) -> &WorldState {
        &self.state
    }

    pub fn last_result(&self) -> Option<&TurnResult> {
        self.last_result.as_ref()
    }

    pub fn history(&self) -> &TurnHistory {
        &self.history
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn is_idle(&self) -> bool {
        self.idle_epoch.is_some()
    }

    pub fn phase(&self) -> GamePhase {
        if self.state.is_renovating() {
            GamePhase::Renovating
        } else if self.is_idle() {
            GamePhase::Auto
        } else {
            GamePhase::Manual
        }
    }

    pub fn view(&self) -> GameView {
        GameView {
            state: self.state.clone(),
            last_result: self.last_result.clone(),
            idle_mode: self.is_idle(),
        }
    }

    /// Receive a new `GameView` after every transition
    pub fn subscribe(&self) -> watch::Receiver<GameView> {
        self.view_tx.subscribe()
    }

    /// Cost of moving to the next tier, if there is one
    pub fn upgrade_cost(&self) -> Option<Money> {
        self.state.upgrade_cost(self.config.upgrade_cost_fraction)
    }

    // === TURNS ===

    /// Play one turn by hand. Refused while idle mode drives the game.
    pub fn end_turn(&mut self) -> CommandResult<TurnResult> {
        if self.is_idle() {
            return self.reject(CommandRejected::IdleModeActive);
        }
        Ok(self.advance_turn())
    }

    fn advance_turn(&mut self) -> TurnResult {
        let played_turn = self.state.current_turn();
        let played_month = self.state.current_month();

        let input = self.state.turn_input(self.config.max_guest_decisions);
        let result = compute_turn(&input, &mut self.rng);

        if result.is_renovating {
            self.state.renovation_turns_remaining -= 1;
            if self.state.renovation_turns_remaining == 0 {
                tracing::info!(level = ?self.state.renovation_level, "Renovation finished");
            }
        } else {
            self.state.balance += result.profit();
            self.state.reputation =
                clamp_reputation(self.state.reputation + result.reputation_change);
        }

        // Events shaped this turn's demand above; only now do they count down
        for expired in tick_events(&mut self.state.active_events) {
            tracing::info!(event = ?expired, "Event ended");
        }
        if self.state.active_events.is_empty() {
            if let Some(event) = roll_event(&mut self.rng, self.config.event_chance) {
                tracing::info!(
                    event = ?event.event_id,
                    turns = event.turns_remaining,
                    "{}",
                    event.event_id
                );
                self.state.active_events.push(event);
            }
        }

        if self.state.calendar.advance(self.config.turns_per_month) {
            tracing::debug!(month = self.state.current_month(), "New month");
        }

        self.history.push(TurnSummary {
            turn: played_turn,
            month: played_month,
            renovating: result.is_renovating,
            occupancy_percent: result.occupancy_percent,
            revenue: result.revenue,
            expense: result.expense,
            balance_after: self.state.balance,
            reputation_after: self.state.reputation,
        });

        tracing::debug!(
            turn = played_turn,
            occupied = result.occupied_rooms,
            revenue = result.revenue,
            expense = result.expense,
            "Turn complete"
        );

        self.last_result = Some(result.clone());
        self.commit();
        result
    }

    // === IDLE MODE (driven by the scheduler) ===

    pub(crate) fn begin_idle(&mut self) -> u64 {
        let epoch = self.next_epoch;
        self.next_epoch += 1;
        self.idle_epoch = Some(epoch);
        self.publish();
        epoch
    }

    pub(crate) fn end_idle(&mut self) {
        if self.idle_epoch.take().is_some() {
            self.publish();
        }
    }

    /// Advance a turn on behalf of the timer started at `epoch`.
    /// Returns None once that timer has been cancelled.
    pub(crate) fn idle_tick(&mut self, epoch: u64) -> Option<TurnResult> {
        if self.idle_epoch != Some(epoch) {
            return None;
        }
        Some(self.advance_turn())
    }

    // === PLAYER COMMANDS ===

    /// Buy the leased property outright
    pub fn buy_hotel(&mut self) -> CommandResult {
        if self.state.ownership.is_owned() {
            return self.reject(CommandRejected::AlreadyOwned);
        }
        let price = self.state.purchase_price();
        self.ensure_funds(price)?;

        self.state.balance -= price;
        self.state.ownership = Ownership::Owned;
        tracing::info!(price, segment = %self.state.segment, "Bought the hotel");
        self.commit();
        Ok(())
    }

    /// Move one tier up the property ladder
    pub fn upgrade_segment(&mut self) -> CommandResult<Segment> {
        let Some(next) = self.state.segment.next() else {
            return self.reject(CommandRejected::NoNextSegment(self.state.segment));
        };

        let required = self.config.upgrade_reputation_floor;
        if next.index() > self.config.gated_tier_threshold && self.state.reputation < required {
            return self.reject(CommandRejected::ReputationTooLow {
                segment: next,
                required,
                current: self.state.reputation,
            });
        }

        let cost = purchase_price(next, self.state.region) * self.config.upgrade_cost_fraction;
        self.ensure_funds(cost)?;

        self.state.balance -= cost;
        self.state.segment = next;
        tracing::info!(cost, segment = %next, "Upgraded property");
        self.commit();
        Ok(next)
    }

    /// Close the hotel for works
    pub fn start_renovation(&mut self, level: RenovationLevel) -> CommandResult {
        if self.state.is_renovating() {
            return self.reject(CommandRejected::RenovationInProgress {
                turns_left: self.state.renovation_turns_remaining,
            });
        }
        if level == RenovationLevel::None {
            return self.reject(CommandRejected::NoRenovationSelected);
        }

        let cost = self.state.renovation_cost(level);
        self.ensure_funds(cost)?;

        self.state.balance -= cost;
        self.state.renovation_level = level;
        self.state.renovation_turns_remaining = level.turns_to_complete();
        tracing::info!(
            cost,
            ?level,
            turns = level.turns_to_complete(),
            "Renovation started"
        );
        self.commit();
        Ok(())
    }

    /// Set the price multiplier, clamped to its legal range. Returns the
    /// value actually applied.
    pub fn set_price_slider(&mut self, value: f64) -> f64 {
        if value.is_finite() {
            self.state.price_slider = value.clamp(PRICE_SLIDER_MIN, PRICE_SLIDER_MAX);
            self.commit();
        }
        self.state.price_slider
    }

    pub fn set_region(&mut self, region: Region) {
        self.state.region = region;
        self.commit();
    }

    pub fn set_marketing(&mut self, marketing: MarketingLevel) {
        self.state.marketing = marketing;
        self.commit();
    }

    pub fn set_staffing(&mut self, staffing: StaffingLevel) {
        self.state.staffing = staffing;
        self.commit();
    }

    /// Wipe the save and start over
    pub fn reset_game(&mut self) {
        if let Err(e) = self.store.clear() {
            tracing::warn!("Failed to clear saved game: {}", e);
        }
        self.state = WorldState::new(self.config.starting_balance);
        self.last_result = None;
        self.history.clear();
        tracing::info!("Game reset");
        self.publish();
    }

    // === INTERNALS ===

    fn ensure_funds(&self, cost: Money) -> CommandResult {
        if self.state.balance >= cost {
            Ok(())
        } else {
            self.reject(CommandRejected::InsufficientFunds {
                needed: cost,
                available: self.state.balance,
            })
        }
    }

    fn reject<T>(&self, reason: CommandRejected) -> CommandResult<T> {
        tracing::debug!(%reason, "Command rejected");
        Err(reason)
    }

    /// Save and publish after a completed transition
    fn commit(&mut self) {
        if let Err(e) = self.store.save(&self.state) {
            tracing::warn!("Failed to save game: {}", e);
        }
        self.publish();
    }

    fn publish(&self) {
        self.view_tx.send_replace(self.view());
    }
}
