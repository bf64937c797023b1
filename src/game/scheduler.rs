//! Idle mode scheduler
//!
//! Runs the game on its own: a tokio task ends one turn per period. Each
//! tick takes the controller lock for the whole transition, so ticks never
//! overlap with each other or with player commands. Cancelling is
//! synchronous: once `set_idle_mode(false)` returns, no further tick applies.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use crate::game::controller::GameController;

/// Controller shared between the player and the idle timer
pub type SharedController = Arc<Mutex<GameController>>;

pub fn shared(controller: GameController) -> SharedController {
    Arc::new(Mutex::new(controller))
}

/// Lock the controller, recovering it if a previous holder panicked
pub fn lock_controller(controller: &Mutex<GameController>) -> MutexGuard<'_, GameController> {
    controller.lock().unwrap_or_else(PoisonError::into_inner)
}

pub struct IdleScheduler {
    controller: SharedController,
    runtime: Handle,
    task: Option<JoinHandle<()>>,
}

impl IdleScheduler {
    pub fn new(controller: SharedController, runtime: Handle) -> Self {
        Self {
            controller,
            runtime,
            task: None,
        }
    }

    pub fn controller(&self) -> &SharedController {
        &self.controller
    }

    /// True while an idle timer is running
    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }

    /// Turn idle mode on or off. Enabling twice keeps the single running
    /// timer. Returns true if the mode changed.
    pub fn set_idle_mode(&mut self, enabled: bool) -> bool {
        if enabled {
            self.start()
        } else {
            self.stop()
        }
    }

    fn start(&mut self) -> bool {
        if self.task.is_some() {
            return false;
        }

        let (epoch, period) = {
            let mut ctrl = lock_controller(&self.controller);
            (ctrl.begin_idle(), ctrl.config().idle_period())
        };

        let controller = Arc::clone(&self.controller);
        self.task = Some(self.runtime.spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                let mut ctrl = lock_controller(&controller);
                match ctrl.idle_tick(epoch) {
                    Some(result) => tracing::debug!(
                        turn = ctrl.state().current_turn(),
                        profit = result.profit(),
                        "Idle tick"
                    ),
                    None => break,
                }
            }
        }));

        tracing::info!(period_ms = period.as_millis() as u64, "Idle mode on");
        true
    }

    fn stop(&mut self) -> bool {
        let Some(task) = self.task.take() else {
            return false;
        };

        // Clearing the epoch under the lock is what guarantees no later tick
        // applies; the abort just reclaims the task.
        lock_controller(&self.controller).end_idle();
        task.abort();

        tracing::info!("Idle mode off");
        true
    }
}

impl Drop for IdleScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}
