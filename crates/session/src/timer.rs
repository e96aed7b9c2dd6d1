//! The 1 Hz recording tick task and the async session controller.
//!
//! The tick loop follows the same shape as any long-running job here:
//! `tokio::time::interval` driven inside a `tokio::select!` against a
//! [`CancellationToken`]. The token travels inside a [`RecordingTimer`]
//! handle, so the task is released on every exit path: an explicit stop, a
//! replacement timer, or the handle simply being dropped.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use viewfinder_core::error::CoreError;
use viewfinder_core::settings::{CameraMode, CameraSettings, SettingUpdate};

use crate::session::{CameraSession, SessionSnapshot};

/// The session behind an async lock, shared between the controller and the
/// tick task. Reads always observe the latest committed snapshot.
pub type SharedSession = Arc<RwLock<CameraSession>>;

/// Seconds between recording ticks.
const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Handle to a running tick task.
///
/// Dropping the handle cancels the task, so a timer can never outlive its
/// owner. [`stop`](Self::stop) consumes the handle, which makes it
/// impossible to cancel the same timer twice.
#[derive(Debug)]
pub struct RecordingTimer {
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

impl RecordingTimer {
    /// Spawn a tick task advancing `session` once per second.
    ///
    /// The first tick fires one full period after the spawn, so a freshly
    /// started recording reads `00:00:00` until a second has passed.
    pub fn spawn(session: SharedSession) -> Self {
        let cancel = CancellationToken::new();
        let token = cancel.clone();

        let task = tokio::spawn(async move {
            let start = tokio::time::Instant::now() + TICK_PERIOD;
            let mut interval = tokio::time::interval_at(start, TICK_PERIOD);

            loop {
                // Biased so a pending cancellation always wins over a tick
                // that became due in the same instant.
                tokio::select! {
                    biased;
                    _ = token.cancelled() => {
                        tracing::debug!("Recording timer stopped");
                        break;
                    }
                    _ = interval.tick() => {
                        session.write().await.tick();
                    }
                }
            }
        });

        Self { cancel, task }
    }

    /// Cancel the tick task.
    pub fn stop(self) {
        self.cancel.cancel();
    }

    /// Whether the underlying task has already exited.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for RecordingTimer {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// Async front door to the session: serializes every mutation and keeps at
/// most one [`RecordingTimer`] alive.
///
/// The controller owns the only write path to the shared session, so all
/// state changes happen on one logical event stream: user intents here,
/// clock ticks in the timer task.
pub struct SessionController {
    shared: SharedSession,
    timer: Option<RecordingTimer>,
}

impl SessionController {
    /// Start a controller around a fresh session in Standby.
    pub fn new(settings: CameraSettings) -> Self {
        Self {
            shared: Arc::new(RwLock::new(CameraSession::new(settings))),
            timer: None,
        }
    }

    /// Current immutable snapshot for rendering.
    pub async fn snapshot(&self) -> SessionSnapshot {
        self.shared.read().await.snapshot()
    }

    /// Apply a single-field settings update.
    pub async fn apply_update(
        &self,
        update: SettingUpdate,
    ) -> Result<CameraSettings, CoreError> {
        self.shared.write().await.apply_update(update)
    }

    /// Flip between Standby and Recording, starting or stopping the tick
    /// task accordingly. Returns the snapshot after the transition.
    pub async fn toggle_recording(&mut self) -> SessionSnapshot {
        let recording = self.shared.write().await.toggle_recording();

        // Whatever happens next, any previous timer is cancelled first so
        // that at most one tick task exists.
        if let Some(previous) = self.timer.take() {
            previous.stop();
        }

        if recording {
            tracing::info!("Recording started");
            self.timer = Some(RecordingTimer::spawn(Arc::clone(&self.shared)));
        } else {
            tracing::info!("Recording stopped");
        }

        self.shared.read().await.snapshot()
    }

    /// Flip between manual and auto mode; returns the new mode.
    pub async fn toggle_mode(&self) -> CameraMode {
        self.shared.write().await.toggle_mode()
    }

    /// Whether a tick task is currently attached.
    pub fn timer_running(&self) -> bool {
        self.timer.as_ref().is_some_and(|t| !t.is_finished())
    }
}

/* --------------------------------------------------------------------------
   Tests (paused tokio clock)
   -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    /// Let the paused clock move forward `secs` one tick period at a time,
    /// yielding in between so the timer task gets to run.
    async fn advance_secs(secs: u64) {
        tokio::task::yield_now().await;
        for _ in 0..secs {
            tokio::time::advance(TICK_PERIOD).await;
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn timer_advances_elapsed_once_per_second() {
        let mut controller = SessionController::new(CameraSettings::default());

        let snap = controller.toggle_recording().await;
        assert!(snap.is_recording());
        assert_eq!(snap.elapsed_secs, 0);

        advance_secs(3).await;
        assert_eq!(controller.snapshot().await.elapsed_secs, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn stopping_resets_elapsed_and_cancels_timer() {
        let mut controller = SessionController::new(CameraSettings::default());

        controller.toggle_recording().await;
        advance_secs(2).await;
        assert_eq!(controller.snapshot().await.elapsed_secs, 2);

        let snap = controller.toggle_recording().await;
        assert!(!snap.is_recording());
        assert_eq!(snap.elapsed_secs, 0);
        assert!(!controller.timer_running());

        // With no timer attached, time passing changes nothing.
        advance_secs(5).await;
        assert_eq!(controller.snapshot().await.elapsed_secs, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn restart_counts_from_zero_with_a_fresh_timer() {
        let mut controller = SessionController::new(CameraSettings::default());

        controller.toggle_recording().await;
        advance_secs(4).await;
        controller.toggle_recording().await;
        controller.toggle_recording().await;

        assert!(controller.timer_running());
        assert_eq!(controller.snapshot().await.elapsed_secs, 0);

        advance_secs(1).await;
        assert_eq!(controller.snapshot().await.elapsed_secs, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_timer_handle_cancels_the_task() {
        let shared: SharedSession =
            Arc::new(RwLock::new(CameraSession::new(CameraSettings::default())));
        shared.write().await.toggle_recording();

        let timer = RecordingTimer::spawn(Arc::clone(&shared));
        advance_secs(1).await;
        assert_eq!(shared.read().await.snapshot().elapsed_secs, 1);

        drop(timer);
        advance_secs(3).await;
        // The task exits after cancellation; elapsed stays where it was.
        assert_eq!(shared.read().await.snapshot().elapsed_secs, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn settings_updates_flow_through_the_controller() {
        let controller = SessionController::new(CameraSettings::default());
        let snap = controller
            .apply_update(SettingUpdate::Aperture(5.6))
            .await
            .unwrap();
        assert_eq!(snap.aperture, 5.6);
        assert!(controller
            .apply_update(SettingUpdate::Aperture(3.3))
            .await
            .is_err());
    }
}
