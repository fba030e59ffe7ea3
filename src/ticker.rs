//! The single tick source. One background task drives whichever timer session
//! is mounted; there are no per-screen callbacks to leak, so clearing the
//! session is enough to stop all timer activity.

use crate::session::SessionKind;
use crate::state::AppState;
use crate::storage::persist_data;
use tracing::{debug, error, info};

pub async fn run_ticker(state: AppState) {
    info!("ticker running every {:?}", state.tick_interval);
    let mut interval = tokio::time::interval(state.tick_interval);
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
    loop {
        interval.tick().await;
        tick_once(&state).await;
    }
}

/// Advances the active session by one simulated second. Lock order is session
/// first, then data; handlers take the two locks one at a time, never nested.
pub async fn tick_once(state: &AppState) {
    let mut guard = state.session.lock().await;
    let Some(session) = guard.as_mut() else {
        return;
    };

    let was_running = session.timer.is_running();
    session.timer.tick();
    if !(was_running && session.timer.is_finished()) {
        return;
    }

    match &session.kind {
        SessionKind::Exercise { routine, exercise } => {
            let mut data = state.data.lock().await;
            match data.find_routine_exercise_mut(routine, exercise) {
                Some(entry) => {
                    entry.completed = true;
                    info!("exercise {exercise} of routine {routine} completed");
                }
                None => debug!("finished session for unknown exercise {routine}/{exercise}"),
            }
            if let Err(err) = persist_data(&state.data_path, &data).await {
                error!("failed to persist completed exercise: {}", err.message);
            }
        }
        SessionKind::Stretch => info!("guided stretch sequence finished"),
        SessionKind::Breathing { .. } => debug!("breathing session finished"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AppData;
    use crate::session::{ActiveSession, SessionKind};
    use crate::timer::{PhaseSequence, PhaseSpec, PhaseTimer, TimerMode};
    use std::time::Duration;

    fn test_state() -> AppState {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!("health_tracker_ticker_{}_{nanos}.json", std::process::id()));
        AppState::new(path, AppData::default(), Duration::from_millis(10))
    }

    #[tokio::test]
    async fn tick_without_a_session_is_a_no_op() {
        let state = test_state();
        tick_once(&state).await;
        assert!(state.session.lock().await.is_none());
    }

    #[tokio::test]
    async fn finishing_an_exercise_marks_it_completed() {
        let state = test_state();
        let sequence =
            PhaseSequence::new(vec![PhaseSpec::new("Plank", 2)]).expect("valid sequence");
        {
            let mut guard = state.session.lock().await;
            *guard = Some(ActiveSession::new(
                SessionKind::Exercise {
                    routine: "core".to_string(),
                    exercise: "plank".to_string(),
                },
                PhaseTimer::start(sequence, TimerMode::SinglePass),
            ));
        }

        tick_once(&state).await;
        {
            let data = state.data.lock().await;
            let routine = data.find_routine("core").expect("core routine");
            assert!(!routine.exercises.iter().any(|exercise| exercise.completed));
        }

        tick_once(&state).await;
        let data = state.data.lock().await;
        let routine = data.find_routine("core").expect("core routine");
        let plank = routine
            .exercises
            .iter()
            .find(|exercise| exercise.id == "plank")
            .expect("plank exercise");
        assert!(plank.completed);
        drop(data);

        // Finished single-pass sessions stay mounted but inert.
        let guard = state.session.lock().await;
        let session = guard.as_ref().expect("session still mounted");
        assert!(session.timer.is_finished());
        drop(guard);
        let path = state.data_path.clone();
        let _ = std::fs::remove_file(path);
    }

    #[tokio::test]
    async fn completion_fires_once_per_run() {
        let state = test_state();
        let sequence =
            PhaseSequence::new(vec![PhaseSpec::new("Squats", 1)]).expect("valid sequence");
        {
            let mut guard = state.session.lock().await;
            *guard = Some(ActiveSession::new(
                SessionKind::Exercise {
                    routine: "lower-body".to_string(),
                    exercise: "squats".to_string(),
                },
                PhaseTimer::start(sequence, TimerMode::SinglePass),
            ));
        }

        tick_once(&state).await;
        {
            let mut data = state.data.lock().await;
            let entry = data
                .find_routine_exercise_mut("lower-body", "squats")
                .expect("squats exercise");
            assert!(entry.completed);
            // Un-complete by hand; further ticks on the finished session must
            // not flip it back.
            entry.completed = false;
        }

        tick_once(&state).await;
        tick_once(&state).await;
        let mut data = state.data.lock().await;
        let entry = data
            .find_routine_exercise_mut("lower-body", "squats")
            .expect("squats exercise");
        assert!(!entry.completed);
        drop(data);
        let _ = std::fs::remove_file(state.data_path.clone());
    }
}
