//! The single active timer session. At most one timed screen runs at a time;
//! starting a new session replaces the current one, clearing it stops all
//! timer activity for good.

use serde::Serialize;

use crate::timer::{PhaseSpec, PhaseTimer, TimerMode};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SessionKind {
    Breathing { pattern: Option<String> },
    Exercise { routine: String, exercise: String },
    Stretch,
}

#[derive(Debug)]
pub struct ActiveSession {
    pub kind: SessionKind,
    pub timer: PhaseTimer,
}

impl ActiveSession {
    pub fn new(kind: SessionKind, timer: PhaseTimer) -> Self {
        Self { kind, timer }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            kind: self.kind.clone(),
            mode: self.timer.mode(),
            phase: self.timer.phase_name().to_string(),
            phase_index: self.timer.phase_index(),
            seconds_remaining: self.timer.seconds_remaining(),
            cycle_count: self.timer.cycle_count(),
            running: self.timer.is_running(),
            finished: self.timer.is_finished(),
            phases: self.timer.sequence().phases().to_vec(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SessionSnapshot {
    #[serde(flatten)]
    pub kind: SessionKind,
    pub mode: TimerMode,
    pub phase: String,
    pub phase_index: usize,
    pub seconds_remaining: u32,
    pub cycle_count: u32,
    pub running: bool,
    pub finished: bool,
    pub phases: Vec<PhaseSpec>,
}

#[derive(Debug, Serialize)]
pub struct SessionStateResponse {
    pub active: bool,
    pub session: Option<SessionSnapshot>,
}
