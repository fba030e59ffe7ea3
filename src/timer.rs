//! Phase timer: a fixed-tick countdown over an ordered sequence of named phases.
//!
//! One timer drives every timed screen (breathing patterns, routine exercise
//! countdowns, the guided stretch run). Callers supply a validated
//! [`PhaseSequence`] and a [`TimerMode`]; the timer advances one simulated
//! second per [`PhaseTimer::tick`], skipping zero-duration phases, and either
//! loops or stops after a single pass.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SequenceError {
    #[error("phase sequence must contain at least one phase")]
    Empty,
    #[error("phase sequence must contain at least one phase with a nonzero duration")]
    AllZero,
}

/// One named stage of a countdown. A duration of zero is legal input and the
/// phase is skipped at runtime; phase names are expected to be unique within a
/// sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseSpec {
    pub name: String,
    pub seconds: u32,
}

impl PhaseSpec {
    pub fn new(name: impl Into<String>, seconds: u32) -> Self {
        Self {
            name: name.into(),
            seconds,
        }
    }
}

/// An ordered, non-empty list of phases with at least one nonzero duration.
/// Construction is the only validation seam: an empty or all-zero sequence is
/// rejected here so `tick` can never spin without making progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseSequence {
    phases: Vec<PhaseSpec>,
}

impl PhaseSequence {
    pub fn new(phases: Vec<PhaseSpec>) -> Result<Self, SequenceError> {
        if phases.is_empty() {
            return Err(SequenceError::Empty);
        }
        if phases.iter().all(|phase| phase.seconds == 0) {
            return Err(SequenceError::AllZero);
        }
        Ok(Self { phases })
    }

    pub fn phases(&self) -> &[PhaseSpec] {
        &self.phases
    }

    pub fn len(&self) -> usize {
        self.phases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    pub fn total_seconds(&self) -> u32 {
        self.phases.iter().map(|phase| phase.seconds).sum()
    }

    fn first_runnable(&self) -> usize {
        self.phases
            .iter()
            .position(|phase| phase.seconds > 0)
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimerMode {
    Loop,
    SinglePass,
}

/// The countdown state machine. `seconds_remaining` stays within
/// `1..=duration(current phase)` while the timer has work left; it only
/// reaches zero when a single-pass run completes.
#[derive(Debug, Clone)]
pub struct PhaseTimer {
    sequence: PhaseSequence,
    mode: TimerMode,
    phase_index: usize,
    seconds_remaining: u32,
    cycle_count: u32,
    running: bool,
}

impl PhaseTimer {
    /// Starts at the first nonzero-duration phase with its full duration,
    /// zero completed cycles, running.
    pub fn start(sequence: PhaseSequence, mode: TimerMode) -> Self {
        let phase_index = sequence.first_runnable();
        let seconds_remaining = sequence.phases()[phase_index].seconds;
        Self {
            sequence,
            mode,
            phase_index,
            seconds_remaining,
            cycle_count: 0,
            running: true,
        }
    }

    /// Advances one simulated second. A no-op unless running.
    pub fn tick(&mut self) {
        if !self.running {
            return;
        }
        if self.seconds_remaining > 1 {
            self.seconds_remaining -= 1;
        } else {
            self.advance();
        }
    }

    fn advance(&mut self) {
        let len = self.sequence.len();
        let mut index = self.phase_index;
        // Terminates because the sequence holds at least one nonzero phase.
        loop {
            index += 1;
            if index == len {
                self.cycle_count += 1;
                if self.mode == TimerMode::SinglePass {
                    self.running = false;
                    self.seconds_remaining = 0;
                    return;
                }
                index = 0;
            }
            let seconds = self.sequence.phases()[index].seconds;
            if seconds > 0 {
                self.phase_index = index;
                self.seconds_remaining = seconds;
                return;
            }
        }
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Resumes a paused timer. A finished single-pass run has nothing left to
    /// do, so resuming it is a no-op.
    pub fn resume(&mut self) {
        if self.seconds_remaining > 0 {
            self.running = true;
        }
    }

    /// Returns to the starting position: first nonzero phase, full duration,
    /// zero cycles, not running. Idempotent.
    pub fn reset(&mut self) {
        self.phase_index = self.sequence.first_runnable();
        self.seconds_remaining = self.sequence.phases()[self.phase_index].seconds;
        self.cycle_count = 0;
        self.running = false;
    }

    /// Stops any active ticking, swaps the sequence, and resets.
    pub fn change_sequence(&mut self, sequence: PhaseSequence) {
        self.running = false;
        self.sequence = sequence;
        self.reset();
    }

    pub fn phase_index(&self) -> usize {
        self.phase_index
    }

    pub fn phase_name(&self) -> &str {
        &self.sequence.phases()[self.phase_index].name
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    pub fn cycle_count(&self) -> u32 {
        self.cycle_count
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_finished(&self) -> bool {
        !self.running && self.seconds_remaining == 0
    }

    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    pub fn sequence(&self) -> &PhaseSequence {
        &self.sequence
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence(specs: &[(&str, u32)]) -> PhaseSequence {
        PhaseSequence::new(
            specs
                .iter()
                .map(|(name, seconds)| PhaseSpec::new(*name, *seconds))
                .collect(),
        )
        .expect("valid sequence")
    }

    #[test]
    fn rejects_empty_sequence() {
        assert_eq!(PhaseSequence::new(Vec::new()), Err(SequenceError::Empty));
    }

    #[test]
    fn rejects_all_zero_sequence() {
        let phases = vec![PhaseSpec::new("inhale", 0), PhaseSpec::new("exhale", 0)];
        assert_eq!(PhaseSequence::new(phases), Err(SequenceError::AllZero));
    }

    #[test]
    fn start_skips_leading_zero_phases() {
        let timer = PhaseTimer::start(
            sequence(&[("warmup", 0), ("inhale", 4)]),
            TimerMode::Loop,
        );
        assert_eq!(timer.phase_name(), "inhale");
        assert_eq!(timer.seconds_remaining(), 4);
        assert_eq!(timer.cycle_count(), 0);
        assert!(timer.is_running());
    }

    #[test]
    fn each_phase_consumes_exactly_its_duration_in_ticks() {
        let mut timer = PhaseTimer::start(
            sequence(&[("inhale", 4), ("hold", 4), ("exhale", 4), ("hold-after", 4)]),
            TimerMode::Loop,
        );
        for _ in 0..4 {
            assert_eq!(timer.phase_name(), "inhale");
            timer.tick();
        }
        assert_eq!(timer.phase_name(), "hold");
        assert_eq!(timer.seconds_remaining(), 4);
    }

    #[test]
    fn box_pattern_loops_after_sixteen_ticks() {
        let mut timer = PhaseTimer::start(
            sequence(&[("inhale", 4), ("hold", 4), ("exhale", 4), ("hold-after", 4)]),
            TimerMode::Loop,
        );
        for _ in 0..16 {
            timer.tick();
        }
        assert_eq!(timer.cycle_count(), 1);
        assert_eq!(timer.phase_index(), 0);
        assert_eq!(timer.seconds_remaining(), 4);
        assert!(timer.is_running());
    }

    #[test]
    fn loop_mode_counts_one_cycle_per_total_duration() {
        let seq = sequence(&[("inhale", 4), ("hold", 7), ("exhale", 8)]);
        let total = seq.total_seconds();
        let mut timer = PhaseTimer::start(seq, TimerMode::Loop);
        for _ in 0..(total * 3) {
            timer.tick();
        }
        assert_eq!(timer.cycle_count(), 3);
        assert_eq!(timer.phase_index(), 0);
        assert_eq!(timer.seconds_remaining(), 4);
    }

    #[test]
    fn single_pass_stops_after_one_traversal() {
        let mut timer = PhaseTimer::start(
            sequence(&[("inhale", 4), ("hold", 7), ("exhale", 8)]),
            TimerMode::SinglePass,
        );
        for _ in 0..19 {
            timer.tick();
        }
        assert!(!timer.is_running());
        assert!(timer.is_finished());
        assert_eq!(timer.cycle_count(), 1);

        let index = timer.phase_index();
        timer.tick();
        timer.tick();
        assert_eq!(timer.phase_index(), index);
        assert_eq!(timer.seconds_remaining(), 0);
        assert_eq!(timer.cycle_count(), 1);
    }

    #[test]
    fn zero_duration_phases_are_never_reported() {
        let mut timer = PhaseTimer::start(
            sequence(&[("a", 4), ("b", 0), ("c", 4)]),
            TimerMode::Loop,
        );
        for _ in 0..24 {
            assert_ne!(timer.phase_name(), "b");
            timer.tick();
        }
        assert_eq!(timer.cycle_count(), 3);
    }

    #[test]
    fn trailing_zero_phase_wraps_the_cycle() {
        let mut timer = PhaseTimer::start(
            sequence(&[("inhale", 2), ("hold", 0)]),
            TimerMode::Loop,
        );
        timer.tick();
        assert_eq!(timer.phase_name(), "inhale");
        assert_eq!(timer.seconds_remaining(), 1);
        timer.tick();
        assert_eq!(timer.phase_name(), "inhale");
        assert_eq!(timer.seconds_remaining(), 2);
        assert_eq!(timer.cycle_count(), 1);
    }

    #[test]
    fn pause_stops_ticks_and_resume_continues() {
        let mut timer = PhaseTimer::start(sequence(&[("inhale", 4)]), TimerMode::Loop);
        timer.tick();
        timer.pause();
        assert!(!timer.is_running());
        timer.tick();
        timer.tick();
        assert_eq!(timer.seconds_remaining(), 3);
        timer.resume();
        assert!(timer.is_running());
        timer.tick();
        assert_eq!(timer.seconds_remaining(), 2);
    }

    #[test]
    fn resume_after_finish_is_a_no_op() {
        let mut timer = PhaseTimer::start(sequence(&[("plank", 2)]), TimerMode::SinglePass);
        timer.tick();
        timer.tick();
        assert!(timer.is_finished());
        timer.resume();
        assert!(!timer.is_running());
        timer.tick();
        assert_eq!(timer.cycle_count(), 1);
    }

    #[test]
    fn reset_is_idempotent_and_returns_to_first_phase() {
        let mut timer = PhaseTimer::start(
            sequence(&[("inhale", 4), ("exhale", 6)]),
            TimerMode::Loop,
        );
        for _ in 0..7 {
            timer.tick();
        }
        assert_eq!(timer.phase_name(), "exhale");
        timer.reset();
        timer.reset();
        assert_eq!(timer.phase_index(), 0);
        assert_eq!(timer.seconds_remaining(), 4);
        assert_eq!(timer.cycle_count(), 0);
        assert!(!timer.is_running());
    }

    #[test]
    fn change_sequence_stops_and_rebinds() {
        let mut timer = PhaseTimer::start(
            sequence(&[("inhale", 4), ("exhale", 4)]),
            TimerMode::Loop,
        );
        for _ in 0..5 {
            timer.tick();
        }
        timer.change_sequence(sequence(&[("inhale", 5), ("hold", 2), ("exhale", 6)]));
        assert!(!timer.is_running());
        assert_eq!(timer.phase_name(), "inhale");
        assert_eq!(timer.seconds_remaining(), 5);
        assert_eq!(timer.cycle_count(), 0);
    }

    #[test]
    fn visits_every_nonzero_phase_in_order() {
        let mut timer = PhaseTimer::start(
            sequence(&[("a", 1), ("b", 0), ("c", 2), ("d", 1)]),
            TimerMode::Loop,
        );
        let mut visited = vec![timer.phase_name().to_string()];
        for _ in 0..4 {
            timer.tick();
            let name = timer.phase_name().to_string();
            if visited.last() != Some(&name) {
                visited.push(name);
            }
        }
        assert_eq!(visited, ["a", "c", "d", "a"]);
    }
}
