//! Step observer trait for monitoring cloth simulation progress.

use crate::contact::ContactRegime;

/// Trait for observing simulation steps.
///
/// Implement this trait to monitor solver progress (e.g., for debugging,
/// visualization, or performance profiling). All methods have default
/// no-op implementations.
pub trait StepObserver {
    /// Called after internal forces have been accumulated.
    fn on_forces(&mut self) {}

    /// Called after unconstrained positions have been predicted.
    fn on_predict(&mut self) {}

    /// Called after each relaxation pass over the constraint list.
    fn on_constraint_iteration(&mut self, _iteration: usize) {}

    /// Called for each particle that came within reach of the collider.
    fn on_contact(&mut self, _index: usize, _regime: ContactRegime) {}

    /// Called when a simulation step is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}

/// Counts solver events across one or more steps.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepStats {
    pub steps: usize,
    pub constraint_iterations: usize,
    pub separating: usize,
    pub sticking: usize,
    pub slipping: usize,
    pub pressing: usize,
}

impl StepStats {
    /// Total contacts seen, whatever their regime.
    pub fn contacts(&self) -> usize {
        self.separating + self.sticking + self.slipping + self.pressing
    }

    pub fn reset(&mut self) {
        *self = StepStats::default();
    }
}

impl StepObserver for StepStats {
    fn on_constraint_iteration(&mut self, _iteration: usize) {
        self.constraint_iterations += 1;
    }

    fn on_contact(&mut self, _index: usize, regime: ContactRegime) {
        match regime {
            ContactRegime::Separating => self.separating += 1,
            ContactRegime::Sticking => self.sticking += 1,
            ContactRegime::Slipping => self.slipping += 1,
            ContactRegime::Pressing => self.pressing += 1,
        }
    }

    fn on_step_complete(&mut self) {
        self.steps += 1;
    }
}

/// Forwards solver events to the `log` facade.
#[cfg(feature = "log")]
#[derive(Debug, Default)]
pub struct LogObserver {
    step: u64,
    contacts: usize,
}

#[cfg(feature = "log")]
impl StepObserver for LogObserver {
    fn on_constraint_iteration(&mut self, iteration: usize) {
        log::trace!("step {}: relaxation pass {}", self.step, iteration);
    }

    fn on_contact(&mut self, index: usize, regime: ContactRegime) {
        self.contacts += 1;
        log::trace!("step {}: particle {} in contact ({:?})", self.step, index, regime);
    }

    fn on_step_complete(&mut self) {
        log::debug!("step {} complete, {} contacts", self.step, self.contacts);
        self.step += 1;
        self.contacts = 0;
    }
}
