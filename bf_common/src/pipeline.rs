use log::debug;

use crate::context::BuildContext;
use crate::step::{BuildStep, StepError};

///
/// Sequences registered steps around an ordered list of phase names.
/// Execution is strictly sequential, one step at a time.
///
pub struct Pipeline {
    phases: Vec<String>,
    // steps[i] run just before phases[i], in registration order
    steps: Vec<Vec<Box<dyn BuildStep>>>,
}

impl Pipeline {
    pub fn new(phases: &[&str]) -> Self {
        Pipeline {
            phases: phases.iter().map(|p| p.to_string()).collect(),
            steps: phases.iter().map(|_| Vec::new()).collect(),
        }
    }

    /// Schedules [step] before the earliest phase its `before()` list names.
    pub fn add_step(&mut self, step: Box<dyn BuildStep>) -> Result<(), StepError> {
        let mut slot: Option<usize> = None;
        for name in step.before() {
            let index = self
                .phases
                .iter()
                .position(|p| p == name)
                .ok_or_else(|| StepError::UnknownPhase(name.to_string()))?;
            slot = Some(slot.map_or(index, |s| s.min(index)));
        }
        let index = slot.ok_or_else(|| StepError::Unordered(step.name().to_string()))?;
        self.steps[index].push(step);
        Ok(())
    }

    /// Runs every step in phase order, merging each step's additions into
    /// the context configuration. The first failure aborts the run; additions
    /// from steps that already completed stay merged.
    pub fn run(&self, ctx: &mut BuildContext) -> Result<(), StepError> {
        for (index, phase) in self.phases.iter().enumerate() {
            for step in &self.steps[index] {
                debug!("Running step {} (before {})", step.name(), phase);
                let output = step.run(ctx)?;
                if !output.cxx.is_empty() {
                    debug!("Step {} added {:?}", step.name(), output.cxx);
                }
                ctx.config_mut().cxx.apply(output.cxx);
            }
        }
        Ok(())
    }
}
