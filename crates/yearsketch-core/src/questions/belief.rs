//! q4 -- belief transformation.
//!
//! Two sequential free-text captures: the belief that was torn down, then
//! the one that replaced it. No matching logic; the change summary is plain
//! concatenation with an arrow.

use crate::answers::BeliefAnswer;
use crate::error::SessionError;

pub const CHANGE_ARROW: &str = " → ";
pub const EMOJI: &str = "🦋";

/// Two-step flow: old belief first, new belief second.
#[derive(Debug, Clone, Default)]
pub struct BeliefFlow {
    old_belief: Option<String>,
}

impl BeliefFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submit_old(&mut self, text: &str) -> Result<(), SessionError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(SessionError::EmptyInput { field: "old belief" });
        }
        self.old_belief = Some(trimmed.to_string());
        Ok(())
    }

    pub fn old_belief(&self) -> Option<&str> {
        self.old_belief.as_deref()
    }

    pub fn finish(self, new_text: &str) -> Result<BeliefAnswer, SessionError> {
        let old_belief = self.old_belief.ok_or(SessionError::StepOutOfOrder {
            step: "new belief",
        })?;
        let new_belief = new_text.trim();
        if new_belief.is_empty() {
            return Err(SessionError::EmptyInput { field: "new belief" });
        }
        Ok(BeliefAnswer {
            change: format!("{old_belief}{CHANGE_ARROW}{new_belief}"),
            emoji: EMOJI.to_string(),
            old_belief,
            new_belief: new_belief.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn change_summary_joins_with_arrow() {
        let mut flow = BeliefFlow::new();
        flow.submit_old("I'm not creative").unwrap();
        let answer = flow.finish("I can learn anything").unwrap();

        assert_eq!(answer.change, "I'm not creative → I can learn anything");
        assert_eq!(answer.old_belief, "I'm not creative");
        assert_eq!(answer.new_belief, "I can learn anything");
        assert_eq!(answer.emoji, EMOJI);
    }

    #[test]
    fn inputs_are_trimmed() {
        let mut flow = BeliefFlow::new();
        flow.submit_old("  too late to start  ").unwrap();
        let answer = flow.finish("  never too late  ").unwrap();
        assert_eq!(answer.change, "too late to start → never too late");
    }

    #[test]
    fn empty_steps_are_rejected() {
        let mut flow = BeliefFlow::new();
        assert!(flow.submit_old(" ").is_err());

        flow.submit_old("something").unwrap();
        assert!(matches!(
            flow.finish("\t"),
            Err(SessionError::EmptyInput { field: "new belief" })
        ));
    }

    #[test]
    fn new_belief_requires_old_first() {
        let result = BeliefFlow::new().finish("fresh start");
        assert!(matches!(result, Err(SessionError::StepOutOfOrder { .. })));
    }
}
