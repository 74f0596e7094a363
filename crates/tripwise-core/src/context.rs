//! Execution Context: per-run state shared by the stages of a pipeline
use std::time::Duration;

/// How stage delays are applied.
///
/// Delays are cosmetic and never change computed results.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pacing {
    /// Multiply each stage's own delay
    Scaled(f64),
    /// Use the same delay for every stage
    Fixed(Duration),
}

impl Pacing {
    /// No delays at all (tests, headless callers)
    pub fn instant() -> Self {
        Pacing::Fixed(Duration::ZERO)
    }

    pub fn apply(&self, stage_delay: Duration) -> Duration {
        match *self {
            Pacing::Scaled(factor) if factor.is_finite() && factor > 0.0 => {
                Duration::try_from_secs_f64(stage_delay.as_secs_f64() * factor)
                    .unwrap_or(Duration::MAX)
            }
            Pacing::Scaled(_) => Duration::ZERO,
            Pacing::Fixed(delay) => delay,
        }
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Pacing::Scaled(1.0)
    }
}

#[derive(Debug, Clone)]
pub struct ExecutionContext {
    pub trace_id: String,
    pub pacing: Pacing,
}

impl ExecutionContext {
    pub fn new() -> Self {
        Self {
            trace_id: uuid::Uuid::new_v4().to_string(),
            pacing: Pacing::default(),
        }
    }

    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }
}

impl Default for ExecutionContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pacing_apply() {
        let delay = Duration::from_millis(400);
        assert_eq!(Pacing::default().apply(delay), delay);
        assert_eq!(Pacing::Scaled(0.5).apply(delay), Duration::from_millis(200));
        assert_eq!(Pacing::Scaled(-1.0).apply(delay), Duration::ZERO);
        assert_eq!(Pacing::instant().apply(delay), Duration::ZERO);
        assert_eq!(
            Pacing::Fixed(Duration::from_millis(5)).apply(delay),
            Duration::from_millis(5)
        );
    }

    #[test]
    fn test_huge_scale_saturates() {
        let delay = Duration::from_secs(3600);
        assert_eq!(Pacing::Scaled(1e300).apply(delay), Duration::MAX);
        assert_eq!(Pacing::Scaled(1e300).apply(Duration::ZERO), Duration::ZERO);
    }

    #[test]
    fn test_context_ids_are_unique() {
        let a = ExecutionContext::new();
        let b = ExecutionContext::new();
        assert_ne!(a.trace_id, b.trace_id);
    }
}
