//! Ordered strategy lists for calculations that must always produce a value.

use cardcycle_domain::{Precision, Resolved};

use crate::CoreError;

type Strategy<'a, T> = Box<dyn FnOnce() -> Result<T, CoreError> + 'a>;

struct Step<'a, T> {
    precision: Precision,
    name: &'static str,
    run: Strategy<'a, T>,
}

/// Evaluates strategies in registration order and returns the first success.
///
/// A failed exact strategy is logged as a warning, any later failure as an
/// error. [`FallbackChain::resolve`] takes an infallible default, so a chain
/// always yields a value tagged with the tier that produced it.
pub struct FallbackChain<'a, T> {
    operation: &'static str,
    steps: Vec<Step<'a, T>>,
}

impl<'a, T> FallbackChain<'a, T> {
    pub fn new(operation: &'static str) -> Self {
        Self {
            operation,
            steps: Vec::new(),
        }
    }

    pub fn then(
        mut self,
        precision: Precision,
        name: &'static str,
        strategy: impl FnOnce() -> Result<T, CoreError> + 'a,
    ) -> Self {
        self.steps.push(Step {
            precision,
            name,
            run: Box::new(strategy),
        });
        self
    }

    pub fn resolve(self, default: impl FnOnce() -> T) -> Resolved<T> {
        let operation = self.operation;
        for step in self.steps {
            match (step.run)() {
                Ok(value) => return Resolved::new(value, step.precision),
                Err(err) if step.precision.is_exact() => {
                    tracing::warn!(
                        operation,
                        strategy = step.name,
                        error = %err,
                        "calculation failed, degrading to next strategy"
                    );
                }
                Err(err) => {
                    tracing::error!(
                        operation,
                        strategy = step.name,
                        error = %err,
                        "fallback calculation failed"
                    );
                }
            }
        }
        tracing::debug!(operation, "using hardcoded default");
        Resolved::new(default(), Precision::Default)
    }
}
