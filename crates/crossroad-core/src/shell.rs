//! Control shell: drives one single-pass activation of every source.

use crate::blackboard::Blackboard;
use crate::error::PassClosedError;
use crate::source::SourceRegistry;

/// Schedules knowledge-source activation and detects pass completion.
///
/// Single-pass by design: every registered source is offered exactly one
/// turn, in registration order, and the domain needs no opportunistic
/// re-triggering on newly written hypotheses.
#[derive(Debug, Default)]
pub struct ControlShell;

impl ControlShell {
    pub fn new() -> Self {
        Self
    }

    /// Fires each source once. A false precondition skips the source; a
    /// contribute error is logged and contributes nothing; the pass
    /// continues with degraded output. Closes the pass before returning.
    pub async fn run_pass(
        &self,
        registry: &SourceRegistry,
        board: &mut Blackboard,
    ) -> Result<(), PassClosedError> {
        for source in registry.iter() {
            let applicable = source.precondition(&board.snapshot());
            board.record_fired(source.id());

            if !applicable {
                tracing::debug!(source = source.id(), "precondition false, source skipped");
                continue;
            }

            let contributed = source.contribute(&board.snapshot()).await;
            match contributed {
                Ok(hypotheses) => {
                    let mut accepted = 0usize;
                    for hypothesis in hypotheses {
                        if hypothesis.source_id != source.id() {
                            tracing::warn!(
                                source = source.id(),
                                claimed = %hypothesis.source_id,
                                "hypothesis attributed to a different source, dropped"
                            );
                            continue;
                        }
                        board.add_hypothesis(hypothesis)?;
                        accepted += 1;
                    }
                    tracing::debug!(source = source.id(), hypotheses = accepted, "source contributed");
                }
                Err(err) => {
                    tracing::warn!(source = source.id(), error = %err, "knowledge source failed, pass continues");
                }
            }
        }

        board.mark_done();
        tracing::debug!(
            sources = registry.len(),
            hypotheses = board.hypotheses().len(),
            "reasoning pass complete"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blackboard::{BlackboardView, Hypothesis};
    use crate::error::SourceError;
    use crate::path::CareerPath;
    use crate::source::KnowledgeSource;
    use crate::testutil::sample_profile;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct Steady;

    #[async_trait::async_trait]
    impl KnowledgeSource for Steady {
        fn id(&self) -> &'static str {
            "steady"
        }
        fn name(&self) -> &str {
            "Steady"
        }
        async fn contribute(
            &self,
            _view: &BlackboardView<'_>,
        ) -> Result<Vec<Hypothesis>, SourceError> {
            Ok(vec![Hypothesis::new(CareerPath::StayBpo, "steady", 0.6, "ok")])
        }
    }

    struct Failing;

    #[async_trait::async_trait]
    impl KnowledgeSource for Failing {
        fn id(&self) -> &'static str {
            "failing"
        }
        fn name(&self) -> &str {
            "Failing"
        }
        async fn contribute(
            &self,
            _view: &BlackboardView<'_>,
        ) -> Result<Vec<Hypothesis>, SourceError> {
            Err(SourceError::new("failing", "internal error"))
        }
    }

    struct Abstaining(Arc<AtomicUsize>);

    #[async_trait::async_trait]
    impl KnowledgeSource for Abstaining {
        fn id(&self) -> &'static str {
            "abstaining"
        }
        fn name(&self) -> &str {
            "Abstaining"
        }
        fn precondition(&self, _view: &BlackboardView<'_>) -> bool {
            false
        }
        async fn contribute(
            &self,
            _view: &BlackboardView<'_>,
        ) -> Result<Vec<Hypothesis>, SourceError> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(vec![])
        }
    }

    #[tokio::test]
    async fn test_failed_source_degrades_but_pass_continues() {
        let mut registry = SourceRegistry::new();
        registry.register(Arc::new(Failing));
        registry.register(Arc::new(Steady));
        let mut board = Blackboard::new(sample_profile());
        ControlShell::new().run_pass(&registry, &mut board).await.unwrap();

        assert!(!board.is_open());
        assert_eq!(board.hypotheses().len(), 1);
        assert_eq!(board.hypotheses()[0].source_id, "steady");
    }

    #[tokio::test]
    async fn test_false_precondition_never_contributes() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut registry = SourceRegistry::new();
        registry.register(Arc::new(Abstaining(Arc::clone(&calls))));
        let mut board = Blackboard::new(sample_profile());
        ControlShell::new().run_pass(&registry, &mut board).await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(board.hypotheses().is_empty());
        assert!(board.fired().contains("abstaining"));
    }

    #[tokio::test]
    async fn test_misattributed_hypothesis_dropped() {
        struct Impostor;

        #[async_trait::async_trait]
        impl KnowledgeSource for Impostor {
            fn id(&self) -> &'static str {
                "impostor"
            }
            fn name(&self) -> &str {
                "Impostor"
            }
            async fn contribute(
                &self,
                _view: &BlackboardView<'_>,
            ) -> Result<Vec<Hypothesis>, SourceError> {
                Ok(vec![Hypothesis::new(CareerPath::StayBpo, "someone_else", 0.9, "spoofed")])
            }
        }

        let mut registry = SourceRegistry::new();
        registry.register(Arc::new(Impostor));
        let mut board = Blackboard::new(sample_profile());
        ControlShell::new().run_pass(&registry, &mut board).await.unwrap();
        assert!(board.hypotheses().is_empty());
    }
}
