//! Quiz service drawing random unseen questions.

use crate::domain::entities::{Question, QuizCategory};
use crate::domain::repositories::QuestionRepository;
use crate::error::RepositoryError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Arc, Mutex};

/// Service selecting the next quiz question.
///
/// Candidates are filtered in storage, then one is drawn uniformly with an
/// internal [`StdRng`]. The generator is only locked for the draw itself,
/// never across an `.await`.
pub struct QuizService<R: QuestionRepository> {
    repository: Arc<R>,
    rng: Mutex<StdRng>,
}

impl<R: QuestionRepository> QuizService<R> {
    /// Creates a quiz service seeded from the operating system.
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_rng(repository, StdRng::from_os_rng())
    }

    /// Creates a quiz service with a deterministic seed.
    pub fn with_seed(repository: Arc<R>, seed: u64) -> Self {
        Self::with_rng(repository, StdRng::seed_from_u64(seed))
    }

    fn with_rng(repository: Arc<R>, rng: StdRng) -> Self {
        Self {
            repository,
            rng: Mutex::new(rng),
        }
    }

    /// Draws a question not listed in `previous_questions`.
    ///
    /// Returns `Ok(None)` once every eligible question has been seen.
    pub async fn next_question(
        &self,
        previous_questions: &[i32],
        category: QuizCategory,
    ) -> Result<Option<Question>, RepositoryError> {
        let mut candidates = self
            .repository
            .list_quiz_candidates(previous_questions, category.category_id())
            .await?;

        if candidates.is_empty() {
            return Ok(None);
        }

        let index = {
            // A poisoned lock only means another draw panicked; the RNG state is still usable.
            let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
            rng.random_range(0..candidates.len())
        };

        Ok(Some(candidates.swap_remove(index)))
    }
}
