//! User interaction seam

use kit_fs::NormalizedPath;

use crate::Result;
use crate::answers::InitAnswers;

/// Questions the engine may need answered while it runs.
pub trait Prompter: Send + Sync {
    /// The project has no config; initialize it now?
    fn confirm_init(&self) -> Result<bool>;

    /// `path` differs from the registry version; replace it?
    fn confirm_overwrite(&self, path: &NormalizedPath) -> Result<bool>;

    /// Let the user adjust the init defaults.
    fn init_answers(&self, defaults: InitAnswers) -> Result<InitAnswers>;
}

/// A prompter for non-interactive runs: every confirmation gets the same
/// answer and init defaults are accepted unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct NonInteractive {
    answer: bool,
}

impl NonInteractive {
    /// Decline every confirmation.
    pub fn declining() -> Self {
        Self { answer: false }
    }

    /// Accept every confirmation.
    pub fn accepting() -> Self {
        Self { answer: true }
    }
}

impl Prompter for NonInteractive {
    fn confirm_init(&self) -> Result<bool> {
        Ok(self.answer)
    }

    fn confirm_overwrite(&self, path: &NormalizedPath) -> Result<bool> {
        tracing::debug!(path = %path, answer = self.answer, "Answering overwrite prompt");
        Ok(self.answer)
    }

    fn init_answers(&self, defaults: InitAnswers) -> Result<InitAnswers> {
        Ok(defaults)
    }
}
