use crate::domain::{AppError, Variant};

/// Port for the interactive topology form.
///
/// Every method returns `Ok(None)` when the operator cancels.
pub trait FormInput {
    /// Pick one of `variants`.
    fn select_variant(&mut self, variants: &[Variant]) -> Result<Option<Variant>, AppError>;

    /// Read a free-form field. Empty answers are allowed.
    fn text(&mut self, prompt: &str, initial: &str) -> Result<Option<String>, AppError>;

    /// Read a branch count between 1 and `max`.
    fn count(&mut self, prompt: &str, max: usize) -> Result<Option<usize>, AppError>;
}
