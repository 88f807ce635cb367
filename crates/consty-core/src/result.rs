//! Result type aliases and the submission result carrier

use crate::error::{ConstyError, ValidationErrors};

/// Standard Result type for Consty operations
pub type ConstyResult<T> = Result<T, ConstyError>;

/// Outcome of a form submission flow.
///
/// Client-side validation failures and server rejections both land here so
/// the page layer has a single shape to render: either the result, or a
/// `ValidationErrors` collection for the banner.
#[derive(Debug)]
pub struct SubmitResult<T> {
    pub success: bool,
    pub result: Option<T>,
    pub errors: ValidationErrors,
}

impl<T> SubmitResult<T> {
    pub fn success(result: T) -> Self {
        Self {
            success: true,
            result: Some(result),
            errors: ValidationErrors::new(),
        }
    }

    pub fn failure(errors: ValidationErrors) -> Self {
        Self {
            success: false,
            result: None,
            errors,
        }
    }

    pub fn failure_with_message(message: impl Into<String>) -> Self {
        let mut errors = ValidationErrors::new();
        errors.add_base(message);
        Self::failure(errors)
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn is_failure(&self) -> bool {
        !self.success
    }

    pub fn into_result(self) -> ConstyResult<T> {
        if self.success {
            self.result.ok_or_else(|| {
                ConstyError::Internal("SubmitResult success but no result value".into())
            })
        } else {
            Err(ConstyError::Validation(self.errors))
        }
    }
}

impl<T> From<Result<T, ValidationErrors>> for SubmitResult<T> {
    fn from(result: Result<T, ValidationErrors>) -> Self {
        match result {
            Ok(value) => SubmitResult::success(value),
            Err(errors) => SubmitResult::failure(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success() {
        let result = SubmitResult::success(42);
        assert!(result.is_success());
        assert_eq!(result.into_result().unwrap(), 42);
    }

    #[test]
    fn test_failure() {
        let result: SubmitResult<()> =
            SubmitResult::failure(ValidationErrors::single("amount", "must be at least 1"));
        assert!(result.is_failure());
        assert!(result.errors.has_error("amount"));
        assert!(matches!(
            result.into_result(),
            Err(ConstyError::Validation(_))
        ));
    }
}
