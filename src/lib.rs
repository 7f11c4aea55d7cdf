// Library for testable modules
pub mod async_task;
pub mod form;
pub mod relay;

// Re-export main types used in tests
pub use form::{validate_email, Field, FormFields, FormState, SubmissionStatus};
pub use relay::{RelayClient, RelayError, SubmitPayload};
