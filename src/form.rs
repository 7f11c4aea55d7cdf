//! Form state: field values, validation errors, and the submission
//! state machine.
//!
//! Everything here is pure in-memory state so it can be driven directly
//! from tests without a terminal or a network. The UI layer owns focus
//! and rendering; this module owns the data and the transition rules:
//!
//! - editing replaces a field's raw value and clears a stale email error
//! - submitting validates first and never touches the network on failure
//! - exactly one terminal status (success/error) per concluded attempt

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

/// Inline error shown when the email field is left empty.
pub const ERR_EMAIL_REQUIRED: &str = "email is required";
/// Inline error shown when the email field fails the syntax check.
pub const ERR_EMAIL_INVALID: &str = "enter a valid email";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Syntactic email sanity check. No DNS lookup, no normalization.
pub fn validate_email(s: &str) -> bool {
    EMAIL_RE.is_match(s)
}

/// The three form fields, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// Next field in tab order (wraps).
    pub fn next(self) -> Self {
        match self {
            Field::Name => Field::Email,
            Field::Email => Field::Message,
            Field::Message => Field::Name,
        }
    }

    /// Previous field in tab order (wraps).
    pub fn prev(self) -> Self {
        match self {
            Field::Name => Field::Message,
            Field::Email => Field::Name,
            Field::Message => Field::Email,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }

    /// Only the message field accepts newlines.
    pub fn is_multiline(self) -> bool {
        matches!(self, Field::Message)
    }
}

/// Raw field values. Updated on every keystroke, no trimming or limits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }
}

/// Terminal outcome of the most recent submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStatus {
    None,
    Success,
    Error,
}

impl Default for SubmissionStatus {
    fn default() -> Self {
        SubmissionStatus::None
    }
}

/// Result of asking the form to begin a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeginSubmit {
    /// Validation passed; the caller should issue the network request.
    Accepted,
    /// Validation failed; errors are recorded, nothing was sent.
    Invalid,
    /// A request is already outstanding; nothing was sent.
    InFlight,
}

/// The contact form state machine.
#[derive(Debug, Default)]
pub struct FormState {
    pub fields: FormFields,
    pub errors: HashMap<Field, String>,
    pub status: SubmissionStatus,
    pub is_submitting: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a character to a field. Editing the email field clears any
    /// recorded email error; no other field triggers error clearing.
    pub fn push_char(&mut self, field: Field, c: char) {
        self.fields.get_mut(field).push(c);
        self.clear_error_on_edit(field);
    }

    /// Delete the last character of a field, clearing a stale email error
    /// the same way `push_char` does.
    pub fn pop_char(&mut self, field: Field) {
        self.fields.get_mut(field).pop();
        self.clear_error_on_edit(field);
    }

    fn clear_error_on_edit(&mut self, field: Field) {
        if field == Field::Email {
            self.errors.remove(&Field::Email);
        }
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Begin a submit attempt: clear the previous status, recompute the
    /// error map from scratch, and only mark the form as submitting when
    /// validation passes. Never issues the network call itself.
    pub fn begin_submit(&mut self) -> BeginSubmit {
        if self.is_submitting {
            return BeginSubmit::InFlight;
        }
        self.status = SubmissionStatus::None;

        let errors = validate(&self.fields);
        if !errors.is_empty() {
            self.errors = errors;
            return BeginSubmit::Invalid;
        }
        self.errors = errors;
        self.is_submitting = true;
        BeginSubmit::Accepted
    }

    /// Conclude the in-flight attempt. On success the fields and errors
    /// are wiped; on failure the user's input is left untouched so it can
    /// be resubmitted.
    pub fn finish_submit(&mut self, ok: bool) {
        if ok {
            self.fields.clear();
            self.errors.clear();
            self.status = SubmissionStatus::Success;
        } else {
            self.status = SubmissionStatus::Error;
        }
        self.is_submitting = false;
    }
}

/// Recompute the full error map for a set of field values. Name and
/// message are optional and never validated; the emptiness check trims
/// whitespace but validation runs on the raw value.
pub fn validate(fields: &FormFields) -> HashMap<Field, String> {
    let mut errors = HashMap::new();

    if fields.email.trim().is_empty() {
        errors.insert(Field::Email, ERR_EMAIL_REQUIRED.to_string());
    } else if !validate_email(&fields.email) {
        errors.insert(Field::Email, ERR_EMAIL_INVALID.to_string());
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(name: &str, email: &str, message: &str) -> FormFields {
        FormFields {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    #[test]
    fn accepts_plain_addresses() {
        assert!(validate_email("user@example.com"));
        assert!(validate_email("a@b.c"));
        assert!(validate_email("first.last+tag@sub.domain.org"));
    }

    #[test]
    fn rejects_missing_at_or_dot() {
        assert!(!validate_email("not-an-email"));
        assert!(!validate_email("user.example.com"));
        assert!(!validate_email("user@example"));
        assert!(!validate_email("user@"));
        assert!(!validate_email("@example.com"));
    }

    #[test]
    fn rejects_whitespace() {
        assert!(!validate_email("user @example.com"));
        assert!(!validate_email("user@ example.com"));
        assert!(!validate_email("user@example .com"));
        assert!(!validate_email(" user@example.com"));
    }

    #[test]
    fn empty_email_is_required() {
        let errors = validate(&filled("Ann", "", "hi"));
        assert_eq!(errors.get(&Field::Email).unwrap(), ERR_EMAIL_REQUIRED);
    }

    #[test]
    fn whitespace_only_email_is_required() {
        let errors = validate(&filled("", "   ", ""));
        assert_eq!(errors.get(&Field::Email).unwrap(), ERR_EMAIL_REQUIRED);
    }

    #[test]
    fn malformed_email_is_invalid() {
        let errors = validate(&filled("", "not-an-email", ""));
        assert_eq!(errors.get(&Field::Email).unwrap(), ERR_EMAIL_INVALID);
    }

    #[test]
    fn name_and_message_are_never_validated() {
        let errors = validate(&filled("", "user@example.com", ""));
        assert!(errors.is_empty());
    }

    #[test]
    fn invalid_submit_records_errors_and_stays_idle() {
        let mut form = FormState::new();
        form.fields.email = "not-an-email".into();

        assert_eq!(form.begin_submit(), BeginSubmit::Invalid);
        assert_eq!(form.error(Field::Email), Some(ERR_EMAIL_INVALID));
        assert!(!form.is_submitting);
        assert_eq!(form.status, SubmissionStatus::None);
    }

    #[test]
    fn invalid_submit_clears_a_stale_banner() {
        let mut form = FormState::new();
        form.status = SubmissionStatus::Error;

        assert_eq!(form.begin_submit(), BeginSubmit::Invalid);
        assert_eq!(form.status, SubmissionStatus::None);
    }

    #[test]
    fn valid_submit_enters_submitting() {
        let mut form = FormState::new();
        form.fields.email = "user@example.com".into();

        assert_eq!(form.begin_submit(), BeginSubmit::Accepted);
        assert!(form.is_submitting);
        assert!(form.errors.is_empty());
    }

    #[test]
    fn second_submit_is_rejected_while_in_flight() {
        let mut form = FormState::new();
        form.fields.email = "user@example.com".into();

        assert_eq!(form.begin_submit(), BeginSubmit::Accepted);
        assert_eq!(form.begin_submit(), BeginSubmit::InFlight);
    }

    #[test]
    fn success_clears_fields_and_errors() {
        let mut form = FormState::new();
        form.fields = filled("Ann", "user@example.com", "hello");
        assert_eq!(form.begin_submit(), BeginSubmit::Accepted);

        form.finish_submit(true);
        assert_eq!(form.fields, FormFields::default());
        assert!(form.errors.is_empty());
        assert_eq!(form.status, SubmissionStatus::Success);
        assert!(!form.is_submitting);
    }

    #[test]
    fn failure_preserves_user_input() {
        let mut form = FormState::new();
        form.fields = filled("Ann", "user@example.com", "hello");
        assert_eq!(form.begin_submit(), BeginSubmit::Accepted);

        form.finish_submit(false);
        assert_eq!(form.fields, filled("Ann", "user@example.com", "hello"));
        assert_eq!(form.status, SubmissionStatus::Error);
        assert!(!form.is_submitting);
    }

    #[test]
    fn editing_email_clears_exactly_that_error() {
        let mut form = FormState::new();
        assert_eq!(form.begin_submit(), BeginSubmit::Invalid);
        assert!(form.error(Field::Email).is_some());

        form.push_char(Field::Email, 'u');
        assert_eq!(form.error(Field::Email), None);
        assert_eq!(form.fields.email, "u");
    }

    #[test]
    fn editing_other_fields_leaves_errors_alone() {
        let mut form = FormState::new();
        assert_eq!(form.begin_submit(), BeginSubmit::Invalid);

        form.push_char(Field::Name, 'A');
        form.push_char(Field::Message, 'x');
        assert_eq!(form.error(Field::Email), Some(ERR_EMAIL_REQUIRED));
    }

    #[test]
    fn backspace_edits_the_raw_value() {
        let mut form = FormState::new();
        form.push_char(Field::Name, 'A');
        form.push_char(Field::Name, 'n');
        form.pop_char(Field::Name);
        assert_eq!(form.fields.name, "A");
    }

    #[test]
    fn field_tab_order_wraps() {
        assert_eq!(Field::Name.next(), Field::Email);
        assert_eq!(Field::Message.next(), Field::Name);
        assert_eq!(Field::Name.prev(), Field::Message);

        // next() visits every field exactly once before wrapping
        let mut seen = Field::Name;
        for expected in Field::ALL {
            assert_eq!(seen, expected);
            seen = seen.next();
        }
        assert_eq!(seen, Field::Name);
    }
}
