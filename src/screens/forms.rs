//! Projection of API failures onto form state.
//!
//! Field-keyed validation messages become per-field helper text; anything
//! else becomes a dismissible banner. Editing a field clears only that
//! field's message, matching how the forms behave.

use crate::error::{ApiError, FieldErrors};

/// Per-form error state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormErrors {
    fields: FieldErrors,
    banner: Option<String>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Project an API failure onto the form.
    pub fn absorb(&mut self, error: &ApiError) {
        match error.field_errors() {
            Some(field_errors) => {
                self.fields = field_errors.clone();
                self.banner = None;
            }
            None => {
                self.fields.clear();
                self.banner = Some(error.message().to_string());
            }
        }
    }

    /// Helper text for one field, if any.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// The banner message for non-field failures.
    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    /// Clear one field's message; called when the user edits that field.
    pub fn clear_field(&mut self, name: &str) {
        self.fields.remove(name);
    }

    pub fn dismiss_banner(&mut self) {
        self.banner = None;
    }

    pub fn clear(&mut self) {
        self.fields.clear();
        self.banner = None;
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.banner.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_projects_per_field() {
        let mut fields = FieldErrors::new();
        fields.insert("title".to_string(), "Title is required".to_string());
        fields.insert("isbn".to_string(), "ISBN is required".to_string());
        let error = ApiError::validation(fields);

        let mut form = FormErrors::new();
        form.absorb(&error);

        assert_eq!(form.field("title"), Some("Title is required"));
        assert_eq!(form.field("isbn"), Some("ISBN is required"));
        assert_eq!(form.field("author"), None);
        assert!(form.banner().is_none());
    }

    #[test]
    fn test_generic_error_projects_to_banner() {
        let mut form = FormErrors::new();
        form.absorb(&ApiError::bad_request("No file provided"));

        assert_eq!(form.banner(), Some("No file provided"));
        assert!(form.field("file").is_none());
    }

    #[test]
    fn test_editing_a_field_clears_only_that_field() {
        let mut fields = FieldErrors::new();
        fields.insert("title".to_string(), "Title is required".to_string());
        fields.insert("isbn".to_string(), "ISBN is required".to_string());

        let mut form = FormErrors::new();
        form.absorb(&ApiError::validation(fields));
        form.clear_field("title");

        assert_eq!(form.field("title"), None);
        assert_eq!(form.field("isbn"), Some("ISBN is required"));
        assert!(!form.is_empty());
    }

    #[test]
    fn test_absorb_replaces_previous_projection() {
        let mut fields = FieldErrors::new();
        fields.insert("title".to_string(), "Title is required".to_string());

        let mut form = FormErrors::new();
        form.absorb(&ApiError::validation(fields));
        form.absorb(&ApiError::bad_request("went sideways"));

        assert!(form.field("title").is_none());
        assert_eq!(form.banner(), Some("went sideways"));

        form.dismiss_banner();
        assert!(form.is_empty());
    }
}
