//! Form field value object

/// A single text input field with validation state.
///
/// Validity is derived from the value rather than stored: a field is valid
/// when its trimmed value is non-empty. `touched` controls whether the
/// validation message is rendered at all, so an untouched empty form does
/// not greet the user with an error.
#[derive(Debug, Clone)]
pub struct FormField {
    pub label: String,
    value: String,
    /// Set once the user has interacted with the field (or a submit attempt
    /// failed validation). Validation UI only renders when this is true.
    pub touched: bool,
    /// Whether the field currently receives keyboard input.
    pub focused: bool,
}

impl FormField {
    /// Create a new empty text field
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            value: String::new(),
            touched: false,
            focused: false,
        }
    }

    /// Get the raw value as typed, untrimmed
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Get the value with leading/trailing whitespace removed.
    /// Internal whitespace is preserved.
    pub fn trimmed(&self) -> &str {
        self.value.trim()
    }

    /// A field is valid when its trimmed value is non-empty
    pub fn is_valid(&self) -> bool {
        !self.trimmed().is_empty()
    }

    /// Mark the field as interacted with so validation UI renders
    pub fn mark_touched(&mut self) {
        self.touched = true;
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
        self.touched = true;
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
        self.touched = true;
    }

    /// Reset to the initial empty, untouched, unfocused state
    pub fn reset(&mut self) {
        self.value.clear();
        self.touched = false;
        self.focused = false;
    }

    /// Test helper to seed a value without simulating keystrokes
    #[cfg(test)]
    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }
}
