//! Form field value objects

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Toggle(bool),
    Select { options: Vec<String>, selected: usize },
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    /// Control id on the device's own pages
    #[allow(dead_code)]
    pub name: String,
    pub label: String,
    pub value: FieldValue,
    /// Masked on display (passwords)
    pub is_secret: bool,
}

impl FormField {
    /// Create a new empty text field
    pub fn text(name: &str, label: &str) -> Self {
        Self::text_with_value(name, label, String::new())
    }

    /// Create a new text field with initial value
    pub fn text_with_value(name: &str, label: &str, value: String) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Text(value),
            is_secret: false,
        }
    }

    /// Create a new masked text field
    pub fn secret(name: &str, label: &str) -> Self {
        Self {
            is_secret: true,
            ..Self::text(name, label)
        }
    }

    /// Create a new two-state switch
    pub fn toggle(name: &str, label: &str, checked: bool) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Toggle(checked),
            is_secret: false,
        }
    }

    /// Create a new selection field
    pub fn select(name: &str, label: &str, options: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Select {
                options: options.iter().map(|o| o.to_string()).collect(),
                selected: 0,
            },
            is_secret: false,
        }
    }

    /// Get the text value (empty for switches, the option for selections)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Toggle(_) => "",
            FieldValue::Select { options, selected } => {
                options.get(*selected).map(String::as_str).unwrap_or("")
            }
        }
    }

    /// Current switch state (false for non-switch fields)
    pub fn is_on(&self) -> bool {
        matches!(self.value, FieldValue::Toggle(true))
    }

    /// Flip a switch, returning the new state. No-op on other field kinds.
    pub fn flip(&mut self) -> bool {
        if let FieldValue::Toggle(checked) = &mut self.value {
            *checked = !*checked;
            *checked
        } else {
            false
        }
    }

    /// Force a switch into a state
    #[allow(dead_code)]
    pub fn set_on(&mut self, on: bool) {
        if let FieldValue::Toggle(checked) = &mut self.value {
            *checked = on;
        }
    }

    /// Set the text value
    pub fn set_text(&mut self, value: String) {
        if matches!(self.value, FieldValue::Text(_)) {
            self.value = FieldValue::Text(value);
        }
    }

    /// Advance a selection field to its next option, wrapping around
    pub fn cycle(&mut self) {
        if let FieldValue::Select { options, selected } = &mut self.value {
            if !options.is_empty() {
                *selected = (*selected + 1) % options.len();
            }
        }
    }

    /// Push a character to a text field
    pub fn push_char(&mut self, c: char) {
        if let FieldValue::Text(s) = &mut self.value {
            s.push(c);
        }
    }

    /// Remove the last character from a text field
    pub fn pop_char(&mut self) {
        if let FieldValue::Text(s) = &mut self.value {
            s.pop();
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => {
                if self.is_secret {
                    "•".repeat(s.chars().count())
                } else {
                    s.clone()
                }
            }
            FieldValue::Toggle(true) => "On".to_string(),
            FieldValue::Toggle(false) => "Off".to_string(),
            FieldValue::Select { options, selected } => {
                options.get(*selected).cloned().unwrap_or_default()
            }
        }
    }
}
