//! Login form field table.
//!
//! Field names match the `Credentials` wire keys. Rendering details (label,
//! input type, autocomplete hint) are derived here so the field wrapper stays
//! generic.

#[cfg(test)]
#[path = "schema_test.rs"]
mod schema_test;

/// One declared form field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub display_name: Option<&'static str>,
}

pub const EMAIL_FIELD: FieldSpec = FieldSpec { name: "email", display_name: Some("email or username") };
pub const PASSWORD_FIELD: FieldSpec = FieldSpec { name: "password", display_name: None };

/// Fields of the login form, in render order.
pub const LOGIN_FIELDS: [FieldSpec; 2] = [EMAIL_FIELD, PASSWORD_FIELD];

impl FieldSpec {
    /// Label text: the display name if any, else the field name, first letter uppercased.
    #[must_use]
    pub fn label(&self) -> String {
        capitalize(self.display_name.unwrap_or(self.name))
    }

    /// HTML input type for this field.
    #[must_use]
    pub fn input_type(&self) -> &'static str {
        if self.name == "password" { "password" } else { "text" }
    }

    #[must_use]
    pub fn autocomplete(&self) -> &'static str {
        match self.name {
            "password" => "current-password",
            "email" => "username",
            _ => "off",
        }
    }
}

fn capitalize(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
