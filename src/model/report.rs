//! Rendered edit-history report handed to the presentation layer.

// Field names, in report order. The original content is the description, not a field.
pub const FIELD_AUTHOR: &str = "Author";
pub const FIELD_ID: &str = "ID";
pub const FIELD_CREATED_AT: &str = "Created At";
pub const FIELD_MOST_RECENT_EDIT: &str = "Most Recent Edit";
pub const FIELD_PREVIOUS_EDITS: &str = "Previous Edits";

/// One named field of a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportField {
    pub name: String,
    pub value: String,
    /// Whether the field may share a row with neighbouring inline fields.
    pub inline: bool,
}

impl ReportField {
    pub fn new(name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inline,
        }
    }
}

/// Bounded, human-readable summary of a message and its edit history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditReport {
    pub title: String,
    /// Current message content, bounded. Placeholder when the message has no text.
    pub description: String,
    /// Visual indicator chosen from whether any edits are recorded.
    pub color: u32,
    pub fields: Vec<ReportField>,
    pub footer: String,
}

impl EditReport {
    /// Value of the field with the given name, if present.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| field.value.as_str())
    }

    /// Bounded original (current) content.
    pub fn original(&self) -> &str {
        &self.description
    }

    pub fn most_recent_edit(&self) -> Option<&str> {
        self.field(FIELD_MOST_RECENT_EDIT)
    }

    pub fn prior_edits(&self) -> Option<&str> {
        self.field(FIELD_PREVIOUS_EDITS)
    }
}
