//! Edit report service.
//!
//! Composes the bounded, human-readable report shown by `/showmessage`. The service only
//! reads the edit log; the current message state is fetched by the command handler and
//! passed in already resolved.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::{
    data::edit_log::EditLogStore,
    error::store::EditStoreError,
    model::{
        edit::EditRecord,
        report::{
            EditReport, ReportField, FIELD_AUTHOR, FIELD_CREATED_AT, FIELD_ID,
            FIELD_MOST_RECENT_EDIT, FIELD_PREVIOUS_EDITS,
        },
    },
};

/// Maximum number of characters kept from any single content snippet.
pub const MAX_EDIT_LENGTH: usize = 300;

/// Appended to text cut at a length bound.
pub const TRUNCATION_MARKER: char = '…';

/// Indicator color when no edits are recorded.
pub const COLOR_NO_EDITS: u32 = 0x808080;

/// Indicator color when at least one edit is recorded.
pub const COLOR_HAS_EDITS: u32 = 0x00FF00;

pub const REPORT_TITLE: &str = "Message Content";
pub const NO_CONTENT: &str = "No message content";
pub const NO_EDITS: &str = "No edits recorded.";
pub const NO_PRIOR_EDITS: &str = "None.";
pub const EMPTY_EDIT: &str = "*empty*";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Cuts `text` to at most `max` characters, appending [`TRUNCATION_MARKER`] when cut.
///
/// Counts Unicode scalar values, never splitting a character. Text already within the
/// bound is returned unchanged, which makes the operation idempotent: the first `max`
/// characters of a truncated string are the same characters that were kept.
pub fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => {
            let mut truncated = String::with_capacity(cut + TRUNCATION_MARKER.len_utf8());
            truncated.push_str(&text[..cut]);
            truncated.push(TRUNCATION_MARKER);
            truncated
        }
        None => text.to_string(),
    }
}

/// Renders a timestamp the way every report field shows it.
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

/// Service rendering edit-history reports.
pub struct EditReportService<'a> {
    store: &'a Arc<dyn EditLogStore>,
}

impl<'a> EditReportService<'a> {
    /// Creates a new EditReportService instance.
    ///
    /// # Arguments
    /// - `store` - Edit log store to read histories from
    ///
    /// # Returns
    /// - `EditReportService` - New service instance
    pub fn new(store: &'a Arc<dyn EditLogStore>) -> Self {
        Self { store }
    }

    /// Renders the report for a message whose current state is already known.
    ///
    /// Reads the message's history from the store and composes it with the current
    /// content. The caller must have fetched the message successfully; a message that
    /// cannot be read never reaches this method.
    ///
    /// # Arguments
    /// - `message_id` - Discord message ID
    /// - `current_content` - Content of the message as it is now
    /// - `author_label` - Display label of the message author
    /// - `created_at` - When the message was created
    ///
    /// # Returns
    /// - `Ok(EditReport)` - Bounded report ready for presentation
    /// - `Err(EditStoreError)` - History could not be read
    pub async fn render_report(
        &self,
        message_id: &str,
        current_content: &str,
        author_label: &str,
        created_at: DateTime<Utc>,
    ) -> Result<EditReport, EditStoreError> {
        let history = self.store.get_edits(message_id).await?;

        Ok(compose_report(
            message_id,
            current_content,
            author_label,
            created_at,
            &history,
        ))
    }
}

/// Builds a report from a history already in hand.
///
/// Pure counterpart of [`EditReportService::render_report`]. Each of the original content,
/// the most recent edit, and every prior edit entry is truncated to [`MAX_EDIT_LENGTH`]
/// independently.
pub fn compose_report(
    message_id: &str,
    current_content: &str,
    author_label: &str,
    created_at: DateTime<Utc>,
    history: &[EditRecord],
) -> EditReport {
    let original = if current_content.is_empty() {
        NO_CONTENT.to_string()
    } else {
        truncate(current_content, MAX_EDIT_LENGTH)
    };

    let color = if history.is_empty() {
        COLOR_NO_EDITS
    } else {
        COLOR_HAS_EDITS
    };

    EditReport {
        title: REPORT_TITLE.to_string(),
        description: original,
        color,
        fields: vec![
            ReportField::new(FIELD_AUTHOR, author_label, true),
            ReportField::new(FIELD_ID, message_id, true),
            ReportField::new(FIELD_CREATED_AT, format_timestamp(created_at), true),
            ReportField::new(FIELD_MOST_RECENT_EDIT, most_recent_edit(history), false),
            ReportField::new(FIELD_PREVIOUS_EDITS, prior_edits(history), false),
        ],
        footer: format!("Message ID: {}", message_id),
    }
}

fn most_recent_edit(history: &[EditRecord]) -> String {
    match history.last() {
        Some(last) => truncate(non_empty(&last.content), MAX_EDIT_LENGTH),
        None => NO_EDITS.to_string(),
    }
}

fn prior_edits(history: &[EditRecord]) -> String {
    let Some((_, prior)) = history.split_last() else {
        return NO_PRIOR_EDITS.to_string();
    };

    if prior.is_empty() {
        return NO_PRIOR_EDITS.to_string();
    }

    prior
        .iter()
        .enumerate()
        .map(|(i, edit)| {
            format!(
                "**Edit #{}** ({}):\n{}",
                i + 1,
                format_timestamp(edit.edited_at),
                truncate(non_empty(&edit.content), MAX_EDIT_LENGTH)
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn non_empty(content: &str) -> &str {
    if content.is_empty() {
        EMPTY_EDIT
    } else {
        content
    }
}
