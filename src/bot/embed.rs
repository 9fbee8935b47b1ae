//! Discord embed presentation of edit reports.

use serenity::all::{CreateEmbed, CreateEmbedFooter};

use crate::model::report::EditReport;
use crate::service::edit_report::truncate;

/// Discord's limit on the length of an embed field value.
pub const MAX_FIELD_LENGTH: usize = 1024;

/// Converts a report into an embed, optionally with a thumbnail (the author's avatar).
///
/// Field values are clamped to [`MAX_FIELD_LENGTH`]; the previous-edits field is the only
/// one that can grow past it, with enough recorded edits.
pub fn report_embed(report: &EditReport, thumbnail_url: Option<String>) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title(&report.title)
        .description(&report.description)
        .color(report.color)
        .footer(CreateEmbedFooter::new(&report.footer));

    for field in &report.fields {
        embed = embed.field(&field.name, clamp_field_value(&field.value), field.inline);
    }

    if let Some(url) = thumbnail_url {
        embed = embed.thumbnail(url);
    }

    embed
}

/// Bounds a field value to [`MAX_FIELD_LENGTH`] characters, marker included.
pub fn clamp_field_value(value: &str) -> String {
    truncate(value, MAX_FIELD_LENGTH - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::edit::EditRecord;
    use crate::model::report::FIELD_PREVIOUS_EDITS;
    use crate::service::edit_report::{compose_report, COLOR_HAS_EDITS};
    use chrono::{Duration, TimeZone, Utc};

    fn report_with_edits(count: usize) -> EditReport {
        let start = Utc.with_ymd_and_hms(2025, 10, 18, 12, 0, 0).unwrap();
        let history: Vec<EditRecord> = (0..count)
            .map(|i| EditRecord::new("x".repeat(300), start + Duration::seconds(i as i64)))
            .collect();

        compose_report("123", "current", "tester", start, &history)
    }

    #[test]
    fn clamps_long_values_to_field_limit() {
        let clamped = clamp_field_value(&"a".repeat(5000));

        assert_eq!(clamped.chars().count(), MAX_FIELD_LENGTH);
        assert!(clamped.ends_with('…'));
    }

    #[test]
    fn keeps_short_values() {
        assert_eq!(clamp_field_value("short"), "short");
    }

    #[test]
    fn embed_carries_report_content() {
        let report = report_with_edits(10);
        let json = serde_json::to_value(report_embed(
            &report,
            Some("https://cdn.discordapp.com/embed/avatars/0.png".to_string()),
        ))
        .unwrap();

        assert_eq!(json["title"], report.title.as_str());
        assert_eq!(json["description"], "current");
        assert_eq!(json["color"], COLOR_HAS_EDITS);
        assert_eq!(json["footer"]["text"], "Message ID: 123");
        assert_eq!(
            json["thumbnail"]["url"],
            "https://cdn.discordapp.com/embed/avatars/0.png"
        );

        let fields = json["fields"].as_array().unwrap();
        assert_eq!(fields.len(), report.fields.len());
        for field in fields {
            let value = field["value"].as_str().unwrap();
            assert!(value.chars().count() <= MAX_FIELD_LENGTH);
        }

        let previous = fields
            .iter()
            .find(|field| field["name"] == FIELD_PREVIOUS_EDITS)
            .unwrap();
        assert!(previous["value"].as_str().unwrap().ends_with('…'));
    }
}
