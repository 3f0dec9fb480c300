//! Presentation helpers shared by the dashboard and the CLI.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use super::role::Record;

/// Badge colour used when there is no text to hash.
pub const DEFAULT_BADGE_COLOR: &str = "hsl(220, 15%, 85%)";

/// Split a list-like text block into items.
///
/// Lines are split on `\n`, blank lines dropped, and a leading `- ` or `* `
/// bullet removed before trimming.
pub fn format_to_list(text: &str) -> Vec<String> {
    text.split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let line = line.strip_prefix("- ").unwrap_or(line);
            let line = line.strip_prefix("* ").unwrap_or(line);
            line.trim().to_string()
        })
        .collect()
}

/// Stable badge colour for a label.
///
/// The hue comes from a 31-multiplier string hash over UTF-16 code units, so
/// a label always renders with the same colour in every view.
pub fn badge_color(text: &str) -> String {
    if text.is_empty() {
        return DEFAULT_BADGE_COLOR.to_string();
    }

    let mut hash: i64 = 0;
    for unit in text.encode_utf16() {
        let shifted = (hash as i32).wrapping_shl(5) as i64;
        hash = i64::from(unit) + (shifted - hash);
    }

    let hue = (hash % 360).abs();
    format!("hsl({}, 60%, 45%)", hue)
}

/// A labelled badge with its colour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub label: String,
    pub color: String,
}

impl Badge {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            color: badge_color(label),
        }
    }
}

/// Card view of a record, ready to render.
#[derive(Debug, Clone, Serialize)]
pub struct RoleCard {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    pub name: String,
    pub description: String,
    pub responsibilities: Vec<String>,
    pub skills: Vec<String>,
    pub industries: Vec<Badge>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<Badge>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medium: Option<Badge>,
    /// Untyped, non-null columns keyed by a human-readable label.
    pub details: IndexMap<String, Value>,
}

impl From<&Record> for RoleCard {
    fn from(record: &Record) -> Self {
        let details = record
            .extra
            .iter()
            .filter(|(_, value)| !value.is_null())
            .map(|(key, value)| (humanize_key(key), value.clone()))
            .collect();

        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            description: record.description.clone().unwrap_or_default(),
            responsibilities: record
                .responsibilities
                .as_deref()
                .map(format_to_list)
                .unwrap_or_default(),
            skills: record.skills.as_deref().map(format_to_list).unwrap_or_default(),
            industries: record.industry_tags().map(Badge::new).collect(),
            level: record.level_label().map(Badge::new),
            medium: record.medium_label().map(Badge::new),
            details,
        }
    }
}

/// `years_experience` -> `Years Experience`.
fn humanize_key(key: &str) -> String {
    key.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_to_list_strips_bullets() {
        let text = "- Lead research\n\n* Run workshops\nPrototype  \n   \n";
        assert_eq!(
            format_to_list(text),
            vec!["Lead research", "Run workshops", "Prototype"]
        );
    }

    #[test]
    fn test_format_to_list_empty() {
        assert!(format_to_list("").is_empty());
        assert!(format_to_list("\n \n").is_empty());
    }

    #[test]
    fn test_badge_color_is_stable() {
        assert_eq!(badge_color("Senior"), badge_color("Senior"));
        assert_eq!(badge_color(""), DEFAULT_BADGE_COLOR);
    }

    #[test]
    fn test_badge_color_known_values() {
        // "a": 97 -> hue 97
        assert_eq!(badge_color("a"), "hsl(97, 60%, 45%)");
        // "ab": 97 * 31 + 98 = 3105 -> 3105 % 360 = 225
        assert_eq!(badge_color("ab"), "hsl(225, 60%, 45%)");
    }

    #[test]
    fn test_role_card_from_record() {
        let record = Record::new("Lighting Designer")
            .with_id(3)
            .with_industry("Theatre, Film")
            .with_level("Mid")
            .with_skills("- Rigging\n- DMX")
            .with_field("years_experience", 5)
            .with_field("notes", json!(null));

        let card = RoleCard::from(&record);
        assert_eq!(card.name, "Lighting Designer");
        assert_eq!(card.description, "");
        assert_eq!(card.skills, vec!["Rigging", "DMX"]);
        assert_eq!(card.industries.len(), 2);
        assert_eq!(card.industries[1].label, "Film");
        assert_eq!(card.level.as_ref().map(|b| b.label.as_str()), Some("Mid"));
        assert!(card.medium.is_none());
        assert_eq!(card.details.get("Years Experience"), Some(&json!(5)));
        assert!(!card.details.contains_key("Notes"));
    }
}
