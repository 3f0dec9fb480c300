//! The role record and its facet accessors.

use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

const NAME_KEY: &str = "role-name";

/// An optional typed column of [`Record`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Description,
    Responsibilities,
    Skills,
    Industry,
    OrgLevel,
    Medium,
}

impl Column {
    /// All optional columns, in serialization order.
    pub const ALL: [Column; 6] = [
        Column::Description,
        Column::Responsibilities,
        Column::Skills,
        Column::Industry,
        Column::OrgLevel,
        Column::Medium,
    ];

    /// JSON key of the column.
    pub fn key(self) -> &'static str {
        match self {
            Column::Description => "description",
            Column::Responsibilities => "responsibilities",
            Column::Skills => "skills",
            Column::Industry => "industry",
            Column::OrgLevel => "org-level",
            Column::Medium => "medium",
        }
    }

    fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Optional columns whose key was written out, even as `null`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct ColumnSet(u8);

impl ColumnSet {
    fn insert(&mut self, column: Column) {
        self.0 |= column.bit();
    }

    fn contains(self, column: Column) -> bool {
        self.0 & column.bit() != 0
    }
}

/// A design role as stored in the `design_roles` table.
///
/// Known columns are typed; any other column lands in `extra` and is carried
/// through load, save and reconciliation untouched, in its original order.
///
/// An optional column is either absent, `null`, or a string. A `None` field
/// serializes only when its key was present on input or the column was
/// [cleared](Record::clear), so absent columns stay absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    /// Store-assigned identifier. Absent on locally authored records.
    pub id: Option<Value>,

    /// Role name, the business key used for matching.
    pub name: String,

    pub description: Option<String>,

    /// Newline or bullet separated list.
    pub responsibilities: Option<String>,

    /// Newline or bullet separated list.
    pub skills: Option<String>,

    /// Comma-separated industry tags.
    pub industry: Option<String>,

    /// Organizational level label (e.g. "Senior", "Lead").
    pub org_level: Option<String>,

    /// Medium category (e.g. "Digital", "Physical", "Sound").
    pub medium: Option<String>,

    /// Columns without a typed field.
    pub extra: IndexMap<String, Value>,

    nulls: ColumnSet,
}

impl Record {
    /// Create a record with only a name set.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<Value>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_responsibilities(mut self, responsibilities: impl Into<String>) -> Self {
        self.responsibilities = Some(responsibilities.into());
        self
    }

    pub fn with_skills(mut self, skills: impl Into<String>) -> Self {
        self.skills = Some(skills.into());
        self
    }

    pub fn with_industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = Some(industry.into());
        self
    }

    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.org_level = Some(level.into());
        self
    }

    pub fn with_medium(mut self, medium: impl Into<String>) -> Self {
        self.medium = Some(medium.into());
        self
    }

    /// Set an untyped column.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Set `column` to an explicit `null`.
    pub fn clear(mut self, column: Column) -> Self {
        self.set(column, None);
        self
    }

    /// Set an optional column. `None` is kept as an explicit `null`.
    pub fn set(&mut self, column: Column, value: Option<String>) {
        if value.is_none() {
            self.nulls.insert(column);
        }
        *self.slot_mut(column) = value;
    }

    /// Value of an optional column.
    pub fn get(&self, column: Column) -> Option<&str> {
        self.slot(column).as_deref()
    }

    /// Whether the record carries `column`, as a value or an explicit `null`.
    pub fn carries(&self, column: Column) -> bool {
        self.slot(column).is_some() || self.nulls.contains(column)
    }

    fn slot(&self, column: Column) -> &Option<String> {
        match column {
            Column::Description => &self.description,
            Column::Responsibilities => &self.responsibilities,
            Column::Skills => &self.skills,
            Column::Industry => &self.industry,
            Column::OrgLevel => &self.org_level,
            Column::Medium => &self.medium,
        }
    }

    fn slot_mut(&mut self, column: Column) -> &mut Option<String> {
        match column {
            Column::Description => &mut self.description,
            Column::Responsibilities => &mut self.responsibilities,
            Column::Skills => &mut self.skills,
            Column::Industry => &mut self.industry,
            Column::OrgLevel => &mut self.org_level,
            Column::Medium => &mut self.medium,
        }
    }

    /// Industry tags: the `industry` column split on commas, trimmed, blanks dropped.
    pub fn industry_tags(&self) -> impl Iterator<Item = &str> {
        self.industry
            .as_deref()
            .into_iter()
            .flat_map(|industry| industry.split(','))
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
    }

    /// Trimmed org-level, if any.
    pub fn level_label(&self) -> Option<&str> {
        non_blank(self.org_level.as_deref())
    }

    /// Trimmed medium, if any.
    pub fn medium_label(&self) -> Option<&str> {
        non_blank(self.medium.as_deref())
    }

    /// Whether this record's content differs from `other`.
    ///
    /// Only columns this record carries are compared: `id` when set, optional
    /// columns it has a key for, and its untyped columns. Anything that exists
    /// only on `other` (timestamps, columns left out of a hand-written file)
    /// never counts as a change. JSON objects compare without regard to key
    /// order.
    pub fn differs_from(&self, other: &Record) -> bool {
        self.name != other.name
            || self.id.as_ref().is_some_and(|id| other.id.as_ref() != Some(id))
            || Column::ALL
                .into_iter()
                .any(|column| self.carries(column) && self.slot(column) != other.slot(column))
            || self
                .extra
                .iter()
                .any(|(key, value)| other.extra.get(key) != Some(value))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        if let Some(id) = &self.id {
            map.serialize_entry("id", id)?;
        }
        map.serialize_entry(NAME_KEY, &self.name)?;
        for column in Column::ALL {
            if self.carries(column) {
                map.serialize_entry(column.key(), self.slot(column))?;
            }
        }
        for (key, value) in &self.extra {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Serde shape of a record; the outer `Option` of a column is key presence.
#[derive(Deserialize)]
struct RecordRepr {
    #[serde(default)]
    id: Option<Value>,
    #[serde(rename = "role-name")]
    name: String,
    #[serde(default, deserialize_with = "present")]
    description: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    responsibilities: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    skills: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    industry: Option<Option<String>>,
    #[serde(rename = "org-level", default, deserialize_with = "present")]
    org_level: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    medium: Option<Option<String>>,
    #[serde(flatten)]
    extra: IndexMap<String, Value>,
}

fn present<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Option<String>>, D::Error> {
    Option::<String>::deserialize(deserializer).map(Some)
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = RecordRepr::deserialize(deserializer)?;
        let mut record = Record {
            id: repr.id,
            name: repr.name,
            extra: repr.extra,
            ..Record::default()
        };

        for (column, value) in [
            (Column::Description, repr.description),
            (Column::Responsibilities, repr.responsibilities),
            (Column::Skills, repr.skills),
            (Column::Industry, repr.industry),
            (Column::OrgLevel, repr.org_level),
            (Column::Medium, repr.medium),
        ] {
            match value {
                Some(Some(text)) => *record.slot_mut(column) = Some(text),
                Some(None) => record.nulls.insert(column),
                None => {}
            }
        }
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_hyphenated_keys() {
        let record: Record = serde_json::from_value(json!({
            "id": 7,
            "role-name": "UX Designer",
            "org-level": "Senior",
            "industry": "Tech, Retail",
            "medium": "Digital",
            "created_at": "2024-01-01T00:00:00Z"
        }))
        .unwrap();

        assert_eq!(record.id, Some(json!(7)));
        assert_eq!(record.name, "UX Designer");
        assert_eq!(record.org_level.as_deref(), Some("Senior"));
        assert_eq!(record.description, None);
        assert!(!record.carries(Column::Description));
        assert_eq!(record.extra.get("created_at"), Some(&json!("2024-01-01T00:00:00Z")));
    }

    #[test]
    fn test_extra_fields_keep_order_on_serialize() {
        let record = Record::new("Sound Designer")
            .with_field("zeta", 1)
            .with_field("alpha", 2);

        let text = serde_json::to_string(&record).unwrap();
        let zeta = text.find("\"zeta\"").unwrap();
        let alpha = text.find("\"alpha\"").unwrap();
        assert!(zeta < alpha);
        assert!(!text.contains("\"id\""));
    }

    #[test]
    fn test_absent_and_null_columns_serialize_as_read() {
        let input = json!({
            "role-name": "A",
            "description": null,
            "org-level": "L1"
        });
        let record: Record = serde_json::from_value(input.clone()).unwrap();

        assert!(record.carries(Column::Description));
        assert!(!record.carries(Column::Skills));
        assert_eq!(record.get(Column::OrgLevel), Some("L1"));
        assert_eq!(serde_json::to_value(&record).unwrap(), input);
    }

    #[test]
    fn test_clear_writes_null() {
        let record = Record::new("A").with_skills("- Figma").clear(Column::Skills);

        assert_eq!(record.skills, None);
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({"role-name": "A", "skills": null})
        );
    }

    #[test]
    fn test_industry_tags() {
        let record = Record::new("A").with_industry(" Tech ,, Retail,  ");
        let tags: Vec<_> = record.industry_tags().collect();
        assert_eq!(tags, vec!["Tech", "Retail"]);

        assert_eq!(Record::new("B").industry_tags().count(), 0);
    }

    #[test]
    fn test_blank_labels_are_none() {
        let record = Record::new("A").with_level("   ").with_medium(" Sound ");
        assert_eq!(record.level_label(), None);
        assert_eq!(record.medium_label(), Some("Sound"));
    }

    #[test]
    fn test_differs_ignores_missing_identifier() {
        let local = Record::new("A").with_level("L1");
        let remote = Record::new("A").with_level("L1").with_id(42);
        assert!(!local.differs_from(&remote));
    }

    #[test]
    fn test_differs_on_local_identifier() {
        let remote = Record::new("A").with_id(42);
        assert!(!Record::new("A").with_id(42).differs_from(&remote));
        assert!(Record::new("A").with_id(7).differs_from(&remote));
    }

    #[test]
    fn test_differs_ignores_columns_missing_locally() {
        let local: Record = serde_json::from_value(json!({"role-name": "A", "org-level": "L1"})).unwrap();
        let remote: Record = serde_json::from_value(json!({
            "id": 1,
            "role-name": "A",
            "org-level": "L1",
            "description": "kept remotely",
            "created_at": "t"
        }))
        .unwrap();

        assert!(!local.differs_from(&remote));
        assert!(remote.differs_from(&local));
    }

    #[test]
    fn test_differs_on_explicit_null() {
        let remote = Record::new("A").with_description("kept remotely");
        let local: Record = serde_json::from_value(json!({"role-name": "A", "description": null})).unwrap();
        assert!(local.differs_from(&remote));
        assert!(Record::new("A").clear(Column::Description).differs_from(&remote));
    }

    #[test]
    fn test_differs_ignores_remote_only_extra() {
        let local = Record::new("A");
        let remote = Record::new("A").with_field("created_at", "2024-01-01");
        assert!(!local.differs_from(&remote));
        assert!(remote.differs_from(&local));
    }

    #[test]
    fn test_differs_on_nested_extra() {
        let local = Record::new("A").with_field("meta", json!({"a": 1, "b": [1, 2]}));
        let same = Record::new("A").with_field("meta", json!({"b": [1, 2], "a": 1}));
        let reordered = Record::new("A").with_field("meta", json!({"a": 1, "b": [2, 1]}));

        assert!(!local.differs_from(&same));
        assert!(local.differs_from(&reordered));
    }
}
