//! Card property value types.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Value type of a board property template.
///
/// Serialized with the camelCase wire names used by the board schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PropertyType {
    Text,
    Number,
    Select,
    MultiSelect,
    Date,
    Person,
    Checkbox,
    Url,
    Email,
    Phone,
    CreatedTime,
    CreatedBy,
    UpdatedTime,
    UpdatedBy,
}

const ALL_PROPERTY_TYPES: &[PropertyType] = &[
    PropertyType::Text,
    PropertyType::Number,
    PropertyType::Select,
    PropertyType::MultiSelect,
    PropertyType::Date,
    PropertyType::Person,
    PropertyType::Checkbox,
    PropertyType::Url,
    PropertyType::Email,
    PropertyType::Phone,
    PropertyType::CreatedTime,
    PropertyType::CreatedBy,
    PropertyType::UpdatedTime,
    PropertyType::UpdatedBy,
];

impl PropertyType {
    /// All known types, in the order the type picker lists them.
    pub fn all() -> &'static [PropertyType] {
        ALL_PROPERTY_TYPES
    }

    /// Stable wire string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Select => "select",
            Self::MultiSelect => "multiSelect",
            Self::Date => "date",
            Self::Person => "person",
            Self::Checkbox => "checkbox",
            Self::Url => "url",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::CreatedTime => "createdTime",
            Self::CreatedBy => "createdBy",
            Self::UpdatedTime => "updatedTime",
            Self::UpdatedBy => "updatedBy",
        }
    }

    /// Default English display name, also used as the name of a new property.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Number => "Number",
            Self::Select => "Select",
            Self::MultiSelect => "Multi select",
            Self::Date => "Date",
            Self::Person => "Person",
            Self::Checkbox => "Checkbox",
            Self::Url => "URL",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::CreatedTime => "Created time",
            Self::CreatedBy => "Created by",
            Self::UpdatedTime => "Last updated time",
            Self::UpdatedBy => "Last updated by",
        }
    }

    /// Whether the value is computed from card metadata rather than stored.
    ///
    /// Derived values exist on every card.
    pub fn is_derived(self) -> bool {
        matches!(
            self,
            Self::CreatedTime | Self::CreatedBy | Self::UpdatedTime | Self::UpdatedBy
        )
    }
}

impl Display for PropertyType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse error for unknown property type strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPropertyType(pub String);

impl Display for UnknownPropertyType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown property type: {}", self.0)
    }
}

impl Error for UnknownPropertyType {}

impl std::str::FromStr for PropertyType {
    type Err = UnknownPropertyType;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim();
        ALL_PROPERTY_TYPES
            .iter()
            .copied()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| UnknownPropertyType(normalized.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::PropertyType;

    #[test]
    fn wire_names_round_trip_through_from_str() {
        for kind in PropertyType::all() {
            let parsed: PropertyType = kind.as_str().parse().expect("known type should parse");
            assert_eq!(parsed, *kind);
        }
    }

    #[test]
    fn unknown_type_is_rejected() {
        let err = "rollup".parse::<PropertyType>().expect_err("rollup is unknown");
        assert_eq!(err.0, "rollup");
    }

    #[test]
    fn only_metadata_types_are_derived() {
        assert!(PropertyType::CreatedBy.is_derived());
        assert!(PropertyType::UpdatedTime.is_derived());
        assert!(!PropertyType::Text.is_derived());
        assert!(!PropertyType::Date.is_derived());
    }
}
