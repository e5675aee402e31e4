use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Value range attached to a numeric event property.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueSpecification {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_value: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
}

/// One property of an event schema.
///
/// Primitive properties carry a `runtime_type`. Nested properties list their
/// children in `event_properties`, list properties describe their element
/// type through `event_property`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventProperty {
    #[serde(rename = "@class", default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    pub element_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime_name: Option<String>,
    #[serde(
        default,
        deserialize_with = "super::null_as_default",
        skip_serializing_if = "std::ops::Not::not"
    )]
    pub required: bool,
    #[serde(
        default,
        deserialize_with = "super::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub domain_properties: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_scope: Option<String>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub index: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime_id: Option<String>,
    #[serde(
        default,
        deserialize_with = "super::null_as_default",
        skip_serializing_if = "Map::is_empty"
    )]
    pub additional_metadata: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measurement_unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_specification: Option<ValueSpecification>,
    #[serde(
        default,
        deserialize_with = "super::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub event_properties: Vec<EventProperty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_property: Option<Box<EventProperty>>,
}

impl EventProperty {
    /// Whether the property groups child properties.
    pub fn is_nested(&self) -> bool {
        !self.event_properties.is_empty()
    }

    /// Whether the property holds a list of `event_property` elements.
    pub fn is_list(&self) -> bool {
        self.event_property.is_some()
    }
}

/// Ordered set of properties describing the events of a stream.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSchema {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub event_properties: Vec<EventProperty>,
}

impl EventSchema {
    /// Finds a top-level property by its runtime name.
    pub fn property(&self, runtime_name: &str) -> Option<&EventProperty> {
        self.event_properties
            .iter()
            .find(|property| property.runtime_name.as_deref() == Some(runtime_name))
    }

    /// Runtime names of all top-level properties, in schema order.
    pub fn runtime_names(&self) -> Vec<&str> {
        self.event_properties
            .iter()
            .filter_map(|property| property.runtime_name.as_deref())
            .collect()
    }
}

/// Kind of a static (configuration) property of a pipeline element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StaticPropertyType {
    AnyStaticProperty,
    CodeInputStaticProperty,
    CollectionStaticProperty,
    ColorPickerStaticProperty,
    DomainStaticProperty,
    FreeTextStaticProperty,
    FileStaticProperty,
    MappingPropertyUnary,
    MappingPropertyNary,
    MatchingStaticProperty,
    OneOfStaticProperty,
    RuntimeResolvableAnyStaticProperty,
    RuntimeResolvableGroupStaticProperty,
    RuntimeResolvableOneOfStaticProperty,
    RuntimeResolvableTreeInputStaticProperty,
    StaticPropertyGroup,
    StaticPropertyAlternatives,
    StaticPropertyAlternative,
    SecretStaticProperty,
    SlideToggleStaticProperty,
}

/// A configuration option of a pipeline element, such as a text field or a
/// selection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaticProperty {
    #[serde(
        default,
        deserialize_with = "super::null_as_default",
        skip_serializing_if = "std::ops::Not::not"
    )]
    pub optional: bool,
    pub static_property_type: StaticPropertyType,
    pub index: i32,
    pub label: String,
    pub description: String,
    pub internal_name: String,
    pub predefined: bool,
    #[serde(rename = "@class")]
    pub class: String,
}

/// Generic success/failure message returned by mutating endpoints.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseMessage {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_name: Option<String>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub notifications: Vec<Notification>,
}

/// One entry of a [`ResponseMessage`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<NotificationDescription>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_information: Option<String>,
}

/// Notification description, which the API sends in several shapes.
///
/// Decoding picks the first variant that fits, so `Raw` only ever holds
/// shapes the other variants cannot: build values through
/// [`NotificationDescription::from`] to keep that invariant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NotificationDescription {
    Text(String),
    Lines(Vec<String>),
    /// Any shape other than a string or a list of strings.
    Raw(Value),
}

impl From<Value> for NotificationDescription {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => Self::Text(text),
            Value::Array(items) if items.iter().all(Value::is_string) => Self::Lines(
                items
                    .into_iter()
                    .filter_map(|item| match item {
                        Value::String(line) => Some(line),
                        _ => None,
                    })
                    .collect(),
            ),
            other => Self::Raw(other),
        }
    }
}

impl NotificationDescription {
    /// Renders the description as plain text; raw values are printed as JSON.
    pub fn to_text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Lines(lines) => lines.join("\n"),
            Self::Raw(value) => value.to_string(),
        }
    }
}
