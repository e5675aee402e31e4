//! Wire types exchanged with the StreamPipes API.
//!
//! Field names follow the API's JSON contract exactly. Optional fields that
//! are unset are omitted on serialization rather than written as `null`.

use serde::{Deserialize, Deserializer};

mod common;
mod data_lake;
mod data_stream;
mod version;

pub use common::{
    EventProperty, EventSchema, Notification, NotificationDescription, ResponseMessage,
    StaticProperty, StaticPropertyType, ValueSpecification,
};
pub use data_lake::{DataLakeMeasure, DataSeries, SpQueryResult};
pub use data_stream::{
    EventGrounding, SpDataStream, TopicDefinition, TransportFormat, TransportProtocol,
};
pub use version::Versions;

/// Decodes an explicit `null` as the field type's default value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
