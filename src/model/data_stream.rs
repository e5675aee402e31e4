use serde::{Deserialize, Serialize};

use super::EventSchema;

/// A data stream registered in StreamPipes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpDataStream {
    pub element_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dom: Option<String>,
    #[serde(
        default,
        deserialize_with = "super::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub connected_to: Vec<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub includes_assets: bool,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub includes_locales: bool,
    #[serde(
        default,
        deserialize_with = "super::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub included_assets: Vec<String>,
    #[serde(
        default,
        deserialize_with = "super::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub included_locales: Vec<String>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub internally_managed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_grounding: Option<EventGrounding>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_schema: Option<EventSchema>,
    #[serde(
        default,
        deserialize_with = "super::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub category: Vec<String>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub index: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corresponding_adapter_id: Option<String>,
    #[serde(rename = "_rev", default, skip_serializing_if = "Option::is_none")]
    pub rev: Option<String>,
}

/// How events of a stream are transported and encoded.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventGrounding {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub transport_protocols: Vec<TransportProtocol>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub transport_formats: Vec<TransportFormat>,
}

impl EventGrounding {
    /// The protocol consumers connect to; the API lists it first.
    pub fn primary_protocol(&self) -> Option<&TransportProtocol> {
        self.transport_protocols.first()
    }
}

/// Broker connection details, for example a Kafka or MQTT broker.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportProtocol {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_id: Option<String>,
    pub broker_hostname: String,
    pub topic_definition: TopicDefinition,
    #[serde(rename = "@class", default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub port: i32,
}

/// The broker topic a stream is published on.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicDefinition {
    pub actual_topic_name: String,
    #[serde(rename = "@class", default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
}

/// Serialization format of the events, identified by RDF type URIs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportFormat {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub rdf_type: Vec<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::SpDataStream;

    #[test]
    fn decodes_stream_with_grounding() {
        let stream: SpDataStream = serde_json::from_value(json!({
            "elementId": "sp:spdatastream:abc",
            "name": "Flow Rate",
            "eventGrounding": {
                "transportProtocols": [{
                    "@class": "org.apache.streampipes.model.grounding.KafkaTransportProtocol",
                    "elementId": "tp-1",
                    "brokerHostname": "kafka",
                    "topicDefinition": {
                        "@class": "org.apache.streampipes.model.grounding.SimpleTopicDefinition",
                        "actualTopicName": "org.apache.streampipes.flowrate"
                    },
                    "port": 9092
                }],
                "transportFormats": [{"rdfType": ["http://sepa.event-processing.org/sepa#json"]}]
            },
            "eventSchema": {"eventProperties": []},
            "category": ["SENSOR"],
            "_rev": "1-a"
        }))
        .expect("deserializes");

        let protocol = stream
            .event_grounding
            .as_ref()
            .and_then(|grounding| grounding.primary_protocol())
            .expect("protocol present");
        assert_eq!(protocol.broker_hostname, "kafka");
        assert_eq!(protocol.port, 9092);
        assert_eq!(
            protocol.topic_definition.actual_topic_name,
            "org.apache.streampipes.flowrate"
        );

        let encoded = serde_json::to_string(&stream).expect("serializes");
        let decoded: SpDataStream = serde_json::from_str(&encoded).expect("deserializes");
        assert_eq!(decoded, stream);

        let value = serde_json::to_value(&stream).expect("serializes");
        assert!(value.get("description").is_none());
        assert!(value.get("connectedTo").is_none());
    }

    #[test]
    fn explicit_nulls_decode_as_empty_values() {
        let stream: SpDataStream = serde_json::from_value(json!({
            "elementId": "sp:spdatastream:abc",
            "name": "Flow Rate",
            "connectedTo": null,
            "includesAssets": null,
            "includedLocales": null,
            "category": null,
            "index": null,
            "eventGrounding": {
                "transportProtocols": null,
                "transportFormats": [{"rdfType": null}]
            }
        }))
        .expect("deserializes");

        assert!(stream.connected_to.is_empty());
        assert!(!stream.includes_assets);
        assert!(stream.included_locales.is_empty());
        assert!(stream.category.is_empty());
        assert_eq!(stream.index, 0);

        let grounding = stream.event_grounding.expect("grounding present");
        assert_eq!(grounding.primary_protocol(), None);
        assert!(grounding.transport_formats[0].rdf_type.is_empty());
    }
}
