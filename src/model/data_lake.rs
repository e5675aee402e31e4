use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::EventSchema;

/// Metadata of one measurement stored in the data lake.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataLakeMeasure {
    #[serde(rename = "@class", default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    pub element_id: String,
    pub measure_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp_field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_schema: Option<EventSchema>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pipeline_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pipeline_name: Option<String>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub pipeline_is_running: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_version: Option<String>,
    #[serde(rename = "_rev", default, skip_serializing_if = "Option::is_none")]
    pub rev: Option<String>,
}

impl DataLakeMeasure {
    /// Runtime name of the timestamp field without its stream prefix.
    ///
    /// The API qualifies the field as `s0::timestamp`; this returns
    /// `timestamp`.
    pub fn timestamp_runtime_name(&self) -> Option<&str> {
        self.timestamp_field
            .as_deref()
            .map(|field| field.rsplit_once("::").map_or(field, |(_, name)| name))
    }
}

/// Result of a data lake query.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpQueryResult {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub total: i64,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub headers: Vec<String>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub all_data_series: Vec<DataSeries>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_index: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sp_query_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub for_id: Option<String>,
}

impl SpQueryResult {
    /// Flattens all series into header-keyed records, in series order.
    pub fn records(&self) -> Vec<Map<String, Value>> {
        self.all_data_series
            .iter()
            .flat_map(DataSeries::records)
            .collect()
    }
}

/// One series of a query result; grouped queries return one series per tag set.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSeries {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub total: i64,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub rows: Vec<Vec<Value>>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub headers: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<BTreeMap<String, String>>,
}

impl DataSeries {
    /// Pairs every row with the series headers.
    ///
    /// Cells beyond the header count are dropped.
    pub fn records(&self) -> Vec<Map<String, Value>> {
        self.rows
            .iter()
            .map(|row| self.headers.iter().cloned().zip(row.iter().cloned()).collect())
            .collect()
    }

    /// Values of one column, or `None` when the header is unknown.
    pub fn column(&self, header: &str) -> Option<Vec<&Value>> {
        let position = self.headers.iter().position(|name| name == header)?;
        Some(self.rows.iter().filter_map(|row| row.get(position)).collect())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{DataLakeMeasure, SpQueryResult};

    #[test]
    fn decodes_measure_metadata() {
        let measure: DataLakeMeasure = serde_json::from_value(json!({
            "elementId": "m-1",
            "measureName": "flowrate",
            "timestampField": "s0::timestamp",
            "eventSchema": {"eventProperties": []},
            "pipelineIsRunning": true,
            "schemaVersion": "1.1",
            "_rev": "3-abc"
        }))
        .expect("deserializes");

        assert_eq!(measure.measure_name, "flowrate");
        assert_eq!(measure.timestamp_runtime_name(), Some("timestamp"));
        assert_eq!(measure.rev.as_deref(), Some("3-abc"));
        assert!(measure.pipeline_is_running);

        let value = serde_json::to_value(&measure).expect("serializes");
        assert!(value.get("pipelineId").is_none());
        assert_eq!(value["_rev"], "3-abc");
    }

    #[test]
    fn missing_measure_name_is_rejected() {
        let result = serde_json::from_value::<DataLakeMeasure>(json!({"elementId": "m-1"}));
        assert!(result.is_err());
    }

    #[test]
    fn series_rows_map_to_records_and_columns() {
        let result: SpQueryResult = serde_json::from_value(json!({
            "total": 2,
            "headers": ["time", "mass_flow"],
            "allDataSeries": [{
                "total": 2,
                "rows": [[1_700_000_000_000_i64, 1.5], [1_700_000_001_000_i64, 2.25]],
                "headers": ["time", "mass_flow"],
                "tags": null
            }],
            "spQueryStatus": "OK",
            "forId": "flowrate"
        }))
        .expect("deserializes");

        let records = result.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1]["mass_flow"], json!(2.25));

        let series = &result.all_data_series[0];
        assert_eq!(series.tags, None);
        assert_eq!(
            series.column("time"),
            Some(vec![&json!(1_700_000_000_000_i64), &json!(1_700_000_001_000_i64)])
        );
        assert_eq!(series.column("unknown"), None);
    }

    #[test]
    fn explicit_nulls_decode_as_empty_values() {
        let result: SpQueryResult = serde_json::from_value(json!({
            "total": null,
            "headers": null,
            "allDataSeries": [{"total": null, "rows": null, "headers": null}]
        }))
        .expect("deserializes");

        assert_eq!(result.total, 0);
        assert!(result.headers.is_empty());
        assert!(result.records().is_empty());
        assert_eq!(result.all_data_series[0].column("time"), None);

        let measure: DataLakeMeasure = serde_json::from_value(json!({
            "elementId": "m-1",
            "measureName": "flowrate",
            "pipelineIsRunning": null
        }))
        .expect("deserializes");
        assert!(!measure.pipeline_is_running);
    }
}
