use std::fmt;

use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::de::IgnoredAny;

use super::EndpointContext;
use crate::model::{DataLakeMeasure, SpQueryResult};
use crate::{ApiPath, RequestError};

const DEFAULT_LIMIT: u32 = 1000;

/// Access to measurements stored in the StreamPipes data lake.
pub trait DataLakeMeasureApi {
    /// Lists metadata of all stored measurements.
    fn all(&self) -> Result<Vec<DataLakeMeasure>, RequestError>;

    /// Queries the stored events of `measurement`.
    fn get_series(
        &self,
        measurement: &str,
        query: &MeasurementQuery,
    ) -> Result<SpQueryResult, RequestError>;

    /// Fetches the metadata of one measurement by element id.
    fn get_measure(&self, element_id: &str) -> Result<DataLakeMeasure, RequestError>;

    /// Removes all stored events of `measurement`, keeping its metadata.
    fn clear_measurement(&self, measurement: &str) -> Result<(), RequestError>;

    /// Deletes the metadata of one measurement by element id.
    fn delete_measure(&self, element_id: &str) -> Result<(), RequestError>;
}

/// [`DataLakeMeasureApi`] bound to a [`crate::StreamPipesClient`].
#[derive(Clone, Copy, Debug)]
pub struct DataLakeMeasureEndpoint<'a> {
    context: EndpointContext<'a>,
}

impl<'a> DataLakeMeasureEndpoint<'a> {
    pub(crate) fn new(context: EndpointContext<'a>) -> Self {
        Self { context }
    }

    /// Path of the measurement collection, `api/v4/datalake/measurements`.
    pub fn measurements_path() -> ApiPath {
        ApiPath::new(["api", "v4", "datalake", "measurements"])
    }

    fn measure_path(element_id: &str) -> ApiPath {
        ApiPath::new(["api", "v4", "datalake", "measure", element_id])
    }

    /// Absolute URL of the measurement collection.
    pub fn measurements_url(&self) -> String {
        self.context.url(&Self::measurements_path())
    }
}

impl DataLakeMeasureApi for DataLakeMeasureEndpoint<'_> {
    fn all(&self) -> Result<Vec<DataLakeMeasure>, RequestError> {
        self.context.executor().get(&self.measurements_url())
    }

    fn get_series(
        &self,
        measurement: &str,
        query: &MeasurementQuery,
    ) -> Result<SpQueryResult, RequestError> {
        let pairs = query.to_query_pairs()?;
        let url = self
            .context
            .url(&Self::measurements_path().join(measurement));
        self.context
            .executor()
            .execute_with_query::<(), _>(Method::GET, &url, &pairs, None)
    }

    fn get_measure(&self, element_id: &str) -> Result<DataLakeMeasure, RequestError> {
        let url = self.context.url(&Self::measure_path(element_id));
        self.context.executor().get(&url)
    }

    fn clear_measurement(&self, measurement: &str) -> Result<(), RequestError> {
        let url = self
            .context
            .url(&Self::measurements_path().join(measurement));
        self.context.executor().delete::<IgnoredAny>(&url).map(|_| ())
    }

    fn delete_measure(&self, element_id: &str) -> Result<(), RequestError> {
        let url = self.context.url(&Self::measure_path(element_id));
        self.context.executor().delete::<IgnoredAny>(&url).map(|_| ())
    }
}

/// Sort order of query results.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order {
    Asc,
    Desc,
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => f.write_str("ASC"),
            Self::Desc => f.write_str("DESC"),
        }
    }
}

/// Query options for [`DataLakeMeasureApi::get_series`].
///
/// At most 1000 records are requested unless [`Self::with_limit`] or
/// [`Self::without_limit`] says otherwise. Dates are sent as unix
/// timestamps in milliseconds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MeasurementQuery {
    columns: Vec<String>,
    start_date: Option<DateTime<Utc>>,
    end_date: Option<DateTime<Utc>>,
    limit: Option<u32>,
    offset: Option<u32>,
    order: Option<Order>,
    page: Option<u32>,
}

impl Default for MeasurementQuery {
    fn default() -> Self {
        Self {
            columns: Vec::new(),
            start_date: None,
            end_date: None,
            limit: Some(DEFAULT_LIMIT),
            offset: None,
            order: None,
            page: None,
        }
    }
}

impl MeasurementQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the result to the given columns, for example `time` and `value`.
    #[must_use]
    pub fn with_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Only returns events at or after `start`.
    #[must_use]
    pub fn with_start_date(mut self, start: DateTime<Utc>) -> Self {
        self.start_date = Some(start);
        self
    }

    /// Only returns events at or before `end`.
    #[must_use]
    pub fn with_end_date(mut self, end: DateTime<Utc>) -> Self {
        self.end_date = Some(end);
        self
    }

    /// Maximum number of records; must be at least 1.
    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Leaves the record limit to the server.
    #[must_use]
    pub fn without_limit(mut self) -> Self {
        self.limit = None;
        self
    }

    #[must_use]
    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    #[must_use]
    pub fn with_order(mut self, order: Order) -> Self {
        self.order = Some(order);
        self
    }

    /// Page number for paged queries; must be at least 1.
    #[must_use]
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Validates the options and renders them as query pairs.
    ///
    /// Unset options are left out.
    pub fn to_query_pairs(&self) -> Result<Vec<(&'static str, String)>, RequestError> {
        let mut pairs = Vec::new();

        if !self.columns.is_empty() {
            if let Some(invalid) = self.columns.iter().find(|column| !is_column_name(column)) {
                return Err(RequestError::InvalidQuery(format!(
                    "column '{invalid}' may only contain letters, digits and underscores"
                )));
            }
            pairs.push(("columns", self.columns.join(",")));
        }
        if let Some(end) = self.end_date {
            pairs.push(("endDate", end.timestamp_millis().to_string()));
        }
        if let Some(limit) = self.limit {
            if limit < 1 {
                return Err(RequestError::InvalidQuery(
                    "limit must be at least 1".to_owned(),
                ));
            }
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(offset) = self.offset {
            pairs.push(("offset", offset.to_string()));
        }
        if let Some(order) = self.order {
            pairs.push(("order", order.to_string()));
        }
        if let Some(page) = self.page {
            if page < 1 {
                return Err(RequestError::InvalidQuery(
                    "page must be at least 1".to_owned(),
                ));
            }
            pairs.push(("page", page.to_string()));
        }
        if let Some(start) = self.start_date {
            pairs.push(("startDate", start.timestamp_millis().to_string()));
        }

        Ok(pairs)
    }
}

fn is_column_name(column: &str) -> bool {
    !column.is_empty()
        && column
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;
    use mockito::Matcher;

    use super::{DataLakeMeasureApi, MeasurementQuery, Order};
    use crate::{ClientConfig, RequestError, StreamPipesClient};

    fn client_for(server: &mockito::Server) -> StreamPipesClient {
        let (host, port) = server
            .host_with_port()
            .rsplit_once(':')
            .map(|(host, port)| (host.to_owned(), port.to_owned()))
            .expect("host and port");
        StreamPipesClient::new(ClientConfig::new(host, port).with_https_disabled(true))
            .expect("valid config")
    }

    #[test]
    fn default_query_only_sends_limit() {
        let pairs = MeasurementQuery::new().to_query_pairs().expect("valid");
        assert_eq!(pairs, vec![("limit", "1000".to_owned())]);
        assert!(
            MeasurementQuery::new()
                .without_limit()
                .to_query_pairs()
                .expect("valid")
                .is_empty()
        );
    }

    #[test]
    fn query_pairs_use_api_names_and_unix_millis() {
        let start = DateTime::from_timestamp_millis(1_672_531_200_000).expect("valid timestamp");
        let end = DateTime::from_timestamp_millis(1_672_617_600_000).expect("valid timestamp");
        let pairs = MeasurementQuery::new()
            .with_columns(["time", "mass_flow"])
            .with_start_date(start)
            .with_end_date(end)
            .with_limit(10)
            .with_offset(5)
            .with_order(Order::Desc)
            .with_page(2)
            .to_query_pairs()
            .expect("valid");

        assert_eq!(
            pairs,
            vec![
                ("columns", "time,mass_flow".to_owned()),
                ("endDate", "1672617600000".to_owned()),
                ("limit", "10".to_owned()),
                ("offset", "5".to_owned()),
                ("order", "DESC".to_owned()),
                ("page", "2".to_owned()),
                ("startDate", "1672531200000".to_owned()),
            ]
        );
    }

    #[test]
    fn rejects_invalid_query_options() {
        let cases = [
            MeasurementQuery::new().with_columns(["time", "mass flow"]),
            MeasurementQuery::new().with_columns(["time", ""]),
            MeasurementQuery::new().with_limit(0),
            MeasurementQuery::new().with_page(0),
        ];
        for query in cases {
            assert!(
                matches!(query.to_query_pairs(), Err(RequestError::InvalidQuery(_))),
                "{query:?} should be rejected"
            );
        }
    }

    #[test]
    fn lists_all_measurements() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/api/v4/datalake/measurements")
            .with_status(200)
            .with_body(
                r#"[{"elementId":"m-1","measureName":"flowrate"},
                    {"elementId":"m-2","measureName":"pressure"}]"#,
            )
            .create();

        let client = client_for(&server);
        let measures = client.data_lake_measure_api().all().expect("request succeeds");

        let names: Vec<_> = measures.iter().map(|m| m.measure_name.as_str()).collect();
        assert_eq!(names, vec!["flowrate", "pressure"]);
        mock.assert();
    }

    #[test]
    fn queries_series_with_parameters() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/api/v4/datalake/measurements/flowrate")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("limit".into(), "2".into()),
                Matcher::UrlEncoded("order".into(), "DESC".into()),
            ]))
            .with_status(200)
            .with_body(
                r#"{"total":1,"headers":["time","value"],
                    "allDataSeries":[{"total":1,"rows":[[1,0.5]],"headers":["time","value"]}]}"#,
            )
            .create();

        let client = client_for(&server);
        let result = client
            .data_lake_measure_api()
            .get_series(
                "flowrate",
                &MeasurementQuery::new().with_limit(2).with_order(Order::Desc),
            )
            .expect("request succeeds");

        assert_eq!(result.total, 1);
        assert_eq!(result.records().len(), 1);
        mock.assert();
    }

    #[test]
    fn invalid_query_is_rejected_before_sending() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", Matcher::Any)
            .expect(0)
            .create();

        let client = client_for(&server);
        let error = client
            .data_lake_measure_api()
            .get_series("flowrate", &MeasurementQuery::new().with_limit(0))
            .expect_err("limit 0 is invalid");

        assert!(matches!(error, RequestError::InvalidQuery(_)));
        mock.assert();
    }

    #[test]
    fn measure_lookup_and_deletion_use_measure_path() {
        let mut server = mockito::Server::new();
        let get = server
            .mock("GET", "/api/v4/datalake/measure/m-1")
            .with_status(200)
            .with_body(r#"{"elementId":"m-1","measureName":"flowrate"}"#)
            .create();
        let delete = server
            .mock("DELETE", "/api/v4/datalake/measure/m-1")
            .with_status(200)
            .with_body(r#"{"success":true,"notifications":[]}"#)
            .create();
        let clear = server
            .mock("DELETE", "/api/v4/datalake/measurements/flowrate")
            .with_status(200)
            .create();

        let client = client_for(&server);
        let api = client.data_lake_measure_api();

        let measure = api.get_measure("m-1").expect("request succeeds");
        assert_eq!(measure.element_id, "m-1");
        api.delete_measure("m-1").expect("delete succeeds");
        api.clear_measurement("flowrate").expect("clear succeeds");

        get.assert();
        delete.assert();
        clear.assert();
    }

    #[test]
    fn server_error_is_propagated_unchanged() {
        let mut server = mockito::Server::new();
        server
            .mock("DELETE", "/api/v4/datalake/measurements/flowrate")
            .with_status(500)
            .with_body("storage unavailable")
            .create();

        let client = client_for(&server);
        let error = client
            .data_lake_measure_api()
            .clear_measurement("flowrate")
            .expect_err("500 must fail");

        match error {
            RequestError::Status { status, body } => {
                assert_eq!(status.as_u16(), 500);
                assert_eq!(body, "storage unavailable");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
