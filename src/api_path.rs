/// Ordered list of URL path segments identifying a REST resource.
///
/// Segments are joined verbatim: no escaping or normalization is applied, so
/// callers must supply URL-safe values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiPath {
    segments: Vec<String>,
}

impl ApiPath {
    /// Creates a path from segments in resource-hierarchy order.
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the path extended by one trailing segment.
    #[must_use]
    pub fn join(mut self, segment: impl Into<String>) -> Self {
        self.push(segment);
        self
    }

    /// Appends one trailing segment in place.
    pub fn push(&mut self, segment: impl Into<String>) {
        self.segments.push(segment.into());
    }

    /// Segments in the order they are joined.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Appends every segment to `base_url`, separated by a single `/`.
    ///
    /// A trailing slash on the base is dropped first, so
    /// `build("http://host:8080/")` and `build("http://host:8080")` agree.
    pub fn build(&self, base_url: &str) -> String {
        let base = base_url.trim_end_matches('/');
        let capacity = base.len() + self.segments.iter().map(|s| s.len() + 1).sum::<usize>();

        let mut url = String::with_capacity(capacity);
        url.push_str(base);
        for segment in &self.segments {
            url.push('/');
            url.push_str(segment);
        }
        url
    }
}
