use super::EndpointContext;
use crate::model::Versions;
use crate::{ApiPath, RequestError};

/// Access to installation metadata.
pub trait VersionApi {
    /// Reports the backend version of the installation.
    fn versions(&self) -> Result<Versions, RequestError>;
}

/// [`VersionApi`] bound to a [`crate::StreamPipesClient`].
#[derive(Clone, Copy, Debug)]
pub struct VersionEndpoint<'a> {
    context: EndpointContext<'a>,
}

impl<'a> VersionEndpoint<'a> {
    pub(crate) fn new(context: EndpointContext<'a>) -> Self {
        Self { context }
    }
}

impl VersionApi for VersionEndpoint<'_> {
    fn versions(&self) -> Result<Versions, RequestError> {
        let url = self
            .context
            .url(&ApiPath::new(["api", "v2", "info", "versions"]));
        self.context.executor().get(&url)
    }
}
