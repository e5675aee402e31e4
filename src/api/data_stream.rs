use super::EndpointContext;
use crate::model::{ResponseMessage, SpDataStream};
use crate::{ApiPath, RequestError};

/// Access to the data streams registered in StreamPipes.
pub trait DataStreamApi {
    /// Lists all streams visible to the authenticated user.
    fn all(&self) -> Result<Vec<SpDataStream>, RequestError>;

    /// Fetches one stream by element id.
    fn get(&self, element_id: &str) -> Result<SpDataStream, RequestError>;

    /// Deletes a stream; the server reports the outcome as a message.
    fn delete(&self, element_id: &str) -> Result<ResponseMessage, RequestError>;
}

/// [`DataStreamApi`] bound to a [`crate::StreamPipesClient`].
#[derive(Clone, Copy, Debug)]
pub struct DataStreamEndpoint<'a> {
    context: EndpointContext<'a>,
}

impl<'a> DataStreamEndpoint<'a> {
    pub(crate) fn new(context: EndpointContext<'a>) -> Self {
        Self { context }
    }

    fn streams_path() -> ApiPath {
        ApiPath::new(["api", "v2", "streams"])
    }
}

impl DataStreamApi for DataStreamEndpoint<'_> {
    fn all(&self) -> Result<Vec<SpDataStream>, RequestError> {
        let url = self.context.url(&Self::streams_path());
        self.context.executor().get(&url)
    }

    fn get(&self, element_id: &str) -> Result<SpDataStream, RequestError> {
        let url = self.context.url(&Self::streams_path().join(element_id));
        self.context.executor().get(&url)
    }

    fn delete(&self, element_id: &str) -> Result<ResponseMessage, RequestError> {
        let url = self.context.url(&Self::streams_path().join(element_id));
        self.context.executor().delete(&url)
    }
}
