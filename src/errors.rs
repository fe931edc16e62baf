use strum_macros::Display;
use thiserror::Error;
use url::Url;

/// The API operation an error happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Operation {
    #[strum(to_string = "ping")]
    Ping,
    #[strum(to_string = "retrieve DNS records")]
    RetrieveDnsRecords,
    #[strum(to_string = "retrieve DNS records by name and type")]
    RetrieveDnsRecordsByNameType,
    #[strum(to_string = "create DNS record")]
    CreateDnsRecord,
    #[strum(to_string = "delete DNS record")]
    DeleteDnsRecord,
}

#[derive(Error, Debug)]
pub enum ClientError {
    /// A path-segment argument contains a `/`, or is `.` or `..`. Nothing was sent.
    #[error("invalid {argument} given: {value:?}")]
    InvalidArgument {
        argument: &'static str,
        value: String,
    },
    #[error("failed to encode {operation} request")]
    Encode {
        operation: Operation,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to hit {operation} endpoint")]
    Request {
        operation: Operation,
        #[source]
        source: reqwest::Error,
    },
    #[error("failed to decode {operation} response")]
    Decode {
        operation: Operation,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    /// Returns true if the request was aborted by the transport timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, ClientError::Request { source, .. } if source.is_timeout())
    }

    /// Returns the operation the error happened in, if it got that far.
    pub fn operation(&self) -> Option<Operation> {
        match self {
            ClientError::Encode { operation, .. }
            | ClientError::Request { operation, .. }
            | ClientError::Decode { operation, .. } => Some(*operation),
            ClientError::InvalidArgument { .. } => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum ClientBuilderError {
    #[error("missing field: {0}")]
    MissingField(String),
    #[error("endpoint {0} cannot be used as a base URL")]
    InvalidEndpoint(Url),
    #[error("a timeout can't be applied to a supplied HTTP client")]
    TimeoutWithHttpClient,
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
}
