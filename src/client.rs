use std::fmt;
use std::time::Duration;

use log::{debug, warn};
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use url::Url;

use crate::record::{
    CreateDnsRecordResponse, DeleteDnsRecordResponse, NewDnsRecord, PingResponse,
    RetrieveDnsRecordsResponse,
};
use crate::utils::path_segment;
use crate::{ClientBuilderError, ClientError, Operation, Payload};

/// The API endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "https://api.porkbun.com/api/json/v3/";

fn default_endpoint() -> Url {
    Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL")
}

/// Builder for a [Client] that handles default values.
pub struct ClientBuilder {
    endpoint: Option<Url>,
    apikey: Option<String>,
    secretapikey: Option<String>,
    timeout: Option<Duration>,
    client: Option<reqwest::Client>,
}

impl ClientBuilder {
    fn new() -> Self {
        Self {
            endpoint: None,
            apikey: None,
            secretapikey: None,
            timeout: None,
            client: None,
        }
    }

    /// Sets the API endpoint to the one given.
    pub fn endpoint(mut self, endpoint: &Url) -> Self {
        self.endpoint = Some(endpoint.clone());
        self
    }

    /// In the case that `endpoint` is the Some variant, sets the API endpoint to it.
    pub fn endpoint_if_some(mut self, endpoint: Option<&Url>) -> Self {
        if let Some(endpoint) = endpoint {
            self.endpoint = Some(endpoint.clone());
        }
        self
    }

    /// Sets the API key to the one given.
    pub fn apikey(mut self, apikey: &str) -> Self {
        self.apikey = Some(apikey.to_string());
        self
    }

    /// Sets the secret API key to the one given.
    pub fn secretapikey(mut self, secretapikey: &str) -> Self {
        self.secretapikey = Some(secretapikey.to_string());
        self
    }

    /// Sets a timeout covering each whole request, from connecting until the
    /// response body has been read.
    ///
    /// Can't be combined with [Self::http_client], set the timeout on the
    /// supplied client instead.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Uses the given HTTP client instead of building a new one.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Builds a [Client] from the builder.
    ///
    /// In the case that no API endpoint is set, [DEFAULT_ENDPOINT] is used.
    ///
    /// # Errors
    /// - `MissingField` if a required field isn't added to the builder.
    /// - `InvalidEndpoint` if the endpoint can't have path segments appended.
    /// - `TimeoutWithHttpClient` if both a timeout and an HTTP client are set.
    /// - `Reqwest` if the HTTP client fails to build.
    pub fn build(self) -> Result<Client, ClientBuilderError> {
        let endpoint = self.endpoint.unwrap_or_else(default_endpoint);
        if endpoint.cannot_be_a_base() {
            return Err(ClientBuilderError::InvalidEndpoint(endpoint));
        }
        let apikey = self
            .apikey
            .ok_or_else(|| ClientBuilderError::MissingField("apikey".to_string()))?;
        let secretapikey = self
            .secretapikey
            .ok_or_else(|| ClientBuilderError::MissingField("secretapikey".to_string()))?;
        let client = match (self.client, self.timeout) {
            (Some(_), Some(_)) => return Err(ClientBuilderError::TimeoutWithHttpClient),
            (Some(client), None) => client,
            (None, Some(timeout)) => reqwest::Client::builder().timeout(timeout).build()?,
            (None, None) => reqwest::Client::new(),
        };

        Ok(Client {
            endpoint,
            apikey,
            secretapikey,
            client,
        })
    }
}

/// API client.
///
/// Cloning is cheap and shares the underlying connection pool.
#[derive(Clone)]
pub struct Client {
    endpoint: Url,
    apikey: String,
    secretapikey: String,
    client: reqwest::Client,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("endpoint", &self.endpoint.as_str())
            .field("apikey", &self.apikey)
            .field("secretapikey", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Creates a new Client talking to [DEFAULT_ENDPOINT].
    ///
    /// The keys aren't checked here, bad keys show up as an `ERROR` status
    /// in the responses.
    pub fn new(secretapikey: &str, apikey: &str) -> Self {
        Self {
            endpoint: default_endpoint(),
            apikey: apikey.to_string(),
            secretapikey: secretapikey.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Returns a builder for a Client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Returns the endpoint requests are sent to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Creates a [Url] from the endpoint and the path segments.
    ///
    /// Each segment is percent-encoded on its own. Empty segments are kept.
    fn build_url(&self, path: &[&str]) -> Url {
        let mut url = self.endpoint.clone();
        url.path_segments_mut()
            .expect("endpoint is checked to be a base URL")
            .pop_if_empty()
            .extend(path);
        url
    }

    /// Returns a payload for sending to the Porkbun API.
    ///
    /// This payload already includes the data necessary for authorization.
    fn payload(&self) -> Payload {
        Payload::new(&self.apikey, &self.secretapikey)
    }

    /// Sends a POST request to the given url with the given payload and
    /// decodes the response body.
    ///
    /// The HTTP status isn't checked, only whether the body decodes.
    async fn send_request<T: DeserializeOwned>(
        &self,
        operation: Operation,
        url: Url,
        payload: Payload,
    ) -> Result<T, ClientError> {
        let body = serde_json::to_vec(&JsonValue::from(payload))
            .map_err(|source| ClientError::Encode { operation, source })?;

        debug!("sending {operation} request to {url}");
        let resp = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|source| ClientError::Request { operation, source })?;

        let status = resp.status();
        let bytes = resp
            .bytes()
            .await
            .map_err(|source| ClientError::Request { operation, source })?;
        debug!("{operation} responded with {status}, {} bytes", bytes.len());
        if !status.is_success() {
            warn!("{operation} responded with {status}, decoding the body anyway");
        }

        serde_json::from_slice(&bytes).map_err(|source| ClientError::Decode { operation, source })
    }

    /// Calls the endpoint that tests if the authorization is correct.
    ///
    /// Also returns the caller's public IP address.
    pub async fn ping(&self) -> Result<PingResponse, ClientError> {
        let url = self.build_url(&["ping"]);

        self.send_request(Operation::Ping, url, self.payload()).await
    }

    /// Retrieves all DNS records of `domain`, in the order the API returns them.
    ///
    /// # Errors
    ///
    /// Will return an `InvalidArgument` error if `domain` contains a `/`.
    pub async fn retrieve_dns_records_by_domain(
        &self,
        domain: &str,
    ) -> Result<RetrieveDnsRecordsResponse, ClientError> {
        let domain = path_segment("domain", domain)?;
        let url = self.build_url(&["dns", "retrieve", domain]);

        self.send_request(Operation::RetrieveDnsRecords, url, self.payload()).await
    }

    /// Retrieves the DNS records of `domain` with the given subdomain and type.
    ///
    /// An empty `subdomain` selects the records on the domain itself.
    ///
    /// # Errors
    ///
    /// Will return an `InvalidArgument` error for the first of `domain`,
    /// `subdomain` and `type_` that contains a `/`.
    pub async fn retrieve_dns_records_by_domain_subdomain_type(
        &self,
        domain: &str,
        subdomain: &str,
        type_: &str,
    ) -> Result<RetrieveDnsRecordsResponse, ClientError> {
        let domain = path_segment("domain", domain)?;
        let subdomain = path_segment("subdomain", subdomain)?;
        let type_ = path_segment("type", type_)?;
        // The API wants the type before the subdomain.
        let url = self.build_url(&["dns", "retrieveByNameType", domain, type_, subdomain]);

        self.send_request(Operation::RetrieveDnsRecordsByNameType, url, self.payload()).await
    }

    /// Creates a DNS record under `domain`.
    ///
    /// Returns the ID the API assigned to the new record.
    ///
    /// # Errors
    ///
    /// Will return an `InvalidArgument` error if `domain` contains a `/`.
    pub async fn create_dns_record(
        &self,
        domain: &str,
        record: &NewDnsRecord,
    ) -> Result<CreateDnsRecordResponse, ClientError> {
        let operation = Operation::CreateDnsRecord;
        let domain = path_segment("domain", domain)?;
        let url = self.build_url(&["dns", "create", domain]);

        let payload = self
            .payload()
            .merge(record)
            .map_err(|source| ClientError::Encode { operation, source })?;

        self.send_request(operation, url, payload).await
    }

    /// Deletes the DNS record of `domain` with the given ID.
    ///
    /// # Errors
    ///
    /// Will return an `InvalidArgument` error if `domain` or `id` contains a
    /// `/`, checking `domain` first.
    pub async fn delete_dns_record_by_domain_id(
        &self,
        domain: &str,
        id: &str,
    ) -> Result<DeleteDnsRecordResponse, ClientError> {
        let domain = path_segment("domain", domain)?;
        let id = path_segment("id", id)?;
        let url = self.build_url(&["dns", "delete", domain, id]);

        self.send_request(Operation::DeleteDnsRecord, url, self.payload()).await
    }
}
