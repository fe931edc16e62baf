//! # Thin async client for the Porkbun DNS API.
//!
//! Implements the [Porkbun API] calls needed to check connectivity, list DNS
//! records, create a DNS record and delete one by its ID.
//!
//! Every call returns the decoded response body, whatever the HTTP status was.
//! Whether the API accepted the call is reported in the `status` field of the
//! response, which is left to the caller to check.
//!
//! Calls are cancelled by dropping their future, for example through
//! `tokio::time::timeout`. A per-request timeout can also be set on the
//! [ClientBuilder].
//!
//! ## Examples
//!
//! ```no_run
//! use porkbun::Client;
//! use porkbun::record::{NewDnsRecord, Type};
//!
//! # async fn run() -> Result<(), porkbun::ClientError> {
//! let client = Client::new("<SECRETAPIKEY>", "<APIKEY>");
//!
//! let ping = client.ping().await?;
//! assert!(ping.is_success());
//!
//! let record = NewDnsRecord {
//!     name: "www".to_string(),
//!     type_: Type::A.into(),
//!     content: ping.your_ip,
//!     ttl: "600".to_string(),
//!     prio: "0".to_string(),
//! };
//! let created = client.create_dns_record("example.com", &record).await?;
//! println!("created record {}", created.id);
//! # Ok(())
//! # }
//! ```
//!
//! [Porkbun API]: https://porkbun.com/api/json/v3/documentation

mod client;
mod errors;
mod payload;
pub mod record;
mod utils;

pub use client::*;
pub use errors::*;
pub(crate) use payload::*;
