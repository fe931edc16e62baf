//! DNS records and the response envelopes of the Porkbun API.
//!
//! The API encodes numeric-looking values such as the TTL, the priority and
//! the record ID as strings. They are kept as strings here so that a value
//! read from the API can be sent back unchanged.

use serde::{Deserialize, Serialize};
use strum_macros::{EnumString, IntoStaticStr};

/// Value of the `status` field on a successful call.
pub const STATUS_SUCCESS: &str = "SUCCESS";

/// Possible types a DNS record can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Type {
    A,
    Mx,
    Cname,
    Alias,
    Txt,
    Ns,
    Aaaa,
    Srv,
    Tlsa,
    Caa,
    Https,
    Svcb,
}

impl Type {
    /// Gets the string representation of the type.
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

impl From<Type> for String {
    fn from(value: Type) -> Self {
        value.as_str().to_string()
    }
}

/// A DNS record, as returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsRecord {
    #[serde(default, deserialize_with = "deserialize_to_string")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_to_string")]
    pub name: String,
    #[serde(rename = "type", default, deserialize_with = "deserialize_to_string")]
    pub type_: String,
    #[serde(default, deserialize_with = "deserialize_to_string")]
    pub content: String,
    #[serde(default, deserialize_with = "deserialize_to_string")]
    pub ttl: String,
    #[serde(default, deserialize_with = "deserialize_to_string")]
    pub prio: String,
    #[serde(default, deserialize_with = "deserialize_to_string")]
    pub notes: String,
}

impl DnsRecord {
    /// Parses the record's type.
    pub fn record_type(&self) -> Result<Type, strum::ParseError> {
        self.type_.parse()
    }
}

/// A DNS record to be created. The ID is assigned by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDnsRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub type_: String,
    pub content: String,
    pub ttl: String,
    pub prio: String,
}

/// Response of the `ping` call.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PingResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    /// The caller's public IP address, as seen by the API.
    #[serde(default)]
    pub your_ip: String,
}

/// Response of both record listing calls.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RetrieveDnsRecordsResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "deserialize_to_records")]
    pub records: Vec<DnsRecord>,
}

/// Response of the record creation call, with the ID of the new record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateDnsRecordResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "deserialize_to_i64")]
    pub id: i64,
}

/// Response of the record deletion call.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeleteDnsRecordResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl PingResponse {
    /// Returns true if the API reported `SUCCESS`.
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }
}

impl RetrieveDnsRecordsResponse {
    /// Returns true if the API reported `SUCCESS`.
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }
}

impl CreateDnsRecordResponse {
    /// Returns true if the API reported `SUCCESS`.
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }
}

impl DeleteDnsRecordResponse {
    /// Returns true if the API reported `SUCCESS`.
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }
}

/// Helper type for deserializing a string or a number to its textual form.
#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(serde_json::Number),
}

/// Helper type for deserializing a string or an i64 to an i64.
#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrI64 {
    I64(i64),
    String(String),
}

/// Deserializes a string, a number or null into a string.
///
/// Numbers keep the text they were sent as, null becomes the empty string.
fn deserialize_to_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let string_or_number = Option::<StringOrNumber>::deserialize(deserializer)?;
    Ok(match string_or_number {
        Some(StringOrNumber::String(s)) => s,
        Some(StringOrNumber::Number(n)) => n.to_string(),
        None => String::new(),
    })
}

/// Deserializes a list of records, with null being an empty list.
fn deserialize_to_records<'de, D>(deserializer: D) -> Result<Vec<DnsRecord>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<DnsRecord>>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_to_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let string_or_i64 = StringOrI64::deserialize(deserializer)?;
    Ok(match string_or_i64 {
        StringOrI64::I64(i) => i,
        StringOrI64::String(s) => s.parse().map_err(D::Error::custom)?,
    })
}
