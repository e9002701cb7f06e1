//! Postal code lookup used when registering customers

use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::errors::AddressErr;

/// Default address service
pub const DEFAULT_POSTAL_API_URL: &str = "https://viacep.com.br/ws";

/// Address resolved from a postal code
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PostalAddress {
    /// street name
    #[serde(rename = "logradouro")]
    pub street: String,
    /// neighborhood
    #[serde(rename = "bairro")]
    pub neighborhood: String,
    /// city name
    #[serde(rename = "localidade")]
    pub city: String,
    /// two letter state code
    #[serde(rename = "uf")]
    pub state: String,
}

impl PostalAddress {
    /// Full address line, `S/N` is used when `number` is empty
    pub fn with_number(&self, number: &str) -> String {
        let number = match number.trim() {
            "" => "S/N",
            n => n,
        };
        format!(
            "{}, {} - {} - {}/{}",
            self.street, number, self.neighborhood, self.city, self.state
        )
    }
}

/// Something that can turn postal code into [`PostalAddress`]
#[allow(async_fn_in_trait)]
pub trait AddressLookup {
    /// Resolve `postal_code`
    async fn lookup(&self, postal_code: &str) -> Result<PostalAddress, AddressErr>;
}

/// Keep only digits of postal code. It must have exactly 8 of them.
pub fn normalize_postal_code(postal_code: &str) -> Result<String, AddressErr> {
    let digits: String = postal_code.chars().filter(char::is_ascii_digit).collect();
    if digits.len() != 8 {
        return Err(AddressErr::InvalidPostalCode);
    }
    Ok(digits)
}

// unknown postal codes are answered with 200 and `{"erro": true}`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ViaCepResponse {
    Found(PostalAddress),
    Missing {
        #[allow(dead_code)]
        erro: serde_json::Value,
    },
}

/// HTTP client of ViaCEP compatible address service
#[derive(Debug, Clone)]
pub struct ViaCep {
    base_url: String,
    http: reqwest::Client,
}

impl ViaCep {
    /// Client for service at `base_url` with request `timeout`
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, AddressErr> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            http,
        })
    }

    fn url_for(&self, postal_code: &str) -> String {
        format!("{}/{}/json", self.base_url, postal_code)
    }
}

impl AddressLookup for ViaCep {
    async fn lookup(&self, postal_code: &str) -> Result<PostalAddress, AddressErr> {
        let postal_code = normalize_postal_code(postal_code)?;
        let url = self.url_for(&postal_code);
        debug!(%url, "address lookup");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "address lookup failed");
            return Err(AddressErr::Status(status.as_u16()));
        }

        match response.json::<ViaCepResponse>().await? {
            ViaCepResponse::Found(address) => Ok(address),
            ViaCepResponse::Missing { .. } => Err(AddressErr::NotFound),
        }
    }
}
