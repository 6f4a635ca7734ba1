//! Blocking, one-call-per-lookup API over `CountriesClient` + `Transport`.
//!
//! Each method builds the request, executes it and parses the response.
//! `fields` restricts the records to the named members; pass `&[]` for
//! full records.

use tracing::debug;

use crate::client::CountriesClient;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::query::Lookup;
use crate::transport::{Transport, UreqTransport};
use crate::types::Country;

/// Countries API client that performs the HTTP round-trip itself.
#[derive(Debug, Clone)]
pub struct HttpClient<T = UreqTransport> {
    client: CountriesClient,
    transport: T,
}

impl HttpClient<UreqTransport> {
    /// Client for `base_url` with no request timeout.
    pub fn new(base_url: &str) -> Self {
        Self::with_transport(base_url, UreqTransport::default())
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::with_transport(&config.base_url, UreqTransport::new(config.timeout))
    }
}

impl Default for HttpClient<UreqTransport> {
    fn default() -> Self {
        Self::from_config(&ClientConfig::default())
    }
}

impl<T: Transport> HttpClient<T> {
    pub fn with_transport(base_url: &str, transport: T) -> Self {
        Self {
            client: CountriesClient::new(base_url),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    /// Run any lookup. The named methods below are shorthands for this.
    pub fn fetch(&self, lookup: Lookup<'_>, fields: &[&str]) -> Result<Vec<Country>, ApiError> {
        let request = self.client.build_request(lookup, fields)?;
        let response = self.transport.execute(&request)?;
        let countries = self.client.parse_countries(response)?;
        debug!(category = lookup.category(), count = countries.len(), "lookup complete");
        Ok(countries)
    }

    /// Every country.
    pub fn all(&self, fields: &[&str]) -> Result<Vec<Country>, ApiError> {
        self.fetch(Lookup::All, fields)
    }

    /// Countries whose name or native name contains `name`.
    pub fn by_name(&self, name: &str, fields: &[&str]) -> Result<Vec<Country>, ApiError> {
        self.fetch(Lookup::Name(name), fields)
    }

    /// Countries whose full name is exactly `name`.
    pub fn by_full_name(&self, name: &str, fields: &[&str]) -> Result<Vec<Country>, ApiError> {
        self.fetch(Lookup::FullName(name), fields)
    }

    /// Country by ISO 3166-1 alpha-2 or alpha-3 code.
    pub fn by_code(&self, code: &str, fields: &[&str]) -> Result<Vec<Country>, ApiError> {
        self.fetch(Lookup::Code(code), fields)
    }

    /// Countries for several ISO 3166-1 codes in one request.
    ///
    /// Fails with `ApiError::EmptyCodes`, without calling the API, when
    /// `codes` is empty.
    pub fn by_codes(&self, codes: &[&str], fields: &[&str]) -> Result<Vec<Country>, ApiError> {
        self.fetch(Lookup::Codes(codes), fields)
    }

    pub fn by_capital(&self, capital: &str, fields: &[&str]) -> Result<Vec<Country>, ApiError> {
        self.fetch(Lookup::Capital(capital), fields)
    }

    /// Countries using the ISO 4217 `currency`.
    pub fn by_currency(&self, currency: &str, fields: &[&str]) -> Result<Vec<Country>, ApiError> {
        self.fetch(Lookup::Currency(currency), fields)
    }

    /// Countries speaking the ISO 639-1 `language`.
    pub fn by_language(&self, language: &str, fields: &[&str]) -> Result<Vec<Country>, ApiError> {
        self.fetch(Lookup::Language(language), fields)
    }

    pub fn by_calling_code(
        &self,
        calling_code: &str,
        fields: &[&str],
    ) -> Result<Vec<Country>, ApiError> {
        self.fetch(Lookup::CallingCode(calling_code), fields)
    }

    pub fn by_region(&self, region: &str, fields: &[&str]) -> Result<Vec<Country>, ApiError> {
        self.fetch(Lookup::Region(region), fields)
    }

    pub fn by_regional_bloc(
        &self,
        regional_bloc: &str,
        fields: &[&str],
    ) -> Result<Vec<Country>, ApiError> {
        self.fetch(Lookup::RegionalBloc(regional_bloc), fields)
    }
}
