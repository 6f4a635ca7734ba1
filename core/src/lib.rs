//! Synchronous client for the countries REST API.
//!
//! # Overview
//! Looks up country records (name, codes, capital, currencies, languages,
//! borders, ...) by name, ISO code, capital, currency, language, calling
//! code, region or regional bloc, optionally asking the server for a sparse
//! record via `fields`.
//!
//! # Design
//! - `CountriesClient` is stateless and does no I/O: `build_request`
//!   produces an `HttpRequest`, `parse_countries` consumes an `HttpResponse`.
//! - `Transport` executes requests; `UreqTransport` is the blocking default.
//! - `HttpClient` glues the two together with one method per lookup.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.
//!
//! ```no_run
//! use countries_core::HttpClient;
//!
//! let client = HttpClient::default();
//! let countries = client.by_currency("cop", &["name", "capital"])?;
//! for country in countries {
//!     println!("{:?} {:?}", country.name, country.capital);
//! }
//! # Ok::<(), countries_core::ApiError>(())
//! ```

pub mod client;
pub mod config;
pub mod countries;
pub mod error;
pub mod http;
pub mod query;
pub mod transport;
pub mod types;

pub use client::CountriesClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use countries::HttpClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use query::Lookup;
pub use transport::{Transport, UreqTransport};
pub use types::{Country, Currency, Language, RegionalBloc};
