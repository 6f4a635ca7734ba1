//! Lookup categories and request path construction.
//!
//! # Design
//! Every endpoint of the countries API has the same shape: a category
//! segment, usually one path parameter, and an optional `fields=` list that
//! asks the server for a sparse record. `Lookup` names the category and
//! carries its borrowed parameter; `Lookup::path` renders the path and
//! query string that `CountriesClient` appends to the base URL.

use crate::error::ApiError;

const FIELDS_PARAM: &str = "fields";
const CODES_PARAM: &str = "codes";
const VALUE_SEPARATOR: &str = ";";

/// One lookup dimension of the countries API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    /// Every country.
    All,
    /// Partial match on the country name or native name.
    Name(&'a str),
    /// Exact match on the full country name.
    FullName(&'a str),
    /// ISO 3166-1 alpha-2 or alpha-3 code.
    Code(&'a str),
    /// Several ISO 3166-1 codes in one request. Needs at least one non-empty code.
    Codes(&'a [&'a str]),
    Capital(&'a str),
    /// ISO 4217 currency code.
    Currency(&'a str),
    /// ISO 639-1 language code.
    Language(&'a str),
    CallingCode(&'a str),
    Region(&'a str),
    /// Regional bloc acronym such as `EU` or `USAN`.
    RegionalBloc(&'a str),
}

impl<'a> Lookup<'a> {
    /// The category segment used in the request path.
    pub fn category(&self) -> &'static str {
        match self {
            Lookup::All => "all",
            Lookup::Name(_) | Lookup::FullName(_) => "name",
            Lookup::Code(_) | Lookup::Codes(_) => "alpha",
            Lookup::Capital(_) => "capital",
            Lookup::Currency(_) => "currency",
            Lookup::Language(_) => "lang",
            Lookup::CallingCode(_) => "callingcode",
            Lookup::Region(_) => "region",
            Lookup::RegionalBloc(_) => "regionalbloc",
        }
    }

    /// Render the path and query string for this lookup, relative to the
    /// API base URL. `fields` is appended as `fields=a;b;c` when non-empty.
    pub fn path(&self, fields: &[&str]) -> Result<String, ApiError> {
        let category = self.category();
        let mut path = match self {
            Lookup::All => format!("/{category}"),
            Lookup::FullName(name) => {
                format!("/{category}/{}?fullText=true", urlencoding::encode(name))
            }
            Lookup::Codes(codes) => {
                let codes = filter(CODES_PARAM, codes).ok_or(ApiError::EmptyCodes)?;
                format!("/{category}?{codes}")
            }
            Lookup::Name(value)
            | Lookup::Code(value)
            | Lookup::Capital(value)
            | Lookup::Currency(value)
            | Lookup::Language(value)
            | Lookup::CallingCode(value)
            | Lookup::Region(value)
            | Lookup::RegionalBloc(value) => {
                format!("/{category}/{}", urlencoding::encode(value))
            }
        };

        if let Some(fields) = filter(FIELDS_PARAM, fields) {
            path.push(if path.contains('?') { '&' } else { '?' });
            path.push_str(&fields);
        }
        Ok(path)
    }
}

/// Render `param=v1;v2;...` with each value percent-encoded.
///
/// Empty values are skipped. Returns `None` when nothing is left so callers
/// never emit a bare `param=`.
pub fn filter(param: &str, values: &[&str]) -> Option<String> {
    let encoded: Vec<_> = values
        .iter()
        .filter(|value| !value.is_empty())
        .map(|value| urlencoding::encode(value))
        .collect();
    if encoded.is_empty() {
        return None;
    }
    Some(format!("{param}={}", encoded.join(VALUE_SEPARATOR)))
}
