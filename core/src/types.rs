//! Country DTOs mirroring the countries API v2 JSON schema.
//!
//! # Design
//! Every member is optional: sparse `fields=` responses omit most of them
//! and the live API sends `null` for unknown values (gini, capital, some
//! currency symbols). Both cases decode to `None`. Absent values are skipped
//! on serialization so a sparse record re-encodes sparsely.
//!
//! These types are defined independently of the mock-server's dataset;
//! integration tests catch schema drift.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A country record as returned by every lookup endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_level_domain: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alpha2_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alpha3_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calling_codes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capital: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt_spellings: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subregion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub population: Option<u64>,
    /// Latitude then longitude.
    #[serde(rename = "latlng", skip_serializing_if = "Option::is_none")]
    pub lat_lng: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demonym: Option<String>,
    /// Square kilometres.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gini: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezones: Option<Vec<String>>,
    /// Alpha-3 codes of neighbouring countries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub borders: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub native_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numeric_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currencies: Option<Vec<Currency>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<Language>>,
    /// Country name keyed by language code. Some entries are `null` upstream.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translations: Option<BTreeMap<String, Option<String>>>,
    /// URL of the flag image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regional_blocs: Option<Vec<RegionalBloc>>,
    /// International Olympic Committee code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cioc: Option<String>,
}

/// ISO 4217 currency used by a country.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub code: Option<String>,
    pub name: Option<String>,
    pub symbol: Option<String>,
}

/// Language spoken in a country.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub iso639_1: Option<String>,
    pub iso639_2: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "nativeName")]
    pub native_name: Option<String>,
}

/// Regional trade or political bloc a country belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionalBloc {
    pub acronym: Option<String>,
    pub name: Option<String>,
    pub other_acronyms: Option<Vec<String>>,
    pub other_names: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_record_decodes_with_missing_fields_as_none() {
        let country: Country = serde_json::from_str(
            r#"{"name":"Colombia","capital":"Bogotá","currencies":[{"code":"COP","name":"Colombian peso","symbol":"$"}]}"#,
        )
        .unwrap();
        assert_eq!(country.name.as_deref(), Some("Colombia"));
        assert_eq!(country.capital.as_deref(), Some("Bogotá"));
        assert_eq!(country.currencies.as_ref().unwrap()[0].code.as_deref(), Some("COP"));
        assert!(country.population.is_none());
        assert!(country.borders.is_none());
    }

    #[test]
    fn nulls_decode_as_none() {
        let country: Country = serde_json::from_str(
            r#"{"name":"Antarctica","capital":"","gini":null,"area":null,
                "currencies":[{"code":"USD","name":null,"symbol":null}],
                "translations":{"de":"Antarktis","fa":null}}"#,
        )
        .unwrap();
        assert!(country.gini.is_none());
        assert!(country.area.is_none());
        assert!(country.currencies.unwrap()[0].symbol.is_none());
        let translations = country.translations.unwrap();
        assert_eq!(translations["de"].as_deref(), Some("Antarktis"));
        assert_eq!(translations["fa"], None);
    }

    #[test]
    fn upstream_member_names_are_used() {
        let country: Country = serde_json::from_str(
            r#"{"alpha2Code":"CO","alpha3Code":"COL","latlng":[4.0,-72.0],
                "altSpellings":["CO"],"demonym":"Colombian","timezones":["UTC-05:00"],
                "languages":[{"iso639_1":"es","iso639_2":"spa","name":"Spanish","nativeName":"Español"}],
                "regionalBlocs":[{"acronym":"PA","name":"Pacific Alliance","otherAcronyms":[],"otherNames":["Alianza del Pacífico"]}],
                "cioc":"COL"}"#,
        )
        .unwrap();
        assert_eq!(country.alpha2_code.as_deref(), Some("CO"));
        assert_eq!(country.lat_lng, Some(vec![4.0, -72.0]));
        assert_eq!(country.demonym.as_deref(), Some("Colombian"));
        assert_eq!(country.timezones, Some(vec!["UTC-05:00".to_string()]));
        let languages = country.languages.unwrap();
        let language = &languages[0];
        assert_eq!(language.iso639_1.as_deref(), Some("es"));
        assert_eq!(language.native_name.as_deref(), Some("Español"));
        let blocs = country.regional_blocs.unwrap();
        let bloc = &blocs[0];
        assert_eq!(bloc.other_acronyms, Some(Vec::new()));
        assert_eq!(bloc.other_names, Some(vec!["Alianza del Pacífico".to_string()]));
    }

    #[test]
    fn null_bloc_lists_do_not_fail_the_lookup() {
        let countries: Vec<Country> = serde_json::from_str(
            r#"[{"name":"X","regionalBlocs":[{"acronym":"EU","name":"European Union","otherAcronyms":null,"otherNames":null}]},
                {"name":"Y","regionalBlocs":[{"acronym":"EFTA"}]}]"#,
        )
        .unwrap();
        assert_eq!(countries.len(), 2);
        let eu = &countries[0].regional_blocs.as_ref().unwrap()[0];
        assert_eq!(eu.acronym.as_deref(), Some("EU"));
        assert_eq!(eu.other_acronyms, None);
        assert_eq!(eu.other_names, None);
        let efta = &countries[1].regional_blocs.as_ref().unwrap()[0];
        assert_eq!(efta.other_acronyms, None);
    }

    #[test]
    fn absent_fields_are_not_serialized() {
        let country = Country {
            name: Some("Peru".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&country).unwrap();
        assert_eq!(json, serde_json::json!({"name": "Peru"}));
    }

    #[test]
    fn mistyped_member_is_rejected() {
        let result: Result<Country, _> = serde_json::from_str(r#"{"population":"many"}"#);
        assert!(result.is_err());
    }
}
