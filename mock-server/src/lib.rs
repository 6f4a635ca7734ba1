use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Map, Value};
use tokio::net::TcpListener;
use tracing::debug;

/// Countries served by `app()`, in the upstream v2 JSON shape.
pub const DATASET: &str = include_str!("../data/countries.json");

pub type Db = Arc<Vec<Value>>;

type ApiResult = Result<Json<Vec<Value>>, (StatusCode, Json<Value>)>;

#[derive(Debug, Default, Deserialize)]
pub struct LookupQuery {
    #[serde(rename = "fullText")]
    pub full_text: Option<String>,
    pub fields: Option<String>,
    pub codes: Option<String>,
}

/// Parse the embedded `DATASET`.
///
/// # Panics
/// If `data/countries.json` is not a JSON array; the file is compiled in, so
/// this is a build defect rather than a runtime condition.
pub fn dataset() -> Vec<Value> {
    serde_json::from_str(DATASET).expect("data/countries.json must be a JSON array")
}

pub fn app() -> Router {
    app_with(dataset())
}

pub fn app_with(countries: Vec<Value>) -> Router {
    let db: Db = Arc::new(countries);
    Router::new()
        .route("/all", get(all))
        .route("/name/{name}", get(by_name))
        .route("/alpha", get(by_codes))
        .route("/alpha/{code}", get(by_code))
        .route("/capital/{capital}", get(by_capital))
        .route("/currency/{currency}", get(by_currency))
        .route("/lang/{language}", get(by_language))
        .route("/callingcode/{calling_code}", get(by_calling_code))
        .route("/region/{region}", get(by_region))
        .route("/regionalbloc/{bloc}", get(by_regional_bloc))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn all(State(db): State<Db>, Query(query): Query<LookupQuery>) -> ApiResult {
    respond(&db, &query, |_| true)
}

async fn by_name(
    State(db): State<Db>,
    Path(name): Path<String>,
    Query(query): Query<LookupQuery>,
) -> ApiResult {
    let full_text = query
        .full_text
        .as_deref()
        .is_some_and(|v| v.eq_ignore_ascii_case("true"));
    let needle = name.to_lowercase();
    respond(&db, &query, |country| {
        if full_text {
            str_field(country, "name").is_some_and(|n| n.eq_ignore_ascii_case(&name))
        } else {
            ["name", "nativeName"]
                .iter()
                .filter_map(|key| str_field(country, key))
                .any(|n| n.to_lowercase().contains(&needle))
        }
    })
}

async fn by_code(
    State(db): State<Db>,
    Path(code): Path<String>,
    Query(query): Query<LookupQuery>,
) -> ApiResult {
    respond(&db, &query, |country| has_code(country, &code))
}

async fn by_codes(State(db): State<Db>, Query(query): Query<LookupQuery>) -> ApiResult {
    let codes: Vec<String> = query
        .codes
        .as_deref()
        .unwrap_or_default()
        .split(';')
        .filter(|code| !code.is_empty())
        .map(str::to_string)
        .collect();
    if codes.is_empty() {
        return Err(error(StatusCode::BAD_REQUEST, "Bad Request"));
    }
    respond(&db, &query, |country| codes.iter().any(|code| has_code(country, code)))
}

async fn by_capital(
    State(db): State<Db>,
    Path(capital): Path<String>,
    Query(query): Query<LookupQuery>,
) -> ApiResult {
    let needle = capital.to_lowercase();
    respond(&db, &query, |country| {
        str_field(country, "capital")
            .is_some_and(|c| !c.is_empty() && c.to_lowercase().contains(&needle))
    })
}

async fn by_currency(
    State(db): State<Db>,
    Path(currency): Path<String>,
    Query(query): Query<LookupQuery>,
) -> ApiResult {
    respond(&db, &query, |country| {
        objects(country, "currencies").any(|c| {
            str_field(c, "code").is_some_and(|code| code.eq_ignore_ascii_case(&currency))
        })
    })
}

async fn by_language(
    State(db): State<Db>,
    Path(language): Path<String>,
    Query(query): Query<LookupQuery>,
) -> ApiResult {
    respond(&db, &query, |country| {
        objects(country, "languages").any(|l| {
            ["iso639_1", "iso639_2"]
                .iter()
                .filter_map(|key| str_field(l, key))
                .any(|code| code.eq_ignore_ascii_case(&language))
        })
    })
}

async fn by_calling_code(
    State(db): State<Db>,
    Path(calling_code): Path<String>,
    Query(query): Query<LookupQuery>,
) -> ApiResult {
    respond(&db, &query, |country| {
        strings(country, "callingCodes").any(|code| !code.is_empty() && code == calling_code)
    })
}

async fn by_region(
    State(db): State<Db>,
    Path(region): Path<String>,
    Query(query): Query<LookupQuery>,
) -> ApiResult {
    respond(&db, &query, |country| {
        str_field(country, "region").is_some_and(|r| r.eq_ignore_ascii_case(&region))
    })
}

async fn by_regional_bloc(
    State(db): State<Db>,
    Path(bloc): Path<String>,
    Query(query): Query<LookupQuery>,
) -> ApiResult {
    respond(&db, &query, |country| {
        objects(country, "regionalBlocs")
            .any(|b| str_field(b, "acronym").is_some_and(|a| a.eq_ignore_ascii_case(&bloc)))
    })
}

/// Filter the dataset, project it onto `fields=`, and map "no match" to 404.
fn respond(
    db: &[Value],
    query: &LookupQuery,
    predicate: impl Fn(&Value) -> bool,
) -> ApiResult {
    let fields: Vec<&str> = query
        .fields
        .as_deref()
        .map(|f| f.split(';').filter(|f| !f.is_empty()).collect())
        .unwrap_or_default();

    let found: Vec<Value> = db
        .iter()
        .filter(|&country| predicate(country))
        .map(|country| project(country, &fields))
        .collect();
    debug!(matched = found.len(), ?fields, "lookup served");

    if found.is_empty() {
        return Err(error(StatusCode::NOT_FOUND, "Not Found"));
    }
    Ok(Json(found))
}

/// Keep only the members named in `fields`; an empty list keeps everything.
pub fn project(country: &Value, fields: &[&str]) -> Value {
    match country {
        Value::Object(map) if !fields.is_empty() => Value::Object(
            map.iter()
                .filter(|(key, _)| fields.contains(&key.as_str()))
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect::<Map<String, Value>>(),
        ),
        other => other.clone(),
    }
}

fn error(status: StatusCode, message: &str) -> (StatusCode, Json<Value>) {
    (status, Json(json!({ "status": status.as_u16(), "message": message })))
}

fn has_code(country: &Value, code: &str) -> bool {
    ["alpha2Code", "alpha3Code"]
        .iter()
        .filter_map(|key| str_field(country, key))
        .any(|c| c.eq_ignore_ascii_case(code))
}

fn str_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key).and_then(Value::as_str)
}

fn objects<'a>(value: &'a Value, key: &str) -> impl Iterator<Item = &'a Value> {
    value.get(key).and_then(Value::as_array).into_iter().flatten()
}

fn strings<'a>(value: &'a Value, key: &str) -> impl Iterator<Item = &'a str> {
    objects(value, key).filter_map(Value::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_is_an_array_of_objects() {
        let countries = dataset();
        assert_eq!(countries.len(), 5);
        assert!(countries.iter().all(Value::is_object));
        assert!(countries.iter().all(|c| str_field(c, "alpha3Code").is_some()));
    }

    #[test]
    fn project_keeps_only_requested_members() {
        let countries = dataset();
        let colombia = &countries[0];
        let sparse = project(colombia, &["name", "capital", "missing"]);
        assert_eq!(sparse, json!({ "name": "Colombia", "capital": "Bogotá" }));
    }

    #[test]
    fn project_without_fields_is_identity() {
        let countries = dataset();
        let colombia = &countries[0];
        assert_eq!(&project(colombia, &[]), colombia);
    }

    #[test]
    fn has_code_matches_alpha2_and_alpha3() {
        let countries = dataset();
        let colombia = &countries[0];
        assert!(has_code(colombia, "co"));
        assert!(has_code(colombia, "COL"));
        assert!(!has_code(colombia, "PER"));
    }

    #[test]
    fn empty_match_is_not_found() {
        let err = respond(&dataset(), &LookupQuery::default(), |_| false).unwrap_err();
        assert_eq!(err.0, StatusCode::NOT_FOUND);
        assert_eq!(err.1 .0, json!({ "status": 404, "message": "Not Found" }));
    }
}
