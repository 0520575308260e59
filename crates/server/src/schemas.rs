// crates/server/src/schemas.rs
//! JSON Schemas for job request bodies and search parameters.
//!
//! Validation collects every violation before giving up, so a client sees
//! all problems with a request at once.

use jsonschema::Validator;
use serde::de::DeserializeOwned;
use serde_json::{json, Map, Value};

use crate::error::ApiError;

/// Decimal string in [0, 1]: "0", "0.25", ".5", "1", "1.000".
const EQUITY_PATTERN: &str = r"^(0(\.[0-9]+)?|\.[0-9]+|1(\.0+)?)$";

fn job_new_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "title": { "type": "string", "minLength": 1 },
            "salary": { "type": "integer", "minimum": 0 },
            "equity": { "type": "string", "pattern": EQUITY_PATTERN },
            "companyHandle": { "type": "string", "minLength": 1, "maxLength": 25 }
        },
        "required": ["title", "companyHandle"],
        "additionalProperties": false
    })
}

fn job_update_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "title": { "type": "string", "minLength": 1 },
            "salary": { "type": "integer", "minimum": 0 },
            "equity": { "type": "string", "pattern": EQUITY_PATTERN }
        },
        "minProperties": 1,
        "additionalProperties": false
    })
}

fn job_search_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "minSalary": { "type": "integer", "minimum": 0 },
            "hasEquity": { "type": "boolean" },
            "title": { "type": "string", "minLength": 1 }
        },
        "additionalProperties": false
    })
}

/// Compiled validators, built once at startup.
pub struct JobSchemas {
    pub job_new: Validator,
    pub job_update: Validator,
    pub job_search: Validator,
}

impl JobSchemas {
    pub fn new() -> Result<Self, ApiError> {
        Ok(Self {
            job_new: compile(&job_new_schema())?,
            job_update: compile(&job_update_schema())?,
            job_search: compile(&job_search_schema())?,
        })
    }
}

fn compile(schema: &Value) -> Result<Validator, ApiError> {
    jsonschema::validator_for(schema)
        .map_err(|e| ApiError::Internal(format!("invalid schema: {e}")))
}

/// Check `input` against `schema`, then deserialize it.
///
/// Returns every violation message on failure.
pub fn validate<T: DeserializeOwned>(schema: &Validator, input: Value) -> Result<T, Vec<String>> {
    let errors: Vec<String> = schema
        .iter_errors(&input)
        .map(|e| {
            let path = e.instance_path.to_string();
            if path.is_empty() {
                format!("instance {e}")
            } else {
                format!("instance{path} {e}")
            }
        })
        .collect();
    if !errors.is_empty() {
        return Err(errors);
    }
    serde_json::from_value(input).map_err(|e| vec![e.to_string()])
}

/// [`validate`], mapped into an [`ApiError::BadRequest`].
pub fn validated<T: DeserializeOwned>(schema: &Validator, input: Value) -> Result<T, ApiError> {
    validate(schema, input).map_err(ApiError::BadRequest)
}

/// Turn raw query-string pairs into a JSON object fit for the search schema.
///
/// `minSalary` becomes a number when it parses as one and stays a string
/// otherwise, so the schema reports it. `hasEquity` is `true` only for the
/// literal "true". Everything else passes through as a string.
pub fn coerce_search_query(params: Vec<(String, String)>) -> Value {
    let mut object = Map::new();
    for (key, raw) in params {
        let value = match key.as_str() {
            "minSalary" => parse_number(&raw).unwrap_or(Value::String(raw)),
            "hasEquity" => Value::Bool(raw == "true"),
            _ => Value::String(raw),
        };
        object.insert(key, value);
    }
    Value::Object(object)
}

fn parse_number(raw: &str) -> Option<Value> {
    let trimmed = raw.trim();
    if let Ok(n) = trimmed.parse::<i64>() {
        return Some(json!(n));
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|f| f.is_finite())
        .and_then(serde_json::Number::from_f64)
        .map(Value::Number)
}
