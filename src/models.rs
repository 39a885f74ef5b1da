//! Frontend Models
//!
//! Activity data as the backend sends it, and the one shape the UI renders.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::BoardError;

pub const UNNAMED_ACTIVITY: &str = "Unnamed Activity";
pub const DEFAULT_SCHEDULE: &str = "TBA";

/// Activity data structure (normalised, ready to render)
#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: i64,
    pub participants: Vec<String>,
}

impl Activity {
    /// Remaining capacity. Negative when over-enrolled.
    pub fn spots_left(&self) -> i64 {
        self.max_participants.saturating_sub(self.participants.len() as i64)
    }
}

/// Body of `GET /activities`
///
/// The backend has served both a list of activity objects and a
/// name-keyed object; anything else is rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum ActivityPayload {
    List(Vec<Value>),
    Map(Map<String, Value>),
}

impl TryFrom<Value> for ActivityPayload {
    type Error = BoardError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(items) => Ok(Self::List(items)),
            Value::Object(entries) => Ok(Self::Map(entries)),
            other => Err(BoardError::format(format!("expected list or object, got {}", kind_of(&other)))),
        }
    }
}

impl ActivityPayload {
    /// Flatten either shape into activities, keeping payload order
    pub fn into_activities(self) -> Result<Vec<Activity>, BoardError> {
        match self {
            Self::List(items) => items
                .into_iter()
                .map(|item| {
                    let raw = RawActivity::decode(item)?;
                    let name = raw.fallback_name();
                    Ok(raw.normalize(name))
                })
                .collect(),
            Self::Map(entries) => entries
                .into_iter()
                .map(|(name, item)| Ok(RawActivity::decode(item)?.normalize(name)))
                .collect(),
        }
    }
}

/// Activity object exactly as received; every field is optional
#[derive(Debug, Default, Deserialize)]
struct RawActivity {
    #[serde(default)]
    name: Value,
    #[serde(default)]
    id: Value,
    #[serde(default)]
    title: Value,
    #[serde(default)]
    description: Value,
    #[serde(default)]
    schedule: Value,
    #[serde(default)]
    max_participants: Value,
    #[serde(default)]
    participants: Value,
}

impl RawActivity {
    fn decode(value: Value) -> Result<Self, BoardError> {
        if !value.is_object() {
            return Err(BoardError::format(format!("activity entry is {}", kind_of(&value))));
        }
        serde_json::from_value(value).map_err(|e| BoardError::format(e.to_string()))
    }

    // name, then id, then title; first one with a usable value
    fn fallback_name(&self) -> String {
        [&self.name, &self.id, &self.title]
            .into_iter()
            .find_map(truthy_text)
            .unwrap_or_else(|| UNNAMED_ACTIVITY.to_string())
    }

    fn normalize(self, name: String) -> Activity {
        let participants = match self.participants {
            Value::Array(list) => list
                .into_iter()
                .map(|p| match p {
                    Value::String(s) => s,
                    other => other.to_string(),
                })
                .collect(),
            _ => Vec::new(),
        };

        Activity {
            name,
            description: truthy_text(&self.description).unwrap_or_default(),
            schedule: truthy_text(&self.schedule).unwrap_or_else(|| DEFAULT_SCHEDULE.to_string()),
            max_participants: as_count(&self.max_participants),
            participants,
        }
    }
}

/// Text for a value, skipping empty strings, zero, false and null
fn truthy_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

/// Capacity as a non-negative count; anything unusable is 0
fn as_count(value: &Value) -> i64 {
    let count = match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)).unwrap_or(0),
        Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    };
    count.max(0)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

/// `{message}` / `{detail}` body returned by the mutation endpoints
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ApiMessage {
    pub fn message_text(&self) -> Option<String> {
        self.message.clone().filter(|m| !m.is_empty())
    }

    /// FastAPI sends a string for handled errors and a list for validation failures
    pub fn detail_text(&self) -> Option<String> {
        self.detail.as_ref().and_then(|d| match d {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Null | Value::String(_) => None,
            other => Some(other.to_string()),
        })
    }
}
