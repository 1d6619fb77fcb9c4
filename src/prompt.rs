//! Prompt for the capital lookup: schema text, one-shot example, user turn.

use std::fmt;

use crate::api::models::{Message, Role};

/// User half of the one-shot example. The misspelling is what the model has
/// always been shown, keep it.
pub const EXAMPLE_COUNTRY: &str = "Germnay";

/// Assistant half of the one-shot example.
pub const EXAMPLE_ANSWER: &str = r#"{"city": "Berlin", "lat": 52.52, "lon": 13.405}"#;

#[derive(Debug)]
pub struct SchemaField {
    pub kind: &'static str,
    pub description: &'static str,
}

impl fmt::Display for SchemaField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{'type': '{}', 'description': '{}'}}",
            self.kind, self.description
        )
    }
}

/// Output schema shown to the model. Not enforced on the reply.
#[derive(Debug)]
pub struct CitySchema {
    pub city: SchemaField,
    pub lat: SchemaField,
    pub lon: SchemaField,
}

/// Renders with single quotes and `': '` separators, the exact schema text the
/// prompt has always carried. Field values must not contain `'`.
impl fmt::Display for CitySchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{'city': {}, 'lat': {}, 'lon': {}}}",
            self.city, self.lat, self.lon
        )
    }
}

pub const CITY_SCHEMA: CitySchema = CitySchema {
    city: SchemaField {
        kind: "string",
        description: "The name of the city",
    },
    lat: SchemaField {
        kind: "float",
        description: "The decimal latitude of the city",
    },
    lon: SchemaField {
        kind: "float",
        description: "The decimal longitude of the city",
    },
};

pub fn system_instruction() -> String {
    format!(
        "You are a helpful AI assistant. The user will enter a country name and the \
         assistant will return the decimal latitude and longitude of the capital of \
         that country. Output in JSON using the schema defined here: {}.",
        CITY_SCHEMA
    )
}

/// Full conversation for `country`: system, example user, example assistant,
/// then the country itself, passed through untouched.
pub fn build_messages(country: &str) -> Vec<Message> {
    vec![
        Message::new(Role::System, system_instruction()),
        Message::new(Role::User, EXAMPLE_COUNTRY),
        Message::new(Role::Assistant, EXAMPLE_ANSWER),
        Message::new(Role::User, country),
    ]
}
