//! The two catalogs and how their API bodies decode into records.

use crate::card::entities::Card;
use crate::card::key_map::{ARKHAMDB_CARD_KEYS, map_records};
use crate::core::error::CatalogError;
use crate::item::entities::Item;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// A remote catalog: a record type, a cache key, and a body decoder.
pub trait Catalog: Send + Sync + 'static {
    type Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static;

    /// Human-readable catalog name for messages
    const NAME: &'static str;

    /// Key under which the last loaded list is cached
    const CACHE_KEY: &'static str;

    /// Turn a parsed response body into records.
    fn decode(body: Value) -> Result<Vec<Self::Record>, CatalogError>;
}

/// ArkhamDB cards: a bare JSON array, renamed through the card key map.
#[derive(Debug, Clone, Copy)]
pub struct CardCatalog;

impl Catalog for CardCatalog {
    type Record = Card;

    const NAME: &'static str = "cards";
    const CACHE_KEY: &'static str = "arkhamdbCardList";

    fn decode(body: Value) -> Result<Vec<Card>, CatalogError> {
        let Value::Array(elements) = body else {
            return Err(CatalogError::decode(format!(
                "expected a JSON array of cards, got {}",
                json_kind(&body)
            )));
        };

        let raw = elements
            .into_iter()
            .enumerate()
            .map(|(index, element)| match element {
                Value::Object(map) => Ok(map),
                other => Err(CatalogError::decode(format!(
                    "card #{} is {}, not an object",
                    index,
                    json_kind(&other)
                ))),
            })
            .collect::<Result<Vec<Map<String, Value>>, _>>()?;

        map_records(&raw, &ARKHAMDB_CARD_KEYS)
            .into_iter()
            .enumerate()
            .map(|(index, mapped)| {
                serde_json::from_value(Value::Object(mapped))
                    .map_err(|e| CatalogError::decode(format!("card #{}: {}", index, e)))
            })
            .collect()
    }
}

/// HowBazaar items: `{ "data": [Item, ...] }`.
#[derive(Debug, Clone, Copy)]
pub struct ItemCatalog;

impl Catalog for ItemCatalog {
    type Record = Item;

    const NAME: &'static str = "items";
    const CACHE_KEY: &'static str = "howBazaarItemList";

    fn decode(body: Value) -> Result<Vec<Item>, CatalogError> {
        let Value::Object(mut envelope) = body else {
            return Err(CatalogError::decode(format!(
                "expected an object with a 'data' field, got {}",
                json_kind(&body)
            )));
        };

        let data = envelope
            .remove("data")
            .ok_or_else(|| CatalogError::decode("response has no 'data' field"))?;

        serde_json::from_value(data).map_err(|e| CatalogError::decode(format!("items: {}", e)))
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
