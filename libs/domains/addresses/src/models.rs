use mongodb::bson::{oid::ObjectId, serde_helpers::serialize_object_id_as_hex_string};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// The nine address fields accepted from clients.
///
/// Values are kept as raw JSON and never validated: whatever a client sends
/// for a known key is stored and echoed unchanged, `null` included. Absent
/// fields are neither stored nor echoed, and any other keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddressDetails {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, example = "Ada")]
    pub first_name: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, example = "Lovelace")]
    pub last_name: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, example = "12 St James's Square")]
    pub address1: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub address2: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, example = "London")]
    pub city: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub state: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, example = "SW1Y 4JH")]
    pub zip: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, example = "UK")]
    pub country: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<bool>)]
    pub save_address: Option<Value>,
}

/// A key that is present maps to `Some`, even when its value is `null`.
fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

/// Address document as stored in the `addresses` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(flatten)]
    pub details: AddressDetails,
}

impl Address {
    pub fn new(details: AddressDetails) -> Self {
        Self {
            id: ObjectId::new(),
            details,
        }
    }
}

/// Address as returned to clients, with `_id` as a hex string.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AddressView {
    #[serde(rename = "_id", serialize_with = "serialize_object_id_as_hex_string")]
    #[schema(value_type = String, example = "65f0c0ffee0000000000cafe")]
    pub id: ObjectId,
    #[serde(flatten)]
    pub details: AddressDetails,
}

impl From<Address> for AddressView {
    fn from(address: Address) -> Self {
        Self {
            id: address.id,
            details: address.details,
        }
    }
}

/// Response of `POST /api/address`.
#[derive(Debug, Serialize, ToSchema)]
pub struct AddressSaved {
    #[schema(example = "Address saved successfully")]
    pub message: String,
    pub address: AddressView,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_details_use_camel_case_keys() {
        let details: AddressDetails = serde_json::from_value(json!({
            "firstName": "Ada",
            "address1": "12 Square",
            "saveAddress": true,
            "unrelated": "dropped"
        }))
        .unwrap();

        assert_eq!(details.first_name, Some(json!("Ada")));
        assert_eq!(details.address1, Some(json!("12 Square")));
        assert_eq!(details.save_address, Some(json!(true)));

        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(
            json,
            json!({ "firstName": "Ada", "address1": "12 Square", "saveAddress": true })
        );
    }

    #[test]
    fn test_details_keep_any_value_type_and_null() {
        let body = json!({ "zip": 2139, "saveAddress": "yes", "state": null, "city": ["a", "b"] });
        let details: AddressDetails = serde_json::from_value(body.clone()).unwrap();

        assert_eq!(details.state, Some(Value::Null));
        assert!(details.country.is_none());
        assert_eq!(serde_json::to_value(&details).unwrap(), body);
    }

    #[test]
    fn test_stored_address_keeps_object_id() {
        let address = Address::new(AddressDetails {
            city: Some(json!("London")),
            ..Default::default()
        });
        let doc = mongodb::bson::to_document(&address).unwrap();

        assert_eq!(doc.get_object_id("_id").unwrap(), address.id);
        assert_eq!(doc.get_str("city").unwrap(), "London");
        assert!(doc.get("firstName").is_none());
    }
}
