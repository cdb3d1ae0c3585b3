//! Wire model for registry document-creation requests.
//!
//! Field names follow the registry's JSON schema exactly. Every optional
//! attribute is omitted from the serialized body when unset, never
//! emitted as null or empty. Markgate does not validate field values;
//! documents arrive fully populated from the caller.

use serde::{Deserialize, Serialize};

/// A document-creation request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Description>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_type: Option<String>,
    #[serde(rename = "importRequest", skip_serializing_if = "Option::is_none")]
    pub import_request: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_inn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participant_inn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub producer_inn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub production_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub production_type: Option<String>,
    /// Ordered list of products; an empty list is a valid submission.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<Product>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reg_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reg_number: Option<String>,
}

/// Nested description block holding the participant identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Description {
    #[serde(rename = "participantInn", skip_serializing_if = "Option::is_none")]
    pub participant_inn: Option<String>,
}

/// A single product entry within a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_document: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_document_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_document_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_inn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub producer_inn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub production_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tnved_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uit_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uitu_code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_fields_are_omitted() {
        let document = Document {
            doc_type: Some("LP_INTRODUCE_GOODS".to_string()),
            products: Some(vec![Product {
                tnved_code: Some("6401".to_string()),
                ..Product::default()
            }]),
            ..Document::default()
        };

        let body = serde_json::to_value(&document).unwrap();
        let object = body.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(object["doc_type"], "LP_INTRODUCE_GOODS");
        let products = object["products"].as_array().unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].as_object().unwrap().len(), 1);
        assert_eq!(products[0]["tnved_code"], "6401");
    }

    #[test]
    fn test_wire_names() {
        let document = Document {
            description: Some(Description {
                participant_inn: Some("1234".to_string()),
            }),
            import_request: Some(true),
            ..Document::default()
        };

        let body = serde_json::to_value(&document).unwrap();
        assert_eq!(body["description"]["participantInn"], "1234");
        assert_eq!(body["importRequest"], true);
    }

    #[test]
    fn test_empty_product_list_serializes_as_empty_array() {
        let document = Document {
            products: Some(Vec::new()),
            ..Document::default()
        };

        let body = serde_json::to_value(&document).unwrap();
        assert_eq!(body["products"], serde_json::json!([]));
    }

    #[test]
    fn test_document_deserializes_from_json() {
        let raw = r#"{
            "description": {"participantInn": "7700000000"},
            "doc_id": "doc-1",
            "doc_status": "DRAFT",
            "doc_type": "LP_INTRODUCE_GOODS",
            "importRequest": false,
            "owner_inn": "7700000001",
            "production_date": "2023-07-08",
            "products": [{
                "owner_inn": "7700000001",
                "production_date": "2023-07-08",
                "uit_code": "010460043993125621JgXJ5.T"
            }]
        }"#;

        let document: Document = serde_json::from_str(raw).unwrap();
        assert_eq!(document.doc_id.as_deref(), Some("doc-1"));
        assert_eq!(document.import_request, Some(false));
        assert_eq!(
            document
                .description
                .as_ref()
                .and_then(|d| d.participant_inn.as_deref()),
            Some("7700000000")
        );
        assert_eq!(document.products.as_ref().map(Vec::len), Some(1));
        assert!(document.reg_number.is_none());
    }
}
