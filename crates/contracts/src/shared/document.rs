//! Document generation (labels, delivery notes) and the local print endpoints

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Result union of the `generateDocument` mutation, discriminated by `__typename`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "__typename")]
pub enum DocumentResult {
    RenderedDocument { url: String },
    TemplateDoesNotExist { message: String },
    TemplateError { message: String },
    MissingContext { message: String },
}

impl DocumentResult {
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::RenderedDocument { url } => Some(url),
            _ => None,
        }
    }
}

pub const GENERATE_DOCUMENT_MUTATION: &str = "mutation generateDocument($documentName: String!, $context: JSON!) { \
     generateDocument(documentName: $documentName, context: $context) { \
     __typename \
     ... on RenderedDocument { url } \
     ... on TemplateDoesNotExist { message } \
     ... on TemplateError { message } \
     ... on MissingContext { message } } }";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateDocumentData {
    pub generate_document: DocumentResult,
}

/// Body accepted by every print endpoint
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PrintRequest {
    pub id: String,
    pub copies: u32,
}

/// Body returned by the print endpoints; a missing `url` means failure
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct PrintResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Printable documents and the local endpoint serving each one
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PrintTarget {
    BarcodeLabel,
    HandlingUnitLabel,
    DeliveryLabel,
    PurchaseOrder,
}

impl PrintTarget {
    pub fn all() -> [PrintTarget; 4] {
        [
            PrintTarget::BarcodeLabel,
            PrintTarget::HandlingUnitLabel,
            PrintTarget::DeliveryLabel,
            PrintTarget::PurchaseOrder,
        ]
    }

    /// Document printed from the rows of `entity_name`'s list, if any
    pub fn for_entity(entity_name: &str) -> Option<PrintTarget> {
        match entity_name {
            "barcode" => Some(Self::BarcodeLabel),
            "handlingUnit" => Some(Self::HandlingUnitLabel),
            "delivery" => Some(Self::DeliveryLabel),
            "purchaseOrder" => Some(Self::PurchaseOrder),
            _ => None,
        }
    }

    pub fn route(&self) -> &'static str {
        match self {
            Self::BarcodeLabel => "/api/barcodes/print/label",
            Self::HandlingUnitLabel => "/api/handling-units/print/label",
            Self::DeliveryLabel => "/api/deliveries/print/label",
            Self::PurchaseOrder => "/api/purchase-orders/print",
        }
    }

    /// Template name passed to `generateDocument`
    pub fn document_name(&self) -> &'static str {
        match self {
            Self::BarcodeLabel => "barcode_label",
            Self::HandlingUnitLabel => "handling_unit_label",
            Self::DeliveryLabel => "delivery_label",
            Self::PurchaseOrder => "purchase_order",
        }
    }

    /// Template context key holding the printed entity id
    pub fn context_key(&self) -> &'static str {
        match self {
            Self::BarcodeLabel => "barcodeId",
            Self::HandlingUnitLabel => "handlingUnitId",
            Self::DeliveryLabel => "deliveryId",
            Self::PurchaseOrder => "purchaseOrderId",
        }
    }

    pub fn variables(&self, request: &PrintRequest) -> Value {
        let mut context = Map::new();
        context.insert(
            self.context_key().to_string(),
            Value::String(request.id.clone()),
        );
        context.insert("copies".to_string(), Value::from(request.copies));
        json!({
            "documentName": self.document_name(),
            "context": context,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_union_by_typename() {
        let ok: DocumentResult = serde_json::from_value(json!({
            "__typename": "RenderedDocument",
            "url": "https://x/doc.pdf"
        }))
        .unwrap();
        assert_eq!(ok.url(), Some("https://x/doc.pdf"));

        let missing: DocumentResult = serde_json::from_value(json!({
            "__typename": "MissingContext",
            "message": "barcodeId"
        }))
        .unwrap();
        assert_eq!(
            missing,
            DocumentResult::MissingContext {
                message: "barcodeId".into()
            }
        );
        assert_eq!(missing.url(), None);
    }

    #[test]
    fn test_print_variables() {
        let vars = PrintTarget::BarcodeLabel.variables(&PrintRequest {
            id: "abc123".into(),
            copies: 3,
        });
        assert_eq!(
            vars,
            json!({
                "documentName": "barcode_label",
                "context": { "barcodeId": "abc123", "copies": 3 }
            })
        );
    }

    #[test]
    fn test_print_target_for_entity() {
        assert_eq!(PrintTarget::for_entity("barcode"), Some(PrintTarget::BarcodeLabel));
        assert_eq!(PrintTarget::for_entity("purchaseOrder"), Some(PrintTarget::PurchaseOrder));
        assert_eq!(PrintTarget::for_entity("carrier"), None);
    }

    #[test]
    fn test_print_response_without_url() {
        let r: PrintResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(r.url, None);
    }
}
