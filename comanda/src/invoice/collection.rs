//! Invoice list responses and local list maintenance.

use serde_json::Value;
use shared::value_as_string;

use super::fields::{get_val, ID};

/// Pull the invoice list out of any of the response shapes the backend uses:
/// a bare array, `{ data: { facturas } }`, `{ facturas }`, `{ data: [...] }`,
/// or a single invoice object. Only JSON objects are kept.
pub fn unwrap_factura_list(response: Value) -> Vec<Value> {
    let list = match &response {
        Value::Array(items) => items.clone(),
        Value::Object(_) => nested_list(&response)
            .cloned()
            .unwrap_or_else(|| vec![response.clone()]),
        _ => Vec::new(),
    };

    list.into_iter().filter(Value::is_object).collect()
}

fn nested_list(response: &Value) -> Option<&Vec<Value>> {
    response
        .pointer("/data/facturas")
        .and_then(Value::as_array)
        .or_else(|| response.get("facturas").and_then(Value::as_array))
        .or_else(|| response.get("data").and_then(Value::as_array))
}

fn invoice_id(factura: &Value) -> Option<String> {
    get_val(factura, ID).and_then(value_as_string)
}

/// Prepend a newly created invoice unless one with the same id is present.
///
/// Returns whether the list changed. Invoices without an id are never merged;
/// the refetch that follows creation brings them in.
pub fn merge_created(list: &mut Vec<Value>, created: Value) -> bool {
    if !created.is_object() {
        return false;
    }
    let Some(id) = invoice_id(&created) else {
        return false;
    };

    let exists = list.iter().any(|factura| {
        ["id", "factura_id", "id_factura"]
            .iter()
            .filter_map(|key| factura.get(*key))
            .filter_map(value_as_string)
            .any(|existing| existing == id)
    });
    if exists {
        return false;
    }

    list.insert(0, created);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unwrap_known_shapes() {
        let a = json!([{ "id": 1 }, "basura", { "id": 2 }]);
        let b = json!({ "data": { "facturas": [{ "id": 1 }] } });
        let c = json!({ "facturas": [{ "id": 1 }, { "id": 2 }] });
        let d = json!({ "data": [{ "id": 1 }] });

        assert_eq!(unwrap_factura_list(a).len(), 2);
        assert_eq!(unwrap_factura_list(b), vec![json!({ "id": 1 })]);
        assert_eq!(unwrap_factura_list(c).len(), 2);
        assert_eq!(unwrap_factura_list(d).len(), 1);
    }

    #[test]
    fn test_single_object_is_wrapped() {
        let single = json!({ "id": 3, "numero": "F-3", "data": "x" });
        assert_eq!(unwrap_factura_list(single.clone()), vec![single]);
        assert!(unwrap_factura_list(Value::Null).is_empty());
        assert!(unwrap_factura_list(json!("texto")).is_empty());
    }

    #[test]
    fn test_merge_created_prepends_once() {
        let mut list = vec![json!({ "factura_id": 1 }), json!({ "id": "2" })];

        assert!(merge_created(&mut list, json!({ "id": 3 })));
        assert_eq!(list[0], json!({ "id": 3 }));

        assert!(!merge_created(&mut list, json!({ "factura_id": 2 })));
        assert!(!merge_created(&mut list, json!({ "id": 1 })));
        assert!(!merge_created(&mut list, json!({ "numero": "sin id" })));
        assert_eq!(list.len(), 3);
    }
}
