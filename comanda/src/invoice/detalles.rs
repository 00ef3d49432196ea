//! Invoice detail lines: shape normalization and product names.

use serde_json::Value;

use super::fields::{get_text, LINE_ITEM_ID};
use super::menu::MenuMap;

/// Name returned when a line carries nothing usable.
pub const UNRESOLVED: &str = "N/A";

const DIRECT_NAME_KEYS: &[&str] = &[
    "descripcion_item",
    "descripcionItem",
    "item_name",
    "nombre",
    "nombre_item",
    "nombrePlatillo",
    "producto",
    "producto_nombre",
    "nombre_producto",
    "name",
    "title",
    "descripcion",
    "label",
];

const NESTED_NAME_KEYS: &[(&str, &[&str])] = &[
    ("platillo", &["nombre", "name", "nombreItem"]),
    ("producto", &["nombre", "name", "title", "nombre_producto"]),
    ("item", &["nombre", "name"]),
];

const LATE_NAME_KEYS: &[&str] = &["nombrePlatillo", "nombreProducto"];

/// Flatten a `detalles` value of unknown shape into a list of lines.
///
/// - flat array: returned as is
/// - array whose first element is an array: that inner array
/// - object with a single array value: that array
/// - any other object: its values, with array values spliced in one level deep
/// - anything else: empty
pub fn normalize_detalles(detalles: &Value) -> Vec<Value> {
    match detalles {
        Value::Array(items) => match items.first() {
            Some(Value::Array(inner)) => inner.clone(),
            _ => items.clone(),
        },
        Value::Object(map) => {
            if map.len() == 1 {
                if let Some(Value::Array(only)) = map.values().next() {
                    return only.clone();
                }
            }
            map.values()
                .flat_map(|value| match value {
                    Value::Array(items) => items.clone(),
                    other => vec![other.clone()],
                })
                .collect()
        }
        _ => Vec::new(),
    }
}

/// Best-effort product name for one line, without the menu lookup.
///
/// Tries direct name fields, then the nested `platillo`/`producto`/`item`
/// objects, then `#<item id>`, then the late `nombrePlatillo`/`nombreProducto`
/// fields. Lines that resolve to nothing are logged and yield [`UNRESOLVED`].
pub fn resolve_product_name(line: &Value) -> String {
    if !line.is_object() {
        return UNRESOLVED.to_string();
    }

    if let Some(name) = get_text(line, DIRECT_NAME_KEYS) {
        return name;
    }

    for (container, keys) in NESTED_NAME_KEYS {
        if let Some(name) = line.get(*container).and_then(|nested| get_text(nested, keys)) {
            return name;
        }
    }

    if let Some(id) = get_text(line, LINE_ITEM_ID) {
        return format!("#{}", id);
    }

    if let Some(name) = get_text(line, LATE_NAME_KEYS) {
        return name;
    }

    tracing::warn!(detalle = %line, "Unresolved invoice detail line");
    UNRESOLVED.to_string()
}

/// Product name for display: like [`resolve_product_name`], but an id-only or
/// unresolved line is looked up in the menu first.
pub fn display_product_name(line: &Value, menu: &MenuMap) -> String {
    let base = resolve_product_name(line);
    if base != UNRESOLVED && !base.starts_with('#') {
        return base;
    }

    get_text(line, LINE_ITEM_ID)
        .and_then(|id| menu.get(&id).map(str::to_string))
        .unwrap_or(base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flat_array_is_returned_unchanged() {
        let flat = json!([{ "nombre": "a" }, { "nombre": "b" }]);

        let once = normalize_detalles(&flat);
        let twice = normalize_detalles(&Value::Array(once.clone()));

        assert_eq!(once.len(), 2);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_nested_array_takes_first_inner_array() {
        let nested = json!([[{ "nombre": "a" }, { "nombre": "b" }], [{ "nombre": "c" }]]);
        let lines = normalize_detalles(&nested);
        assert_eq!(lines, vec![json!({ "nombre": "a" }), json!({ "nombre": "b" })]);
    }

    #[test]
    fn test_object_with_single_array_value() {
        let keyed = json!({ "items": [{ "cantidad": 1 }, { "cantidad": 2 }] });
        assert_eq!(
            normalize_detalles(&keyed),
            vec![json!({ "cantidad": 1 }), json!({ "cantidad": 2 })]
        );
    }

    #[test]
    fn test_object_values_are_flattened_one_level() {
        let keyed = json!({ "0": { "cantidad": 1 }, "1": [{ "cantidad": 2 }, { "cantidad": 3 }] });
        assert_eq!(normalize_detalles(&keyed).len(), 3);
    }

    #[test]
    fn test_other_shapes_are_empty() {
        assert!(normalize_detalles(&Value::Null).is_empty());
        assert!(normalize_detalles(&json!("texto")).is_empty());
        assert!(normalize_detalles(&json!(3)).is_empty());
        assert!(normalize_detalles(&json!([])).is_empty());
    }

    #[test]
    fn test_direct_fields_win_over_nested() {
        let line = json!({ "nombre_item": "Ceviche", "platillo": { "nombre": "Otro" } });
        assert_eq!(resolve_product_name(&line), "Ceviche");
    }

    #[test]
    fn test_nested_containers() {
        assert_eq!(resolve_product_name(&json!({ "platillo": { "nombreItem": "Pizza" } })), "Pizza");
        assert_eq!(
            resolve_product_name(&json!({ "producto": { "nombre_producto": "Jugo" } })),
            "Jugo"
        );
        assert_eq!(resolve_product_name(&json!({ "item": { "name": "Soup" } })), "Soup");
    }

    #[test]
    fn test_item_id_only_resolves_to_hash_id() {
        let line = json!({ "itemId": 7 });
        assert_eq!(resolve_product_name(&line), "#7");
        assert_eq!(display_product_name(&line, &MenuMap::default()), "#7");
    }

    #[test]
    fn test_menu_lookup_replaces_hash_id() {
        let menu = MenuMap::from_pairs([("7", "Encebollado")]);
        assert_eq!(display_product_name(&json!({ "item_id": "7" }), &menu), "Encebollado");
        assert_eq!(display_product_name(&json!({ "nombre": "Bolón", "itemId": 7 }), &menu), "Bolón");
    }

    #[test]
    fn test_late_fields_and_unresolved() {
        assert_eq!(resolve_product_name(&json!({ "nombreProducto": "Té" })), "Té");
        assert_eq!(resolve_product_name(&json!({ "cantidad": 2 })), UNRESOLVED);
        assert_eq!(resolve_product_name(&Value::Null), UNRESOLVED);
    }
}
