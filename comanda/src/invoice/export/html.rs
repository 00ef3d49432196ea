//! HTML invoice rendered from a fixed minijinja template.
//!
//! Values are HTML-escaped by the template engine (the template name ends in
//! `.html`), so product and client names cannot inject markup.

use minijinja::Environment;

use super::document::FacturaDocument;
use crate::core::error::{AppError, Result};
use crate::invoice::view::FacturaView;

const TEMPLATE_NAME: &str = "factura.html";
const TEMPLATE: &str = include_str!("../../../templates/factura.html");

pub fn render_factura_html(view: &FacturaView, generated_at: &str) -> Result<String> {
    let mut env = Environment::new();
    env.add_template(TEMPLATE_NAME, TEMPLATE)
        .map_err(|e| AppError::Export(format!("Plantilla de factura inválida: {}", e)))?;

    let template = env
        .get_template(TEMPLATE_NAME)
        .map_err(|e| AppError::Export(e.to_string()))?;

    template
        .render(FacturaDocument::from_view(view, generated_at))
        .map_err(|e| AppError::Export(format!("No se pudo generar la factura: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invoice::menu::MenuMap;
    use serde_json::json;

    #[test]
    fn test_sections_and_recomputed_totals() {
        let view = FacturaView::from_value(
            &json!({
                "numeroFactura": "F-77",
                "montoSubtotal": 30,
                "montoIva": 0,
                "montoTotal": 30,
                "detalles": [{ "nombre": "Pizza", "cantidad": 3, "precioUnitario": 10 }]
            }),
            &MenuMap::default(),
        );

        let html = render_factura_html(&view, "2024-05-01 10:00").expect("render");

        assert!(html.contains("<title>Factura F-77</title>"));
        assert!(html.contains("<td>Pizza</td>"));
        assert!(html.contains("IVA (19%):"));
        assert!(html.contains("$5.70"));
        assert!(html.contains("<strong>$35.70</strong>"));
        assert!(html.contains("Factura generada el 2024-05-01 10:00"));
        assert!(!html.contains("Sin productos"));
    }

    #[test]
    fn test_empty_invoice_and_escaping() {
        let view = FacturaView::from_value(
            &json!({ "cliente_nombre": "<script>alert(1)</script>" }),
            &MenuMap::default(),
        );

        let html = render_factura_html(&view, "ahora").expect("render");

        assert!(html.contains("Sin productos"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
