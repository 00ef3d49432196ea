//! CSV export of an invoice collection.

use chrono::{DateTime, Local};

use crate::invoice::totals::format_money;
use crate::invoice::view::{FacturaView, NOT_AVAILABLE};

pub const CSV_HEADER: &str =
    "Factura,Fecha,Cliente,Cedula,Correo,Producto,Cantidad,Precio Unitario,Subtotal Item";

/// Quote a field, doubling embedded quotes.
pub fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// One row per invoice line; invoices without lines get a single row with the
/// product columns left empty.
pub fn facturas_to_csv(facturas: &[FacturaView]) -> String {
    let mut rows = vec![CSV_HEADER.to_string()];

    for factura in facturas {
        let fecha = factura.fecha_label();
        let head = [
            factura.numero_label(),
            fecha.as_str(),
            factura.cliente.nombre.as_deref().unwrap_or(NOT_AVAILABLE),
            factura.cliente.cedula.as_deref().unwrap_or(NOT_AVAILABLE),
            factura.cliente.email.as_deref().unwrap_or(NOT_AVAILABLE),
        ];

        if factura.lines.is_empty() {
            rows.push(join_row(head.iter().copied().chain(["", "", "", ""])));
            continue;
        }

        for line in &factura.lines {
            let cantidad = line.cantidad_label();
            let precio = format_money(line.precio_unitario);
            let subtotal = format_money(line.subtotal);
            let tail = [line.producto.as_str(), cantidad.as_str(), precio.as_str(), subtotal.as_str()];
            rows.push(join_row(head.iter().copied().chain(tail)));
        }
    }

    rows.join("\n")
}

fn join_row<'a>(fields: impl Iterator<Item = &'a str>) -> String {
    fields.map(quote).collect::<Vec<_>>().join(",")
}

/// `Facturas_<dd-MM-yyyy_HHmmss>.csv`
pub fn csv_file_name(now: DateTime<Local>) -> String {
    format!("Facturas_{}.csv", now.format("%d-%m-%Y_%H%M%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invoice::menu::MenuMap;
    use chrono::TimeZone;
    use serde_json::json;

    fn view(value: serde_json::Value) -> FacturaView {
        FacturaView::from_value(&value, &MenuMap::default())
    }

    #[test]
    fn test_two_lines_make_three_output_lines() {
        let factura = view(json!({
            "numero_factura": "F-1",
            "fecha": "2024-05-01",
            "cliente_nombre": "Bar \"El Rincón\"",
            "usuario_cedula": "0912",
            "cliente_email": "bar@example.com",
            "detalles": [
                { "nombre": "Pizza", "cantidad": 2, "precio_unitario": 10, "subtotal": 20 },
                { "nombre": "Agua", "cantidad": 1, "precio_unitario": 1.5 }
            ]
        }));

        let csv = facturas_to_csv(&[factura]);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(
            lines[1],
            r#""F-1","01/05/2024","Bar ""El Rincón""","0912","bar@example.com","Pizza","2","10.00","20.00""#
        );
        assert!(lines[2].ends_with(r#""Agua","1","1.50","1.50""#));
    }

    #[test]
    fn test_invoice_without_lines_gets_placeholder_row() {
        let csv = facturas_to_csv(&[view(json!({ "numero": "F-2" }))]);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], r#""F-2","N/A","N/A","N/A","N/A","","","","""#);
    }

    #[test]
    fn test_every_row_has_nine_columns() {
        let csv = facturas_to_csv(&[view(json!({ "detalles": [{ "nombre": "a,b" }] }))]);
        let row = csv.lines().nth(1).expect("row");
        assert_eq!(row.matches("\",\"").count(), 8);
    }

    #[test]
    fn test_file_name_format() {
        let now = Local.with_ymd_and_hms(2024, 3, 5, 14, 7, 9).single().expect("valid time");
        assert_eq!(csv_file_name(now), "Facturas_05-03-2024_140709.csv");
    }
}
