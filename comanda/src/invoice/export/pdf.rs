//! PDF invoice rendered with genpdf.
//!
//! Needs a TTF family on disk (`LiberationSans-Regular.ttf`, `-Bold`, `-Italic`,
//! `-BoldItalic`); the exporter only calls this when a fonts directory is
//! configured.

use std::path::Path;

use genpdf::elements::{Break, FrameCellDecorator, Paragraph, StyledElement, TableLayout};
use genpdf::style::{Color, Style};
use genpdf::{Alignment, Document, Element, Margins, SimplePageDecorator};

use super::document::FacturaDocument;
use crate::core::error::{AppError, Result};
use crate::invoice::view::FacturaView;

pub const FONT_FAMILY: &str = "LiberationSans";

fn p(text: &str, style: Style) -> StyledElement<Paragraph> {
    Paragraph::new(text).styled(style)
}

fn p_right(text: &str, style: Style) -> impl Element {
    Paragraph::new(text)
        .aligned(Alignment::Right)
        .styled(style)
        .padded(Margins::trbl(1, 2, 1, 1))
}

fn cell(text: &str, style: Style) -> impl Element {
    Paragraph::new(text).styled(style).padded(Margins::trbl(1, 1, 1, 2))
}

fn table_err(section: &str) -> impl Fn(genpdf::error::Error) -> AppError + '_ {
    move |e| AppError::Export(format!("Error en {}: {}", section, e))
}

pub fn render_factura_pdf(view: &FacturaView, fonts_dir: &Path, generated_at: &str) -> Result<Vec<u8>> {
    let fonts = genpdf::fonts::from_files(fonts_dir, FONT_FAMILY, None).map_err(|e| {
        AppError::Export(format!(
            "Error cargando fuentes {} desde {}: {}",
            FONT_FAMILY,
            fonts_dir.display(),
            e
        ))
    })?;

    let doc_data = FacturaDocument::from_view(view, generated_at);

    let mut doc = Document::new(fonts);
    doc.set_title(format!("Factura {}", doc_data.numero));

    let mut decorator = SimplePageDecorator::new();
    decorator.set_margins(Margins::trbl(15, 15, 15, 15));
    doc.set_page_decorator(decorator);

    let accent = Color::Rgb(215, 38, 61);
    let s_title = Style::new().with_font_size(22).bold().with_color(accent);
    let s_section = Style::new().with_font_size(11).bold().with_color(accent);
    let s_normal = Style::new().with_font_size(9);
    let s_bold = Style::new().with_font_size(9).bold();
    let s_total = Style::new().with_font_size(12).bold().with_color(accent);
    let s_footer = Style::new().with_font_size(7).with_color(Color::Greyscale(128));

    doc.push(Paragraph::new("FACTURA").aligned(Alignment::Center).styled(s_title));
    doc.push(
        Paragraph::new(format!("N° {}", doc_data.numero))
            .aligned(Alignment::Center)
            .styled(s_normal),
    );
    doc.push(Break::new(1.0));

    // General info and client side by side
    let mut info = TableLayout::new(vec![1, 1]);
    info.set_cell_decorator(FrameCellDecorator::new(true, true, false));
    let mut general = genpdf::elements::LinearLayout::vertical();
    general.push(p("Información General", s_section));
    general.push(p(&format!("Fecha: {}", doc_data.fecha), s_normal));
    general.push(p(&format!("Estado: {}", doc_data.estado), s_normal));
    let mut cliente = genpdf::elements::LinearLayout::vertical();
    cliente.push(p("Cliente", s_section));
    cliente.push(p(&format!("Nombre: {}", doc_data.cliente_nombre), s_normal));
    cliente.push(p(&format!("Cédula: {}", doc_data.cliente_cedula), s_normal));
    cliente.push(p(&format!("Correo: {}", doc_data.cliente_email), s_normal));
    info.row()
        .element(general.padded(Margins::trbl(2, 3, 2, 3)))
        .element(cliente.padded(Margins::trbl(2, 3, 2, 3)))
        .push()
        .map_err(table_err("datos generales"))?;
    doc.push(info);
    doc.push(Break::new(1.0));

    doc.push(p("Detalle de Productos", s_section));
    let mut lines = TableLayout::new(vec![6, 2, 2, 2]);
    lines.set_cell_decorator(FrameCellDecorator::new(true, true, false));
    lines
        .row()
        .element(cell("Producto", s_bold))
        .element(cell("Cantidad", s_bold))
        .element(p_right("Precio Unit.", s_bold))
        .element(p_right("Subtotal", s_bold))
        .push()
        .map_err(table_err("encabezado de productos"))?;

    if doc_data.lines.is_empty() {
        lines
            .row()
            .element(cell("Sin productos", s_normal))
            .element(cell("", s_normal))
            .element(cell("", s_normal))
            .element(cell("", s_normal))
            .push()
            .map_err(table_err("productos"))?;
    }
    for line in &doc_data.lines {
        lines
            .row()
            .element(cell(&line.producto, s_normal))
            .element(cell(&line.cantidad, s_normal))
            .element(p_right(&format!("${}", line.precio), s_normal))
            .element(p_right(&format!("${}", line.subtotal), s_normal))
            .push()
            .map_err(table_err("productos"))?;
    }
    doc.push(lines);
    doc.push(Break::new(1.0));

    let mut resumen = TableLayout::new(vec![4, 1]);
    for (label, value, style) in [
        ("Subtotal:", &doc_data.subtotal, s_normal),
        ("IVA (19%):", &doc_data.iva, s_normal),
        ("TOTAL:", &doc_data.total, s_total),
    ] {
        resumen
            .row()
            .element(p_right(label, style))
            .element(p_right(&format!("${}", value), style))
            .push()
            .map_err(table_err("resumen"))?;
    }
    doc.push(resumen);
    doc.push(Break::new(2.0));

    doc.push(
        Paragraph::new(format!("Factura generada el {}", doc_data.generated_at))
            .aligned(Alignment::Center)
            .styled(s_footer),
    );
    doc.push(
        Paragraph::new("Gracias por su compra")
            .aligned(Alignment::Center)
            .styled(s_footer),
    );

    let mut buffer = Vec::new();
    doc.render(&mut buffer)
        .map_err(|e| AppError::Export(format!("Error generando PDF: {}", e)))?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invoice::menu::MenuMap;
    use serde_json::json;

    #[test]
    fn test_missing_fonts_is_an_export_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let view = FacturaView::from_value(&json!({ "numero": "F-1" }), &MenuMap::default());

        let result = render_factura_pdf(&view, dir.path(), "hoy");

        assert!(matches!(result, Err(AppError::Export(_))));
    }
}
