use printpdf::{BuiltinFont, Mm, PdfDocument};

use crate::server::{
    error::{internal::InternalError, AppError},
    model::export::PdfContent,
};

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 20.0;
const VALUE_OFFSET_MM: f32 = 50.0;
const BOTTOM_MM: f32 = 20.0;
const MAX_VALUE_CHARS: usize = 90;

/// Renders the content onto a single A4 page.
///
/// Lines that would run past the bottom margin are dropped.
pub fn render_pdf(content: &PdfContent) -> Result<Vec<u8>, AppError> {
    render(content).map_err(|e| InternalError::Pdf(e.to_string()).into())
}

fn render(content: &PdfContent) -> Result<Vec<u8>, printpdf::Error> {
    let (doc, page, layer) = PdfDocument::new(
        content.title.as_str(),
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Content",
    );
    let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;
    let layer = doc.get_page(page).get_layer(layer);

    let mut y = PAGE_HEIGHT_MM - MARGIN_MM;

    for (index, line) in content.header.iter().enumerate() {
        let font = if index == 0 { &bold } else { &regular };
        layer.use_text(line.as_str(), 10.0, Mm(MARGIN_MM), Mm(y), font);
        y -= 5.0;
    }

    y -= 8.0;
    layer.use_text(content.title.as_str(), 18.0, Mm(MARGIN_MM), Mm(y), &bold);
    y -= 12.0;

    'sections: for section in &content.sections {
        if y < BOTTOM_MM {
            break;
        }
        layer.use_text(section.heading.as_str(), 12.0, Mm(MARGIN_MM), Mm(y), &bold);
        y -= 7.0;

        for (label, value) in &section.lines {
            if y < BOTTOM_MM {
                break 'sections;
            }
            layer.use_text(label.as_str(), 10.0, Mm(MARGIN_MM), Mm(y), &bold);
            layer.use_text(
                truncate(value),
                10.0,
                Mm(MARGIN_MM + VALUE_OFFSET_MM),
                Mm(y),
                &regular,
            );
            y -= 5.5;
        }

        y -= 5.0;
    }

    doc.save_to_bytes()
}

fn truncate(value: &str) -> String {
    if value.chars().count() <= MAX_VALUE_CHARS {
        return value.to_string();
    }

    let mut short: String = value.chars().take(MAX_VALUE_CHARS - 3).collect();
    short.push_str("...");
    short
}
