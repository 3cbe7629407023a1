//! Unicode QR rendering for open-table codes

use qrcode::{QrCode, render::unicode};

/// Render a URL as a unicode QR code suitable for terminal display.
pub fn render_unicode(url: &str) -> Result<String, qrcode::types::QrError> {
    let code = QrCode::new(url.as_bytes())?;
    Ok(code
        .render::<unicode::Dense1x2>()
        .dark_color(unicode::Dense1x2::Dark)
        .light_color(unicode::Dense1x2::Light)
        .build())
}
