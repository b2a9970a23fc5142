use std::io::Cursor;

use anyhow::Context;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use image::{ImageFormat, Luma};
use qrcode::QrCode;

/// Encode `text` as a QR image and return it as a PNG data URI, ready to be
/// dropped into an `<img src=...>` by the admin front-end.
pub fn encode_data_uri(text: &str) -> anyhow::Result<String> {
    let code = QrCode::new(text.as_bytes()).context("build QR matrix")?;
    let img = code.render::<Luma<u8>>().build();

    let mut png = Vec::new();
    img.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .context("encode QR PNG")?;

    Ok(format!("data:image/png;base64,{}", BASE64.encode(&png)))
}
