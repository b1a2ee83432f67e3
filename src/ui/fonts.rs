use egui::{Context, FontData, FontDefinitions, FontFamily};
use std::sync::Arc;

const FONT_NAME: &str = "japanese";

/// Fuentes del sistema con glifos japoneses, en orden de preferencia
#[cfg(not(target_arch = "wasm32"))]
const CANDIDATES: &[&str] = &[
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/fonts-japanese-gothic.ttf",
    "/System/Library/Fonts/ヒラギノ角ゴシック W3.ttc",
    "/System/Library/Fonts/Hiragino Sans GB.ttc",
    "C:\\Windows\\Fonts\\YuGothM.ttc",
    "C:\\Windows\\Fonts\\meiryo.ttc",
    "C:\\Windows\\Fonts\\msgothic.ttc",
];

/// En web la fuente se sirve junto al bundle (relativo a la página)
#[cfg(target_arch = "wasm32")]
const WEB_CANDIDATES: &[&str] = &[
    "assets/fonts/NotoSansJP-Regular.ttf",
    "assets/fonts/NotoSansJP-Regular.otf",
];

/// Las fuentes por defecto de egui no traen kanji ni kana: se añade la
/// primera fuente japonesa que se encuentre como respaldo.
pub fn install_japanese_fonts(ctx: &Context) {
    #[cfg(not(target_arch = "wasm32"))]
    {
        let Some((path, bytes)) = CANDIDATES
            .iter()
            .find_map(|p| std::fs::read(p).ok().map(|b| (*p, b)))
        else {
            log::warn!("No se encontró ninguna fuente japonesa; el texto puede verse como cuadros");
            return;
        };
        log::info!("Fuente japonesa: {path}");
        ctx.set_fonts(japanese_font_definitions(bytes));
    }
    #[cfg(target_arch = "wasm32")]
    {
        // Descarga asíncrona: hasta que llegue se ve la fuente por defecto
        let ctx = ctx.clone();
        wasm_bindgen_futures::spawn_local(async move {
            for url in WEB_CANDIDATES {
                match fetch_bytes(url).await {
                    Ok(bytes) => {
                        log::info!("Fuente japonesa: {url}");
                        ctx.set_fonts(japanese_font_definitions(bytes));
                        ctx.request_repaint();
                        return;
                    }
                    Err(e) => log::debug!("Fuente no disponible en {url}: {e}"),
                }
            }
            log::warn!("No se encontró ninguna fuente japonesa; el texto puede verse como cuadros");
        });
    }
}

/// Fuentes por defecto de egui con `bytes` como respaldo en las familias
/// proporcional y monoespaciada
pub fn japanese_font_definitions(bytes: Vec<u8>) -> FontDefinitions {
    let mut fonts = FontDefinitions::default();
    fonts
        .font_data
        .insert(FONT_NAME.to_owned(), Arc::new(FontData::from_owned(bytes)));
    for family in [FontFamily::Proportional, FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push(FONT_NAME.to_owned());
    }
    fonts
}

#[cfg(target_arch = "wasm32")]
async fn fetch_bytes(url: &str) -> Result<Vec<u8>, String> {
    use eframe::wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::Response;

    let window = web_sys::window().ok_or("no existe window en entorno WASM")?;
    let value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| format!("fetch falló: {e:?}"))?;
    let response: Response = value
        .dyn_into()
        .map_err(|_| "la respuesta fetch no es un Response válido".to_owned())?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    let buffer = response
        .array_buffer()
        .map_err(|e| format!("{e:?}"))?;
    let buffer = JsFuture::from(buffer)
        .await
        .map_err(|e| format!("no se pudo leer el cuerpo: {e:?}"))?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}
