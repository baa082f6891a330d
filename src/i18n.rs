//! Label catalog for the shade tiles and drawer. Unknown keys render as-is.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    Es,
}

impl Language {
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Language::En),
            "es" => Some(Language::Es),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
        }
    }

    /// Translated label, or the key itself when the catalog has no entry.
    pub fn label<'a>(self, key: &'a str) -> &'a str {
        let table: &[(&str, &str)] = match self {
            Language::En => EN,
            Language::Es => ES,
        };
        table
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
            .unwrap_or(key)
    }
}

const EN: &[(&str, &str)] = &[
    ("SILENT", "Silent"),
    ("TONE", "Tone"),
    ("MINIMAL", "Minimal"),
    ("DAYLIGHT", "Daylight"),
    ("SECONDS", "Seconds"),
    ("24H", "24-hour"),
    ("WEATHER", "Weather"),
    ("MOTION", "Motion"),
    ("EFFECTS", "Effects"),
    ("WALLPAPER", "Wallpaper"),
    ("APPS", "Apps"),
    ("CONTROLS", "Controls"),
    ("UNAVAILABLE", "Weather unavailable"),
    ("NOT_AVAILABLE", "is not available yet"),
];

const ES: &[(&str, &str)] = &[
    ("SILENT", "Silencio"),
    ("TONE", "Tono"),
    ("MINIMAL", "Mínimo"),
    ("DAYLIGHT", "Luz de día"),
    ("SECONDS", "Segundos"),
    ("24H", "24 horas"),
    ("WEATHER", "Clima"),
    ("MOTION", "Movimiento"),
    ("EFFECTS", "Efectos"),
    ("WALLPAPER", "Fondo"),
    ("APPS", "Aplicaciones"),
    ("CONTROLS", "Controles"),
    ("UNAVAILABLE", "Clima no disponible"),
    ("NOT_AVAILABLE", "aún no está disponible"),
];
