//! App catalog listed in the drawer. Launching is not wired to anything.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppEntry {
    pub name: &'static str,
    pub glyph: &'static str,
}

pub const APP_CATALOG: [AppEntry; 8] = [
    AppEntry { name: "App Store", glyph: "◈" },
    AppEntry { name: "Chronos", glyph: "◷" },
    AppEntry { name: "Notes", glyph: "✎" },
    AppEntry { name: "Calculator", glyph: "±" },
    AppEntry { name: "Music", glyph: "♫" },
    AppEntry { name: "Photos", glyph: "▤" },
    AppEntry { name: "Settings", glyph: "⚙" },
    AppEntry { name: "Maps", glyph: "⌖" },
];

/// Status line shown after picking an app.
pub fn launch_message(entry: &AppEntry, not_available: &str) -> String {
    format!("{} {not_available}", entry.name)
}
