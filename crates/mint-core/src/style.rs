//! Compact dark popup theme.
//!
//! Declarations are handed to the surface as-is. The surface adds
//! `cursor: pointer` to lines marked clickable.

pub type Style = &'static [(&'static str, &'static str)];

pub const CONTAINER: Style = &[
    ("position", "absolute"),
    ("background", "#222"),
    ("color", "#eee"),
    ("padding", "8px"),
    ("border", "1px solid #444"),
    ("borderRadius", "4px"),
    ("zIndex", "99999"),
    ("maxWidth", "260px"),
    ("fontSize", "12px"),
    ("fontFamily", "sans-serif"),
    ("boxShadow", "0 2px 6px rgba(0,0,0,0.7)"),
    ("pointerEvents", "auto"),
];

pub const TITLE: Style = &[
    ("margin", "0 0 4px"),
    ("fontSize", "13px"),
    ("fontWeight", "600"),
    ("color", "#fff"),
];

pub const ALT_ITEM: Style = &[("padding", "2px 0"), ("fontSize", "12px"), ("color", "#ddd")];

pub const BUTTON: Style = &[
    ("display", "block"),
    ("width", "100%"),
    ("margin", "0"),
    ("padding", "6px 0"),
    ("background", "transparent"),
    ("color", "#1e90ff"),
    ("border", "none"),
    ("borderRadius", "0"),
    ("fontSize", "12px"),
    ("textAlign", "center"),
];

pub const DIVIDER: Style = &[
    ("border", "none"),
    ("height", "1px"),
    ("background", "#444"),
    ("margin", "6px 0"),
];
