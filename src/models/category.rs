use serde::{Deserialize, Serialize};

/// Fixed classification tag for an interruption's cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Hw,    // HW
    Sw,    // SW
    Other, // OTHER
    Unk,   // UNK
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Hw => "HW",
            Category::Sw => "SW",
            Category::Other => "OTHER",
            Category::Unk => "UNK",
        }
    }

    /// Convert a command token → enum. The token must match the wire
    /// spelling exactly (uppercase).
    pub fn from_token(s: &str) -> Option<Self> {
        match s {
            "HW" => Some(Category::Hw),
            "SW" => Some(Category::Sw),
            "OTHER" => Some(Category::Other),
            "UNK" => Some(Category::Unk),
            _ => None,
        }
    }
}
