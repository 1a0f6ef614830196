use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the three geometry instruments shown by the overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tool {
    Protractor,
    SetSquare,
    Ruler,
}

impl Tool {
    pub const ALL: [Tool; 3] = [Tool::Protractor, Tool::SetSquare, Tool::Ruler];

    /// Position of the tool in per-tool arrays.
    pub fn index(self) -> usize {
        match self {
            Tool::Protractor => 0,
            Tool::SetSquare => 1,
            Tool::Ruler => 2,
        }
    }

    /// Bitmap file name looked up in the assets directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Tool::Protractor => "rapporteur.png",
            Tool::SetSquare => "equerre.png",
            Tool::Ruler => "regle.png",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tool::Protractor => write!(f, "Rapporteur"),
            Tool::SetSquare => write!(f, "Équerre"),
            Tool::Ruler => write!(f, "Règle"),
        }
    }
}

/// What the overlay window shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToolMode {
    /// A single tool; dragging moves the whole window.
    Single(Tool),
    /// Set square and ruler side by side, each moved and turned on its own.
    SquareAndRuler,
}

impl Default for ToolMode {
    fn default() -> Self {
        ToolMode::Single(Tool::Protractor)
    }
}

impl ToolMode {
    /// Entries of the mode selector, in display order.
    pub const ALL: [ToolMode; 4] = [
        ToolMode::Single(Tool::Protractor),
        ToolMode::Single(Tool::SetSquare),
        ToolMode::Single(Tool::Ruler),
        ToolMode::SquareAndRuler,
    ];

    /// Tools drawn in this mode, in hit-test order.
    pub fn tools(self) -> &'static [Tool] {
        match self {
            ToolMode::Single(Tool::Protractor) => &[Tool::Protractor],
            ToolMode::Single(Tool::SetSquare) => &[Tool::SetSquare],
            ToolMode::Single(Tool::Ruler) => &[Tool::Ruler],
            ToolMode::SquareAndRuler => &[Tool::SetSquare, Tool::Ruler],
        }
    }

    pub fn is_combined(self) -> bool {
        matches!(self, ToolMode::SquareAndRuler)
    }

    /// Parse the short command-line spelling of a mode.
    pub fn from_arg(s: &str) -> Option<ToolMode> {
        match s.to_ascii_lowercase().as_str() {
            "rapporteur" | "protractor" => Some(ToolMode::Single(Tool::Protractor)),
            "equerre" | "set-square" => Some(ToolMode::Single(Tool::SetSquare)),
            "regle" | "ruler" => Some(ToolMode::Single(Tool::Ruler)),
            "equerre-regle" | "square-and-ruler" => Some(ToolMode::SquareAndRuler),
            _ => None,
        }
    }
}

impl fmt::Display for ToolMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolMode::Single(tool) => write!(f, "{tool}"),
            ToolMode::SquareAndRuler => write!(f, "Équerre + Règle"),
        }
    }
}
