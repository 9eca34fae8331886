//! The categorical rating vocabulary used across the systematization data.
//!
//! Each label maps to exactly one display glyph. The set is closed; values
//! outside it are carried through as raw strings by the record types.

// ---------------------------------------------------------------------------
// Rating
// ---------------------------------------------------------------------------

/// A categorical value as it appears in the CSV data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rating {
    Yes,
    No,
    Conditional,
    YesConditional,
    ConditionalYes,
    Strong,
    Weak,
    NotApplicable,
    High,
    Medium,
    Low,
}

impl Rating {
    pub const ALL: [Self; 11] = [
        Self::Yes,
        Self::No,
        Self::Conditional,
        Self::YesConditional,
        Self::ConditionalYes,
        Self::Strong,
        Self::Weak,
        Self::NotApplicable,
        Self::High,
        Self::Medium,
        Self::Low,
    ];

    /// The label as written in the source data.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
            Self::Conditional => "Conditional",
            Self::YesConditional => "Yes/Conditional",
            Self::ConditionalYes => "Conditional/Yes",
            Self::Strong => "Strong",
            Self::Weak => "Weak",
            Self::NotApplicable => "N/A",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    /// The glyph used in the rendered tables.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Yes => "✓",
            Self::No => "✗",
            Self::Conditional => "±",
            Self::YesConditional => "✓/±",
            Self::ConditionalYes => "±/✓",
            Self::Medium => "Med",
            Self::Strong | Self::Weak | Self::NotApplicable | Self::High | Self::Low => {
                self.label()
            }
        }
    }

    /// Exact, case-sensitive lookup by label.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|rating| rating.label() == label)
    }

    /// Whether `value` is exactly this rating's label.
    #[must_use]
    pub fn matches(self, value: &str) -> bool {
        self.label() == value
    }
}
