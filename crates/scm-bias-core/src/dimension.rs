use std::fmt;

/// Latent perceptual axis a questionnaire item measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Dimension {
    Warmth,
    Competence,
}

impl Dimension {
    pub const ALL: [Self; 2] = [Self::Warmth, Self::Competence];

    pub fn label(self) -> &'static str {
        match self {
            Self::Warmth => "Warmth",
            Self::Competence => "Competence",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
