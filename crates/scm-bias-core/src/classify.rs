use std::fmt;

/// Midpoint of the 1..=7 Likert scale.
pub const SCALE_MIDPOINT: f64 = 4.0;

/// Stereotype content quadrant of the warmth x competence plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Quadrant {
    Admired,
    Paternalized,
    Envied,
    Dehumanized,
}

impl Quadrant {
    pub const ALL: [Self; 4] = [
        Self::Admired,
        Self::Paternalized,
        Self::Envied,
        Self::Dehumanized,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Admired => "Admired",
            Self::Paternalized => "Paternalized",
            Self::Envied => "Envied",
            Self::Dehumanized => "Dehumanized",
        }
    }

    pub fn bias(self) -> Bias {
        bias_for(self)
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Predicted emotion and behavioral tendency for a quadrant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Bias {
    pub emotion: &'static str,
    pub behavior: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadrantPolicy {
    pub threshold: f64,
}

impl Default for QuadrantPolicy {
    fn default() -> Self {
        Self {
            threshold: SCALE_MIDPOINT,
        }
    }
}

impl QuadrantPolicy {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// A score at the threshold counts as high. NaN is never high.
    pub fn is_high(&self, score: f64) -> bool {
        score >= self.threshold
    }

    pub fn classify(&self, warmth: f64, competence: f64) -> Quadrant {
        match (self.is_high(warmth), self.is_high(competence)) {
            (true, true) => Quadrant::Admired,
            (true, false) => Quadrant::Paternalized,
            (false, true) => Quadrant::Envied,
            (false, false) => Quadrant::Dehumanized,
        }
    }
}

/// Classifies with the scale-midpoint threshold on both axes.
pub fn quadrant(warmth: f64, competence: f64) -> Quadrant {
    QuadrantPolicy::default().classify(warmth, competence)
}

pub fn bias_for(quadrant: Quadrant) -> Bias {
    match quadrant {
        Quadrant::Admired => Bias {
            emotion: "Admiration",
            behavior: "Active & Passive Help",
        },
        Quadrant::Paternalized => Bias {
            emotion: "Pity",
            behavior: "Active Help, Passive Neglect",
        },
        Quadrant::Envied => Bias {
            emotion: "Envy",
            behavior: "Passive Help, Active Harm",
        },
        Quadrant::Dehumanized => Bias {
            emotion: "Contempt",
            behavior: "Active & Passive Harm",
        },
    }
}
