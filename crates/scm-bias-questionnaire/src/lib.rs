use scm_bias_core::Dimension;

pub const LIKERT_MIN: u8 = 1;
pub const LIKERT_MAX: u8 = 7;
pub const LIKERT_SCALE: [u8; 7] = [1, 2, 3, 4, 5, 6, 7];

pub const WARMTH_ITEMS: [&str; 5] = [
    "…is trustworthy",
    "…has good intentions toward our team/org",
    "…is friendly and approachable",
    "…is honest and sincere",
    "…would cooperate rather than compete if resources were scarce",
];

pub const COMPETENCE_ITEMS: [&str; 5] = [
    "…is capable of achieving its goals",
    "…possesses the skills and expertise required for success",
    "…is efficient and reliable in execution",
    "…has the resources or status to get things done",
    "…earns respect for technical or strategic excellence",
];

/// Groups present when a fresh survey starts.
pub const DEFAULT_GROUPS: [&str; 2] = ["Cloud Engineering", "Compliance (Regional)"];

/// Display labels for the selection, rating and results stages, in order.
pub const STAGE_LABELS: [&str; 3] = ["Groups", "Survey", "BIAS Map"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionnaireItem {
    pub dimension: Dimension,
    pub index: usize,
    pub text: &'static str,
}

pub fn items(dimension: Dimension) -> &'static [&'static str] {
    match dimension {
        Dimension::Warmth => &WARMTH_ITEMS,
        Dimension::Competence => &COMPETENCE_ITEMS,
    }
}

pub fn item_count(dimension: Dimension) -> usize {
    items(dimension).len()
}

pub fn item_text(dimension: Dimension, index: usize) -> Option<&'static str> {
    items(dimension).get(index).copied()
}

/// Every item, warmth first, in questionnaire order.
pub fn all_items() -> impl Iterator<Item = QuestionnaireItem> {
    Dimension::ALL.into_iter().flat_map(|dimension| {
        items(dimension)
            .iter()
            .copied()
            .enumerate()
            .map(move |(index, text)| QuestionnaireItem {
                dimension,
                index,
                text,
            })
    })
}
