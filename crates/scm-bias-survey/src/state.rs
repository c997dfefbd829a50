//! Survey state store.
//!
//! Every group owns one [`GroupRatings`] record holding both rating sets, so a
//! group can never exist with only one of them. Mutations never touch `self`;
//! they return a fresh [`SurveyState`] and leave the receiver as it was.

use std::sync::Arc;

use scm_bias_core::{mean, Dimension};
use serde::Serialize;

use crate::config::SurveyConfig;
use crate::error::{ConfigError, SurveyError};

/// Fixed-length answers for one dimension of one group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RatingSet {
    slots: Vec<Option<u8>>,
}

impl RatingSet {
    pub fn unanswered(len: usize) -> Self {
        Self {
            slots: vec![None; len],
        }
    }

    pub fn slots(&self) -> &[Option<u8>] {
        &self.slots
    }

    pub fn get(&self, index: usize) -> Option<u8> {
        self.slots.get(index).copied().flatten()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn answered_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Zero-filled running average.
    pub fn mean(&self) -> f64 {
        mean(&self.slots)
    }

    fn set(&mut self, index: usize, value: u8) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) => {
                *slot = Some(value);
                true
            }
            None => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupRatings {
    warmth: RatingSet,
    competence: RatingSet,
}

impl GroupRatings {
    fn unanswered(config: &SurveyConfig) -> Self {
        Self {
            warmth: RatingSet::unanswered(config.warmth_items),
            competence: RatingSet::unanswered(config.competence_items),
        }
    }

    pub fn warmth(&self) -> &RatingSet {
        &self.warmth
    }

    pub fn competence(&self) -> &RatingSet {
        &self.competence
    }

    pub fn dimension(&self, dimension: Dimension) -> &RatingSet {
        match dimension {
            Dimension::Warmth => &self.warmth,
            Dimension::Competence => &self.competence,
        }
    }

    fn dimension_mut(&mut self, dimension: Dimension) -> &mut RatingSet {
        match dimension {
            Dimension::Warmth => &mut self.warmth,
            Dimension::Competence => &mut self.competence,
        }
    }

    pub fn answered_count(&self) -> usize {
        self.warmth.answered_count() + self.competence.answered_count()
    }

    pub fn slot_count(&self) -> usize {
        self.warmth.len() + self.competence.len()
    }

    pub fn is_complete(&self) -> bool {
        self.warmth.is_complete() && self.competence.is_complete()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupEntry {
    name: String,
    ratings: GroupRatings,
}

impl GroupEntry {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ratings(&self) -> &GroupRatings {
        &self.ratings
    }
}

/// Ordered groups and their in-progress answers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurveyState {
    #[serde(skip)]
    config: Arc<SurveyConfig>,
    groups: Vec<GroupEntry>,
}

impl Default for SurveyState {
    fn default() -> Self {
        Self::seeded(Arc::new(SurveyConfig::default()))
    }
}

impl SurveyState {
    /// Validates `config` and seeds its default groups, all unanswered.
    pub fn new(config: SurveyConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::seeded(Arc::new(config)))
    }

    fn seeded(config: Arc<SurveyConfig>) -> Self {
        let groups = config
            .default_groups
            .iter()
            .map(|name| GroupEntry {
                name: name.trim().to_string(),
                ratings: GroupRatings::unanswered(&config),
            })
            .collect();
        Self { config, groups }
    }

    pub fn config(&self) -> &SurveyConfig {
        &self.config
    }

    pub fn groups(&self) -> &[GroupEntry] {
        &self.groups
    }

    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(GroupEntry::name)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn ratings(&self, name: &str) -> Option<&GroupRatings> {
        self.groups
            .iter()
            .find(|g| g.name == name)
            .map(GroupEntry::ratings)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.groups.iter().position(|g| g.name == name)
    }

    /// Appends a group with every slot unanswered. Surrounding whitespace in
    /// `name` is dropped before the uniqueness check.
    pub fn add_group(&self, name: &str) -> Result<Self, SurveyError> {
        let name = name.trim();
        if name.is_empty() {
            tracing::warn!("rejected blank group name");
            return Err(SurveyError::BlankGroupName);
        }
        if self.contains(name) {
            tracing::warn!(group = name, "rejected duplicate group");
            return Err(SurveyError::DuplicateGroup(name.to_string()));
        }

        let mut next = self.clone();
        next.groups.push(GroupEntry {
            name: name.to_string(),
            ratings: GroupRatings::unanswered(&self.config),
        });
        tracing::debug!(group = name, groups = next.len(), "group added");
        Ok(next)
    }

    /// Drops the group and both of its rating sets. Absent names are a no-op.
    pub fn remove_group(&self, name: &str) -> Self {
        let mut next = self.clone();
        match self.position(name) {
            Some(idx) => {
                next.groups.remove(idx);
                tracing::debug!(group = name, groups = next.len(), "group removed");
            }
            None => tracing::debug!(group = name, "remove of absent group ignored"),
        }
        next
    }

    pub fn set_rating(
        &self,
        group: &str,
        dimension: Dimension,
        item_index: usize,
        value: i64,
    ) -> Result<Self, SurveyError> {
        let Some(idx) = self.position(group) else {
            tracing::warn!(group, "rating for unknown group");
            return Err(SurveyError::UnknownGroup(group.to_string()));
        };

        let count = self.config.item_count(dimension);
        if item_index >= count {
            tracing::warn!(group, %dimension, item = item_index, "rating index out of range");
            return Err(SurveyError::IndexOutOfRange {
                dimension,
                index: item_index,
                count,
            });
        }

        let Some(rating) = self.config.rating(value) else {
            tracing::warn!(group, %dimension, item = item_index, value, "rating off scale");
            return Err(SurveyError::InvalidRatingValue {
                value,
                min: self.config.scale_min,
                max: self.config.scale_max,
            });
        };

        let mut next = self.clone();
        let written = next
            .groups
            .get_mut(idx)
            .is_some_and(|entry| entry.ratings.dimension_mut(dimension).set(item_index, rating));
        if !written {
            return Err(SurveyError::IndexOutOfRange {
                dimension,
                index: item_index,
                count,
            });
        }
        tracing::debug!(group, %dimension, item = item_index, value = rating, "rating recorded");
        Ok(next)
    }
}
