use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The four recommendation lists pulled out of one completion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub restaurants: Vec<String>,
    pub breakfasts: Vec<String>,
    pub dinners: Vec<String>,
    pub workouts: Vec<String>,
}

/// Sections in the order they appear in a completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Section {
    Restaurants,
    Breakfast,
    Dinner,
    Workouts,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Restaurants,
        Section::Breakfast,
        Section::Dinner,
        Section::Workouts,
    ];

    pub fn heading(self) -> &'static str {
        match self {
            Section::Restaurants => "Restaurants",
            Section::Breakfast => "Breakfast",
            Section::Dinner => "Dinner",
            Section::Workouts => "Workouts",
        }
    }

    pub fn fallback_message(self) -> &'static str {
        match self {
            Section::Restaurants => "No restaurant recommendations available.",
            Section::Breakfast => "No breakfast recommendations available.",
            Section::Dinner => "No dinner recommendations available.",
            Section::Workouts => "No workout recommendations available.",
        }
    }
}

impl RecommendationResult {
    pub fn items(&self, section: Section) -> &[String] {
        match section {
            Section::Restaurants => &self.restaurants,
            Section::Breakfast => &self.breakfasts,
            Section::Dinner => &self.dinners,
            Section::Workouts => &self.workouts,
        }
    }

    pub fn is_empty(&self) -> bool {
        Section::ALL.iter().all(|s| self.items(*s).is_empty())
    }

    /// Caller-side rendering: each section's lines, or its fallback message.
    pub fn sections(&self) -> Vec<SectionView> {
        Section::ALL
            .iter()
            .map(|&section| SectionView::new(section, self.items(section)))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionView {
    pub section: Section,
    pub heading: String,
    pub items: Vec<String>,
    /// Set only when `items` is empty.
    pub message: Option<String>,
}

impl SectionView {
    fn new(section: Section, items: &[String]) -> Self {
        Self {
            section,
            heading: section.heading().to_string(),
            items: items.to_vec(),
            message: items
                .is_empty()
                .then(|| section.fallback_message().to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub request_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub recommendations: RecommendationResult,
    pub sections: Vec<SectionView>,
}
