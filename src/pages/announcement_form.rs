use tracing::info;

use crate::dtos::results::CreateMatchAnnouncementResult;
use crate::models::match_announcement::{
    AdmittedCategories, CreateMatchAnnouncementRequest, Location, TimeSlotInput,
};
use crate::models::team::{Category, Sport};
use crate::usecases::CreateMatchAnnouncementUseCase;

pub const INCOMPLETE_FORM: &str = "Por favor completa todos los campos obligatorios";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryRangeType {
    #[default]
    Specific,
    GreaterThan,
    LessThan,
    Between,
}

/// State of the "publish a match" form. Times are `HH:MM`, the day is
/// `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnouncementForm {
    pub sport: Sport,
    pub team_name: String,
    pub day: String,
    pub start_time: String,
    pub end_time: String,
    pub country: String,
    pub province: String,
    pub locality: String,
    pub min_level: u8,
    pub max_level: u8,
    range_type: CategoryRangeType,
    selected_categories: Vec<u8>,
}

impl Default for AnnouncementForm {
    fn default() -> Self {
        AnnouncementForm {
            sport: Sport::Paddle,
            team_name: String::new(),
            day: String::new(),
            start_time: String::new(),
            end_time: String::new(),
            country: "Argentina".to_string(),
            province: "Buenos Aires".to_string(),
            locality: String::new(),
            min_level: Category::MIN_RANKED,
            max_level: Category::MAX,
            range_type: CategoryRangeType::Specific,
            selected_categories: Vec::new(),
        }
    }
}

impl AnnouncementForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn range_type(&self) -> CategoryRangeType {
        self.range_type
    }

    pub fn selected_categories(&self) -> &[u8] {
        &self.selected_categories
    }

    /// Switching the range type starts the level choice over.
    pub fn set_range_type(&mut self, range_type: CategoryRangeType) {
        self.range_type = range_type;
        self.selected_categories.clear();
        self.min_level = Category::MIN_RANKED;
        self.max_level = Category::MAX;
    }

    pub fn toggle_category(&mut self, category: Category) {
        let level = category.level();
        match self.selected_categories.binary_search(&level) {
            Ok(index) => {
                self.selected_categories.remove(index);
            }
            Err(index) => self.selected_categories.insert(index, level),
        }
    }

    pub fn is_complete(&self) -> bool {
        let filled = [
            &self.team_name,
            &self.day,
            &self.start_time,
            &self.end_time,
            &self.locality,
        ]
        .iter()
        .all(|field| !field.is_empty());

        filled && (self.range_type != CategoryRangeType::Specific || !self.selected_categories.is_empty())
    }

    pub fn admitted_categories(&self) -> AdmittedCategories {
        match self.range_type {
            CategoryRangeType::Specific => AdmittedCategories::Specific {
                categories: self.selected_categories.clone(),
            },
            CategoryRangeType::GreaterThan => AdmittedCategories::GreaterThan {
                min_level: self.min_level,
            },
            CategoryRangeType::LessThan => AdmittedCategories::LessThan {
                max_level: self.max_level,
            },
            CategoryRangeType::Between => AdmittedCategories::Between {
                min_level: self.min_level,
                max_level: self.max_level,
            },
        }
    }

    pub fn to_request(&self) -> CreateMatchAnnouncementRequest {
        CreateMatchAnnouncementRequest {
            team_name: self.team_name.clone(),
            sport: self.sport.to_string(),
            day: self.day.clone(),
            time_slot: TimeSlotInput {
                start_time: format!("{}T{}:00", self.day, self.start_time),
                end_time: format!("{}T{}:00", self.day, self.end_time),
            },
            location: Location::new(&self.country, &self.province, &self.locality),
            admitted_categories: self.admitted_categories(),
        }
    }

    /// Submits the form. Sport, country and province survive a successful
    /// submission so the next announcement starts from them.
    pub async fn submit(&mut self, use_case: &CreateMatchAnnouncementUseCase) -> CreateMatchAnnouncementResult {
        if !self.is_complete() {
            return CreateMatchAnnouncementResult::failed(INCOMPLETE_FORM);
        }

        let result = use_case.execute(&self.to_request()).await;
        if result.success {
            info!("Announcement for '{}' on {} published", self.team_name, self.day);
            self.team_name.clear();
            self.day.clear();
            self.start_time.clear();
            self.end_time.clear();
            self.locality.clear();
            self.selected_categories.clear();
        }
        result
    }
}
