use serde::Serialize;

use crate::domain::deal::Deal;
use crate::domain::search::SearchState;
use crate::domain::types::Platform;
use crate::forms::search::SearchForm;

/// City pre-filled in the search form and used by category shortcuts.
pub const DEFAULT_CITY: &str = "Москва";

/// Shortcut search shown on the landing page before the first search.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PopularCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub query: &'static str,
    pub description: &'static str,
}

pub const POPULAR_CATEGORIES: [PopularCategory; 4] = [
    PopularCategory {
        id: "food",
        name: "Еда и Рестораны",
        query: "скидки в ресторанах суши пицца",
        description: "Вкусные предложения рядом",
    },
    PopularCategory {
        id: "sport",
        name: "Спорт и Фитнес",
        query: "акции в фитнес клубах абонемент",
        description: "Спортзалы и секции",
    },
    PopularCategory {
        id: "fashion",
        name: "Одежда и Обувь",
        query: "распродажа одежды и обуви",
        description: "Тренды по лучшим ценам",
    },
    PopularCategory {
        id: "fun",
        name: "Развлечения",
        query: "скидки в кино и парки развлечений",
        description: "Кино, парки, квесты",
    },
];

/// Option of the platform selector.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PlatformOption {
    pub value: &'static str,
    pub label: &'static str,
}

impl From<Platform> for PlatformOption {
    fn from(platform: Platform) -> Self {
        Self {
            value: platform.as_str(),
            label: platform.label(),
        }
    }
}

/// Values echoed back into the search form.
#[derive(Debug, Clone, Serialize)]
pub struct FormValues {
    pub city: String,
    pub query: String,
    pub platform: String,
}

impl Default for FormValues {
    fn default() -> Self {
        Self {
            city: DEFAULT_CITY.to_string(),
            query: String::new(),
            platform: Platform::All.as_str().to_string(),
        }
    }
}

impl From<&SearchForm> for FormValues {
    fn from(form: &SearchForm) -> Self {
        Self {
            city: form.city.trim().to_string(),
            query: form.query.trim().to_string(),
            platform: form
                .platform
                .clone()
                .filter(|p| !p.trim().is_empty())
                .unwrap_or_else(|| Platform::All.as_str().to_string()),
        }
    }
}

/// One rendered deal card.
#[derive(Debug, Clone, Serialize)]
pub struct DealCard {
    pub id: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub source: String,
    pub source_url: String,
    pub category: &'static str,
    pub image_url: String,
}

impl From<&Deal> for DealCard {
    fn from(deal: &Deal) -> Self {
        Self {
            id: deal.id.clone(),
            title: deal.title.clone(),
            description: deal.description.clone(),
            location: deal.location.clone(),
            source: deal.source.clone(),
            source_url: deal.source_url.clone(),
            category: deal.category.as_str(),
            image_url: format!("https://picsum.photos/seed/{}/600/400", deal.id),
        }
    }
}

/// Data required to render the main index template.
pub struct IndexPageData {
    /// Values shown in the search form.
    pub form: FormValues,
    /// Current search snapshot, idle before the first search.
    pub state: SearchState,
}

impl IndexPageData {
    pub fn cards(&self) -> Vec<DealCard> {
        self.state.results.iter().map(DealCard::from).collect()
    }
}
