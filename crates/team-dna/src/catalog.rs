//! Display metadata and chat keywords for each category.

use schemars::JsonSchema;
use serde::Serialize;

use crate::error::AppError;
use crate::model::Category;

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct CategoryInfo {
    pub key: Category,
    pub name_he: &'static str,
    pub name_en: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    /// Tailwind gradient classes used by the results card.
    pub gradient: &'static str,
}

impl Category {
    pub fn info(self) -> CategoryInfo {
        let (name_he, name_en, icon, description, gradient) = match self {
            Category::Adventure => (
                "הרפתקאות",
                "Adventure",
                "🧗",
                "Adrenaline, off-road jeeps, rappelling and challenges out of the comfort zone",
                "from-orange-500 to-red-600",
            ),
            Category::Nature => (
                "טבע",
                "Nature",
                "🌿",
                "Springs, trails, viewpoints and quiet time in open landscapes",
                "from-green-500 to-emerald-600",
            ),
            Category::History => (
                "היסטוריה ומורשת",
                "History & Heritage",
                "🏛️",
                "Ancient cities, heritage sites and the stories behind them",
                "from-amber-500 to-yellow-700",
            ),
            Category::Culinary => (
                "קולינריה",
                "Culinary",
                "🍷",
                "Markets, wineries, cooking workshops and chef tables",
                "from-rose-500 to-pink-600",
            ),
            Category::Sports => (
                "ספורט",
                "Sports",
                "🚴",
                "Cycling, kayaking, running and friendly competition",
                "from-blue-500 to-cyan-600",
            ),
            Category::Creative => (
                "יצירה",
                "Creative",
                "🎨",
                "Hands-on workshops, art, music and making something together",
                "from-purple-500 to-violet-600",
            ),
            Category::Wellness => (
                "רוגע ובריאות",
                "Wellness",
                "🧘",
                "Yoga, spa, mindful walks and slowing down",
                "from-teal-400 to-sky-500",
            ),
            Category::TeamBuilding => (
                "גיבוש צוות",
                "Team Building",
                "🤝",
                "Shared missions, group challenges and activities that build trust",
                "from-indigo-500 to-blue-700",
            ),
        };
        CategoryInfo {
            key: self,
            name_he,
            name_en,
            icon,
            description,
            gradient,
        }
    }

    /// Lowercase chat keywords that tag a message with this category.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Category::Adventure => &[
                "הרפתקה",
                "הרפתקאות",
                "אתגר",
                "אקסטרים",
                "אדרנלין",
                "סנפלינג",
                "ג'יפים",
                "adventure",
                "extreme",
                "adrenaline",
                "rappel",
                "off-road",
            ],
            Category::Nature => &[
                "טבע",
                "מעיין",
                "מעיינות",
                "נחל",
                "שמורה",
                "פריחה",
                "nature",
                "hiking",
                "spring",
                "outdoors",
            ],
            Category::History => &[
                "היסטוריה",
                "מורשת",
                "עתיקות",
                "ארכיאולוגיה",
                "העיר העתיקה",
                "history",
                "heritage",
                "ancient",
                "archaeolog",
            ],
            Category::Culinary => &[
                "קולינרי",
                "אוכל",
                "יין",
                "יקב",
                "שוק",
                "בישול",
                "culinary",
                "food",
                "wine",
                "winery",
                "cooking",
            ],
            Category::Sports => &[
                "ספורט",
                "אופניים",
                "קיאקים",
                "ריצה",
                "sport",
                "cycling",
                "bike",
                "kayak",
            ],
            Category::Creative => &[
                "יצירה",
                "סדנה",
                "סדנת",
                "אמנות",
                "מוזיקה",
                "creative",
                "workshop",
                "painting",
                "music",
            ],
            Category::Wellness => &[
                "רוגע",
                "יוגה",
                "ספא",
                "מדיטציה",
                "wellness",
                "yoga",
                "massage",
                "relax",
                "meditation",
            ],
            Category::TeamBuilding => &[
                "גיבוש",
                "צוות",
                "עובדים",
                "חברה",
                "team",
                "teambuilding",
                "colleagues",
                "corporate",
            ],
        }
    }
}

pub fn list_categories() -> Vec<CategoryInfo> {
    Category::ALL.into_iter().map(Category::info).collect()
}

pub fn find_category(key: &str) -> Result<CategoryInfo, AppError> {
    Category::from_key(key).map(Category::info).ok_or_else(|| {
        let available: Vec<&str> = Category::ALL.iter().map(|c| c.key()).collect();
        AppError::UnknownCategory(format!(
            "'{}'. Available categories: {}",
            key.trim(),
            available.join(", ")
        ))
    })
}
