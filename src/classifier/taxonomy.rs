//! The fixed category taxonomy.
//!
//! Declaration order matters: it is the tie-break order for the classifier
//! and the ordering used by every category-keyed view.

use crate::utils::error::CategoryError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Event category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Sports")]
    Sports,
    #[serde(rename = "Politics & Policy")]
    PoliticsPolicy,
    #[serde(rename = "Economy & Finance")]
    EconomyFinance,
    #[serde(rename = "Tech & Innovation")]
    TechInnovation,
    #[serde(rename = "Culture & Celebrities")]
    CultureCelebrities,
    #[serde(rename = "Crisis & War")]
    CrisisWar,
    #[serde(rename = "Religion & Holidays")]
    ReligionHolidays,
    /// Catch-all member of the taxonomy for labels that name no category
    #[serde(rename = "Other")]
    Other,
    /// Normalization sentinel for records that carry no category at all
    #[serde(rename = "Uncategorized")]
    Uncategorized,
}

/// Categories scored by the classifier, in tie-break order
pub const TAXONOMY: [Category; 7] = [
    Category::Sports,
    Category::PoliticsPolicy,
    Category::EconomyFinance,
    Category::TechInnovation,
    Category::CultureCelebrities,
    Category::CrisisWar,
    Category::ReligionHolidays,
];

/// Every value a normalized event may carry
pub const ALL_CATEGORIES: [Category; 9] = [
    Category::Sports,
    Category::PoliticsPolicy,
    Category::EconomyFinance,
    Category::TechInnovation,
    Category::CultureCelebrities,
    Category::CrisisWar,
    Category::ReligionHolidays,
    Category::Other,
    Category::Uncategorized,
];

/// Category returned when nothing matches and no finance term is present
pub const DEFAULT_CATEGORY: Category = Category::PoliticsPolicy;

impl Category {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Sports => "Sports",
            Self::PoliticsPolicy => "Politics & Policy",
            Self::EconomyFinance => "Economy & Finance",
            Self::TechInnovation => "Tech & Innovation",
            Self::CultureCelebrities => "Culture & Celebrities",
            Self::CrisisWar => "Crisis & War",
            Self::ReligionHolidays => "Religion & Holidays",
            Self::Other => "Other",
            Self::Uncategorized => "Uncategorized",
        }
    }

    /// Display color (hex) for charts and legends
    pub fn color(&self) -> &'static str {
        match self {
            Self::Sports => "#1f77b4",
            Self::PoliticsPolicy => "#d62728",
            Self::EconomyFinance => "#2ca02c",
            Self::TechInnovation => "#9467bd",
            Self::CultureCelebrities => "#e377c2",
            Self::CrisisWar => "#ff7f0e",
            Self::ReligionHolidays => "#bcbd22",
            Self::Other => "#7f7f7f",
            Self::Uncategorized => "#c7c7c7",
        }
    }

    /// Lowercase keywords used for scoring; never displayed
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Self::Sports => &[
                "nfl", "football", "basketball", "nba", "baseball", "mlb", "soccer", "hockey",
                "nhl", "tennis", "golf", "olympic", "world cup", "super bowl", "championship",
                "game", "match", "race", "tournament", "team", "player", "coach", "athlete",
            ],
            Self::PoliticsPolicy => &[
                "president", "election", "vote", "congress", "senate", "house", "democrat",
                "republican", "policy", "bill", "law", "government", "administration",
                "campaign", "candidate", "political", "prime minister", "parliament",
                "legislation", "supreme court", "cabinet",
            ],
            Self::EconomyFinance => &[
                "fed", "federal reserve", "interest rate", "inflation", "stock", "market",
                "economy", "gdp", "economic", "recession", "financial", "bank", "dollar", "euro",
                "yuan", "currency", "crypto", "bitcoin", "ethereum", "investment", "debt",
                "treasury", "unemployment",
            ],
            Self::TechInnovation => &[
                "tech", "technology", "ai", "artificial intelligence", "software", "app",
                "startup", "innovation", "digital", "internet", "web", "online", "cyber",
                "computer", "mobile", "smartphone", "device", "product", "launch", "release",
                "update", "silicon valley", "google", "apple", "microsoft", "facebook", "meta",
                "amazon", "tesla",
            ],
            Self::CultureCelebrities => &[
                "movie", "film", "actor", "actress", "singer", "celebrity", "award", "oscar",
                "grammy", "album", "concert", "performance", "hollywood", "tv", "television",
                "show", "series", "music", "festival", "star", "famous", "entertainment",
                "media",
            ],
            Self::CrisisWar => &[
                "war", "conflict", "military", "attack", "terrorist", "terrorism", "invasion",
                "troops", "battle", "defense", "weapon", "missile", "bomb", "disaster",
                "emergency", "crisis", "earthquake", "hurricane", "flood", "outbreak",
                "pandemic", "hostage", "refugee",
            ],
            Self::ReligionHolidays => &[
                "christmas", "easter", "ramadan", "eid", "diwali", "hanukkah", "religious",
                "holiday", "festival", "celebration", "pope", "vatican", "church", "mosque",
                "temple", "prayer", "worship", "faith", "spiritual", "holy", "sacred",
                "thanksgiving", "new year",
            ],
            Self::Other | Self::Uncategorized => &[],
        }
    }

    /// Representative event titles, for help output
    pub fn examples(&self) -> &'static [&'static str] {
        match self {
            Self::Sports => &[
                "Super Bowl LVIII",
                "NBA Finals Game 7",
                "FIFA World Cup Final",
                "Tokyo Olympics Opening Ceremony",
                "Wimbledon Men's Final",
            ],
            Self::PoliticsPolicy => &[
                "US Presidential Election",
                "State of the Union Address",
                "UK Parliamentary Elections",
                "UN General Assembly Meeting",
                "Presidential Debate",
            ],
            Self::EconomyFinance => &[
                "Federal Reserve Interest Rate Decision",
                "Jerome Powell Speech",
                "US Jobs Report Release",
                "Quarterly GDP Announcement",
                "Annual Budget Announcement",
            ],
            Self::TechInnovation => &[
                "Apple iPhone Launch Event",
                "Google I/O Developer Conference",
                "SpaceX Rocket Launch",
                "CES Technology Exhibition",
                "Major Software Release",
            ],
            Self::CultureCelebrities => &[
                "Academy Awards Ceremony",
                "Grammy Awards",
                "Met Gala",
                "Major Movie Premiere",
                "Music Festival Headliner Performance",
            ],
            Self::CrisisWar => &[
                "UN Security Council Emergency Meeting",
                "Peace Treaty Signing Ceremony",
                "Climate Change Summit",
                "International Aid Conference",
                "Evacuation Deadline",
            ],
            Self::ReligionHolidays => &[
                "Christmas Day",
                "Easter Sunday",
                "Start of Ramadan",
                "Diwali Festival",
                "Thanksgiving Day",
            ],
            Self::Other | Self::Uncategorized => &["No examples available"],
        }
    }

    /// True for the seven scored taxonomy labels
    pub fn is_scored(&self) -> bool {
        TAXONOMY.contains(self)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Category {
    type Err = CategoryError;

    /// Accepts full labels (case-insensitive) and the short labels used by the entry form
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if let Some(category) = ALL_CATEGORIES
            .iter()
            .find(|c| c.label().eq_ignore_ascii_case(trimmed))
        {
            return Ok(*category);
        }

        Ok(match trimmed.to_lowercase().as_str() {
            "sport" => Self::Sports,
            "politics" | "policy" => Self::PoliticsPolicy,
            "finance" | "economy" => Self::EconomyFinance,
            "tech" | "technology" | "innovation" => Self::TechInnovation,
            "culture" | "celebrities" => Self::CultureCelebrities,
            "war/crisis" | "war" | "crisis" => Self::CrisisWar,
            "holidays" | "religion" => Self::ReligionHolidays,
            _ => return Err(CategoryError::Unknown(trimmed.to_string())),
        })
    }
}
