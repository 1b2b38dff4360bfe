use destiny_canonical::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Interpretive category a description is keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Talent and outward personality.
    Personality,
    /// Spiritual connection.
    Spirit,
    /// Social mask.
    Social,
    /// Karmic lessons.
    Karmic,
    /// Soul comfort.
    Soul,
    /// Money channel.
    Money,
    /// Love channel.
    Love,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 7] = [
        Category::Personality,
        Category::Spirit,
        Category::Social,
        Category::Karmic,
        Category::Soul,
        Category::Money,
        Category::Love,
    ];

    /// Wire name of the category.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Personality => "personality",
            Category::Spirit => "spirit",
            Category::Social => "social",
            Category::Karmic => "karmic",
            Category::Soul => "soul",
            Category::Money => "money",
            Category::Love => "love",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| ValidationError::PatternMismatch {
                field: "category",
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_match_serde() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert!("wealth".parse::<Category>().is_err());
        assert!("Love".parse::<Category>().is_err());
    }
}
