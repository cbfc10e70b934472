//! Product category enum.

use serde::{Deserialize, Serialize};

/// Product category.
///
/// The catalog uses a fixed, small set of categories; products are assigned
/// one at generation time and never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Phones,
    Laptops,
    Sport,
    Food,
    Books,
    Games,
    Fashion,
}

impl Category {
    /// All categories, in catalog assignment order.
    pub const ALL: [Self; 7] = [
        Self::Phones,
        Self::Laptops,
        Self::Sport,
        Self::Food,
        Self::Books,
        Self::Games,
        Self::Fashion,
    ];

    /// The category's stable string form (matches the serde representation).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Phones => "phones",
            Self::Laptops => "laptops",
            Self::Sport => "sport",
            Self::Food => "food",
            Self::Books => "books",
            Self::Games => "games",
            Self::Fashion => "fashion",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "phones" => Ok(Self::Phones),
            "laptops" => Ok(Self::Laptops),
            "sport" => Ok(Self::Sport),
            "food" => Ok(Self::Food),
            "books" => Ok(Self::Books),
            "games" => Ok(Self::Games),
            "fashion" => Ok(Self::Fashion),
            _ => Err(format!("invalid category: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_all_roundtrip_through_str() {
        for category in Category::ALL {
            let parsed: Category = category.as_str().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn test_invalid_str() {
        assert!("gadgets".parse::<Category>().is_err());
    }

    #[test]
    fn test_serde_matches_as_str() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
        }
    }
}
