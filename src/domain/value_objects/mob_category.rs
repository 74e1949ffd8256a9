//! Mob tier categories

/// Tier of mob being generated; selects the category guidance in the system prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MobCategory {
    Boss,
    BossDungeon,
    Miniboss,
    #[default]
    Regular,
}

impl MobCategory {
    /// Resolve a raw category label, falling back to `Regular` for anything unrecognized
    pub fn from_label(label: &str) -> Self {
        label.parse().unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MobCategory::Boss => "boss",
            MobCategory::BossDungeon => "boss_dungeon",
            MobCategory::Miniboss => "miniboss",
            MobCategory::Regular => "regular",
        }
    }
}

impl std::fmt::Display for MobCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for MobCategory {
    type Err = anyhow::Error;

    /// Labels are matched exactly; `"Boss"` is not `"boss"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "boss" => Ok(MobCategory::Boss),
            "boss_dungeon" => Ok(MobCategory::BossDungeon),
            "miniboss" => Ok(MobCategory::Miniboss),
            "regular" => Ok(MobCategory::Regular),
            _ => Err(anyhow::anyhow!("Invalid mob category: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels_round_trip() {
        for category in [
            MobCategory::Boss,
            MobCategory::BossDungeon,
            MobCategory::Miniboss,
            MobCategory::Regular,
        ] {
            assert_eq!(MobCategory::from_label(category.as_str()), category);
        }
    }

    #[test]
    fn test_unknown_label_falls_back_to_regular() {
        assert_eq!(MobCategory::from_label("dragon"), MobCategory::Regular);
        assert_eq!(MobCategory::from_label(""), MobCategory::Regular);
        assert_eq!(MobCategory::from_label("BOSS"), MobCategory::Regular);
        assert!("dragon".parse::<MobCategory>().is_err());
    }
}
