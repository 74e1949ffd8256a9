//! Splits a model reply into labeled configuration sections
//!
//! Replies are expected to contain `=== MOBS ===`, `=== SKILLS ===` and,
//! depending on the request, `=== ITEMS ===` / `=== DROPS ===` markers. Each
//! section is searched for on its own, so markers may come in any order. A
//! section runs from just after its marker up to the next `===` or the end of
//! the text.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::value_objects::GeneratedConfig;

/// Stand-in for the skills section when the reply carried no markers at all
pub const SKILLS_FALLBACK_PLACEHOLDER: &str = "# Skills referenced inline in mob config";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigSection {
    Mobs,
    Skills,
    Items,
    Drops,
}

impl ConfigSection {
    const ALL: [ConfigSection; 4] = [
        ConfigSection::Mobs,
        ConfigSection::Skills,
        ConfigSection::Items,
        ConfigSection::Drops,
    ];

    fn marker_name(&self) -> &'static str {
        match self {
            ConfigSection::Mobs => "MOBS",
            ConfigSection::Skills => "SKILLS",
            ConfigSection::Items => "ITEMS",
            ConfigSection::Drops => "DROPS",
        }
    }

    fn slot<'a>(&self, config: &'a mut GeneratedConfig) -> &'a mut String {
        match self {
            ConfigSection::Mobs => &mut config.mobs,
            ConfigSection::Skills => &mut config.skills,
            ConfigSection::Items => &mut config.items,
            ConfigSection::Drops => &mut config.drops,
        }
    }
}

static SECTION_PATTERNS: Lazy<Result<Vec<(ConfigSection, Regex)>, regex::Error>> =
    Lazy::new(|| {
        ConfigSection::ALL
            .iter()
            .map(|section| Ok((*section, section_pattern(section.marker_name())?)))
            .collect()
    });

/// Whitespace as ECMAScript defines it: Unicode `White_Space` minus U+0085, plus U+FEFF
const MARKER_SPACE: &str = r"[\s\x{FEFF}&&[^\x{85}]]";

fn is_marker_space(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

fn trim_section(text: &str) -> &str {
    text.trim_matches(is_marker_space)
}

/// Marker names match ASCII case-insensitively only, so `ſ` is not an `S`.
/// `.` spans newlines and `$` is the end of the whole text.
fn section_pattern(name: &str) -> Result<Regex, regex::Error> {
    let name: String = name
        .chars()
        .map(|c| format!("[{}{}]", c.to_ascii_uppercase(), c.to_ascii_lowercase()))
        .collect();
    Regex::new(&format!(
        r"(?s)==={sp}*{name}{sp}*==={sp}*(.*?)(?:===|$)",
        sp = MARKER_SPACE,
        name = name
    ))
}

#[derive(Debug, thiserror::Error)]
pub enum SectionParseError {
    #[error("Failed to parse generated configuration")]
    InvalidPattern(#[source] regex::Error),
}

/// Extract the four configuration sections from a model reply.
///
/// When neither a mobs nor a skills section is found, the whole trimmed reply
/// becomes the mobs section and skills is set to [`SKILLS_FALLBACK_PLACEHOLDER`].
pub fn parse_generated_content(text: &str) -> Result<GeneratedConfig, SectionParseError> {
    let patterns = SECTION_PATTERNS
        .as_ref()
        .map_err(|e| SectionParseError::InvalidPattern(e.clone()))?;

    let mut config = GeneratedConfig::default();

    for (section, pattern) in patterns {
        if let Some(body) = pattern.captures(text).and_then(|caps| caps.get(1)) {
            *section.slot(&mut config) = trim_section(body.as_str()).to_string();
        }
    }

    if config.mobs.is_empty() && config.skills.is_empty() {
        tracing::warn!(
            reply_len = text.len(),
            "No MOBS or SKILLS markers in reply; treating whole reply as mob config"
        );
        config.mobs = trim_section(text).to_string();
        config.skills = SKILLS_FALLBACK_PLACEHOLDER.to_string();
    }

    Ok(config)
}
