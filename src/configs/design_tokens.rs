//! Design tokens consumed by the presentation layer.
//!
//! A token document has the same shape as the `theme.extend` block of a
//! Tailwind config:
//!
//! ```json
//! {
//!   "darkMode": "class",
//!   "colors": { "primary": "var(--clr-primary)" },
//!   "fontFamily": { "spacemono": ["Space Mono", "sans-serif"] },
//!   "screens": { "sm": "375px", "md": "768px" }
//! }
//! ```
//!
//! Color slots only reference CSS custom properties. The concrete color for each
//! mode is supplied by the stylesheet, not by this table.

use std::collections::HashSet;
use std::fmt;
use std::marker::PhantomData;
use std::path::Path;
use regex::Regex;
use serde::de::{ Deserializer, MapAccess, Visitor };
use serde::Deserialize;
use serde_json::{ json, Map, Value };
use crate::error::TokenError;
use crate::utils::{ ThemeMode, DARK_MODE_CLASS };

const BUILTIN_COLORS: &[(&str, &str)] = &[
    ("primary", "--clr-primary"),
    ("primarydimmed", "--clr-primary-dimmed"),
    ("dm_darkblue", "--clr-dark-darkblue"),
    ("dm_white", "--clr-dark-white"),
    ("dm_black", "--clr-dark-black"),
    ("dm_blue", "--clr-dark-blue"),
    ("lm_white", "--clr-light-white"),
    ("lm_whitegrey", "--clr-light-whitegrey"),
    ("lm_dark", "--clr-light-dark"),
    ("lm_darkblue", "--clr-light-darkblue"),
    ("lm_greyblue", "--clr-light-greyblue"),
];

const BUILTIN_FONTS: &[(&str, &[&str])] = &[("spacemono", &["Space Mono", "sans-serif"])];

const BUILTIN_SCREENS: &[(&str, u32)] = &[
    ("sm", 375),
    ("md", 768),
    ("lg", 976),
    ("xl", 1440),
];

const GENERIC_FONT_FAMILIES: &[&str] = &[
    "serif",
    "sans-serif",
    "monospace",
    "cursive",
    "fantasy",
    "system-ui",
];

lazy_static::lazy_static! {
    static ref COLOR_REFERENCE: Regex = Regex::new(r"^var\(\s*(--[A-Za-z0-9_-]+)\s*\)$").unwrap();
    static ref PIXEL_WIDTH: Regex = Regex::new(r"^(\d+)px$").unwrap();
    static ref DEFAULT_TOKENS: DesignTokens = DesignTokens::builtin();
}

/// The built-in token table.
pub fn default_tokens() -> &'static DesignTokens {
    &DEFAULT_TOKENS
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DarkModeStrategy {
    /// Dark styles apply below an element carrying the `dark` class.
    Class,
}

impl DarkModeStrategy {
    fn parse(value: &str) -> Result<Self, TokenError> {
        match value.trim() {
            "class" => Ok(DarkModeStrategy::Class),
            other => Err(TokenError::UnsupportedDarkMode(other.to_string())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DarkModeStrategy::Class => "class",
        }
    }

    pub fn marker_class(self) -> &'static str {
        match self {
            DarkModeStrategy::Class => DARK_MODE_CLASS,
        }
    }
}

/// Which palette a color slot belongs to, derived from its name prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotScope {
    Shared,
    Dark,
    Light,
}

impl SlotScope {
    pub fn of(name: &str) -> Self {
        if name.starts_with("dm_") {
            SlotScope::Dark
        } else if name.starts_with("lm_") {
            SlotScope::Light
        } else {
            SlotScope::Shared
        }
    }

    pub fn applies_to(self, mode: ThemeMode) -> bool {
        match self {
            SlotScope::Shared => true,
            SlotScope::Dark => mode == ThemeMode::Dark,
            SlotScope::Light => mode == ThemeMode::Light,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorSlot {
    pub name: String,
    /// Custom property name including the leading `--`.
    pub variable: String,
}

impl ColorSlot {
    pub fn css_value(&self) -> String {
        format!("var({})", self.variable)
    }

    pub fn scope(&self) -> SlotScope {
        SlotScope::of(&self.name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontFamily {
    pub name: String,
    pub fallbacks: Vec<String>,
}

impl FontFamily {
    /// Value for a CSS `font-family` declaration.
    pub fn css_value(&self) -> String {
        self.fallbacks
            .iter()
            .map(|font| {
                if GENERIC_FONT_FAMILIES.contains(&font.as_str()) || !font.contains(' ') {
                    font.clone()
                } else {
                    format!("'{}'", font)
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Breakpoint {
    pub name: String,
    pub min_width_px: u32,
}

impl Breakpoint {
    pub fn media_query(&self) -> String {
        format!("@media (min-width: {}px)", self.min_width_px)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DesignTokens {
    dark_mode: DarkModeStrategy,
    colors: Vec<ColorSlot>,
    font_families: Vec<FontFamily>,
    screens: Vec<Breakpoint>,
}

impl DesignTokens {
    fn builtin() -> Self {
        Self {
            dark_mode: DarkModeStrategy::Class,
            colors: BUILTIN_COLORS.iter()
                .map(|(name, variable)| ColorSlot {
                    name: name.to_string(),
                    variable: variable.to_string(),
                })
                .collect(),
            font_families: BUILTIN_FONTS.iter()
                .map(|(name, fonts)| FontFamily {
                    name: name.to_string(),
                    fallbacks: fonts.iter().map(|font| font.to_string()).collect(),
                })
                .collect(),
            screens: BUILTIN_SCREENS.iter()
                .map(|(name, width)| Breakpoint {
                    name: name.to_string(),
                    min_width_px: *width,
                })
                .collect(),
        }
    }

    pub fn from_json_str(input: &str) -> Result<Self, TokenError> {
        let raw: RawTokens = serde_json::from_str(input)?;
        raw.into_tokens()
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TokenError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            TokenError::IO(format!("{}: {}", path.display(), e))
        })?;
        Self::from_json_str(&contents)
    }

    pub fn dark_mode(&self) -> DarkModeStrategy {
        self.dark_mode
    }

    /// Class the root element carries in `mode`, per this table's dark-mode strategy.
    pub fn root_class(&self, mode: ThemeMode) -> Option<&'static str> {
        mode.is_dark().then(|| self.dark_mode.marker_class())
    }

    pub fn colors(&self) -> &[ColorSlot] {
        &self.colors
    }

    pub fn font_families(&self) -> &[FontFamily] {
        &self.font_families
    }

    pub fn breakpoints(&self) -> &[Breakpoint] {
        &self.screens
    }

    pub fn color(&self, name: &str) -> Result<&ColorSlot, TokenError> {
        self.colors
            .iter()
            .find(|slot| slot.name == name)
            .ok_or_else(|| unknown_slot("colors", name))
    }

    pub fn font_family(&self, name: &str) -> Result<&FontFamily, TokenError> {
        self.font_families
            .iter()
            .find(|family| family.name == name)
            .ok_or_else(|| unknown_slot("fontFamily", name))
    }

    pub fn breakpoint(&self, name: &str) -> Result<&Breakpoint, TokenError> {
        self.screens
            .iter()
            .find(|screen| screen.name == name)
            .ok_or_else(|| unknown_slot("screens", name))
    }

    /// Shared slots plus the slots scoped to `mode`, in declaration order.
    pub fn colors_for_mode(&self, mode: ThemeMode) -> impl Iterator<Item = &ColorSlot> + '_ {
        self.colors.iter().filter(move |slot| slot.scope().applies_to(mode))
    }

    /// Widest breakpoint active at `width_px`, or `None` below the smallest one.
    pub fn breakpoint_for_width(&self, width_px: u32) -> Option<&Breakpoint> {
        self.screens.iter().rev().find(|screen| screen.min_width_px <= width_px)
    }

    pub fn media_query(&self, name: &str) -> Result<String, TokenError> {
        self.breakpoint(name).map(Breakpoint::media_query)
    }

    /// The `theme.extend` object for a Tailwind config.
    pub fn to_tailwind_extend(&self) -> Value {
        let colors: Map<String, Value> = self.colors
            .iter()
            .map(|slot| (slot.name.clone(), Value::String(slot.css_value())))
            .collect();
        let fonts: Map<String, Value> = self.font_families
            .iter()
            .map(|family| (family.name.clone(), json!(family.fallbacks)))
            .collect();
        let screens: Map<String, Value> = self.screens
            .iter()
            .map(|screen| (screen.name.clone(), Value::String(format!("{}px", screen.min_width_px))))
            .collect();

        json!({
            "colors": colors,
            "fontFamily": fonts,
            "screens": screens,
        })
    }

    pub fn to_json_string(&self) -> Result<String, TokenError> {
        let mut document = Map::new();
        document.insert("darkMode".to_string(), Value::String(self.dark_mode.as_str().to_string()));
        if let Value::Object(extend) = self.to_tailwind_extend() {
            document.extend(extend);
        }
        Ok(serde_json::to_string_pretty(&Value::Object(document))?)
    }
}

fn unknown_slot(section: &'static str, name: &str) -> TokenError {
    TokenError::UnknownSlot {
        section,
        name: name.to_string(),
    }
}

fn default_dark_mode() -> String {
    "class".to_string()
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawTokens {
    #[serde(default = "default_dark_mode")]
    dark_mode: String,
    #[serde(default)]
    colors: Entries<String>,
    #[serde(default)]
    font_family: Entries<Vec<String>>,
    #[serde(default)]
    screens: Entries<String>,
}

impl RawTokens {
    fn into_tokens(self) -> Result<DesignTokens, TokenError> {
        let dark_mode = DarkModeStrategy::parse(&self.dark_mode)?;
        ensure_unique("colors", &self.colors.0)?;
        ensure_unique("fontFamily", &self.font_family.0)?;
        ensure_unique("screens", &self.screens.0)?;

        let colors = self.colors.0
            .into_iter()
            .map(|(name, value)| -> Result<ColorSlot, TokenError> {
                let variable = COLOR_REFERENCE.captures(value.trim())
                    .map(|caps| caps[1].to_string())
                    .ok_or_else(|| TokenError::InvalidColorReference {
                        slot: name.clone(),
                        value: value.clone(),
                    })?;
                Ok(ColorSlot { name, variable })
            })
            .collect::<Result<Vec<_>, TokenError>>()?;

        let font_families = self.font_family.0
            .into_iter()
            .map(|(name, fallbacks)| -> Result<FontFamily, TokenError> {
                let fallbacks: Vec<String> = fallbacks
                    .into_iter()
                    .map(|font| font.trim().to_string())
                    .filter(|font| !font.is_empty())
                    .collect();
                if fallbacks.is_empty() {
                    return Err(TokenError::EmptyFontFamily(name));
                }
                Ok(FontFamily { name, fallbacks })
            })
            .collect::<Result<Vec<_>, TokenError>>()?;

        let mut screens: Vec<Breakpoint> = Vec::with_capacity(self.screens.0.len());
        for (name, value) in self.screens.0 {
            let min_width_px = PIXEL_WIDTH.captures(value.trim())
                .and_then(|caps| caps[1].parse::<u32>().ok())
                .ok_or_else(|| TokenError::InvalidBreakpoint {
                    name: name.clone(),
                    value: value.clone(),
                })?;
            if let Some(previous) = screens.last() {
                if previous.min_width_px >= min_width_px {
                    return Err(TokenError::UnorderedBreakpoints {
                        name,
                        previous: previous.name.clone(),
                    });
                }
            }
            screens.push(Breakpoint { name, min_width_px });
        }

        Ok(DesignTokens {
            dark_mode,
            colors,
            font_families,
            screens,
        })
    }
}

fn ensure_unique<V>(section: &'static str, entries: &[(String, V)]) -> Result<(), TokenError> {
    let mut seen = HashSet::new();
    for (name, _) in entries {
        if !seen.insert(name.as_str()) {
            return Err(TokenError::DuplicateSlot {
                section,
                name: name.clone(),
            });
        }
    }
    Ok(())
}

/// JSON object kept as ordered pairs so repeated keys are seen instead of
/// silently overwritten.
struct Entries<V>(Vec<(String, V)>);

impl<V> Default for Entries<V> {
    fn default() -> Self {
        Entries(Vec::new())
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for Entries<V> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error> where D: Deserializer<'de> {
        struct EntriesVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for EntriesVisitor<V> {
            type Value = Entries<V>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of token slot names")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error> where A: MapAccess<'de> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, value)) = map.next_entry::<String, V>()? {
                    entries.push((name, value));
                }
                Ok(Entries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHIPPED_TOKENS: &str = include_str!("../../assets/design_tokens.json");

    #[test]
    fn test_builtin_breakpoints() {
        let tokens = default_tokens();
        let screens: Vec<(&str, u32)> = tokens
            .breakpoints()
            .iter()
            .map(|screen| (screen.name.as_str(), screen.min_width_px))
            .collect();
        assert_eq!(screens, vec![("sm", 375), ("md", 768), ("lg", 976), ("xl", 1440)]);
    }

    #[test]
    fn test_builtin_slot_names_unique() {
        let tokens = default_tokens();
        let names: HashSet<&str> = tokens.colors().iter().map(|slot| slot.name.as_str()).collect();
        assert_eq!(names.len(), tokens.colors().len());
        let fonts: HashSet<&str> = tokens.font_families().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(fonts.len(), tokens.font_families().len());
        let screens: HashSet<&str> = tokens.breakpoints().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(screens.len(), 4);
        assert_eq!(tokens.breakpoints().len(), 4);
    }

    #[test]
    fn test_shipped_file_matches_builtin() {
        let tokens = DesignTokens::from_json_str(SHIPPED_TOKENS).unwrap();
        assert_eq!(&tokens, default_tokens());
    }

    #[test]
    fn test_font_family() {
        let font = default_tokens().font_family("spacemono").unwrap();
        assert_eq!(font.fallbacks, vec!["Space Mono", "sans-serif"]);
        assert_eq!(font.css_value(), "'Space Mono', sans-serif");
    }

    #[test]
    fn test_duplicate_font_family_rejected() {
        let input = r#"{ "fontFamily": { "body": ["Inter"], "body": ["Arial"] } }"#;
        assert_eq!(
            DesignTokens::from_json_str(input),
            Err(TokenError::DuplicateSlot { section: "fontFamily", name: "body".to_string() })
        );
    }

    #[test]
    fn test_root_class_follows_strategy() {
        let tokens = default_tokens();
        assert_eq!(tokens.root_class(ThemeMode::Dark), Some(tokens.dark_mode().marker_class()));
        assert_eq!(tokens.root_class(ThemeMode::Dark), Some("dark"));
        assert_eq!(tokens.root_class(ThemeMode::Light), None);
    }

    #[test]
    fn test_color_lookup() {
        let tokens = default_tokens();
        let primary = tokens.color("primary").unwrap();
        assert_eq!(primary.variable, "--clr-primary");
        assert_eq!(primary.css_value(), "var(--clr-primary)");
        assert_eq!(
            tokens.color("dm_purple"),
            Err(TokenError::UnknownSlot { section: "colors", name: "dm_purple".to_string() })
        );
    }

    #[test]
    fn test_colors_for_mode() {
        let tokens = default_tokens();
        let dark: Vec<&str> = tokens.colors_for_mode(ThemeMode::Dark).map(|s| s.name.as_str()).collect();
        assert_eq!(dark, vec!["primary", "primarydimmed", "dm_darkblue", "dm_white", "dm_black", "dm_blue"]);

        let light: Vec<&str> = tokens.colors_for_mode(ThemeMode::Light).map(|s| s.name.as_str()).collect();
        assert_eq!(
            light,
            vec!["primary", "primarydimmed", "lm_white", "lm_whitegrey", "lm_dark", "lm_darkblue", "lm_greyblue"]
        );
    }

    #[test]
    fn test_breakpoint_for_width() {
        let tokens = default_tokens();
        assert_eq!(tokens.breakpoint_for_width(320), None);
        assert_eq!(tokens.breakpoint_for_width(375).map(|s| s.name.as_str()), Some("sm"));
        assert_eq!(tokens.breakpoint_for_width(975).map(|s| s.name.as_str()), Some("md"));
        assert_eq!(tokens.breakpoint_for_width(976).map(|s| s.name.as_str()), Some("lg"));
        assert_eq!(tokens.breakpoint_for_width(2560).map(|s| s.name.as_str()), Some("xl"));
    }

    #[test]
    fn test_media_query() {
        let tokens = default_tokens();
        assert_eq!(tokens.media_query("md").unwrap(), "@media (min-width: 768px)");
        assert!(matches!(tokens.media_query("xxl"), Err(TokenError::UnknownSlot { .. })));
    }

    #[test]
    fn test_tailwind_extend() {
        let extend = default_tokens().to_tailwind_extend();
        assert_eq!(extend["colors"]["primarydimmed"], "var(--clr-primary-dimmed)");
        assert_eq!(extend["fontFamily"]["spacemono"], json!(["Space Mono", "sans-serif"]));
        assert_eq!(extend["screens"]["lg"], "976px");
        let keys: Vec<&String> = extend["screens"].as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["sm", "md", "lg", "xl"]);
    }

    #[test]
    fn test_json_string_reloads() {
        let text = default_tokens().to_json_string().unwrap();
        assert!(text.contains("\"darkMode\": \"class\""));
        assert_eq!(&DesignTokens::from_json_str(&text).unwrap(), default_tokens());
    }

    #[test]
    fn test_duplicate_slot_rejected() {
        let input = r#"{ "colors": { "primary": "var(--a)", "primary": "var(--b)" } }"#;
        assert_eq!(
            DesignTokens::from_json_str(input),
            Err(TokenError::DuplicateSlot { section: "colors", name: "primary".to_string() })
        );
    }

    #[test]
    fn test_invalid_color_reference_rejected() {
        let input = r##"{ "colors": { "primary": "#ff0000" } }"##;
        assert!(matches!(
            DesignTokens::from_json_str(input),
            Err(TokenError::InvalidColorReference { slot, .. }) if slot == "primary"
        ));
    }

    #[test]
    fn test_invalid_breakpoint_rejected() {
        let input = r#"{ "screens": { "sm": "30em" } }"#;
        assert!(matches!(
            DesignTokens::from_json_str(input),
            Err(TokenError::InvalidBreakpoint { name, .. }) if name == "sm"
        ));
    }

    #[test]
    fn test_unordered_breakpoints_rejected() {
        let input = r#"{ "screens": { "md": "768px", "sm": "375px" } }"#;
        assert_eq!(
            DesignTokens::from_json_str(input),
            Err(TokenError::UnorderedBreakpoints { name: "sm".to_string(), previous: "md".to_string() })
        );
    }

    #[test]
    fn test_empty_font_family_rejected() {
        let input = r#"{ "fontFamily": { "body": [" "] } }"#;
        assert_eq!(
            DesignTokens::from_json_str(input),
            Err(TokenError::EmptyFontFamily("body".to_string()))
        );
    }

    #[test]
    fn test_media_dark_mode_rejected() {
        let input = r#"{ "darkMode": "media" }"#;
        assert_eq!(
            DesignTokens::from_json_str(input),
            Err(TokenError::UnsupportedDarkMode("media".to_string()))
        );
    }

    #[test]
    fn test_unknown_section_rejected() {
        let input = r#"{ "spacing": { "1": "4px" } }"#;
        assert!(matches!(DesignTokens::from_json_str(input), Err(TokenError::Parse(_))));
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let tokens = DesignTokens::from_json_str("{}").unwrap();
        assert_eq!(tokens.dark_mode(), DarkModeStrategy::Class);
        assert_eq!(tokens.dark_mode().marker_class(), "dark");
        assert_eq!(tokens.root_class(ThemeMode::Dark), Some("dark"));
        assert!(tokens.colors().is_empty());
        assert!(tokens.breakpoint_for_width(1024).is_none());
    }
}
