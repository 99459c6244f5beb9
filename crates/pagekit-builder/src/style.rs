//! Style model: the fixed property set, the per-block style map and the
//! patches style commands carry.
//!
//! Property values are raw CSS strings. An unset property is the empty
//! string, never absent: the wire contract distinguishes "no color set"
//! (`""`) from a value, and that distinction must survive a round trip.

use serde::{Deserialize, Serialize};

/// The closed set of styleable properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleProperty {
    Color,
    BackgroundColor,
    FontSize,
    FontFamily,
    TextAlign,
    BorderStyle,
    BorderWidth,
    BorderColor,
    BorderRadius,
    Padding,
    Margin,
    BoxShadow,
    Opacity,
    Animation,
    BackgroundPattern,
    CustomCss,
}

impl StyleProperty {
    /// All properties, in wire order.
    pub const ALL: [StyleProperty; 16] = [
        StyleProperty::Color,
        StyleProperty::BackgroundColor,
        StyleProperty::FontSize,
        StyleProperty::FontFamily,
        StyleProperty::TextAlign,
        StyleProperty::BorderStyle,
        StyleProperty::BorderWidth,
        StyleProperty::BorderColor,
        StyleProperty::BorderRadius,
        StyleProperty::Padding,
        StyleProperty::Margin,
        StyleProperty::BoxShadow,
        StyleProperty::Opacity,
        StyleProperty::Animation,
        StyleProperty::BackgroundPattern,
        StyleProperty::CustomCss,
    ];

    /// Get property as its wire key
    pub fn as_str(&self) -> &'static str {
        match self {
            StyleProperty::Color => "color",
            StyleProperty::BackgroundColor => "backgroundColor",
            StyleProperty::FontSize => "fontSize",
            StyleProperty::FontFamily => "fontFamily",
            StyleProperty::TextAlign => "textAlign",
            StyleProperty::BorderStyle => "borderStyle",
            StyleProperty::BorderWidth => "borderWidth",
            StyleProperty::BorderColor => "borderColor",
            StyleProperty::BorderRadius => "borderRadius",
            StyleProperty::Padding => "padding",
            StyleProperty::Margin => "margin",
            StyleProperty::BoxShadow => "boxShadow",
            StyleProperty::Opacity => "opacity",
            StyleProperty::Animation => "animation",
            StyleProperty::BackgroundPattern => "backgroundPattern",
            StyleProperty::CustomCss => "customCSS",
        }
    }

    /// Parse from a wire key
    pub fn parse(s: &str) -> Option<Self> {
        StyleProperty::ALL.into_iter().find(|p| p.as_str() == s)
    }
}

impl std::fmt::Display for StyleProperty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-block style values, one field per recognized property.
///
/// Serializes with the wire keys; missing keys deserialize to empty strings,
/// so an omitted `styles` object and an all-empty one are the same value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StyleMap {
    pub color: String,
    pub background_color: String,
    pub font_size: String,
    pub font_family: String,
    pub text_align: String,
    pub border_style: String,
    pub border_width: String,
    pub border_color: String,
    pub border_radius: String,
    pub padding: String,
    pub margin: String,
    pub box_shadow: String,
    pub opacity: String,
    pub animation: String,
    pub background_pattern: String,
    #[serde(rename = "customCSS")]
    pub custom_css: String,
}

impl StyleMap {
    /// Gets a property value; unset properties are the empty string.
    pub fn get(&self, prop: StyleProperty) -> &str {
        match prop {
            StyleProperty::Color => &self.color,
            StyleProperty::BackgroundColor => &self.background_color,
            StyleProperty::FontSize => &self.font_size,
            StyleProperty::FontFamily => &self.font_family,
            StyleProperty::TextAlign => &self.text_align,
            StyleProperty::BorderStyle => &self.border_style,
            StyleProperty::BorderWidth => &self.border_width,
            StyleProperty::BorderColor => &self.border_color,
            StyleProperty::BorderRadius => &self.border_radius,
            StyleProperty::Padding => &self.padding,
            StyleProperty::Margin => &self.margin,
            StyleProperty::BoxShadow => &self.box_shadow,
            StyleProperty::Opacity => &self.opacity,
            StyleProperty::Animation => &self.animation,
            StyleProperty::BackgroundPattern => &self.background_pattern,
            StyleProperty::CustomCss => &self.custom_css,
        }
    }

    /// Sets a property value. Setting the empty string clears it.
    pub fn set(&mut self, prop: StyleProperty, value: impl Into<String>) {
        let value = value.into();
        match prop {
            StyleProperty::Color => self.color = value,
            StyleProperty::BackgroundColor => self.background_color = value,
            StyleProperty::FontSize => self.font_size = value,
            StyleProperty::FontFamily => self.font_family = value,
            StyleProperty::TextAlign => self.text_align = value,
            StyleProperty::BorderStyle => self.border_style = value,
            StyleProperty::BorderWidth => self.border_width = value,
            StyleProperty::BorderColor => self.border_color = value,
            StyleProperty::BorderRadius => self.border_radius = value,
            StyleProperty::Padding => self.padding = value,
            StyleProperty::Margin => self.margin = value,
            StyleProperty::BoxShadow => self.box_shadow = value,
            StyleProperty::Opacity => self.opacity = value,
            StyleProperty::Animation => self.animation = value,
            StyleProperty::BackgroundPattern => self.background_pattern = value,
            StyleProperty::CustomCss => self.custom_css = value,
        }
    }

    /// Whether every property is unset.
    pub fn is_empty(&self) -> bool {
        StyleProperty::ALL.into_iter().all(|p| self.get(p).is_empty())
    }

    /// Applies every entry of a patch to this map.
    pub fn merge(&mut self, patch: &StylePatch) {
        for (prop, value) in patch.iter() {
            self.set(*prop, value.clone());
        }
    }

    /// Snapshots the current values of exactly the properties a patch
    /// touches. Applying the patch and then merging the snapshot back
    /// restores this map.
    pub fn snapshot_of(&self, patch: &StylePatch) -> StylePatch {
        let mut prior = StylePatch::new();
        for (prop, _) in patch.iter() {
            prior.set(*prop, self.get(*prop).to_string());
        }
        prior
    }
}

/// An ordered set of property writes, as produced by one style-panel apply.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StylePatch {
    entries: Vec<(StyleProperty, String)>,
}

impl StylePatch {
    /// Creates an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a patch with a single entry.
    pub fn single(prop: StyleProperty, value: impl Into<String>) -> Self {
        let mut patch = Self::new();
        patch.set(prop, value);
        patch
    }

    /// Adds or replaces an entry.
    pub fn set(&mut self, prop: StyleProperty, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(p, _)| *p == prop) {
            entry.1 = value;
        } else {
            self.entries.push((prop, value));
        }
        self
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &(StyleProperty, String)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_keys_round_trip() {
        for prop in StyleProperty::ALL {
            assert_eq!(StyleProperty::parse(prop.as_str()), Some(prop));
        }
        assert_eq!(StyleProperty::parse("custom_css"), None);
    }

    #[test]
    fn snapshot_then_merge_restores() {
        let mut styles = StyleMap::default();
        styles.set(StyleProperty::Color, "red");

        let mut patch = StylePatch::new();
        patch
            .set(StyleProperty::Color, "blue")
            .set(StyleProperty::Padding, "4px");
        let prior = styles.snapshot_of(&patch);

        styles.merge(&patch);
        assert_eq!(styles.get(StyleProperty::Color), "blue");
        assert_eq!(styles.get(StyleProperty::Padding), "4px");

        styles.merge(&prior);
        assert_eq!(styles.get(StyleProperty::Color), "red");
        assert_eq!(styles.get(StyleProperty::Padding), "");
    }

    #[test]
    fn patch_set_replaces_existing_entry() {
        let mut patch = StylePatch::new();
        patch.set(StyleProperty::Margin, "1px");
        patch.set(StyleProperty::Margin, "2px");
        assert_eq!(patch.len(), 1);
        assert_eq!(patch.iter().next().unwrap().1, "2px");
    }
}
