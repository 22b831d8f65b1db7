use std::collections::HashMap;

use derive_deref::{Deref, DerefMut};
use ratatui::style::{Color, Modifier, Style};
use serde::{de::Deserializer, Deserialize};

/// Named styles (`"title"`, `"rating"`, `"error"`, ...) used by the widgets.
#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct Styles(pub HashMap<String, Style>);

impl Styles {
    /// Style registered under `name`, or the terminal default.
    pub fn get_or_default(&self, name: &str) -> Style {
        self.0.get(name).copied().unwrap_or_default()
    }
}

impl<'de> Deserialize<'de> for Styles {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, String>::deserialize(deserializer)?;
        let styles = parsed_map
            .into_iter()
            .map(|(name, raw)| (name, parse_style(&raw)))
            .collect();
        Ok(Styles(styles))
    }
}

/// Parse `"bold yellow on blue"`-style descriptions. Unknown words are ignored.
pub fn parse_style(line: &str) -> Style {
    let lower = line.to_lowercase();
    let (foreground, background) = match lower.split_once(" on ") {
        Some((fg, bg)) => (fg, Some(bg)),
        None => (lower.as_str(), None),
    };

    let mut style = Style::default();
    for word in foreground.split_whitespace() {
        if let Some(modifier) = parse_modifier(word) {
            style = style.add_modifier(modifier);
        } else if let Some(color) = parse_color(word) {
            style = style.fg(color);
        }
    }
    if let Some(color) = background.and_then(|bg| parse_color(bg.trim())) {
        style = style.bg(color);
    }
    style
}

fn parse_modifier(word: &str) -> Option<Modifier> {
    match word {
        "bold" => Some(Modifier::BOLD),
        "dim" => Some(Modifier::DIM),
        "italic" => Some(Modifier::ITALIC),
        "underline" | "underlined" => Some(Modifier::UNDERLINED),
        "reversed" | "inverse" => Some(Modifier::REVERSED),
        _ => None,
    }
}

fn parse_color(word: &str) -> Option<Color> {
    if let Some(index) = word.strip_prefix("color").and_then(|n| n.parse::<u8>().ok()) {
        return Some(Color::Indexed(index));
    }
    word.replace('_', "").parse::<Color>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("yellow", Style::default().fg(Color::Yellow))]
    #[case("bold red", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))]
    #[case("white on blue", Style::default().fg(Color::White).bg(Color::Blue))]
    #[case("dark_gray", Style::default().fg(Color::DarkGray))]
    #[case("color208", Style::default().fg(Color::Indexed(208)))]
    #[case("sparkly", Style::default())]
    fn test_parse_style(#[case] raw: &str, #[case] expected: Style) {
        assert_eq!(parse_style(raw), expected);
    }

    #[test]
    fn test_deserialize_styles() -> Result<(), json5::Error> {
        let styles: Styles = json5::from_str(r#"{ error: "bold red", title: "bold" }"#)?;
        assert_eq!(
            styles.get_or_default("error"),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        );
        assert_eq!(styles.get_or_default("missing"), Style::default());
        Ok(())
    }
}
