// Color themes
//
// A small fixed set, cycled at runtime with 't'. Difficulty badges use
// green/yellow/red; status badges use green/yellow/gray for
// solved/in-progress/not-started.

use crate::models::{Difficulty, Status};
use ratatui::style::Color;

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    QuestDark,
    QuestLight,
    Monokai,
    Nord,
}

impl ThemeKind {
    pub fn all() -> &'static [ThemeKind] {
        &[
            ThemeKind::QuestDark,
            ThemeKind::QuestLight,
            ThemeKind::Monokai,
            ThemeKind::Nord,
        ]
    }

    pub fn next(self) -> Self {
        let themes = Self::all();
        let current = themes.iter().position(|&t| t == self).unwrap_or(0);
        themes[(current + 1) % themes.len()]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ThemeKind::QuestDark => "Quest Dark",
            ThemeKind::QuestLight => "Quest Light",
            ThemeKind::Monokai => "Monokai",
            ThemeKind::Nord => "Nord",
        }
    }

    /// Resolve a configured theme name, defaulting to Quest Dark
    pub fn from_name(name: &str) -> Self {
        Self::all()
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(name))
            .unwrap_or_default()
    }

    pub fn theme(&self) -> Theme {
        match self {
            ThemeKind::QuestDark => Theme::quest_dark(),
            ThemeKind::QuestLight => Theme::quest_light(),
            ThemeKind::Monokai => Theme::monokai(),
            ThemeKind::Nord => Theme::nord(),
        }
    }
}

/// Complete theme definition
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub border: Color,
    /// Focused borders, selected rows, modal frames
    pub highlight: Color,
    /// Titles and the XP badge
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
}

impl Theme {
    pub fn quest_dark() -> Self {
        Self {
            name: "Quest Dark",
            background: Color::Rgb(17, 24, 39),
            foreground: Color::Rgb(229, 231, 235),
            muted: Color::Rgb(107, 114, 128),
            border: Color::Rgb(55, 65, 81),
            highlight: Color::Rgb(167, 139, 250),
            accent: Color::Rgb(139, 92, 246),
            success: Color::Rgb(74, 222, 128),
            warning: Color::Rgb(250, 204, 21),
            error: Color::Rgb(248, 113, 113),
        }
    }

    pub fn quest_light() -> Self {
        Self {
            name: "Quest Light",
            background: Color::Rgb(238, 242, 255),
            foreground: Color::Rgb(31, 41, 55),
            muted: Color::Rgb(156, 163, 175),
            border: Color::Rgb(199, 210, 254),
            highlight: Color::Rgb(79, 70, 229),
            accent: Color::Rgb(99, 102, 241),
            success: Color::Rgb(22, 163, 74),
            warning: Color::Rgb(202, 138, 4),
            error: Color::Rgb(220, 38, 38),
        }
    }

    pub fn monokai() -> Self {
        Self {
            name: "Monokai",
            background: Color::Rgb(39, 40, 34),
            foreground: Color::Rgb(248, 248, 242),
            muted: Color::Rgb(117, 113, 94),
            border: Color::Rgb(73, 72, 62),
            highlight: Color::Rgb(174, 129, 255),
            accent: Color::Rgb(249, 38, 114),
            success: Color::Rgb(166, 226, 46),
            warning: Color::Rgb(230, 219, 116),
            error: Color::Rgb(249, 38, 114),
        }
    }

    pub fn nord() -> Self {
        Self {
            name: "Nord",
            background: Color::Rgb(46, 52, 64),
            foreground: Color::Rgb(216, 222, 233),
            muted: Color::Rgb(76, 86, 106),
            border: Color::Rgb(67, 76, 94),
            highlight: Color::Rgb(136, 192, 208),
            accent: Color::Rgb(129, 161, 193),
            success: Color::Rgb(163, 190, 140),
            warning: Color::Rgb(235, 203, 139),
            error: Color::Rgb(191, 97, 106),
        }
    }

    /// Badge color for a difficulty
    pub fn difficulty_color(&self, difficulty: Difficulty) -> Color {
        match difficulty {
            Difficulty::Easy => self.success,
            Difficulty::Medium => self.warning,
            Difficulty::Hard => self.error,
        }
    }

    /// Badge color for a status
    pub fn status_color(&self, status: Status) -> Color {
        match status {
            Status::Solved => self.success,
            Status::InProgress => self.warning,
            Status::NotStarted => self.muted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_cycle_visits_all_and_wraps() {
        let mut kind = ThemeKind::QuestDark;
        let mut seen = vec![kind];
        for _ in 0..ThemeKind::all().len() - 1 {
            kind = kind.next();
            seen.push(kind);
        }
        assert_eq!(seen.len(), ThemeKind::all().len());
        assert_eq!(kind.next(), ThemeKind::QuestDark);
    }

    #[test]
    fn from_name_is_case_insensitive_with_default() {
        assert_eq!(ThemeKind::from_name("nord"), ThemeKind::Nord);
        assert_eq!(ThemeKind::from_name("no-such-theme"), ThemeKind::QuestDark);
    }
}
