use mint_types::{Point, PopupId, TranslationResult};
use serde::Serialize;

use crate::style::{self, Style};

pub const SAVE_LABEL: &str = "Add to Anki";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    Title,
    Divider,
    Alternative,
    SaveButton,
}

#[derive(Debug, Clone, Serialize)]
pub struct PopupLine {
    pub kind: LineKind,
    pub text: String,
    pub clickable: bool,
    pub style: Style,
}

/// Everything the surface needs to draw one popup
#[derive(Debug, Clone, Serialize)]
pub struct PopupView {
    pub id: PopupId,
    pub position: Point,
    pub style: Style,
    pub lines: Vec<PopupLine>,
}

impl PopupView {
    /// Index of the first line showing `text`
    pub fn line_index(&self, kind: LineKind, text: &str) -> Option<usize> {
        self.lines
            .iter()
            .position(|line| line.kind == kind && line.text == text)
    }

    pub fn text_lines(&self) -> impl Iterator<Item = &PopupLine> {
        self.lines
            .iter()
            .filter(|line| matches!(line.kind, LineKind::Title | LineKind::Alternative))
    }
}

/// What gets saved when a line is clicked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveChoice {
    pub chosen: String,
    pub remaining: Vec<String>,
}

pub struct Rendered {
    pub view: PopupView,
    /// Parallel to `view.lines`
    pub actions: Vec<Option<SaveChoice>>,
}

/// Drops every alternative equal to `chosen`, duplicates included
pub fn remaining_alternatives(alternatives: &[String], chosen: &str) -> Vec<String> {
    alternatives
        .iter()
        .filter(|alt| alt.as_str() != chosen)
        .cloned()
        .collect()
}

pub fn render_popup(
    id: PopupId,
    translation: &TranslationResult,
    target_lang: &str,
    position: Point,
    anki_available: bool,
) -> Rendered {
    let mut builder = Builder::default();

    let primary = SaveChoice {
        chosen: translation.primary.clone(),
        remaining: translation.alternatives.clone(),
    };

    builder.push(
        LineKind::Title,
        format!("[{}] {}", target_lang, translation.primary),
        style::TITLE,
        anki_available.then(|| primary.clone()),
    );

    if !translation.alternatives.is_empty() {
        builder.divider();

        for alt in &translation.alternatives {
            let choice = SaveChoice {
                chosen: alt.clone(),
                remaining: remaining_alternatives(&translation.alternatives, alt),
            };
            builder.push(
                LineKind::Alternative,
                alt.clone(),
                style::ALT_ITEM,
                anki_available.then_some(choice),
            );
        }
    }

    if anki_available {
        builder.divider();
        builder.push(LineKind::SaveButton, SAVE_LABEL.to_string(), style::BUTTON, Some(primary));
    }

    Rendered {
        view: PopupView {
            id,
            position,
            style: style::CONTAINER,
            lines: builder.lines,
        },
        actions: builder.actions,
    }
}

#[derive(Default)]
struct Builder {
    lines: Vec<PopupLine>,
    actions: Vec<Option<SaveChoice>>,
}

impl Builder {
    fn push(&mut self, kind: LineKind, text: String, style: Style, action: Option<SaveChoice>) {
        self.lines.push(PopupLine {
            kind,
            text,
            clickable: action.is_some(),
            style,
        });
        self.actions.push(action);
    }

    fn divider(&mut self) {
        self.push(LineKind::Divider, String::new(), style::DIVIDER, None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TranslationResult {
        TranslationResult::new("привет", vec!["здравствуй".into(), "хай".into()])
    }

    #[test]
    fn layout_when_available() {
        let rendered = render_popup(1, &sample(), "ru", Point::new(10.0, 20.0), true);
        let kinds: Vec<_> = rendered.view.lines.iter().map(|l| l.kind).collect();

        assert_eq!(
            kinds,
            vec![
                LineKind::Title,
                LineKind::Divider,
                LineKind::Alternative,
                LineKind::Alternative,
                LineKind::Divider,
                LineKind::SaveButton,
            ]
        );
        assert_eq!(rendered.view.lines[0].text, "[ru] привет");
        assert_eq!(rendered.actions.len(), rendered.view.lines.len());
    }

    #[test]
    fn no_alternatives_no_divider() {
        let translation = TranslationResult::new("привет", vec![]);
        let rendered = render_popup(1, &translation, "ru", Point::default(), false);

        assert_eq!(rendered.view.lines.len(), 1);
        assert!(!rendered.view.lines[0].clickable);
        assert!(rendered.actions[0].is_none());
    }

    #[test]
    fn button_saves_primary() {
        let rendered = render_popup(1, &sample(), "ru", Point::default(), true);
        let button = rendered
            .view
            .line_index(LineKind::SaveButton, SAVE_LABEL)
            .unwrap();

        let choice = rendered.actions[button].as_ref().unwrap();
        assert_eq!(choice.chosen, "привет");
        assert_eq!(choice.remaining, vec!["здравствуй", "хай"]);
    }

    #[test]
    fn duplicate_alternatives_removed_together() {
        let alts = vec!["a".to_string(), "b".to_string(), "a".to_string()];

        assert_eq!(remaining_alternatives(&alts, "a"), vec!["b"]);
        assert_eq!(remaining_alternatives(&alts, "b"), vec!["a", "a"]);
    }

    #[test]
    fn view_serializes_styles_as_pairs() {
        let rendered = render_popup(7, &sample(), "ru", Point::new(1.0, 2.0), false);
        let json = serde_json::to_value(&rendered.view).unwrap();

        assert_eq!(json["id"], 7);
        assert_eq!(json["style"][0], serde_json::json!(["position", "absolute"]));
        assert_eq!(json["lines"][0]["kind"], "title");
        assert_eq!(json["lines"][0]["clickable"], false);
    }
}
