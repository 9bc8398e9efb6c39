// src/tui/widgets/transcript.rs — Conversation panel.
//
// Every piece of server-supplied text ends up in a Span as literal text
// content; the only transformation is styling code segments differently.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::ui::analytics::learning_mode_label;
use crate::ui::markdown::{self, Segment};
use crate::ui::transcript::{Message, Role, Transcript};

use crate::tui::theme::Theme;

pub fn render(
    f: &mut Frame,
    area: Rect,
    transcript: &Transcript,
    scroll_from_bottom: u16,
    in_flight: bool,
) {
    let border = if in_flight {
        Theme::border_busy()
    } else {
        Theme::border()
    };

    let block = Block::default()
        .title(" Conversation ")
        .borders(Borders::ALL)
        .border_style(border);

    let mut lines: Vec<Line> = Vec::new();
    for message in transcript.messages() {
        lines.extend(message_lines(message));
    }
    if in_flight {
        lines.push(Line::from(Span::styled(
            "Tutor is thinking...",
            Theme::busy(),
        )));
    }

    let inner_width = area.width.saturating_sub(2).max(1);
    let inner_height = area.height.saturating_sub(2);
    let total = wrapped_line_count(&lines, inner_width);
    let scroll_top = total
        .saturating_sub(inner_height)
        .saturating_sub(scroll_from_bottom);

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll_top, 0));
    f.render_widget(paragraph, area);
}

/// Lines for one message: speaker tag, content (code styled separately),
/// optional metadata annotation, trailing blank separator.
pub fn message_lines(message: &Message) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let tag = match message.role {
        Role::User => Span::styled("You", Theme::user_tag()),
        Role::Assistant => Span::styled("Tutor", Theme::assistant_tag()),
    };
    lines.push(Line::from(tag));

    let body_style = if message.placeholder {
        Theme::text_dim()
    } else {
        Theme::text()
    };

    let mut current: Vec<Span<'static>> = Vec::new();
    for segment in markdown::segments(&message.content) {
        match segment {
            Segment::Plain(text) => {
                for (i, part) in text.split('\n').enumerate() {
                    if i > 0 {
                        lines.push(Line::from(std::mem::take(&mut current)));
                    }
                    if !part.is_empty() {
                        current.push(Span::styled(part.to_string(), body_style));
                    }
                }
            }
            Segment::Code(code) => {
                current.push(Span::styled(code, Theme::code()));
            }
            Segment::CodeBlock { lang, code } => {
                if !current.is_empty() {
                    lines.push(Line::from(std::mem::take(&mut current)));
                }
                if !lang.is_empty() {
                    lines.push(Line::from(Span::styled(
                        format!("  [{lang}]"),
                        Theme::text_dim(),
                    )));
                }
                for code_line in code.split('\n') {
                    lines.push(Line::from(Span::styled(
                        format!("  {code_line}"),
                        Theme::code(),
                    )));
                }
            }
        }
    }
    if !current.is_empty() {
        lines.push(Line::from(current));
    }

    if let Some(meta) = &message.meta {
        let mut annotation = format!("mode: {}", learning_mode_label(&meta.learning_mode));
        if let Some(topic) = &meta.current_topic {
            annotation.push_str(&format!(" | topic: {topic}"));
        }
        lines.push(Line::from(Span::styled(annotation, Theme::text_dim())));
    }

    lines.push(Line::from(""));
    lines
}

/// Estimate how many terminal rows the lines occupy after wrapping.
fn wrapped_line_count(lines: &[Line], width: u16) -> u16 {
    let width = width.max(1) as usize;
    lines
        .iter()
        .map(|line| {
            let len: usize = line.spans.iter().map(|s| s.content.chars().count()).sum();
            (len.max(1)).div_ceil(width) as u16
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::transcript::ReplyMeta;
    use pretty_assertions::assert_eq;

    fn user_message(content: &str) -> Message {
        Message {
            role: Role::User,
            content: content.into(),
            meta: None,
            placeholder: false,
        }
    }

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_message_has_tag_content_separator() {
        let lines = message_lines(&user_message("hello"));
        assert_eq!(lines.len(), 3);
        assert_eq!(line_text(&lines[0]), "You");
        assert_eq!(line_text(&lines[1]), "hello");
        assert_eq!(line_text(&lines[2]), "");
    }

    #[test]
    fn test_inline_code_gets_code_style() {
        let lines = message_lines(&user_message("use `map` here"));
        let content = &lines[1];
        assert_eq!(content.spans.len(), 3);
        assert_eq!(content.spans[1].content, "map");
        assert_eq!(content.spans[1].style.fg, Theme::code().fg);
    }

    #[test]
    fn test_code_block_renders_on_own_lines() {
        let lines = message_lines(&user_message("look:\n```rust\nlet x = 1;\n```"));
        let texts: Vec<String> = lines.iter().map(line_text).collect();
        assert!(texts.contains(&"  [rust]".to_string()));
        assert!(texts.contains(&"  let x = 1;".to_string()));
    }

    #[test]
    fn test_annotation_line_for_assistant_meta() {
        let message = Message {
            role: Role::Assistant,
            content: "sorted!".into(),
            meta: Some(ReplyMeta {
                learning_mode: "problem_solving".into(),
                current_topic: Some("sorting".into()),
            }),
            placeholder: false,
        };
        let lines = message_lines(&message);
        let texts: Vec<String> = lines.iter().map(line_text).collect();
        assert!(texts.contains(&"mode: Problem solving | topic: sorting".to_string()));
    }

    #[test]
    fn test_unknown_mode_annotation_falls_back() {
        let message = Message {
            role: Role::Assistant,
            content: "hi".into(),
            meta: Some(ReplyMeta {
                learning_mode: "mystery".into(),
                current_topic: None,
            }),
            placeholder: false,
        };
        let lines = message_lines(&message);
        let texts: Vec<String> = lines.iter().map(line_text).collect();
        assert!(texts.contains(&"mode: Assistant".to_string()));
    }

    #[test]
    fn test_markup_rendered_as_literal_text() {
        // Server text must never be interpreted as styling.
        let lines = message_lines(&user_message("**not bold**"));
        assert_eq!(line_text(&lines[1]), "**not bold**");
    }

    #[test]
    fn test_wrapped_line_count() {
        let lines = vec![Line::from("a".repeat(25)), Line::from("short")];
        assert_eq!(wrapped_line_count(&lines, 10), 4);
    }
}
