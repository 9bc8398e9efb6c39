// src/ui/markdown.rs — Code-span segmentation for message rendering
//
// Assistant replies may carry inline code and fenced code blocks. We split
// the text into segments so the renderer can style code distinctly while
// leaving everything else as plain text. Plain segments keep the raw
// characters of the source; no markup is ever interpreted beyond the code
// delimiters, so server-supplied text cannot inject styling.

use pulldown_cmark::{CodeBlockKind, Event, Parser, Tag, TagEnd};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Ordinary text, rendered verbatim.
    Plain(String),
    /// Inline `code` span, rendered in the code style.
    Code(String),
    /// Fenced code block. Carries the info string (language tag) if present.
    CodeBlock { lang: String, code: String },
}

/// Split message text into plain and code segments, in source order.
pub fn segments(text: &str) -> Vec<Segment> {
    let mut out = Vec::new();
    let mut cursor = 0usize;
    let mut iter = Parser::new(text).into_offset_iter();

    while let Some((event, range)) = iter.next() {
        match event {
            Event::Code(code) => {
                push_plain(&mut out, &text[cursor..range.start]);
                out.push(Segment::Code(code.to_string()));
                cursor = range.end;
            }
            Event::Start(Tag::CodeBlock(kind)) => {
                push_plain(&mut out, &text[cursor..range.start]);

                let lang = match kind {
                    CodeBlockKind::Fenced(info) => info.to_string(),
                    CodeBlockKind::Indented => String::new(),
                };

                let mut code = String::new();
                for (inner, _) in iter.by_ref() {
                    match inner {
                        Event::Text(t) => code.push_str(&t),
                        Event::End(TagEnd::CodeBlock) => break,
                        _ => {}
                    }
                }

                out.push(Segment::CodeBlock {
                    lang,
                    code: code.trim_end_matches('\n').to_string(),
                });
                cursor = range.end;
            }
            _ => {}
        }
    }

    push_plain(&mut out, &text[cursor..]);
    out
}

fn push_plain(out: &mut Vec<Segment>, raw: &str) {
    if !raw.is_empty() {
        out.push(Segment::Plain(raw.to_string()));
    }
}
