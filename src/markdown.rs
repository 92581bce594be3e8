//! Markdown Rendering
//!
//! pulldown-cmark with tables, strikethrough and tasklists, plus a
//! table-of-contents pass. Headings get slug ids during rendering with the
//! same dedup the TOC extractor uses, so sidebar anchors always resolve.

use std::collections::HashMap;

use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser, Tag, TagEnd};

/// One sidebar entry per heading, in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    pub level: u32,
    pub title: String,
    pub slug: String,
}

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES | Options::ENABLE_TASKLISTS
}

/// Lowercased, alphanumerics kept, runs of anything else collapsed to one hyphen
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;
    for ch in title.chars() {
        if ch.is_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            for lower in ch.to_lowercase() {
                slug.push(lower);
            }
        } else {
            pending_hyphen = true;
        }
    }
    if slug.is_empty() {
        "section".to_string()
    } else {
        slug
    }
}

/// Per-document slug dedup: second "setup" becomes "setup-1", and so on
#[derive(Default)]
struct SlugCounter {
    seen: HashMap<String, usize>,
}

impl SlugCounter {
    fn unique(&mut self, base: String) -> String {
        let count = self.seen.entry(base.clone()).or_insert(0);
        let slug = if *count == 0 { base.clone() } else { format!("{}-{}", base, *count) };
        *count += 1;
        slug
    }
}

fn heading_number(level: pulldown_cmark::HeadingLevel) -> u32 {
    use pulldown_cmark::HeadingLevel::*;
    match level {
        H1 => 1,
        H2 => 2,
        H3 => 3,
        H4 => 4,
        H5 => 5,
        H6 => 6,
    }
}

enum State<'a> {
    Normal,
    InHeading { level: u32, title: String, inner: Vec<Event<'a>> },
}

/// Render post/answer markdown to HTML with anchored headings
pub fn render_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options());
    let mut events = Vec::new();
    let mut state = State::Normal;
    let mut slugs = SlugCounter::default();

    for event in parser {
        match state {
            State::Normal => match event {
                Event::Start(Tag::Heading { level, .. }) => {
                    state = State::InHeading {
                        level: heading_number(level),
                        title: String::new(),
                        inner: Vec::new(),
                    };
                }
                other => events.push(other),
            },
            State::InHeading { level, ref mut title, ref mut inner } => match event {
                Event::End(TagEnd::Heading(_)) => {
                    let slug = slugs.unique(slugify(title));
                    events.push(Event::Html(CowStr::from(format!(
                        r#"<h{} id="{}">"#,
                        level, slug
                    ))));
                    events.append(inner);
                    events.push(Event::Html(CowStr::from(format!("</h{}>", level))));
                    state = State::Normal;
                }
                Event::Text(ref t) => {
                    title.push_str(t);
                    inner.push(event);
                }
                Event::Code(ref t) => {
                    title.push_str(t);
                    inner.push(event);
                }
                other => inner.push(other),
            },
        }
    }

    let mut html_output = String::new();
    push_html(&mut html_output, events.into_iter());
    html_output
}

/// Extract the table of contents with the same slugs rendering assigns
pub fn extract_toc(text: &str) -> Vec<TocEntry> {
    let parser = Parser::new_ext(text, get_options());
    let mut entries = Vec::new();
    let mut current: Option<(u32, String)> = None;
    let mut slugs = SlugCounter::default();

    for event in parser {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                current = Some((heading_number(level), String::new()));
            }
            Event::Text(t) | Event::Code(t) => {
                if let Some((_, title)) = current.as_mut() {
                    title.push_str(&t);
                }
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some((level, title)) = current.take() {
                    let slug = slugs.unique(slugify(&title));
                    entries.push(TocEntry { level, title, slug });
                }
            }
            _ => {}
        }
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Getting Started"), "getting-started");
        assert_eq!(slugify("  What's new?  "), "what-s-new");
        assert_eq!(slugify("C++ & Rust"), "c-rust");
        assert_eq!(slugify("???"), "section");
    }

    #[test]
    fn test_extract_toc_levels_and_order() {
        let toc = extract_toc("# Intro\n\nbody\n\n## Setup\n\n### Details\n");
        assert_eq!(
            toc,
            vec![
                TocEntry { level: 1, title: "Intro".into(), slug: "intro".into() },
                TocEntry { level: 2, title: "Setup".into(), slug: "setup".into() },
                TocEntry { level: 3, title: "Details".into(), slug: "details".into() },
            ]
        );
    }

    #[test]
    fn test_duplicate_headings_get_suffixed_slugs() {
        let toc = extract_toc("## Setup\n\n## Setup\n\n## Setup\n");
        let slugs: Vec<_> = toc.iter().map(|e| e.slug.as_str()).collect();
        assert_eq!(slugs, ["setup", "setup-1", "setup-2"]);
    }

    #[test]
    fn test_render_anchors_match_toc_slugs() {
        let text = "## Setup\n\nsome text\n\n## Setup\n";
        let html = render_markdown(text);
        for entry in extract_toc(text) {
            assert!(html.contains(&format!(r#"id="{}""#, entry.slug)), "missing {}", entry.slug);
        }
    }

    #[test]
    fn test_render_keeps_inline_markup_in_headings() {
        let html = render_markdown("## Using `cargo`\n");
        assert!(html.contains("<code>cargo</code>"));
        assert!(html.contains(r#"id="using-cargo""#));
    }

    #[test]
    fn test_tables_enabled() {
        let html = render_markdown("| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(html.contains("<table>"));
    }

    #[test]
    fn test_no_headings_empty_toc() {
        assert!(extract_toc("just a paragraph").is_empty());
    }
}
