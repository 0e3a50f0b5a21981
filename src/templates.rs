//! HTML rendering of a page snapshot.
//!
//! Used by the CLI to print what the page looks like after an operation.

use crate::page::{MemoryPage, Slot};

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn style_attr(page: &MemoryPage, slot: Slot) -> String {
    let state = page.slot(slot);
    let mut rules = Vec::new();
    if let Some(style) = state.style {
        rules.push(format!("color: {}", style.color));
        rules.push(format!("font: {}", style.font));
    }
    if !state.visible {
        rules.push("display: none".to_string());
    }

    if rules.is_empty() {
        String::new()
    } else {
        format!(r#" style="{}""#, html_escape(&rules.join("; ")))
    }
}

fn list_html(items: &[String]) -> String {
    let mut html = String::new();
    for item in items {
        html.push_str(&format!("<li>{}</li>", html_escape(item)));
    }
    html
}

/// Render one slot as its element. The comments list renders as a `<ul>`;
/// every other slot as a `<div>` holding its text and any list items.
pub fn render_slot(page: &MemoryPage, slot: Slot) -> String {
    let state = page.slot(slot);
    let text = state.text.as_deref().map(html_escape).unwrap_or_default();

    if slot == Slot::CommentsList {
        return format!(
            r#"<ul id="{id}"{style}>{items}</ul>"#,
            id = slot.element_id(),
            style = style_attr(page, slot),
            items = list_html(&state.items),
        );
    }

    let items = if state.items.is_empty() {
        String::new()
    } else {
        format!("<ul>{}</ul>", list_html(&state.items))
    };
    // The history container wraps the comments list
    let nested = if slot == Slot::History {
        render_slot(page, Slot::CommentsList)
    } else {
        String::new()
    };

    format!(
        r#"<div id="{id}"{style}>{text}{items}{nested}</div>"#,
        id = slot.element_id(),
        style = style_attr(page, slot),
    )
}

pub fn render_page(page: &MemoryPage) -> String {
    Slot::ALL
        .iter()
        .filter(|slot| **slot != Slot::CommentsList)
        .map(|slot| render_slot(page, *slot))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FACT_STYLE;
    use crate::page::PageSurface;

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("<b>\"hi\" & 'bye'</b>"), "&lt;b&gt;&quot;hi&quot; &amp; &#39;bye&#39;&lt;/b&gt;");
    }

    #[test]
    fn test_hidden_form_renders_display_none() {
        let page = MemoryPage::new();
        assert_eq!(
            render_slot(&page, Slot::CommentForm),
            r#"<div id="comments-container" style="display: none"></div>"#
        );
    }

    #[test]
    fn test_styled_fact() {
        let mut page = MemoryPage::new();
        page.set_style(Slot::RandomFact, FACT_STYLE).unwrap();
        page.set_text(Slot::RandomFact, "I love photography!").unwrap();
        assert_eq!(
            render_slot(&page, Slot::RandomFact),
            r#"<div id="random-fact-container" style="color: #023C40; font: 12px georgia">I love photography!</div>"#
        );
    }

    #[test]
    fn test_comments_nest_inside_history_and_are_escaped() {
        let mut page = MemoryPage::new();
        page.append_item(Slot::CommentsList, "<script>").unwrap();
        let html = render_slot(&page, Slot::History);
        assert_eq!(
            html,
            r#"<div id="history"><ul id="comments-list"><li>&lt;script&gt;</li></ul></div>"#
        );
    }

    #[test]
    fn test_page_renders_each_slot_once() {
        let page = MemoryPage::new();
        let html = render_page(&page);
        for slot in Slot::ALL {
            assert_eq!(html.matches(&format!(r#"id="{}""#, slot.element_id())).count(), 1);
        }
    }
}
