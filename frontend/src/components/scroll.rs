use log::warn;
use wasm_bindgen::JsValue;
use web_sys::{window, Element, ScrollBehavior, ScrollIntoViewOptions};

/// Element id named by an in-page link. Only `#id` fragments qualify.
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

pub fn smooth_scroll_to(element: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Smooth-scroll the element with `id` into view. A missing element is
/// logged and skipped.
pub fn scroll_to_id(id: &str) -> Result<(), JsValue> {
    let document = window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    match document.get_element_by_id(id) {
        Some(element) => smooth_scroll_to(&element),
        None => warn!("no element with id {:?} to scroll to", id),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_links_resolve_to_ids() {
        assert_eq!(fragment_id("#section--1"), Some("section--1"));
        assert_eq!(fragment_id("#section--3"), Some("section--3"));
    }

    #[test]
    fn non_fragment_links_are_skipped() {
        assert_eq!(fragment_id("#"), None);
        assert_eq!(fragment_id(""), None);
        assert_eq!(fragment_id("https://example.com/#x"), None);
        assert_eq!(fragment_id("section--1"), None);
    }
}
