use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

use crate::error::SiteError;

pub fn current_scroll_y() -> f64 {
    web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Smooth-scrolls to the element with `id`.
pub fn scroll_to_section(id: &str) -> Result<(), SiteError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| SiteError::Unavailable("document".to_string()))?;
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| SiteError::MissingElement(format!("#{}", id)))?;
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(())
}

/// Document-relative top of each section that exists, in the order given.
/// Ids without a matching element are skipped.
pub fn section_offsets<'a>(ids: &[&'a str]) -> Vec<(&'a str, f64)> {
    let Some(window) = web_sys::window() else {
        return Vec::new();
    };
    let Some(document) = window.document() else {
        return Vec::new();
    };
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    ids.iter()
        .filter_map(|id| {
            document
                .get_element_by_id(id)
                .map(|el| (*id, el.get_bounding_client_rect().top() + scroll_y))
        })
        .collect()
}

/// Adds or removes `class` on `<body>`.
pub fn set_body_class(class: &str, on: bool) {
    let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let list = body.class_list();
    let result = if on { list.add_1(class) } else { list.remove_1(class) };
    if let Err(e) = result {
        log::debug!("could not toggle body class {}: {:?}", class, e);
    }
}

/// The last section whose top has passed `scroll_y + offset`. `sections`
/// must be in document order.
pub fn active_section<'a>(sections: &[(&'a str, f64)], scroll_y: f64, offset: f64) -> Option<&'a str> {
    let line = scroll_y + offset;
    sections
        .iter()
        .take_while(|(_, top)| *top <= line)
        .last()
        .map(|(id, _)| *id)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAYOUT: &[(&str, f64)] = &[("home", 0.0), ("about", 800.0), ("services", 1500.0), ("contact", 2600.0)];

    #[test]
    fn picks_section_under_nav() {
        assert_eq!(active_section(LAYOUT, 0.0, 90.0), Some("home"));
        assert_eq!(active_section(LAYOUT, 709.0, 90.0), Some("home"));
        assert_eq!(active_section(LAYOUT, 710.0, 90.0), Some("about"));
        assert_eq!(active_section(LAYOUT, 5000.0, 90.0), Some("contact"));
    }

    #[test]
    fn nothing_active_above_first_section() {
        let layout = [("about", 400.0)];
        assert_eq!(active_section(&layout, 0.0, 90.0), None);
        assert_eq!(active_section(&[], 100.0, 90.0), None);
    }
}
