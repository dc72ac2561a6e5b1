//! Widget Bootstrap
//!
//! Inspects the current page and mounts only the widgets whose host
//! elements exist. A missing host disables that widget with no error, so
//! any page can carry any subset of the three.

use leptos::mount::mount_to;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::components::{Carousel, GuessingGame, TodoList};

const CAROUSEL_HOST: &str = "carousel";
const TODO_HOST: &str = "todo-app";
const GAME_HOST: &str = "guessing-game";

/// Comma-separated image URLs on the carousel host
const SLIDES_ATTR: &str = "data-slides";

pub fn mount_widgets() {
    let Some(document) = web_sys::window().and_then(|win| win.document()) else {
        return;
    };

    if let Some(host) = host_element(&document, CAROUSEL_HOST) {
        let slides = slide_sources(&host);
        mount_to(host, move || view! { <Carousel slides=slides /> }).forget();
    }
    if let Some(host) = host_element(&document, TODO_HOST) {
        mount_to(host, || view! { <TodoList /> }).forget();
    }
    if let Some(host) = host_element(&document, GAME_HOST) {
        mount_to(host, || view! { <GuessingGame /> }).forget();
    }
}

fn host_element(document: &Document, id: &str) -> Option<HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
}

fn slide_sources(host: &HtmlElement) -> Vec<String> {
    host.get_attribute(SLIDES_ATTR)
        .map(|raw| parse_slide_list(&raw))
        .unwrap_or_default()
}

fn parse_slide_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_slide_list_trims_and_keeps_order() {
        let slides = parse_slide_list(" img/a.jpg, img/b.jpg ,img/c.jpg");
        assert_eq!(slides, vec!["img/a.jpg", "img/b.jpg", "img/c.jpg"]);
    }

    #[test]
    fn test_parse_slide_list_drops_empty_entries() {
        assert_eq!(parse_slide_list("a.png,, ,b.png,"), vec!["a.png", "b.png"]);
        assert!(parse_slide_list("").is_empty());
        assert!(parse_slide_list(" , ").is_empty());
    }
}
