use std::time::Duration;
use gloo_timers::future::sleep;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventInit, HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

/// Helpers for driving mounted components through real DOM events.

pub fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Creates a fresh container under <body> and returns it ready for `mount_to`.
pub fn container(id: &str) -> HtmlElement {
    let document = document();
    if let Some(old) = document.get_element_by_id(id) {
        old.remove();
    }
    let container = document.create_element("div").unwrap();
    container.set_id(id);
    document.body().unwrap().append_child(&container).unwrap();
    container.unchecked_into::<HtmlElement>()
}

pub fn find(root: &Element, selector: &str) -> Element {
    root.query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element matches {}", selector))
}

pub fn find_all(root: &Element, selector: &str) -> Vec<Element> {
    let list = root.query_selector_all(selector).unwrap();
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn text(root: &Element, selector: &str) -> String {
    find(root, selector).text_content().unwrap_or_default().trim().to_string()
}

fn bubbling(kind: &str) -> Event {
    let init = EventInit::new();
    init.set_bubbles(true);
    Event::new_with_event_init_dict(kind, &init).unwrap()
}

pub fn type_into(root: &Element, selector: &str, value: &str) {
    let element = find(root, selector);
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        area.set_value(value);
    } else {
        panic!("{} is not a text field", selector);
    }
    element.dispatch_event(&bubbling("input")).unwrap();
}

pub fn choose(root: &Element, selector: &str, value: &str) {
    let element = find(root, selector);
    element.unchecked_ref::<HtmlSelectElement>().set_value(value);
    element.dispatch_event(&bubbling("change")).unwrap();
}

pub fn click(root: &Element, selector: &str) {
    find(root, selector).unchecked_into::<HtmlElement>().click();
}

pub fn click_nth(root: &Element, selector: &str, index: usize) {
    find_all(root, selector)[index].clone().unchecked_into::<HtmlElement>().click();
}

pub fn input_value(root: &Element, selector: &str) -> String {
    let element = find(root, selector);
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else {
        element.unchecked_ref::<HtmlTextAreaElement>().value()
    }
}

/// Lets pending microtasks and DOM updates settle.
pub async fn settle() {
    sleep(Duration::from_millis(20)).await;
}
