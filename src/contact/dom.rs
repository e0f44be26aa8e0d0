use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlSelectElement, HtmlTextAreaElement, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition,
};

use super::controller::{ButtonState, FormView, BUSY_CLASS};
use super::notification::{Notification, NotificationId, NotificationKind};
use super::validation::{Field, FormInput};

const NOTIFICATION_ID_ATTR: &str = "data-notification-id";

pub fn scroll_to_center(element: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Center);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// `FormView` over the live contact form element.
pub struct DomFormView {
    document: Document,
    form: HtmlFormElement,
    button: HtmlButtonElement,
}

impl DomFormView {
    /// Returns `None` if the form has no submit button.
    pub fn attach(document: Document, form: HtmlFormElement) -> Option<Self> {
        let button = form
            .query_selector("button[type=\"submit\"]")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())?;
        Some(Self {
            document,
            form,
            button,
        })
    }

    fn build_notification(&self, notification: &Notification) -> Option<Element> {
        let div = self.document.create_element("div").ok()?;
        div.set_class_name(notification.kind.class_name());
        let _ = div.set_attribute(NOTIFICATION_ID_ATTR, &notification.id.to_string());

        let heading = self.document.create_element("strong").ok()?;
        heading.set_text_content(Some(notification.kind.heading()));
        let _ = div.append_child(&heading);
        let body = self.document.create_element("span").ok()?;
        body.set_text_content(Some(&format!(" {}", notification.message)));
        let _ = div.append_child(&body);
        Some(div)
    }
}

fn control_value(element: &Element) -> Option<(String, String)> {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return Some((input.name(), input.value()));
    }
    if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        return Some((select.name(), select.value()));
    }
    if let Some(textarea) = element.dyn_ref::<HtmlTextAreaElement>() {
        return Some((textarea.name(), textarea.value()));
    }
    None
}

impl FormView for DomFormView {
    fn read_input(&self) -> FormInput {
        let controls = self.form.elements();
        (0..controls.length())
            .filter_map(|i| controls.item(i))
            .filter_map(|el| control_value(&el))
            .filter(|(name, _)| !name.is_empty())
            .collect()
    }

    fn button_label(&self) -> String {
        self.button.text_content().unwrap_or_default()
    }

    fn apply_button(&self, button: &ButtonState) {
        self.button.set_text_content(Some(button.label.as_str()));
        self.button.set_disabled(button.disabled);
        let classes = self.button.class_list();
        let result = if button.busy {
            classes.add_1(BUSY_CLASS)
        } else {
            classes.remove_1(BUSY_CLASS)
        };
        if let Err(e) = result {
            warn!("Failed to toggle button class: {:?}", e);
        }
    }

    fn show_notification(&self, notification: &Notification) {
        let Some(element) = self.build_notification(notification) else {
            warn!("Could not create notification element");
            return;
        };
        let first = self.form.first_child();
        if let Err(e) = self.form.insert_before(&element, first.as_ref()) {
            warn!("Failed to insert notification: {:?}", e);
            return;
        }
        scroll_to_center(&element);
    }

    fn remove_notification(&self, id: NotificationId) {
        let selector = format!("[{}=\"{}\"]", NOTIFICATION_ID_ATTR, id);
        if let Ok(Some(element)) = self.form.query_selector(&selector) {
            element.remove();
        }
    }

    fn clear_notifications(&self) {
        let selector = format!(
            ".{}, .{}",
            NotificationKind::Success.class_name(),
            NotificationKind::Error.class_name()
        );
        if let Ok(existing) = self.form.query_selector_all(&selector) {
            for i in 0..existing.length() {
                if let Some(element) = existing.item(i).and_then(|node| node.dyn_into::<Element>().ok()) {
                    element.remove();
                }
            }
        }
    }

    fn focus_field(&self, field: Field) {
        if let Some(element) = self.document.get_element_by_id(field.as_str()) {
            if let Some(html) = element.dyn_ref::<HtmlElement>() {
                let _ = html.focus();
            }
            scroll_to_center(&element);
        }
    }

    fn reset_fields(&self) {
        self.form.reset();
    }
}
