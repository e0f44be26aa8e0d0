use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, info};
use wasm_bindgen::JsCast;
use web_sys::{window, Document, HtmlElement, KeyboardEvent, MouseEvent, Node, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::config::INITIAL_CHECK_DELAY_MS;
use crate::listeners::{throttled_scroll, DomListener};
use crate::viewport::{
    active_section, anchor_target, header_is_scrolled, is_desktop_width, scroll_target_top,
    SectionBounds,
};

pub const NAV_LINKS: &[(&str, &str)] = &[
    ("#home", "Home"),
    ("#services", "Services"),
    ("#about", "About Us"),
    ("#contact", "Contact"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    pub open: bool,
}

pub enum MenuAction {
    Toggle,
    Close,
}

impl Reducible for MenuState {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let open = match action {
            MenuAction::Toggle => !self.open,
            MenuAction::Close => false,
        };
        if open == self.open {
            self
        } else {
            Rc::new(Self { open })
        }
    }
}

fn set_body_scroll_locked(locked: bool) {
    let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let style = body.style();
    let _ = if locked {
        style.set_property("overflow", "hidden")
    } else {
        style.remove_property("overflow").map(|_| ())
    };
}

fn section_bounds(document: &Document) -> Vec<SectionBounds> {
    NAV_LINKS
        .iter()
        .filter_map(|(href, _)| anchor_target(href))
        .filter_map(|id| {
            let section = document.get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()?;
            Some(SectionBounds {
                id: id.to_string(),
                top: f64::from(section.offset_top()),
                height: f64::from(section.offset_height()),
            })
        })
        .collect()
}

fn smooth_scroll_to(id: &str, header: Option<&HtmlElement>) {
    let Some(window) = window() else { return };
    let Some(section) = window
        .document()
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        debug!("No section #{} to scroll to", id);
        return;
    };
    let header_height = header.map(|h| f64::from(h.offset_height()));
    let options = ScrollToOptions::new();
    options.set_top(scroll_target_top(f64::from(section.offset_top()), header_height));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

fn nav_link(
    href: &'static str,
    label: &'static str,
    is_active: bool,
    onclick: Callback<MouseEvent>,
) -> Html {
    html! {
        <a {href} class={classes!("nav-link", is_active.then_some("active"))} {onclick}>
            {label}
        </a>
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    let menu = use_reducer(MenuState::default);
    let is_scrolled = use_state_eq(|| false);
    let active = use_state_eq(|| None::<String>);
    let header_ref = use_node_ref();
    let nav_ref = use_node_ref();
    let toggle_ref = use_node_ref();

    {
        use_effect_with_deps(
            move |open| {
                set_body_scroll_locked(*open);
                || ()
            },
            menu.open,
        );
    }

    {
        let menu = menu.clone();
        let is_scrolled = is_scrolled.setter();
        let active = active.setter();
        let nav_ref = nav_ref.clone();
        let toggle_ref = toggle_ref.clone();
        use_effect_with_deps(
            move |_| {
                let mut listeners: Vec<DomListener> = Vec::new();
                let mut initial_check = None;

                if let Some(window) = window() {
                    let check = {
                        let window = window.clone();
                        move || {
                            let scroll_y = window.scroll_y().unwrap_or(0.0);
                            is_scrolled.set(header_is_scrolled(scroll_y));
                            if let Some(document) = window.document() {
                                let sections = section_bounds(&document);
                                if let Some(id) = active_section(scroll_y, &sections) {
                                    active.set(Some(id.to_string()));
                                }
                            }
                        }
                    };
                    let check = Rc::new(check);

                    listeners.extend(throttled_scroll(&window, {
                        let check = check.clone();
                        move || (*check)()
                    }));

                    let resize_menu = menu.clone();
                    let resize_window = window.clone();
                    listeners.extend(DomListener::new(&window, "resize", move |_| {
                        let width = resize_window
                            .inner_width()
                            .ok()
                            .and_then(|w| w.as_f64())
                            .unwrap_or(0.0);
                        if is_desktop_width(width) {
                            resize_menu.dispatch(MenuAction::Close);
                        }
                    }));

                    if let Some(document) = window.document() {
                        let key_menu = menu.clone();
                        listeners.extend(DomListener::new(&document, "keydown", move |e| {
                            if e.dyn_ref::<KeyboardEvent>().map_or(false, |k| k.key() == "Escape") {
                                key_menu.dispatch(MenuAction::Close);
                            }
                        }));

                        let click_menu = menu.clone();
                        listeners.extend(DomListener::new(&document, "click", move |e| {
                            let Some(target) = e.target().and_then(|t| t.dyn_into::<Node>().ok()) else {
                                return;
                            };
                            let inside = |node: &NodeRef| {
                                node.get().map_or(false, |n| n.contains(Some(&target)))
                            };
                            if !inside(&nav_ref) && !inside(&toggle_ref) {
                                click_menu.dispatch(MenuAction::Close);
                            }
                        }));
                    }

                    initial_check = Some(Timeout::new(INITIAL_CHECK_DELAY_MS, move || (*check)()));
                }

                move || {
                    drop(initial_check);
                    drop(listeners);
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            e.stop_propagation();
            menu.dispatch(MenuAction::Toggle);
        })
    };

    let links: Vec<Html> = NAV_LINKS
        .iter()
        .map(|(href, label)| {
            let href = *href;
            let is_active = anchor_target(href).map_or(false, |id| active.as_deref() == Some(id));
            let onclick = {
                let menu = menu.clone();
                let active = active.clone();
                let header_ref = header_ref.clone();
                Callback::from(move |e: MouseEvent| {
                    e.prevent_default();
                    let Some(id) = anchor_target(href) else { return };
                    info!("Navigating to #{}", id);
                    active.set(Some(id.to_string()));
                    smooth_scroll_to(id, header_ref.cast::<HtmlElement>().as_ref());
                    menu.dispatch(MenuAction::Close);
                })
            };
            nav_link(href, *label, is_active, onclick)
        })
        .collect();

    html! {
        <header id="header" ref={header_ref} class={classes!("header", (*is_scrolled).then_some("scrolled"))}>
            <style>
                {r#"
                    .nav-link.active {
                        color: var(--color-primary) !important;
                    }
                    .nav-link.active::after {
                        width: 100% !important;
                    }
                    @media (max-width: 767px) {
                        .nav-link {
                            padding: var(--space-16) 0;
                            border-bottom: 1px solid var(--color-border);
                            display: block;
                            font-size: var(--font-size-lg);
                        }
                        .nav-link:last-child {
                            border-bottom: none;
                        }
                        .nav-link::after {
                            display: none;
                        }
                        .menu-toggle {
                            z-index: 1001;
                        }
                        .nav.active {
                            z-index: 1000;
                        }
                    }
                    .btn:focus,
                    .form-control:focus,
                    .nav-link:focus {
                        outline: 2px solid var(--color-primary);
                        outline-offset: 2px;
                    }
                    body {
                        opacity: 0;
                        transition: opacity 0.5s ease;
                    }
                    body.loaded {
                        opacity: 1;
                    }
                "#}
            </style>
            <div class="container header__content">
                <a href="#home" class="logo">{"Vrisa Job Consultancy"}</a>
                <nav id="nav" ref={nav_ref} class={classes!("nav", menu.open.then_some("active"))}>
                    { for links }
                </nav>
                <button
                    id="menuToggle"
                    ref={toggle_ref}
                    class={classes!("menu-toggle", menu.open.then_some("active"))}
                    aria-label="Toggle navigation"
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
        </header>
    }
}
