use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::{self, MOBILE_BREAKPOINT_PX};
use crate::dom;
use crate::scroll_spy::{self, Indicator, ScrollSample, ScrollThrottle, Section};

/// Where the indicator belongs under the menu item for `active`.
fn measure_indicator(menu: &NodeRef, active: Section) -> Indicator {
    let Some(container) = menu.cast::<Element>() else {
        return Indicator::HIDDEN;
    };
    let selector = format!("[data-menu-id=\"{}\"]", active.id());
    match container.query_selector(&selector).ok().flatten() {
        Some(item) => {
            let item_rect = item.get_bounding_client_rect();
            let container_rect = container.get_bounding_client_rect();
            Indicator::under(item_rect.left(), item_rect.width(), container_rect.left())
        }
        None => Indicator::HIDDEN,
    }
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let is_scrolled = use_state_eq(|| false);
    let active = use_state_eq(|| Section::Home);
    let indicator = use_state_eq(Indicator::default);
    let menu_open = use_state_eq(|| false);
    let menu_ref = use_node_ref();

    // Scroll-spy
    {
        let is_scrolled = is_scrolled.clone();
        let active = active.clone();
        use_effect_with_deps(
            move |_| {
                let throttle = Rc::new(RefCell::new(ScrollThrottle::default()));
                let on_scroll = Closure::<dyn Fn()>::new(move || {
                    let y = dom::scroll_y();
                    let sample = throttle.borrow_mut().sample(y, dom::now_ms());
                    match sample {
                        ScrollSample::Dropped => {}
                        ScrollSample::Accepted => is_scrolled.set(scroll_spy::is_scrolled(y)),
                        ScrollSample::Track => {
                            is_scrolled.set(scroll_spy::is_scrolled(y));
                            active.set(scroll_spy::active_section(y, &dom::section_bounds()));
                        }
                    }
                });

                let window = web_sys::window();
                if let Some(window) = &window {
                    if window
                        .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())
                        .is_err()
                    {
                        log::warn!("could not attach scroll listener");
                    }
                    // Initial check
                    let initial = on_scroll
                        .as_ref()
                        .unchecked_ref::<web_sys::js_sys::Function>()
                        .call0(&wasm_bindgen::JsValue::NULL);
                    if initial.is_err() && config::diagnostics_enabled() {
                        log::warn!("initial scroll-spy pass failed");
                    }
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            on_scroll.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    // Follow the active item. Measured again after a short delay because the
    // navbar padding animates when `is_scrolled` flips.
    {
        let indicator = indicator.clone();
        let menu_ref = menu_ref.clone();
        use_effect_with_deps(
            move |(section, _)| {
                let section = *section;
                indicator.set(measure_indicator(&menu_ref, section));
                let settle = Timeout::new(200, move || {
                    indicator.set(measure_indicator(&menu_ref, section));
                });
                move || drop(settle)
            },
            (*active, *is_scrolled),
        );
    }

    {
        let indicator = indicator.clone();
        let menu_ref = menu_ref.clone();
        let menu_open = menu_open.clone();
        let active = active.clone();
        use_event_with_window("resize", move |_: Event| {
            if dom::viewport_width() >= MOBILE_BREAKPOINT_PX {
                menu_open.set(false);
            }
            indicator.set(measure_indicator(&menu_ref, *active));
        });
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let on_item = |section: Section| {
        let active = active.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            active.set(section);
            menu_open.set(false);
            dom::scroll_to_section(section, scroll_spy::nav_offset(dom::viewport_width()));
        })
    };

    let indicator_style = format!(
        "left: {}px; width: {}px; opacity: {};",
        indicator.left,
        indicator.width,
        if indicator.is_visible() { 1 } else { 0 }
    );

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#home" class="nav-logo" onclick={on_item(Section::Home)}>
                    <img src="/assets/logo.png" alt="Nandini Decoration logo" />
                    <span>{"Nandini Decoration"}</span>
                </a>

                <button class="burger-menu" aria-label="Toggle menu" onclick={toggle_menu}>
                    {if *menu_open { "✕" } else { "☰" }}
                </button>

                <div ref={menu_ref} class={classes!("nav-menu", (*menu_open).then(|| "mobile-menu-open"))}>
                    { Section::ALL.iter().map(|&section| html! {
                        <a
                            key={section.id()}
                            href={format!("#{}", section.id())}
                            data-menu-id={section.id()}
                            class={classes!("nav-link", (*active == section).then(|| "active"))}
                            onclick={on_item(section)}
                        >
                            <span class="nav-icon">{section.icon()}</span>
                            <span>{section.label()}</span>
                        </a>
                    }).collect::<Html>() }
                    <span class="nav-indicator" style={indicator_style}></span>
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 100;
                    padding: 1rem 1.5rem;
                    transition: padding 0.3s ease;
                }
                .top-nav.scrolled {
                    padding: 0.5rem 1.5rem;
                }
                .nav-content {
                    position: relative;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    max-width: 90rem;
                    margin: 0 auto;
                    padding: 0.5rem 1rem;
                    border-radius: 1.5rem;
                    border: 2px solid rgba(250, 209, 231, 0.3);
                    background: linear-gradient(135deg, rgba(15, 61, 86, 0.92) 0%, rgba(164, 62, 119, 0.85) 50%, rgba(15, 61, 86, 0.92) 100%);
                    backdrop-filter: blur(8px);
                    box-shadow: 0 0 20px rgba(250, 209, 231, 0.2);
                    transition: box-shadow 0.3s ease, border-color 0.3s ease;
                }
                .top-nav.scrolled .nav-content {
                    border-color: rgba(250, 209, 231, 0.4);
                    box-shadow: 0 0 30px rgba(250, 209, 231, 0.3);
                }
                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    color: #fff;
                    font-weight: 700;
                    text-decoration: none;
                }
                .nav-logo img {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 50%;
                    object-fit: cover;
                }
                .nav-menu {
                    position: relative;
                    display: flex;
                    flex-wrap: nowrap;
                    gap: 0.25rem;
                    padding-bottom: 0.4rem;
                }
                .nav-link {
                    display: flex;
                    align-items: center;
                    gap: 0.35rem;
                    padding: 0.4rem 0.7rem;
                    border-radius: 0.75rem;
                    color: rgba(255, 255, 255, 0.8);
                    font-size: 0.9rem;
                    text-decoration: none;
                    white-space: nowrap;
                    transition: color 0.2s ease, background 0.2s ease;
                }
                .nav-link:hover, .nav-link.active {
                    color: #fff;
                    background: rgba(250, 209, 231, 0.15);
                }
                .nav-indicator {
                    position: absolute;
                    bottom: 0;
                    width: 0;
                    height: 0.35rem;
                    border-radius: 999px;
                    background: linear-gradient(90deg, #FAD1E7, #BCE1F1);
                    box-shadow: 0 0 12px rgba(250, 209, 231, 0.8);
                    transform: translateX(-50%);
                    transition: left 0.35s cubic-bezier(0.4, 0, 0.2, 1), width 0.35s ease, opacity 0.2s ease;
                    pointer-events: none;
                }
                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1.5rem;
                    cursor: pointer;
                }
                @media (max-width: 1100px) {
                    .nav-icon { display: none; }
                }
                @media (max-width: 768px) {
                    .top-nav, .top-nav.scrolled { padding: 0.25rem 0.5rem; }
                    .burger-menu { display: block; }
                    .nav-menu {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        margin-top: 0.5rem;
                        padding: 0.75rem;
                        border-radius: 1rem;
                        background: rgba(15, 61, 86, 0.97);
                    }
                    .nav-menu.mobile-menu-open { display: flex; }
                    .nav-icon { display: inline; }
                    .nav-indicator { display: none; }
                }
                "#}
            </style>
        </nav>
    }
}
