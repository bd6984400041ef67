use gloo_timers::callback::Timeout;
use wasm_bindgen::JsValue;
use web_sys::{window, MouseEvent};
use yew::prelude::*;

use crate::content::{NavItem, NavTarget};

#[derive(Properties, PartialEq)]
pub struct DrawerMenuProps {
    pub is_open: bool,
    pub on_toggle: Callback<()>,
    pub items: Vec<NavItem>,
}

/// The `#id` fragment the address bar should show after following `target`.
fn section_hash(target: &NavTarget) -> Option<String> {
    match target {
        NavTarget::Anchor(_) => Some(target.href()),
        NavTarget::Page(_) => None,
    }
}

fn scroll_to_section(hash: String) {
    // Runs after the close has re-rendered and the body is unpinned,
    // otherwise the restored offset would win over the jump.
    let timeout = Timeout::new(0, move || {
        let Some(window) = window() else { return };
        let id = hash.trim_start_matches('#');
        if let Some(section) = window.document().and_then(|d| d.get_element_by_id(id)) {
            section.scroll_into_view();
        }
        // Fragment only, no new history entry.
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&hash));
        }
    });
    timeout.forget();
}

#[function_component(DrawerMenu)]
pub fn drawer_menu(props: &DrawerMenuProps) -> Html {
    let DrawerMenuProps { is_open, on_toggle, items } = props;

    let close = {
        let on_toggle = on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div
            class={classes!("drawer-layer", (*is_open).then(|| "open"))}
            aria-hidden={(!*is_open).to_string()}
        >
            <button
                type="button"
                class="drawer-backdrop"
                onclick={close.clone()}
                aria-label="Close menu background"
            ></button>

            <aside
                id="global-drawer"
                class={classes!("drawer", (*is_open).then(|| "open"))}
                style="height: 100dvh;"
                role="dialog"
                aria-modal="true"
                onclick={keep_open}
            >
                <div class="drawer-close">
                    <button onclick={close} aria-label="Close menu">{"✕"}</button>
                </div>

                <div class="drawer-body">
                    <ul class="drawer-items">
                        { for items.iter().map(|item| {
                            let onclick = {
                                let on_toggle = on_toggle.clone();
                                let target = item.target.clone();
                                Callback::from(move |e: MouseEvent| {
                                    e.prevent_default();
                                    on_toggle.emit(());
                                    if let Some(hash) = section_hash(&target) {
                                        scroll_to_section(hash);
                                    } else if let NavTarget::Page(href) = &target {
                                        if let Some(window) = window() {
                                            let _ = window.location().assign(href);
                                        }
                                    }
                                })
                            };
                            html! {
                                <li key={item.target.href()}>
                                    <a href={item.target.href()} class="drawer-link" onclick={onclick}>
                                        {&item.label}
                                    </a>
                                </li>
                            }
                        }) }
                    </ul>
                </div>
            </aside>
        </div>
    }
}
