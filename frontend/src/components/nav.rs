use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NavigationProps {
    pub is_open: bool,
    pub is_scrolled: bool,
    pub on_toggle: Callback<()>,
}

#[function_component(Navigation)]
pub fn navigation(props: &NavigationProps) -> Html {
    let NavigationProps { is_open, is_scrolled, on_toggle } = props;

    let toggle = {
        let on_toggle = on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <div class={classes!("nav-brand", (*is_scrolled).then(|| "visible"))}>
                    {"MOMENTORY"}
                </div>

                <button
                    class="menu-toggle"
                    onclick={toggle}
                    aria-label={if *is_open { "Close menu" } else { "Open menu" }}
                    aria-expanded={is_open.to_string()}
                    aria-controls="global-drawer"
                >
                    <span class="menu-toggle-label">
                        { if *is_open { "Close" } else { "Menu" } }
                    </span>
                    <span class={classes!("menu-icon", (*is_open).then(|| "open"))} aria-hidden="true">
                        <span></span>
                        <span></span>
                        <span></span>
                    </span>
                </button>
            </div>
        </nav>
    }
}
