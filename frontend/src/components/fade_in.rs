use gloo_timers::callback::Timeout;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FadeInProps {
    /// Milliseconds before the children start fading in.
    #[prop_or_default]
    pub delay: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(FadeIn)]
pub fn fade_in(props: &FadeInProps) -> Html {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |delay| {
                let timeout = Timeout::new(*delay, move || visible.set(true));
                move || drop(timeout)
            },
            props.delay,
        );
    }

    html! {
        <div class={classes!("fade-in", (*visible).then(|| "visible"), props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}
