use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogoSize {
    Sm,
    #[default]
    Md,
    Xl,
}

impl LogoSize {
    fn class(self) -> &'static str {
        match self {
            LogoSize::Sm => "logo-sm",
            LogoSize::Md => "logo-md",
            LogoSize::Xl => "logo-xl",
        }
    }

    /// The vertical hairlines above and below the wordmark.
    pub fn shows_decorations(self) -> bool {
        self != LogoSize::Sm
    }
}

#[derive(Properties, PartialEq)]
pub struct MetallicLogoProps {
    #[prop_or_default]
    pub size: LogoSize,
    #[prop_or(true)]
    pub animated: bool,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(MetallicLogo)]
pub fn metallic_logo(props: &MetallicLogoProps) -> Html {
    let size = props.size;
    let decoration = |position: &'static str| {
        if size.shows_decorations() {
            html! { <div class={classes!("logo-hairline", position)}></div> }
        } else {
            html! {}
        }
    };

    html! {
        <div class={classes!("metallic-logo", size.class(), props.class.clone())}>
            <div class="logo-ring"></div>
            <div class="logo-echo"></div>

            <div class="logo-content">
                { decoration("top") }
                <h1 class={classes!("logo-text", if props.animated { "text-metallic" } else { "text-plain" })}>
                    {"MOMENTORY"}
                </h1>
                <div class="logo-underline">
                    <div class="logo-shine"></div>
                </div>
                { decoration("bottom") }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_logo_drops_the_hairlines() {
        assert!(!LogoSize::Sm.shows_decorations());
        assert!(LogoSize::Md.shows_decorations());
        assert!(LogoSize::Xl.shows_decorations());
        assert_eq!(LogoSize::default(), LogoSize::Md);
    }
}
