use yew::prelude::*;

use crate::content::FooterLink;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub links: Vec<FooterLink>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    html! {
        <footer class="site-footer">
            { for props.links.iter().enumerate().map(|(i, link)| html! {
                <>
                    { if i > 0 { html! { <span class="footer-sep">{" | "}</span> } } else { html! {} } }
                    <a href={link.href.clone()}>{&link.label}</a>
                </>
            }) }
        </footer>
    }
}
