use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::fade_in::FadeIn;
use crate::content::{Emphasis, Service};

#[derive(Properties, PartialEq)]
pub struct ServiceListProps {
    pub services: Vec<Service>,
    /// Id of the expanded card.
    pub open: Option<String>,
    pub on_toggle: Callback<String>,
}

#[function_component(ServiceList)]
pub fn service_list(props: &ServiceListProps) -> Html {
    html! {
        <div class="services-grid">
            { for props.services.iter().enumerate().map(|(idx, service)| html! {
                <ServiceCard
                    key={service.id.clone()}
                    service={service.clone()}
                    delay={idx as u32 * 100}
                    is_open={props.open.as_deref() == Some(service.id.as_str())}
                    on_toggle={props.on_toggle.clone()}
                />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub service: Service,
    pub delay: u32,
    pub is_open: bool,
    pub on_toggle: Callback<String>,
}

fn list_block(class: &'static str, title: &str, items: &[String]) -> Html {
    html! {
        <div class={class}>
            <div class="detail-heading">{title}</div>
            <ul class="detail-list">
                { for items.iter().map(|item| html! { <li>{item}</li> }) }
            </ul>
        </div>
    }
}

#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    let ServiceCardProps { service, delay, is_open, on_toggle } = props;

    let onclick = {
        let on_toggle = on_toggle.clone();
        let id = service.id.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(id.clone()))
    };

    let detail = if *is_open {
        html! {
            <div id={service.detail_id()} class="service-detail">
                <p class="pre-line">{&service.body}</p>
                {
                    match service.bullet_block() {
                        Some((title, items)) => list_block("detail-block", title, items),
                        None => html! {},
                    }
                }
                {
                    match service.note_block() {
                        Some((title, note)) => html! {
                            <div class="detail-block ruled">
                                <div class="detail-heading">{title}</div>
                                <p class="detail-note">{note}</p>
                            </div>
                        },
                        None => html! {},
                    }
                }
                {
                    match service.disclaimer_block() {
                        Some((title, items)) => list_block("detail-block ruled wide", title, items),
                        None => html! {},
                    }
                }
                <div class="detail-rule"><div></div></div>
            </div>
        }
    } else {
        html! {}
    };

    html! {
        <FadeIn delay={*delay} class={classes!("service-card")}>
            <button
                type="button"
                class="service-toggle"
                onclick={onclick}
                aria-expanded={is_open.to_string()}
                aria-controls={service.detail_id()}
            >
                <div class="service-image">
                    <img src={service.image.clone()} alt={service.title_text.clone()} loading="lazy" />
                </div>

                <div class="service-summary">
                    <div class="service-no">{&service.no}</div>
                    <h3 class="service-title">
                        { for service.title.iter().map(|line| html! {
                            <span class={classes!(
                                "title-line",
                                match line.emphasis {
                                    Some(Emphasis::Small) => Some("small"),
                                    Some(Emphasis::Large) => Some("large"),
                                    None => None,
                                }
                            )}>
                                {&line.text}
                            </span>
                        }) }
                    </h3>
                    <p class="pre-line">{&service.summary}</p>

                    <div class="service-more">
                        <span>{ if *is_open { "Close" } else { "Details" } }</span>
                        <span class={classes!("chevron", (*is_open).then(|| "flipped"))}>{"⌄"}</span>
                    </div>
                </div>
            </button>

            { detail }
        </FadeIn>
    }
}
