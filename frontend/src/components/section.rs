use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    #[prop_or_default]
    pub id: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Section)]
pub fn section(props: &SectionProps) -> Html {
    let id = (!props.id.is_empty()).then(|| props.id.clone());

    html! {
        <section id={id} class={classes!("page-section", props.class.clone())}>
            { for props.children.iter() }
        </section>
    }
}
