use yew::prelude::*;

use crate::components::section::Section;
use crate::content::TransformRow;

#[derive(Properties, PartialEq)]
pub struct TransformationProps {
    pub rows: Vec<TransformRow>,
}

fn bullets(items: &[String]) -> Html {
    html! {
        <ul class="transform-list">
            { for items.iter().map(|item| html! { <li>{item}</li> }) }
        </ul>
    }
}

#[function_component(TransformationSection)]
pub fn transformation_section(props: &TransformationProps) -> Html {
    html! {
        <Section id="transformation" class={classes!("transformation")}>
            <div class="section-heading">
                <span class="eyebrow">{"TRANSFORMATION"}</span>
                <h2>{"Before / After"}</h2>
                <p class="section-lead">
                    <span>{"学びを「知識」で終わらせず、行動に変える。"}</span>
                    <span>{"Momentoryと出会った、"}<br class="mobile-only" />{"あなたの変化を4つの観点で整理しました。"}</span>
                </p>
            </div>

            // Wide screens: one table
            <div class="transform-table desktop-only">
                <table>
                    <thead>
                        <tr>
                            <th class="item-col">{"Item"}</th>
                            <th>{"Before"}</th>
                            <th>{"After"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for props.rows.iter().enumerate().map(|(idx, row)| html! {
                            <tr key={row.label.clone()} class={if idx % 2 == 0 { "even" } else { "odd" }}>
                                <td class="item-col">{&row.label}</td>
                                <td>{ bullets(&row.before) }</td>
                                <td class="after">{ bullets(&row.after) }</td>
                            </tr>
                        }) }
                    </tbody>
                </table>
            </div>

            // Narrow screens: a card per row
            <div class="transform-cards mobile-only">
                { for props.rows.iter().map(|row| {
                    let (number, topic) = row.split_label();
                    html! {
                        <div key={row.label.clone()} class="transform-card">
                            <div class="card-number">{number}</div>
                            <div class="card-topic">{topic}</div>
                            <div class="card-side">
                                <div class="card-side-label">{"Before"}</div>
                                { bullets(&row.before) }
                            </div>
                            <div class="card-side after">
                                <div class="card-side-label">{"After"}</div>
                                { bullets(&row.after) }
                            </div>
                        </div>
                    }
                }) }
            </div>
        </Section>
    }
}
