//! Bordered content panel with an optional heading.

use leptos::prelude::*;

#[component]
pub fn Card(
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let class = match class {
        Some(extra) => format!("card {extra}"),
        None => "card".to_owned(),
    };
    view! {
        <section class=class>
            {title.map(|t| view! { <h2 class="card__title">{t}</h2> })}
            <div class="card__body">{children()}</div>
        </section>
    }
}
