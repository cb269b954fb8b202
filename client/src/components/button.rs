//! Button primitive rendered as `<a>` when given an `href`.

use leptos::either::Either;
use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
}

impl ButtonVariant {
    pub fn class(self) -> &'static str {
        match self {
            Self::Primary => "button button--primary",
            Self::Secondary => "button button--secondary",
            Self::Ghost => "button button--ghost",
        }
    }
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] href: Option<String>,
    #[prop(optional)] on_click: Option<Callback<()>>,
    #[prop(optional)] disabled: bool,
    children: Children,
) -> impl IntoView {
    let class = variant.class();
    match href {
        Some(href) => Either::Left(view! { <a class=class href=href>{children()}</a> }),
        None => Either::Right(view! {
            <button
                class=class
                type="button"
                disabled=disabled
                on:click=move |_| {
                    if let Some(cb) = on_click.as_ref() {
                        cb.run(());
                    }
                }
            >
                {children()}
            </button>
        }),
    }
}
