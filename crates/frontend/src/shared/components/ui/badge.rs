use contracts::domain::a004_request::RequestStatus;
use leptos::prelude::*;

/// Variants: "primary", "success", "warning", "error", "neutral" (default)
#[component]
pub fn Badge(
    #[prop(optional, into)] variant: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge badge--primary",
        "success" => "badge badge--success",
        "warning" => "badge badge--warning",
        "error" => "badge badge--error",
        _ => "badge badge--neutral",
    };

    view! { <span class=variant_class>{children()}</span> }
}

#[component]
pub fn StatusBadge(#[prop(into)] status: Signal<RequestStatus>) -> impl IntoView {
    view! {
        <span class=move || format!("badge badge--{}", status.get().badge_variant())>
            {move || status.get().as_str()}
        </span>
    }
}
