use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

/// Wraps content in a container that transitions from a hidden state to a
/// visible one the first time it enters the viewport. The `shown` latch is
/// only ever set, never cleared, so the entrance plays at most once per page
/// load no matter how often the element scrolls in and out of view.
///
/// `delay_ms` becomes the CSS `transition-delay`, which is how sibling
/// elements stagger their entrances (see `motion::stagger_delay_ms`).
#[component]
pub fn Reveal(
    #[prop(optional, into)] class: String,
    #[prop(optional)] delay_ms: u32,
    children: Children,
) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let visibility = use_element_visibility(target);
    let (shown, set_shown) = signal(false);

    Effect::new(move |_| {
        if visibility.get() {
            set_shown.set(true);
        }
    });

    let base = if class.is_empty() {
        "reveal".to_string()
    } else {
        format!("reveal {class}")
    };

    view! {
        <div
            node_ref=target
            class=move || {
                if shown.get() { format!("{base} reveal-visible") } else { base.clone() }
            }
            style:transition-delay=format!("{delay_ms}ms")
        >
            {children()}
        </div>
    }
}
