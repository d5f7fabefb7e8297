use leptos::{html, prelude::*};
use leptos_use::use_intersection_observer;

use crate::motion;

/// Wraps content in an element registered under `handle`; the motion
/// registry decides how it animates in once it first scrolls into view.
#[component]
pub fn Reveal(
    handle: &'static str,
    #[prop(optional)] index: usize,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let (revealed, set_revealed) = signal(false);

    use_intersection_observer(target, move |entries, _| {
        if entries.iter().any(|entry| entry.is_intersecting()) {
            set_revealed.set(true);
        }
    });

    let delay = motion::registry().delay_ms(handle, index);
    view! {
        <div
            node_ref=target
            class=move || format!("{class} {}", motion::registry().classes(handle, revealed.get()))
            style=format!("transition-delay: {delay}ms")
        >
            {children()}
        </div>
    }
}
