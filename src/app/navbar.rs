use leptos::prelude::*;

use super::reveal::Reveal;

pub static NAV_ITEMS: [(&str, &str); 6] = [
    ("Home", "#home"),
    ("About", "#about"),
    ("Skills", "#skills"),
    ("Experience", "#experience"),
    ("Projects", "#projects"),
    ("Contact", "#contact"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let (is_open, set_is_open) = signal(false);

    view! {
        <header class="sticky top-0 z-10 bg-slate-900/80 backdrop-blur shadow">
            <Reveal handle="navbar">
                <nav class="mx-auto max-w-6xl px-4 sm:px-6 lg:px-8 py-4 flex items-center justify-between">
                    <a href="#home" class="text-xl font-bold text-blue-400">
                        "Thashreef Khan"
                    </a>
                    <button
                        class="md:hidden text-2xl"
                        aria-label=move || if is_open.get() { "Close menu" } else { "Open menu" }
                        on:click=move |_| set_is_open.update(|open| *open = !*open)
                    >
                        {move || if is_open.get() { "✕" } else { "☰" }}
                    </button>
                    <ul class=move || {
                        if is_open.get() {
                            "flex flex-col md:flex-row gap-6"
                        } else {
                            "hidden md:flex md:flex-row gap-6"
                        }
                    }>
                        {NAV_ITEMS
                            .iter()
                            .map(|(name, href)| {
                                view! {
                                    <li>
                                        <a
                                            href=*href
                                            class="hover:text-blue-400 transition-colors duration-200"
                                            on:click=move |_| set_is_open.set(false)
                                        >
                                            {*name}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </nav>
            </Reveal>
        </header>
    }
}
