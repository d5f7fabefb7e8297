use chrono::{DateTime, Datelike};
use leptos::prelude::*;

use super::{navbar::NAV_ITEMS, reveal::Reveal};

fn build_year() -> Option<i32> {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .ok()
        .map(|t| t.year())
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = build_year().map(|y| format!("© {y} ")).unwrap_or_default();

    view! {
        <footer class="bg-slate-950 py-8 mt-16">
            <Reveal handle="footer" class="mx-auto max-w-6xl px-4 flex flex-col items-center gap-4">
                <ul class="flex gap-6 text-sm">
                    {NAV_ITEMS
                        .iter()
                        .map(|(name, href)| {
                            view! {
                                <li>
                                    <a href=*href class="hover:text-blue-400">
                                        {*name}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <p class="text-sm text-slate-400">{year} "Thashreef Khan. Built with Rust & Leptos."</p>
            </Reveal>
        </footer>
    }
}
