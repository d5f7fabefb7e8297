use leptos::prelude::*;

use super::reveal::Reveal;

static HERO_LINKS: [(&str, &str); 2] = [
    ("Contact Me", "#contact"),
    ("Download Resume", "/Thashreef_Khan.pdf"),
];

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="min-h-[60vh] flex items-center justify-center px-4">
            <div class="max-w-3xl text-center">
                <Reveal handle="hero">
                    <h1 class="text-4xl lg:text-5xl font-bold mb-4">
                        "Hi, I'm " <span class="text-blue-400">"Thashreef Khan"</span>
                    </h1>
                    <h2 class="text-xl text-slate-300 mb-8">
                        "Full Stack Developer (Frontend-Focused)"
                    </h2>
                </Reveal>
                <div class="flex flex-col sm:flex-row gap-4 justify-center">
                    {HERO_LINKS
                        .iter()
                        .enumerate()
                        .map(|(index, (label, href))| {
                            view! {
                                <Reveal handle="hero-links" index>
                                    <a
                                        href=*href
                                        class="inline-block px-6 py-3 rounded-md border border-blue-400/40 text-blue-400 hover:bg-blue-400 hover:text-slate-900 transition-all duration-200"
                                    >
                                        {*label}
                                    </a>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
