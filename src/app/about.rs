use leptos::prelude::*;

use super::reveal::Reveal;

static HIGHLIGHTS: [(&str, &str); 6] = [
    (
        "Frontend Expertise",
        "React.js, Redux Toolkit, TypeScript, Tailwind CSS, Material UI",
    ),
    (
        "Backend Development",
        "Node.js, Express.js, REST APIs, Socket.io, Event-driven Architecture",
    ),
    (
        "Database Management",
        "PostgreSQL, MongoDB, Redis (Caching, Pub/Sub)",
    ),
    (
        "Performance Focus",
        "Optimizing applications for speed, scalability, and usability",
    ),
    (
        "Team Collaboration",
        "Collaborating with backend teams for seamless integration",
    ),
    (
        "Quality Delivery",
        "Passionate about delivering high-quality software solutions",
    ),
];

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="px-4 py-16">
            <div class="mx-auto max-w-6xl">
                <Reveal handle="about">
                    <h2 class="text-3xl font-bold text-center mb-8">"About Me"</h2>
                    <h3 class="text-xl font-semibold text-blue-400 mb-4">
                        "Frontend-focused Full Stack Developer"
                    </h3>
                    <p class="text-slate-300 mb-4">
                        "With " <strong>"2 years of experience"</strong>
                        " building responsive, scalable, and high-performance web applications using modern technologies."
                    </p>
                    <p class="text-slate-300 mb-8">
                        "Experienced in translating UI/UX designs into responsive applications, integrating frontend systems with backend APIs, and optimizing applications for speed, scalability, and usability."
                    </p>
                </Reveal>
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                    {HIGHLIGHTS
                        .iter()
                        .enumerate()
                        .map(|(index, (title, description))| {
                            view! {
                                <Reveal
                                    handle="about-cards"
                                    index
                                    class="p-6 rounded-xl bg-slate-800 shadow-lg"
                                >
                                    <h4 class="font-semibold mb-2">{*title}</h4>
                                    <p class="text-sm text-slate-400">{*description}</p>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
