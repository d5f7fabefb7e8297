use leptos::prelude::*;

use super::reveal::Reveal;

/// Skill categories and their tags, in display order.
static SKILLS: [(&str, &[&str]); 3] = [
    (
        "Frontend Technologies",
        &[
            "React.js",
            "Redux Toolkit",
            "JavaScript (ES6+)",
            "TypeScript",
            "HTML5",
            "CSS3",
            "Tailwind CSS",
            "Material UI",
            "Bootstrap",
        ],
    ),
    (
        "Backend & Databases",
        &[
            "Node.js",
            "Express.js",
            "PostgreSQL",
            "MongoDB",
            "Redis",
            "REST APIs",
        ],
    ),
    (
        "Tools & DevOps",
        &[
            "Git & GitHub",
            "Docker",
            "AWS (EC2, S3)",
            "Jest",
            "Webpack",
            "CI/CD",
        ],
    ),
];

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="px-4 py-16 bg-slate-800/40">
            <div class="mx-auto max-w-6xl">
                <Reveal handle="skills">
                    <h2 class="text-3xl font-bold text-center mb-8">"Technical Skills"</h2>
                </Reveal>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    {SKILLS
                        .iter()
                        .map(|(category, tags)| {
                            view! {
                                <div>
                                    <h3 class="text-lg font-semibold text-blue-400 mb-4">
                                        {*category}
                                    </h3>
                                    <ul class="flex flex-wrap gap-2">
                                        {tags
                                            .iter()
                                            .enumerate()
                                            .map(|(index, tag)| {
                                                view! {
                                                    <li>
                                                        <Reveal
                                                            handle="skill-tags"
                                                            index
                                                            class="px-3 py-1 rounded-full bg-slate-700 text-sm"
                                                        >
                                                            {*tag}
                                                        </Reveal>
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
