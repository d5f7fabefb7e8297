use leptos::prelude::*;

use super::reveal::Reveal;

struct Project {
    title: &'static str,
    summary: &'static str,
    tech: &'static [&'static str],
}

static PROJECTS: [Project; 6] = [
    Project {
        title: "WAVES GLOBAL",
        summary: "Business management platform serving 3 user roles (Admin, Manager, Employee) with granular permissions.",
        tech: &["Node.js", "Express.js", "MongoDB", "React.js", "Redis", "JWT", "Tailwind CSS", "Stripe API"],
    },
    Project {
        title: "ECOGAS",
        summary: "LPG gas booking and delivery platform with real-time tracking and automated workflows.",
        tech: &["Node.js", "Express.js", "MongoDB Atlas", "Redis", "AWS", "Socket.io", "Stripe", "TypeScript"],
    },
    Project {
        title: "ZENVOGUE",
        summary: "Server-side rendered e-commerce platform with complete shopping experience.",
        tech: &["Node.js", "Express.js", "MongoDB", "EJS", "Docker", "Kubernetes", "AWS", "Razorpay"],
    },
    Project {
        title: "CHRONO",
        summary: "Full-stack MERN inventory management system delivering real-time stock insights.",
        tech: &["React.js", "Node.js", "Express.js", "MongoDB", "AWS S3", "Tailwind CSS", "RTK Query"],
    },
    Project {
        title: "Netflix Clone",
        summary: "Streaming platform UI with Firebase Authentication and watchlist management.",
        tech: &["React.js", "Tailwind CSS", "Firebase", "Firestore", "Vite"],
    },
    Project {
        title: "OLX Clone",
        summary: "Classified ads platform with Cloudinary image optimization and real-time database.",
        tech: &["React.js", "Node.js", "Firebase", "Cloudinary", "RTK Query"],
    },
];

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id="projects" class="px-4 py-16 bg-slate-800/40">
            <div class="mx-auto max-w-6xl">
                <Reveal handle="projects">
                    <h2 class="text-3xl font-bold text-center mb-8">"Projects"</h2>
                </Reveal>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(index, project)| {
                            view! {
                                <Reveal
                                    handle="project-cards"
                                    index
                                    class="p-6 rounded-xl bg-slate-900 shadow-lg flex flex-col"
                                >
                                    <h3 class="text-lg font-semibold text-blue-400 mb-2">
                                        {project.title}
                                    </h3>
                                    <p class="text-sm text-slate-300 flex-grow mb-4">
                                        {project.summary}
                                    </p>
                                    <ul class="flex flex-wrap gap-2">
                                        {project
                                            .tech
                                            .iter()
                                            .map(|tech| {
                                                view! {
                                                    <li class="px-2 py-0.5 rounded bg-slate-700 text-xs">
                                                        {*tech}
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
