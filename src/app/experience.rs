use leptos::prelude::*;

use super::reveal::Reveal;

struct Role {
    company: &'static str,
    position: &'static str,
    period: &'static str,
    duties: &'static [&'static str],
}

static ROLES: [Role; 2] = [
    Role {
        company: "Quality Opera International LLP, Bangalore",
        position: "Software Developer",
        period: "Jan 2025 - Jun 2025",
        duties: &[
            "Developed and maintained Node.js backend services and RESTful APIs using Express.js in production environments",
            "Implemented JWT authentication and authorization",
            "Optimized MongoDB schemas and database queries",
            "Containerized applications using Docker and deployed services on AWS EC2",
            "Built real-time communication using Socket.io",
        ],
    },
    Role {
        company: "Freelancer, Kerala",
        position: "Web Developer & Instructor",
        period: "Oct 2023 - Present",
        duties: &[
            "Designed and developed MERN stack web applications for client-based business requirements",
            "Built highly responsive UI components",
            "Mentored developers in React.js, Redux, component architecture, and UI optimization",
        ],
    },
];

// (title, issuer)
static ACHIEVEMENTS: [(&str, &str); 2] = [
    ("Voice of Security", "IBM SkillsBuild"),
    ("Best Coordinator & Best Performance", "Brototype, Calicut"),
];

// (course, period, institution)
static EDUCATION: [(&str, &str, &str); 2] = [
    ("MERN Stack Development", "2023 – 2025", "Brototype, Calicut"),
    (
        "Bachelor of Science (BSc)",
        "2021 – 2023",
        "Bharathiyar University, Coimbatore",
    ),
];

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <section id="experience" class="px-4 py-16">
            <div class="mx-auto max-w-6xl">
                <Reveal handle="experience">
                    <h2 class="text-3xl font-bold text-center mb-8">
                        "Work Experience & Achievements"
                    </h2>
                </Reveal>
                <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
                    <ol class="lg:col-span-2 border-l border-slate-700 pl-6 space-y-8">
                        {ROLES
                            .iter()
                            .enumerate()
                            .map(|(index, role)| {
                                view! {
                                    <li>
                                        <Reveal handle="experience-roles" index>
                                            <h3 class="text-lg font-semibold">{role.position}</h3>
                                            <p class="text-blue-400">{role.company}</p>
                                            <p class="text-sm text-slate-400 mb-2">{role.period}</p>
                                            <ul class="list-disc pl-5 text-slate-300 text-sm space-y-1">
                                                {role
                                                    .duties
                                                    .iter()
                                                    .map(|duty| view! { <li>{*duty}</li> })
                                                    .collect_view()}
                                            </ul>
                                        </Reveal>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ol>
                    <Reveal handle="experience" class="space-y-6">
                        {ACHIEVEMENTS
                            .iter()
                            .map(|(title, issuer)| {
                                view! {
                                    <div class="p-4 rounded-xl bg-slate-800">
                                        <h4 class="font-semibold">{*title}</h4>
                                        <p class="text-sm text-slate-400">{*issuer}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                        <div class="p-4 rounded-xl bg-slate-800">
                            <h4 class="font-semibold mb-2">"Education"</h4>
                            {EDUCATION
                                .iter()
                                .map(|(course, period, institution)| {
                                    view! {
                                        <div class="mb-2">
                                            <h5 class="text-sm font-medium">{*course}</h5>
                                            <p class="text-xs text-slate-400">
                                                {*period} " · " {*institution}
                                            </p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
