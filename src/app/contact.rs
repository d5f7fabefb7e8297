use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::contact::{
    dismiss_delay_ms, message_len, submit, ContactError, ContactForm, Dismissal, Field, FormStore,
    HttpRelay, RelayConfig, SubmissionState, MESSAGE_LIMIT,
};

use super::reveal::Reveal;

impl FormStore for RwSignal<ContactForm> {
    fn with_form<T>(&self, f: impl FnOnce(&mut ContactForm) -> T) -> Option<T> {
        self.try_update(f)
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let config = use_context::<RelayConfig>().unwrap_or_default();
    let relay = HttpRelay::new(config.clone());
    let contact_email = config.contact_email.clone();
    let form = RwSignal::new(ContactForm::new());

    let UseTimeoutFnReturn {
        start: dismiss_later,
        ..
    } = use_timeout_fn(
        move |dismissal: Dismissal| {
            form.update(|f| {
                f.dismiss(dismissal);
            });
        },
        dismiss_delay_ms(),
    );

    let pending = Memo::new(move |_| form.with(|f| f.state().is_pending()));
    let no_message = Memo::new(move |_| form.with(|f| f.draft().message.is_empty()));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let relay = relay.clone();
        let dismiss_later = dismiss_later.clone();
        spawn_local(async move {
            match submit(&form, &relay).await {
                Ok(Some(dismissal)) => dismiss_later(dismissal),
                Ok(None) => {}
                Err(ContactError::InFlight) => log::debug!("submission already in flight"),
                Err(e) => log::warn!("contact form not sent: {e}"),
            }
        });
    };

    let open_direct_email = move |_| {
        let uri = match form.with_untracked(|f| f.direct_email_uri(&config)) {
            Ok(uri) => uri,
            Err(e) => {
                log::debug!("direct email unavailable: {e}");
                return;
            }
        };
        if let Err(e) = window().open_with_url_and_target(&uri, "_blank") {
            log::warn!("couldn't open mail client: {e:?}");
        }
    };

    view! {
        <section id="contact" class="px-4 py-16">
            <Reveal handle="contact" class="mx-auto max-w-3xl">
                <h2 class="text-3xl font-bold text-center mb-4">"Get In Touch"</h2>
                <p class="text-center text-slate-300 mb-8">
                    "I'm currently open to new opportunities and interesting projects. Whether you have a question or just want to say hi, I'll get back to you as soon as possible."
                </p>
                <ContactDetails email=contact_email />
                <form class="bg-white text-slate-700 rounded-xl shadow-2xl p-6 sm:p-10" on:submit=on_submit>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                        <FieldInput form field=Field::Name label="Name" placeholder="Your Name" index=0 />
                        <FieldInput
                            form
                            field=Field::Email
                            label="Email"
                            placeholder="Your Email"
                            input_type="email"
                            index=1
                        />
                    </div>
                    <FieldInput form field=Field::Subject label="Subject" placeholder="Subject" index=2 />
                    <Reveal handle="contact-fields" index=3 class="mb-6">
                        <label for="message" class="block font-medium mb-2">
                            "Message"
                        </label>
                        <textarea
                            id="message"
                            name="message"
                            rows="6"
                            placeholder="Your Message"
                            maxlength=MESSAGE_LIMIT
                            required
                            class="w-full px-4 py-3 rounded-lg border border-slate-200 bg-slate-50 focus:outline-none focus:ring-2 focus:ring-blue-500 resize-y min-h-32"
                            prop:value=move || form.with(|f| f.draft().message.clone())
                            prop:disabled=move || pending.get()
                            on:input=move |ev| {
                                form.update(|f| f.update_field(Field::Message, &event_target_value(&ev)))
                            }
                        ></textarea>
                        <div class="text-right text-xs text-slate-400">
                            {move || form.with(|f| message_len(&f.draft().message))}
                            "/"
                            {MESSAGE_LIMIT}
                        </div>
                    </Reveal>
                    <StatusBanner form />
                    <div class="flex flex-col sm:flex-row gap-3">
                        <button
                            type="submit"
                            class="flex-1 py-3 rounded-lg bg-blue-600 text-white font-medium hover:bg-blue-700 disabled:opacity-60 transition-all duration-200"
                            prop:disabled=move || pending.get()
                        >
                            {move || if pending.get() { "Sending..." } else { "Send Message" }}
                        </button>
                        <button
                            type="button"
                            class="px-6 py-3 rounded-lg border border-slate-300 hover:bg-slate-100 disabled:opacity-60 transition-all duration-200"
                            prop:disabled=move || pending.get()
                            on:click=move |_| form.update(|f| f.clear())
                        >
                            "Clear"
                        </button>
                        <button
                            type="button"
                            class="px-6 py-3 rounded-lg border border-blue-600 text-blue-600 hover:bg-blue-50 disabled:opacity-60 transition-all duration-200"
                            prop:disabled=move || no_message.get()
                            on:click=open_direct_email
                        >
                            "Email directly"
                        </button>
                    </div>
                </form>
            </Reveal>
        </section>
    }
}

static PHONE: (&str, &str) = ("+91 93458 26343", "tel:+919345826343");
static LOCATION: &str = "Cherambadi, The Nilgiris, Tamil Nadu";
static PROFILES: [(&str, &str); 2] = [
    ("LinkedIn", "https://linkedin.com"),
    ("GitHub", "https://github.com"),
];

#[component]
fn ContactDetails(email: String) -> impl IntoView {
    let mailto = format!("mailto:{email}");
    view! {
        <Reveal handle="contact-details" class="mb-8">
            <ul class="grid grid-cols-1 sm:grid-cols-3 gap-4 text-center text-slate-300">
                <li>
                    <a href=mailto class="hover:text-blue-400">
                        {email}
                    </a>
                </li>
                <li>
                    <a href=PHONE.1 class="hover:text-blue-400">
                        {PHONE.0}
                    </a>
                </li>
                <li>{LOCATION}</li>
            </ul>
            <div class="flex justify-center gap-6 mt-4">
                {PROFILES
                    .iter()
                    .map(|(name, href)| {
                        view! {
                            <a
                                href=*href
                                target="_blank"
                                rel="noopener noreferrer"
                                class="text-blue-400 hover:underline"
                            >
                                {*name}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </Reveal>
    }
}

#[component]
fn FieldInput(
    form: RwSignal<ContactForm>,
    field: Field,
    label: &'static str,
    placeholder: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    index: usize,
) -> impl IntoView {
    let pending = move || form.with(|f| f.state().is_pending());
    view! {
        <Reveal handle="contact-fields" index class="mb-6">
            <label for=field.as_str() class="block font-medium mb-2">
                {label}
            </label>
            <input
                id=field.as_str()
                name=field.as_str()
                type=input_type
                placeholder=placeholder
                required
                class="w-full px-4 py-3 rounded-lg border border-slate-200 bg-slate-50 focus:outline-none focus:ring-2 focus:ring-blue-500"
                prop:value=move || form.with(|f| f.draft().get(field).to_string())
                prop:disabled=pending
                on:input=move |ev| form.update(|f| f.update_field(field, &event_target_value(&ev)))
            />
        </Reveal>
    }
}

#[component]
fn StatusBanner(form: RwSignal<ContactForm>) -> impl IntoView {
    move || match form.with(|f| f.state().clone()) {
        SubmissionState::Succeeded(msg) => Some(view! {
            <div class="mb-6 p-4 rounded-lg bg-green-100 text-green-800 border border-green-300">
                {msg}
            </div>
        }
        .into_any()),
        SubmissionState::Failed(msg) => Some(view! {
            <div class="mb-6 p-4 rounded-lg bg-red-100 text-red-800 border border-red-300">
                {msg}
            </div>
        }
        .into_any()),
        SubmissionState::Idle | SubmissionState::Pending => None,
    }
}
