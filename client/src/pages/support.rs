//! Support page: quick links, contact details, FAQ and a ticket form.

#[cfg(test)]
#[path = "support_test.rs"]
mod support_test;

use leptos::prelude::*;

/// Single-open, collapsible accordion selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    #[must_use]
    pub fn is_open(self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Open `index`, closing any other item; clicking the open item closes it.
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) { None } else { Some(index) };
    }
}

pub const FAQS: &[(&str, &str)] = &[
    (
        "How does the AI-powered compliance work?",
        "Our AI system continuously monitors your data and processes, comparing them against regulatory requirements. It uses machine learning to identify patterns, anomalies, and potential compliance issues in real-time.",
    ),
    (
        "Which regulations does the platform support?",
        "We currently support GDPR, HIPAA, ISO 27001, PCI-DSS, SOC 2, and many other regulatory frameworks. Custom compliance rules can also be configured.",
    ),
    (
        "How often are audits performed?",
        "Audits run continuously in the background. You can also trigger manual audits at any time or schedule them at specific intervals based on your needs.",
    ),
    (
        "Can I export compliance reports?",
        "Yes, all reports can be exported in multiple formats including PDF, CSV, and JSON. Reports are fully customizable and can be scheduled for automatic delivery.",
    ),
    (
        "How secure is my data?",
        "We use enterprise-grade encryption, secure data centers, and follow strict security protocols. All data is encrypted in transit and at rest, and we maintain SOC 2 Type II certification.",
    ),
];

const CONTACT: &[(&str, &str)] = &[
    ("Email", "support@bereanstechnology.com"),
    ("Response Time", "Within 24 hours"),
    ("Hours", "24/7 Support Available"),
];

#[component]
pub fn SupportPage() -> impl IntoView {
    let faq = RwSignal::new(Accordion::default());

    view! {
        <div class="page">
            <div class="page__header">
                <h2>"Support / Help"</h2>
                <p class="muted">"Get assistance and find answers to common questions"</p>
            </div>

            <div class="grid grid--support">
                <div class="stack">
                    <section class="card">
                        <h3 class="card__title">"Quick Links"</h3>
                        <div class="stack">
                            <button class="btn btn--outline btn--block btn--start">"▤ Documentation"</button>
                            <button class="btn btn--outline btn--block btn--start">"? Getting Started Guide"</button>
                            <button class="btn btn--outline btn--block btn--start">"✉ Contact Support"</button>
                        </div>
                    </section>
                    <section class="card">
                        <h3 class="card__title">"Contact Information"</h3>
                        {CONTACT
                            .iter()
                            .map(|(label, value)| {
                                view! {
                                    <div class="contact">
                                        <p class="muted small strong">{*label}</p>
                                        <p class="small">{*value}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </section>
                </div>

                <div class="stack">
                    <section class="card">
                        <h3 class="card__title">"Frequently Asked Questions"</h3>
                        <p class="muted small">"Find quick answers to common questions"</p>
                        <div class="accordion">
                            {FAQS
                                .iter()
                                .enumerate()
                                .map(|(i, (question, answer))| {
                                    let open = move || faq.get().is_open(i);
                                    view! {
                                        <div class="accordion__item">
                                            <button
                                                class="accordion__trigger"
                                                aria-expanded=move || open().to_string()
                                                on:click=move |_| faq.update(|a| a.toggle(i))
                                            >
                                                {*question}
                                                <span class="accordion__chevron" class:accordion__chevron--open=open>"▾"</span>
                                            </button>
                                            <Show when=open>
                                                <div class="accordion__content muted">{*answer}</div>
                                            </Show>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </section>

                    <section class="card">
                        <h3 class="card__title">"Submit a Support Ticket"</h3>
                        <p class="muted small">"Can't find what you're looking for? Contact our support team"</p>
                        <form class="stack" on:submit=|ev: leptos::ev::SubmitEvent| ev.prevent_default()>
                            <div class="grid grid--2">
                                <div class="field">
                                    <label class="field__label" for="ticket-name">"Name"</label>
                                    <input class="input" id="ticket-name" placeholder="Your name"/>
                                </div>
                                <div class="field">
                                    <label class="field__label" for="ticket-email">"Email"</label>
                                    <input class="input" id="ticket-email" type="email" placeholder="your@email.com"/>
                                </div>
                            </div>
                            <div class="field">
                                <label class="field__label" for="ticket-subject">"Subject"</label>
                                <input class="input" id="ticket-subject" placeholder="Brief description of your issue"/>
                            </div>
                            <div class="field">
                                <label class="field__label" for="ticket-message">"Message"</label>
                                <textarea
                                    class="input input--tall"
                                    id="ticket-message"
                                    placeholder="Provide detailed information about your question or issue"
                                ></textarea>
                            </div>
                            <button class="btn btn--accent btn--block" type="submit">"➤ Submit Ticket"</button>
                        </form>
                    </section>
                </div>
            </div>
        </div>
    }
}
