use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};

use crate::analytics::InteractionEvent;
use crate::config::ContactConfig;
use crate::contact::{BannerKind, ContactError, ContactFormState, Field, SubmissionTransport};

use super::PageContext;

fn schedule_banner_dismiss(form: RwSignal<ContactFormState>, timing: ContactConfig) {
    let Some(id) = form.with_untracked(|f| f.banner().map(|b| b.id)) else {
        return;
    };
    set_timeout(
        move || {
            form.update(|f| {
                f.fade_banner(id);
            })
        },
        timing.banner_ttl(),
    );
    set_timeout(
        move || {
            form.update(|f| {
                f.dismiss_banner(id);
            })
        },
        timing.banner_ttl() + timing.banner_fade(),
    );
}

#[component]
pub fn ContactForm<T>(transport: T) -> impl IntoView
where
    T: SubmissionTransport + Clone + 'static,
{
    let ctx = expect_context::<PageContext>();
    let timing = ctx.config.contact;
    let sink = ctx.sink.clone();
    let form = RwSignal::new(ContactFormState::default());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(attempt) = form.try_update(|f| f.begin_submit()) else {
            return;
        };
        let payload = match attempt {
            Ok(payload) => payload,
            Err(ContactError::InFlight) => return,
            Err(e) => {
                log::debug!("contact form rejected: {e}");
                let label = match e {
                    ContactError::InvalidEmail => "invalid_email",
                    _ => "missing_fields",
                };
                sink.record(InteractionEvent::form_submit(label));
                schedule_banner_dismiss(form, timing);
                return;
            }
        };
        sink.record(InteractionEvent::form_submit("sent"));
        let transport = transport.clone();
        spawn_local(async move {
            let outcome = transport.submit(payload).await;
            if let Err(e) = &outcome {
                log::warn!("contact submission failed: {e}");
            }
            form.update(|f| {
                f.complete_submit(outcome);
            });
            schedule_banner_dismiss(form, timing);
            set_timeout(move || form.update(|f| f.settle()), timing.settle_delay());
        });
    };

    let value = move |field: Field| move || form.with(|f| f.fields.get(field).to_string());
    let set_value = move |field: Field, value: String| form.update(|f| f.fields.set(field, value));

    view! {
        <form class="contact-form flex flex-col gap-4" on:submit=on_submit novalidate=true>
            {move || {
                form.with(|f| f.banner().cloned())
                    .map(|b| {
                        let kind = match b.kind {
                            BannerKind::Success => "form-message success",
                            BannerKind::Error => "form-message error",
                        };
                        let class = if b.fading { format!("{kind} fading") } else { kind.to_string() };
                        view! {
                            <div class=class role="status">
                                {b.message}
                            </div>
                        }
                    })
            }}
            <input
                type="text"
                name="name"
                placeholder="Your Name"
                class="form-input"
                prop:value=value(Field::Name)
                on:input=move |ev| set_value(Field::Name, event_target_value(&ev))
            />
            <input
                type="email"
                name="email"
                placeholder="Your Email"
                class="form-input"
                prop:value=value(Field::Email)
                on:input=move |ev| set_value(Field::Email, event_target_value(&ev))
            />
            <input
                type="text"
                name="subject"
                placeholder="Subject"
                class="form-input"
                prop:value=value(Field::Subject)
                on:input=move |ev| set_value(Field::Subject, event_target_value(&ev))
            />
            <textarea
                name="message"
                rows="5"
                placeholder="Your Message"
                class="form-input"
                prop:value=value(Field::Message)
                on:input=move |ev| set_value(Field::Message, event_target_value(&ev))
            ></textarea>
            <button
                type="submit"
                class="btn btn-primary"
                disabled=move || form.with(|f| f.submit_disabled())
            >
                {move || form.with(|f| f.submit_label())}
            </button>
        </form>
    }
}
