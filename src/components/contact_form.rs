use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{error, info};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::contact::email::{submit_contact, EmailJs};
use crate::contact::validation::{ContactForm, Field, InquiryKind, Validation};
use crate::error::SiteError;

const RESPONSE_CLEAR_MS: u32 = 8_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SendStatus {
    Idle,
    Sending,
    Sent,
    Failed,
}

enum StatusAction {
    Start,
    Succeed,
    Fail,
    Reset,
    /// Fired by the success timer; only ever hides a `Sent` notice.
    ClearNotice,
}

impl Reducible for SendStatus {
    type Action = StatusAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match (action, *self) {
            (StatusAction::Start, _) => SendStatus::Sending,
            (StatusAction::Succeed, _) => SendStatus::Sent,
            (StatusAction::Fail, _) => SendStatus::Failed,
            (StatusAction::Reset, _) | (StatusAction::ClearNotice, SendStatus::Sent) => SendStatus::Idle,
            (StatusAction::ClearNotice, current) => current,
        };
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

fn event_value(e: &Event) -> Option<String> {
    let target = e.target()?;
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    if let Some(area) = target.dyn_ref::<HtmlTextAreaElement>() {
        return Some(area.value());
    }
    target.dyn_ref::<HtmlSelectElement>().map(|select| select.value())
}

/// Stores the edited value and drops the field's error flag.
fn field_handler<E>(field: Field, form: &UseStateHandle<ContactForm>, validation: &UseStateHandle<Validation>) -> Callback<E>
where
    E: AsRef<Event> + 'static,
{
    let form = form.clone();
    let validation = validation.clone();
    Callback::from(move |e: E| {
        let Some(value) = event_value(e.as_ref()) else {
            return;
        };
        let mut next = (*form).clone();
        next.set(field, value);
        form.set(next);
        if validation.is_invalid(field) {
            let mut cleared = (*validation).clone();
            cleared.clear(field);
            validation.set(cleared);
        }
    })
}

#[function_component(ContactFormSection)]
pub fn contact_form_section() -> Html {
    let form = use_state(ContactForm::default);
    let validation = use_state(Validation::default);
    let status = use_reducer_eq(|| SendStatus::Idle);
    let notice_timer = use_mut_ref(|| None::<Timeout>);
    let mailer = use_memo(|_| EmailJs::from_build_config(), ());

    let onsubmit = {
        let form = form.clone();
        let validation = validation.clone();
        let status = status.clone();
        let notice_timer = notice_timer.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *status == SendStatus::Sending {
                return;
            }
            // dropping the handle cancels a pending notice reset
            notice_timer.borrow_mut().take();

            let submitted = (*form).clone();
            let check = submitted.validate();
            if !check.is_valid() {
                info!("Contact form blocked: {} invalid field(s)", check.invalid_fields().len());
                validation.set(check);
                status.dispatch(StatusAction::Reset);
                return;
            }
            validation.set(Validation::default());
            status.dispatch(StatusAction::Start);

            let form = form.clone();
            let validation = validation.clone();
            let status = status.clone();
            let notice_timer = notice_timer.clone();
            let mailer = mailer.clone();
            spawn_local(async move {
                match submit_contact(&submitted, mailer.as_ref()).await {
                    Ok(()) => {
                        form.set(ContactForm::default());
                        status.dispatch(StatusAction::Succeed);
                        let status = status.clone();
                        let timer = Timeout::new(RESPONSE_CLEAR_MS, move || status.dispatch(StatusAction::ClearNotice));
                        *notice_timer.borrow_mut() = Some(timer);
                    }
                    Err(SiteError::Invalid(v)) => {
                        validation.set(v);
                        status.dispatch(StatusAction::Reset);
                    }
                    Err(e) => {
                        error!("Contact form send failed: {}", e);
                        status.dispatch(StatusAction::Fail);
                    }
                }
            });
        })
    };

    let control = |field: Field| classes!("form-control", validation.is_invalid(field).then(|| "is-invalid"));
    let feedback = |field: Field| {
        if validation.is_invalid(field) {
            html! { <div class="invalid-feedback">{ field.hint() }</div> }
        } else {
            html! {}
        }
    };

    let sending = *status == SendStatus::Sending;
    let response = match *status {
        SendStatus::Sent => html! {
            <div class="form-response success" role="status">
                {"Thanks! Your message is on its way. We'll get back to you within one business day."}
            </div>
        },
        SendStatus::Failed => html! {
            <div class="form-response error" role="alert">
                {"Sorry, your message couldn't be sent. Please try again in a moment or email hello@brightline.studio."}
            </div>
        },
        SendStatus::Idle | SendStatus::Sending => html! {},
    };

    html! {
        <>
            <form id="contactForm" class="contact-form" novalidate={true} {onsubmit}>
                <div class="form-row">
                    <div class="form-group">
                        <label for={Field::Name.id()}>{"Name *"}</label>
                        <input
                            id={Field::Name.id()}
                            type="text"
                            class={control(Field::Name)}
                            value={form.name.clone()}
                            oninput={field_handler::<InputEvent>(Field::Name, &form, &validation)}
                        />
                        { feedback(Field::Name) }
                    </div>
                    <div class="form-group">
                        <label for={Field::Email.id()}>{"Email *"}</label>
                        <input
                            id={Field::Email.id()}
                            type="email"
                            class={control(Field::Email)}
                            value={form.email.clone()}
                            oninput={field_handler::<InputEvent>(Field::Email, &form, &validation)}
                        />
                        { feedback(Field::Email) }
                    </div>
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label for={Field::Phone.id()}>{"Phone"}</label>
                        <input
                            id={Field::Phone.id()}
                            type="tel"
                            class={control(Field::Phone)}
                            value={form.phone.clone()}
                            oninput={field_handler::<InputEvent>(Field::Phone, &form, &validation)}
                        />
                        { feedback(Field::Phone) }
                    </div>
                    <div class="form-group">
                        <label for={Field::Inquiry.id()}>{"What can we help with? *"}</label>
                        <select
                            id={Field::Inquiry.id()}
                            class={control(Field::Inquiry)}
                            onchange={field_handler::<Event>(Field::Inquiry, &form, &validation)}
                        >
                            <option value="" selected={form.inquiry.is_empty()}>{"Choose one..."}</option>
                            { for InquiryKind::ALL.iter().map(|kind| html! {
                                <option value={kind.value()} selected={form.inquiry == kind.value()}>{ kind.label() }</option>
                            }) }
                        </select>
                        { feedback(Field::Inquiry) }
                    </div>
                </div>
                <div class="form-group">
                    <label for={Field::Message.id()}>{"Message *"}</label>
                    <textarea
                        id={Field::Message.id()}
                        rows="5"
                        class={control(Field::Message)}
                        value={form.message.clone()}
                        oninput={field_handler::<InputEvent>(Field::Message, &form, &validation)}
                    />
                    { feedback(Field::Message) }
                </div>
                <button type="submit" class="submit-button" disabled={sending}>
                    { if sending { "Sending..." } else { "Send Message" } }
                </button>
            </form>
            <div id="formResponse" aria-live="polite">
                { response }
            </div>
            <style>
                {r#"
                    .contact-form {
                        display: flex;
                        flex-direction: column;
                        gap: 1.25rem;
                    }
                    .form-row {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1.25rem;
                    }
                    @media (max-width: 768px) {
                        .form-row {
                            grid-template-columns: 1fr;
                        }
                    }
                    .form-group label {
                        display: block;
                        margin-bottom: 0.4rem;
                        color: #ccc;
                    }
                    .form-control {
                        width: 100%;
                        padding: 0.75rem 1rem;
                        border-radius: 8px;
                        border: 1px solid rgba(255, 255, 255, 0.15);
                        background: rgba(0, 0, 0, 0.3);
                        color: #fff;
                        font: inherit;
                    }
                    .form-control.is-invalid {
                        border-color: #ff6b6b;
                    }
                    .invalid-feedback {
                        color: #ff6b6b;
                        font-size: 0.85rem;
                        margin-top: 0.3rem;
                    }
                    .submit-button {
                        align-self: flex-start;
                        padding: 0.9rem 2rem;
                        border: none;
                        border-radius: 8px;
                        background: linear-gradient(45deg, #1E90FF, #4169E1);
                        color: #fff;
                        font-size: 1rem;
                        cursor: pointer;
                    }
                    .submit-button:disabled {
                        opacity: 0.6;
                        cursor: wait;
                    }
                    .form-response {
                        margin-top: 1rem;
                        padding: 1rem;
                        border-radius: 8px;
                    }
                    .form-response.success {
                        background: rgba(76, 175, 80, 0.15);
                        color: #81c784;
                    }
                    .form-response.error {
                        background: rgba(255, 107, 107, 0.15);
                        color: #ff6b6b;
                    }
                "#}
            </style>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(from: SendStatus, actions: Vec<StatusAction>) -> SendStatus {
        let mut status = Rc::new(from);
        for action in actions {
            status = status.reduce(action);
        }
        *status
    }

    #[test]
    fn success_notice_clears_back_to_idle() {
        use StatusAction::*;
        assert_eq!(run(SendStatus::Idle, vec![Start, Succeed]), SendStatus::Sent);
        assert_eq!(run(SendStatus::Idle, vec![Start, Succeed, ClearNotice]), SendStatus::Idle);
    }

    #[test]
    fn late_notice_reset_keeps_send_in_flight() {
        use StatusAction::*;
        // resubmitted before the success notice expired
        let status = run(SendStatus::Sent, vec![Start, ClearNotice]);
        assert_eq!(status, SendStatus::Sending);
    }

    #[test]
    fn late_notice_reset_keeps_failure_message() {
        use StatusAction::*;
        assert_eq!(run(SendStatus::Sent, vec![Start, Fail, ClearNotice]), SendStatus::Failed);
    }

    #[test]
    fn blocked_submit_resets_any_notice() {
        use StatusAction::*;
        assert_eq!(run(SendStatus::Failed, vec![Reset]), SendStatus::Idle);
        assert_eq!(run(SendStatus::Sent, vec![Reset]), SendStatus::Idle);
    }
}
