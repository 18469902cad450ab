use gloo_console::log;
use pathway_shared::{EducationLevel, Field, InquiryAck, Interest, SubmitError};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::notification::Toast;
use crate::form_state::{InquiryFormState, Notification};
use crate::submit::submit_inquiry;

pub enum InquiryFormMsg {
    SetField(Field, String),
    ToggleInterest(Interest),
    Submit,
    Submitted(Result<InquiryAck, SubmitError>),
    DismissNotification,
}

pub struct InquiryForm {
    state: InquiryFormState,
    notification: Option<Notification>,
    notification_seq: u32,
}

impl Component for InquiryForm {
    type Message = InquiryFormMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            state: InquiryFormState::new(),
            notification: None,
            notification_seq: 0,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            InquiryFormMsg::SetField(field, value) => {
                self.state.set_field(field, value);
                true
            }
            InquiryFormMsg::ToggleInterest(interest) => {
                self.state.toggle_interest(interest);
                true
            }
            InquiryFormMsg::Submit => {
                let Some(inquiry) = self.state.begin_submit() else {
                    return true;
                };
                ctx.link().send_future(async move {
                    InquiryFormMsg::Submitted(submit_inquiry(inquiry).await)
                });
                true
            }
            InquiryFormMsg::Submitted(outcome) => {
                if let Err(e) = &outcome {
                    log!("Inquiry submission failed:", e.to_string());
                }
                self.notification = Some(self.state.finish(outcome));
                self.notification_seq += 1;
                true
            }
            InquiryFormMsg::DismissNotification => {
                self.notification = None;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            InquiryFormMsg::Submit
        });
        let draft = &self.state.draft;
        let submitting = self.state.is_submitting();

        html! {
            <>
                <form class="inquiry-form" onsubmit={onsubmit} novalidate=true data-testid="inquiry-form">
                    <div class="form-row">
                        { self.text_input(ctx, Field::FirstName, "First Name", "text", "Enter your first name", &draft.first_name, "input-firstname") }
                        { self.text_input(ctx, Field::LastName, "Last Name", "text", "Enter your last name", &draft.last_name, "input-lastname") }
                    </div>
                    { self.text_input(ctx, Field::Email, "Email Address", "email", "Enter your email", &draft.email, "input-email") }
                    { self.text_input(ctx, Field::Phone, "Phone Number", "tel", "Enter your phone number", &draft.phone, "input-phone") }

                    <div class={classes!("form-item", self.state.errors.contains(Field::EducationLevel).then(|| "invalid"))}>
                        <label for="educationLevel">{"Current Education Level"}</label>
                        <select
                            id="educationLevel"
                            data-testid="select-education"
                            aria-invalid={self.state.errors.contains(Field::EducationLevel).to_string()}
                            onchange={ctx.link().callback(|e: Event| {
                                let select: HtmlSelectElement = e.target_unchecked_into();
                                InquiryFormMsg::SetField(Field::EducationLevel, select.value())
                            })}
                        >
                            <option value="" disabled=true selected={draft.education_level.is_empty()}>
                                {"Select your education level"}
                            </option>
                            { for EducationLevel::ALL.iter().map(|level| html! {
                                <option value={level.code()} selected={draft.education_level == level.code()}>
                                    { level.label() }
                                </option>
                            }) }
                        </select>
                        { self.field_message(Field::EducationLevel) }
                    </div>

                    <div class={classes!("form-item", self.state.errors.contains(Field::InterestedIn).then(|| "invalid"))}>
                        <label>{"Interested in"}</label>
                        <div class="interest-grid">
                            { for Interest::ALL.iter().map(|interest| self.interest_checkbox(ctx, *interest)) }
                        </div>
                        { self.field_message(Field::InterestedIn) }
                    </div>

                    <div class="form-item">
                        <label for="message">{"Additional Message"}</label>
                        <textarea
                            id="message"
                            rows="4"
                            placeholder="Tell us about your goals or any questions you have..."
                            value={draft.message.clone()}
                            data-testid="textarea-message"
                            oninput={ctx.link().callback(|e: InputEvent| {
                                let area: HtmlTextAreaElement = e.target_unchecked_into();
                                InquiryFormMsg::SetField(Field::Message, area.value())
                            })}
                        />
                    </div>

                    <button type="submit" class="submit-btn" disabled={submitting} data-testid="submit-btn">
                        { self.state.submit_label() }
                    </button>
                </form>
                if let Some(notification) = &self.notification {
                    <Toast
                        key={self.notification_seq}
                        notification={notification.clone()}
                        on_dismiss={ctx.link().callback(|_| InquiryFormMsg::DismissNotification)}
                    />
                }
            </>
        }
    }
}

impl InquiryForm {
    #[allow(clippy::too_many_arguments)]
    fn text_input(
        &self,
        ctx: &Context<Self>,
        field: Field,
        label: &'static str,
        input_type: &'static str,
        placeholder: &'static str,
        value: &str,
        test_id: &'static str,
    ) -> Html {
        let invalid = self.state.errors.contains(field);
        html! {
            <div class={classes!("form-item", invalid.then(|| "invalid"))}>
                <label for={field.name()}>{ label }</label>
                <input
                    id={field.name()}
                    type={input_type}
                    placeholder={placeholder}
                    value={value.to_string()}
                    aria-invalid={invalid.to_string()}
                    data-testid={test_id}
                    oninput={ctx.link().callback(move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        InquiryFormMsg::SetField(field, input.value())
                    })}
                />
                { self.field_message(field) }
            </div>
        }
    }

    fn interest_checkbox(&self, ctx: &Context<Self>, interest: Interest) -> Html {
        let id = format!("interest-{}", interest.code());
        html! {
            <label class="interest-option" for={id.clone()}>
                <input
                    id={id}
                    type="checkbox"
                    checked={self.state.draft.has_interest(interest)}
                    data-testid={format!("checkbox-{}", interest.code())}
                    onchange={ctx.link().callback(move |_: Event| InquiryFormMsg::ToggleInterest(interest))}
                />
                <span>{ interest.label() }</span>
            </label>
        }
    }

    fn field_message(&self, field: Field) -> Html {
        match self.state.error_for(field) {
            Some(message) => html! {
                <p class="form-message" data-testid={format!("error-{}", field.name())}>{ message }</p>
            },
            None => html! {},
        }
    }
}
