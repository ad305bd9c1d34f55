use portfolio_shared::{contact::ContactMessage, Profile};
use web_sys::{window, HtmlInputElement, HtmlTextAreaElement};
use yew::{
    events::{InputEvent, SubmitEvent},
    prelude::*,
};

use crate::{
    components::icons::{Icon, IconName},
    config,
    i18n::current::contact as t,
};

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub profile: Profile,
}

#[function_component(ContactSection)]
pub fn contact_section(props: &ContactProps) -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let phone = use_state(String::new);
    let message = use_state(String::new);

    let on_input = |field: UseStateHandle<String>| {
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                field.set(target.value());
            }
        })
    };

    let on_message_input = {
        let message = message.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlTextAreaElement>() {
                message.set(target.value());
            }
        })
    };

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let phone = phone.clone();
        let message = message.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            let Some(window) = window() else {
                return;
            };

            let submission = ContactMessage::from_fields(
                name.as_str(),
                email.as_str(),
                phone.as_str(),
                message.as_str(),
            );
            if submission.validate().is_err() {
                let _ = window.alert_with_message(t::VALIDATION_ALERT);
                return;
            }

            // Hand off to the visitor's mail client, then clear the form.
            let href = submission.mailto_href(config::CONTACT_EMAIL);
            let _ = window.location().set_href(&href);

            name.set(String::new());
            email.set(String::new());
            phone.set(String::new());
            message.set(String::new());
        })
    };

    html! {
        <section id="contact" class="contact section">
            <h2 class="section__title">{ t::TITLE }</h2>
            <p class="contact__intro">{ t::INTRO }</p>

            <div class="contact__details">
                <span class="contact__detail">
                    <Icon name={IconName::Mail} size={16} />
                    { &props.profile.email }
                </span>
                <span class="contact__detail">
                    <Icon name={IconName::MapPin} size={16} />
                    { &props.profile.location }
                </span>
            </div>

            <form id="contact-form" class="contact__form" onsubmit={onsubmit}>
                <input
                    type="text"
                    name="name"
                    placeholder={t::PLACEHOLDER_NAME}
                    value={(*name).clone()}
                    oninput={on_input(name.clone())}
                />
                <input
                    type="email"
                    name="email"
                    placeholder={t::PLACEHOLDER_EMAIL}
                    value={(*email).clone()}
                    oninput={on_input(email.clone())}
                />
                <input
                    type="tel"
                    name="phone"
                    placeholder={t::PLACEHOLDER_PHONE}
                    value={(*phone).clone()}
                    oninput={on_input(phone.clone())}
                />
                <textarea
                    name="message"
                    rows="6"
                    placeholder={t::PLACEHOLDER_MESSAGE}
                    value={(*message).clone()}
                    oninput={on_message_input}
                />
                <button type="submit" class="btn btn--primary">{ t::SUBMIT }</button>
            </form>
        </section>
    }
}
