use portfolio_shared::Profile;
use yew::prelude::*;

use crate::{
    components::icons::{Icon, IconName},
    i18n::current::footer as t,
};

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub profile: Profile,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    html! {
        <footer class="footer">
            <nav class="footer__socials" aria-label={t::SOCIAL_ARIA}>
                { for props.profile.socials.iter().map(|social| {
                    html! {
                        <a
                            class="footer__social-link"
                            href={social.href.clone()}
                            target="_blank"
                            rel="noreferrer"
                            aria-label={social.label.clone()}
                            title={social.label.clone()}
                        >
                            {
                                match IconName::from_slug(&social.icon) {
                                    Some(icon) => html! { <Icon name={icon} size={20} /> },
                                    None => html! { <span>{ &social.label }</span> },
                                }
                            }
                        </a>
                    }
                }) }
            </nav>
            <p class="footer__copyright">{ t::COPYRIGHT }</p>
        </footer>
    }
}
