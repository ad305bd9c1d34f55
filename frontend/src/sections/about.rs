use portfolio_shared::Profile;
use yew::prelude::*;

use crate::i18n::current::about as t;

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub profile: Profile,
}

#[function_component(AboutSection)]
pub fn about_section(props: &AboutProps) -> Html {
    html! {
        <section id="about" class="about section">
            <h2 class="section__title">{ t::TITLE }</h2>
            <div class="about__text">
                { for props.profile.about.iter().map(|paragraph| {
                    html! { <p>{ paragraph }</p> }
                }) }
            </div>
        </section>
    }
}
