use portfolio_shared::theme::Theme;
use yew::prelude::*;

use crate::{
    components::icons::{Icon, IconName},
    i18n::current::theme_toggle as t,
    theme,
};

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let theme_state = use_state(theme::preferred_theme);

    let onclick = {
        let theme_state = theme_state.clone();
        Callback::from(move |_| {
            theme_state.set(theme::toggle_theme());
        })
    };

    let is_dark = *theme_state == Theme::Dark;
    let label = if is_dark { t::SWITCH_TO_LIGHT } else { t::SWITCH_TO_DARK };
    let icon = if is_dark { IconName::Sun } else { IconName::Moon };

    html! {
        <button
            type="button"
            id="theme-toggle"
            class="theme-toggle"
            {onclick}
            aria-label={label}
            title={label}
            aria-pressed={is_dark.to_string()}
        >
            <Icon name={icon} size={20} />
        </button>
    }
}
