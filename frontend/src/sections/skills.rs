use portfolio_shared::SkillItem;
use yew::prelude::*;

use crate::i18n::current::skills as t;

/// Which of the two mutually exclusive panels the visitor selected. Stays
/// `None` until the first interaction so the stylesheet's default layout
/// holds.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Panel {
    Skills,
    Tools,
}

#[derive(Properties, PartialEq)]
pub struct SkillsProps {
    pub skills: Vec<SkillItem>,
    pub tools: Vec<SkillItem>,
}

#[function_component(SkillsSection)]
pub fn skills_section(props: &SkillsProps) -> Html {
    let selected = use_state(|| None::<Panel>);

    let select = |panel: Panel| {
        let selected = selected.clone();
        Callback::from(move |_: MouseEvent| selected.set(Some(panel)))
    };

    html! {
        <section id="skills" class="skills section">
            <h2 class="section__title">{ t::TITLE }</h2>

            <div class="skills__tabs">
                <button
                    type="button"
                    id="skills-btn"
                    class={classes!(
                        "skills__tab",
                        tab_is_active(*selected, Panel::Skills).then_some("active")
                    )}
                    onclick={select(Panel::Skills)}
                >
                    { t::TAB_SKILLS }
                </button>
                <button
                    type="button"
                    id="tools-btn"
                    class={classes!(
                        "skills__tab",
                        tab_is_active(*selected, Panel::Tools).then_some("active")
                    )}
                    onclick={select(Panel::Tools)}
                >
                    { t::TAB_TOOLS }
                </button>
            </div>

            <div
                id="skills-content-icons"
                class="skills__grid"
                style={panel_style(*selected, Panel::Skills)}
            >
                { for props.skills.iter().map(skill_card) }
            </div>
            <div
                id="tools-content"
                class="skills__grid"
                style={panel_style(*selected, Panel::Tools)}
            >
                { for props.tools.iter().map(skill_card) }
            </div>
        </section>
    }
}

fn skill_card(item: &SkillItem) -> Html {
    html! {
        <div class="skills__card">
            <i class={classes!("skills__icon", item.icon.clone())} aria-hidden="true"></i>
            <span class="skills__label">{ &item.name }</span>
        </div>
    }
}

// The skills trigger reads as active in the untouched markup default.
fn tab_is_active(selected: Option<Panel>, tab: Panel) -> bool {
    match selected {
        Some(current) => current == tab,
        None => tab == Panel::Skills,
    }
}

// No inline style until the first activation; afterwards exactly one panel
// is laid out as a grid and the other is hidden.
fn panel_style(selected: Option<Panel>, panel: Panel) -> Option<&'static str> {
    selected.map(|current| {
        if current == panel {
            "display: grid"
        } else {
            "display: none"
        }
    })
}

#[cfg(test)]
mod tests {
    use super::{panel_style, tab_is_active, Panel};

    #[test]
    fn untouched_markup_defaults_to_skills_tab() {
        assert!(tab_is_active(None, Panel::Skills));
        assert!(!tab_is_active(None, Panel::Tools));
        assert_eq!(panel_style(None, Panel::Skills), None);
        assert_eq!(panel_style(None, Panel::Tools), None);
    }

    #[test]
    fn activating_skills_shows_grid_and_hides_tools() {
        let selected = Some(Panel::Skills);
        assert!(tab_is_active(selected, Panel::Skills));
        assert!(!tab_is_active(selected, Panel::Tools));
        assert_eq!(panel_style(selected, Panel::Skills), Some("display: grid"));
        assert_eq!(panel_style(selected, Panel::Tools), Some("display: none"));
    }

    #[test]
    fn activating_tools_is_symmetric() {
        let selected = Some(Panel::Tools);
        assert!(tab_is_active(selected, Panel::Tools));
        assert!(!tab_is_active(selected, Panel::Skills));
        assert_eq!(panel_style(selected, Panel::Tools), Some("display: grid"));
        assert_eq!(panel_style(selected, Panel::Skills), Some("display: none"));
    }
}
