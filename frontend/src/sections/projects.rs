use portfolio_shared::Project;
use yew::prelude::*;

use crate::{
    components::icons::{Icon, IconName},
    i18n::current::projects as t,
};

#[derive(Properties, PartialEq)]
pub struct ProjectsProps {
    pub projects: Vec<Project>,
}

#[function_component(ProjectsSection)]
pub fn projects_section(props: &ProjectsProps) -> Html {
    html! {
        <section id="projects" class="projects section">
            <h2 class="section__title">{ t::TITLE }</h2>
            <div class="projects__grid">
                { for props.projects.iter().map(project_card) }
            </div>
        </section>
    }
}

fn project_card(project: &Project) -> Html {
    html! {
        <article class="projects__card">
            <h3 class="projects__title">{ &project.title }</h3>
            <p class="projects__description">{ &project.description }</p>

            <ul class="projects__tech">
                { for project.tech.iter().map(|tech| html! { <li>{ tech }</li> }) }
            </ul>

            <div class="projects__links">
                { for project.repo_url.iter().map(|href| {
                    html! {
                        <a
                            class="projects__link"
                            href={href.clone()}
                            target="_blank"
                            rel="noreferrer"
                            aria-label={t::SOURCE_ARIA}
                            title={t::SOURCE_ARIA}
                        >
                            <Icon name={IconName::Github} size={20} />
                        </a>
                    }
                }) }
                { for project.demo_url.iter().map(|href| {
                    html! {
                        <a
                            class="projects__link"
                            href={href.clone()}
                            target="_blank"
                            rel="noreferrer"
                            aria-label={t::DEMO_ARIA}
                            title={t::DEMO_ARIA}
                        >
                            <Icon name={IconName::ExternalLink} size={20} />
                        </a>
                    }
                }) }
            </div>
        </article>
    }
}
