//! Site content, assembled in code against the shared model.

use portfolio_shared::{Profile, Project, SkillItem, SocialLink};

/// Full site content rendered by the page sections.
pub fn profile() -> Profile {
    Profile {
        name: "Dnyanesh Tupe".to_string(),
        role: "Full-Stack Web Developer".to_string(),
        tagline: "I design and build clean, responsive web experiences from idea to deployment."
            .to_string(),
        about: vec![
            "I'm a developer based in Pune who enjoys turning rough ideas into polished, \
             fast-loading websites. Most of my work lives at the intersection of thoughtful \
             UI and pragmatic engineering."
                .to_string(),
            "When I'm not shipping client work I tinker with developer tooling, contribute \
             small fixes to open source, and keep notes on everything I learn."
                .to_string(),
        ],
        location: "Pune, India".to_string(),
        email: "dnyaneshtupe@email.com".to_string(),
        socials: vec![
            SocialLink {
                label: "GitHub".to_string(),
                href: "https://github.com/dnyaneshtupe".to_string(),
                icon: "github".to_string(),
            },
            SocialLink {
                label: "LinkedIn".to_string(),
                href: "https://www.linkedin.com/in/dnyaneshtupe".to_string(),
                icon: "linkedin".to_string(),
            },
            SocialLink {
                label: "Email".to_string(),
                href: "mailto:dnyaneshtupe@email.com".to_string(),
                icon: "mail".to_string(),
            },
        ],
        skills: vec![
            skill("HTML5", "fab fa-html5"),
            skill("CSS3", "fab fa-css3-alt"),
            skill("JavaScript", "fab fa-js"),
            skill("TypeScript", "fas fa-code"),
            skill("React", "fab fa-react"),
            skill("Node.js", "fab fa-node-js"),
            skill("Python", "fab fa-python"),
            skill("SQL", "fas fa-database"),
        ],
        tools: vec![
            skill("Git", "fab fa-git-alt"),
            skill("GitHub", "fab fa-github"),
            skill("VS Code", "fas fa-code"),
            skill("Figma", "fab fa-figma"),
            skill("Postman", "fas fa-paper-plane"),
            skill("Docker", "fab fa-docker"),
        ],
        projects: vec![
            Project {
                title: "Trailhead".to_string(),
                description: "Trip-planning app that assembles day-by-day hiking itineraries \
                              from public trail data, with offline map export."
                    .to_string(),
                tech: vec!["React".to_string(), "Node.js".to_string(), "PostgreSQL".to_string()],
                repo_url: Some("https://github.com/dnyaneshtupe/trailhead".to_string()),
                demo_url: Some("https://trailhead-demo.netlify.app".to_string()),
            },
            Project {
                title: "Ledgerline".to_string(),
                description: "Lightweight expense tracker for freelancers: invoices, \
                              recurring clients, and a monthly cash-flow view."
                    .to_string(),
                tech: vec!["TypeScript".to_string(), "Express".to_string(), "SQLite".to_string()],
                repo_url: Some("https://github.com/dnyaneshtupe/ledgerline".to_string()),
                demo_url: None,
            },
            Project {
                title: "Shelfnotes".to_string(),
                description: "Minimal reading log with shareable shelves and per-book notes, \
                              rendered as a static site."
                    .to_string(),
                tech: vec!["JavaScript".to_string(), "Eleventy".to_string(), "CSS".to_string()],
                repo_url: Some("https://github.com/dnyaneshtupe/shelfnotes".to_string()),
                demo_url: Some("https://shelfnotes.netlify.app".to_string()),
            },
        ],
    }
}

fn skill(name: &str, icon: &str) -> SkillItem {
    SkillItem {
        name: name.to_string(),
        icon: icon.to_string(),
    }
}
