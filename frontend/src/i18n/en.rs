pub mod header {
    pub const BRAND_NAME: &str = "Dnyanesh.";
    pub const NAV_HOME: &str = "Home";
    pub const NAV_ABOUT: &str = "About";
    pub const NAV_SKILLS: &str = "Skills";
    pub const NAV_PROJECTS: &str = "Projects";
    pub const NAV_CONTACT: &str = "Contact";
    pub const NAV_MAIN_ARIA: &str = "Main navigation";
}

pub mod theme_toggle {
    pub const SWITCH_TO_LIGHT: &str = "Switch to light mode";
    pub const SWITCH_TO_DARK: &str = "Switch to dark mode";
}

pub mod hero {
    pub const GREETING: &str = "Hi, my name is";
    pub const CTA_CONTACT: &str = "Get in touch";
    pub const CTA_PROJECTS: &str = "See my work";
}

pub mod about {
    pub const TITLE: &str = "About Me";
}

pub mod skills {
    pub const TITLE: &str = "Skills & Tools";
    pub const TAB_SKILLS: &str = "Skills";
    pub const TAB_TOOLS: &str = "Tools";
}

pub mod projects {
    pub const TITLE: &str = "Projects";
    pub const SOURCE_ARIA: &str = "View source";
    pub const DEMO_ARIA: &str = "Open live demo";
}

pub mod contact {
    pub const TITLE: &str = "Get In Touch";
    pub const INTRO: &str =
        "Have a project in mind or just want to say hello? My inbox is always open.";
    pub const PLACEHOLDER_NAME: &str = "Your Name";
    pub const PLACEHOLDER_EMAIL: &str = "Your Email";
    pub const PLACEHOLDER_PHONE: &str = "Phone (optional)";
    pub const PLACEHOLDER_MESSAGE: &str = "Your Message";
    pub const SUBMIT: &str = "Send Message";
    pub const VALIDATION_ALERT: &str = "Please fill out Name, Email, and Message fields.";
}

pub mod scroll_to_top {
    pub const TOOLTIP: &str = "Back to top";
}

pub mod footer {
    pub const COPYRIGHT: &str = "© 2025 Dnyanesh Tupe. All rights reserved.";
    pub const SOCIAL_ARIA: &str = "Social profiles";
}
