//! Shared data model and pure site logic for the portfolio frontend.
//!
//! Everything here is browser-free and natively testable: the content model
//! the sections render, the persisted theme preference, and the contact-form
//! validation plus `mailto:` construction.

pub mod contact;
pub mod theme;

use serde::{Deserialize, Serialize};

/// Site owner profile rendered across the hero, about, contact, and footer
/// sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Display name.
    pub name: String,
    /// Headline role shown under the name.
    pub role: String,
    /// One-line pitch under the hero heading.
    pub tagline: String,
    /// About-section paragraphs, in order.
    pub about: Vec<String>,
    /// City/country line for the contact section.
    pub location: String,
    /// Public contact address; also the mailto destination.
    pub email: String,
    /// External profiles linked from the hero and footer.
    pub socials: Vec<SocialLink>,
    /// Entries for the skills panel.
    pub skills: Vec<SkillItem>,
    /// Entries for the tools panel.
    pub tools: Vec<SkillItem>,
    /// Featured work, in display order.
    pub projects: Vec<Project>,
}

/// A link to an external profile (GitHub, LinkedIn, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Human-readable label, also used for aria labels.
    pub label: String,
    /// Absolute URL of the profile.
    pub href: String,
    /// Icon slug resolved by the frontend icon set.
    pub icon: String,
}

/// One tile in the skills or tools grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillItem {
    /// Name shown under the icon.
    pub name: String,
    /// CSS icon classes (Font Awesome style), applied verbatim.
    pub icon: String,
}

/// A portfolio project card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Project title.
    pub title: String,
    /// Short description, one or two sentences.
    pub description: String,
    /// Technologies shown as chips on the card.
    pub tech: Vec<String>,
    /// Source repository URL, if public.
    pub repo_url: Option<String>,
    /// Live demo URL, if deployed.
    pub demo_url: Option<String>,
}
