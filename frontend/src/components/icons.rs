use yew::prelude::*;

/// Lucide-style line icons, inlined as SVG path data.
/// Paths from <https://lucide.dev>.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IconName {
    Sun,
    Moon,
    ArrowUp,
    Mail,
    Phone,
    MapPin,
    Github,
    Linkedin,
    ExternalLink,
}

impl IconName {
    /// SVG path data for the icon.
    pub fn path(&self) -> &'static str {
        match self {
            IconName::Sun => {
                "M12 2v2M12 20v2M4.93 4.93l1.41 1.41M17.66 17.66l1.41 1.41M2 12h2M20 12h2M6.34 \
                 17.66l-1.41 1.41M19.07 4.93l-1.41 1.41M16 12a4 4 0 1 1-8 0 4 4 0 0 1 8 0z"
            },
            IconName::Moon => "M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9z",
            IconName::ArrowUp => "m18 15-6-6-6 6",
            IconName::Mail => {
                "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2zM22 \
                 6l-10 7L2 6"
            },
            IconName::Phone => {
                "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 \
                 1-6-6A19.79 19.79 0 0 1 2.12 4.18 2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 \
                 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 \
                 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z"
            },
            IconName::MapPin => {
                "M21 10c0 7-9 13-9 13s-9-6-9-13a9 9 0 0 1 18 0zM15 10a3 3 0 1 1-6 0 3 3 0 0 1 6 \
                 0z"
            },
            IconName::Github => {
                "M9 19c-5 1.5-5-2.5-7-3m14 6v-3.87a3.37 3.37 0 0 0-.94-2.61c3.14-.35 6.44-1.54 \
                 6.44-7A5.44 5.44 0 0 0 20 4.77 5.07 5.07 0 0 0 19.91 1S18.73.65 16 2.48a13.38 \
                 13.38 0 0 0-7 0C6.27.65 5.09 1 5.09 1A5.07 5.07 0 0 0 5 4.77a5.44 5.44 0 0 \
                 0-1.5 3.78c0 5.42 3.3 6.61 6.44 7A3.37 3.37 0 0 0 9 18.13V22"
            },
            IconName::Linkedin => {
                "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4V8h4v2.5A6 6 0 0 1 16 8zM6 9H2v12h4zM4 \
                 6a2 2 0 1 0 0-4 2 2 0 0 0 0 4z"
            },
            IconName::ExternalLink => {
                "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6M15 3h6v6M10 14 21 3"
            },
        }
    }

    /// Resolve a content-model icon slug to an icon, if known.
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "github" => Some(IconName::Github),
            "linkedin" => Some(IconName::Linkedin),
            "mail" => Some(IconName::Mail),
            "phone" => Some(IconName::Phone),
            "map-pin" => Some(IconName::MapPin),
            "external-link" => Some(IconName::ExternalLink),
            _ => None,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub name: IconName,

    #[prop_or(24)]
    pub size: u32,

    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    let IconProps {
        name,
        size,
        class,
    } = props;

    let stroke_width = if *size <= 16 { 2.5 } else { 2.0 };

    html! {
        <svg
            class={class.clone()}
            width={size.to_string()}
            height={size.to_string()}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width={stroke_width.to_string()}
            stroke-linecap="round"
            stroke-linejoin="round"
            xmlns="http://www.w3.org/2000/svg"
            aria-hidden="true"
        >
            <path d={name.path()} />
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::IconName;

    #[test]
    fn social_slugs_resolve() {
        assert_eq!(IconName::from_slug("github"), Some(IconName::Github));
        assert_eq!(IconName::from_slug("linkedin"), Some(IconName::Linkedin));
        assert_eq!(IconName::from_slug("myspace"), None);
    }
}
