//! Copy and media shown on the site.

pub const BRAND: &str = "Brightline";

pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
}

/// Order matters: scroll-spy walks these top to bottom.
pub const SECTIONS: &[Section] = &[
    Section { id: "home", label: "Home" },
    Section { id: "about", label: "About" },
    Section { id: "services", label: "Services" },
    Section { id: "stats", label: "Results" },
    Section { id: "gallery", label: "Work" },
    Section { id: "testimonials", label: "Clients" },
    Section { id: "contact", label: "Contact" },
];

pub fn section_ids() -> Vec<&'static str> {
    SECTIONS.iter().map(|s| s.id).collect()
}

pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        icon: "🧭",
        title: "Brand Strategy",
        blurb: "Positioning, naming and messaging that make the first sentence about you count.",
    },
    Service {
        icon: "🖥️",
        title: "Web Design",
        blurb: "Fast, accessible marketing sites built to turn visits into conversations.",
    },
    Service {
        icon: "📈",
        title: "Growth Campaigns",
        blurb: "Paid and organic campaigns measured against the numbers you actually care about.",
    },
    Service {
        icon: "📸",
        title: "Content Studio",
        blurb: "Photography, video and copy produced in-house, on brand and on schedule.",
    },
];

pub struct Stat {
    pub target: u64,
    pub suffix: &'static str,
    pub label: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { target: 240, suffix: "+", label: "Projects shipped" },
    Stat { target: 98, suffix: "%", label: "Client retention" },
    Stat { target: 12, suffix: "", label: "Industry awards" },
    Stat { target: 1500, suffix: "+", label: "Cups of coffee" },
];

#[derive(Clone, Debug, PartialEq)]
pub struct GalleryImage {
    pub src: &'static str,
    pub thumb: &'static str,
    pub caption: &'static str,
}

pub const GALLERY: &[GalleryImage] = &[
    GalleryImage {
        src: "/assets/work/harbor-coffee.svg",
        thumb: "/assets/work/harbor-coffee.svg",
        caption: "Harbor Coffee · packaging refresh",
    },
    GalleryImage {
        src: "/assets/work/atlas-bikes.svg",
        thumb: "/assets/work/atlas-bikes.svg",
        caption: "Atlas Bikes · e-commerce redesign",
    },
    GalleryImage {
        src: "/assets/work/fernwood-clinic.svg",
        thumb: "/assets/work/fernwood-clinic.svg",
        caption: "Fernwood Clinic · patient portal launch",
    },
    GalleryImage {
        src: "/assets/work/northstar-tea.svg",
        thumb: "/assets/work/northstar-tea.svg",
        caption: "Northstar Tea · seasonal campaign",
    },
    GalleryImage {
        src: "/assets/work/lumen-labs.svg",
        thumb: "/assets/work/lumen-labs.svg",
        caption: "Lumen Labs · product launch site",
    },
    GalleryImage {
        src: "/assets/work/oak-and-ivy.svg",
        thumb: "/assets/work/oak-and-ivy.svg",
        caption: "Oak & Ivy · brand identity",
    },
];

#[derive(Clone, Debug, PartialEq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "They rebuilt our site in six weeks and enquiries doubled the month after launch.",
        author: "Maria Chen",
        role: "Founder, Harbor Coffee",
    },
    Testimonial {
        quote: "The only agency we've worked with that reports on revenue instead of impressions.",
        author: "Daniel Okafor",
        role: "Head of Marketing, Atlas Bikes",
    },
    Testimonial {
        quote: "Clear process, honest timelines and a brand our staff are genuinely proud of.",
        author: "Priya Raman",
        role: "Director, Fernwood Clinic",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn gallery_images_ship_with_the_site() {
        let root = Path::new(env!("CARGO_MANIFEST_DIR"));
        for image in GALLERY {
            for path in [image.src, image.thumb] {
                let file = root.join(path.trim_start_matches('/'));
                assert!(file.is_file(), "missing gallery asset {}", path);
            }
        }
    }
}
