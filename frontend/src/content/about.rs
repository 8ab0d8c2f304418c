//! Founders, legacy figures and the story copy.

#[derive(Clone, PartialEq, Debug)]
pub struct Founder {
    pub name: &'static str,
    pub role: &'static str,
    pub phone: &'static str,
    pub note: &'static str,
    pub image: &'static str,
    pub badge: &'static str,
    pub quote: &'static str,
    pub stat: &'static str,
}

impl Founder {
    /// First letter of the first name, shown when no portrait loads.
    pub fn initial(&self) -> String {
        self.name
            .split_whitespace()
            .next()
            .and_then(|first| first.chars().next())
            .map(|c| c.to_string())
            .unwrap_or_default()
    }
}

pub const FOUNDERS: &[Founder] = &[
    Founder {
        name: "Chandrashekar P",
        role: "Founder & Creative Legend",
        phone: "+91 93414 79989",
        note: "The visionary who began the Nandini floral story in 1993.",
        image: "/assets/Chandrashekar P.jpeg",
        badge: "Heritage Visionary",
        quote: "“I script every mandap with Mysuru’s royal poetry.”",
        stat: "30+ yrs of bespoke floral architecture",
    },
    Founder {
        name: "Chandan C",
        role: "Managing Director",
        phone: "+91 84532 28622",
        note: "Design-led MD ensuring every event feels futuristic yet rooted.",
        image: "/assets/chandan.jpeg",
        badge: "Design Futurist",
        quote: "“Technology + tradition is the new luxury love story.”",
        stat: "7000+ immersive celebrations curated",
    },
];

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const LEGACY_STATS: &[Stat] = &[
    Stat { value: "Since 1993", label: "Generations of royal celebrations" },
    Stat { value: "7000+", label: "Luxury events curated with love" },
    Stat { value: "Mysuru", label: "Floral artistry inspired by heritage" },
];

pub struct Highlight {
    pub title: &'static str,
    pub detail: &'static str,
}

pub const BUSINESS_HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        title: "Floral Motion Lab",
        detail: "Heavenly blue palettes layered with kinetic petals, mist, and projection art.",
    },
    Highlight {
        title: "Legacy Craftsmanship",
        detail: "Hand-built mandaps, arches, and props perfected over 3 decades of celebrations.",
    },
    Highlight {
        title: "German Prop Authority",
        detail: "Exclusive props, precision-engineered arches, and premium textures for royal stages.",
    },
];

pub const STORY: &[&str] = &[
    "At Nandini Decoration, every celebration blooms in shades of sky blue and celeste. Since 1993, our family-led studio has curated floral architecture, immersive lighting, and animated storytelling for Karnataka's most cherished milestones.",
    "From heritage weddings to futuristic showers, we custom-build petals, props, and projections that feel dreamy yet disciplined, always honoring your story and the Mysuru legacy we're proud of.",
];

pub struct Offer {
    pub title: &'static str,
    pub detail: &'static str,
    pub thought: &'static str,
    pub birth_date: &'static str,
    pub image: &'static str,
}

pub const TRIBUTE_OFFER: Offer = Offer {
    title: "Power Star Tribute Offer",
    detail: "On Puneeth Rajkumar Sir’s birthday, enjoy a 50% celebration upgrade on every event you book with us.",
    thought: "“Let gratitude bloom wider than the sky. Celebrate by touching hearts.”",
    birth_date: "Born 17 March 1975",
    image: "/assets/PRK photo.webp",
};

/// Next source to try after `src` failed to load. The chain is
/// `.jpg -> .jpeg -> .png -> .webp`; `None` means give up and show the initial.
pub fn fallback_src(src: &str) -> Option<String> {
    let dot = src.rfind('.')?;
    let (base, ext) = src.split_at(dot);
    let next = match ext {
        ".jpg" => ".jpeg",
        ".jpeg" => ".png",
        ".png" => ".webp",
        _ => return None,
    };
    Some(format!("{}{}", base, next))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_walks_the_extension_chain() {
        let mut src = "/assets/chandan.jpg".to_string();
        let mut seen = vec![src.clone()];
        while let Some(next) = fallback_src(&src) {
            seen.push(next.clone());
            src = next;
        }
        assert_eq!(
            seen,
            vec![
                "/assets/chandan.jpg",
                "/assets/chandan.jpeg",
                "/assets/chandan.png",
                "/assets/chandan.webp",
            ]
        );
    }

    #[test]
    fn fallback_gives_up_on_unknown_or_missing_extension() {
        assert_eq!(fallback_src("/assets/chandan.gif"), None);
        assert_eq!(fallback_src("noextension"), None);
    }

    #[test]
    fn initials() {
        assert_eq!(FOUNDERS[0].initial(), "C");
        let anon = Founder { name: "", ..FOUNDERS[1].clone() };
        assert_eq!(anon.initial(), "");
    }
}
