#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Icon {
    Flower,
    Sparkles,
    Baby,
    Heart,
    Cake,
    Gem,
    Briefcase,
    Lightbulb,
    Crown,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Flower => "🌸",
            Icon::Sparkles => "✨",
            Icon::Baby => "👶",
            Icon::Heart => "💗",
            Icon::Cake => "🎂",
            Icon::Gem => "💎",
            Icon::Briefcase => "💼",
            Icon::Lightbulb => "💡",
            Icon::Crown => "👑",
        }
    }
}

/// Card styling. `Highlight` marks the signature prop services.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Variant {
    Floral,
    Birthday,
    Highlight,
}

impl Variant {
    pub fn class(self) -> &'static str {
        match self {
            Variant::Floral => "service-card floral",
            Variant::Birthday => "service-card birthday",
            Variant::Highlight => "service-card highlight",
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub variant: Variant,
    pub image: &'static str,
    /// Portfolio category shown when the card is clicked.
    pub portfolio: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "Weddings",
        description: "Heavenly blue mandaps, floating florals, and royal aisle artistry inspired by Mysuru palaces.",
        icon: Icon::Flower,
        variant: Variant::Floral,
        image: "/assets/wedding/WhatsApp Image 2025-11-18 at 4.19.26 PM (1).jpeg",
        portfolio: "Weddings",
    },
    Service {
        title: "Engagement",
        description: "Celeste-toned floral tunnels, proposal pedestals, and cinematic light projections for modern rituals.",
        icon: Icon::Sparkles,
        variant: Variant::Floral,
        image: "/assets/engagement/WhatsApp Image 2025-11-18 at 4.27.26 PM (1).jpeg",
        portfolio: "Engagement",
    },
    Service {
        title: "Baby Shower",
        description: "Soft pastel blooms with kinetic petals, cradle installations, and keepsake corners.",
        icon: Icon::Baby,
        variant: Variant::Floral,
        image: "/assets/baby shower/WhatsApp Image 2025-11-18 at 4.34.51 PM.jpeg",
        portfolio: "Baby Shower",
    },
    Service {
        title: "Naming Ceremony",
        description: "Custom name monograms blooming out of sky-blue clouds with fragrant jasmine curtains.",
        icon: Icon::Heart,
        variant: Variant::Floral,
        image: "/assets/naming ceremony/WhatsApp Image 2025-11-18 at 4.41.07 PM (1).jpeg",
        portfolio: "Naming Ceremony",
    },
    Service {
        title: "Birthday Parties",
        description: "Immersive 3D stage sets, holographic confetti, and animated floral fountains for every milestone.",
        icon: Icon::Cake,
        variant: Variant::Birthday,
        image: "/assets/birthday parties/WhatsApp Image 2025-11-18 at 4.43.36 PM.jpeg",
        portfolio: "Birthday Parties",
    },
    Service {
        title: "Half Saree Ceremony",
        description: "Royal fusion of temple motifs and contemporary floral chandeliers celebrating coming-of-age grace.",
        icon: Icon::Gem,
        variant: Variant::Floral,
        image: "/assets/Half saree ceremony/WhatsApp Image 2025-11-25 at 2.27.27 PM.jpeg",
        portfolio: "Half Saree Ceremony",
    },
    Service {
        title: "Bachelorette & Bridal Shower",
        description: "Experiential lounges with hanging gardens, mist tunnels, and handcrafted prop styling.",
        icon: Icon::Briefcase,
        variant: Variant::Floral,
        image: "/assets/bridal shower and parties/WhatsApp Image 2025-11-25 at 2.37.24 PM.jpeg",
        portfolio: "Bridal Shower & Parties",
    },
    Service {
        title: "House Warming",
        description: "Celestial rangoli projections, suspended planters, and scent-programmed welcome pathways.",
        icon: Icon::Lightbulb,
        variant: Variant::Floral,
        image: "/assets/house warming/WhatsApp Image 2025-11-25 at 2.39.18 PM.jpeg",
        portfolio: "House Warming",
    },
    Service {
        title: "German Service Props & Antique Props",
        description: "Exclusive European-grade props, kinetic arches, and illuminated floral structures. Our signature spotlight.",
        icon: Icon::Crown,
        variant: Variant::Highlight,
        image: "/assets/wedding/WhatsApp Image 2025-11-18 at 4.23.15 PM (1).jpeg",
        portfolio: "Weddings",
    },
    Service {
        title: "Wedding Props",
        description: "Premium wedding props, elegant arches, and traditional decorative elements for royal celebrations.",
        icon: Icon::Crown,
        variant: Variant::Highlight,
        image: "/assets/wedding/WhatsApp Image 2025-11-18 at 4.24.27 PM (1).jpeg",
        portfolio: "Weddings",
    },
    Service {
        title: "Mehendi & Sangeet",
        description: "Vibrant floral backdrops, henna-inspired installations, and musical stage designs for pre-wedding celebrations.",
        icon: Icon::Flower,
        variant: Variant::Floral,
        image: "/assets/engagement/WhatsApp Image 2025-11-18 at 4.31.20 PM (1).jpeg",
        portfolio: "Engagement",
    },
    Service {
        title: "Haldi",
        description: "Golden floral arrangements, turmeric-themed decor, and traditional haldi ceremony setups with modern touches.",
        icon: Icon::Sparkles,
        variant: Variant::Floral,
        image: "/assets/haldi/WhatsApp Image 2025-11-18 at 4.56.03 PM.jpeg",
        portfolio: "Haldi",
    },
    Service {
        title: "Garlands",
        description: "Handcrafted floral garlands, traditional jasmine strings, and custom garland arrangements for all ceremonies.",
        icon: Icon::Flower,
        variant: Variant::Floral,
        image: "/assets/garlands/WhatsApp Image 2025-11-25 at 2.43.16 PM.jpeg",
        portfolio: "Garlands",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::gallery;

    fn portfolio_for(title: &str) -> Option<&'static str> {
        SERVICES.iter().find(|s| s.title == title).map(|s| s.portfolio)
    }

    #[test]
    fn every_service_points_at_a_real_category() {
        for service in SERVICES {
            assert!(
                !gallery::images_for(service.portfolio).is_empty(),
                "{} maps to missing category {}",
                service.title,
                service.portfolio
            );
        }
    }

    #[test]
    fn picked_category_is_a_selectable_filter() {
        for service in SERVICES {
            assert!(
                gallery::filters().any(|f| f == service.portfolio),
                "{} has no filter button",
                service.title
            );
        }
    }

    #[test]
    fn renamed_and_shared_categories() {
        assert_eq!(portfolio_for("Bachelorette & Bridal Shower"), Some("Bridal Shower & Parties"));
        assert_eq!(portfolio_for("Mehendi & Sangeet"), Some("Engagement"));
        assert_eq!(portfolio_for("Wedding Props"), Some(gallery::DEFAULT_FILTER));
        assert_eq!(portfolio_for("Not a service"), None);
    }
}
