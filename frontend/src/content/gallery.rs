//! Image collections: the hero slideshow and the portfolio, grouped by event type.

pub const DEFAULT_FILTER: &str = "Weddings";

pub const HERO_IMAGES: &[&str] = &[
    "/assets/slideshow/1397a1da1a651f744843f6f2723ce1be.jpg",
    "/assets/slideshow/6d75fb4daed10738a13cb58e866173e3.jpg",
    "/assets/slideshow/81784fe61a55530952362176f387b489.jpg",
    "/assets/slideshow/ee442c0b634b9cf37215763290f3a399.jpg",
    "/assets/slideshow/fe94c28172b22139550b974f1f0c4b1e.jpg",
    "/assets/slideshow/WhatsApp Image 2025-11-27 at 5.29.00 PM.jpeg",
    "/assets/slideshow/WhatsApp Image 2025-11-27 at 5.29.01 PM (1).jpeg",
    "/assets/slideshow/WhatsApp Image 2025-11-27 at 5.29.01 PM.jpeg",
];

const WEDDINGS: &[&str] = &[
    "/assets/wedding/WhatsApp Image 2025-11-18 at 4.19.26 PM (1).jpeg",
    "/assets/wedding/WhatsApp Image 2025-11-18 at 4.19.26 PM.jpeg",
    "/assets/wedding/WhatsApp Image 2025-11-18 at 4.19.27 PM (1).jpeg",
    "/assets/wedding/WhatsApp Image 2025-11-18 at 4.19.27 PM (2).jpeg",
    "/assets/wedding/WhatsApp Image 2025-11-18 at 4.19.27 PM.jpeg",
    "/assets/wedding/WhatsApp Image 2025-11-18 at 4.20.16 PM (1).jpeg",
    "/assets/wedding/WhatsApp Image 2025-11-18 at 4.20.16 PM.jpeg",
    "/assets/wedding/WhatsApp Image 2025-11-18 at 4.20.17 PM (1).jpeg",
    "/assets/wedding/WhatsApp Image 2025-11-18 at 4.20.17 PM (2).jpeg",
    "/assets/wedding/WhatsApp Image 2025-11-18 at 4.20.17 PM.jpeg",
    "/assets/wedding/WhatsApp Image 2025-11-18 at 4.20.18 PM.jpeg",
    "/assets/wedding/WhatsApp Image 2025-11-18 at 4.23.15 PM (1).jpeg",
    "/assets/wedding/WhatsApp Image 2025-11-18 at 4.23.15 PM (2).jpeg",
    "/assets/wedding/WhatsApp Image 2025-11-18 at 4.23.15 PM.jpeg",
    "/assets/wedding/WhatsApp Image 2025-11-18 at 4.23.16 PM.jpeg",
    "/assets/wedding/WhatsApp Image 2025-11-18 at 4.24.27 PM (1).jpeg",
    "/assets/wedding/WhatsApp Image 2025-11-18 at 4.24.27 PM.jpeg",
    "/assets/wedding/WhatsApp Image 2025-11-18 at 4.24.28 PM.jpeg",
];

const ENGAGEMENT: &[&str] = &[
    "/assets/engagement/WhatsApp Image 2025-11-18 at 4.27.26 PM (1).jpeg",
    "/assets/engagement/WhatsApp Image 2025-11-18 at 4.27.26 PM (2).jpeg",
    "/assets/engagement/WhatsApp Image 2025-11-18 at 4.27.26 PM.jpeg",
    "/assets/engagement/WhatsApp Image 2025-11-18 at 4.27.27 PM (1).jpeg",
    "/assets/engagement/WhatsApp Image 2025-11-18 at 4.27.27 PM.jpeg",
    "/assets/engagement/WhatsApp Image 2025-11-18 at 4.27.28 PM (1).jpeg",
    "/assets/engagement/WhatsApp Image 2025-11-18 at 4.27.28 PM.jpeg",
    "/assets/engagement/WhatsApp Image 2025-11-18 at 4.31.20 PM (1).jpeg",
    "/assets/engagement/WhatsApp Image 2025-11-18 at 4.31.20 PM (2).jpeg",
    "/assets/engagement/WhatsApp Image 2025-11-18 at 4.31.20 PM (3).jpeg",
    "/assets/engagement/WhatsApp Image 2025-11-18 at 4.31.20 PM.jpeg",
    "/assets/engagement/WhatsApp Image 2025-11-18 at 4.31.21 PM (1).jpeg",
    "/assets/engagement/WhatsApp Image 2025-11-18 at 4.31.21 PM (2).jpeg",
    "/assets/engagement/WhatsApp Image 2025-11-18 at 4.31.21 PM (3).jpeg",
    "/assets/engagement/WhatsApp Image 2025-11-18 at 4.31.21 PM.jpeg",
    "/assets/engagement/WhatsApp Image 2025-11-18 at 4.31.22 PM (1).jpeg",
    "/assets/engagement/WhatsApp Image 2025-11-18 at 4.31.22 PM (2).jpeg",
    "/assets/engagement/WhatsApp Image 2025-11-18 at 4.31.22 PM.jpeg",
    "/assets/engagement/WhatsApp Image 2025-11-18 at 4.31.23 PM (1).jpeg",
    "/assets/engagement/WhatsApp Image 2025-11-18 at 4.31.23 PM (2).jpeg",
    "/assets/engagement/WhatsApp Image 2025-11-18 at 4.31.23 PM.jpeg",
];

const BABY_SHOWER: &[&str] = &[
    "/assets/baby shower/WhatsApp Image 2025-11-18 at 4.34.51 PM.jpeg",
    "/assets/baby shower/WhatsApp Image 2025-11-18 at 4.34.52 PM (1).jpeg",
    "/assets/baby shower/WhatsApp Image 2025-11-18 at 4.34.52 PM (2).jpeg",
    "/assets/baby shower/WhatsApp Image 2025-11-18 at 4.34.52 PM.jpeg",
    "/assets/baby shower/WhatsApp Image 2025-11-18 at 4.34.53 PM (1).jpeg",
    "/assets/baby shower/WhatsApp Image 2025-11-18 at 4.34.53 PM (2).jpeg",
    "/assets/baby shower/WhatsApp Image 2025-11-18 at 4.34.53 PM.jpeg",
    "/assets/baby shower/WhatsApp Image 2025-11-18 at 4.34.54 PM (1).jpeg",
    "/assets/baby shower/WhatsApp Image 2025-11-18 at 4.34.54 PM (2).jpeg",
    "/assets/baby shower/WhatsApp Image 2025-11-18 at 4.34.54 PM (3).jpeg",
    "/assets/baby shower/WhatsApp Image 2025-11-18 at 4.34.54 PM.jpeg",
    "/assets/baby shower/WhatsApp Image 2025-11-18 at 4.37.28 PM (1).jpeg",
    "/assets/baby shower/WhatsApp Image 2025-11-18 at 4.37.28 PM (2).jpeg",
    "/assets/baby shower/WhatsApp Image 2025-11-18 at 4.37.28 PM.jpeg",
    "/assets/baby shower/WhatsApp Image 2025-11-18 at 4.37.29 PM (1).jpeg",
    "/assets/baby shower/WhatsApp Image 2025-11-18 at 4.37.29 PM (2).jpeg",
    "/assets/baby shower/WhatsApp Image 2025-11-18 at 4.37.29 PM.jpeg",
    "/assets/baby shower/WhatsApp Image 2025-11-18 at 4.37.30 PM (1).jpeg",
    "/assets/baby shower/WhatsApp Image 2025-11-18 at 4.37.30 PM (2).jpeg",
    "/assets/baby shower/WhatsApp Image 2025-11-18 at 4.37.30 PM.jpeg",
    "/assets/baby shower/WhatsApp Image 2025-11-18 at 4.37.31 PM (1).jpeg",
    "/assets/baby shower/WhatsApp Image 2025-11-18 at 4.37.31 PM.jpeg",
    "/assets/baby shower/WhatsApp Image 2025-11-18 at 5.01.29 PM (1).jpeg",
    "/assets/baby shower/WhatsApp Image 2025-11-18 at 5.01.29 PM.jpeg",
    "/assets/baby shower/WhatsApp Image 2025-11-18 at 5.02.38 PM (1).jpeg",
    "/assets/baby shower/WhatsApp Image 2025-11-18 at 5.02.38 PM.jpeg",
];

const NAMING_CEREMONY: &[&str] = &[
    "/assets/naming ceremony/WhatsApp Image 2025-11-18 at 4.41.07 PM (1).jpeg",
    "/assets/naming ceremony/WhatsApp Image 2025-11-18 at 4.41.07 PM.jpeg",
    "/assets/naming ceremony/WhatsApp Image 2025-11-18 at 4.41.08 PM (1).jpeg",
    "/assets/naming ceremony/WhatsApp Image 2025-11-18 at 4.41.08 PM (2).jpeg",
    "/assets/naming ceremony/WhatsApp Image 2025-11-18 at 4.41.08 PM.jpeg",
    "/assets/naming ceremony/WhatsApp Image 2025-11-18 at 4.41.09 PM (1).jpeg",
    "/assets/naming ceremony/WhatsApp Image 2025-11-18 at 4.41.09 PM (2).jpeg",
    "/assets/naming ceremony/WhatsApp Image 2025-11-18 at 4.41.09 PM.jpeg",
    "/assets/naming ceremony/WhatsApp Image 2025-11-18 at 4.41.10 PM (1).jpeg",
    "/assets/naming ceremony/WhatsApp Image 2025-11-18 at 4.41.10 PM (2).jpeg",
    "/assets/naming ceremony/WhatsApp Image 2025-11-18 at 4.41.10 PM (3).jpeg",
    "/assets/naming ceremony/WhatsApp Image 2025-11-18 at 4.41.10 PM.jpeg",
    "/assets/naming ceremony/WhatsApp Image 2025-11-18 at 4.41.11 PM (1).jpeg",
    "/assets/naming ceremony/WhatsApp Image 2025-11-18 at 4.41.11 PM (2).jpeg",
    "/assets/naming ceremony/WhatsApp Image 2025-11-18 at 4.41.11 PM.jpeg",
    "/assets/naming ceremony/WhatsApp Image 2025-11-18 at 4.41.12 PM (1).jpeg",
    "/assets/naming ceremony/WhatsApp Image 2025-11-18 at 4.41.12 PM (2).jpeg",
    "/assets/naming ceremony/WhatsApp Image 2025-11-18 at 4.41.12 PM.jpeg",
    "/assets/naming ceremony/WhatsApp Image 2025-11-18 at 4.41.13 PM (1).jpeg",
    "/assets/naming ceremony/WhatsApp Image 2025-11-18 at 4.41.13 PM (2).jpeg",
    "/assets/naming ceremony/WhatsApp Image 2025-11-18 at 4.41.13 PM.jpeg",
];

const BIRTHDAY_PARTIES: &[&str] = &[
    "/assets/birthday parties/WhatsApp Image 2025-11-18 at 4.43.36 PM.jpeg",
    "/assets/birthday parties/WhatsApp Image 2025-11-18 at 4.43.37 PM (1).jpeg",
    "/assets/birthday parties/WhatsApp Image 2025-11-18 at 4.43.37 PM.jpeg",
    "/assets/birthday parties/WhatsApp Image 2025-11-18 at 4.43.38 PM (1).jpeg",
    "/assets/birthday parties/WhatsApp Image 2025-11-18 at 4.43.38 PM (2).jpeg",
    "/assets/birthday parties/WhatsApp Image 2025-11-18 at 4.43.38 PM (3).jpeg",
    "/assets/birthday parties/WhatsApp Image 2025-11-18 at 4.43.38 PM.jpeg",
    "/assets/birthday parties/WhatsApp Image 2025-11-18 at 4.43.39 PM (1).jpeg",
    "/assets/birthday parties/WhatsApp Image 2025-11-18 at 4.43.39 PM (2).jpeg",
    "/assets/birthday parties/WhatsApp Image 2025-11-18 at 4.43.39 PM.jpeg",
    "/assets/birthday parties/WhatsApp Image 2025-11-18 at 4.43.40 PM (1).jpeg",
    "/assets/birthday parties/WhatsApp Image 2025-11-18 at 4.43.40 PM (2).jpeg",
    "/assets/birthday parties/WhatsApp Image 2025-11-18 at 4.43.40 PM (3).jpeg",
    "/assets/birthday parties/WhatsApp Image 2025-11-18 at 4.43.40 PM.jpeg",
    "/assets/birthday parties/WhatsApp Image 2025-11-18 at 4.43.41 PM (1).jpeg",
    "/assets/birthday parties/WhatsApp Image 2025-11-18 at 4.43.41 PM (2).jpeg",
    "/assets/birthday parties/WhatsApp Image 2025-11-18 at 4.43.41 PM.jpeg",
    "/assets/birthday parties/WhatsApp Image 2025-11-18 at 4.43.42 PM (1).jpeg",
    "/assets/birthday parties/WhatsApp Image 2025-11-18 at 4.43.42 PM (2).jpeg",
    "/assets/birthday parties/WhatsApp Image 2025-11-18 at 4.43.42 PM.jpeg",
    "/assets/birthday parties/WhatsApp Image 2025-11-18 at 4.43.43 PM (1).jpeg",
    "/assets/birthday parties/WhatsApp Image 2025-11-18 at 4.43.43 PM (2).jpeg",
    "/assets/birthday parties/WhatsApp Image 2025-11-18 at 4.43.43 PM.jpeg",
];

const HALDI: &[&str] = &[
    "/assets/haldi/WhatsApp Image 2025-11-18 at 4.56.03 PM.jpeg",
    "/assets/haldi/WhatsApp Image 2025-11-18 at 4.56.04 PM.jpeg",
    "/assets/haldi/WhatsApp Image 2025-11-18 at 4.56.04 PM (1).jpeg",
    "/assets/haldi/WhatsApp Image 2025-11-18 at 4.57.10 PM.jpeg",
    "/assets/haldi/WhatsApp Image 2025-11-18 at 4.57.10 PM (1).jpeg",
    "/assets/haldi/WhatsApp Image 2025-11-18 at 4.57.10 PM (2).jpeg",
    "/assets/haldi/WhatsApp Image 2025-11-18 at 5.00.13 PM.jpeg",
    "/assets/haldi/WhatsApp Image 2025-11-18 at 5.00.14 PM.jpeg",
];

const BRIDAL_SHOWER_PARTIES: &[&str] = &[
    "/assets/bridal shower and parties/WhatsApp Image 2025-11-25 at 2.37.24 PM (1).jpeg",
    "/assets/bridal shower and parties/WhatsApp Image 2025-11-25 at 2.37.24 PM.jpeg",
    "/assets/bridal shower and parties/WhatsApp Image 2025-11-25 at 2.37.25 PM (1).jpeg",
    "/assets/bridal shower and parties/WhatsApp Image 2025-11-25 at 2.37.25 PM (2).jpeg",
    "/assets/bridal shower and parties/WhatsApp Image 2025-11-25 at 2.37.25 PM.jpeg",
    "/assets/bridal shower and parties/WhatsApp Image 2025-11-25 at 2.37.26 PM (1).jpeg",
    "/assets/bridal shower and parties/WhatsApp Image 2025-11-25 at 2.37.26 PM (2).jpeg",
    "/assets/bridal shower and parties/WhatsApp Image 2025-11-25 at 2.37.26 PM.jpeg",
    "/assets/bridal shower and parties/WhatsApp Image 2025-11-25 at 2.37.27 PM (1).jpeg",
    "/assets/bridal shower and parties/WhatsApp Image 2025-11-25 at 2.37.27 PM (2).jpeg",
    "/assets/bridal shower and parties/WhatsApp Image 2025-11-25 at 2.37.27 PM.jpeg",
    "/assets/bridal shower and parties/WhatsApp Image 2025-11-25 at 2.37.28 PM (1).jpeg",
    "/assets/bridal shower and parties/WhatsApp Image 2025-11-25 at 2.37.28 PM (2).jpeg",
    "/assets/bridal shower and parties/WhatsApp Image 2025-11-25 at 2.37.28 PM.jpeg",
    "/assets/bridal shower and parties/WhatsApp Image 2025-11-25 at 2.37.29 PM (1).jpeg",
    "/assets/bridal shower and parties/WhatsApp Image 2025-11-25 at 2.37.29 PM (2).jpeg",
    "/assets/bridal shower and parties/WhatsApp Image 2025-11-25 at 2.37.29 PM.jpeg",
    "/assets/bridal shower and parties/WhatsApp Image 2025-11-25 at 2.37.30 PM (1).jpeg",
    "/assets/bridal shower and parties/WhatsApp Image 2025-11-25 at 2.37.30 PM (2).jpeg",
    "/assets/bridal shower and parties/WhatsApp Image 2025-11-25 at 2.37.30 PM.jpeg",
    "/assets/bridal shower and parties/WhatsApp Image 2025-11-25 at 2.37.31 PM (1).jpeg",
    "/assets/bridal shower and parties/WhatsApp Image 2025-11-25 at 2.37.31 PM (2).jpeg",
    "/assets/bridal shower and parties/WhatsApp Image 2025-11-25 at 2.37.31 PM.jpeg",
    "/assets/bridal shower and parties/WhatsApp Image 2025-11-25 at 2.37.32 PM (1).jpeg",
    "/assets/bridal shower and parties/WhatsApp Image 2025-11-25 at 2.37.32 PM.jpeg",
];

const HOUSE_WARMING: &[&str] = &[
    "/assets/house warming/WhatsApp Image 2025-11-25 at 2.39.18 PM (1).jpeg",
    "/assets/house warming/WhatsApp Image 2025-11-25 at 2.39.18 PM (2).jpeg",
    "/assets/house warming/WhatsApp Image 2025-11-25 at 2.39.18 PM.jpeg",
    "/assets/house warming/WhatsApp Image 2025-11-25 at 2.39.19 PM (1).jpeg",
    "/assets/house warming/WhatsApp Image 2025-11-25 at 2.39.19 PM.jpeg",
    "/assets/house warming/WhatsApp Image 2025-11-25 at 2.39.20 PM (1).jpeg",
    "/assets/house warming/WhatsApp Image 2025-11-25 at 2.39.20 PM (2).jpeg",
    "/assets/house warming/WhatsApp Image 2025-11-25 at 2.39.20 PM.jpeg",
    "/assets/house warming/WhatsApp Image 2025-11-25 at 2.40.27 PM (1).jpeg",
    "/assets/house warming/WhatsApp Image 2025-11-25 at 2.40.27 PM (2).jpeg",
    "/assets/house warming/WhatsApp Image 2025-11-25 at 2.40.27 PM.jpeg",
    "/assets/house warming/WhatsApp Image 2025-11-25 at 2.40.28 PM (1).jpeg",
    "/assets/house warming/WhatsApp Image 2025-11-25 at 2.40.28 PM.jpeg",
    "/assets/house warming/WhatsApp Image 2025-11-25 at 2.41.22 PM (1).jpeg",
    "/assets/house warming/WhatsApp Image 2025-11-25 at 2.41.22 PM.jpeg",
    "/assets/house warming/WhatsApp Image 2025-11-25 at 2.41.23 PM (1).jpeg",
    "/assets/house warming/WhatsApp Image 2025-11-25 at 2.41.23 PM (2).jpeg",
    "/assets/house warming/WhatsApp Image 2025-11-25 at 2.41.23 PM.jpeg",
    "/assets/house warming/WhatsApp Image 2025-11-25 at 2.41.24 PM (1).jpeg",
    "/assets/house warming/WhatsApp Image 2025-11-25 at 2.41.24 PM.jpeg",
    "/assets/house warming/WhatsApp Image 2025-11-25 at 2.41.42 PM (1).jpeg",
    "/assets/house warming/WhatsApp Image 2025-11-25 at 2.41.42 PM.jpeg",
    "/assets/house warming/WhatsApp Image 2025-11-25 at 2.42.05 PM (1).jpeg",
    "/assets/house warming/WhatsApp Image 2025-11-25 at 2.42.05 PM.jpeg",
];

const GARLANDS: &[&str] = &[
    "/assets/garlands/WhatsApp Image 2025-11-25 at 2.43.16 PM (1).jpeg",
    "/assets/garlands/WhatsApp Image 2025-11-25 at 2.43.16 PM (2).jpeg",
    "/assets/garlands/WhatsApp Image 2025-11-25 at 2.43.16 PM (3).jpeg",
    "/assets/garlands/WhatsApp Image 2025-11-25 at 2.43.16 PM.jpeg",
    "/assets/garlands/WhatsApp Image 2025-11-25 at 2.43.17 PM (1).jpeg",
    "/assets/garlands/WhatsApp Image 2025-11-25 at 2.43.17 PM (2).jpeg",
    "/assets/garlands/WhatsApp Image 2025-11-25 at 2.43.17 PM.jpeg",
    "/assets/garlands/WhatsApp Image 2025-11-25 at 2.43.18 PM (1).jpeg",
    "/assets/garlands/WhatsApp Image 2025-11-25 at 2.43.18 PM.jpeg",
];

const HALF_SAREE_CEREMONY: &[&str] = &[
    "/assets/Half saree ceremony/WhatsApp Image 2025-11-25 at 2.27.27 PM.jpeg",
    "/assets/Half saree ceremony/WhatsApp Image 2025-11-25 at 2.27.28 PM (1).jpeg",
    "/assets/Half saree ceremony/WhatsApp Image 2025-11-25 at 2.27.28 PM (2).jpeg",
    "/assets/Half saree ceremony/WhatsApp Image 2025-11-25 at 2.27.28 PM.jpeg",
    "/assets/Half saree ceremony/WhatsApp Image 2025-11-25 at 2.27.29 PM (1).jpeg",
    "/assets/Half saree ceremony/WhatsApp Image 2025-11-25 at 2.27.29 PM (2).jpeg",
    "/assets/Half saree ceremony/WhatsApp Image 2025-11-25 at 2.27.29 PM.jpeg",
    "/assets/Half saree ceremony/WhatsApp Image 2025-11-25 at 2.27.30 PM (1).jpeg",
    "/assets/Half saree ceremony/WhatsApp Image 2025-11-25 at 2.27.30 PM (2).jpeg",
    "/assets/Half saree ceremony/WhatsApp Image 2025-11-25 at 2.27.30 PM.jpeg",
    "/assets/Half saree ceremony/WhatsApp Image 2025-11-25 at 2.27.31 PM (1).jpeg",
    "/assets/Half saree ceremony/WhatsApp Image 2025-11-25 at 2.27.31 PM (2).jpeg",
    "/assets/Half saree ceremony/WhatsApp Image 2025-11-25 at 2.27.31 PM.jpeg",
];


pub const PORTFOLIO: &[(&str, &[&str])] = &[
    ("Weddings", WEDDINGS),
    ("Engagement", ENGAGEMENT),
    ("Baby Shower", BABY_SHOWER),
    ("Naming Ceremony", NAMING_CEREMONY),
    ("Birthday Parties", BIRTHDAY_PARTIES),
    ("Haldi", HALDI),
    ("Bridal Shower & Parties", BRIDAL_SHOWER_PARTIES),
    ("House Warming", HOUSE_WARMING),
    ("Garlands", GARLANDS),
    ("Half Saree Ceremony", HALF_SAREE_CEREMONY),
];

/// Category names in display order.
pub fn filters() -> impl Iterator<Item = &'static str> {
    PORTFOLIO.iter().map(|(category, _)| *category)
}

/// Images for one category. Unknown categories have no images.
pub fn images_for(category: &str) -> &'static [&'static str] {
    PORTFOLIO
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, images)| *images)
        .unwrap_or(&[])
}

/// Every portfolio image, categories concatenated in display order.
/// The lightbox indexes into this list.
pub fn all_images() -> Vec<&'static str> {
    PORTFOLIO
        .iter()
        .flat_map(|(_, images)| images.iter().copied())
        .collect()
}

/// Position of `path` in [`all_images`].
pub fn flat_index(path: &str) -> Option<usize> {
    PORTFOLIO
        .iter()
        .flat_map(|(_, images)| images.iter())
        .position(|image| *image == path)
}

/// Percent-encodes each path segment so file names with spaces and
/// parentheses can be used as an `src` attribute. Absolute URLs pass through.
pub fn asset_src(path: &str) -> String {
    if path.starts_with("http") {
        return path.to_string();
    }
    path.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_filter_returns_its_images() {
        let haldi = images_for("Haldi");
        assert_eq!(haldi.len(), 8);
        assert!(haldi.iter().all(|p| p.starts_with("/assets/haldi/")));
    }

    #[test]
    fn unknown_filter_is_empty() {
        assert!(images_for("Corporate").is_empty());
        assert!(images_for("").is_empty());
        assert!(images_for("weddings").is_empty());
    }

    #[test]
    fn default_filter_exists() {
        assert!(filters().any(|f| f == DEFAULT_FILTER));
        assert!(!images_for(DEFAULT_FILTER).is_empty());
    }

    #[test]
    fn flattened_list_keeps_category_order() {
        let all = all_images();
        let total: usize = PORTFOLIO.iter().map(|(_, imgs)| imgs.len()).sum();
        assert_eq!(all.len(), total);
        assert_eq!(all[0], images_for("Weddings")[0]);
        let engagement_start = images_for("Weddings").len();
        assert_eq!(all[engagement_start], images_for("Engagement")[0]);
        assert_eq!(all.last(), images_for("Half Saree Ceremony").last());
    }

    #[test]
    fn flat_index_finds_images_from_any_category() {
        let garland = images_for("Garlands")[2];
        let idx = flat_index(garland).unwrap();
        assert_eq!(all_images()[idx], garland);
        assert_eq!(flat_index("/assets/missing.jpeg"), None);
    }

    #[test]
    fn eight_hero_images() {
        assert_eq!(HERO_IMAGES.len(), 8);
    }

    #[test]
    fn asset_src_encodes_segments_but_keeps_slashes() {
        assert_eq!(
            asset_src("/assets/baby shower/WhatsApp Image 2025-11-18 at 4.34.51 PM.jpeg"),
            "/assets/baby%20shower/WhatsApp%20Image%202025-11-18%20at%204.34.51%20PM.jpeg"
        );
        assert_eq!(asset_src("/assets/logo.png"), "/assets/logo.png");
        assert_eq!(asset_src("https://example.com/a b.png"), "https://example.com/a b.png");
    }
}
