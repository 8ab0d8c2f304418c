use chrono::{DateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Asia::Kolkata;

pub const BUSINESS_NAME: &str = "Nandini Decoration";
pub const WHATSAPP_NUMBER: &str = "+918453228622";
pub const FOUNDER_NUMBER: &str = "+919341479989";
pub const EMAIL: &str = "Chandanmysore77@gmail.com";
pub const BUSINESS_HOURS: &str = "Mon – Sun · 10:30 AM – 10:00 PM IST";
pub const LOCATION_LINK: &str = "https://www.google.com/maps/place/Nandini+Lightings+and+Decorators,+528,+Theobald+Rd,+Near+PWD+Quarters,+Nazarbad,+Mysuru,+Karnataka+570010";
pub const MAP_EMBED_URL: &str = "https://www.google.com/maps?q=Nandini+Lightings+and+Decorators,+528,+Theobald+Rd,+Nazarbad,+Mysuru&output=embed";

/// `tel:` href keeping only digits and `+`.
pub fn tel_href(number: &str) -> String {
    let digits: String = number
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    format!("tel:{}", digits)
}

pub fn mailto_href(address: &str) -> String {
    format!("mailto:{}", address)
}

/// WhatsApp deep link; wa.me only accepts bare digits.
pub fn whatsapp_link(number: &str) -> String {
    let digits: String = number.chars().filter(|c| c.is_ascii_digit()).collect();
    format!("https://wa.me/{}", digits)
}

#[derive(Clone, PartialEq, Debug)]
pub struct ContactEntry {
    pub icon: &'static str,
    pub title: &'static str,
    pub value: &'static str,
    pub href: Option<String>,
    pub note: &'static str,
}

pub fn contact_entries() -> Vec<ContactEntry> {
    vec![
        ContactEntry {
            icon: "📞",
            title: "Chandan C (Managing Director)",
            value: WHATSAPP_NUMBER,
            href: Some(tel_href(WHATSAPP_NUMBER)),
            note: "",
        },
        ContactEntry {
            icon: "📞",
            title: "Chandrashekar P (Founder)",
            value: FOUNDER_NUMBER,
            href: Some(tel_href(FOUNDER_NUMBER)),
            note: "",
        },
        ContactEntry {
            icon: "✉️",
            title: "Email Us",
            value: EMAIL,
            href: Some(mailto_href(EMAIL)),
            note: "Share floor plans, Pinterest boards, or rider lists.",
        },
        ContactEntry {
            icon: "🕒",
            title: "Business Hours (IST)",
            value: BUSINESS_HOURS,
            href: None,
            note: "Monday – Sunday · Morning 10:30 AM to Night 10:00 PM",
        },
    ]
}

/// Opening window in Mysuru local time, every day: 10:30 inclusive to 22:00 exclusive.
pub fn is_open_at<Tz: TimeZone>(instant: &DateTime<Tz>) -> bool {
    let time = instant.with_timezone(&Kolkata).time();
    match (NaiveTime::from_hms_opt(10, 30, 0), NaiveTime::from_hms_opt(22, 0, 0)) {
        (Some(opens), Some(closes)) => time >= opens && time < closes,
        _ => false,
    }
}

pub fn is_open_now() -> bool {
    is_open_at(&Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tel_keeps_plus_and_digits() {
        assert_eq!(tel_href("+91 84532 28622"), "tel:+918453228622");
        assert_eq!(tel_href("(080) 123-45"), "tel:08012345");
    }

    #[test]
    fn whatsapp_link_is_digits_only() {
        assert_eq!(whatsapp_link(WHATSAPP_NUMBER), "https://wa.me/918453228622");
        assert_eq!(whatsapp_link("+91 93414 79989"), "https://wa.me/919341479989");
    }

    #[test]
    fn entries_link_phones_and_email() {
        let entries = contact_entries();
        assert_eq!(entries[0].href.as_deref(), Some("tel:+918453228622"));
        assert_eq!(entries[2].href.as_deref(), Some("mailto:Chandanmysore77@gmail.com"));
        assert!(entries[3].href.is_none());
    }

    #[test]
    fn opening_hours_are_evaluated_in_ist() {
        // IST is UTC+5:30.
        let at = |h, m| Utc.with_ymd_and_hms(2026, 3, 17, h, m, 0).unwrap();
        assert!(!is_open_at(&at(4, 59))); // 10:29 IST
        assert!(is_open_at(&at(5, 0))); // 10:30 IST
        assert!(is_open_at(&at(16, 29))); // 21:59 IST
        assert!(!is_open_at(&at(16, 30))); // 22:00 IST
        assert!(!is_open_at(&at(20, 0))); // 01:30 IST
    }

    #[test]
    fn opening_hours_accept_local_instants() {
        let ist = Kolkata.with_ymd_and_hms(2026, 10, 17, 12, 0, 0).unwrap();
        assert!(is_open_at(&ist));
    }
}
