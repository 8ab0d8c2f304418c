#[derive(Clone, PartialEq, Debug)]
pub struct Testimonial {
    pub name: &'static str,
    pub event: &'static str,
    pub rating: u8,
    pub text: &'static str,
}

impl Testimonial {
    /// Filled stars for the rating, capped at five.
    pub fn stars(&self) -> String {
        "★".repeat(self.rating.min(5) as usize)
    }
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Priya Sharma",
        event: "Wedding Reception",
        rating: 5,
        text: "Nandini Decoration transformed our wedding into a fairytale! The attention to detail and royal ambiance they created was beyond our expectations. Highly recommended!",
    },
    Testimonial {
        name: "Rajesh Kumar",
        event: "Corporate Launch",
        rating: 5,
        text: "Professional, punctual, and absolutely stunning work! They understood our vision perfectly and delivered a corporate event setup that impressed all our guests.",
    },
    Testimonial {
        name: "Anjali Reddy",
        event: "Birthday Celebration",
        rating: 5,
        text: "The team made my daughter's birthday truly special. The decoration was elegant, creative, and exactly what we dreamed of. Thank you for the wonderful memories!",
    },
    Testimonial {
        name: "Vikram Singh",
        event: "Anniversary Party",
        rating: 5,
        text: "Outstanding service from start to finish! They created a magical atmosphere for our 25th anniversary. The floral arrangements and lighting were absolutely breathtaking. Our guests are still talking about it!",
    },
    Testimonial {
        name: "Meera Patel",
        event: "Baby Shower",
        rating: 5,
        text: "Such a beautiful and elegant setup for my baby shower! The team was so creative and paid attention to every little detail. The pastel theme was executed perfectly. Couldn't have asked for more!",
    },
    Testimonial {
        name: "Arjun Nair",
        event: "Product Launch",
        rating: 5,
        text: "We hired Nandini Decoration for our product launch event, and they exceeded all expectations! The modern yet sophisticated decor perfectly matched our brand. Excellent coordination and execution!",
    },
    Testimonial {
        name: "Kavya Desai",
        event: "Engagement Ceremony",
        rating: 5,
        text: "The engagement ceremony was absolutely dreamy! The combination of traditional and modern elements was perfect. The team worked tirelessly to make our day special. Truly professional!",
    },
    Testimonial {
        name: "Rohit Menon",
        event: "Housewarming Party",
        rating: 5,
        text: "Amazing work! They transformed our new home into a celebration space. The decor was tasteful, elegant, and created such a warm, welcoming atmosphere. Highly professional team!",
    },
    Testimonial {
        name: "Sneha Iyer",
        event: "Graduation Party",
        rating: 5,
        text: "My graduation party was a huge success thanks to Nandini Decoration! The setup was modern, vibrant, and exactly what I wanted. The team was so accommodating and creative. Five stars!",
    },
    Testimonial {
        name: "Aditya Rao",
        event: "Retirement Function",
        rating: 5,
        text: "They created a beautiful, dignified setup for my father's retirement function. The decor was elegant and respectful, perfectly capturing the occasion. Professional service throughout!",
    },
    Testimonial {
        name: "Divya Krishnan",
        event: "Bridal Shower",
        rating: 5,
        text: "The bridal shower was absolutely gorgeous! Every detail was perfect - from the centerpieces to the lighting. The team understood my vision and brought it to life beautifully. Thank you!",
    },
    Testimonial {
        name: "Suresh Gowda",
        event: "Festival Celebration",
        rating: 5,
        text: "For our Diwali celebration, they created an absolutely stunning setup! The traditional elements mixed with modern touches were perfect. The entire team was professional and punctual. Excellent work!",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_match_rating() {
        assert_eq!(TESTIMONIALS[0].stars().chars().count(), 5);
        let t = Testimonial { name: "x", event: "y", rating: 9, text: "" };
        assert_eq!(t.stars().chars().count(), 5);
    }
}
