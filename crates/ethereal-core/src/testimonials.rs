use serde::{Deserialize, Serialize};

/// One card in the testimonial carousel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    #[serde(default)]
    pub role: String,
}

impl Testimonial {
    pub fn new(quote: impl Into<String>, author: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            quote: quote.into(),
            author: author.into(),
            role: role.into(),
        }
    }
}

pub fn default_testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial::new(
            "Ethereal turned a vague idea into a site our customers actually enjoy scrolling through.",
            "Mara Lindqvist",
            "Founder, Northlight",
        ),
        Testimonial::new(
            "The attention to motion and detail is unlike any agency we have worked with.",
            "Daniel Okafor",
            "Head of Product, Tessellate",
        ),
        Testimonial::new(
            "They shipped on time, and the launch doubled our inbound leads in a month.",
            "Priya Raman",
            "Marketing Lead, Orbital Labs",
        ),
        Testimonial::new(
            "Every interaction feels considered. Our brand finally looks like we always imagined.",
            "Jonas Weber",
            "Creative Director, Halcyon",
        ),
        Testimonial::new(
            "A calm, precise team. Feedback rounds were painless and the result speaks for itself.",
            "Sofia Marin",
            "COO, Fieldnote",
        ),
    ]
}
