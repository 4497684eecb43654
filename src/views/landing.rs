//! Landing page state: testimonial carousel and the headline typewriter

use std::time::Duration;

/// Delay between typed characters
pub const TYPE_DELAY: Duration = Duration::from_millis(60);
/// Pause on a fully typed phrase
pub const HOLD_DELAY: Duration = Duration::from_millis(2000);
/// Delay between deleted characters
pub const DELETE_DELAY: Duration = Duration::from_millis(30);

/// Headline phrases, in cycle order
pub const PHRASES: [&str; 3] = ["Healthier Lives", "Wellness Goals", "Your Best Self"];

/// A client quote shown on the landing page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub text: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Sarah L.",
        text: "The Fitness Bootcamp transformed my life with expert guidance!",
    },
    Testimonial {
        name: "Mike R.",
        text: "Nutrition Plan was tailored perfectly to my needs.",
    },
    Testimonial {
        name: "Emily T.",
        text: "Mental Health program gave me tools to thrive.",
    },
];

/// Wrapping index over the testimonials
#[derive(Debug, Clone)]
pub struct TestimonialCarousel {
    items: Vec<Testimonial>,
    current: usize,
}

impl Default for TestimonialCarousel {
    fn default() -> Self {
        Self::new(TESTIMONIALS.to_vec())
    }
}

impl TestimonialCarousel {
    pub fn new(items: Vec<Testimonial>) -> Self {
        Self { items, current: 0 }
    }

    pub fn index(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn current(&self) -> Option<&Testimonial> {
        self.items.get(self.current)
    }

    pub fn next(&mut self) {
        if !self.items.is_empty() {
            self.current = (self.current + 1) % self.items.len();
        }
    }

    pub fn previous(&mut self) {
        if !self.items.is_empty() {
            self.current = (self.current + self.items.len() - 1) % self.items.len();
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Holding,
    Deleting,
}

/// Type, hold, delete, next phrase, forever.
///
/// Each [`step`](Typewriter::step) performs one transition and returns the
/// text to display together with how long to wait before the next step.
#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<String>,
    phrase: usize,
    visible: usize,
    phase: Phase,
}

impl Default for Typewriter {
    fn default() -> Self {
        Self::new(PHRASES.iter().map(|p| p.to_string()).collect())
    }
}

impl Typewriter {
    pub fn new(phrases: Vec<String>) -> Self {
        Self {
            phrases,
            phrase: 0,
            visible: 0,
            phase: Phase::Typing,
        }
    }

    /// Index of the phrase being animated
    pub fn phrase_index(&self) -> usize {
        self.phrase
    }

    /// Currently visible prefix of the phrase
    pub fn text(&self) -> String {
        self.phrases
            .get(self.phrase)
            .map(|p| p.chars().take(self.visible).collect())
            .unwrap_or_default()
    }

    fn phrase_len(&self) -> usize {
        self.phrases
            .get(self.phrase)
            .map(|p| p.chars().count())
            .unwrap_or(0)
    }

    fn advance_phrase(&mut self) {
        self.visible = 0;
        self.phase = Phase::Typing;
        if !self.phrases.is_empty() {
            self.phrase = (self.phrase + 1) % self.phrases.len();
        }
    }

    /// Advance one transition
    pub fn step(&mut self) -> (String, Duration) {
        let delay = match self.phase {
            Phase::Typing => {
                self.visible = (self.visible + 1).min(self.phrase_len());
                if self.visible == self.phrase_len() {
                    self.phase = Phase::Holding;
                    HOLD_DELAY
                } else {
                    TYPE_DELAY
                }
            }
            Phase::Holding | Phase::Deleting => {
                self.phase = Phase::Deleting;
                self.visible = self.visible.saturating_sub(1);
                if self.visible == 0 {
                    self.advance_phrase();
                    TYPE_DELAY
                } else {
                    DELETE_DELAY
                }
            }
        };
        (self.text(), delay)
    }
}

/// Everything the landing page animates
#[derive(Debug, Clone, Default)]
pub struct LandingView {
    pub carousel: TestimonialCarousel,
    pub typewriter: Typewriter,
}
