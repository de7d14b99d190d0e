//! Daily inspiration quotes
//!
//! A fixed catalog and a selector that never repeats the current quote's
//! text on consecutive picks. The resample loop is bounded by the catalog
//! size, so a catalog where every entry shares one text (including a
//! single-entry catalog) returns the current quote instead of spinning.

use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub text: &'static str,
    pub author: &'static str,
}

pub const QUOTES: &[Quote] = &[
    Quote {
        text: "The secret of getting ahead is getting started.",
        author: "Mark Twain",
    },
    Quote {
        text: "It does not matter how slowly you go as long as you do not stop.",
        author: "Confucius",
    },
    Quote {
        text: "The only way to do great work is to love what you do.",
        author: "Steve Jobs",
    },
    Quote {
        text: "Believe you can and you're halfway there.",
        author: "Theodore Roosevelt",
    },
    Quote {
        text: "Your limitation—it's only your imagination.",
        author: "Unknown",
    },
    Quote {
        text: "Push yourself, because no one else is going to do it for you.",
        author: "Unknown",
    },
    Quote {
        text: "Great things never come from comfort zones.",
        author: "Unknown",
    },
    Quote {
        text: "Dream it. Wish it. Do it.",
        author: "Unknown",
    },
    Quote {
        text: "Success doesn't just find you. You have to go out and get it.",
        author: "Unknown",
    },
    Quote {
        text: "The harder you work for something, the greater you'll feel when you achieve it.",
        author: "Unknown",
    },
    Quote {
        text: "Don't stop when you're tired. Stop when you're done.",
        author: "Unknown",
    },
    Quote {
        text: "Wake up with determination. Go to bed with satisfaction.",
        author: "Unknown",
    },
    Quote {
        text: "Do something today that your future self will thank you for.",
        author: "Sean Patrick Flanery",
    },
    Quote {
        text: "Little things make big days.",
        author: "Unknown",
    },
    Quote {
        text: "It's going to be hard, but hard does not mean impossible.",
        author: "Unknown",
    },
    Quote {
        text: "Don't wait for opportunity. Create it.",
        author: "Unknown",
    },
    Quote {
        text: "The mind is everything. What you think you become.",
        author: "Buddha",
    },
    Quote {
        text: "Start where you are. Use what you have. Do what you can.",
        author: "Arthur Ashe",
    },
    Quote {
        text: "Focus on being productive instead of busy.",
        author: "Tim Ferriss",
    },
    Quote {
        text: "You don't have to be great to start, but you have to start to be great.",
        author: "Zig Ziglar",
    },
];

pub struct QuoteSelector {
    catalog: &'static [Quote],
    current: usize,
}

impl QuoteSelector {
    /// Selector over the built-in catalog, starting on a random quote
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        Self::with_catalog(QUOTES, rng)
    }

    pub fn with_catalog<R: Rng>(catalog: &'static [Quote], rng: &mut R) -> Self {
        assert!(!catalog.is_empty(), "quote catalog must not be empty");
        let current = rng.gen_range(0..catalog.len());
        Self { catalog, current }
    }

    pub fn current(&self) -> Quote {
        self.catalog[self.current]
    }

    /// Advance to a quote whose text differs from the current one.
    ///
    /// Bounded resampling: after catalog-length failed draws we fall back
    /// to a linear scan, and if no entry has a different text the current
    /// quote stays.
    pub fn next<R: Rng>(&mut self, rng: &mut R) -> Quote {
        let current_text = self.current().text;

        for _ in 0..self.catalog.len() {
            let candidate = rng.gen_range(0..self.catalog.len());
            if self.catalog[candidate].text != current_text {
                self.current = candidate;
                return self.current();
            }
        }

        if let Some(candidate) = self
            .catalog
            .iter()
            .position(|q| q.text != current_text)
        {
            self.current = candidate;
        }

        self.current()
    }
}
