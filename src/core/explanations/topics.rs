use std::fmt;

/// Built-in explanation texts, keyed by a stable identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExplanationTopic {
    #[default]
    MandelbrotIterative,
}

impl ExplanationTopic {
    pub const ALL: &'static [Self] = &[Self::MandelbrotIterative];

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::MandelbrotIterative => "mandelbrot_iter",
        }
    }

    #[must_use]
    pub const fn body(self) -> &'static str {
        match self {
            Self::MandelbrotIterative => concat!(
                "The Mandelbrot set is a set of complex numbers that produces a fractal when plotted. ",
                "This set is named after Benoit B. Mandelbrot, who studied and popularized it in 1980. ",
                "The boundary of the Mandelbrot set forms a complex and infinitely detailed fractal scape."
            ),
        }
    }

    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|topic| topic.id() == id)
    }
}

impl fmt::Display for ExplanationTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
