use std::fmt;
use std::str::FromStr;

use crate::core::palettes::errors::InvalidPaletteError;

const REVERSED_SUFFIX: &str = "_r";

/// Palettes the service advertises, named after their matplotlib colormaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PaletteKind {
    #[default]
    Viridis,
    Plasma,
    Inferno,
    Magma,
    Cividis,
    Gray,
    Greys,
    Hot,
    Cool,
    Spring,
    Summer,
    Autumn,
    Winter,
    Bone,
    Copper,
    Jet,
}

impl PaletteKind {
    pub const ALL: &'static [Self] = &[
        Self::Viridis,
        Self::Plasma,
        Self::Inferno,
        Self::Magma,
        Self::Cividis,
        Self::Gray,
        Self::Greys,
        Self::Hot,
        Self::Cool,
        Self::Spring,
        Self::Summer,
        Self::Autumn,
        Self::Winter,
        Self::Bone,
        Self::Copper,
        Self::Jet,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Viridis => "viridis",
            Self::Plasma => "plasma",
            Self::Inferno => "inferno",
            Self::Magma => "magma",
            Self::Cividis => "cividis",
            Self::Gray => "gray",
            Self::Greys => "Greys",
            Self::Hot => "hot",
            Self::Cool => "cool",
            Self::Spring => "spring",
            Self::Summer => "summer",
            Self::Autumn => "autumn",
            Self::Winter => "winter",
            Self::Bone => "bone",
            Self::Copper => "copper",
            Self::Jet => "jet",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.name() == name)
    }
}

impl fmt::Display for PaletteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A resolved palette name: a kind, optionally reversed with the `_r` suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Palette {
    pub kind: PaletteKind,
    pub reversed: bool,
}

impl Palette {
    #[must_use]
    pub const fn new(kind: PaletteKind) -> Self {
        Self {
            kind,
            reversed: false,
        }
    }

    #[must_use]
    pub const fn reversed(self) -> Self {
        Self {
            reversed: !self.reversed,
            ..self
        }
    }

    /// Every name accepted by [`Palette::from_str`].
    pub fn advertised_names() -> impl Iterator<Item = String> {
        PaletteKind::ALL.iter().flat_map(|kind| {
            [
                kind.name().to_string(),
                format!("{}{}", kind.name(), REVERSED_SUFFIX),
            ]
        })
    }
}

impl FromStr for Palette {
    type Err = InvalidPaletteError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        if let Some(kind) = PaletteKind::from_name(name) {
            return Ok(Self::new(kind));
        }

        name.strip_suffix(REVERSED_SUFFIX)
            .and_then(PaletteKind::from_name)
            .map(|kind| Self::new(kind).reversed())
            .ok_or_else(|| InvalidPaletteError {
                name: name.to_string(),
            })
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind.name())?;
        if self.reversed {
            f.write_str(REVERSED_SUFFIX)?;
        }
        Ok(())
    }
}
