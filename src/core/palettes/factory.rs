use crate::core::data::colour::Colour;
use crate::core::palettes::kinds::{Palette, PaletteKind};
use crate::core::palettes::ramp::{ColourRamp, ColourStop};

const fn stop(at: f64, hex: u32) -> ColourStop {
    (at, Colour::from_hex(hex))
}

// Perceptually uniform maps, sampled every eighth of the range.
static VIRIDIS: [ColourStop; 9] = [
    stop(0.0, 0x440154),
    stop(0.125, 0x472d7b),
    stop(0.25, 0x3b528b),
    stop(0.375, 0x2c728e),
    stop(0.5, 0x21918c),
    stop(0.625, 0x28ae80),
    stop(0.75, 0x5ec962),
    stop(0.875, 0xaadc32),
    stop(1.0, 0xfde725),
];

static PLASMA: [ColourStop; 9] = [
    stop(0.0, 0x0d0887),
    stop(0.125, 0x4c02a1),
    stop(0.25, 0x7e03a8),
    stop(0.375, 0xa92395),
    stop(0.5, 0xcc4778),
    stop(0.625, 0xe56b5d),
    stop(0.75, 0xf89540),
    stop(0.875, 0xfdc527),
    stop(1.0, 0xf0f921),
];

static INFERNO: [ColourStop; 9] = [
    stop(0.0, 0x000004),
    stop(0.125, 0x1f0c48),
    stop(0.25, 0x550f6d),
    stop(0.375, 0x88226a),
    stop(0.5, 0xba3655),
    stop(0.625, 0xe35933),
    stop(0.75, 0xf98e09),
    stop(0.875, 0xf8c931),
    stop(1.0, 0xfcffa4),
];

static MAGMA: [ColourStop; 9] = [
    stop(0.0, 0x000004),
    stop(0.125, 0x1c1044),
    stop(0.25, 0x4f127b),
    stop(0.375, 0x812581),
    stop(0.5, 0xb5367a),
    stop(0.625, 0xe55064),
    stop(0.75, 0xfb8761),
    stop(0.875, 0xfec287),
    stop(1.0, 0xfcfdbf),
];

static CIVIDIS: [ColourStop; 5] = [
    stop(0.0, 0x00224e),
    stop(0.25, 0x414d6b),
    stop(0.5, 0x7c7b78),
    stop(0.75, 0xbcaf6f),
    stop(1.0, 0xfee838),
];

static GRAY: [ColourStop; 2] = [stop(0.0, 0x000000), stop(1.0, 0xffffff)];

static GREYS: [ColourStop; 2] = [stop(0.0, 0xffffff), stop(1.0, 0x000000)];

static HOT: [ColourStop; 4] = [
    stop(0.0, 0x0b0000),
    stop(0.365, 0xff0000),
    stop(0.746, 0xffff00),
    stop(1.0, 0xffffff),
];

static COOL: [ColourStop; 2] = [stop(0.0, 0x00ffff), stop(1.0, 0xff00ff)];

static SPRING: [ColourStop; 2] = [stop(0.0, 0xff00ff), stop(1.0, 0xffff00)];

static SUMMER: [ColourStop; 2] = [stop(0.0, 0x008066), stop(1.0, 0xffff66)];

static AUTUMN: [ColourStop; 2] = [stop(0.0, 0xff0000), stop(1.0, 0xffff00)];

static WINTER: [ColourStop; 2] = [stop(0.0, 0x0000ff), stop(1.0, 0x00ff80)];

static BONE: [ColourStop; 4] = [
    stop(0.0, 0x000000),
    stop(0.365, 0x515171),
    stop(0.746, 0xa6c6c6),
    stop(1.0, 0xffffff),
];

static COPPER: [ColourStop; 3] = [
    stop(0.0, 0x000000),
    stop(0.8, 0xff9f65),
    stop(1.0, 0xffc77f),
];

static JET: [ColourStop; 6] = [
    stop(0.0, 0x000080),
    stop(0.125, 0x0000ff),
    stop(0.375, 0x00ffff),
    stop(0.625, 0xffff00),
    stop(0.875, 0xff0000),
    stop(1.0, 0x800000),
];

#[must_use]
pub fn palette_stops(kind: PaletteKind) -> &'static [ColourStop] {
    match kind {
        PaletteKind::Viridis => &VIRIDIS,
        PaletteKind::Plasma => &PLASMA,
        PaletteKind::Inferno => &INFERNO,
        PaletteKind::Magma => &MAGMA,
        PaletteKind::Cividis => &CIVIDIS,
        PaletteKind::Gray => &GRAY,
        PaletteKind::Greys => &GREYS,
        PaletteKind::Hot => &HOT,
        PaletteKind::Cool => &COOL,
        PaletteKind::Spring => &SPRING,
        PaletteKind::Summer => &SUMMER,
        PaletteKind::Autumn => &AUTUMN,
        PaletteKind::Winter => &WINTER,
        PaletteKind::Bone => &BONE,
        PaletteKind::Copper => &COPPER,
        PaletteKind::Jet => &JET,
    }
}

#[must_use]
pub fn palette_factory(palette: Palette) -> ColourRamp {
    ColourRamp::new(
        palette.to_string(),
        palette_stops(palette.kind),
        palette.reversed,
    )
}
