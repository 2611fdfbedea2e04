use super::Color;

/// Number of entries in the series palette.
pub const PALETTE_LEN: usize = 157;

/// Series colors in assignment order, packed as `0xRRGGBB`.
const SERIES_PALETTE: [u32; PALETTE_LEN] = [
    0xEC9073, 0x6BAD54, 0xE2F626, 0x0F22E4, 0x1FE362, 0xC5F566, 0x8D23A8, 0x78A7FC,
    0xDFC01B, 0x43B261, 0x53758D, 0xC1AE45, 0x6CD13D, 0xE0CA0E, 0x652188, 0x3EBB34,
    0x8F53EA, 0x956669, 0x34A0FB, 0xF50178, 0xAB766A, 0xBEA029, 0xABE124, 0xA68477,
    0xF7D084, 0x93F0A5, 0xB54667, 0xF12D25, 0x1DBA13, 0x21AF23, 0x3B62C0, 0x876CDC,
    0x3DE6A0, 0xCCD77F, 0xB91583, 0x8CFFFB, 0x073641, 0x38E1E9, 0x1A5F2D, 0xED603F,
    0x3BB3AA, 0xFA2216, 0x34E25C, 0xB6716A, 0xE5845B, 0x497FC2, 0xABCCEE, 0x222047,
    0xDFE514, 0xFFA84F, 0x388B85, 0xD21AEF, 0x811A26, 0x206057, 0x557FDB, 0xF148CC,
    0xDAFF4E, 0xFCF072, 0x792DA8, 0x50DC0B, 0x8FDC7A, 0x954958, 0x74575C, 0xAC5CAF,
    0x4FF2BF, 0xE4FC17, 0x6ADB42, 0x4B693B, 0x5D7BA1, 0xBF1B1C, 0xA00AC1, 0x13CEE0,
    0x02C7C0, 0x21EAD8, 0xC87D39, 0xAEAB86, 0xDA9998, 0xAAB717, 0x8496E6, 0xFAE782,
    0x120BD9, 0x1A3B4C, 0x3F7E68, 0x6FCF6B, 0x5564DE, 0x6E07AD, 0x0C847C, 0x1BB8A2,
    0x101DF8, 0x85DE9B, 0xD0AD74, 0xB803D8, 0x0E3C7E, 0xE8E05E, 0x8E36DD, 0x2ADC85,
    0x13E17B, 0xA8AE41, 0xC3AA40, 0x9CFD3C, 0xA5782F, 0xE33C5B, 0x8F33D8, 0x59BF4F,
    0xFECFB0, 0xB553D8, 0x2CB590, 0x01045E, 0xCA78AC, 0x8AA596, 0x54BB79, 0x3A5E0E,
    0xF10F55, 0xD205AA, 0x234D8D, 0x3D2F8A, 0x9B4F95, 0xE96E9C, 0x47E4C9, 0xFFC3D4,
    0x11231A, 0xDA529F, 0x789D72, 0xAB9906, 0x205F33, 0x444685, 0x05067A, 0x6E2FC9,
    0x165AF5, 0x026619, 0x96EEC6, 0x4DB433, 0xE9219F, 0xAA5F55, 0x558BCA, 0x56034C,
    0xA896DD, 0x9C7CD0, 0xB8B170, 0x7D6F92, 0x9E8A2D, 0x7D6134, 0xED069E, 0x74625E,
    0x3DC9C5, 0xC64507, 0x274987, 0xD74EEE, 0xC53379, 0x1A6E42, 0x308859, 0xF70419,
    0xBE10CF, 0xE841CC, 0xAD60CB, 0x30BB80, 0x5886C9,
];

/// Two-entry palette used by the compact dashboard line chart.
pub const SIMPLE_PALETTE: [Color; 2] = [
    Color::from_packed(0x7DCE44),
    Color::from_packed(0xEF653B),
];

/// Returns the series color for `index`, cycling through the palette.
#[must_use]
pub fn color_at(index: usize) -> Color {
    Color::from_packed(SERIES_PALETTE[index % PALETTE_LEN])
}

/// Returns the compact-chart color for `index`, cycling through [`SIMPLE_PALETTE`].
#[must_use]
pub fn simple_color_at(index: usize) -> Color {
    SIMPLE_PALETTE[index % SIMPLE_PALETTE.len()]
}
