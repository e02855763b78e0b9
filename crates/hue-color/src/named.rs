// SPDX-License-Identifier: MIT
//
// The named-color table used for nearest-name lookup.
//
// The CSS basic colors come first, then the extended keywords grouped
// roughly by family. Order matters: when two entries are equally close to
// a query, the earlier one wins, so reordering this table changes results.

/// A fixed (hex, name) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedColor {
    /// Lowercase `#rrggbb`.
    pub hex: &'static str,
    pub name: &'static str,
}

impl NamedColor {
    #[must_use]
    pub const fn new(hex: &'static str, name: &'static str) -> Self {
        Self { hex, name }
    }
}

/// All named colors, in lookup order.
pub const NAMED_COLORS: &[NamedColor] = &[
    NamedColor::new("#000000", "Black"),
    NamedColor::new("#ffffff", "White"),
    NamedColor::new("#ff0000", "Red"),
    NamedColor::new("#00ff00", "Lime"),
    NamedColor::new("#0000ff", "Blue"),
    NamedColor::new("#ffff00", "Yellow"),
    NamedColor::new("#00ffff", "Cyan"),
    NamedColor::new("#ff00ff", "Magenta"),
    NamedColor::new("#c0c0c0", "Silver"),
    NamedColor::new("#808080", "Gray"),
    NamedColor::new("#800000", "Maroon"),
    NamedColor::new("#808000", "Olive"),
    NamedColor::new("#008000", "Green"),
    NamedColor::new("#800080", "Purple"),
    NamedColor::new("#008080", "Teal"),
    NamedColor::new("#000080", "Navy"),
    NamedColor::new("#ffa500", "Orange"),
    NamedColor::new("#ffc0cb", "Pink"),
    NamedColor::new("#a52a2a", "Brown"),
    NamedColor::new("#f0e68c", "Khaki"),
    NamedColor::new("#e6e6fa", "Lavender"),
    NamedColor::new("#ffe4e1", "Misty Rose"),
    NamedColor::new("#f5deb3", "Wheat"),
    NamedColor::new("#d2691e", "Chocolate"),
    NamedColor::new("#ff6347", "Tomato"),
    NamedColor::new("#ff69b4", "Hot Pink"),
    NamedColor::new("#cd5c5c", "Indian Red"),
    NamedColor::new("#f08080", "Light Coral"),
    NamedColor::new("#fa8072", "Salmon"),
    NamedColor::new("#e9967a", "Dark Salmon"),
    NamedColor::new("#ffa07a", "Light Salmon"),
    NamedColor::new("#dc143c", "Crimson"),
    NamedColor::new("#b22222", "Firebrick"),
    NamedColor::new("#8b0000", "Dark Red"),
    NamedColor::new("#ffb6c1", "Light Pink"),
    NamedColor::new("#ff1493", "Deep Pink"),
    NamedColor::new("#c71585", "Medium Violet Red"),
    NamedColor::new("#db7093", "Pale Violet Red"),
    NamedColor::new("#fff0f5", "Lavender Blush"),
    NamedColor::new("#ff7f50", "Coral"),
    NamedColor::new("#ff4500", "Orange Red"),
    NamedColor::new("#ffd700", "Gold"),
    NamedColor::new("#ffffe0", "Light Yellow"),
    NamedColor::new("#fffacd", "Lemon Chiffon"),
    NamedColor::new("#fafad2", "Light Goldenrod Yellow"),
    NamedColor::new("#ffefd5", "Papaya Whip"),
    NamedColor::new("#ffe4b5", "Moccasin"),
    NamedColor::new("#ffdab9", "Peach Puff"),
    NamedColor::new("#eee8aa", "Pale Goldenrod"),
    NamedColor::new("#bdb76b", "Dark Khaki"),
    NamedColor::new("#90ee90", "Light Green"),
    NamedColor::new("#98fb98", "Pale Green"),
    NamedColor::new("#8fbc8f", "Dark Sea Green"),
    NamedColor::new("#00fa9a", "Medium Spring Green"),
    NamedColor::new("#00ff7f", "Spring Green"),
    NamedColor::new("#3cb371", "Medium Sea Green"),
    NamedColor::new("#2e8b57", "Sea Green"),
    NamedColor::new("#228b22", "Forest Green"),
    NamedColor::new("#006400", "Dark Green"),
    NamedColor::new("#9acd32", "Yellow Green"),
    NamedColor::new("#32cd32", "Lime Green"),
    NamedColor::new("#7fff00", "Chartreuse"),
    NamedColor::new("#7cfc00", "Lawn Green"),
    NamedColor::new("#adff2f", "Green Yellow"),
    NamedColor::new("#40e0d0", "Turquoise"),
    NamedColor::new("#48d1cc", "Medium Turquoise"),
    NamedColor::new("#afeeee", "Pale Turquoise"),
    NamedColor::new("#b0e0e6", "Powder Blue"),
    NamedColor::new("#add8e6", "Light Blue"),
    NamedColor::new("#87ceeb", "Sky Blue"),
    NamedColor::new("#87cefa", "Light Sky Blue"),
    NamedColor::new("#00bfff", "Deep Sky Blue"),
    NamedColor::new("#1e90ff", "Dodger Blue"),
    NamedColor::new("#6495ed", "Cornflower Blue"),
    NamedColor::new("#4169e1", "Royal Blue"),
    NamedColor::new("#0000cd", "Medium Blue"),
    NamedColor::new("#00008b", "Dark Blue"),
    NamedColor::new("#191970", "Midnight Blue"),
    NamedColor::new("#7b68ee", "Medium Slate Blue"),
    NamedColor::new("#6a5acd", "Slate Blue"),
    NamedColor::new("#483d8b", "Dark Slate Blue"),
    NamedColor::new("#d8bfd8", "Thistle"),
    NamedColor::new("#dda0dd", "Plum"),
    NamedColor::new("#ee82ee", "Violet"),
    NamedColor::new("#da70d6", "Orchid"),
    NamedColor::new("#ba55d3", "Medium Orchid"),
    NamedColor::new("#9370db", "Medium Purple"),
    NamedColor::new("#8a2be2", "Blue Violet"),
    NamedColor::new("#9400d3", "Dark Violet"),
    NamedColor::new("#9932cc", "Dark Orchid"),
    NamedColor::new("#8b008b", "Dark Magenta"),
    NamedColor::new("#4b0082", "Indigo"),
    NamedColor::new("#f5f5dc", "Beige"),
    NamedColor::new("#ffe4c4", "Bisque"),
    NamedColor::new("#ffebcd", "Blanched Almond"),
    NamedColor::new("#deb887", "Burlywood"),
    NamedColor::new("#d2b48c", "Tan"),
    NamedColor::new("#bc8f8f", "Rosy Brown"),
    NamedColor::new("#f4a460", "Sandy Brown"),
    NamedColor::new("#daa520", "Goldenrod"),
    NamedColor::new("#b8860b", "Dark Goldenrod"),
    NamedColor::new("#cd853f", "Peru"),
    NamedColor::new("#8b4513", "Saddle Brown"),
    NamedColor::new("#a0522d", "Sienna"),
    NamedColor::new("#696969", "Dim Gray"),
    NamedColor::new("#708090", "Slate Gray"),
    NamedColor::new("#778899", "Light Slate Gray"),
    NamedColor::new("#2f4f4f", "Dark Slate Gray"),
    NamedColor::new("#dcdcdc", "Gainsboro"),
    NamedColor::new("#d3d3d3", "Light Gray"),
    NamedColor::new("#a9a9a9", "Dark Gray"),
    NamedColor::new("#fffaf0", "Floral White"),
    NamedColor::new("#fdf5e6", "Old Lace"),
    NamedColor::new("#faf0e6", "Linen"),
    NamedColor::new("#faebd7", "Antique White"),
    NamedColor::new("#f5f5f5", "White Smoke"),
    NamedColor::new("#fff5ee", "Seashell"),
    NamedColor::new("#f0fff0", "Honeydew"),
    NamedColor::new("#f5fffa", "Mint Cream"),
    NamedColor::new("#f0ffff", "Azure"),
    NamedColor::new("#f0f8ff", "Alice Blue"),
    NamedColor::new("#e0ffff", "Light Cyan"),
    NamedColor::new("#fffff0", "Ivory"),
];
