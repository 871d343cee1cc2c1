// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// Decode a Roman numeral using subtractive notation: scan left to
/// right, adding each glyph's value unless the next glyph is strictly
/// greater, in which case it is subtracted.
///
/// Input is assumed well-formed; a malformed numeral decodes to some
/// deterministic value rather than an error. Unknown glyphs count as
/// zero.
pub fn decode(numeral: &str) -> i64 {
    let values: Vec<i64> = numeral.chars().map(glyph).collect();

    let mut total = 0;
    for (i, value) in values.iter().enumerate() {
        if values.get(i + 1).is_some_and(|next| next > value) {
            total -= value;
        } else {
            total += value;
        }
    }
    total
}

const fn glyph(c: char) -> i64 {
    match c {
        'I' => 1,
        'V' => 5,
        'X' => 10,
        'L' => 50,
        'C' => 100,
        'D' => 500,
        'M' => 1000,
        _ => 0,
    }
}
