// BLE Keypad — HID Key Usages
//
// Maps the ASCII symbols a keymap can emit to USB HID keyboard usages
// (page 0x07) on a US layout. Report framing stays with the transport.

/// Left Shift bit in the modifier byte.
pub const MOD_LEFT_SHIFT: u8 = 0x02;

/// US layout: ASCII character → (modifier byte, key usage).
pub fn usage_for(symbol: char) -> Option<(u8, u8)> {
    let plain = |key: u8| -> Option<(u8, u8)> { Some((0, key)) };
    let shifted = |key: u8| -> Option<(u8, u8)> { Some((MOD_LEFT_SHIFT, key)) };

    match symbol {
        'a'..='z' => plain(0x04 + (symbol as u8 - b'a')),
        'A'..='Z' => shifted(0x04 + (symbol as u8 - b'A')),
        '1'..='9' => plain(0x1E + (symbol as u8 - b'1')),
        '0' => plain(0x27),
        '\n' => plain(0x28),
        '\t' => plain(0x2B),
        ' ' => plain(0x2C),
        '-' => plain(0x2D),
        '=' => plain(0x2E),
        '[' => plain(0x2F),
        ']' => plain(0x30),
        '\\' => plain(0x31),
        ';' => plain(0x33),
        '\'' => plain(0x34),
        '`' => plain(0x35),
        ',' => plain(0x36),
        '.' => plain(0x37),
        '/' => plain(0x38),
        '!' => shifted(0x1E),
        '@' => shifted(0x1F),
        '#' => shifted(0x20),
        '$' => shifted(0x21),
        '%' => shifted(0x22),
        '^' => shifted(0x23),
        '&' => shifted(0x24),
        '*' => shifted(0x25),
        '(' => shifted(0x26),
        ')' => shifted(0x27),
        '_' => shifted(0x2D),
        '+' => shifted(0x2E),
        '{' => shifted(0x2F),
        '}' => shifted(0x30),
        '|' => shifted(0x31),
        ':' => shifted(0x33),
        '"' => shifted(0x34),
        '~' => shifted(0x35),
        '<' => shifted(0x36),
        '>' => shifted(0x37),
        '?' => shifted(0x38),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_map_to_consecutive_usages() {
        assert_eq!(usage_for('a'), Some((0, 0x04)));
        assert_eq!(usage_for('u'), Some((0, 0x18)));
        assert_eq!(usage_for('z'), Some((0, 0x1D)));
    }

    #[test]
    fn upper_case_adds_left_shift() {
        assert_eq!(usage_for('A'), Some((MOD_LEFT_SHIFT, 0x04)));
        assert_eq!(usage_for('Z'), Some((MOD_LEFT_SHIFT, 0x1D)));
    }

    #[test]
    fn zero_follows_nine() {
        assert_eq!(usage_for('1'), Some((0, 0x1E)));
        assert_eq!(usage_for('9'), Some((0, 0x26)));
        assert_eq!(usage_for('0'), Some((0, 0x27)));
    }

    #[test]
    fn shifted_punctuation_shares_the_unshifted_key() {
        assert_eq!(usage_for(')'), Some((MOD_LEFT_SHIFT, 0x27)));
        assert_eq!(usage_for('!'), Some((MOD_LEFT_SHIFT, 0x1E)));
        assert_eq!(usage_for('?'), Some((MOD_LEFT_SHIFT, 0x38)));
        assert_eq!(usage_for('/'), Some((0, 0x38)));
    }

    #[test]
    fn whitespace_and_control_keys() {
        assert_eq!(usage_for(' '), Some((0, 0x2C)));
        assert_eq!(usage_for('\n'), Some((0, 0x28)));
        assert_eq!(usage_for('\t'), Some((0, 0x2B)));
    }

    #[test]
    fn unmappable_symbols_have_no_usage() {
        assert_eq!(usage_for('é'), None);
        assert_eq!(usage_for('\u{7f}'), None);
        assert_eq!(usage_for('€'), None);
    }

    #[test]
    fn default_keymap_is_fully_mappable() {
        for line in crate::config::KEYMAP {
            assert!(usage_for(line.symbol).is_some(), "no usage for {:?}", line.symbol);
        }
    }
}
