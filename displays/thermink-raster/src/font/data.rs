// Generated from one 5x7 design; regenerate rather than editing by hand.

/// 6x8 cells, one byte per row, glyph design in the top-left 5x7.
pub(super) const FONT_6X8_DATA: [u8; 95 * 8] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // ' '
    0x20, 0x20, 0x20, 0x20, 0x20, 0x00, 0x20, 0x00, // '!'
    0x50, 0x50, 0x50, 0x00, 0x00, 0x00, 0x00, 0x00, // '"'
    0x50, 0x50, 0xF8, 0x50, 0xF8, 0x50, 0x50, 0x00, // '#'
    0x20, 0x78, 0xA0, 0x70, 0x28, 0xF0, 0x20, 0x00, // '$'
    0xC0, 0xC8, 0x10, 0x20, 0x40, 0x98, 0x18, 0x00, // '%'
    0x60, 0x90, 0xA0, 0x40, 0xA8, 0x90, 0x68, 0x00, // '&'
    0x60, 0x20, 0x40, 0x00, 0x00, 0x00, 0x00, 0x00, // '\''
    0x10, 0x20, 0x40, 0x40, 0x40, 0x20, 0x10, 0x00, // '('
    0x40, 0x20, 0x10, 0x10, 0x10, 0x20, 0x40, 0x00, // ')'
    0x00, 0x20, 0xA8, 0x70, 0xA8, 0x20, 0x00, 0x00, // '*'
    0x00, 0x20, 0x20, 0xF8, 0x20, 0x20, 0x00, 0x00, // '+'
    0x00, 0x00, 0x00, 0x00, 0x60, 0x20, 0x40, 0x00, // ','
    0x00, 0x00, 0x00, 0xF8, 0x00, 0x00, 0x00, 0x00, // '-'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x60, 0x60, 0x00, // '.'
    0x00, 0x08, 0x10, 0x20, 0x40, 0x80, 0x00, 0x00, // '/'
    0x70, 0x88, 0x98, 0xA8, 0xC8, 0x88, 0x70, 0x00, // '0'
    0x20, 0x60, 0x20, 0x20, 0x20, 0x20, 0x70, 0x00, // '1'
    0x70, 0x88, 0x08, 0x10, 0x20, 0x40, 0xF8, 0x00, // '2'
    0xF8, 0x10, 0x20, 0x10, 0x08, 0x88, 0x70, 0x00, // '3'
    0x10, 0x30, 0x50, 0x90, 0xF8, 0x10, 0x10, 0x00, // '4'
    0xF8, 0x80, 0xF0, 0x08, 0x08, 0x88, 0x70, 0x00, // '5'
    0x30, 0x40, 0x80, 0xF0, 0x88, 0x88, 0x70, 0x00, // '6'
    0xF8, 0x08, 0x10, 0x20, 0x40, 0x40, 0x40, 0x00, // '7'
    0x70, 0x88, 0x88, 0x70, 0x88, 0x88, 0x70, 0x00, // '8'
    0x70, 0x88, 0x88, 0x78, 0x08, 0x10, 0x60, 0x00, // '9'
    0x00, 0x60, 0x60, 0x00, 0x60, 0x60, 0x00, 0x00, // ':'
    0x00, 0x60, 0x60, 0x00, 0x60, 0x20, 0x40, 0x00, // ';'
    0x10, 0x20, 0x40, 0x80, 0x40, 0x20, 0x10, 0x00, // '<'
    0x00, 0x00, 0xF8, 0x00, 0xF8, 0x00, 0x00, 0x00, // '='
    0x40, 0x20, 0x10, 0x08, 0x10, 0x20, 0x40, 0x00, // '>'
    0x70, 0x88, 0x08, 0x10, 0x20, 0x00, 0x20, 0x00, // '?'
    0x70, 0x88, 0x08, 0x68, 0xA8, 0xA8, 0x70, 0x00, // '@'
    0x70, 0x88, 0x88, 0xF8, 0x88, 0x88, 0x88, 0x00, // 'A'
    0xF0, 0x88, 0x88, 0xF0, 0x88, 0x88, 0xF0, 0x00, // 'B'
    0x70, 0x88, 0x80, 0x80, 0x80, 0x88, 0x70, 0x00, // 'C'
    0xE0, 0x90, 0x88, 0x88, 0x88, 0x90, 0xE0, 0x00, // 'D'
    0xF8, 0x80, 0x80, 0xF0, 0x80, 0x80, 0xF8, 0x00, // 'E'
    0xF8, 0x80, 0x80, 0xF0, 0x80, 0x80, 0x80, 0x00, // 'F'
    0x70, 0x88, 0x80, 0xB8, 0x88, 0x88, 0x78, 0x00, // 'G'
    0x88, 0x88, 0x88, 0xF8, 0x88, 0x88, 0x88, 0x00, // 'H'
    0x70, 0x20, 0x20, 0x20, 0x20, 0x20, 0x70, 0x00, // 'I'
    0x38, 0x10, 0x10, 0x10, 0x10, 0x90, 0x60, 0x00, // 'J'
    0x88, 0x90, 0xA0, 0xC0, 0xA0, 0x90, 0x88, 0x00, // 'K'
    0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0xF8, 0x00, // 'L'
    0x88, 0xD8, 0xA8, 0xA8, 0x88, 0x88, 0x88, 0x00, // 'M'
    0x88, 0x88, 0xC8, 0xA8, 0x98, 0x88, 0x88, 0x00, // 'N'
    0x70, 0x88, 0x88, 0x88, 0x88, 0x88, 0x70, 0x00, // 'O'
    0xF0, 0x88, 0x88, 0xF0, 0x80, 0x80, 0x80, 0x00, // 'P'
    0x70, 0x88, 0x88, 0x88, 0xA8, 0x90, 0x68, 0x00, // 'Q'
    0xF0, 0x88, 0x88, 0xF0, 0xA0, 0x90, 0x88, 0x00, // 'R'
    0x78, 0x80, 0x80, 0x70, 0x08, 0x08, 0xF0, 0x00, // 'S'
    0xF8, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x00, // 'T'
    0x88, 0x88, 0x88, 0x88, 0x88, 0x88, 0x70, 0x00, // 'U'
    0x88, 0x88, 0x88, 0x88, 0x88, 0x50, 0x20, 0x00, // 'V'
    0x88, 0x88, 0x88, 0xA8, 0xA8, 0xA8, 0x50, 0x00, // 'W'
    0x88, 0x88, 0x50, 0x20, 0x50, 0x88, 0x88, 0x00, // 'X'
    0x88, 0x88, 0x88, 0x50, 0x20, 0x20, 0x20, 0x00, // 'Y'
    0xF8, 0x08, 0x10, 0x20, 0x40, 0x80, 0xF8, 0x00, // 'Z'
    0x70, 0x40, 0x40, 0x40, 0x40, 0x40, 0x70, 0x00, // '['
    0x00, 0x80, 0x40, 0x20, 0x10, 0x08, 0x00, 0x00, // '\\'
    0x70, 0x10, 0x10, 0x10, 0x10, 0x10, 0x70, 0x00, // ']'
    0x20, 0x50, 0x88, 0x00, 0x00, 0x00, 0x00, 0x00, // '^'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xF8, 0x00, // '_'
    0x40, 0x20, 0x10, 0x00, 0x00, 0x00, 0x00, 0x00, // '`'
    0x00, 0x00, 0x70, 0x08, 0x78, 0x88, 0x78, 0x00, // 'a'
    0x80, 0x80, 0xB0, 0xC8, 0x88, 0x88, 0xF0, 0x00, // 'b'
    0x00, 0x00, 0x70, 0x80, 0x80, 0x88, 0x70, 0x00, // 'c'
    0x08, 0x08, 0x68, 0x98, 0x88, 0x88, 0x78, 0x00, // 'd'
    0x00, 0x00, 0x70, 0x88, 0xF8, 0x80, 0x70, 0x00, // 'e'
    0x30, 0x48, 0x40, 0xE0, 0x40, 0x40, 0x40, 0x00, // 'f'
    0x00, 0x78, 0x88, 0x88, 0x78, 0x08, 0x70, 0x00, // 'g'
    0x80, 0x80, 0xB0, 0xC8, 0x88, 0x88, 0x88, 0x00, // 'h'
    0x20, 0x00, 0x60, 0x20, 0x20, 0x20, 0x70, 0x00, // 'i'
    0x10, 0x00, 0x30, 0x10, 0x10, 0x90, 0x60, 0x00, // 'j'
    0x80, 0x80, 0x90, 0xA0, 0xC0, 0xA0, 0x90, 0x00, // 'k'
    0x60, 0x20, 0x20, 0x20, 0x20, 0x20, 0x70, 0x00, // 'l'
    0x00, 0x00, 0xD0, 0xA8, 0xA8, 0x88, 0x88, 0x00, // 'm'
    0x00, 0x00, 0xB0, 0xC8, 0x88, 0x88, 0x88, 0x00, // 'n'
    0x00, 0x00, 0x70, 0x88, 0x88, 0x88, 0x70, 0x00, // 'o'
    0x00, 0x00, 0xF0, 0x88, 0xF0, 0x80, 0x80, 0x00, // 'p'
    0x00, 0x00, 0x68, 0x98, 0x78, 0x08, 0x08, 0x00, // 'q'
    0x00, 0x00, 0xB0, 0xC8, 0x80, 0x80, 0x80, 0x00, // 'r'
    0x00, 0x00, 0x70, 0x80, 0x70, 0x08, 0xF0, 0x00, // 's'
    0x40, 0x40, 0xE0, 0x40, 0x40, 0x48, 0x30, 0x00, // 't'
    0x00, 0x00, 0x88, 0x88, 0x88, 0x98, 0x68, 0x00, // 'u'
    0x00, 0x00, 0x88, 0x88, 0x88, 0x50, 0x20, 0x00, // 'v'
    0x00, 0x00, 0x88, 0x88, 0xA8, 0xA8, 0x50, 0x00, // 'w'
    0x00, 0x00, 0x88, 0x50, 0x20, 0x50, 0x88, 0x00, // 'x'
    0x00, 0x00, 0x88, 0x88, 0x78, 0x08, 0x70, 0x00, // 'y'
    0x00, 0x00, 0xF8, 0x10, 0x20, 0x40, 0xF8, 0x00, // 'z'
    0x10, 0x20, 0x20, 0x40, 0x20, 0x20, 0x10, 0x00, // '{'
    0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x00, // '|'
    0x40, 0x20, 0x20, 0x10, 0x20, 0x20, 0x40, 0x00, // '}'
    0x00, 0x00, 0x40, 0xA8, 0x10, 0x00, 0x00, 0x00, // '~'
];

/// 8x10 cells, one byte per row, a 7x9 design in the top-left corner.
/// The 5x7 strokes are widened by repeating columns 1 and 3 and rows 1 and 5.
pub(super) const FONT_8X10_DATA: [u8; 95 * 10] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // ' '
    0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x00, 0x00, 0x10, 0x00, // '!'
    0x6C, 0x6C, 0x6C, 0x6C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // '"'
    0x6C, 0x6C, 0x6C, 0xFE, 0x6C, 0xFE, 0x6C, 0x6C, 0x6C, 0x00, // '#'
    0x10, 0x7E, 0x7E, 0x90, 0x7C, 0x12, 0xFC, 0xFC, 0x10, 0x00, // '$'
    0xE0, 0xE2, 0xE2, 0x0C, 0x10, 0x60, 0x8E, 0x8E, 0x0E, 0x00, // '%'
    0x70, 0x8C, 0x8C, 0x90, 0x60, 0x92, 0x8C, 0x8C, 0x72, 0x00, // '&'
    0x70, 0x10, 0x10, 0x60, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // '\''
    0x0C, 0x10, 0x10, 0x60, 0x60, 0x60, 0x10, 0x10, 0x0C, 0x00, // '('
    0x60, 0x10, 0x10, 0x0C, 0x0C, 0x0C, 0x10, 0x10, 0x60, 0x00, // ')'
    0x00, 0x10, 0x10, 0x92, 0x7C, 0x92, 0x10, 0x10, 0x00, 0x00, // '*'
    0x00, 0x10, 0x10, 0x10, 0xFE, 0x10, 0x10, 0x10, 0x00, 0x00, // '+'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x70, 0x10, 0x10, 0x60, 0x00, // ','
    0x00, 0x00, 0x00, 0x00, 0xFE, 0x00, 0x00, 0x00, 0x00, 0x00, // '-'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x70, 0x70, 0x70, 0x00, // '.'
    0x00, 0x02, 0x02, 0x0C, 0x10, 0x60, 0x80, 0x80, 0x00, 0x00, // '/'
    0x7C, 0x82, 0x82, 0x8E, 0x92, 0xE2, 0x82, 0x82, 0x7C, 0x00, // '0'
    0x10, 0x70, 0x70, 0x10, 0x10, 0x10, 0x10, 0x10, 0x7C, 0x00, // '1'
    0x7C, 0x82, 0x82, 0x02, 0x0C, 0x10, 0x60, 0x60, 0xFE, 0x00, // '2'
    0xFE, 0x0C, 0x0C, 0x10, 0x0C, 0x02, 0x82, 0x82, 0x7C, 0x00, // '3'
    0x0C, 0x1C, 0x1C, 0x6C, 0x8C, 0xFE, 0x0C, 0x0C, 0x0C, 0x00, // '4'
    0xFE, 0x80, 0x80, 0xFC, 0x02, 0x02, 0x82, 0x82, 0x7C, 0x00, // '5'
    0x1C, 0x60, 0x60, 0x80, 0xFC, 0x82, 0x82, 0x82, 0x7C, 0x00, // '6'
    0xFE, 0x02, 0x02, 0x0C, 0x10, 0x60, 0x60, 0x60, 0x60, 0x00, // '7'
    0x7C, 0x82, 0x82, 0x82, 0x7C, 0x82, 0x82, 0x82, 0x7C, 0x00, // '8'
    0x7C, 0x82, 0x82, 0x82, 0x7E, 0x02, 0x0C, 0x0C, 0x70, 0x00, // '9'
    0x00, 0x70, 0x70, 0x70, 0x00, 0x70, 0x70, 0x70, 0x00, 0x00, // ':'
    0x00, 0x70, 0x70, 0x70, 0x00, 0x70, 0x10, 0x10, 0x60, 0x00, // ';'
    0x0C, 0x10, 0x10, 0x60, 0x80, 0x60, 0x10, 0x10, 0x0C, 0x00, // '<'
    0x00, 0x00, 0x00, 0xFE, 0x00, 0xFE, 0x00, 0x00, 0x00, 0x00, // '='
    0x60, 0x10, 0x10, 0x0C, 0x02, 0x0C, 0x10, 0x10, 0x60, 0x00, // '>'
    0x7C, 0x82, 0x82, 0x02, 0x0C, 0x10, 0x00, 0x00, 0x10, 0x00, // '?'
    0x7C, 0x82, 0x82, 0x02, 0x72, 0x92, 0x92, 0x92, 0x7C, 0x00, // '@'
    0x7C, 0x82, 0x82, 0x82, 0xFE, 0x82, 0x82, 0x82, 0x82, 0x00, // 'A'
    0xFC, 0x82, 0x82, 0x82, 0xFC, 0x82, 0x82, 0x82, 0xFC, 0x00, // 'B'
    0x7C, 0x82, 0x82, 0x80, 0x80, 0x80, 0x82, 0x82, 0x7C, 0x00, // 'C'
    0xF0, 0x8C, 0x8C, 0x82, 0x82, 0x82, 0x8C, 0x8C, 0xF0, 0x00, // 'D'
    0xFE, 0x80, 0x80, 0x80, 0xFC, 0x80, 0x80, 0x80, 0xFE, 0x00, // 'E'
    0xFE, 0x80, 0x80, 0x80, 0xFC, 0x80, 0x80, 0x80, 0x80, 0x00, // 'F'
    0x7C, 0x82, 0x82, 0x80, 0x9E, 0x82, 0x82, 0x82, 0x7E, 0x00, // 'G'
    0x82, 0x82, 0x82, 0x82, 0xFE, 0x82, 0x82, 0x82, 0x82, 0x00, // 'H'
    0x7C, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x7C, 0x00, // 'I'
    0x1E, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x8C, 0x8C, 0x70, 0x00, // 'J'
    0x82, 0x8C, 0x8C, 0x90, 0xE0, 0x90, 0x8C, 0x8C, 0x82, 0x00, // 'K'
    0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0xFE, 0x00, // 'L'
    0x82, 0xEE, 0xEE, 0x92, 0x92, 0x82, 0x82, 0x82, 0x82, 0x00, // 'M'
    0x82, 0x82, 0x82, 0xE2, 0x92, 0x8E, 0x82, 0x82, 0x82, 0x00, // 'N'
    0x7C, 0x82, 0x82, 0x82, 0x82, 0x82, 0x82, 0x82, 0x7C, 0x00, // 'O'
    0xFC, 0x82, 0x82, 0x82, 0xFC, 0x80, 0x80, 0x80, 0x80, 0x00, // 'P'
    0x7C, 0x82, 0x82, 0x82, 0x82, 0x92, 0x8C, 0x8C, 0x72, 0x00, // 'Q'
    0xFC, 0x82, 0x82, 0x82, 0xFC, 0x90, 0x8C, 0x8C, 0x82, 0x00, // 'R'
    0x7E, 0x80, 0x80, 0x80, 0x7C, 0x02, 0x02, 0x02, 0xFC, 0x00, // 'S'
    0xFE, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x00, // 'T'
    0x82, 0x82, 0x82, 0x82, 0x82, 0x82, 0x82, 0x82, 0x7C, 0x00, // 'U'
    0x82, 0x82, 0x82, 0x82, 0x82, 0x82, 0x6C, 0x6C, 0x10, 0x00, // 'V'
    0x82, 0x82, 0x82, 0x82, 0x92, 0x92, 0x92, 0x92, 0x6C, 0x00, // 'W'
    0x82, 0x82, 0x82, 0x6C, 0x10, 0x6C, 0x82, 0x82, 0x82, 0x00, // 'X'
    0x82, 0x82, 0x82, 0x82, 0x6C, 0x10, 0x10, 0x10, 0x10, 0x00, // 'Y'
    0xFE, 0x02, 0x02, 0x0C, 0x10, 0x60, 0x80, 0x80, 0xFE, 0x00, // 'Z'
    0x7C, 0x60, 0x60, 0x60, 0x60, 0x60, 0x60, 0x60, 0x7C, 0x00, // '['
    0x00, 0x80, 0x80, 0x60, 0x10, 0x0C, 0x02, 0x02, 0x00, 0x00, // '\\'
    0x7C, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x7C, 0x00, // ']'
    0x10, 0x6C, 0x6C, 0x82, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // '^'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFE, 0x00, // '_'
    0x60, 0x10, 0x10, 0x0C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // '`'
    0x00, 0x00, 0x00, 0x7C, 0x02, 0x7E, 0x82, 0x82, 0x7E, 0x00, // 'a'
    0x80, 0x80, 0x80, 0x9C, 0xE2, 0x82, 0x82, 0x82, 0xFC, 0x00, // 'b'
    0x00, 0x00, 0x00, 0x7C, 0x80, 0x80, 0x82, 0x82, 0x7C, 0x00, // 'c'
    0x02, 0x02, 0x02, 0x72, 0x8E, 0x82, 0x82, 0x82, 0x7E, 0x00, // 'd'
    0x00, 0x00, 0x00, 0x7C, 0x82, 0xFE, 0x80, 0x80, 0x7C, 0x00, // 'e'
    0x1C, 0x62, 0x62, 0x60, 0xF0, 0x60, 0x60, 0x60, 0x60, 0x00, // 'f'
    0x00, 0x7E, 0x7E, 0x82, 0x82, 0x7E, 0x02, 0x02, 0x7C, 0x00, // 'g'
    0x80, 0x80, 0x80, 0x9C, 0xE2, 0x82, 0x82, 0x82, 0x82, 0x00, // 'h'
    0x10, 0x00, 0x00, 0x70, 0x10, 0x10, 0x10, 0x10, 0x7C, 0x00, // 'i'
    0x0C, 0x00, 0x00, 0x1C, 0x0C, 0x0C, 0x8C, 0x8C, 0x70, 0x00, // 'j'
    0x80, 0x80, 0x80, 0x8C, 0x90, 0xE0, 0x90, 0x90, 0x8C, 0x00, // 'k'
    0x70, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x7C, 0x00, // 'l'
    0x00, 0x00, 0x00, 0xEC, 0x92, 0x92, 0x82, 0x82, 0x82, 0x00, // 'm'
    0x00, 0x00, 0x00, 0x9C, 0xE2, 0x82, 0x82, 0x82, 0x82, 0x00, // 'n'
    0x00, 0x00, 0x00, 0x7C, 0x82, 0x82, 0x82, 0x82, 0x7C, 0x00, // 'o'
    0x00, 0x00, 0x00, 0xFC, 0x82, 0xFC, 0x80, 0x80, 0x80, 0x00, // 'p'
    0x00, 0x00, 0x00, 0x72, 0x8E, 0x7E, 0x02, 0x02, 0x02, 0x00, // 'q'
    0x00, 0x00, 0x00, 0x9C, 0xE2, 0x80, 0x80, 0x80, 0x80, 0x00, // 'r'
    0x00, 0x00, 0x00, 0x7C, 0x80, 0x7C, 0x02, 0x02, 0xFC, 0x00, // 's'
    0x60, 0x60, 0x60, 0xF0, 0x60, 0x60, 0x62, 0x62, 0x1C, 0x00, // 't'
    0x00, 0x00, 0x00, 0x82, 0x82, 0x82, 0x8E, 0x8E, 0x72, 0x00, // 'u'
    0x00, 0x00, 0x00, 0x82, 0x82, 0x82, 0x6C, 0x6C, 0x10, 0x00, // 'v'
    0x00, 0x00, 0x00, 0x82, 0x82, 0x92, 0x92, 0x92, 0x6C, 0x00, // 'w'
    0x00, 0x00, 0x00, 0x82, 0x6C, 0x10, 0x6C, 0x6C, 0x82, 0x00, // 'x'
    0x00, 0x00, 0x00, 0x82, 0x82, 0x7E, 0x02, 0x02, 0x7C, 0x00, // 'y'
    0x00, 0x00, 0x00, 0xFE, 0x0C, 0x10, 0x60, 0x60, 0xFE, 0x00, // 'z'
    0x0C, 0x10, 0x10, 0x10, 0x60, 0x10, 0x10, 0x10, 0x0C, 0x00, // '{'
    0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x00, // '|'
    0x60, 0x10, 0x10, 0x10, 0x0C, 0x10, 0x10, 0x10, 0x60, 0x00, // '}'
    0x00, 0x00, 0x00, 0x60, 0x92, 0x0C, 0x00, 0x00, 0x00, 0x00, // '~'
];

/// 12x16 cells, two bytes per row, the 6x8 cells scaled by two.
pub(super) const FONT_12X16_DATA: [u8; 95 * 32] = [
    // ' '
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '!'
    0x0C, 0x00, 0x0C, 0x00, 0x0C, 0x00, 0x0C, 0x00,
    0x0C, 0x00, 0x0C, 0x00, 0x0C, 0x00, 0x0C, 0x00,
    0x0C, 0x00, 0x0C, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x0C, 0x00, 0x0C, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '"'
    0x33, 0x00, 0x33, 0x00, 0x33, 0x00, 0x33, 0x00,
    0x33, 0x00, 0x33, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '#'
    0x33, 0x00, 0x33, 0x00, 0x33, 0x00, 0x33, 0x00,
    0xFF, 0xC0, 0xFF, 0xC0, 0x33, 0x00, 0x33, 0x00,
    0xFF, 0xC0, 0xFF, 0xC0, 0x33, 0x00, 0x33, 0x00,
    0x33, 0x00, 0x33, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '$'
    0x0C, 0x00, 0x0C, 0x00, 0x3F, 0xC0, 0x3F, 0xC0,
    0xCC, 0x00, 0xCC, 0x00, 0x3F, 0x00, 0x3F, 0x00,
    0x0C, 0xC0, 0x0C, 0xC0, 0xFF, 0x00, 0xFF, 0x00,
    0x0C, 0x00, 0x0C, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '%'
    0xF0, 0x00, 0xF0, 0x00, 0xF0, 0xC0, 0xF0, 0xC0,
    0x03, 0x00, 0x03, 0x00, 0x0C, 0x00, 0x0C, 0x00,
    0x30, 0x00, 0x30, 0x00, 0xC3, 0xC0, 0xC3, 0xC0,
    0x03, 0xC0, 0x03, 0xC0, 0x00, 0x00, 0x00, 0x00,
    // '&'
    0x3C, 0x00, 0x3C, 0x00, 0xC3, 0x00, 0xC3, 0x00,
    0xCC, 0x00, 0xCC, 0x00, 0x30, 0x00, 0x30, 0x00,
    0xCC, 0xC0, 0xCC, 0xC0, 0xC3, 0x00, 0xC3, 0x00,
    0x3C, 0xC0, 0x3C, 0xC0, 0x00, 0x00, 0x00, 0x00,
    // '\''
    0x3C, 0x00, 0x3C, 0x00, 0x0C, 0x00, 0x0C, 0x00,
    0x30, 0x00, 0x30, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '('
    0x03, 0x00, 0x03, 0x00, 0x0C, 0x00, 0x0C, 0x00,
    0x30, 0x00, 0x30, 0x00, 0x30, 0x00, 0x30, 0x00,
    0x30, 0x00, 0x30, 0x00, 0x0C, 0x00, 0x0C, 0x00,
    0x03, 0x00, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00,
    // ')'
    0x30, 0x00, 0x30, 0x00, 0x0C, 0x00, 0x0C, 0x00,
    0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00,
    0x03, 0x00, 0x03, 0x00, 0x0C, 0x00, 0x0C, 0x00,
    0x30, 0x00, 0x30, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '*'
    0x00, 0x00, 0x00, 0x00, 0x0C, 0x00, 0x0C, 0x00,
    0xCC, 0xC0, 0xCC, 0xC0, 0x3F, 0x00, 0x3F, 0x00,
    0xCC, 0xC0, 0xCC, 0xC0, 0x0C, 0x00, 0x0C, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '+'
    0x00, 0x00, 0x00, 0x00, 0x0C, 0x00, 0x0C, 0x00,
    0x0C, 0x00, 0x0C, 0x00, 0xFF, 0xC0, 0xFF, 0xC0,
    0x0C, 0x00, 0x0C, 0x00, 0x0C, 0x00, 0x0C, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // ','
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x3C, 0x00, 0x3C, 0x00, 0x0C, 0x00, 0x0C, 0x00,
    0x30, 0x00, 0x30, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '-'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0xFF, 0xC0, 0xFF, 0xC0,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '.'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x3C, 0x00, 0x3C, 0x00,
    0x3C, 0x00, 0x3C, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '/'
    0x00, 0x00, 0x00, 0x00, 0x00, 0xC0, 0x00, 0xC0,
    0x03, 0x00, 0x03, 0x00, 0x0C, 0x00, 0x0C, 0x00,
    0x30, 0x00, 0x30, 0x00, 0xC0, 0x00, 0xC0, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '0'
    0x3F, 0x00, 0x3F, 0x00, 0xC0, 0xC0, 0xC0, 0xC0,
    0xC3, 0xC0, 0xC3, 0xC0, 0xCC, 0xC0, 0xCC, 0xC0,
    0xF0, 0xC0, 0xF0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0,
    0x3F, 0x00, 0x3F, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '1'
    0x0C, 0x00, 0x0C, 0x00, 0x3C, 0x00, 0x3C, 0x00,
    0x0C, 0x00, 0x0C, 0x00, 0x0C, 0x00, 0x0C, 0x00,
    0x0C, 0x00, 0x0C, 0x00, 0x0C, 0x00, 0x0C, 0x00,
    0x3F, 0x00, 0x3F, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '2'
    0x3F, 0x00, 0x3F, 0x00, 0xC0, 0xC0, 0xC0, 0xC0,
    0x00, 0xC0, 0x00, 0xC0, 0x03, 0x00, 0x03, 0x00,
    0x0C, 0x00, 0x0C, 0x00, 0x30, 0x00, 0x30, 0x00,
    0xFF, 0xC0, 0xFF, 0xC0, 0x00, 0x00, 0x00, 0x00,
    // '3'
    0xFF, 0xC0, 0xFF, 0xC0, 0x03, 0x00, 0x03, 0x00,
    0x0C, 0x00, 0x0C, 0x00, 0x03, 0x00, 0x03, 0x00,
    0x00, 0xC0, 0x00, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0,
    0x3F, 0x00, 0x3F, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '4'
    0x03, 0x00, 0x03, 0x00, 0x0F, 0x00, 0x0F, 0x00,
    0x33, 0x00, 0x33, 0x00, 0xC3, 0x00, 0xC3, 0x00,
    0xFF, 0xC0, 0xFF, 0xC0, 0x03, 0x00, 0x03, 0x00,
    0x03, 0x00, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '5'
    0xFF, 0xC0, 0xFF, 0xC0, 0xC0, 0x00, 0xC0, 0x00,
    0xFF, 0x00, 0xFF, 0x00, 0x00, 0xC0, 0x00, 0xC0,
    0x00, 0xC0, 0x00, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0,
    0x3F, 0x00, 0x3F, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '6'
    0x0F, 0x00, 0x0F, 0x00, 0x30, 0x00, 0x30, 0x00,
    0xC0, 0x00, 0xC0, 0x00, 0xFF, 0x00, 0xFF, 0x00,
    0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0,
    0x3F, 0x00, 0x3F, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '7'
    0xFF, 0xC0, 0xFF, 0xC0, 0x00, 0xC0, 0x00, 0xC0,
    0x03, 0x00, 0x03, 0x00, 0x0C, 0x00, 0x0C, 0x00,
    0x30, 0x00, 0x30, 0x00, 0x30, 0x00, 0x30, 0x00,
    0x30, 0x00, 0x30, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '8'
    0x3F, 0x00, 0x3F, 0x00, 0xC0, 0xC0, 0xC0, 0xC0,
    0xC0, 0xC0, 0xC0, 0xC0, 0x3F, 0x00, 0x3F, 0x00,
    0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0,
    0x3F, 0x00, 0x3F, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '9'
    0x3F, 0x00, 0x3F, 0x00, 0xC0, 0xC0, 0xC0, 0xC0,
    0xC0, 0xC0, 0xC0, 0xC0, 0x3F, 0xC0, 0x3F, 0xC0,
    0x00, 0xC0, 0x00, 0xC0, 0x03, 0x00, 0x03, 0x00,
    0x3C, 0x00, 0x3C, 0x00, 0x00, 0x00, 0x00, 0x00,
    // ':'
    0x00, 0x00, 0x00, 0x00, 0x3C, 0x00, 0x3C, 0x00,
    0x3C, 0x00, 0x3C, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x3C, 0x00, 0x3C, 0x00, 0x3C, 0x00, 0x3C, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // ';'
    0x00, 0x00, 0x00, 0x00, 0x3C, 0x00, 0x3C, 0x00,
    0x3C, 0x00, 0x3C, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x3C, 0x00, 0x3C, 0x00, 0x0C, 0x00, 0x0C, 0x00,
    0x30, 0x00, 0x30, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '<'
    0x03, 0x00, 0x03, 0x00, 0x0C, 0x00, 0x0C, 0x00,
    0x30, 0x00, 0x30, 0x00, 0xC0, 0x00, 0xC0, 0x00,
    0x30, 0x00, 0x30, 0x00, 0x0C, 0x00, 0x0C, 0x00,
    0x03, 0x00, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '='
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0xFF, 0xC0, 0xFF, 0xC0, 0x00, 0x00, 0x00, 0x00,
    0xFF, 0xC0, 0xFF, 0xC0, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '>'
    0x30, 0x00, 0x30, 0x00, 0x0C, 0x00, 0x0C, 0x00,
    0x03, 0x00, 0x03, 0x00, 0x00, 0xC0, 0x00, 0xC0,
    0x03, 0x00, 0x03, 0x00, 0x0C, 0x00, 0x0C, 0x00,
    0x30, 0x00, 0x30, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '?'
    0x3F, 0x00, 0x3F, 0x00, 0xC0, 0xC0, 0xC0, 0xC0,
    0x00, 0xC0, 0x00, 0xC0, 0x03, 0x00, 0x03, 0x00,
    0x0C, 0x00, 0x0C, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x0C, 0x00, 0x0C, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '@'
    0x3F, 0x00, 0x3F, 0x00, 0xC0, 0xC0, 0xC0, 0xC0,
    0x00, 0xC0, 0x00, 0xC0, 0x3C, 0xC0, 0x3C, 0xC0,
    0xCC, 0xC0, 0xCC, 0xC0, 0xCC, 0xC0, 0xCC, 0xC0,
    0x3F, 0x00, 0x3F, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 'A'
    0x3F, 0x00, 0x3F, 0x00, 0xC0, 0xC0, 0xC0, 0xC0,
    0xC0, 0xC0, 0xC0, 0xC0, 0xFF, 0xC0, 0xFF, 0xC0,
    0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0,
    0xC0, 0xC0, 0xC0, 0xC0, 0x00, 0x00, 0x00, 0x00,
    // 'B'
    0xFF, 0x00, 0xFF, 0x00, 0xC0, 0xC0, 0xC0, 0xC0,
    0xC0, 0xC0, 0xC0, 0xC0, 0xFF, 0x00, 0xFF, 0x00,
    0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0,
    0xFF, 0x00, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 'C'
    0x3F, 0x00, 0x3F, 0x00, 0xC0, 0xC0, 0xC0, 0xC0,
    0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00,
    0xC0, 0x00, 0xC0, 0x00, 0xC0, 0xC0, 0xC0, 0xC0,
    0x3F, 0x00, 0x3F, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 'D'
    0xFC, 0x00, 0xFC, 0x00, 0xC3, 0x00, 0xC3, 0x00,
    0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0,
    0xC0, 0xC0, 0xC0, 0xC0, 0xC3, 0x00, 0xC3, 0x00,
    0xFC, 0x00, 0xFC, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 'E'
    0xFF, 0xC0, 0xFF, 0xC0, 0xC0, 0x00, 0xC0, 0x00,
    0xC0, 0x00, 0xC0, 0x00, 0xFF, 0x00, 0xFF, 0x00,
    0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00,
    0xFF, 0xC0, 0xFF, 0xC0, 0x00, 0x00, 0x00, 0x00,
    // 'F'
    0xFF, 0xC0, 0xFF, 0xC0, 0xC0, 0x00, 0xC0, 0x00,
    0xC0, 0x00, 0xC0, 0x00, 0xFF, 0x00, 0xFF, 0x00,
    0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00,
    0xC0, 0x00, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 'G'
    0x3F, 0x00, 0x3F, 0x00, 0xC0, 0xC0, 0xC0, 0xC0,
    0xC0, 0x00, 0xC0, 0x00, 0xCF, 0xC0, 0xCF, 0xC0,
    0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0,
    0x3F, 0xC0, 0x3F, 0xC0, 0x00, 0x00, 0x00, 0x00,
    // 'H'
    0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0,
    0xC0, 0xC0, 0xC0, 0xC0, 0xFF, 0xC0, 0xFF, 0xC0,
    0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0,
    0xC0, 0xC0, 0xC0, 0xC0, 0x00, 0x00, 0x00, 0x00,
    // 'I'
    0x3F, 0x00, 0x3F, 0x00, 0x0C, 0x00, 0x0C, 0x00,
    0x0C, 0x00, 0x0C, 0x00, 0x0C, 0x00, 0x0C, 0x00,
    0x0C, 0x00, 0x0C, 0x00, 0x0C, 0x00, 0x0C, 0x00,
    0x3F, 0x00, 0x3F, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 'J'
    0x0F, 0xC0, 0x0F, 0xC0, 0x03, 0x00, 0x03, 0x00,
    0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00,
    0x03, 0x00, 0x03, 0x00, 0xC3, 0x00, 0xC3, 0x00,
    0x3C, 0x00, 0x3C, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 'K'
    0xC0, 0xC0, 0xC0, 0xC0, 0xC3, 0x00, 0xC3, 0x00,
    0xCC, 0x00, 0xCC, 0x00, 0xF0, 0x00, 0xF0, 0x00,
    0xCC, 0x00, 0xCC, 0x00, 0xC3, 0x00, 0xC3, 0x00,
    0xC0, 0xC0, 0xC0, 0xC0, 0x00, 0x00, 0x00, 0x00,
    // 'L'
    0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00,
    0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00,
    0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00,
    0xFF, 0xC0, 0xFF, 0xC0, 0x00, 0x00, 0x00, 0x00,
    // 'M'
    0xC0, 0xC0, 0xC0, 0xC0, 0xF3, 0xC0, 0xF3, 0xC0,
    0xCC, 0xC0, 0xCC, 0xC0, 0xCC, 0xC0, 0xCC, 0xC0,
    0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0,
    0xC0, 0xC0, 0xC0, 0xC0, 0x00, 0x00, 0x00, 0x00,
    // 'N'
    0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0,
    0xF0, 0xC0, 0xF0, 0xC0, 0xCC, 0xC0, 0xCC, 0xC0,
    0xC3, 0xC0, 0xC3, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0,
    0xC0, 0xC0, 0xC0, 0xC0, 0x00, 0x00, 0x00, 0x00,
    // 'O'
    0x3F, 0x00, 0x3F, 0x00, 0xC0, 0xC0, 0xC0, 0xC0,
    0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0,
    0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0,
    0x3F, 0x00, 0x3F, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 'P'
    0xFF, 0x00, 0xFF, 0x00, 0xC0, 0xC0, 0xC0, 0xC0,
    0xC0, 0xC0, 0xC0, 0xC0, 0xFF, 0x00, 0xFF, 0x00,
    0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00,
    0xC0, 0x00, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 'Q'
    0x3F, 0x00, 0x3F, 0x00, 0xC0, 0xC0, 0xC0, 0xC0,
    0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0,
    0xCC, 0xC0, 0xCC, 0xC0, 0xC3, 0x00, 0xC3, 0x00,
    0x3C, 0xC0, 0x3C, 0xC0, 0x00, 0x00, 0x00, 0x00,
    // 'R'
    0xFF, 0x00, 0xFF, 0x00, 0xC0, 0xC0, 0xC0, 0xC0,
    0xC0, 0xC0, 0xC0, 0xC0, 0xFF, 0x00, 0xFF, 0x00,
    0xCC, 0x00, 0xCC, 0x00, 0xC3, 0x00, 0xC3, 0x00,
    0xC0, 0xC0, 0xC0, 0xC0, 0x00, 0x00, 0x00, 0x00,
    // 'S'
    0x3F, 0xC0, 0x3F, 0xC0, 0xC0, 0x00, 0xC0, 0x00,
    0xC0, 0x00, 0xC0, 0x00, 0x3F, 0x00, 0x3F, 0x00,
    0x00, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xC0,
    0xFF, 0x00, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 'T'
    0xFF, 0xC0, 0xFF, 0xC0, 0x0C, 0x00, 0x0C, 0x00,
    0x0C, 0x00, 0x0C, 0x00, 0x0C, 0x00, 0x0C, 0x00,
    0x0C, 0x00, 0x0C, 0x00, 0x0C, 0x00, 0x0C, 0x00,
    0x0C, 0x00, 0x0C, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 'U'
    0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0,
    0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0,
    0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0,
    0x3F, 0x00, 0x3F, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 'V'
    0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0,
    0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0,
    0xC0, 0xC0, 0xC0, 0xC0, 0x33, 0x00, 0x33, 0x00,
    0x0C, 0x00, 0x0C, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 'W'
    0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0,
    0xC0, 0xC0, 0xC0, 0xC0, 0xCC, 0xC0, 0xCC, 0xC0,
    0xCC, 0xC0, 0xCC, 0xC0, 0xCC, 0xC0, 0xCC, 0xC0,
    0x33, 0x00, 0x33, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 'X'
    0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0,
    0x33, 0x00, 0x33, 0x00, 0x0C, 0x00, 0x0C, 0x00,
    0x33, 0x00, 0x33, 0x00, 0xC0, 0xC0, 0xC0, 0xC0,
    0xC0, 0xC0, 0xC0, 0xC0, 0x00, 0x00, 0x00, 0x00,
    // 'Y'
    0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0,
    0xC0, 0xC0, 0xC0, 0xC0, 0x33, 0x00, 0x33, 0x00,
    0x0C, 0x00, 0x0C, 0x00, 0x0C, 0x00, 0x0C, 0x00,
    0x0C, 0x00, 0x0C, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 'Z'
    0xFF, 0xC0, 0xFF, 0xC0, 0x00, 0xC0, 0x00, 0xC0,
    0x03, 0x00, 0x03, 0x00, 0x0C, 0x00, 0x0C, 0x00,
    0x30, 0x00, 0x30, 0x00, 0xC0, 0x00, 0xC0, 0x00,
    0xFF, 0xC0, 0xFF, 0xC0, 0x00, 0x00, 0x00, 0x00,
    // '['
    0x3F, 0x00, 0x3F, 0x00, 0x30, 0x00, 0x30, 0x00,
    0x30, 0x00, 0x30, 0x00, 0x30, 0x00, 0x30, 0x00,
    0x30, 0x00, 0x30, 0x00, 0x30, 0x00, 0x30, 0x00,
    0x3F, 0x00, 0x3F, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '\\'
    0x00, 0x00, 0x00, 0x00, 0xC0, 0x00, 0xC0, 0x00,
    0x30, 0x00, 0x30, 0x00, 0x0C, 0x00, 0x0C, 0x00,
    0x03, 0x00, 0x03, 0x00, 0x00, 0xC0, 0x00, 0xC0,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // ']'
    0x3F, 0x00, 0x3F, 0x00, 0x03, 0x00, 0x03, 0x00,
    0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00,
    0x03, 0x00, 0x03, 0x00, 0x03, 0x00, 0x03, 0x00,
    0x3F, 0x00, 0x3F, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '^'
    0x0C, 0x00, 0x0C, 0x00, 0x33, 0x00, 0x33, 0x00,
    0xC0, 0xC0, 0xC0, 0xC0, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '_'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0xFF, 0xC0, 0xFF, 0xC0, 0x00, 0x00, 0x00, 0x00,
    // '`'
    0x30, 0x00, 0x30, 0x00, 0x0C, 0x00, 0x0C, 0x00,
    0x03, 0x00, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 'a'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x3F, 0x00, 0x3F, 0x00, 0x00, 0xC0, 0x00, 0xC0,
    0x3F, 0xC0, 0x3F, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0,
    0x3F, 0xC0, 0x3F, 0xC0, 0x00, 0x00, 0x00, 0x00,
    // 'b'
    0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00,
    0xCF, 0x00, 0xCF, 0x00, 0xF0, 0xC0, 0xF0, 0xC0,
    0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0,
    0xFF, 0x00, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 'c'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x3F, 0x00, 0x3F, 0x00, 0xC0, 0x00, 0xC0, 0x00,
    0xC0, 0x00, 0xC0, 0x00, 0xC0, 0xC0, 0xC0, 0xC0,
    0x3F, 0x00, 0x3F, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 'd'
    0x00, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xC0,
    0x3C, 0xC0, 0x3C, 0xC0, 0xC3, 0xC0, 0xC3, 0xC0,
    0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0,
    0x3F, 0xC0, 0x3F, 0xC0, 0x00, 0x00, 0x00, 0x00,
    // 'e'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x3F, 0x00, 0x3F, 0x00, 0xC0, 0xC0, 0xC0, 0xC0,
    0xFF, 0xC0, 0xFF, 0xC0, 0xC0, 0x00, 0xC0, 0x00,
    0x3F, 0x00, 0x3F, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 'f'
    0x0F, 0x00, 0x0F, 0x00, 0x30, 0xC0, 0x30, 0xC0,
    0x30, 0x00, 0x30, 0x00, 0xFC, 0x00, 0xFC, 0x00,
    0x30, 0x00, 0x30, 0x00, 0x30, 0x00, 0x30, 0x00,
    0x30, 0x00, 0x30, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 'g'
    0x00, 0x00, 0x00, 0x00, 0x3F, 0xC0, 0x3F, 0xC0,
    0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0,
    0x3F, 0xC0, 0x3F, 0xC0, 0x00, 0xC0, 0x00, 0xC0,
    0x3F, 0x00, 0x3F, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 'h'
    0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00,
    0xCF, 0x00, 0xCF, 0x00, 0xF0, 0xC0, 0xF0, 0xC0,
    0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0,
    0xC0, 0xC0, 0xC0, 0xC0, 0x00, 0x00, 0x00, 0x00,
    // 'i'
    0x0C, 0x00, 0x0C, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x3C, 0x00, 0x3C, 0x00, 0x0C, 0x00, 0x0C, 0x00,
    0x0C, 0x00, 0x0C, 0x00, 0x0C, 0x00, 0x0C, 0x00,
    0x3F, 0x00, 0x3F, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 'j'
    0x03, 0x00, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x0F, 0x00, 0x0F, 0x00, 0x03, 0x00, 0x03, 0x00,
    0x03, 0x00, 0x03, 0x00, 0xC3, 0x00, 0xC3, 0x00,
    0x3C, 0x00, 0x3C, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 'k'
    0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00,
    0xC3, 0x00, 0xC3, 0x00, 0xCC, 0x00, 0xCC, 0x00,
    0xF0, 0x00, 0xF0, 0x00, 0xCC, 0x00, 0xCC, 0x00,
    0xC3, 0x00, 0xC3, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 'l'
    0x3C, 0x00, 0x3C, 0x00, 0x0C, 0x00, 0x0C, 0x00,
    0x0C, 0x00, 0x0C, 0x00, 0x0C, 0x00, 0x0C, 0x00,
    0x0C, 0x00, 0x0C, 0x00, 0x0C, 0x00, 0x0C, 0x00,
    0x3F, 0x00, 0x3F, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 'm'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0xF3, 0x00, 0xF3, 0x00, 0xCC, 0xC0, 0xCC, 0xC0,
    0xCC, 0xC0, 0xCC, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0,
    0xC0, 0xC0, 0xC0, 0xC0, 0x00, 0x00, 0x00, 0x00,
    // 'n'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0xCF, 0x00, 0xCF, 0x00, 0xF0, 0xC0, 0xF0, 0xC0,
    0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0,
    0xC0, 0xC0, 0xC0, 0xC0, 0x00, 0x00, 0x00, 0x00,
    // 'o'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x3F, 0x00, 0x3F, 0x00, 0xC0, 0xC0, 0xC0, 0xC0,
    0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0,
    0x3F, 0x00, 0x3F, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 'p'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0xFF, 0x00, 0xFF, 0x00, 0xC0, 0xC0, 0xC0, 0xC0,
    0xFF, 0x00, 0xFF, 0x00, 0xC0, 0x00, 0xC0, 0x00,
    0xC0, 0x00, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 'q'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x3C, 0xC0, 0x3C, 0xC0, 0xC3, 0xC0, 0xC3, 0xC0,
    0x3F, 0xC0, 0x3F, 0xC0, 0x00, 0xC0, 0x00, 0xC0,
    0x00, 0xC0, 0x00, 0xC0, 0x00, 0x00, 0x00, 0x00,
    // 'r'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0xCF, 0x00, 0xCF, 0x00, 0xF0, 0xC0, 0xF0, 0xC0,
    0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00, 0xC0, 0x00,
    0xC0, 0x00, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 's'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x3F, 0x00, 0x3F, 0x00, 0xC0, 0x00, 0xC0, 0x00,
    0x3F, 0x00, 0x3F, 0x00, 0x00, 0xC0, 0x00, 0xC0,
    0xFF, 0x00, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 't'
    0x30, 0x00, 0x30, 0x00, 0x30, 0x00, 0x30, 0x00,
    0xFC, 0x00, 0xFC, 0x00, 0x30, 0x00, 0x30, 0x00,
    0x30, 0x00, 0x30, 0x00, 0x30, 0xC0, 0x30, 0xC0,
    0x0F, 0x00, 0x0F, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 'u'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0,
    0xC0, 0xC0, 0xC0, 0xC0, 0xC3, 0xC0, 0xC3, 0xC0,
    0x3C, 0xC0, 0x3C, 0xC0, 0x00, 0x00, 0x00, 0x00,
    // 'v'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0,
    0xC0, 0xC0, 0xC0, 0xC0, 0x33, 0x00, 0x33, 0x00,
    0x0C, 0x00, 0x0C, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 'w'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0,
    0xCC, 0xC0, 0xCC, 0xC0, 0xCC, 0xC0, 0xCC, 0xC0,
    0x33, 0x00, 0x33, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 'x'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0xC0, 0xC0, 0xC0, 0xC0, 0x33, 0x00, 0x33, 0x00,
    0x0C, 0x00, 0x0C, 0x00, 0x33, 0x00, 0x33, 0x00,
    0xC0, 0xC0, 0xC0, 0xC0, 0x00, 0x00, 0x00, 0x00,
    // 'y'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0,
    0x3F, 0xC0, 0x3F, 0xC0, 0x00, 0xC0, 0x00, 0xC0,
    0x3F, 0x00, 0x3F, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 'z'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0xFF, 0xC0, 0xFF, 0xC0, 0x03, 0x00, 0x03, 0x00,
    0x0C, 0x00, 0x0C, 0x00, 0x30, 0x00, 0x30, 0x00,
    0xFF, 0xC0, 0xFF, 0xC0, 0x00, 0x00, 0x00, 0x00,
    // '{'
    0x03, 0x00, 0x03, 0x00, 0x0C, 0x00, 0x0C, 0x00,
    0x0C, 0x00, 0x0C, 0x00, 0x30, 0x00, 0x30, 0x00,
    0x0C, 0x00, 0x0C, 0x00, 0x0C, 0x00, 0x0C, 0x00,
    0x03, 0x00, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '|'
    0x0C, 0x00, 0x0C, 0x00, 0x0C, 0x00, 0x0C, 0x00,
    0x0C, 0x00, 0x0C, 0x00, 0x0C, 0x00, 0x0C, 0x00,
    0x0C, 0x00, 0x0C, 0x00, 0x0C, 0x00, 0x0C, 0x00,
    0x0C, 0x00, 0x0C, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '}'
    0x30, 0x00, 0x30, 0x00, 0x0C, 0x00, 0x0C, 0x00,
    0x0C, 0x00, 0x0C, 0x00, 0x03, 0x00, 0x03, 0x00,
    0x0C, 0x00, 0x0C, 0x00, 0x0C, 0x00, 0x0C, 0x00,
    0x30, 0x00, 0x30, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '~'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x30, 0x00, 0x30, 0x00, 0xCC, 0xC0, 0xCC, 0xC0,
    0x03, 0x00, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];
