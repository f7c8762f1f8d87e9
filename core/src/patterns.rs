// Morse symbol tables, indexed by digit value and by letter offset from 'a'.
// y is stored with k's pattern and z with g's, so decode never yields y or z.

pub type MorseSymbol = &'static str;

pub const DIT: u8 = b'.';
pub const DAH: u8 = b'-';

pub const MIN_SYMBOL_LEN: usize = 2;
pub const MAX_SYMBOL_LEN: usize = 5;
pub const DIGIT_SYMBOL_LEN: usize = 5;

static MORSE_DIGITS: [MorseSymbol; 10] = [
    "-----", // 0
    ".----", // 1
    "..---", // 2
    "...--", // 3
    "....-", // 4
    ".....", // 5
    "-....", // 6
    "--...", // 7
    "---..", // 8
    "----.", // 9
];

static MORSE_LETTERS: [MorseSymbol; 26] = [
    ".-",   // a
    "-...", // b
    "-.-.", // c
    "-..",  // d
    ".",    // e
    "..-.", // f
    "--.",  // g
    "....", // h
    "..",   // i
    ".---", // j
    "-.-",  // k
    ".-..", // l
    "--",   // m
    "-.",   // n
    "---",  // o
    ".--.", // p
    "--.-", // q
    ".-.",  // r
    "...",  // s
    "-",    // t
    "..-",  // u
    "...-", // v
    ".--",  // w
    "-..-", // x
    "-.-",  // y
    "--.",  // z
];

/// Symbol for an ASCII digit or lowercase letter; `None` for anything else.
pub fn get_morse_symbol(ch: u8) -> Option<MorseSymbol> {
    match ch {
        b'0'..=b'9' => Some(MORSE_DIGITS[usize::from(ch - b'0')]),
        b'a'..=b'z' => Some(MORSE_LETTERS[usize::from(ch - b'a')]),
        _ => None,
    }
}

/// First letter whose symbol equals `symbol`.
pub fn lookup_letter(symbol: &str) -> Option<char> {
    MORSE_LETTERS
        .iter()
        .position(|&candidate| candidate == symbol)
        .map(|index| char::from(b'a' + index as u8))
}

/// A decodable symbol: 2 to 5 characters, dits and dahs only.
pub fn is_valid_symbol(symbol: &str) -> bool {
    (MIN_SYMBOL_LEN..=MAX_SYMBOL_LEN).contains(&symbol.len())
        && symbol.bytes().all(|b| b == DIT || b == DAH)
}

/// Digit for a five element symbol, read from its leading run: dits count up
/// from 1, a leading dah starts at 6 and each further dah adds one, wrapping
/// past 9 to 0.
pub fn decode_digit(symbol: &str) -> Option<char> {
    let bytes = symbol.as_bytes();
    let (&first, rest) = bytes.split_first()?;
    let value = if first == DIT {
        1 + rest.iter().take_while(|&&b| b == DIT).count()
    } else {
        (6 + rest.iter().take_while(|&&b| b == DAH).count()) % 10
    };
    char::from_digit(value as u32, 10)
}
