use std::{fs, io, path::Path};

static DEFAULT_WORDS: [&str; 25] = [
    "apple",
    "orange",
    "banana",
    "kiwi",
    "lemon",
    "grape",
    "peach",
    "berry",
    "melon",
    "cherry",
    "plum",
    "pear",
    "mango",
    "papaya",
    "pineapple",
    "coconut",
    "lime",
    "apricot",
    "fig",
    "guava",
    "date",
    "nectarine",
    "passionfruit",
    "pomegranate",
    "dragonfruit",
];

/// One word per line; surrounding whitespace is trimmed and blank lines are skipped.
pub fn parse_word_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn read_word_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    Ok(parse_word_list(&fs::read_to_string(path)?))
}

/// A built-in pool of exactly one board's worth of words.
pub fn default_words() -> Vec<String> {
    DEFAULT_WORDS.iter().map(|w| w.to_string()).collect()
}
