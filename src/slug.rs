//! ASCII transliteration and slug generation for output file names.

use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

static NON_WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s-]").expect("valid non-word regex"));
static SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s_-]+").expect("valid separator regex"));

/// Replacement for characters whose decomposition does not give the wanted ASCII
fn replacement(c: char) -> Option<&'static str> {
    let mapped = match c {
        'À' | 'Á' | 'Ã' | 'Å' | 'Ā' | 'Ă' | 'Ą' => "A",
        'à' | 'á' | 'ã' | 'å' | 'ā' | 'ă' | 'ą' => "a",
        'Ä' => "Ae",
        'ä' => "ae",
        'Ç' | 'Ć' | 'Ĉ' | 'Č' => "C",
        'ç' | 'ć' | 'ĉ' | 'č' => "c",
        'Ď' | 'Đ' => "D",
        'ď' | 'đ' => "d",
        'È' | 'É' | 'Ẽ' | 'Ë' | 'Ĕ' | 'Ē' | 'Ě' | 'Ę' => "E",
        'è' | 'é' | 'ẽ' | 'ë' | 'ĕ' | 'ė' | 'ě' | 'ę' => "e",
        'Ġ' | 'Ģ' | 'Ĝ' | 'Ğ' => "G",
        'ġ' | 'ģ' | 'ĝ' | 'ğ' => "g",
        'Ĥ' | 'Ħ' => "H",
        'ĥ' | 'ħ' => "h",
        'Ì' | 'Í' | 'Î' | 'Ï' | 'Į' | 'Ī' | 'İ' => "I",
        'ì' | 'í' | 'î' | 'ï' | 'ī' | 'ĩ' => "i",
        'Ĵ' => "J",
        'ĵ' => "j",
        'Ķ' => "K",
        'ķ' => "k",
        'Ĺ' | 'Ļ' | 'Ľ' | 'Ŀ' => "L",
        'ĺ' | 'ļ' | 'ľ' => "l",
        'Ñ' | 'Ņ' | 'Ň' => "N",
        'ņ' | 'ň' => "n",
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ō' | 'Ŏ' | 'Ő' => "O",
        'ò' | 'ó' | 'ô' | 'õ' | 'ō' | 'ŏ' | 'ő' => "o",
        'Ö' => "Oe",
        'ö' => "oe",
        'Ù' | 'Ú' | 'Û' | 'Ū' | 'Ů' | 'Ű' | 'Ų' => "U",
        'ù' | 'ú' | 'û' | 'ū' | 'ů' | 'ű' => "u",
        'Ü' => "Ue",
        'ü' => "ue",
        'Ŵ' => "W",
        'ŵ' => "w",
        'Ý' | 'Ÿ' | 'Ŷ' => "Y",
        'ý' | 'ÿ' | 'ŷ' => "y",
        'Ž' | 'Ż' => "Z",
        'ź' | 'ż' | 'ž' => "z",
        // ligatures
        'æ' => "ae",
        'Æ' => "Ae",
        'œ' => "oe",
        'Œ' => "Oe",
        'ß' => "ss",
        'ﬀ' => "ff",
        'ﬁ' => "fi",
        'ﬂ' => "fl",
        'ﬃ' => "ffi",
        'ﬄ' => "ffl",
        'ﬅ' => "ft",
        'ﬆ' => "st",
        'ĳ' => "ij",
        'Ĳ' => "Ij",
        'ʒ' => "ezh",
        'Ʒ' => "Ez",
        _ => return None,
    };
    Some(mapped)
}

/// Convert text to plain ASCII, mapping known diacritics and ligatures and
/// dropping whatever has no ASCII decomposition.
pub fn transliterate(text: &str) -> String {
    let mut mapped = String::with_capacity(text.len());
    for c in text.chars() {
        match replacement(c) {
            Some(ascii) => mapped.push_str(ascii),
            None => mapped.push(c),
        }
    }

    mapped.nfkd().filter(char::is_ascii).collect()
}

/// Lowercase, hyphen-separated ASCII slug of `text`; may be empty
pub fn slugify(text: &str) -> String {
    let text = transliterate(text).to_lowercase();
    let text = NON_WORD_RE.replace_all(text.trim(), "");
    let text = SEPARATOR_RE.replace_all(&text, "-");
    text.trim_matches('-').to_string()
}
