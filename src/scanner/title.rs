use regex::Regex;

/// ファイル名向けの文字列を表示用タイトルに変換
///
/// `_`と`-`を空白にし、単語の先頭だけ大文字にする（"solar_flare" → "Solar Flare"）。
/// 大文字小文字の無い文字（数字・記号・かな）の直後も単語の先頭とみなす。
pub fn format_title(text: &str) -> String {
    lazy_static::lazy_static! {
        static ref SEPARATOR_RE: Regex = Regex::new(r"[_-]").unwrap();
    }

    let spaced = SEPARATOR_RE.replace_all(text, " ");
    let mut title = String::with_capacity(spaced.len());
    let mut prev_cased = false;

    for ch in spaced.chars() {
        let cased = ch.is_lowercase() || ch.is_uppercase();
        if cased && prev_cased {
            title.extend(ch.to_lowercase());
        } else if cased {
            title.extend(ch.to_uppercase());
        } else {
            title.push(ch);
        }
        prev_cased = cased;
    }

    title
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_title_separators() {
        assert_eq!(format_title("solar_flare"), "Solar Flare");
        assert_eq!(format_title("low-tide"), "Low Tide");
        assert_eq!(format_title("a__b"), "A  B");
    }

    #[test]
    fn test_format_title_case() {
        assert_eq!(format_title("ECLIPSE"), "Eclipse");
        assert_eq!(format_title("mIxEd cAsE"), "Mixed Case");
    }

    #[test]
    fn test_format_title_uncased_boundaries() {
        assert_eq!(format_title("track01abc"), "Track01Abc");
        assert_eq!(format_title("they're"), "They'Re");
        assert_eq!(format_title("01_intro"), "01 Intro");
    }

    #[test]
    fn test_format_title_empty() {
        assert_eq!(format_title(""), "");
    }
}
