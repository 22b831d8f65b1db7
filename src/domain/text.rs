use thousands::Separable;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cut `s` to at most `width` terminal columns, ending with `…` when cut.
pub fn truncate_to_width(s: &str, width: usize) -> String {
    if s.width() <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

pub fn format_count(n: u64) -> String {
    n.separate_with_commas()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("Dune", 10, "Dune")]
    #[case("Dune", 4, "Dune")]
    #[case("Interstellar", 6, "Inter…")]
    #[case("Interstellar", 1, "…")]
    #[case("Interstellar", 0, "")]
    #[case("千と千尋の神隠し", 7, "千と千…")]
    fn test_truncate_to_width(#[case] s: &str, #[case] width: usize, #[case] expected: &str) {
        assert_eq!(truncate_to_width(s, width), expected);
        assert!(expected.width() <= width);
    }

    #[rstest]
    #[case(0, "0")]
    #[case(999, "999")]
    #[case(26000, "26,000")]
    #[case(1234567, "1,234,567")]
    fn test_format_count(#[case] n: u64, #[case] expected: &str) {
        assert_eq!(format_count(n), expected);
    }
}
