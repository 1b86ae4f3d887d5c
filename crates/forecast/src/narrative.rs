//! Weather-transition narrative ("晴れのち雨").

use common::ForecastSample;

/// Ordered substring lookup from the provider's detailed Japanese
/// description to a coarse display category. First match wins, so more
/// specific keys must precede the generic ones they contain (快晴/晴天
/// before 晴, 薄い雲/曇りがち/厚い雲 before 雲).
const CATEGORY_MAP: &[(&str, &str)] = &[
    // 晴れ系
    ("快晴", "晴れ"),
    ("晴天", "晴れ"),
    ("晴", "晴れ"),
    // 曇り系
    ("薄い雲", "晴れ"),
    ("曇りがち", "曇り"),
    ("厚い雲", "曇り"),
    ("雲", "曇り"),
    // 雨系
    ("小雨", "小雨"),
    ("適度な雨", "雨"),
    ("強い雨", "雨"),
    ("大雨", "大雨"),
    ("霧雨", "小雨"),
    ("弱い雨", "小雨"),
    // 雪系
    ("小雪", "雪"),
    ("雪", "雪"),
    ("大雪", "大雪"),
    // その他
    ("霧", "霧"),
    ("もや", "霧"),
    ("雷雨", "雷雨"),
];

/// Map a detailed description to its coarse category.
///
/// Unknown descriptions pass through unchanged.
pub fn simplify(description: &str) -> &str {
    for (key, category) in CATEGORY_MAP {
        if description.contains(key) {
            return category;
        }
    }
    description
}

/// Collapse consecutive repeats into the ordered transition sequence.
pub fn collapse<'a>(categories: &[&'a str]) -> Vec<&'a str> {
    let mut sequence: Vec<&str> = Vec::new();
    for &cat in categories {
        if sequence.last() != Some(&cat) {
            sequence.push(cat);
        }
    }
    sequence
}

/// Render the day's transition narrative from the window samples.
///
/// One category → the name alone; two → "AのちB"; three →
/// "AのちB一時C". Four or more distinct categories are truncated to the
/// first two — display simplification, anything past the second
/// transition is dropped.
pub fn headline(samples: &[ForecastSample]) -> String {
    let categories: Vec<&str> = samples.iter().map(|s| simplify(&s.description)).collect();
    let sequence = collapse(&categories);

    match sequence.as_slice() {
        [] => String::new(),
        [only] => (*only).to_string(),
        [first, second] => format!("{first}のち{second}"),
        [first, second, third] => format!("{first}のち{second}一時{third}"),
        [first, second, ..] => format!("{first}のち{second}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn make_sample(hours: i64, description: &str) -> ForecastSample {
        ForecastSample {
            timestamp: Utc.timestamp_opt(1_765_000_000 + hours * 3600, 0).unwrap(),
            temperature: 10.0,
            condition: "Clouds".into(),
            description: description.into(),
            icon: "03d".into(),
            precip_prob: 0.0,
        }
    }

    fn headline_of(descriptions: &[&str]) -> String {
        let samples: Vec<ForecastSample> = descriptions
            .iter()
            .enumerate()
            .map(|(i, d)| make_sample(3 * i as i64, d))
            .collect();
        headline(&samples)
    }

    // ── Category mapping ──────────────────────────────────────────────

    #[test]
    fn specific_keys_win_over_generic_ones() {
        assert_eq!(simplify("快晴"), "晴れ");
        assert_eq!(simplify("晴天"), "晴れ");
        assert_eq!(simplify("薄い雲"), "晴れ");
        assert_eq!(simplify("曇りがち"), "曇り");
        assert_eq!(simplify("厚い雲"), "曇り");
        assert_eq!(simplify("雲"), "曇り");
    }

    #[test]
    fn rain_variants() {
        assert_eq!(simplify("小雨"), "小雨");
        assert_eq!(simplify("霧雨"), "小雨");
        assert_eq!(simplify("弱い雨"), "小雨");
        assert_eq!(simplify("適度な雨"), "雨");
        assert_eq!(simplify("強い雨"), "雨");
        assert_eq!(simplify("大雨"), "大雨");
    }

    #[test]
    fn unknown_description_passes_through() {
        assert_eq!(simplify("砂嵐"), "砂嵐");
    }

    // ── Collapse ──────────────────────────────────────────────────────

    #[test]
    fn collapse_dedupes_consecutive_only() {
        let seq = collapse(&["晴れ", "晴れ", "雨", "雨", "晴れ"]);
        assert_eq!(seq, vec!["晴れ", "雨", "晴れ"]);
    }

    #[test]
    fn collapse_is_idempotent() {
        let once = collapse(&["晴れ", "晴れ", "曇り", "雨", "雨"]);
        let twice = collapse(&once);
        assert_eq!(once, twice);
    }

    // ── Rendering ─────────────────────────────────────────────────────

    #[test]
    fn single_category_renders_alone() {
        assert_eq!(headline_of(&["快晴", "晴天", "晴天"]), "晴れ");
    }

    #[test]
    fn two_categories_render_nochi() {
        assert_eq!(headline_of(&["晴天", "晴天", "強い雨"]), "晴れのち雨");
    }

    #[test]
    fn three_categories_render_nochi_ichiji() {
        assert_eq!(
            headline_of(&["晴天", "厚い雲", "小雨"]),
            "晴れのち曇り一時小雨"
        );
    }

    #[test]
    fn four_or_more_categories_truncate_to_two() {
        assert_eq!(
            headline_of(&["晴天", "厚い雲", "小雨", "雷雨"]),
            "晴れのち曇り"
        );
    }

    #[test]
    fn empty_input_renders_empty() {
        assert_eq!(headline_of(&[]), "");
    }
}
