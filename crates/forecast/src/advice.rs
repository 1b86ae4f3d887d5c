//! Clothing and items advisories derived from the daily summary.

/// Clothing recommendation from the day's high and low.
///
/// Thresholds are checked high-to-low on `temp_max`; the first match
/// picks the base advisory. Cold-morning and large-swing notes are
/// appended on a second line.
pub fn clothing_advice(temp_max: f64, temp_min: f64) -> String {
    let base = if temp_max >= 28.0 {
        "半袖で大丈夫です。暑がりの人は1日半袖で過ごせます。"
    } else if temp_max >= 25.0 {
        "半袖／薄手の長袖で大丈夫です。"
    } else if temp_max >= 20.0 {
        "半袖＋長袖シャツで大丈夫です。昼間は半袖で過ごせます。"
    } else if temp_max >= 15.0 {
        "長袖シャツ＋薄手のカーディガン／ナイロンパーカーで大丈夫です。"
    } else if temp_max >= 10.0 {
        "長袖シャツ＋薄手のカーディガン／Tシャツ＋スウェット／トレンチコートで大丈夫です。"
    } else if temp_max >= 5.0 {
        "長袖＋厚手のコート／ダウンジャケットで大丈夫です。"
    } else {
        "冬服＋ダウン・厚手コートで大丈夫です。"
    };

    let mut notes = String::new();
    if temp_min < 10.0 {
        notes.push_str("朝晩は冷えます。");
    }
    if temp_max - temp_min >= 10.0 {
        notes.push_str("脱ぎ着しやすい服を。");
    }

    if notes.is_empty() {
        base.to_string()
    } else {
        format!("{base}\n{notes}")
    }
}

/// Items recommendation from precipitation probability and the day's high.
///
/// Always exactly one umbrella line; a hat/water line is added on hot
/// (>=30°C) days.
pub fn items_advice(precip_pct: f64, temp_max: f64) -> String {
    let mut items = Vec::new();

    if precip_pct >= 50.0 {
        items.push("傘必須です。");
    } else if precip_pct >= 30.0 {
        items.push("折りたたみ傘があると安心です。");
    } else {
        items.push("傘は不要です。");
    }

    if temp_max >= 30.0 {
        items.push("帽子・飲み物も忘れずに。");
    }

    items.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Clothing thresholds ───────────────────────────────────────────

    #[test]
    fn clothing_base_thresholds() {
        let cases = [
            (30.0, "半袖で大丈夫です。暑がりの人は1日半袖で過ごせます。"),
            (28.0, "半袖で大丈夫です。暑がりの人は1日半袖で過ごせます。"),
            (26.0, "半袖／薄手の長袖で大丈夫です。"),
            (22.0, "半袖＋長袖シャツで大丈夫です。昼間は半袖で過ごせます。"),
            (
                17.0,
                "長袖シャツ＋薄手のカーディガン／ナイロンパーカーで大丈夫です。",
            ),
            (
                12.0,
                "長袖シャツ＋薄手のカーディガン／Tシャツ＋スウェット／トレンチコートで大丈夫です。",
            ),
            (7.0, "長袖＋厚手のコート／ダウンジャケットで大丈夫です。"),
            (2.0, "冬服＋ダウン・厚手コートで大丈夫です。"),
        ];
        for (max, expected) in cases {
            let advice = clothing_advice(max, 20.0_f64.min(max));
            assert!(
                advice.starts_with(expected),
                "temp_max={max}: got {advice:?}"
            );
        }
    }

    #[test]
    fn cold_morning_note_appended() {
        let advice = clothing_advice(15.0, 8.0);
        assert_eq!(
            advice,
            "長袖シャツ＋薄手のカーディガン／ナイロンパーカーで大丈夫です。\n朝晩は冷えます。"
        );
    }

    #[test]
    fn large_swing_note_appended() {
        let advice = clothing_advice(25.0, 15.0);
        assert_eq!(
            advice,
            "半袖／薄手の長袖で大丈夫です。\n脱ぎ着しやすい服を。"
        );
    }

    #[test]
    fn both_notes_concatenate_on_one_line() {
        let advice = clothing_advice(18.0, 5.0);
        assert_eq!(
            advice,
            "長袖シャツ＋薄手のカーディガン／ナイロンパーカーで大丈夫です。\n朝晩は冷えます。脱ぎ着しやすい服を。"
        );
    }

    #[test]
    fn mild_day_has_no_notes() {
        let advice = clothing_advice(22.0, 14.0);
        assert!(!advice.contains('\n'), "got {advice:?}");
    }

    // ── Items ─────────────────────────────────────────────────────────

    #[test]
    fn umbrella_thresholds() {
        assert_eq!(items_advice(60.0, 20.0), "傘必須です。");
        assert_eq!(items_advice(50.0, 20.0), "傘必須です。");
        assert_eq!(items_advice(30.0, 20.0), "折りたたみ傘があると安心です。");
        assert_eq!(items_advice(10.0, 20.0), "傘は不要です。");
    }

    #[test]
    fn heat_advisory_appended_on_hot_days() {
        assert_eq!(
            items_advice(60.0, 32.0),
            "傘必須です。\n帽子・飲み物も忘れずに。"
        );
        assert_eq!(
            items_advice(0.0, 30.0),
            "傘は不要です。\n帽子・飲み物も忘れずに。"
        );
    }

    #[test]
    fn exactly_one_umbrella_line_and_at_most_one_heat_line() {
        for pct in [0.0, 29.0, 30.0, 49.0, 50.0, 100.0] {
            for max in [10.0, 29.9, 30.0, 35.0] {
                let advice = items_advice(pct, max);
                let umbrella_lines = advice
                    .lines()
                    .filter(|l| l.contains('傘'))
                    .count();
                let heat_lines = advice
                    .lines()
                    .filter(|l| l.contains("帽子"))
                    .count();
                assert_eq!(umbrella_lines, 1, "pct={pct} max={max}: {advice:?}");
                assert!(heat_lines <= 1, "pct={pct} max={max}: {advice:?}");
            }
        }
    }
}
