use super::*;

// =============================================================
// Locale
// =============================================================

#[test]
fn locale_default_is_chinese() {
    assert_eq!(Locale::default(), Locale::Zh);
}

#[test]
fn locale_parses_plain_and_region_tags() {
    assert_eq!("en".parse::<Locale>(), Ok(Locale::En));
    assert_eq!("zh-CN".parse::<Locale>(), Ok(Locale::Zh));
    assert_eq!(" EN_us ".parse::<Locale>(), Ok(Locale::En));
}

#[test]
fn locale_rejects_unknown_codes() {
    assert_eq!("fr".parse::<Locale>(), Err(UnsupportedLocale("fr".to_owned())));
    assert!("".parse::<Locale>().is_err());
}

#[test]
fn locale_toggle_flips() {
    assert_eq!(Locale::En.toggle(), Locale::Zh);
    assert_eq!(Locale::Zh.toggle(), Locale::En);
}

// =============================================================
// translate
// =============================================================

#[test]
fn translate_returns_locale_text() {
    assert_eq!(translate(Locale::En, MessageKey::Subscribe), "Subscribe Now");
    assert_eq!(translate(Locale::Zh, MessageKey::Subscribe), "立即订阅");
    assert_eq!(translate(Locale::Zh, MessageKey::Number), "5");
}

#[test]
fn translate_falls_back_to_english() {
    assert_eq!(translate(Locale::Zh, MessageKey::BackHome), "Back to the latest issue");
}

#[test]
fn switch_language_label_names_the_other_locale() {
    assert_eq!(translate(Locale::En, MessageKey::SwitchLanguage), "中文");
    assert_eq!(translate(Locale::Zh, MessageKey::SwitchLanguage), "English");
}

// =============================================================
// section_label
// =============================================================

#[test]
fn section_label_translates_known_headings() {
    assert_eq!(section_label(Locale::Zh, "Big Tech & Startups"), "科技公司动态");
    assert_eq!(section_label(Locale::Zh, "Quick Links"), "速闻链接");
}

#[test]
fn section_label_keeps_leading_emoji() {
    assert_eq!(section_label(Locale::Zh, "🚀 Big Tech & Startups"), "🚀 科技公司动态");
    assert_eq!(section_label(Locale::Zh, "🔗Quick Links"), "🔗 速闻链接");
}

#[test]
fn section_label_keeps_joined_emoji_sequence() {
    assert_eq!(
        section_label(Locale::Zh, "👩\u{200D}💻 Programming, Design & Data Science"),
        "👩\u{200D}💻 编程/设计/数据科学"
    );
}

#[test]
fn section_label_passes_through_unknown_and_english() {
    assert_eq!(section_label(Locale::Zh, "Web3 Corner"), "Web3 Corner");
    assert_eq!(section_label(Locale::En, "🚀 Big Tech & Startups"), "🚀 Big Tech & Startups");
    assert_eq!(section_label(Locale::Zh, "  科技要闻 "), "科技要闻");
}

// =============================================================
// pick_localized
// =============================================================

#[test]
fn pick_localized_prefers_locale_variant() {
    assert_eq!(pick_localized(Locale::Zh, "苹果发布会", "Apple event"), "苹果发布会");
    assert_eq!(pick_localized(Locale::En, "苹果发布会", "Apple event"), "Apple event");
}

#[test]
fn pick_localized_falls_back_when_blank() {
    assert_eq!(pick_localized(Locale::Zh, "  ", "Apple event"), "Apple event");
    assert_eq!(pick_localized(Locale::En, "苹果发布会", ""), "苹果发布会");
}
