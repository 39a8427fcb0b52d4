//! Static translation tables.

use super::Locale;

/// Identifiers for every piece of interface copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MessageKey {
    Number,
    WelcomePrefix,
    WelcomeSuffix,
    Free,
    DescriptionPrefix,
    DescriptionSuffix,
    Subscribe,
    EmailPlaceholder,
    JoinCommunity,
    LatestNews,
    ReadMore,
    Subscribing,
    SubscribeSent,
    SubscribeFailed,
    EmailRequired,
    EmailInvalid,
    Loading,
    LoadFailed,
    NoArticles,
    ServedOtherDate,
    PastIssues,
    Accessibility,
    FontSize,
    FontSmall,
    FontMedium,
    FontLarge,
    ColorMode,
    ColorNormal,
    ColorHighContrast,
    ColorBlindFriendly,
    SwitchLanguage,
    SuccessTitle,
    SuccessBody,
    ErrorTitle,
    ErrorBody,
    UnsubscribedTitle,
    UnsubscribedBody,
    NotFoundTitle,
    NotFoundBody,
    BackHome,
}

pub(super) fn lookup(locale: Locale, key: MessageKey) -> Option<&'static str> {
    match locale {
        Locale::En => Some(english(key)),
        Locale::Zh => chinese(key),
    }
}

pub(super) fn english(key: MessageKey) -> &'static str {
    use MessageKey as K;
    match key {
        K::Number => "5",
        K::WelcomePrefix => "Minutes to Catch up With",
        K::WelcomeSuffix => "Tech",
        K::Free => "FREE",
        K::DescriptionPrefix => "daily email subscription to stay updated.",
        K::DescriptionSuffix => "Get the most interesting stories in startups, tech, and programming!",
        K::Subscribe => "Subscribe Now",
        K::EmailPlaceholder => "Enter your email address",
        K::JoinCommunity => "Join 1,250,000+ readers for one daily email",
        K::LatestNews => "Latest Tech News",
        K::ReadMore => "Read more",
        K::Subscribing => "Subscribing...",
        K::SubscribeSent => "Almost done! Check your inbox to confirm your subscription.",
        K::SubscribeFailed => "Subscription failed. Please try again later.",
        K::EmailRequired => "Enter an email first.",
        K::EmailInvalid => "That email address doesn't look right.",
        K::Loading => "Loading...",
        K::LoadFailed => "Couldn't load this issue.",
        K::NoArticles => "No articles for this day.",
        K::ServedOtherDate => "No issue for the requested day. Showing",
        K::PastIssues => "Past issues",
        K::Accessibility => "Accessibility",
        K::FontSize => "Font size",
        K::FontSmall => "Small",
        K::FontMedium => "Medium",
        K::FontLarge => "Large",
        K::ColorMode => "Color mode",
        K::ColorNormal => "Normal",
        K::ColorHighContrast => "High contrast",
        K::ColorBlindFriendly => "Color-blind friendly",
        K::SwitchLanguage => "中文",
        K::SuccessTitle => "Subscription confirmed",
        K::SuccessBody => "Thanks for subscribing! Your first issue arrives tomorrow.",
        K::ErrorTitle => "Something went wrong",
        K::ErrorBody => "The link may have expired or already been used.",
        K::UnsubscribedTitle => "You have been unsubscribed",
        K::UnsubscribedBody => "You will no longer receive the daily email.",
        K::NotFoundTitle => "Page not found",
        K::NotFoundBody => "The page you are looking for doesn't exist.",
        K::BackHome => "Back to the latest issue",
    }
}

fn chinese(key: MessageKey) -> Option<&'static str> {
    use MessageKey as K;
    let text = match key {
        K::Number => "5",
        K::WelcomePrefix => "分钟掌握",
        K::WelcomeSuffix => "全球科技脉搏",
        K::Free => "免费",
        K::DescriptionPrefix => "订阅每日邮件，获取最新科技资讯。",
        K::DescriptionSuffix => "获取创业、科技和编程领域最有趣的新闻摘要！",
        K::Subscribe => "立即订阅",
        K::EmailPlaceholder => "请输入您的邮箱地址",
        K::JoinCommunity => "加入超过1,250,000读者的每日推送邮件",
        K::LatestNews => "最新科技资讯",
        K::ReadMore => "阅读更多",
        K::Subscribing => "正在订阅...",
        K::SubscribeSent => "还差一步！请查收确认邮件以完成订阅。",
        K::SubscribeFailed => "订阅失败，请稍后重试。",
        K::EmailRequired => "请先输入邮箱地址。",
        K::EmailInvalid => "邮箱地址格式不正确。",
        K::Loading => "加载中...",
        K::LoadFailed => "无法加载本期内容。",
        K::NoArticles => "当天暂无文章。",
        K::ServedOtherDate => "所选日期暂无内容，当前显示",
        K::PastIssues => "往期内容",
        K::Accessibility => "无障碍设置",
        K::FontSize => "字体大小",
        K::FontSmall => "小",
        K::FontMedium => "中",
        K::FontLarge => "大",
        K::ColorMode => "色彩模式",
        K::ColorNormal => "标准",
        K::ColorHighContrast => "高对比度",
        K::ColorBlindFriendly => "色盲友好",
        K::SwitchLanguage => "English",
        K::SuccessTitle => "订阅成功",
        K::SuccessBody => "感谢订阅！明天您将收到第一封邮件。",
        K::ErrorTitle => "出错了",
        K::ErrorBody => "链接可能已过期或已被使用。",
        K::UnsubscribedTitle => "已退订",
        K::UnsubscribedBody => "您将不再收到每日邮件。",
        K::NotFoundTitle => "页面不存在",
        K::NotFoundBody => "您访问的页面不存在。",
        // Not translated yet; `translate` falls back to English.
        K::BackHome => return None,
    };
    Some(text)
}

pub(super) fn section_translation(locale: Locale, heading: &str) -> Option<&'static str> {
    match locale {
        Locale::En => None,
        Locale::Zh => match heading {
            "Big Tech & Startups" => Some("科技公司动态"),
            "Programming, Design & Data Science" => Some("编程/设计/数据科学"),
            "Science & Futuristic Technology" => Some("未来科技"),
            "Miscellaneous" => Some("科技要闻"),
            "Quick Links" => Some("速闻链接"),
            _ => None,
        },
    }
}
