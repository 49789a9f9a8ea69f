//! Built-in content served whenever loading fails.
//!
//! Both languages carry the Japanese copy: the site's primary audience reads
//! Japanese, and an unlocalized page beats an empty one.

use crate::content::{BilingualDocument, LanguageContent};
use serde_json::{json, Value};
use std::sync::{Arc, OnceLock};

static FALLBACK: OnceLock<Arc<BilingualDocument>> = OnceLock::new();

/// The fallback document. Built once, shared afterwards.
pub fn fallback_document() -> Arc<BilingualDocument> {
    FALLBACK
        .get_or_init(|| {
            let content = fallback_language_content();
            Arc::new(BilingualDocument {
                ja: content.clone(),
                en: content,
            })
        })
        .clone()
}

fn fallback_language_content() -> LanguageContent {
    match fallback_value() {
        Value::Object(sections) => LanguageContent::new(sections),
        _ => unreachable!("fallback content is an object literal"),
    }
}

fn fallback_value() -> Value {
    json!({
        "navigation": {
            "home": "ホーム",
            "information": "インフォメーション",
            "informationSubmenu": {
                "about": "保育方針",
                "fees": "保育料",
                "privacy": "プライバシーポリシー",
                "menu": "給食",
                "programs": "活動内容",
                "enrolment": "入園について"
            },
            "forms": "書類",
            "classes": "クラス",
            "classesSubmenu": {
                "nyuuji": "乳児",
                "youji": "幼児",
                "star": "国際クラス"
            },
            "activities": "課外教室"
        },
        "header": {
            "email": "info@kodomogakuen.com",
            "languageToggle": "English",
            "siteName": "こども学園 Kodomo Gakuen",
            "contactButton": "お問合せ",
            "mailtoSubject": "お問合せ",
            "mailtoBody": "ご希望内容: 　 見学　入園の相談\nご希望日程： 　 \nお子様生年月日："
        },
        "announcement": {
            "title": "さあ、2学期の開幕！新たな挑戦の始まりです",
            "content": "子どもたちの元気な声が園に戻り、園内が一気ににぎやかになりました。夏休みの思い出を楽しそうに話す姿や、日焼けしたお顔から、たくさんの楽しい体験をしたことが伝わってきます",
            "readMoreText": "続き",
            "readMoreLink": "/announcement",
            "minimizedText": "園長からのあいさつ"
        },
        "hero": {
            "homepage": {
                "title": "Enjoy Learning With Us",
                "subtitle": "ふれあい保育・感謝・思いやり",
                "buttonText": "こども学園での保育活動",
                "buttonLink": "/about"
            },
            "pages": {
                "about": { "title": "保育方針", "subtitle": "Our Education Philosophy" },
                "fees": { "title": "保育料", "subtitle": "Tuition and Fees" },
                "privacy": { "title": "プライバシーポリシー", "subtitle": "Privacy Policy" },
                "menu": { "title": "給食", "subtitle": "School Lunch Menu" },
                "programs": { "title": "活動内容", "subtitle": "Educational Programs" },
                "enrolment": { "title": "入園について", "subtitle": "Enrollment Information" },
                "forms": { "title": "書類", "subtitle": "Application Forms" },
                "nyuuji": { "title": "乳児クラス", "subtitle": "Infant Class" },
                "youji": { "title": "幼児クラス", "subtitle": "Toddler Class" },
                "star": { "title": "国際クラス", "subtitle": "International Class" },
                "activities": { "title": "課外教室", "subtitle": "After-school Activities" }
            }
        },
        "ageGroups": {
            "sectionTitle": "年齢別クラス",
            "nyuuji": {
                "name": "乳児クラス",
                "ageRange": "0歳 - 2歳",
                "description": "愛情豊かな環境で、個々の発達に合わせたケアを提供します。",
                "image": "/images/nyuuji-pic.JPG"
            },
            "youji": {
                "name": "幼児クラス",
                "ageRange": "3歳 - 5歳",
                "description": "遊びを通じて学び、社会性と創造性を育みます。",
                "image": "/images/nensho-pic.JPG"
            },
            "star": {
                "name": "国際クラス",
                "ageRange": "3歳 - 5歳",
                "description": "英語と日本語のバイリンガル教育で国際感覚を養います。",
                "image": "/images/star-pic.JPG"
            }
        },
        "about": {
            "sectionTitle": "こども学園について",
            "description": "こども学園は、子どもたち一人一人の個性を大切にし、健やかな成長をサポートする幼稚園・保育園です。",
            "philosophy": "ふれあい保育・感謝・思いやりを基本理念とし、愛情豊かな環境の中で子どもたちの可能性を最大限に引き出します。"
        },
        "blog": {
            "sectionTitle": "お知らせ・ブログ",
            "viewAllText": "すべて見る"
        },
        "footer": {
            "quickLinks": {
                "title": "クイックリンク",
                "links": {
                    "home": "ホーム",
                    "about": "保育方針",
                    "programs": "活動内容",
                    "contact": "お問い合わせ"
                }
            },
            "contact": {
                "title": "お問い合わせ",
                "phone": "042-590-3715",
                "email": "info@kodomogakuen.com",
                "address": "東京都東大和市奈良橋２－４０９"
            },
            "social": {
                "title": "ソーシャルメディア"
            },
            "location": {
                "title": "所在地"
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::sections::*;
    use crate::content::{validate_document, Section, SchemaValidator};
    use crate::i18n::Language;

    #[test]
    fn test_fallback_passes_runtime_validation() {
        let value = serde_json::to_value(&*fallback_document()).expect("serialize");
        assert!(validate_document(&value));
    }

    #[test]
    fn test_fallback_passes_build_time_validation() {
        let value = serde_json::to_value(&*fallback_document()).expect("serialize");
        assert!(SchemaValidator::validate(&value).is_ok());
    }

    #[test]
    fn test_fallback_has_every_required_section_in_both_languages() {
        let document = fallback_document();
        for language in Language::ALL {
            for section in Section::REQUIRED {
                assert!(
                    document.language(language).has_section(section),
                    "missing {} in {}",
                    section,
                    language
                );
            }
        }
    }

    #[test]
    fn test_fallback_reads_as_typed_sections() {
        let document = fallback_document();
        let ja = document.language(Language::JAPANESE);

        let navigation: NavigationContent = ja.typed_section().expect("navigation");
        assert_eq!(navigation.home, "ホーム");
        let hero: HeroContent = ja.typed_section().expect("hero");
        assert_eq!(hero.pages.star.title, "国際クラス");
        let footer: FooterContent = ja.typed_section().expect("footer");
        assert_eq!(footer.contact.phone, "042-590-3715");
        ja.typed_section::<HeaderContent>().expect("header");
        ja.typed_section::<AnnouncementContent>().expect("announcement");
        ja.typed_section::<AgeGroupsContent>().expect("ageGroups");
        ja.typed_section::<AboutContent>().expect("about");
        ja.typed_section::<BlogContent>().expect("blog");
    }

    #[test]
    fn test_fallback_is_shared() {
        assert!(Arc::ptr_eq(&fallback_document(), &fallback_document()));
    }

    #[test]
    fn test_english_mirrors_japanese() {
        let document = fallback_document();
        assert_eq!(document.ja, document.en);
    }
}
