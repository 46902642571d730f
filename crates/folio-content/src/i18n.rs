//! Page text in both supported locales.
//!
//! One static [`Translations`] table per locale; the zh table uses
//! Traditional characters throughout. Every label a page renders comes
//! from here, so switching locale swaps the whole surface at once.

use folio_core::enums::Category;
use folio_core::locale::Locale;

/// Labels for the command list shown on the home page.
pub struct Nav {
    pub home: &'static str,
    pub projects: &'static str,
    pub experience: &'static str,
    pub contact: &'static str,
}

/// Home page greeting block.
pub struct Hero {
    pub greeting: &'static str,
    pub intro: &'static str,
    pub skills_title: &'static str,
    pub view_projects: &'static str,
    pub github: &'static str,
}

/// Projects page strings.
pub struct Projects {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub code: &'static str,
    pub demo: &'static str,
    pub private: &'static str,
    pub filter_label: &'static str,
    pub filter_all: &'static str,
    pub no_results: &'static str,
}

/// Experience page strings.
pub struct Experience {
    pub title: &'static str,
    pub subtitle: &'static str,
    /// End marker for ongoing engagements.
    pub present: &'static str,
    pub empty: &'static str,
}

/// Contact page strings.
pub struct Contact {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub github: &'static str,
    pub email: &'static str,
}

/// Footer line shown under every page.
pub struct Footer {
    pub rights: &'static str,
}

/// The full text surface for one locale.
pub struct Translations {
    pub nav: Nav,
    pub hero: Hero,
    pub projects: Projects,
    pub experience: Experience,
    pub contact: Contact,
    pub footer: Footer,
}

pub const EN: Translations = Translations {
    nav: Nav {
        home: "home",
        projects: "projects",
        experience: "experience",
        contact: "contact",
    },
    hero: Hero {
        greeting: "Hi, I'm Wei-Lun.",
        intro: "Backend and systems developer in Taipei. I build data pipelines, \
                game servers, and far too many command-line tools.",
        skills_title: "Things I work with",
        view_projects: "Browse my projects with `folio projects`.",
        github: "GitHub",
    },
    projects: Projects {
        title: "Projects",
        subtitle: "Selected things I have built and maintain.",
        code: "code",
        demo: "demo",
        private: "private",
        filter_label: "showing",
        filter_all: "all",
        no_results: "No projects match that technology.",
    },
    experience: Experience {
        title: "Experience",
        subtitle: "Where I have worked, and when.",
        present: "Present",
        empty: "No work records to show.",
    },
    contact: Contact {
        title: "Contact",
        subtitle: "The fastest ways to reach me.",
        github: "GitHub",
        email: "Email",
    },
    footer: Footer {
        rights: "All rights reserved.",
    },
};

pub const ZH: Translations = Translations {
    nav: Nav {
        home: "首頁",
        projects: "作品",
        experience: "經歷",
        contact: "聯絡",
    },
    hero: Hero {
        greeting: "嗨，我是瑋倫。",
        intro: "在台北的後端與系統開發者，平常做資料管線與遊戲伺服器，也寫了太多命令列工具。",
        skills_title: "常用技術",
        view_projects: "輸入 `folio projects` 瀏覽我的作品。",
        github: "GitHub",
    },
    projects: Projects {
        title: "作品集",
        subtitle: "一些我做過、也持續維護的東西。",
        code: "程式碼",
        demo: "展示",
        private: "非公開",
        filter_label: "篩選",
        filter_all: "全部",
        no_results: "沒有符合這項技術的作品。",
    },
    experience: Experience {
        title: "工作經歷",
        subtitle: "我待過的地方與時間。",
        present: "至今",
        empty: "沒有可顯示的工作經歷。",
    },
    contact: Contact {
        title: "聯絡方式",
        subtitle: "找到我最快的幾個管道。",
        github: "GitHub",
        email: "電子郵件",
    },
    footer: Footer {
        rights: "版權所有。",
    },
};

/// Returns the text table for the locale.
pub fn translations(locale: Locale) -> &'static Translations {
    match locale {
        Locale::En => &EN,
        Locale::Zh => &ZH,
    }
}

/// Localized display label for a work category.
///
/// Unknown categories fall back to their raw string; validation keeps
/// them off the timeline anyway.
pub fn category_label<'a>(category: &'a Category, locale: Locale) -> &'a str {
    match (category, locale) {
        (Category::FullTime, Locale::En) => "Full-time",
        (Category::FullTime, Locale::Zh) => "全職",
        (Category::PartTime, Locale::En) => "Part-time",
        (Category::PartTime, Locale::Zh) => "兼職",
        (Category::Freelance, Locale::En) => "Freelance",
        (Category::Freelance, Locale::Zh) => "自由接案",
        (Category::Contract, Locale::En) => "Contract",
        (Category::Contract, Locale::Zh) => "合約",
        (Category::Other(s), _) => s.as_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_builtin_category_has_labels_in_both_locales() {
        for category in &Category::BUILTIN {
            for locale in Locale::ALL {
                assert!(
                    !category_label(category, locale).is_empty(),
                    "missing {locale} label for {category}"
                );
            }
        }
    }

    #[test]
    fn labels_differ_between_locales() {
        assert_eq!(category_label(&Category::FullTime, Locale::En), "Full-time");
        assert_eq!(category_label(&Category::FullTime, Locale::Zh), "全職");
    }

    #[test]
    fn unknown_category_falls_back_to_raw_string() {
        let other = Category::Other("internship".into());
        assert_eq!(category_label(&other, Locale::En), "internship");
    }

    #[test]
    fn present_marker_per_locale() {
        assert_eq!(translations(Locale::En).experience.present, "Present");
        assert_eq!(translations(Locale::Zh).experience.present, "至今");
    }

    #[test]
    fn tables_resolve_by_locale() {
        assert_eq!(translations(Locale::En).projects.title, "Projects");
        assert_eq!(translations(Locale::Zh).projects.title, "作品集");
    }
}
