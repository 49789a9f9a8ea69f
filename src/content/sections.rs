//! Typed views of the required sections.
//!
//! Use [`LanguageContent::typed_section`](crate::content::LanguageContent::typed_section) to
//! read one of these out of a loaded document.

use crate::content::{Section, SectionContent};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ==================== Navigation ====================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InformationSubmenu {
    pub about: String,
    pub fees: String,
    pub privacy: String,
    pub menu: String,
    pub programs: String,
    pub enrolment: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassesSubmenu {
    pub nyuuji: String,
    pub youji: String,
    pub star: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationContent {
    pub home: String,
    pub information: String,
    pub information_submenu: InformationSubmenu,
    pub forms: String,
    pub classes: String,
    pub classes_submenu: ClassesSubmenu,
    pub activities: String,
}

impl SectionContent for NavigationContent {
    const SECTION: Section = Section::Navigation;
}

// ==================== Header / Announcement ====================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderContent {
    pub email: String,
    pub language_toggle: String,
    pub site_name: String,
    #[serde(default)]
    pub contact_button: String,
    #[serde(default)]
    pub mailto_subject: String,
    #[serde(default)]
    pub mailto_body: String,
}

impl SectionContent for HeaderContent {
    const SECTION: Section = Section::Header;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnouncementContent {
    pub title: String,
    pub content: String,
    pub read_more_text: String,
    pub read_more_link: String,
    pub minimized_text: String,
}

impl SectionContent for AnnouncementContent {
    const SECTION: Section = Section::Announcement;
}

// ==================== Hero ====================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroHomepage {
    pub title: String,
    pub subtitle: String,
    pub button_text: String,
    pub button_link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroPage {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroPages {
    pub about: HeroPage,
    pub fees: HeroPage,
    pub privacy: HeroPage,
    pub menu: HeroPage,
    pub programs: HeroPage,
    pub enrolment: HeroPage,
    pub forms: HeroPage,
    pub nyuuji: HeroPage,
    pub youji: HeroPage,
    pub star: HeroPage,
    pub activities: HeroPage,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroContent {
    pub homepage: HeroHomepage,
    pub pages: HeroPages,
}

impl SectionContent for HeroContent {
    const SECTION: Section = Section::Hero;
}

// ==================== Age Groups / About / Blog ====================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeGroupInfo {
    pub name: String,
    pub age_range: String,
    pub description: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeGroupsContent {
    pub section_title: String,
    pub nyuuji: AgeGroupInfo,
    pub youji: AgeGroupInfo,
    pub star: AgeGroupInfo,
}

impl SectionContent for AgeGroupsContent {
    const SECTION: Section = Section::AgeGroups;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutContent {
    pub section_title: String,
    pub description: String,
    pub philosophy: String,
    /// Long-form copy for the about page itself
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<Value>,
}

impl SectionContent for AboutContent {
    const SECTION: Section = Section::About;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogContent {
    pub section_title: String,
    pub view_all_text: String,
}

impl SectionContent for BlogContent {
    const SECTION: Section = Section::Blog;
}

// ==================== Footer ====================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterLinks {
    pub home: String,
    pub about: String,
    pub programs: String,
    pub contact: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterQuickLinks {
    pub title: String,
    pub links: FooterLinks,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterContact {
    pub title: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterSection {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterContent {
    pub quick_links: FooterQuickLinks,
    pub contact: FooterContact,
    pub social: FooterSection,
    pub location: FooterSection,
}

impl SectionContent for FooterContent {
    const SECTION: Section = Section::Footer;
}
