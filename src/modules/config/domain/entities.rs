use serde::{Deserialize, Serialize};
use uuid::Uuid;

//
// ──────────────────────────────────────────────────────────
// Portfolio document
// ──────────────────────────────────────────────────────────
//
// The root entity every other module works against. Field names serialize
// as camelCase so the persisted layout matches previously stored documents
// (`portfolioConfig` / `sharedPortfolios` keys).
//
// Collection elements carry a stable `id` minted at creation time. Stored
// documents written before ids existed deserialize fine: the serde default
// mints a fresh id on load.
//

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioConfig {
    pub hero: Hero,
    pub skills: Vec<Skill>,
    pub software: Vec<SoftwareTool>,
    pub projects: Vec<Project>,
    pub testimonials: Vec<Testimonial>,
    pub clients: Vec<Client>,
    pub contact: Contact,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub name: String,
    pub title: String,
    pub description: String,
    pub image: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    pub category: String,
    /// 0–100. Out-of-range values are reported by [`PortfolioConfig::validate`],
    /// not rejected.
    pub proficiency: u8,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SoftwareTool {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    pub icon: String,
    /// 0–100, same data-quality rule as [`Skill::proficiency`].
    pub proficiency: u8,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub category: String,
    pub link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_description: Option<String>,
    #[serde(default)]
    pub additional_images: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    pub role: String,
    pub company: String,
    pub image: String,
    pub content: String,
    /// 1–5 stars.
    pub rating: u8,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    pub icon: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub email: String,
    pub socials: Vec<SocialLink>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

//
// ──────────────────────────────────────────────────────────
// Template variant
// ──────────────────────────────────────────────────────────
//

/// The visual renderer a snapshot was published with. Independent of
/// document content; stored alongside it in the published table as
/// `"graphic"` / `"development"`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TemplateVariant {
    #[default]
    Graphic,
    Development,
}

impl PortfolioConfig {
    /// Data-quality pass over bounded numeric fields. Returns one message
    /// per out-of-range value; callers log these, nothing is rejected.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        for skill in &self.skills {
            if skill.proficiency > 100 {
                issues.push(format!(
                    "skill `{}` has proficiency {} (expected 0-100)",
                    skill.name, skill.proficiency
                ));
            }
        }

        for tool in &self.software {
            if tool.proficiency > 100 {
                issues.push(format!(
                    "software `{}` has proficiency {} (expected 0-100)",
                    tool.name, tool.proficiency
                ));
            }
        }

        for testimonial in &self.testimonials {
            if !(1..=5).contains(&testimonial.rating) {
                issues.push(format!(
                    "testimonial from `{}` has rating {} (expected 1-5)",
                    testimonial.name, testimonial.rating
                ));
            }
        }

        issues
    }
}
