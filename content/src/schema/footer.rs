use serde::{Deserialize, Serialize};

use crate::domain::{Content, ContentDomain};

/// Site footer: brand blurb, three link columns, social/contact/legal text,
/// and its own color styling.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FooterContent {
    pub company_name: String,
    pub description: String,
    pub sections: FooterSections,
    pub social_links: SocialLinks,
    pub contact_info: FooterContactInfo,
    pub legal: FooterLegal,
    pub styling: FooterStyling,
}

/// Menu columns. Each column must keep at least one entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FooterSections {
    pub services: Vec<String>,
    pub company: Vec<String>,
    pub resources: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialLinks {
    pub twitter: String,
    pub linkedin: String,
    pub instagram: String,
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FooterContactInfo {
    pub email: String,
    pub phone: String,
    pub address: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FooterLegal {
    pub copyright: String,
    pub privacy_policy: String,
    pub terms_of_service: String,
    pub cookie_policy: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FooterStyling {
    pub background_color: String,
    pub text_color: String,
    pub link_color: String,
    /// Image URL (or data URL) drawn behind the footer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

impl Default for FooterSections {
    fn default() -> Self {
        Self {
            services: owned(&[
                "Brand Strategy",
                "Content Creation",
                "Performance Marketing",
                "Video Production",
                "Email Marketing",
                "Digital Transformation",
            ]),
            company: owned(&["About Us", "Our Process", "Case Studies", "Careers", "Blog", "Contact"]),
            resources: owned(&[
                "Content Audit",
                "Strategy Toolkit",
                "Industry Reports",
                "Webinars",
                "Templates",
                "Newsletter",
            ]),
        }
    }
}

impl Default for SocialLinks {
    fn default() -> Self {
        Self {
            twitter: "https://twitter.com/contentcartel".to_owned(),
            linkedin: "https://linkedin.com/company/contentcartel".to_owned(),
            instagram: "https://instagram.com/contentcartel".to_owned(),
            email: "hello@contentcartel.in".to_owned(),
        }
    }
}

impl Default for FooterContactInfo {
    fn default() -> Self {
        Self {
            email: "hello@contentcartel.in".to_owned(),
            phone: "+91 7452859955".to_owned(),
            address: "Agra, India".to_owned(),
        }
    }
}

impl Default for FooterLegal {
    fn default() -> Self {
        Self {
            copyright: "© 2024 Content Cartel. All rights reserved.".to_owned(),
            privacy_policy: "Privacy Policy".to_owned(),
            terms_of_service: "Terms of Service".to_owned(),
            cookie_policy: "Cookie Policy".to_owned(),
        }
    }
}

impl Default for FooterStyling {
    fn default() -> Self {
        Self {
            background_color: "#1a1a1a".to_owned(),
            text_color: "#ffffff".to_owned(),
            link_color: "#4ade80".to_owned(),
            background_image: None,
        }
    }
}

impl Default for FooterContent {
    fn default() -> Self {
        Self {
            company_name: "Content Cartel".to_owned(),
            description: "We don't just create content—we orchestrate campaigns that build empires and \
                          establish market dominance."
                .to_owned(),
            sections: FooterSections::default(),
            social_links: SocialLinks::default(),
            contact_info: FooterContactInfo::default(),
            legal: FooterLegal::default(),
            styling: FooterStyling::default(),
        }
    }
}

impl Content for FooterContent {
    const DOMAIN: ContentDomain = ContentDomain::Footer;
}
