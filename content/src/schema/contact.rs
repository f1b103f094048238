use serde::{Deserialize, Serialize};

use crate::domain::{Content, ContentDomain};

/// Contact section copy and agency contact channels.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactContent {
    pub heading: String,
    pub subheading: String,
    pub description: String,
    pub form_title: String,
    pub contact_info: ContactInfo,
    pub response_guarantee: ResponseGuarantee,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactInfo {
    pub email: String,
    pub email_description: String,
    pub phone: String,
    pub phone_description: String,
    pub location: String,
    pub location_description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResponseGuarantee {
    pub title: String,
    pub description: String,
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self {
            email: "hello@contentcartel.in".to_owned(),
            email_description: "For new business inquiries".to_owned(),
            phone: "+91 7452859955".to_owned(),
            phone_description: "Mon-Fri 9AM-6PM IST".to_owned(),
            location: "Agra, India".to_owned(),
            location_description: "Where empires are built".to_owned(),
        }
    }
}

impl Default for ResponseGuarantee {
    fn default() -> Self {
        Self {
            title: "24-Hour Response Guarantee".to_owned(),
            description: "We respond to all serious inquiries within 24 hours. For urgent projects, call us \
                          directly and we'll prioritize your empire-building mission."
                .to_owned(),
        }
    }
}

impl Default for ContactContent {
    fn default() -> Self {
        Self {
            heading: "Let's Build Your Content Empire".to_owned(),
            subheading: "Every empire starts with a conversation. Tell us your vision, and we'll show you \
                         how to make it reality."
                .to_owned(),
            description: "Ready to transform your brand into a market-dominating force? Our strategists are \
                          standing by to discuss your vision and create a roadmap to content supremacy."
                .to_owned(),
            form_title: "Start Your Transformation".to_owned(),
            contact_info: ContactInfo::default(),
            response_guarantee: ResponseGuarantee::default(),
        }
    }
}

impl Content for ContactContent {
    const DOMAIN: ContentDomain = ContentDomain::Contact;
}
