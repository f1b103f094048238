use serde::{Deserialize, Serialize};

use crate::domain::{Content, ContentDomain};

/// Services section: heading copy plus the ordered service cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServicesContent {
    pub heading: String,
    pub subheading: String,
    pub services: Vec<ServiceItem>,
}

/// One service card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub features: Vec<String>,
    /// Gradient token pair for the card icon, e.g. `from-blue-400 to-purple-600`.
    pub gradient: String,
}

impl ServiceItem {
    /// Entry appended by the editor's "add service" action.
    #[must_use]
    pub fn placeholder(id: String) -> Self {
        Self {
            id,
            title: "New Service".to_owned(),
            description: "Service description".to_owned(),
            features: vec!["Feature 1".to_owned(), "Feature 2".to_owned()],
            gradient: "from-blue-400 to-purple-600".to_owned(),
        }
    }
}

impl Default for ServiceItem {
    fn default() -> Self {
        Self::placeholder(String::new())
    }
}

impl Default for ServicesContent {
    fn default() -> Self {
        Self {
            heading: "Services That Command Attention".to_owned(),
            subheading: "We don't follow trends—we create them. Our strategic arsenal is designed to \
                         make your competitors question their life choices."
                .to_owned(),
            services: vec![
                ServiceItem {
                    id: "1".to_owned(),
                    title: "Content Strategy & Planning".to_owned(),
                    description: "We craft content strategies that don't just engage—they convert \
                                  browsers into buyers and followers into fanatics."
                        .to_owned(),
                    features: vec![
                        "Audience Research & Personas".to_owned(),
                        "Content Calendar Development".to_owned(),
                        "Competitive Analysis".to_owned(),
                        "ROI-Focused Planning".to_owned(),
                    ],
                    gradient: "from-blue-400 to-purple-600".to_owned(),
                },
                ServiceItem {
                    id: "2".to_owned(),
                    title: "Social Media Domination".to_owned(),
                    description: "Turn your social media into a lead-generating machine that works \
                                  24/7 to grow your empire."
                        .to_owned(),
                    features: vec![
                        "Platform-Specific Content".to_owned(),
                        "Community Management".to_owned(),
                        "Influencer Partnerships".to_owned(),
                        "Viral Campaign Creation".to_owned(),
                    ],
                    gradient: "from-purple-400 to-pink-600".to_owned(),
                },
            ],
        }
    }
}

impl Content for ServicesContent {
    const DOMAIN: ContentDomain = ContentDomain::Services;
}
