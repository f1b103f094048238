use serde::{Deserialize, Serialize};

use crate::domain::{Content, ContentDomain};

/// Portfolio section: featured case study, headline stats, client names.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PortfolioContent {
    pub heading: String,
    pub subheading: String,
    pub description: String,
    pub featured_case: FeaturedCase,
    pub stats: PortfolioStats,
    pub clients: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeaturedCase {
    pub title: String,
    pub category: String,
    pub description: String,
    pub revenue_growth: String,
    pub users_acquired: String,
    pub valuation: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PortfolioStats {
    pub clients_served: String,
    pub success_rate: String,
    pub revenue_generated: String,
    pub client_rating: String,
}

impl Default for FeaturedCase {
    fn default() -> Self {
        Self {
            title: "TechStart Unicorn".to_owned(),
            category: "SaaS Startup".to_owned(),
            description: "Transformed a struggling SaaS startup into a $100M valuation through strategic \
                          content marketing and brand positioning."
                .to_owned(),
            revenue_growth: "850%".to_owned(),
            users_acquired: "2.3M".to_owned(),
            valuation: "$100M".to_owned(),
        }
    }
}

impl Default for PortfolioStats {
    fn default() -> Self {
        Self {
            clients_served: "140+".to_owned(),
            success_rate: "85%".to_owned(),
            revenue_generated: "₹50Cr".to_owned(),
            client_rating: "4.9★".to_owned(),
        }
    }
}

impl Default for PortfolioContent {
    fn default() -> Self {
        Self {
            heading: "Empires We've Built & Conquered".to_owned(),
            subheading: "From startups to industry giants, witness the transformation of brands into \
                         market-dominating forces."
                .to_owned(),
            description: "These brands didn't just grow—they dominated. Ready to write your own success \
                          story and join the ranks of market leaders?"
                .to_owned(),
            featured_case: FeaturedCase::default(),
            stats: PortfolioStats::default(),
            clients: ["NUCLEAR", "VIBECRAFT", "Kidult India", "PVR CINEMAS"]
                .into_iter()
                .map(str::to_owned)
                .collect(),
        }
    }
}

impl Content for PortfolioContent {
    const DOMAIN: ContentDomain = ContentDomain::Portfolio;
}
