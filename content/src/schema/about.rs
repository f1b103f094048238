use serde::{Deserialize, Serialize};

use crate::domain::{Content, ContentDomain};

/// About section: founder profile, mission statement, closing call to action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AboutContent {
    pub founder_name: String,
    pub founder_title: String,
    pub founder_quote: String,
    pub stats: AboutStats,
    pub mission_title: String,
    pub mission_description: String,
    pub cta_title: String,
    pub cta_description: String,
    pub cta_button_text: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AboutStats {
    pub experience: String,
    pub brands_transformed: String,
    pub revenue_generated: String,
}

impl Default for AboutStats {
    fn default() -> Self {
        Self {
            experience: "5+".to_owned(),
            brands_transformed: "140+".to_owned(),
            revenue_generated: "₹50Cr+".to_owned(),
        }
    }
}

impl Default for AboutContent {
    fn default() -> Self {
        Self {
            founder_name: "Akanshit Bhatnagar".to_owned(),
            founder_title: "Founder & Chief Strategist".to_owned(),
            founder_quote: "I didn't start Content Cartel to be another marketing agency. I built it to be \
                            the weapon that transforms ambitious brands into market dominators. Every \
                            campaign we craft, every story we tell, is designed with one goal: total market \
                            supremacy."
                .to_owned(),
            stats: AboutStats::default(),
            mission_title: "Our Mission".to_owned(),
            mission_description: "We believe every brand has the potential to dominate its market. Our \
                                  mission is to unlock that potential through strategic content marketing, \
                                  innovative campaigns, and relentless execution that transforms businesses \
                                  into industry leaders."
                .to_owned(),
            cta_title: "Ready to Transform Your Brand?".to_owned(),
            cta_description: "Let's build your content empire together and establish your dominance in the \
                              market."
                .to_owned(),
            cta_button_text: "Start Your Transformation".to_owned(),
        }
    }
}

impl Content for AboutContent {
    const DOMAIN: ContentDomain = ContentDomain::About;
}
