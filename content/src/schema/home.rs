use serde::{Deserialize, Serialize};

use crate::domain::{Content, ContentDomain};

/// Hero block at the top of the public page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HomeContent {
    pub badge: Badge,
    pub headline: Headline,
    pub subtitle: String,
    pub buttons: CtaButtons,
    pub stats: HeroStats,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Badge {
    pub text: String,
    /// Symbolic icon name rendered next to the badge text.
    pub icon: String,
}

/// Two-line headline; `highlighted` renders on the second, accented line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Headline {
    pub main: String,
    pub highlighted: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CtaButtons {
    pub primary: String,
    pub secondary: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroStats {
    pub roi: String,
    pub audience: String,
    pub launch_time: String,
}

impl Default for Badge {
    fn default() -> Self {
        Self { text: "Premium Content Marketing Agency".to_owned(), icon: "Zap".to_owned() }
    }
}

impl Default for Headline {
    fn default() -> Self {
        Self {
            main: "Dominate Your Market".to_owned(),
            highlighted: "With Content That Converts".to_owned(),
        }
    }
}

impl Default for CtaButtons {
    fn default() -> Self {
        Self { primary: "Start Your Domination".to_owned(), secondary: "View Our Arsenal".to_owned() }
    }
}

impl Default for HeroStats {
    fn default() -> Self {
        Self { roi: "500%".to_owned(), audience: "2M+".to_owned(), launch_time: "48H".to_owned() }
    }
}

impl Default for HomeContent {
    fn default() -> Self {
        Self {
            badge: Badge::default(),
            headline: Headline::default(),
            subtitle: "We don't just create content—we orchestrate campaigns that captivate audiences, \
                       build empires, and turn your brand into an unstoppable force."
                .to_owned(),
            buttons: CtaButtons::default(),
            stats: HeroStats::default(),
        }
    }
}

impl Content for HomeContent {
    const DOMAIN: ContentDomain = ContentDomain::Home;
}
