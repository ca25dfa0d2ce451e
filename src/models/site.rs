//! Page content: sections, slides, tabs, services, and statistics.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::form::ApplicationForm;

/// Identifier for a page section, in top-to-bottom page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    /// Hero carousel
    Home,
    /// Tabbed about panel
    About,
    /// Service cards
    Services,
    /// Animated statistics
    Stats,
    /// Application form
    Careers,
}

impl SectionId {
    /// All sections in page order.
    pub const ALL: [Self; 5] = [
        Self::Home,
        Self::About,
        Self::Services,
        Self::Stats,
        Self::Careers,
    ];

    /// Human-readable section title.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About Us",
            Self::Services => "Services",
            Self::Stats => "By the Numbers",
            Self::Careers => "Careers",
        }
    }
}

/// One entry in the navigation menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    /// Menu label
    pub label: String,
    /// Section the entry scrolls to
    pub section: SectionId,
    /// For about entries, the tab to activate once the scroll settles
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab: Option<String>,
}

/// One hero carousel slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    /// Headline
    pub title: String,
    /// Supporting line under the headline
    pub subtitle: String,
}

/// One tab of the about panel, keyed by a stable string identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutTab {
    /// Stable key shared between the tab button and its panel
    pub key: String,
    /// Tab button label
    pub label: String,
    /// Panel body paragraphs
    pub body: Vec<String>,
}

/// One service card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    /// Card title
    pub title: String,
    /// Short description
    pub blurb: String,
}

/// One animated statistic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    /// Label under the number
    pub label: String,
    /// Final value the counter animates toward
    pub target: u64,
}

/// Complete page content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteContent {
    /// Company name shown in the header
    pub company: String,
    /// Tagline shown next to the company name
    pub tagline: String,
    /// Navigation menu entries
    #[serde(default)]
    pub nav: Vec<NavItem>,
    /// Hero carousel slides
    #[serde(default)]
    pub slides: Vec<Slide>,
    /// About panel tabs
    #[serde(default)]
    pub about: Vec<AboutTab>,
    /// Service cards
    #[serde(default)]
    pub services: Vec<Service>,
    /// Animated statistics
    #[serde(default)]
    pub stats: Vec<Stat>,
    /// Job application form definition
    #[serde(default)]
    pub form: ApplicationForm,
}

impl SiteContent {
    /// Loads content from a TOML file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read content file: {}", path.display()))?;
        let content: Self = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse content file: {}", path.display()))?;
        Ok(content)
    }
}

impl Default for SiteContent {
    /// Built-in demo content, used when no content file is given.
    fn default() -> Self {
        Self {
            company: "Meridian Build Co.".to_string(),
            tagline: "Spaces that work".to_string(),
            nav: SectionId::ALL
                .iter()
                .map(|&section| NavItem {
                    label: section.title().to_string(),
                    section,
                    tab: None,
                })
                .chain(std::iter::once(NavItem {
                    label: "Our Mission".to_string(),
                    section: SectionId::About,
                    tab: Some("mission".to_string()),
                }))
                .collect(),
            slides: vec![
                Slide {
                    title: "We design and build workplaces".to_string(),
                    subtitle: "Full-service planning, fit-out, and delivery".to_string(),
                },
                Slide {
                    title: "Twenty years, four hundred projects".to_string(),
                    subtitle: "From single suites to whole campuses".to_string(),
                },
                Slide {
                    title: "On time and on budget".to_string(),
                    subtitle: "Fixed-price delivery with weekly reporting".to_string(),
                },
                Slide {
                    title: "We're hiring".to_string(),
                    subtitle: "Scroll down to the careers section to apply".to_string(),
                },
            ],
            about: vec![
                AboutTab {
                    key: "story".to_string(),
                    label: "Our Story".to_string(),
                    body: vec![
                        "Founded in 2006 as a two-person drafting studio, Meridian has grown \
                         into a full design-build practice."
                            .to_string(),
                        "We still run every project the way we ran the first one: one team, \
                         one point of contact, no surprises."
                            .to_string(),
                    ],
                },
                AboutTab {
                    key: "mission".to_string(),
                    label: "Mission".to_string(),
                    body: vec![
                        "Deliver working environments that people actually want to be in, \
                         at a price their employers can justify."
                            .to_string(),
                    ],
                },
                AboutTab {
                    key: "values".to_string(),
                    label: "Values".to_string(),
                    body: vec![
                        "Say what we'll do, then do it.".to_string(),
                        "Measure twice. Every change order is a design failure.".to_string(),
                        "Leave every site cleaner than we found it.".to_string(),
                    ],
                },
            ],
            services: vec![
                Service {
                    title: "Space Planning".to_string(),
                    blurb: "Programming, test fits, and stacking studies".to_string(),
                },
                Service {
                    title: "Interior Fit-Out".to_string(),
                    blurb: "Construction management from permit to punch list".to_string(),
                },
                Service {
                    title: "Furniture & Move".to_string(),
                    blurb: "Procurement, delivery, and day-one support".to_string(),
                },
            ],
            stats: vec![
                Stat {
                    label: "Projects completed".to_string(),
                    target: 412,
                },
                Stat {
                    label: "Repeat clients".to_string(),
                    target: 187,
                },
                Stat {
                    label: "Years in business".to_string(),
                    target: 20,
                },
                Stat {
                    label: "Team members".to_string(),
                    target: 63,
                },
            ],
            form: ApplicationForm::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_content_is_complete() {
        let content = SiteContent::default();
        assert!(!content.slides.is_empty());
        assert!(!content.about.is_empty());
        assert!(!content.stats.is_empty());
        assert!(!content.form.steps.is_empty());
        // One entry per section plus the deep link to the mission tab.
        assert_eq!(content.nav.len(), SectionId::ALL.len() + 1);
        let mission = content.nav.last().unwrap();
        assert_eq!(mission.section, SectionId::About);
        assert_eq!(mission.tab.as_deref(), Some("mission"));
    }

    #[test]
    fn test_about_keys_are_unique() {
        let content = SiteContent::default();
        let mut keys: Vec<&str> = content.about.iter().map(|t| t.key.as_str()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), content.about.len());
    }

    #[test]
    fn test_content_round_trip() {
        let content = SiteContent::default();
        let toml_str = toml::to_string(&content).unwrap();
        let parsed: SiteContent = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, content);
    }

    #[test]
    fn test_partial_content_file() {
        let toml_str = "company = \"Acme\"\ntagline = \"We make anvils\"\n";
        let parsed: SiteContent = toml::from_str(toml_str).unwrap();
        assert_eq!(parsed.company, "Acme");
        assert!(parsed.slides.is_empty());
        assert!(parsed.about.is_empty());
    }
}
