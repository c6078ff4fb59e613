//! Static copy for every section of the page. Icons are Font Awesome class
//! names resolved by the stylesheet linked in the page head.

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FeatureItem {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct StepItem {
    pub icon: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TechStackItem {
    pub icon: &'static str,
    pub name: &'static str,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Screenshot {
    pub url: &'static str,
    pub alt: &'static str,
}

pub const HERO_TITLE_TOP: &str = "Protect Your Clipboard.";
pub const HERO_TITLE_BOTTOM: &str = "Defend Your Digital World.";
pub const HERO_SUBTITLE: &str =
    "Real-time clipboard and screen threat detection powered by AI.";
pub const HERO_CTA: &str = "Try ClipSafe Free";

pub const HERO_BADGES: [&str; 3] = ["AI-powered", "Real-time", "Encrypted"];

pub const FEATURES: [FeatureItem; 4] = [
    FeatureItem {
        icon: "fas fa-infinity",
        title: "Unlimited Clipboard Scans",
        description: "Premium feature for continuous protection",
    },
    FeatureItem {
        icon: "fas fa-triangle-exclamation",
        title: "Real-time Threat Detection",
        description: "Instant on-screen security alerts",
    },
    FeatureItem {
        icon: "fas fa-lock",
        title: "Encrypted Clipboard",
        description: "Military-grade encryption for sensitive data",
    },
    FeatureItem {
        icon: "fas fa-rotate",
        title: "Cross-device Sync",
        description: "Seamless protection across all your devices",
    },
];

pub const STEPS: [StepItem; 4] = [
    StepItem { icon: "fas fa-copy", label: "Copy content" },
    StepItem { icon: "fas fa-shield-halved", label: "Instant scan" },
    StepItem { icon: "fas fa-brain", label: "AI analysis" },
    StepItem { icon: "fas fa-triangle-exclamation", label: "Threat warning" },
];

pub const TECH_STACK: [TechStackItem; 4] = [
    TechStackItem { icon: "fas fa-laptop", name: "ElectronJS" },
    TechStackItem { icon: "fas fa-brain", name: "GROQ AI" },
    TechStackItem { icon: "fas fa-database", name: "Supabase" },
    TechStackItem { icon: "fas fa-microchip", name: "Python" },
];

pub const SCREENSHOTS: [Screenshot; 2] = [
    Screenshot {
        url: "https://images.unsplash.com/photo-1607706189992-eae578626c86?auto=format&fit=crop&w=2000&q=80",
        alt: "ClipSafe Dashboard",
    },
    Screenshot {
        url: "https://images.unsplash.com/photo-1563986768609-322da13575f3?auto=format&fit=crop&w=2000&q=80",
        alt: "ClipSafe Security Analysis",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn feature_cards_match_marketing_copy_in_order() {
        let titles: Vec<&str> = FEATURES.iter().map(|f| f.title).collect();
        assert_eq!(
            titles,
            vec![
                "Unlimited Clipboard Scans",
                "Real-time Threat Detection",
                "Encrypted Clipboard",
                "Cross-device Sync",
            ]
        );
    }

    #[test]
    fn how_it_works_steps_are_ordered() {
        let labels: Vec<&str> = STEPS.iter().map(|s| s.label).collect();
        assert_eq!(
            labels,
            vec!["Copy content", "Instant scan", "AI analysis", "Threat warning"]
        );
    }

    #[test]
    fn tech_stack_names_are_ordered() {
        let names: Vec<&str> = TECH_STACK.iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["ElectronJS", "GROQ AI", "Supabase", "Python"]);
    }

    #[test]
    fn every_item_carries_an_icon_and_copy() {
        for feature in &FEATURES {
            assert!(!feature.icon.is_empty());
            assert!(!feature.description.is_empty());
        }
        for step in &STEPS {
            assert!(!step.icon.is_empty());
        }
        for tech in &TECH_STACK {
            assert!(!tech.icon.is_empty());
        }
    }

    #[test]
    fn screenshots_point_at_fixed_remote_urls() {
        assert_eq!(SCREENSHOTS.len(), 2);
        for shot in &SCREENSHOTS {
            assert!(shot.url.starts_with("https://"));
            assert!(!shot.alt.is_empty());
        }
    }
}
