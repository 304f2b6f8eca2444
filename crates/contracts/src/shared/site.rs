//! Static content for the public marketing site.

pub const GYM_NAME: &str = "Iron Harbor Gym";
pub const TAGLINE: &str = "Stronger every session.";
pub const HERO_TEXT: &str =
    "Coached strength training, open gym and small-group classes for every level.";

pub const ABOUT_TEXT: &str = "Iron Harbor is an independent gym run by coaches. \
We program every training block in-house and keep classes small so each member \
gets real feedback on every lift.";

pub const ABOUT_HIGHLIGHTS: &[(&str, &str)] = &[
    ("12+", "Years coaching"),
    ("900", "Active members"),
    ("40", "Classes per week"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coach {
    pub name: &'static str,
    pub specialty: &'static str,
    pub bio: &'static str,
}

pub const COACHES: &[Coach] = &[
    Coach {
        name: "Ana Ribeiro",
        specialty: "Strength & Powerlifting",
        bio: "Competitive powerlifter focused on technique and long-term progression.",
    },
    Coach {
        name: "Marcus Hale",
        specialty: "Conditioning",
        bio: "Builds engines: intervals, rowing and sled work for all fitness levels.",
    },
    Coach {
        name: "Yuki Tanaka",
        specialty: "Mobility & Rehab",
        bio: "Physiotherapy background, helps members return to training after injury.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plan {
    pub id: &'static str,
    pub name: &'static str,
    pub monthly_price: u32,
    pub features: &'static [&'static str],
    pub featured: bool,
}

pub const PLANS: &[Plan] = &[
    Plan {
        id: "basic",
        name: "Basic",
        monthly_price: 39,
        features: &["Open gym access", "Locker room", "1 intro session"],
        featured: false,
    },
    Plan {
        id: "standard",
        name: "Standard",
        monthly_price: 69,
        features: &[
            "Everything in Basic",
            "Unlimited group classes",
            "Monthly progress check",
        ],
        featured: true,
    },
    Plan {
        id: "premium",
        name: "Premium",
        monthly_price: 129,
        features: &[
            "Everything in Standard",
            "4 personal training sessions",
            "Custom programming",
        ],
        featured: false,
    },
];

pub const ADDRESS: &str = "221 Harbor Street, Portside";
pub const PHONE: &str = "+1 (555) 014-2290";
pub const EMAIL: &str = "hello@ironharbor.example";
pub const MAP_EMBED_URL: &str =
    "https://www.openstreetmap.org/export/embed.html?bbox=-0.1300%2C51.5000%2C-0.1200%2C51.5060&layer=mapnik";

pub const OPENING_HOURS: &[(&str, &str)] = &[
    ("Mon - Fri", "06:00 - 22:00"),
    ("Saturday", "08:00 - 20:00"),
    ("Sunday", "09:00 - 14:00"),
];

/// Plan options in `(value, label)` form for select fields.
pub fn plan_options() -> Vec<(String, String)> {
    PLANS
        .iter()
        .map(|p| (p.id.to_string(), format!("{} - ${}/mo", p.name, p.monthly_price)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_featured_plan() {
        assert_eq!(PLANS.iter().filter(|p| p.featured).count(), 1);
    }

    #[test]
    fn test_plan_options_have_values() {
        let options = plan_options();
        assert_eq!(options.len(), PLANS.len());
        assert!(options.iter().all(|(value, _)| !value.is_empty()));
        assert_eq!(options[0].1, "Basic - $39/mo");
    }
}
