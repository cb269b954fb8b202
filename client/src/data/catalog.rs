//! Marketing-site records: pricing tiers, job openings, blog posts.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PricingTier {
    pub name: &'static str,
    pub monthly_price_cents: u64,
    pub blurb: &'static str,
    pub features: &'static [&'static str],
    pub highlighted: bool,
}

pub const PRICING_TIERS: &[PricingTier] = &[
    PricingTier {
        name: "Community",
        monthly_price_cents: 4_900,
        blurb: "One micro-turbine, remote monitoring, monthly reports.",
        features: &["1 site", "Daily telemetry", "Email alerts"],
        highlighted: false,
    },
    PricingTier {
        name: "Industrial",
        monthly_price_cents: 29_900,
        blurb: "Real-time monitoring for production installations.",
        features: &["Up to 10 sites", "Minute-level telemetry", "SMS + email alerts", "Maintenance scheduling"],
        highlighted: true,
    },
    PricingTier {
        name: "Utility",
        monthly_price_cents: 99_900,
        blurb: "Grid-scale arrays with dedicated support.",
        features: &["Unlimited sites", "Second-level telemetry", "24/7 on-call engineer", "SCADA export"],
        highlighted: false,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JobOpening {
    pub title: &'static str,
    pub team: &'static str,
    pub location: &'static str,
}

pub const JOB_OPENINGS: &[JobOpening] = &[
    JobOpening { title: "Field Service Technician", team: "Operations", location: "Portland, OR" },
    JobOpening { title: "Embedded Firmware Engineer", team: "Hardware", location: "Remote (US)" },
    JobOpening { title: "Hydrologist", team: "Site Engineering", location: "Des Moines, IA" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlogPost {
    pub slug: &'static str,
    pub title: &'static str,
    pub published: &'static str,
    pub summary: &'static str,
    pub body_markdown: &'static str,
}

pub const BLOG_POSTS: &[BlogPost] = &[
    BlogPost {
        slug: "why-rivers",
        title: "Why rivers, not dams",
        published: "2024-04-02",
        summary: "In-stream turbines produce power without impounding water.",
        body_markdown: "Hydrokinetic turbines sit **in the current**. No reservoir, no fish ladder.\n\n\
                        - Predictable output\n- Minimal civil works\n- Modular capacity\n",
    },
    BlogPost {
        slug: "winter-operations",
        title: "Keeping turbines spinning through ice season",
        published: "2024-01-18",
        summary: "What we learned running the Kvichak array through an Alaskan winter.",
        body_markdown: "Frazil ice is the enemy. Our *Kvichak* deployment ran at 71% capacity \
                        through January by raising rotor depth.\n",
    },
];

pub fn find_post(slug: &str) -> Option<&'static BlogPost> {
    BLOG_POSTS.iter().find(|p| p.slug == slug)
}
