//! Copy for the landing page, kept apart from the markup that lays it out.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Cloud,
    ShieldCheck,
    Cpu,
    Landmark,
    Hospital,
    GraduationCap,
    Building,
    CheckCircle,
    Rocket,
    MapPin,
    Phone,
    Mail,
    ArrowRight,
    BookOpen,
    Lock,
    Server,
    Globe,
    Wifi,
    Settings,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Cloud => "☁",
            Icon::ShieldCheck => "🛡",
            Icon::Cpu => "🧠",
            Icon::Landmark => "🏛",
            Icon::Hospital => "🏥",
            Icon::GraduationCap => "🎓",
            Icon::Building => "🏢",
            Icon::CheckCircle => "✔",
            Icon::Rocket => "🚀",
            Icon::MapPin => "📍",
            Icon::Phone => "📞",
            Icon::Mail => "✉",
            Icon::ArrowRight => "→",
            Icon::BookOpen => "📖",
            Icon::Lock => "🔒",
            Icon::Server => "🖥",
            Icon::Globe => "🌍",
            Icon::Wifi => "📶",
            Icon::Settings => "⚙",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Icon::Cloud => "cloud",
            Icon::ShieldCheck => "shield-check",
            Icon::Cpu => "cpu",
            Icon::Landmark => "landmark",
            Icon::Hospital => "hospital",
            Icon::GraduationCap => "graduation-cap",
            Icon::Building => "building",
            Icon::CheckCircle => "check-circle",
            Icon::Rocket => "rocket",
            Icon::MapPin => "map-pin",
            Icon::Phone => "phone",
            Icon::Mail => "mail",
            Icon::ArrowRight => "arrow-right",
            Icon::BookOpen => "book-open",
            Icon::Lock => "lock",
            Icon::Server => "server",
            Icon::Globe => "globe",
            Icon::Wifi => "wifi",
            Icon::Settings => "settings",
        }
    }
}

pub const COMPANY: &str = "LewisCloud Innovations";
pub const COMPANY_LEGAL: &str = "LewisCloud Innovations Limited";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { href: "#services", label: "Services" },
    NavLink { href: "#iot", label: "IoT & Automation" },
    NavLink { href: "#packages", label: "Packages" },
    NavLink { href: "#industries", label: "Industries" },
    NavLink { href: "#training", label: "Training" },
    NavLink { href: "#about", label: "About" },
    NavLink { href: "#contact", label: "Contact" },
];

/// Ids of the sections the page renders, in order. Untitled sections
/// (hero, why-us, call to action) carry no id.
pub const SECTION_IDS: &[&str] = &["services", "iot", "packages", "industries", "training", "about", "contact"];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const HERO_STATS: &[Stat] = &[
    Stat { value: "99.95%", label: "Uptime targets" },
    Stat { value: ">=30%", label: "Avg. cost savings" },
    Stat { value: "24/7", label: "Security monitoring" },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Service {
    pub icon: Icon,
    pub title: &'static str,
    pub desc: &'static str,
}

pub const HERO_HIGHLIGHTS: &[Service] = &[
    Service {
        icon: Icon::Server,
        title: "Managed Cloud",
        desc: "Deploy, scale, and maintain apps on AWS/GCP/Azure or our optimized VPS.",
    },
    Service {
        icon: Icon::ShieldCheck,
        title: "Cloud Security",
        desc: "Zero-trust design, WAF, MFA/SSO, SIEM, and encrypted backups by default.",
    },
    Service {
        icon: Icon::Wifi,
        title: "IoT Platforms",
        desc: "Device onboarding, MQTT/HTTPS, edge gateways, over-the-air updates and telemetry.",
    },
    Service {
        icon: Icon::Settings,
        title: "Automation",
        desc: "Smart workflows for offices, factories and logistics; API integrations that save hours.",
    },
];

pub const SERVICES: &[Service] = &[
    Service {
        icon: Icon::Cloud,
        title: "Cloud Migration & DevOps",
        desc: "Lift-and-shift and modernization, CI/CD, IaC (Terraform), autoscaling, cost optimization.",
    },
    Service {
        icon: Icon::Lock,
        title: "Security-as-a-Service",
        desc: "Zero-trust access, WAF, endpoint protection, patching, SIEM, SOC-light with 24/7 alerting.",
    },
    Service {
        icon: Icon::ShieldCheck,
        title: "Pen-Testing & Audit",
        desc: "External & internal tests, web/API testing, hardened configs, policy frameworks & playbooks.",
    },
    Service {
        icon: Icon::Globe,
        title: "Backups & DR",
        desc: "Encrypted multi-region backups, RPO/RTO planning, DR runbooks and drills.",
    },
    Service {
        icon: Icon::Cpu,
        title: "AI-assisted Security",
        desc: "Anomaly detection on auth, payments & network logs; automated triage & ticketing.",
    },
    Service {
        icon: Icon::BookOpen,
        title: "Training & Awareness",
        desc: "Phishing simulations, admin upskilling, compliance clinics (NDPR, GDPR, HIPAA).",
    },
    Service {
        icon: Icon::Wifi,
        title: "IoT Security",
        desc: "Protect sensors, cameras & wearables with cert-based auth, network segmentation & monitoring.",
    },
    Service {
        icon: Icon::Settings,
        title: "Automation & Smart Systems",
        desc: "Smart office/industry workflows, rule engines, API/PLC integrations and dashboards.",
    },
];

pub const IOT_DELIVERABLES: &[&str] = &[
    "Device onboarding (PKI), OTA updates, fleet management",
    "Protocols: MQTT/HTTPS/WebSockets, edge gateways",
    "Time-series storage, alerting, dashboards",
    "Automation rules: if-this-then-that across apps & devices",
    "Security: cert rotation, network segmentation, SIEM feeds",
];

pub const IOT_USE_CASES: &[&str] = &[
    "Smart facilities (energy & access), CCTV health, occupancy",
    "Industrial IoT (factories, PLC integrations, condition monitoring)",
    "Fleet & logistics (GPS, cold-chain, geofencing)",
    "Healthcare (device telemetry, compliance logging)",
    "Home & small office automation (security, sensors, climate)",
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tier {
    pub name: &'static str,
    pub price: &'static str,
    pub tagline: &'static str,
    pub items: &'static [&'static str],
    pub cta: &'static str,
}

impl Tier {
    /// Only numeric prices are billed monthly; "Custom" is quoted.
    pub fn is_monthly(&self) -> bool {
        self.price.starts_with('$')
    }
}

pub const TIERS: &[Tier] = &[
    Tier {
        name: "Starter",
        price: "$199",
        tagline: "For small teams and startups getting cloud-ready.",
        items: &[
            "Cloud assessment & onboarding",
            "Basic WAF + MFA setup",
            "Nightly encrypted backups",
            "Monthly security report",
        ],
        cta: "Get Starter",
    },
    Tier {
        name: "Growth",
        price: "$499",
        tagline: "For SMEs needing performance, uptime, and compliance.",
        items: &[
            "Managed hosting & CI/CD",
            "24/7 monitoring & alerting",
            "Pen-test (quarterly)",
            "Compliance pack (NDPR/GDPR)",
        ],
        cta: "Choose Growth",
    },
    Tier {
        name: "Shield Enterprise",
        price: "Custom",
        tagline: "For finance, healthcare, public sector, and regional scale.",
        items: &[
            "Zero-trust architecture",
            "SOC light + SIEM integration",
            "DR drills & multi-region HA",
            "Dedicated TAM & SLAs",
        ],
        cta: "Talk to Sales",
    },
];

pub const INDUSTRIES: &[Service] = &[
    Service {
        icon: Icon::Landmark,
        title: "Financial Services",
        desc: "PCI-aware cloud setups, secure payments, fraud analytics, and audit trails.",
    },
    Service {
        icon: Icon::Hospital,
        title: "Healthcare",
        desc: "Encrypted PHI, fine-grained access, data retention, and DR for clinics & labs.",
    },
    Service {
        icon: Icon::GraduationCap,
        title: "Education",
        desc: "Secure LMS, student privacy, affordable hosting for schools and EdTech.",
    },
    Service {
        icon: Icon::Building,
        title: "SMEs & NGOs",
        desc: "From websites and CRMs to secure file-sharing and donor data protection.",
    },
    Service {
        icon: Icon::Wifi,
        title: "IoT & Automation",
        desc: "Factories, smart homes, logistics; secure, monitor, and optimize device fleets at scale.",
    },
];

pub const MISSION: &str = "Empower businesses and communities with secure, scalable, and affordable cloud solutions, protecting data while fueling growth.";
pub const VISION: &str = "Become Africa's most trusted cloud-cyber partner, delivering defense-grade security to everyday organizations.";

pub const PRINCIPLES: &[&str] = &[
    "Security by default",
    "Cost transparency",
    "Open standards & portability",
    "People-first support",
];

pub const TRAININGS: &[Service] = &[
    Service {
        icon: Icon::BookOpen,
        title: "Cyber Awareness 101",
        desc: "Phishing, passwords, device hygiene, safe browsing; includes quizzes and certificates.",
    },
    Service {
        icon: Icon::ShieldCheck,
        title: "Admin Hardening",
        desc: "SSO/MFA, role design, logging, SIEM basics, incident runbooks for IT teams.",
    },
    Service {
        icon: Icon::Cpu,
        title: "AI for Security",
        desc: "Using logs and ML to detect anomalies; hands-on with safe, ethical practices.",
    },
];

pub const BELIEF: &str = "Cloud should be simple, secure, and affordable. We combine best-practice architectures with real-world pragmatism so teams can move faster without sacrificing safety or compliance.";

pub const WORKING_STYLE: &[&str] = &[
    "Assess → Plan → Migrate → Secure → Automate → Support",
    "Clear pricing and monthly reporting",
    "Vendor-neutral, multi-cloud & edge-friendly",
    "Local presence, regional reach",
];

pub const SERVICES_OF_INTEREST: &[&str] = &[
    "Cloud migration",
    "Managed security",
    "Pen-testing",
    "Backups & DR",
    "IoT & Automation",
    "Training",
];

pub const CONTACT_DETAILS: &[(Icon, &str)] = &[
    (Icon::MapPin, "Africa-first, serving clients globally"),
    (Icon::Phone, "+234 (0) 000-000-0000"),
    (Icon::Mail, "hello@lewiscloudinnovations.com"),
];
