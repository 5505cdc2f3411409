//! Static page content.
//!
//! Every record here is a literal: nothing is created or changed at
//! runtime. The tables are `Serialize` so the build tool can dump them, and
//! [`SiteContent::validate`] guards them against editing mistakes.
//!
//! # Example
//!
//! ```rust
//! use nit_site::content::{self, AccentColor};
//!
//! assert_eq!(content::BRANDS.len(), 2);
//! assert_eq!(content::BRANDS[1].accent, AccentColor::Purple);
//! content::validate().unwrap();
//! ```

use std::collections::HashSet;

use serde::Serialize;

use crate::error::{Result, SiteError};

/// Company name used in the nav, hero and footer.
pub const COMPANY: &str = "NIT AMERICA";
/// Year printed in the copyright line.
pub const COPYRIGHT_YEAR: u16 = 2026;
/// Business inquiry address.
pub const CONTACT_EMAIL: &str = "nit@nitsoft.biz";
/// Hero background image.
pub const HERO_IMAGE: &str = "/images/hero-la.png";

/// Cosmetic highlight family of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccentColor {
    /// Cyan accent.
    Blue,
    /// Purple accent.
    Purple,
}

impl AccentColor {
    /// Lowercase name, as used in `data-accent`.
    pub fn as_str(self) -> &'static str {
        match self {
            AccentColor::Blue => "blue",
            AccentColor::Purple => "purple",
        }
    }

    /// Class for accent-colored text.
    pub fn text_class(self) -> &'static str {
        match self {
            AccentColor::Blue => "text-accent",
            AccentColor::Purple => "text-purple",
        }
    }

    /// Class for the glowing border on hover.
    pub fn glow_class(self) -> &'static str {
        match self {
            AccentColor::Blue => "hover-glow-cyan",
            AccentColor::Purple => "hover-glow-purple",
        }
    }

    /// Classes for the scan line sweeping across a hovered card.
    pub fn scanner_class(self) -> &'static str {
        match self {
            AccentColor::Blue => "scanner-line",
            AccentColor::Purple => "scanner-line scanner-line-purple",
        }
    }

    /// Class for the small status dot next to accent copy.
    pub fn dot_class(self) -> &'static str {
        match self {
            AccentColor::Blue => "dot-cyan",
            AccentColor::Purple => "dot-purple",
        }
    }
}

/// Line icon shown next to a piece of content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconKind {
    /// Call-to-action arrow.
    ArrowRight,
    /// Magnifier, trend sourcing.
    Search,
    /// Document, licensing.
    FileText,
    /// Gear, operations.
    Settings,
    /// Rising chart, expansion.
    TrendingUp,
    /// Envelope, business inquiry.
    Mail,
    /// Globe, headquarters.
    Globe,
    /// Map pin, local office.
    MapPin,
}

/// One brand in the portfolio.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BrandEntry {
    /// Image path, relative to the asset base.
    pub image: &'static str,
    /// Category label shown above the name.
    pub category: &'static str,
    /// Brand name.
    pub name: &'static str,
    /// One-sentence pitch.
    pub description: &'static str,
    /// Accent color of the card.
    pub accent: AccentColor,
    /// Extra reveal delay in seconds.
    pub delay: f64,
}

/// One step of the service pipeline.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ServiceStep {
    /// Two-digit ordinal, "01" first.
    pub num: &'static str,
    /// Short step name shown as a badge.
    pub title: &'static str,
    /// Heading of the card.
    pub subtitle: &'static str,
    /// Glyph of the card.
    pub icon: IconKind,
    /// What happens in this step.
    pub description: &'static str,
}

/// External partner link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PartnerLink {
    /// Display name.
    pub name: &'static str,
    /// Absolute `https://` URL, opened in a new tab.
    pub url: &'static str,
}

/// Office card in the contact section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Office {
    /// Role of the office, e.g. "Global Sourcing HQ".
    pub label: &'static str,
    /// City and region.
    pub city: &'static str,
    /// One-line description next to the icon.
    pub tagline: &'static str,
    /// Glyph next to the tagline.
    pub icon: IconKind,
    /// Accent color of the card.
    pub accent: AccentColor,
}

/// Top-level page sections, in page order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    /// Hero.
    Home,
    /// Company introduction.
    About,
    /// Brand portfolio.
    Brands,
    /// Service pipeline.
    Service,
    /// Contact footer.
    Contact,
}

impl SectionId {
    /// All sections, top to bottom.
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Brands,
        SectionId::Service,
        SectionId::Contact,
    ];

    /// DOM id, also the in-page anchor.
    pub fn id(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Brands => "brands",
            SectionId::Service => "service",
            SectionId::Contact => "contact",
        }
    }

    /// `#id` link target.
    pub fn anchor(self) -> String {
        format!("#{}", self.id())
    }

    /// Label in the navigation bar; the hero is reached through the brand mark.
    pub fn nav_label(self) -> Option<&'static str> {
        match self {
            SectionId::Home => None,
            SectionId::About => Some("ABOUT"),
            SectionId::Brands => Some("BRANDS"),
            SectionId::Service => Some("SERVICE"),
            SectionId::Contact => Some("CONTACT"),
        }
    }
}

/// Brand portfolio, in display order.
pub const BRANDS: [BrandEntry; 2] = [
    BrandEntry {
        image: "/images/Maui.jpg",
        category: "SURF & STREET",
        name: "MAUI & SONS",
        description: "A global lifestyle brand capturing the free surf culture and street vibe of California.",
        accent: AccentColor::Blue,
        delay: 0.0,
    },
    BrandEntry {
        image: "/images/lagear.jpg",
        category: "RETRO & ATHLEISURE",
        name: "LA GEAR",
        description: "An iconic sneakers and athleisure brand reimagining 80s and 90s retro vibes for the modern era.",
        accent: AccentColor::Purple,
        delay: 0.2,
    },
];

/// Service pipeline, "01" to "04".
pub const SERVICES: [ServiceStep; 4] = [
    ServiceStep {
        num: "01",
        title: "Discovery",
        subtitle: "Trend Sourcing",
        icon: IconKind::Search,
        description: "We proactively discover trendy US brands based on local data.",
    },
    ServiceStep {
        num: "02",
        title: "Licensing",
        subtitle: "License Agreement",
        icon: IconKind::FileText,
        description: "We secure licensing rights and design optimized contract structures through legal review",
    },
    ServiceStep {
        num: "03",
        title: "Infra",
        subtitle: "Full Operation",
        icon: IconKind::Settings,
        description: "We build all necessary infrastructure for distribution including logistics, customs, and CS.",
    },
    ServiceStep {
        num: "04",
        title: "Expansion",
        subtitle: "Localization",
        icon: IconKind::TrendingUp,
        description: "We execute rebranding strategies and expand online/offline channels tailored for Korean markets.",
    },
];

/// Trusted partners in the contact section.
pub const PARTNERS: [PartnerLink; 4] = [
    PartnerLink {
        name: "NITSOFT",
        url: "https://www.nitsoft.co.kr/",
    },
    PartnerLink {
        name: "BGI",
        url: "https://www.brandgroupinternational.com/",
    },
    PartnerLink {
        name: "ERUDA MKT",
        url: "https://e-ruda.net/home",
    },
    PartnerLink {
        name: "STCOMM",
        url: "https://www.stcomm.kr/",
    },
];

/// US headquarters and Korean execution center.
pub const OFFICES: [Office; 2] = [
    Office {
        label: "Global Sourcing HQ",
        city: "Irvine, California",
        tagline: "Brand Discovery & License Acquisition",
        icon: IconKind::MapPin,
        accent: AccentColor::Blue,
    },
    Office {
        label: "Market Execution Center",
        city: "Seoul, South Korea",
        tagline: "Omni-channel Distribution & Localization",
        icon: IconKind::Globe,
        accent: AccentColor::Purple,
    },
];

/// `mailto:` link for an address.
pub fn mailto(address: &str) -> String {
    format!("mailto:{address}")
}

/// Copyright line printed at the very bottom of the page.
pub fn copyright() -> String {
    format!("\u{a9} {COPYRIGHT_YEAR} {COMPANY}. All rights reserved.")
}

/// All content tables of the page, borrowed.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteContent<'a> {
    /// Brand cards.
    pub brands: &'a [BrandEntry],
    /// Service steps.
    pub services: &'a [ServiceStep],
    /// Partner links.
    pub partners: &'a [PartnerLink],
    /// Office cards.
    pub offices: &'a [Office],
    /// Business inquiry address.
    pub contact_email: &'a str,
    /// Section ids, in page order.
    pub sections: &'a [SectionId],
}

impl SiteContent<'static> {
    /// The content that ships with the page.
    pub fn shipped() -> Self {
        Self {
            brands: &BRANDS,
            services: &SERVICES,
            partners: &PARTNERS,
            offices: &OFFICES,
            contact_email: CONTACT_EMAIL,
            sections: &SectionId::ALL,
        }
    }
}

impl SiteContent<'_> {
    /// Check that every field is a non-empty literal and that links,
    /// ordinals and section ids are well formed.
    pub fn validate(&self) -> Result<()> {
        for (idx, brand) in self.brands.iter().enumerate() {
            let name = label_or_index(brand.name, idx);
            require("brand", &name, "image", brand.image)?;
            require("brand", &name, "category", brand.category)?;
            require("brand", &name, "name", brand.name)?;
            require("brand", &name, "description", brand.description)?;
        }

        for (idx, step) in self.services.iter().enumerate() {
            let name = label_or_index(step.title, idx);
            require("service", &name, "num", step.num)?;
            require("service", &name, "title", step.title)?;
            require("service", &name, "subtitle", step.subtitle)?;
            require("service", &name, "description", step.description)?;
            let expected = format!("{:02}", idx + 1);
            if step.num != expected {
                return Err(SiteError::OrdinalOutOfSequence {
                    title: step.title.to_string(),
                    found: step.num.to_string(),
                    expected,
                });
            }
        }

        let mut partner_names = HashSet::new();
        for (idx, partner) in self.partners.iter().enumerate() {
            let name = label_or_index(partner.name, idx);
            require("partner", &name, "name", partner.name)?;
            require("partner", &name, "url", partner.url)?;
            if !partner.url.starts_with("https://") || partner.url.len() == "https://".len() {
                return Err(SiteError::InvalidUrl {
                    name,
                    url: partner.url.to_string(),
                    scheme: "https://",
                });
            }
            if !partner_names.insert(partner.name) {
                return Err(SiteError::DuplicatePartner(partner.name.to_string()));
            }
        }

        for (idx, office) in self.offices.iter().enumerate() {
            let name = label_or_index(office.label, idx);
            require("office", &name, "label", office.label)?;
            require("office", &name, "city", office.city)?;
            require("office", &name, "tagline", office.tagline)?;
        }

        if !is_plain_email(self.contact_email) {
            return Err(SiteError::InvalidEmail(self.contact_email.to_string()));
        }

        let mut section_ids = HashSet::new();
        for section in self.sections {
            if !section_ids.insert(section.id()) {
                return Err(SiteError::DuplicateSection(section.id()));
            }
        }

        Ok(())
    }
}

/// Validate the shipped content.
pub fn validate() -> Result<()> {
    SiteContent::shipped().validate()
}

fn require(entity: &'static str, name: &str, field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SiteError::EmptyField {
            entity,
            name: name.to_string(),
            field,
        });
    }
    Ok(())
}

fn label_or_index(label: &str, idx: usize) -> String {
    if label.trim().is_empty() {
        format!("#{}", idx + 1)
    } else {
        label.to_string()
    }
}

fn is_plain_email(address: &str) -> bool {
    let mut parts = address.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !address.chars().any(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn shipped_content_is_valid() {
        assert_eq!(validate(), Ok(()));
    }

    #[test]
    fn accent_classes_do_not_overlap() {
        let blue = [
            AccentColor::Blue.text_class(),
            AccentColor::Blue.glow_class(),
            AccentColor::Blue.scanner_class(),
        ]
        .join(" ");
        let purple = [
            AccentColor::Purple.text_class(),
            AccentColor::Purple.glow_class(),
            AccentColor::Purple.scanner_class(),
        ]
        .join(" ");
        assert!(!blue.contains("purple"));
        assert!(purple.contains("purple"));
        assert!(!purple.contains("cyan"));
        assert!(!purple.contains("text-accent"));
    }

    #[test]
    fn rejects_empty_description() {
        let brands = [BrandEntry {
            description: "  ",
            ..BRANDS[0].clone()
        }];
        let content = SiteContent {
            brands: &brands,
            ..SiteContent::shipped()
        };
        assert_eq!(
            content.validate(),
            Err(SiteError::EmptyField {
                entity: "brand",
                name: "MAUI & SONS".into(),
                field: "description",
            })
        );
    }

    #[test]
    fn empty_name_is_reported_by_position() {
        let partners = [
            PARTNERS[0].clone(),
            PartnerLink {
                name: "",
                url: "https://example.com/",
            },
        ];
        let content = SiteContent {
            partners: &partners,
            ..SiteContent::shipped()
        };
        let err = content.validate().unwrap_err();
        assert_eq!(err.to_string(), "partner `#2` has an empty `name` field");
    }

    #[test]
    fn rejects_out_of_order_ordinals() {
        let services = [SERVICES[1].clone(), SERVICES[0].clone()];
        let content = SiteContent {
            services: &services,
            ..SiteContent::shipped()
        };
        assert!(matches!(
            content.validate(),
            Err(SiteError::OrdinalOutOfSequence { ref found, ref expected, .. })
                if found == "02" && expected == "01"
        ));
    }

    #[test]
    fn rejects_duplicate_partner() {
        let partners = [PARTNERS[0].clone(), PARTNERS[0].clone()];
        let content = SiteContent {
            partners: &partners,
            ..SiteContent::shipped()
        };
        assert_eq!(
            content.validate(),
            Err(SiteError::DuplicatePartner("NITSOFT".into()))
        );
    }

    #[test]
    fn rejects_plain_http_partner() {
        let partners = [PartnerLink {
            name: "BGI",
            url: "http://www.brandgroupinternational.com/",
        }];
        let content = SiteContent {
            partners: &partners,
            ..SiteContent::shipped()
        };
        assert!(matches!(content.validate(), Err(SiteError::InvalidUrl { .. })));
    }

    #[test]
    fn rejects_malformed_email() {
        for bad in ["nit.nitsoft.biz", "nit@@nitsoft.biz", "@nitsoft.biz", "nit@biz", "nit @nitsoft.biz"] {
            let content = SiteContent {
                contact_email: bad,
                ..SiteContent::shipped()
            };
            assert_eq!(
                content.validate(),
                Err(SiteError::InvalidEmail(bad.into())),
                "{bad}"
            );
        }
    }

    #[test]
    fn rejects_duplicate_section() {
        let sections = [SectionId::Home, SectionId::About, SectionId::About];
        let content = SiteContent {
            sections: &sections,
            ..SiteContent::shipped()
        };
        assert_eq!(content.validate(), Err(SiteError::DuplicateSection("about")));
    }

    #[test]
    fn section_anchors() {
        let anchors: Vec<String> = SectionId::ALL.iter().map(|s| s.anchor()).collect();
        assert_eq!(anchors, ["#home", "#about", "#brands", "#service", "#contact"]);
        assert_eq!(SectionId::Home.nav_label(), None);
    }

    #[test]
    fn content_json_shape() {
        let json = serde_json::to_value(SiteContent::shipped()).unwrap();
        assert_eq!(json["brands"][1]["accent"], "purple");
        assert_eq!(json["services"][2]["icon"], "settings");
        assert_eq!(json["contactEmail"], "nit@nitsoft.biz");
        assert_eq!(json["sections"][4], "contact");
    }

    #[test]
    fn copyright_line() {
        assert_eq!(copyright(), "\u{a9} 2026 NIT AMERICA. All rights reserved.");
        assert_eq!(mailto(CONTACT_EMAIL), "mailto:nit@nitsoft.biz");
    }
}
