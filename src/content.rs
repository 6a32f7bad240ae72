//! Static page content: navigation items, service entries, hero copy and
//! contact details. Everything here is known at build time; components only
//! render it.

use crate::components::icons::ServiceIcon;
use crate::reveal::SERVICE_STAGGER;

pub struct NavItem {
    pub label: &'static str,
}

/// Order is the render order, desktop and mobile alike.
pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem { label: "Chi Sono" },
    NavItem { label: "Aree di Pratica" },
    NavItem { label: "Metodo" },
    NavItem { label: "Contatti" },
];

pub const SECTION_CHI_SONO: &str = "chi-sono";
pub const SECTION_AREE: &str = "aree-di-pratica";
pub const SECTION_METODO: &str = "metodo";
pub const SECTION_CONTATTI: &str = "contatti";

/// Section ids emitted by the home page. Must stay a bijection with the
/// anchors derived from [`NAV_ITEMS`], or nav links scroll nowhere.
pub const SECTION_IDS: [&str; 4] = [
    SECTION_CHI_SONO,
    SECTION_AREE,
    SECTION_METODO,
    SECTION_CONTATTI,
];

/// Label → fragment id: lowercase, spaces become hyphens.
pub fn anchor_slug(label: &str) -> String {
    label.to_lowercase().replace(' ', "-")
}

pub fn anchor_href(label: &str) -> String {
    format!("#{}", anchor_slug(label))
}

pub struct ServiceEntry {
    pub icon: ServiceIcon,
    pub title: &'static str,
    pub description: &'static str,
    pub delay_ms: u64,
}

pub const SERVICE_ENTRIES: [ServiceEntry; 4] = [
    ServiceEntry {
        icon: ServiceIcon::Scale,
        title: "Civil Law",
        description: "Gestione di contenziosi civili complessi, arbitrati e risoluzione alternativa delle controversie.",
        delay_ms: SERVICE_STAGGER.delay_ms(0),
    },
    ServiceEntry {
        icon: ServiceIcon::Shield,
        title: "Corporate",
        description: "Consulenza strategica per governance societaria, operazioni straordinarie e M&A.",
        delay_ms: SERVICE_STAGGER.delay_ms(1),
    },
    ServiceEntry {
        icon: ServiceIcon::Gavel,
        title: "White Collar",
        description: "Difesa in ambito penale societario, reati finanziari e compliance aziendale (231).",
        delay_ms: SERVICE_STAGGER.delay_ms(2),
    },
    ServiceEntry {
        icon: ServiceIcon::Book,
        title: "IP & Tech",
        description: "Tutela della proprietà intellettuale, brevetti e diritto delle nuove tecnologie.",
        delay_ms: SERVICE_STAGGER.delay_ms(3),
    },
];

pub const NAME_PARTS: [&str; 4] = ["Tullio", "Gesuè", "Rizzi", "Ulmo"];

pub const BRAND: &str = "T.G.R.U.";
pub const FIRM_NAME: &str = "Studio Legale Rizzi Ulmo";
pub const FIRM_VAT: &str = "P.IVA 00000000000";
pub const FIRM_ADDRESS: [&str; 2] = ["Via Monte Napoleone, 8", "20121 Milano (MI)"];
pub const FIRM_EMAIL: &str = "info@rizziulmo.it";
pub const FIRM_PHONE: &str = "+39 02 77889900";

pub const PORTRAIT_URL: &str =
    "https://images.unsplash.com/photo-1507679799987-c73779587ccf?q=80&w=2071&auto=format&fit=crop";

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn labels_slug_to_expected_anchors() {
        let anchors: Vec<String> = NAV_ITEMS.iter().map(|i| anchor_slug(i.label)).collect();
        assert_eq!(
            anchors,
            vec!["chi-sono", "aree-di-pratica", "metodo", "contatti"]
        );
    }

    #[test]
    fn every_anchor_has_a_section_and_vice_versa() {
        let anchors: HashSet<String> = NAV_ITEMS.iter().map(|i| anchor_slug(i.label)).collect();
        let sections: HashSet<String> = SECTION_IDS.iter().map(|s| s.to_string()).collect();
        assert_eq!(anchors, sections);
        assert_eq!(NAV_ITEMS.len(), SECTION_IDS.len());
    }

    #[test]
    fn anchor_href_prefixes_hash() {
        assert_eq!(anchor_href("Aree di Pratica"), "#aree-di-pratica");
    }

    #[test]
    fn four_services_in_declared_order() {
        let titles: Vec<&str> = SERVICE_ENTRIES.iter().map(|e| e.title).collect();
        assert_eq!(titles, vec!["Civil Law", "Corporate", "White Collar", "IP & Tech"]);

        let distinct: HashSet<&str> = titles.iter().copied().collect();
        assert_eq!(distinct.len(), SERVICE_ENTRIES.len());
        assert!(SERVICE_ENTRIES.iter().all(|e| !e.description.is_empty()));
    }

    #[test]
    fn service_delays_follow_the_stagger_table() {
        for (i, entry) in SERVICE_ENTRIES.iter().enumerate() {
            assert_eq!(entry.delay_ms, SERVICE_STAGGER.delay_ms(i));
        }
    }
}
