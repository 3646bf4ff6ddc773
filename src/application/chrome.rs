use crate::application::scroll::ScrollCoordinator;
use crate::domain::catalog::SERVICES;
use crate::presentation::views::{
    BrandView, ContactView, FooterView, LayoutChrome, NavigationLinkView, NavigationView,
    PhoneView,
};

const BRAND_TITLE: &str = "SpaceBox Concepts";
const FOOTER_COPY: &str = "© SpaceBox Concepts. All rights reserved.";

const CONTACT_EMAIL: &str = "spaceboxdesigns@gmail.com";
const CONTACT_PHONES: [(&str, &str); 2] = [
    ("+91 7799101433", "+917799101433"),
    ("+91 8179999188", "+918179999188"),
];
const WHATSAPP_URL: &str = "https://wa.me/917799101433";
const INSTAGRAM_URL: &str = "https://www.instagram.com/spaceboxdesigns/";
const INSTAGRAM_HANDLE: &str = "@spaceboxdesigns";
const BUSINESS_HOURS: [&str; 2] = ["Mon - Sat: 9:00 AM - 7:00 PM", "Sunday: By Appointment"];

/// Builds the navigation, footer and scroll settings shared by every page.
#[derive(Clone, Debug)]
pub struct ChromeService {
    scroll: ScrollCoordinator,
}

impl ChromeService {
    pub fn new(scroll: ScrollCoordinator) -> Self {
        Self { scroll }
    }

    pub fn load(&self) -> LayoutChrome {
        LayoutChrome {
            brand: self.brand(),
            navigation: NavigationView {
                entries: navigation_entries(),
            },
            footer: FooterView {
                copy: FOOTER_COPY.to_string(),
                contact: contact_view(),
            },
            scroll: self.scroll.view(),
            title: BRAND_TITLE.to_string(),
        }
    }

    pub fn brand(&self) -> BrandView {
        BrandView {
            title: BRAND_TITLE.to_string(),
            href: "/home".to_string(),
        }
    }
}

pub fn contact_view() -> ContactView {
    ContactView {
        email: CONTACT_EMAIL.to_string(),
        phones: CONTACT_PHONES
            .iter()
            .map(|(display, tel)| PhoneView {
                display: display.to_string(),
                tel: tel.to_string(),
            })
            .collect(),
        whatsapp_url: WHATSAPP_URL.to_string(),
        instagram_url: INSTAGRAM_URL.to_string(),
        instagram_handle: INSTAGRAM_HANDLE.to_string(),
        hours: BUSINESS_HOURS.iter().map(|line| line.to_string()).collect(),
    }
}

fn navigation_entries() -> Vec<NavigationLinkView> {
    let link = |label: &str, href: &str| NavigationLinkView {
        label: label.to_string(),
        href: href.to_string(),
        children: Vec::new(),
    };

    let services = NavigationLinkView {
        children: SERVICES
            .iter()
            .map(|service| link(service.title, &service.href()))
            .collect(),
        ..link("Services", "/services")
    };

    vec![
        link("Home", "/home"),
        link("About", "/about"),
        services,
        link("Projects", "/projects"),
        link("Blog", "/blog"),
        link("Careers", "/careers"),
        link("Contact", "/contact"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScrollSettings;

    #[test]
    fn services_dropdown_mirrors_catalog() {
        let chrome = ChromeService::new(ScrollCoordinator::new(ScrollSettings::default())).load();
        let services = chrome
            .navigation
            .entries
            .iter()
            .find(|entry| entry.label == "Services")
            .expect("services entry");

        assert_eq!(services.children.len(), SERVICES.len());
        assert_eq!(services.children[0].href, "/services/residential-interior-design");
    }

    #[test]
    fn footer_carries_contact_details() {
        let contact = contact_view();
        assert_eq!(contact.email, "spaceboxdesigns@gmail.com");
        assert_eq!(contact.phones[1].tel, "+918179999188");
        assert!(contact.whatsapp_url.starts_with("https://wa.me/"));
    }
}
