//! Site routes

use derive_more::Display;

/// Current path, used as the re-mount trigger for page transitions
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub struct RouteKey(String);

impl From<&str> for RouteKey {
    fn from(path: &str) -> Self {
        RouteKey(normalize_path(path))
    }
}

impl From<String> for RouteKey {
    fn from(path: String) -> Self {
        RouteKey::from(path.as_str())
    }
}

impl RouteKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn page(&self) -> Page {
        Page::from_path(&self.0)
    }
}

/// Marketing pages rendered inside the site layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    About,
    Services,
    Internships,
    Careers,
    Contact,
    Products,
    PrivacyPolicy,
    NotFound,
}

impl Page {
    /// Pages shown in the navigation bar, in order
    pub const NAV: [Page; 7] = [
        Page::Home,
        Page::About,
        Page::Services,
        Page::Internships,
        Page::Products,
        Page::Careers,
        Page::Contact,
    ];

    pub fn from_path(path: &str) -> Self {
        match normalize_path(path).as_str() {
            "/" => Page::Home,
            "/about" => Page::About,
            "/services" => Page::Services,
            "/internships" => Page::Internships,
            "/careers" => Page::Careers,
            "/contact" => Page::Contact,
            "/products" => Page::Products,
            "/privacy-policy" => Page::PrivacyPolicy,
            _ => Page::NotFound,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::About => "/about",
            Page::Services => "/services",
            Page::Internships => "/internships",
            Page::Careers => "/careers",
            Page::Contact => "/contact",
            Page::Products => "/products",
            Page::PrivacyPolicy => "/privacy-policy",
            Page::NotFound => "/404",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::Services => "Services",
            Page::Internships => "Internships",
            Page::Careers => "Careers",
            Page::Contact => "Contact",
            Page::Products => "Products",
            Page::PrivacyPolicy => "Privacy Policy",
            Page::NotFound => "Not Found",
        }
    }
}

pub const ADMIN_LOGIN_PATH: &str = "/admin/login";
pub const ADMIN_DASHBOARD_PATH: &str = "/admin/dashboard";

/// Strip query, fragment and trailing slash; empty becomes `/`
pub fn normalize_path(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_from_path() {
        assert_eq!(Page::from_path("/"), Page::Home);
        assert_eq!(Page::from_path(""), Page::Home);
        assert_eq!(Page::from_path("/about/"), Page::About);
        assert_eq!(Page::from_path("/careers?ref=nav"), Page::Careers);
        assert_eq!(Page::from_path("/privacy-policy#cookies"), Page::PrivacyPolicy);
        assert_eq!(Page::from_path("/nope"), Page::NotFound);
    }

    #[test]
    fn test_paths_round_trip_for_nav() {
        for page in Page::NAV {
            assert_eq!(Page::from_path(page.path()), page);
        }
    }

    #[test]
    fn test_route_key_normalizes() {
        assert_eq!(RouteKey::from("/contact/"), RouteKey::from("/contact"));
        assert_eq!(RouteKey::from("services").to_string(), "/services");
        assert_eq!(RouteKey::from("/products").page(), Page::Products);
    }
}
