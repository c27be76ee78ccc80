//! Routes and the sidebar navigation model.
//!
//! Routing is hash based: `#/orders` addresses the Orders view. The path
//! part after `#` must match a route exactly; anything else is unmatched.

use crate::models::IconKey;

/// The six dashboard views.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Dashboard,
    Orders,
    Products,
    Customers,
    Analytics,
    Settings,
}

impl Route {
    pub const ALL: [Route; 6] = [
        Self::Dashboard,
        Self::Orders,
        Self::Products,
        Self::Customers,
        Self::Analytics,
        Self::Settings,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Self::Dashboard => "/",
            Self::Orders => "/orders",
            Self::Products => "/products",
            Self::Customers => "/customers",
            Self::Analytics => "/analytics",
            Self::Settings => "/settings",
        }
    }

    /// Exact path lookup.
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|route| route.path() == path)
    }

    /// Link target for anchors (`#/orders`).
    pub fn href(self) -> String {
        format!("#{}", self.path())
    }
}

/// Normalize a URL hash into a route path.
///
/// `""`, `"#"` and `"#/"` all map to `/`; a missing leading slash is added.
pub fn path_from_hash(hash: &str) -> String {
    let path = hash.trim_start_matches('#');
    if path.is_empty() {
        "/".to_string()
    } else if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}

/// Sidebar entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub route: Route,
    pub icon: IconKey,
    pub label: &'static str,
}

impl NavItem {
    pub fn path(&self) -> &'static str {
        self.route.path()
    }

    /// Highlight rule: exact match against the current route path.
    pub fn is_active(&self, current_path: &str) -> bool {
        self.path() == current_path
    }
}

/// Sidebar entries in display order.
pub const NAV_ITEMS: [NavItem; 6] = [
    NavItem {
        route: Route::Dashboard,
        icon: IconKey::Dashboard,
        label: "Dashboard",
    },
    NavItem {
        route: Route::Orders,
        icon: IconKey::Orders,
        label: "Orders",
    },
    NavItem {
        route: Route::Products,
        icon: IconKey::Products,
        label: "Products",
    },
    NavItem {
        route: Route::Customers,
        icon: IconKey::Customers,
        label: "Customers",
    },
    NavItem {
        route: Route::Analytics,
        icon: IconKey::Analytics,
        label: "Analytics",
    },
    NavItem {
        route: Route::Settings,
        icon: IconKey::Settings,
        label: "Settings",
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::layout::LayoutState;

    #[test]
    fn test_path_from_hash() {
        assert_eq!(path_from_hash(""), "/");
        assert_eq!(path_from_hash("#"), "/");
        assert_eq!(path_from_hash("#/"), "/");
        assert_eq!(path_from_hash("#/orders"), "/orders");
        assert_eq!(path_from_hash("#customers"), "/customers");
    }

    #[test]
    fn test_route_lookup_is_exact() {
        assert_eq!(Route::from_path("/"), Some(Route::Dashboard));
        assert_eq!(Route::from_path("/analytics"), Some(Route::Analytics));
        assert_eq!(Route::from_path("/orders/"), None);
        assert_eq!(Route::from_path("/Orders"), None);
        assert_eq!(Route::from_path("/reports"), None);
    }

    #[test]
    fn test_route_href() {
        assert_eq!(Route::Dashboard.href(), "#/");
        assert_eq!(Route::Settings.href(), "#/settings");
    }

    #[test]
    fn test_nav_items_are_unique_and_complete() {
        let paths: HashSet<_> = NAV_ITEMS.iter().map(NavItem::path).collect();
        assert_eq!(paths.len(), 6);
        for route in Route::ALL {
            assert!(NAV_ITEMS.iter().any(|item| item.route == route));
        }
    }

    #[test]
    fn test_exactly_one_active_item() {
        for route in Route::ALL {
            let active: Vec<_> = NAV_ITEMS
                .iter()
                .filter(|item| item.is_active(route.path()))
                .collect();
            assert_eq!(active.len(), 1);
            assert_eq!(active[0].route, route);
        }
        assert!(NAV_ITEMS.iter().all(|item| !item.is_active("/missing")));
    }

    #[test]
    fn test_collapse_does_not_change_highlight() {
        let mut layout = LayoutState::from_width(1280.0);
        let before: Vec<bool> = NAV_ITEMS.iter().map(|i| i.is_active("/products")).collect();
        layout.set_collapsed(true);
        assert!(layout.is_collapsed);
        let after: Vec<bool> = NAV_ITEMS.iter().map(|i| i.is_active("/products")).collect();
        assert_eq!(before, after);
        assert_eq!(after.iter().filter(|active| **active).count(), 1);
    }
}
