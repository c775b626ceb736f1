//! Static navigation metadata for the two lead screens.
//!
//! Consumed by an external router/menu renderer; this module only declares
//! the configuration. `permission` lists the backend grants required for the
//! entry to be visible, as `<verb><path>` strings matching the permission
//! model of the admin backend.

/// Immutable navigation/menu metadata for one screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub name: &'static str,
    pub path: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub permission: &'static [&'static str],
    /// Menu sort position, ascending.
    pub order: u32,
}

/// The per-user "my leads" screen.
pub const MY_LEADS: RouteDescriptor = RouteDescriptor {
    name: "MyLeads",
    path: "/my/leads",
    title: "My Leads",
    icon: "material-symbols:person",
    permission: &["get/api/v1/leads/my"],
    order: 2,
};

/// The superuser lead management screen.
pub const LEAD_ADMIN: RouteDescriptor = RouteDescriptor {
    name: "Lead",
    path: "/system/lead",
    title: "Lead Management",
    icon: "material-symbols:person-search",
    permission: &["get/api/v1/leads/list"],
    order: 3,
};

/// All lead routes in menu order.
pub fn routes() -> [&'static RouteDescriptor; 2] {
    [&MY_LEADS, &LEAD_ADMIN]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn my_leads_descriptor_literals() {
        assert_eq!(MY_LEADS.name, "MyLeads");
        assert_eq!(MY_LEADS.path, "/my/leads");
        assert_eq!(MY_LEADS.icon, "material-symbols:person");
        assert_eq!(MY_LEADS.permission, ["get/api/v1/leads/my"]);
        assert_eq!(MY_LEADS.order, 2);
    }

    #[test]
    fn lead_admin_descriptor_literals() {
        assert_eq!(LEAD_ADMIN.name, "Lead");
        assert_eq!(LEAD_ADMIN.path, "/system/lead");
        assert_eq!(LEAD_ADMIN.icon, "material-symbols:person-search");
        assert_eq!(LEAD_ADMIN.permission, ["get/api/v1/leads/list"]);
        assert_eq!(LEAD_ADMIN.order, 3);
    }

    #[test]
    fn routes_are_in_menu_order() {
        let rs = routes();
        assert_eq!(rs.len(), 2);
        assert!(rs[0].order < rs[1].order);
    }

    #[test]
    fn route_names_and_paths_are_unique() {
        let rs = routes();
        assert_ne!(rs[0].name, rs[1].name);
        assert_ne!(rs[0].path, rs[1].path);
    }
}
