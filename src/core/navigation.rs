//! Routes and the navigation seam
//!
//! Page transitions belong to the routing shell. The controllers only name
//! the destination through [`NavigationGateway::on_navigate`]; the shell
//! resolves the route, renders the page and highlights the matching layout
//! icon in the vertical bar.

/// Employee-facing routes the controllers navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Bills,
    NewBill,
}

/// Icons of the vertical layout bar, one per route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutIcon {
    /// Window icon, highlighted on the bills list
    Window,
    /// Mail icon, highlighted on the new-bill form
    Mail,
}

impl Route {
    /// Hash fragment the routing shell resolves for this route.
    pub fn path(&self) -> &'static str {
        match self {
            Route::Bills => "#employee/bills",
            Route::NewBill => "#employee/bill/new",
        }
    }

    /// The layout icon the shell marks active once this route renders.
    pub fn layout_icon(&self) -> LayoutIcon {
        match self {
            Route::Bills => LayoutIcon::Window,
            Route::NewBill => LayoutIcon::Mail,
        }
    }
}

/// Seam to the routing shell. Implementations perform the actual page
/// transition; the core only signals intent.
pub trait NavigationGateway: Send + Sync {
    fn on_navigate(&self, route: Route);
}
