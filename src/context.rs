//! Application Context
//!
//! Route signal plus the session user, provided via Leptos context.
//! Navigation swaps the route signal; there is no URL routing.

use leptos::prelude::*;

use crate::models::{Exam, UserInfo};

/// Client-side routes, one per page of the site.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Reviews(Exam),
    /// Moderated review feed with per-card delete, superusers only.
    AdminReviews,
    Login,
    Register,
    Recovery,
    Profile,
    /// Superuser product management.
    Admin,
    Forbidden,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub route: ReadSignal<Route>,
    set_route: WriteSignal<Route>,
    /// Current session user, `None` until the probe succeeds.
    pub user: RwSignal<Option<UserInfo>>,
}

impl AppContext {
    pub fn new(route: (ReadSignal<Route>, WriteSignal<Route>)) -> Self {
        Self {
            route: route.0,
            set_route: route.1,
            user: RwSignal::new(None),
        }
    }

    pub fn navigate(&self, route: Route) {
        self.set_route.set(route);
    }

    /// 401 handling: drop the stale session and show the login page.
    pub fn redirect_login(&self) {
        self.user.set(None);
        self.set_route.set(Route::Login);
    }

    pub fn is_super_user(&self) -> bool {
        self.user
            .with_untracked(|u| u.as_ref().is_some_and(|u| u.is_super_user))
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
