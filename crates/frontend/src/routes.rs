//! Route table

use internport_frontend_common::guard::RouteMeta;
use internport_http::types::Role;
use yew_router::prelude::*;

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/forgot-password")]
    ForgotPassword,
    #[at("/terms")]
    Terms,
    #[at("/privacy")]
    Privacy,
    #[at("/")]
    Dashboard,
    #[at("/student")]
    StudentDashboard,
    #[at("/company")]
    CompanyDashboard,
    #[at("/admin")]
    AdminDashboard,
    #[at("/internships")]
    InternshipList,
    #[at("/my-applications")]
    MyApplications,
    #[at("/company/internships")]
    CompanyInternships,
    #[at("/company/applications")]
    ApplicationList,
    #[at("/company/applications/:id")]
    InternshipApplications { id: String },
    #[at("/profile")]
    Profile,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Access requirement checked by the guard before rendering
    pub fn meta(&self) -> RouteMeta {
        match self {
            Route::Login | Route::Register | Route::ForgotPassword => RouteMeta::requires_guest(),
            Route::Terms | Route::Privacy | Route::NotFound => RouteMeta::public(),
            Route::Dashboard => RouteMeta::landing(),
            Route::StudentDashboard | Route::InternshipList | Route::MyApplications => {
                RouteMeta::role(Role::Student)
            }
            Route::CompanyDashboard
            | Route::CompanyInternships
            | Route::ApplicationList
            | Route::InternshipApplications { .. } => RouteMeta::role(Role::Company),
            Route::AdminDashboard => RouteMeta::role(Role::Admin),
            Route::Profile => RouteMeta::requires_auth(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Login => "Sign in",
            Route::Register => "Create account",
            Route::ForgotPassword => "Reset password",
            Route::Terms => "Terms of service",
            Route::Privacy => "Privacy policy",
            Route::Dashboard => "Dashboard",
            Route::StudentDashboard => "Student dashboard",
            Route::CompanyDashboard => "Company dashboard",
            Route::AdminDashboard => "Admin dashboard",
            Route::InternshipList => "Internships",
            Route::MyApplications => "My applications",
            Route::CompanyInternships => "Our internships",
            Route::ApplicationList | Route::InternshipApplications { .. } => "Applications",
            Route::Profile => "Profile",
            Route::NotFound => "Page not found",
        }
    }

    /// Route for a path returned by the guard
    pub fn from_redirect(path: &str) -> Self {
        Self::recognize(path).unwrap_or(Route::Login)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use internport_frontend_common::guard::Access;

    #[test]
    fn test_paths_resolve() {
        assert_eq!(Route::recognize("/"), Some(Route::Dashboard));
        assert_eq!(Route::recognize("/company"), Some(Route::CompanyDashboard));
        assert_eq!(
            Route::recognize("/company/applications"),
            Some(Route::ApplicationList)
        );
        assert_eq!(
            Route::recognize("/company/applications/42"),
            Some(Route::InternshipApplications { id: "42".to_string() })
        );

        // Any id stays under the company-only route instead of the public 404
        let route = Route::recognize("/company/applications/abc").unwrap();
        assert_eq!(route, Route::InternshipApplications { id: "abc".to_string() });
        assert_eq!(route.meta().access, Access::Role(Role::Company));
    }

    #[test]
    fn test_guard_redirect_targets_are_routes() {
        assert_eq!(Route::from_redirect("/login"), Route::Login);
        assert_eq!(Route::from_redirect("/student"), Route::StudentDashboard);
        assert_eq!(Route::from_redirect("/company"), Route::CompanyDashboard);
        assert_eq!(Route::from_redirect("/admin"), Route::AdminDashboard);
        assert_eq!(Route::from_redirect("/"), Route::Dashboard);
    }

    #[test]
    fn test_route_requirements() {
        assert_eq!(Route::Login.meta().access, Access::RequiresGuest);
        assert_eq!(Route::ForgotPassword.meta().access, Access::RequiresGuest);
        assert_eq!(Route::Terms.meta().access, Access::Public);
        assert!(Route::Dashboard.meta().landing);
        assert_eq!(Route::Profile.meta().access, Access::RequiresAuth);
        assert_eq!(
            Route::MyApplications.meta().access,
            Access::Role(Role::Student)
        );
        assert_eq!(
            Route::InternshipApplications { id: "1".to_string() }.meta().access,
            Access::Role(Role::Company)
        );
        assert_eq!(
            Route::AdminDashboard.meta().access,
            Access::Role(Role::Admin)
        );
        assert!(!Route::Profile.meta().landing);
    }
}
