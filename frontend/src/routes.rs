//! Route table of the app.
//!
//! Matching is done by `leptos_router`, this module only holds the paths,
//! the views they bind and who may see them.
use leptos::*;

use crate::pages;

pub type ViewFn = fn() -> View;

#[derive(Clone, Copy)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub name: &'static str,
    pub view: ViewFn,
    /// only logged in users, others are sent to [`LOGIN`]
    pub requires_auth: bool,
    /// only teachers, others are sent to [`INDEX`]
    pub requires_teacher: bool,
}

impl std::fmt::Debug for RouteDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteDescriptor")
            .field("path", &self.path)
            .field("name", &self.name)
            .field("requires_auth", &self.requires_auth)
            .field("requires_teacher", &self.requires_teacher)
            .finish_non_exhaustive()
    }
}

impl PartialEq for RouteDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for RouteDescriptor {}

pub const WELCOME: RouteDescriptor = RouteDescriptor {
    path: "/",
    name: "Welcome",
    view: || pages::Welcome().into_view(),
    requires_auth: false,
    requires_teacher: false,
};

pub const DIALOGUE: RouteDescriptor = RouteDescriptor {
    path: "/dialogue",
    name: "Dialogue",
    view: || pages::Dialogue().into_view(),
    requires_auth: true,
    requires_teacher: false,
};

pub const LOGIN: RouteDescriptor = RouteDescriptor {
    path: "/login",
    name: "Login",
    view: || pages::Login().into_view(),
    requires_auth: false,
    requires_teacher: false,
};

pub const REGISTER: RouteDescriptor = RouteDescriptor {
    path: "/register",
    name: "Register",
    view: || pages::Register().into_view(),
    requires_auth: false,
    requires_teacher: false,
};

pub const INFORMATION: RouteDescriptor = RouteDescriptor {
    path: "/information",
    name: "Information",
    view: || pages::Information().into_view(),
    requires_auth: true,
    requires_teacher: true,
};

pub const CHECK_IN: RouteDescriptor = RouteDescriptor {
    path: "/checkin",
    name: "CheckIn",
    view: || pages::CheckIn().into_view(),
    requires_auth: true,
    requires_teacher: false,
};

pub const PRACTICE_PROBLEM: RouteDescriptor = RouteDescriptor {
    path: "/practiceproblem",
    name: "PracticeProblem",
    view: || pages::PracticeProblem().into_view(),
    requires_auth: true,
    requires_teacher: false,
};

/// Where logged in users land
pub const INDEX: RouteDescriptor = RouteDescriptor {
    path: "/index",
    name: "Index",
    view: || pages::Index().into_view(),
    requires_auth: true,
    requires_teacher: false,
};

pub static ROUTES: [RouteDescriptor; 8] = [
    WELCOME,
    DIALOGUE,
    LOGIN,
    REGISTER,
    INFORMATION,
    CHECK_IN,
    PRACTICE_PROBLEM,
    INDEX,
];

/// Path part of an in-app url, without query, fragment or trailing `/`
pub fn normalize_path(url: &str) -> &str {
    let end = url.find(['?', '#']).unwrap_or(url.len());
    let path = url[..end].trim_end_matches('/');
    if path.is_empty() {
        "/"
    } else {
        path
    }
}

/// First route whose path equals the path of `url`
pub fn find_by_path(url: &str) -> Option<&'static RouteDescriptor> {
    let path = normalize_path(url);
    ROUTES.iter().find(|route| route.path == path)
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn paths_and_names_are_unique() {
        let paths: HashSet<_> = ROUTES.iter().map(|r| r.path).collect();
        let names: HashSet<_> = ROUTES.iter().map(|r| r.name).collect();
        assert_eq!(paths.len(), ROUTES.len());
        assert_eq!(names.len(), ROUTES.len());
    }

    #[test]
    fn teacher_routes_require_auth() {
        for route in ROUTES.iter().filter(|r| r.requires_teacher) {
            assert!(route.requires_auth, "{route:?}");
        }
    }

    #[test]
    fn redirect_targets_are_reachable() {
        assert!(!find_by_path(LOGIN.path).unwrap().requires_auth);
        assert!(!find_by_path(INDEX.path).unwrap().requires_teacher);
    }

    #[test]
    fn lookup_by_path() {
        assert_eq!(find_by_path("/"), Some(&WELCOME));
        assert_eq!(find_by_path(""), Some(&WELCOME));
        assert_eq!(find_by_path("/checkin/"), Some(&CHECK_IN));
        assert_eq!(find_by_path("/checkin?day=1#top"), Some(&CHECK_IN));
        assert_eq!(find_by_path("/information").map(|r| r.name), Some("Information"));
        assert_eq!(find_by_path("/nowhere"), None);
        assert_eq!(find_by_path("/CheckIn"), None);
    }

    #[test]
    fn normalized_paths() {
        assert_eq!(normalize_path("/practiceproblem/#q3"), "/practiceproblem");
        assert_eq!(normalize_path("?redirect=x"), "/");
        assert_eq!(find_by_path("/practiceproblem/"), Some(&PRACTICE_PROBLEM));
    }
}
