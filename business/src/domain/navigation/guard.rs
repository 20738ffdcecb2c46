use std::sync::Arc;

use crate::domain::session::credentials::read_non_empty;
use crate::domain::session::storage::{LocalStore, TOKEN_KEY};

#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub name: String,
    pub path: String,
    pub requires_auth: bool,
}

impl Route {
    pub fn public(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            requires_auth: false,
        }
    }

    pub fn protected(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            requires_auth: true,
        }
    }

    /// Exact match, or `path` is nested below this route.
    fn matches(&self, path: &str) -> bool {
        let own = self.path.trim_end_matches('/');
        let target = path.trim_end_matches('/');
        if own.is_empty() {
            return target.is_empty();
        }
        target == own
            || target
                .strip_prefix(own)
                .is_some_and(|rest| rest.starts_with('/'))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Navigation {
    Proceed,
    Redirect(String),
}

/// Blocks routes flagged `requires_auth` unless a token is stored.
pub struct NavigationGuard {
    routes: Vec<Route>,
    auth_path: String,
    store: Arc<dyn LocalStore>,
}

impl NavigationGuard {
    pub fn new(routes: Vec<Route>, auth_path: impl Into<String>, store: Arc<dyn LocalStore>) -> Self {
        Self {
            routes,
            auth_path: auth_path.into(),
            store,
        }
    }

    pub fn matched(&self, path: &str) -> Vec<&Route> {
        self.routes.iter().filter(|r| r.matches(path)).collect()
    }

    pub fn resolve(&self, path: &str) -> Navigation {
        let requires_auth = self.matched(path).iter().any(|r| r.requires_auth);
        let authenticated = read_non_empty(self.store.as_ref(), TOKEN_KEY).is_some();

        if requires_auth && !authenticated {
            Navigation::Redirect(self.auth_path.clone())
        } else {
            Navigation::Proceed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MockStore;

    fn guard(token: Option<&'static str>) -> NavigationGuard {
        let mut store = MockStore::new();
        store
            .expect_get()
            .returning(move |_| token.map(str::to_string));

        NavigationGuard::new(
            vec![
                Route::public("home", "/"),
                Route::public("products", "/products"),
                Route::public("auth", "/auth"),
                Route::protected("admin", "/admin"),
            ],
            "/auth",
            Arc::new(store),
        )
    }

    #[test]
    fn should_redirect_to_auth_when_protected_route_has_no_token() {
        assert_eq!(
            guard(None).resolve("/admin"),
            Navigation::Redirect("/auth".to_string())
        );
    }

    #[test]
    fn should_proceed_to_protected_route_with_token() {
        assert_eq!(guard(Some("tok")).resolve("/admin"), Navigation::Proceed);
    }

    #[test]
    fn should_protect_nested_paths() {
        assert_eq!(
            guard(None).resolve("/admin/products/1"),
            Navigation::Redirect("/auth".to_string())
        );
        assert_eq!(guard(None).resolve("/administrator"), Navigation::Proceed);
    }

    #[test]
    fn should_proceed_to_public_and_unknown_routes_without_token() {
        let guard = guard(None);
        assert_eq!(guard.resolve("/products"), Navigation::Proceed);
        assert_eq!(guard.resolve("/"), Navigation::Proceed);
        assert_eq!(guard.resolve("/nowhere"), Navigation::Proceed);
    }

    #[test]
    fn should_treat_empty_token_as_unauthenticated() {
        assert_eq!(
            guard(Some("")).resolve("/admin"),
            Navigation::Redirect("/auth".to_string())
        );
    }
}
