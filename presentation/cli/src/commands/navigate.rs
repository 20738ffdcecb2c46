use business::domain::navigation::guard::{Navigation, NavigationGuard};

/// Prints where a visit to `path` ends up.
pub fn open(guard: &NavigationGuard, path: &str) {
    match guard.resolve(path) {
        Navigation::Proceed => println!("{}", path),
        Navigation::Redirect(target) => {
            tracing::info!("{} requires authentication, redirecting", path);
            println!("{}", target);
        }
    }
}
