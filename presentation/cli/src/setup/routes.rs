use business::domain::navigation::guard::Route;

pub const AUTH_PATH: &str = "/auth";

/// Pages of the storefront. Only the admin area needs a signed-in user.
pub fn storefront_routes() -> Vec<Route> {
    vec![
        Route::public("home", "/"),
        Route::public("about", "/about"),
        Route::public("products", "/products"),
        Route::public("auth", AUTH_PATH),
        Route::protected("admin", "/admin"),
    ]
}
