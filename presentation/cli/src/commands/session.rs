use business::application::session::service::SessionService;
use business::domain::shared::value_objects::{AuthToken, UserId};

pub fn login(session: &SessionService, token: String, user_id: String) -> anyhow::Result<()> {
    session.sign_in(AuthToken::new(token), UserId::new(user_id))?;
    println!("Logged in");
    Ok(())
}

pub fn logout(session: &SessionService) -> anyhow::Result<()> {
    session.sign_out()?;
    println!("Logged out");
    Ok(())
}

pub fn status(session: &SessionService) {
    let logged_in = session.login_state.is_logged_in();
    println!("Logged in: {}", logged_in);
}
