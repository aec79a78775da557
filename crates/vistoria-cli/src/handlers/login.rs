//! Login command.

use anyhow::{bail, Result};
use vistoria_app::screens::{LoginOutcome, LoginScreen};
use vistoria_app::SharedApp;

pub async fn run(app: &SharedApp, email: String, password: String) -> Result<()> {
    let mut screen = LoginScreen::new(app.clone());
    screen.set_email(email);
    screen.set_password(password);

    match screen.submit().await {
        LoginOutcome::Authenticated => {
            let core = app.read().await;
            if let Some(user) = &core.views().auth.user {
                println!("Logged in as {} <{}>", user.name, user.email);
            }
            Ok(())
        }
        LoginOutcome::Busy => bail!("a login is already in progress"),
        outcome => bail!("login failed ({outcome:?})"),
    }
}
