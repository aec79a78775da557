//! Client commands.

use crate::ClientsCommand;
use anyhow::{bail, Result};
use vistoria_app::screens::{ClientSubmitOutcome, NewClientScreen, SharedListScreen};
use vistoria_app::SharedApp;

pub async fn run(app: &SharedApp, cmd: ClientsCommand) -> Result<()> {
    match cmd {
        ClientsCommand::List { search, json } => list(app, search, json).await,
        ClientsCommand::Add {
            nome,
            email,
            telefone,
        } => add(app, nome, email, &telefone).await,
    }
}

async fn list(app: &SharedApp, search: Option<String>, json: bool) -> Result<()> {
    let mut screen = SharedListScreen::new(app.clone());
    screen.set_query(search.unwrap_or_default());
    screen.mount().await;

    if let Some(banner) = screen.offline_banner() {
        eprintln!("{banner}");
    }

    let clients = screen.visible_clients().await;
    if json {
        println!("{}", serde_json::to_string_pretty(&clients)?);
        return Ok(());
    }
    if clients.is_empty() {
        println!("{}", screen.empty_text());
    }
    for client in clients {
        println!(
            "{:>5}  {:<30} {:<30} {}",
            client.id, client.nome, client.email, client.telefone
        );
    }
    Ok(())
}

async fn add(app: &SharedApp, nome: String, email: String, telefone: &str) -> Result<()> {
    let mut screen = NewClientScreen::new(app.clone());
    screen.set_nome(nome);
    screen.set_email(email);
    screen.set_telefone(telefone);

    match screen.submit().await {
        ClientSubmitOutcome::Created => Ok(()),
        ClientSubmitOutcome::Invalid => {
            for message in screen.errors().messages() {
                eprintln!("  {message}");
            }
            bail!("client form is invalid")
        }
        ClientSubmitOutcome::Failed => bail!("client was not created"),
    }
}
