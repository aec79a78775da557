//! Inspection commands.

use crate::VistoriasCommand;
use anyhow::{bail, Result};
use vistoria_app::screens::{
    InspectionDetailsScreen, ListTab, NewInspectionScreen, SharedListScreen, SubmissionState,
};
use vistoria_app::SharedApp;
use vistoria_core::{CategoriaVistoria, TipoVistoria};

pub async fn run(app: &SharedApp, cmd: VistoriasCommand) -> Result<()> {
    match cmd {
        VistoriasCommand::List { search, json } => list(app, search, json).await,
        VistoriasCommand::Show { id } => show(app, id).await,
        VistoriasCommand::New {
            tipo,
            categoria,
            anomalia,
            observacao,
            fotos,
        } => {
            create(
                app,
                NewInspection {
                    tipo,
                    categoria,
                    anomalia,
                    observacao,
                    fotos,
                },
            )
            .await
        }
        VistoriasCommand::Edit {
            id,
            observacao,
            tipo,
            categoria,
            anomalia,
        } => edit(app, id, observacao, tipo, categoria, anomalia).await,
    }
}

struct NewInspection {
    tipo: TipoVistoria,
    categoria: CategoriaVistoria,
    anomalia: Option<i64>,
    observacao: String,
    fotos: Vec<String>,
}

async fn list(app: &SharedApp, search: Option<String>, json: bool) -> Result<()> {
    let mut screen = SharedListScreen::new(app.clone());
    screen.set_query(search.unwrap_or_default());
    screen.select_tab(ListTab::Vistorias).await;

    if let Some(banner) = screen.offline_banner() {
        eprintln!("{banner}");
    }

    if json {
        let vistorias = screen.visible_vistorias().await;
        println!("{}", serde_json::to_string_pretty(&vistorias)?);
        return Ok(());
    }

    let rows = screen.vistoria_rows().await;
    if rows.is_empty() {
        println!("{}", screen.empty_text());
    }
    for row in rows {
        println!("#{:<5} {}  [{}]", row.id, row.date, row.badge_text);
        if let Some(anomalia) = &row.anomalia {
            println!("       Anomalia: {anomalia}");
        }
        if let Some(observacao) = &row.observacao {
            println!("       {observacao}");
        }
        if let Some(photos) = &row.photos {
            println!("       {photos}");
        }
    }
    Ok(())
}

async fn show(app: &SharedApp, id: i64) -> Result<()> {
    let mut screen = InspectionDetailsScreen::new(app.clone(), id).await;
    screen.mount().await;
    print_details(&screen)
}

fn print_details(screen: &InspectionDetailsScreen) -> Result<()> {
    let Some(vistoria) = screen.vistoria() else {
        bail!("vistoria not available");
    };

    println!("Vistoria #{}", vistoria.id);
    println!("  Data:       {}", screen.date_label().unwrap_or_default());
    println!(
        "  Tipo:       {}",
        vistoria.tipo_value().map_or("-", TipoVistoria::label)
    );
    println!(
        "  Categoria:  {}",
        vistoria.categoria_value().map_or("-", CategoriaVistoria::label)
    );
    if vistoria.contem_anomalia {
        println!("  Anomalia:   {}", vistoria.anomalia_nome().unwrap_or("-"));
    }
    println!("  Observação: {}", screen.observacao());
    for foto in &vistoria.fotos {
        println!("  Foto:       {foto}");
    }
    Ok(())
}

async fn create(app: &SharedApp, input: NewInspection) -> Result<()> {
    let mut screen = NewInspectionScreen::new(app.clone());
    screen.mount().await;

    screen.select_tipo(input.tipo);
    screen.select_categoria(input.categoria);
    if let Some(anomalia_id) = input.anomalia {
        if !screen.anomalias().iter().any(|a| a.id == anomalia_id) {
            tracing::warn!(anomalia_id, "anomalia not in the gateway list");
        }
        screen.toggle_contem_anomalia();
        screen.select_anomalia(anomalia_id);
    }
    screen.set_observacao(input.observacao);
    screen.add_photos(input.fotos);

    let state = screen.save().await.clone();
    match state {
        SubmissionState::Success { vistoria_id } => {
            println!("Created vistoria #{vistoria_id}");
            Ok(())
        }
        SubmissionState::PartialFailure { vistoria_id } => {
            println!("Created vistoria #{vistoria_id} without photos");
            Ok(())
        }
        SubmissionState::Failure { message } => bail!("{message}"),
        SubmissionState::Idle | SubmissionState::Submitting => {
            for message in screen.errors().messages() {
                eprintln!("  {message}");
            }
            bail!("vistoria was not submitted")
        }
    }
}

async fn edit(
    app: &SharedApp,
    id: i64,
    observacao: Option<String>,
    tipo: Option<TipoVistoria>,
    categoria: Option<CategoriaVistoria>,
    anomalia: Option<i64>,
) -> Result<()> {
    let mut screen = InspectionDetailsScreen::new(app.clone(), id).await;
    screen.mount().await;
    if screen.vistoria().is_none() {
        bail!("vistoria not available");
    }

    screen.start_editing();
    if let Some(observacao) = observacao {
        screen.set_observacao(observacao);
    }
    if let Some(tipo) = tipo {
        screen.select_tipo(tipo);
    }
    if let Some(categoria) = categoria {
        screen.select_categoria(categoria);
    }
    if let Some(anomalia_id) = anomalia {
        screen.select_anomalia(anomalia_id);
    }

    if !screen.save().await {
        bail!("vistoria was not updated");
    }
    if let Some(banner) = screen.success_banner().await {
        println!("{banner}");
    }
    print_details(&screen)
}
