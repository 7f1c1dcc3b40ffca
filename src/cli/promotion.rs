//! Promotion management commands

use colored::Colorize;

use crate::cli::prompt::ConfirmDelete;
use crate::cli::{CommandContext, GlobalOptions, OutputFormat, progress};
use crate::client::PromotionApi;
use crate::client::models::{Promotion, PromotionId};
use crate::error::{Error, Result};
use crate::flow::{DeleteOutcome, MealDraft, PromotionList};
use crate::output::image::ImageRef;
use crate::output::{self, json};

/// Run the promotion list command
pub async fn list(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::authenticated(opts).await?;

    let spinner = progress::spinner("Loading...");
    let result = ctx.client.list_promotions().await;
    spinner.finish_and_clear();
    let promotions = result?;

    log::debug!("Fetched {} promotions", promotions.len());
    println!(
        "{}",
        output::render_promotions(&promotions, ctx.format, ctx.currency())?
    );

    Ok(())
}

/// Run the promotion get command
pub async fn get(opts: &GlobalOptions, id: &str) -> Result<()> {
    let ctx = CommandContext::authenticated(opts).await?;

    let spinner = progress::spinner("Loading...");
    let result = ctx.client.get_promotion(&PromotionId::from(id)).await;
    spinner.finish_and_clear();
    let preview = result?;

    println!(
        "{}",
        output::render_promotion(&preview.promotion, ctx.format, ctx.currency())?
    );

    Ok(())
}

/// Run the promotion preview command
pub async fn preview(opts: &GlobalOptions, id: &str, output_file: Option<&str>) -> Result<()> {
    let ctx = CommandContext::authenticated(opts).await?;

    let spinner = progress::spinner("Loading...");
    let result = ctx.client.get_promotion(&PromotionId::from(id)).await;
    spinner.finish_and_clear();
    let preview = result?;

    let image = ImageRef::parse(&preview.image)?;
    let extension = image.extension();
    match (image, output_file) {
        (ImageRef::Embedded { mime, bytes }, Some(path)) => {
            std::fs::write(path, &bytes)?;
            println!(
                "{} Saved {} ({} bytes) to {}",
                "✓".green(),
                mime,
                bytes.len(),
                path.cyan()
            );
        }
        (ImageRef::Link(url), Some(_)) => {
            return Err(Error::Other(format!(
                "Preview image is not embedded and cannot be saved: {}",
                url
            )));
        }
        (ImageRef::Embedded { mime, bytes }, None) => {
            println!(
                "Preview image: {} ({} bytes). Use --output {} to save it.",
                mime,
                bytes.len(),
                format!("{}.{}", id, extension).cyan()
            );
        }
        (ImageRef::Link(url), None) => println!("{}", url),
    }

    Ok(())
}

/// Run the promotion create command
pub async fn create(opts: &GlobalOptions, name: String, meals: Vec<MealDraft>) -> Result<()> {
    let ctx = CommandContext::authenticated(opts).await?;

    let mut list = PromotionList::new();
    let mut form = list.open_create()?;
    form.set_name(name);
    form.set_meals(meals);

    let spinner = progress::spinner(form.progress_label());
    let result = list.submit_form(&ctx.client, &mut form).await;
    spinner.finish_and_clear();
    let saved = result?;

    print_saved(&ctx, &saved, "Created")
}

/// Run the promotion edit command.
///
/// Fields not given on the command line keep their current values.
pub async fn edit(
    opts: &GlobalOptions,
    id: &str,
    name: Option<String>,
    meals: Vec<MealDraft>,
    publish: bool,
) -> Result<()> {
    let ctx = CommandContext::authenticated(opts).await?;

    let spinner = progress::spinner("Loading...");
    let result = ctx.client.get_promotion(&PromotionId::from(id)).await;
    spinner.finish_and_clear();
    let current = result?.promotion;

    let mut list = PromotionList::new();
    let mut form = list.open_edit(&current)?;
    if let Some(name) = name {
        form.set_name(name);
    }
    if !meals.is_empty() {
        form.set_meals(meals);
    }
    form.set_publish(publish);

    let spinner = progress::spinner(form.progress_label());
    let result = list.submit_form(&ctx.client, &mut form).await;
    spinner.finish_and_clear();
    let saved = result?;

    print_saved(&ctx, &saved, "Saved")
}

/// Run the promotion delete command
pub async fn delete(opts: &GlobalOptions, id: &str, yes: bool) -> Result<()> {
    let ctx = CommandContext::authenticated(opts).await?;

    let confirm = if yes {
        ConfirmDelete::assume_yes()
    } else {
        ConfirmDelete::interactive()
    };

    let mut list = PromotionList::new();
    let outcome = list
        .delete(&ctx.client, &PromotionId::from(id), &confirm)
        .await;
    drop(confirm);

    match outcome? {
        DeleteOutcome::Deleted => println!("{} Deleted promotion {}", "✓".green(), id),
        DeleteOutcome::Cancelled => println!("{} Cancelled", "○".dimmed()),
    }

    Ok(())
}

fn print_saved(ctx: &CommandContext, saved: &Promotion, verb: &str) -> Result<()> {
    match ctx.format {
        OutputFormat::Json => println!("{}", json::format_json(saved)?),
        OutputFormat::Pretty | OutputFormat::Table => {
            let id = saved
                .id
                .as_ref()
                .map(|id| id.to_string())
                .unwrap_or_else(|| "-".to_string());
            println!(
                "{} {} promotion {} ({})",
                "✓".green(),
                verb,
                saved.name.bold(),
                id
            );
        }
    }
    Ok(())
}
