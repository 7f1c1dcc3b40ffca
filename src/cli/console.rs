//! Interactive console
//!
//! Navigates between the login view and the promotion list. The route guard
//! runs before every view and again after every login or logout.

use colored::Colorize;
use dialoguer::{Input, Select, theme::ColorfulTheme};

use crate::cli::login::credentials;
use crate::cli::prompt::{ConfirmDelete, alert};
use crate::cli::{CommandContext, GlobalOptions, OutputFormat, progress};
use crate::client::models::{Promotion, PromotionId};
use crate::error::{Error, FormError, Result};
use crate::flow::{
    DeleteOutcome, FormMode, MealField, PromotionForm, PromotionList, load_preview,
};
use crate::output::{self, image::ImageRef};
use crate::route::{Admission, Route, guard};

#[derive(Debug, Clone, Copy)]
enum ListAction {
    Add,
    Edit,
    Delete,
    Preview,
    Reload,
    Logout,
    Quit,
}

impl ListAction {
    fn label(self) -> &'static str {
        match self {
            ListAction::Add => "Add Promotion",
            ListAction::Edit => "Edit",
            ListAction::Delete => "Delete",
            ListAction::Preview => "Preview",
            ListAction::Reload => "Reload",
            ListAction::Logout => "Log out",
            ListAction::Quit => "Quit",
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum FormAction {
    EditName,
    AddMeal,
    EditMeal,
    RemoveMeal,
    TogglePublish,
    Submit,
    Cancel,
}

impl FormAction {
    fn label(self, form: &PromotionForm) -> &'static str {
        match self {
            FormAction::EditName => "Edit name",
            FormAction::AddMeal => "Add Meal",
            FormAction::EditMeal => "Edit meal",
            FormAction::RemoveMeal => "Remove meal",
            FormAction::TogglePublish => "Toggle publish to Facebook",
            FormAction::Submit => form.submit_label(),
            FormAction::Cancel => "Cancel",
        }
    }
}

/// Run the interactive console starting at `path`
pub async fn run(opts: &GlobalOptions, path: &str) -> Result<()> {
    let mut ctx = CommandContext::open(opts).await?;
    let base_path = ctx.config.base_path();
    let mut route = Route::from_path(path, &base_path);
    let mut list = PromotionList::new();

    println!(
        "{} {}",
        "promoadmin".bold(),
        ctx.client.base_url().dimmed()
    );

    loop {
        let next = match guard(route, ctx.session.state()) {
            Admission::Wait => {
                let spinner = progress::spinner("Loading...");
                ctx.session.resolve();
                spinner.finish_and_clear();
                Some(route)
            }
            Admission::Redirect(target) => {
                log::debug!(
                    "{} -> {}",
                    route.full_path(&base_path),
                    target.full_path(&base_path)
                );
                Some(target)
            }
            Admission::Admit(Route::Login) => login_view(&mut ctx).await?,
            Admission::Admit(Route::Promotions) => promotions_view(&mut ctx, &mut list).await?,
        };

        match next {
            Some(target) => route = target,
            None => return Ok(()),
        }
    }
}

async fn login_view(ctx: &mut CommandContext) -> Result<Option<Route>> {
    println!("\n{}", "Log in".bold());
    let (username, password) = credentials(None, None)?;

    let spinner = progress::spinner("Logging in...");
    let result = ctx.session.login(&ctx.client, &username, &password).await;
    spinner.finish_and_clear();

    match result {
        Ok(()) => {
            println!("{} Logged in as {}", "✓".green(), username.bold());
            Ok(Some(Route::Promotions))
        }
        Err(e) => {
            alert(&e);
            let retry = dialoguer::Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt("Try again?")
                .default(true)
                .interact()?;
            Ok(retry.then_some(Route::Login))
        }
    }
}

async fn promotions_view(
    ctx: &mut CommandContext,
    list: &mut PromotionList,
) -> Result<Option<Route>> {
    if !list.is_loaded() {
        reload(ctx, list).await;
    }

    loop {
        show_list(ctx, list)?;

        let mut actions = vec![ListAction::Add];
        if !list.promotions().is_empty() {
            actions.extend([ListAction::Edit, ListAction::Delete, ListAction::Preview]);
        }
        actions.extend([ListAction::Reload, ListAction::Logout, ListAction::Quit]);

        let labels: Vec<&str> = actions.iter().map(|a| a.label()).collect();
        let Some(choice) = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("What next?")
            .items(&labels)
            .default(0)
            .interact_opt()?
        else {
            return Ok(None);
        };

        match actions[choice] {
            ListAction::Add => {
                let mut form = list.open_create()?;
                run_form(ctx, list, &mut form).await?;
            }
            ListAction::Edit => {
                if let Some(promotion) = pick_promotion(list, "Edit which promotion?")? {
                    let mut form = list.open_edit(&promotion)?;
                    run_form(ctx, list, &mut form).await?;
                }
            }
            ListAction::Delete => {
                if let Some(id) =
                    pick_promotion(list, "Delete which promotion?")?.and_then(|p| p.id)
                {
                    delete(ctx, list, &id).await;
                }
            }
            ListAction::Preview => {
                if let Some(id) =
                    pick_promotion(list, "Preview which promotion?")?.and_then(|p| p.id)
                {
                    preview(ctx, list, &id).await?;
                }
            }
            ListAction::Reload => reload(ctx, list).await,
            ListAction::Logout => {
                if let Err(e) = ctx.session.logout(&ctx.client).await {
                    alert(&e);
                }
                *list = PromotionList::new();
                println!("{} Logged out", "✓".green());
                return Ok(Some(Route::Promotions));
            }
            ListAction::Quit => return Ok(None),
        }
    }
}

async fn reload(ctx: &CommandContext, list: &mut PromotionList) {
    let spinner = progress::spinner("Loading...");
    let loaded = list.load(&ctx.client).await;
    spinner.finish_and_clear();

    if !loaded {
        eprintln!("{} Could not load promotions", "✗".red());
    }
}

async fn close_dialog(ctx: &CommandContext, list: &mut PromotionList) {
    let spinner = progress::spinner("Loading...");
    list.close_dialog(&ctx.client).await;
    spinner.finish_and_clear();
}

fn show_list(ctx: &CommandContext, list: &PromotionList) -> Result<()> {
    let format = match ctx.format {
        OutputFormat::Table => OutputFormat::Table,
        OutputFormat::Pretty | OutputFormat::Json => OutputFormat::Pretty,
    };

    println!("\n{}\n", "Promotions".bold());
    println!(
        "{}",
        output::render_promotions(list.promotions(), format, ctx.currency())?
    );
    Ok(())
}

fn pick_promotion(list: &PromotionList, prompt: &str) -> Result<Option<Promotion>> {
    let items: Vec<String> = list
        .promotions()
        .iter()
        .map(|p| match &p.id {
            Some(id) => format!("{} ({})", p.name, id),
            None => p.name.clone(),
        })
        .collect();

    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(&items)
        .default(0)
        .interact_opt()?;

    Ok(choice.and_then(|i| list.promotions().get(i).cloned()))
}

async fn delete(ctx: &CommandContext, list: &mut PromotionList, id: &PromotionId) {
    let confirm = ConfirmDelete::interactive();
    let result = list.delete(&ctx.client, id, &confirm).await;
    drop(confirm);

    match result {
        Ok(DeleteOutcome::Deleted) => println!("{} Deleted", "✓".green()),
        Ok(DeleteOutcome::Cancelled) => {}
        Err(e) => alert(&e),
    }
}

async fn preview(ctx: &CommandContext, list: &mut PromotionList, id: &PromotionId) -> Result<()> {
    list.open_preview(id)?;
    log::debug!("Opened {:?}", list.dialog());

    let spinner = progress::spinner("Loading...");
    let loaded = load_preview(&ctx.client, id).await;
    spinner.finish_and_clear();

    let shown = match loaded {
        Some(loaded) => show_image(id, &loaded.image),
        None => {
            eprintln!("{} Failed to load image", "✗".red());
            Ok(())
        }
    };

    list.close_preview();
    shown
}

fn show_image(id: &PromotionId, reference: &str) -> Result<()> {
    let image = match ImageRef::parse(reference) {
        Ok(image) => image,
        Err(e) => {
            alert(&e);
            return Ok(());
        }
    };
    let extension = image.extension();

    match image {
        ImageRef::Link(url) => println!("Preview: {}", url.cyan()),
        ImageRef::Embedded { mime, bytes } => {
            println!("Preview image: {} ({} bytes)", mime, bytes.len());
            let path: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt("Save to file (empty to skip)")
                .with_initial_text(format!("{}.{}", id, extension))
                .allow_empty(true)
                .interact_text()?;

            let path = path.trim();
            if !path.is_empty() {
                match std::fs::write(path, &bytes) {
                    Ok(()) => println!("{} Saved to {}", "✓".green(), path.cyan()),
                    Err(e) => alert(&Error::from(e)),
                }
            }
        }
    }
    Ok(())
}

async fn run_form(
    ctx: &CommandContext,
    list: &mut PromotionList,
    form: &mut PromotionForm,
) -> Result<()> {
    let theme = ColorfulTheme::default();

    loop {
        show_form(form, ctx.currency());

        let mut actions = vec![FormAction::EditName, FormAction::AddMeal];
        if !form.meals().is_empty() {
            actions.extend([FormAction::EditMeal, FormAction::RemoveMeal]);
        }
        if form.is_edit() {
            actions.push(FormAction::TogglePublish);
        }
        if !form.is_submitting() {
            actions.push(FormAction::Submit);
        }
        actions.push(FormAction::Cancel);

        let labels: Vec<&str> = actions.iter().map(|a| a.label(form)).collect();
        let choice = Select::with_theme(&theme)
            .with_prompt(form.title())
            .items(&labels)
            .default(0)
            .interact_opt()?;

        match choice.map(|i| actions[i]) {
            Some(FormAction::EditName) => {
                let name: String = Input::with_theme(&theme)
                    .with_prompt("Promotion name")
                    .with_initial_text(form.name())
                    .allow_empty(true)
                    .interact_text()?;
                form.set_name(name.trim());
            }
            Some(FormAction::AddMeal) => {
                form.add_meal();
                let row = form.meals().len() - 1;
                edit_meal(form, row)?;
            }
            Some(FormAction::EditMeal) => {
                if let Some(row) = pick_meal(form, "Edit which meal?")? {
                    edit_meal(form, row)?;
                }
            }
            Some(FormAction::RemoveMeal) => {
                if let Some(row) = pick_meal(form, "Remove which meal?")? {
                    form.remove_meal(row)?;
                }
            }
            Some(FormAction::TogglePublish) => form.set_publish(!form.publish()),
            Some(FormAction::Submit) => {
                let spinner = progress::spinner(form.progress_label());
                let result = list.submit_form(&ctx.client, form).await;
                spinner.finish_and_clear();

                match result {
                    Ok(saved) => {
                        println!("{} Saved {}", "✓".green(), saved.name.bold());
                        return Ok(());
                    }
                    Err(e) => alert(&e),
                }
            }
            Some(FormAction::Cancel) | None => {
                close_dialog(ctx, list).await;
                return Ok(());
            }
        }
    }
}

fn show_form(form: &PromotionForm, currency: &str) {
    println!("\n{}", form.title().bold());
    if let FormMode::Edit(id) = form.mode() {
        println!("ID: {}", id);
    }

    if form.name().is_empty() {
        println!("Name: {}", "(empty)".dimmed());
    } else {
        println!("Name: {}", form.name());
    }

    println!("Meals:");
    if form.meals().is_empty() {
        println!("  {}", "none".dimmed());
    }
    for (i, meal) in form.meals().iter().enumerate() {
        let name = if meal.name.is_empty() {
            "(unnamed)".dimmed().to_string()
        } else {
            meal.name.clone()
        };
        println!("  {}. {} - {} {}", i + 1, name, meal.price, currency);
        if !meal.description.is_empty() {
            println!("     {}", meal.description.dimmed());
        }
        if !meal.additionals.is_empty() {
            println!("     + {}", meal.additionals.dimmed());
        }
    }

    if form.is_edit() {
        let publish = if form.publish() {
            "yes".green()
        } else {
            "no".dimmed()
        };
        println!("Publish to Facebook: {}", publish);
    }
}

fn pick_meal(form: &PromotionForm, prompt: &str) -> Result<Option<usize>> {
    let items: Vec<String> = form
        .meals()
        .iter()
        .enumerate()
        .map(|(i, meal)| format!("{}. {}", i + 1, meal.name))
        .collect();

    Ok(Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(&items)
        .default(0)
        .interact_opt()?)
}

fn edit_meal(form: &mut PromotionForm, row: usize) -> Result<()> {
    let theme = ColorfulTheme::default();

    for field in MealField::ALL {
        let current = form
            .meals()
            .get(row)
            .ok_or(FormError::NoSuchMeal(row + 1))?
            .get(field)
            .to_string();

        let value: String = Input::with_theme(&theme)
            .with_prompt(field.label())
            .with_initial_text(current)
            .allow_empty(true)
            .interact_text()?;

        form.set_meal_field(row, field, value)?;
    }
    Ok(())
}
