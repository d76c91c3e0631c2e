//! Interactive news editing session.

use crate::console::menu::NewsAction;
use crate::console::{
    read_action, select_index, settle, Console, Flow, SessionOutcome, SessionResult,
};
use crate::model::news::{Category, NewsDocument};
use crate::repo::document_repo::DocumentRepository;
use crate::service::news_service::{resolve_date, NewsItemDraft, NewsItemEdit, NewsService};
use crate::service::selection::{parse_selection, SelectionError};
use crate::service::{excerpt, parse_yes_no, ServiceError};
use chrono::NaiveDate;
use log::info;
use std::io::{BufRead, Write};

const EDIT_DESCRIPTION_CHARS: usize = 50;

/// Runs the news menu loop until the user exits or input ends.
///
/// `today` is what the `today` date shortcut expands to.
pub fn run_news_session<R, W, S>(
    console: &mut Console<R, W>,
    service: &mut NewsService<S>,
    today: NaiveDate,
) -> SessionResult<SessionOutcome>
where
    R: BufRead,
    W: Write,
    S: DocumentRepository<NewsDocument>,
{
    let result = dispatch_loop(console, service, today);
    let outcome = settle(console, result)?;
    info!("event=session_end module=console kind=news outcome={outcome:?}");
    Ok(outcome)
}

fn dispatch_loop<R, W, S>(
    console: &mut Console<R, W>,
    service: &mut NewsService<S>,
    today: NaiveDate,
) -> SessionResult<SessionOutcome>
where
    R: BufRead,
    W: Write,
    S: DocumentRepository<NewsDocument>,
{
    console.say("=== News and Travel Management ===")?;
    console.say("Edit the news items and categories of the site data file.")?;

    loop {
        let Some(action) = read_action::<NewsAction, _, _>(console)? else {
            continue;
        };
        match handle(console, service, action, today)? {
            Flow::Continue => {}
            Flow::Exit(outcome) => return Ok(outcome),
        }
    }
}

fn handle<R, W, S>(
    console: &mut Console<R, W>,
    service: &mut NewsService<S>,
    action: NewsAction,
    today: NaiveDate,
) -> SessionResult<Flow>
where
    R: BufRead,
    W: Write,
    S: DocumentRepository<NewsDocument>,
{
    match action {
        NewsAction::AddItem => add_item(console, service, today)?,
        NewsAction::EditItem => edit_item(console, service)?,
        NewsAction::RemoveItem => remove_item(console, service)?,
        NewsAction::ViewItems => view_items(console, service)?,
        NewsAction::AddCategory => add_category(console, service)?,
        NewsAction::PrintData => {
            console.say("\n=== Current Data ===")?;
            console.say(service.render()?)?;
        }
        NewsAction::SaveAndExit => {
            service.save()?;
            console.say("\n✅ Data saved successfully!")?;
            return Ok(Flow::Exit(SessionOutcome::Saved));
        }
        NewsAction::ExitWithoutSaving => {
            console.say("\nExiting without saving changes.")?;
            return Ok(Flow::Exit(SessionOutcome::Discarded));
        }
    }
    Ok(Flow::Continue)
}

fn add_item<R, W, S>(
    console: &mut Console<R, W>,
    service: &mut NewsService<S>,
    today: NaiveDate,
) -> SessionResult<()>
where
    R: BufRead,
    W: Write,
    S: DocumentRepository<NewsDocument>,
{
    console.say("\n=== Adding new news item ===")?;
    if service.categories().is_empty() {
        console.say(ServiceError::NoCategories)?;
        return Ok(());
    }

    let date = loop {
        let input = console.prompt("Date (YYYY-MM-DD, or 'today'): ")?;
        match resolve_date(&input, today) {
            Some(date) => break date,
            None => console.say("Please enter a valid date in YYYY-MM-DD format or 'today'")?,
        }
    };
    let title = console.prompt("Title: ")?;
    let description = console.prompt("Description: ")?;

    console.say("\nAvailable categories:")?;
    for (position, category) in service.categories().iter().enumerate() {
        console.say(format!(
            "{}. {} ({})",
            position + 1,
            category.display_name,
            category.name
        ))?;
    }
    let count = service.categories().len();
    let category = loop {
        let input = console.prompt(&format!("\nSelect category (1-{count}): "))?;
        match parse_selection(&input, count) {
            Ok(index) => match service.category_at(index) {
                Ok(category) => break category.name.clone(),
                Err(err) => console.say(err)?,
            },
            Err(SelectionError::NotANumber(_)) => console.say("Please enter a number.")?,
            Err(err) => console.say(err)?,
        }
    };

    let link = console.prompt("Link URL (optional): ")?;
    let featured = console.prompt("Featured item? (y/n, default: n): ")?;

    let draft = NewsItemDraft {
        date,
        title,
        description,
        category,
        link,
        featured: parse_yes_no(&featured) == Some(true),
    };
    let title = service.add_item(draft).title.clone();
    console.say(format!("\n✅ Added news item: {title}"))
}

fn list_items<R: BufRead, W: Write, S: DocumentRepository<NewsDocument>>(
    console: &mut Console<R, W>,
    service: &NewsService<S>,
) -> SessionResult<()> {
    console.say("\n=== Current news items ===")?;
    for (position, item) in service.items().iter().enumerate() {
        console.say(format!("{}. {} - {}", position + 1, item.date, item.title))?;
    }
    Ok(())
}

fn edit_item<R, W, S>(console: &mut Console<R, W>, service: &mut NewsService<S>) -> SessionResult<()>
where
    R: BufRead,
    W: Write,
    S: DocumentRepository<NewsDocument>,
{
    if service.items().is_empty() {
        return console.say("No news items found.");
    }
    list_items(console, service)?;
    let Some(index) = select_index(console, "item to edit", service.items().len())? else {
        return Ok(());
    };

    let current = service.items()[index].clone();
    console.say(format!("\n=== Editing: {} ===", current.title))?;
    let edit = NewsItemEdit {
        date: console.prompt(&format!("Date ({}): ", current.date))?,
        title: console.prompt(&format!("Title ({}): ", current.title))?,
        description: console.prompt(&format!(
            "Description ({}...): ",
            excerpt(&current.description, EDIT_DESCRIPTION_CHARS)
        ))?,
        link: console.prompt(&format!(
            "Link ({}): ",
            current.link.as_deref().unwrap_or("")
        ))?,
        featured: console.prompt(&format!("Featured ({}): ", current.featured))?,
    };

    match service.edit_item(index, &edit) {
        Ok(item) => {
            let title = item.title.clone();
            console.say(format!("\n✅ Updated: {title}"))
        }
        Err(err) => console.say(err),
    }
}

fn remove_item<R, W, S>(
    console: &mut Console<R, W>,
    service: &mut NewsService<S>,
) -> SessionResult<()>
where
    R: BufRead,
    W: Write,
    S: DocumentRepository<NewsDocument>,
{
    if service.items().is_empty() {
        return console.say("No news items found.");
    }
    list_items(console, service)?;
    let Some(index) = select_index(console, "item to remove", service.items().len())? else {
        return Ok(());
    };

    match service.remove_item(index) {
        Ok(item) => console.say(format!("\n✅ Removed: {}", item.title)),
        Err(err) => console.say(err),
    }
}

fn view_items<R, W, S>(console: &mut Console<R, W>, service: &NewsService<S>) -> SessionResult<()>
where
    R: BufRead,
    W: Write,
    S: DocumentRepository<NewsDocument>,
{
    if service.items().is_empty() {
        return console.say("No news items found.");
    }

    let summaries = service.view_items();
    console.say(format!(
        "\n=== All News Items ({} total) ===",
        summaries.len()
    ))?;
    for (position, summary) in summaries.iter().enumerate() {
        let featured_mark = if summary.featured { " ⭐" } else { "" };
        console.say(format!(
            "\n{}. {} - {}{featured_mark}",
            position + 1,
            summary.date,
            summary.title
        ))?;
        console.say(format!("   Category: {}", summary.category))?;
        console.say(format!("   Description: {}...", summary.description))?;
        if let Some(link) = &summary.link {
            console.say(format!("   Link: {link}"))?;
        }
    }
    Ok(())
}

fn add_category<R, W, S>(
    console: &mut Console<R, W>,
    service: &mut NewsService<S>,
) -> SessionResult<()>
where
    R: BufRead,
    W: Write,
    S: DocumentRepository<NewsDocument>,
{
    console.say("\n=== Adding new category ===")?;
    let name = console.prompt("Category name (lowercase, no spaces): ")?;
    let display_name = console.prompt("Display name: ")?;
    let icon = console.prompt("FontAwesome icon (e.g., fa-briefcase): ")?;
    let color = console.prompt("Color (hex code, e.g., #28a745): ")?;

    let added = service.add_category(Category::new(name, display_name, icon, color));
    let display_name = added.display_name.clone();
    console.say(format!("\n✅ Added category: {display_name}"))
}
