//! Interactive group member editing session.

use crate::console::menu::MemberAction;
use crate::console::{
    read_action, select_index, settle, Console, Flow, SessionOutcome, SessionResult,
};
use crate::model::member::{MemberDocument, Section};
use crate::repo::document_repo::DocumentRepository;
use crate::service::excerpt;
use crate::service::member_service::{MemberDraft, MemberEdit, MemberService};
use crate::service::selection::parse_selection;
use log::info;
use std::io::{BufRead, Write};

const EDIT_DESCRIPTION_CHARS: usize = 50;

/// Runs the member menu loop until the user exits or input ends.
pub fn run_member_session<R, W, S>(
    console: &mut Console<R, W>,
    service: &mut MemberService<S>,
) -> SessionResult<SessionOutcome>
where
    R: BufRead,
    W: Write,
    S: DocumentRepository<MemberDocument>,
{
    let result = dispatch_loop(console, service);
    let outcome = settle(console, result)?;
    info!("event=session_end module=console kind=members outcome={outcome:?}");
    Ok(outcome)
}

fn dispatch_loop<R, W, S>(
    console: &mut Console<R, W>,
    service: &mut MemberService<S>,
) -> SessionResult<SessionOutcome>
where
    R: BufRead,
    W: Write,
    S: DocumentRepository<MemberDocument>,
{
    console.say("=== Group Member Management ===")?;
    console.say("Edit the current and alumni members of the site data file.")?;

    loop {
        let Some(action) = read_action::<MemberAction, _, _>(console)? else {
            continue;
        };
        match handle(console, service, action)? {
            Flow::Continue => {}
            Flow::Exit(outcome) => return Ok(outcome),
        }
    }
}

fn handle<R, W, S>(
    console: &mut Console<R, W>,
    service: &mut MemberService<S>,
    action: MemberAction,
) -> SessionResult<Flow>
where
    R: BufRead,
    W: Write,
    S: DocumentRepository<MemberDocument>,
{
    match action {
        MemberAction::Add(section) => add_member(console, service, section)?,
        MemberAction::Edit(section) => edit_member(console, service, section)?,
        MemberAction::Remove(section) => remove_member(console, service, section)?,
        MemberAction::Move => move_member(console, service)?,
        MemberAction::PrintData => {
            console.say("\n=== Current Data ===")?;
            console.say(service.render()?)?;
        }
        MemberAction::SaveAndExit => {
            service.save()?;
            console.say("\n✅ Data saved successfully!")?;
            return Ok(Flow::Exit(SessionOutcome::Saved));
        }
        MemberAction::ExitWithoutSaving => {
            console.say("\nExiting without saving changes.")?;
            return Ok(Flow::Exit(SessionOutcome::Discarded));
        }
    }
    Ok(Flow::Continue)
}

fn add_member<R, W, S>(
    console: &mut Console<R, W>,
    service: &mut MemberService<S>,
    section: Section,
) -> SessionResult<()>
where
    R: BufRead,
    W: Write,
    S: DocumentRepository<MemberDocument>,
{
    console.say(format!("\n=== Adding new {section} member ==="))?;
    let mut draft = MemberDraft {
        name: console.prompt("Name: ")?,
        role: console.prompt("Role: ")?,
        image: console.prompt("Image filename (leave empty for placeholder): ")?,
        description: console.prompt("Description: ")?,
        email: console.prompt("Email: ")?,
        website: console.prompt("Website URL (leave empty if none): ")?,
        github: console.prompt("GitHub username (leave empty if none): ")?,
        ads: console.prompt("NASA ADS URL (leave empty if none): ")?,
        orcid: console.prompt("ORCID URL (leave empty if none): ")?,
        ..MemberDraft::default()
    };
    if section == Section::Alumni {
        draft.current_position = console.prompt("Current position: ")?;
    }

    let name = service.add_member(section, draft).name.clone();
    console.say(format!("\n✅ Added {name} to {section} section!"))?;
    Ok(())
}

fn list_members<R: BufRead, W: Write, S: DocumentRepository<MemberDocument>>(
    console: &mut Console<R, W>,
    service: &MemberService<S>,
    header: &str,
    section: Section,
) -> SessionResult<()> {
    console.say(header)?;
    for (position, member) in service.members(section).iter().enumerate() {
        console.say(format!("{}. {} - {}", position + 1, member.name, member.role))?;
    }
    Ok(())
}

fn edit_member<R, W, S>(
    console: &mut Console<R, W>,
    service: &mut MemberService<S>,
    section: Section,
) -> SessionResult<()>
where
    R: BufRead,
    W: Write,
    S: DocumentRepository<MemberDocument>,
{
    if service.members(section).is_empty() {
        console.say(format!("No {section} members found."))?;
        return Ok(());
    }
    let header = format!("\n=== Current {section} members ===");
    list_members(console, service, &header, section)?;
    let len = service.members(section).len();
    let Some(index) = select_index(console, "member to edit", len)? else {
        return Ok(());
    };

    let current = service.members(section)[index].clone();
    let shown = |value: &Option<String>| value.clone().unwrap_or_default();
    console.say(format!("\n=== Editing {} ===", current.name))?;
    let mut edit = MemberEdit {
        name: console.prompt(&format!("Name ({}): ", current.name))?,
        role: console.prompt(&format!("Role ({}): ", current.role))?,
        image: console.prompt(&format!("Image ({}): ", shown(&current.image)))?,
        description: console.prompt(&format!(
            "Description ({}...): ",
            excerpt(&current.description, EDIT_DESCRIPTION_CHARS)
        ))?,
        email: console.prompt(&format!("Email ({}): ", current.email))?,
        website: console.prompt(&format!("Website ({}): ", shown(&current.website)))?,
        github: console.prompt(&format!("GitHub ({}): ", shown(&current.github)))?,
        ads: console.prompt(&format!("NASA ADS URL ({}): ", shown(&current.ads)))?,
        orcid: console.prompt(&format!("ORCID URL ({}): ", shown(&current.orcid)))?,
        ..MemberEdit::default()
    };
    if section == Section::Alumni {
        edit.current_position = console.prompt(&format!(
            "Current position ({}): ",
            shown(&current.current_position)
        ))?;
    }

    match service.edit_member(section, index, &edit) {
        Ok(member) => {
            let name = member.name.clone();
            console.say(format!("\n✅ Updated {name}!"))?;
        }
        Err(err) => console.say(err)?,
    }
    Ok(())
}

fn remove_member<R, W, S>(
    console: &mut Console<R, W>,
    service: &mut MemberService<S>,
    section: Section,
) -> SessionResult<()>
where
    R: BufRead,
    W: Write,
    S: DocumentRepository<MemberDocument>,
{
    if service.members(section).is_empty() {
        console.say(format!("No {section} members found."))?;
        return Ok(());
    }
    let header = format!("\n=== Current {section} members ===");
    list_members(console, service, &header, section)?;
    let len = service.members(section).len();
    let Some(index) = select_index(console, "member to remove", len)? else {
        return Ok(());
    };

    match service.remove_member(section, index) {
        Ok(member) => console.say(format!(
            "\n✅ Removed {} from {section} section!",
            member.name
        ))?,
        Err(err) => console.say(err)?,
    }
    Ok(())
}

fn move_member<R, W, S>(
    console: &mut Console<R, W>,
    service: &mut MemberService<S>,
) -> SessionResult<()>
where
    R: BufRead,
    W: Write,
    S: DocumentRepository<MemberDocument>,
{
    console.say("\n=== Move member between sections ===")?;
    console.say("1. Current → Alumni")?;
    console.say("2. Alumni → Current")?;
    let input = console.prompt("Select option (1-2): ")?;
    let from = match parse_selection(&input, 2) {
        Ok(0) => Section::Current,
        Ok(_) => Section::Alumni,
        Err(err) => {
            console.say(err)?;
            return Ok(());
        }
    };

    if service.members(from).is_empty() {
        console.say(format!("No {from} members found."))?;
        return Ok(());
    }
    let header = match from {
        Section::Current => "\n=== Current members ===",
        Section::Alumni => "\n=== Alumni members ===",
    };
    list_members(console, service, header, from)?;
    let len = service.members(from).len();
    let Some(index) = select_index(console, "member to move", len)? else {
        return Ok(());
    };

    let moved = match from {
        Section::Current => {
            let position = console.prompt("Current position: ")?;
            service
                .move_to_alumni(index, &position)
                .map(|member| format!("\n✅ Moved {} to alumni!", member.name))
        }
        Section::Alumni => {
            let role = console.prompt("New role: ")?;
            service
                .move_to_current(index, &role)
                .map(|member| format!("\n✅ Moved {} to current members!", member.name))
        }
    };
    match moved {
        Ok(message) => console.say(message)?,
        Err(err) => console.say(err)?,
    }
    Ok(())
}
