//! Interactive menu shell over the note store.
//!
//! # Responsibility
//! - Present the numbered menu, collect input, and print core results.
//! - Convert malformed uid input into a message instead of a crash.
//! - Own the process-lifetime store instance and pass it into the loop.
//!
//! # Invariants
//! - "Not found" results print as normal text and return to the menu.
//! - Only the exit choice or end of input terminates the loop.
//! - Screen clearing and pauses are cosmetic; no behavior depends on them.

use quicknote_core::{
    default_log_level, init_logging, DeleteOutcome, MemoryNoteRepository, Note, NoteId,
    NoteRepository, NoteService,
};
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

const MENU: &str = "\n--- Notebook Menu ---\n\
                    1. Add a new note\n\
                    2. Show all notes\n\
                    3. Find note by ID\n\
                    4. Find notes by tag\n\
                    5. Delete note by ID\n\
                    6. Delete note by tag\n\
                    7. Exit";

const PAUSE_AFTER_CHANGE: Duration = Duration::from_secs(3);
const PAUSE_SHORT: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Add,
    ShowAll,
    FindById,
    FindByTag,
    DeleteById,
    DeleteByTag,
    Exit,
}

fn main() {
    if let Err(err) = init_logging(default_log_level(), &default_log_dir()) {
        // The shell stays usable without a log file.
        eprintln!("warning: file logging disabled: {err}");
    }
    log::info!("event=shell_start module=cli status=ok");

    let mut service = NoteService::new(MemoryNoteRepository::new());
    let stdin = io::stdin();
    if let Err(err) = run_shell(&mut service, &mut stdin.lock()) {
        log::error!("event=shell_io_error module=cli status=error detail={err}");
        eprintln!("input error: {err}");
        std::process::exit(1);
    }

    log::info!(
        "event=shell_exit module=cli status=ok live={}",
        service.len()
    );
}

fn default_log_dir() -> String {
    std::env::temp_dir()
        .join("quicknote")
        .join("logs")
        .to_string_lossy()
        .into_owned()
}

fn run_shell<R: NoteRepository>(
    service: &mut NoteService<R>,
    input: &mut impl BufRead,
) -> io::Result<()> {
    loop {
        println!("{MENU}");
        let Some(line) = prompt(input, "Enter your choice: ")? else {
            break;
        };

        match parse_choice(&line) {
            Some(MenuChoice::Add) => {
                let Some(body) = prompt(input, "Enter the note: ")? else {
                    break;
                };
                let Some(tag) = prompt(input, "Enter the tag: ")? else {
                    break;
                };
                match service.add_note(&body, &tag) {
                    Ok(note) => {
                        println!("Generated UID for the note: {}", note.uid);
                        println!("Note added successfully!");
                    }
                    Err(err) => println!("Could not add the note: {err}"),
                }
                pause(PAUSE_AFTER_CHANGE);
                clear_screen();
            }
            Some(MenuChoice::ShowAll) => {
                clear_screen();
                print_notes(&service.list_notes(), "The notebook is empty");
            }
            Some(MenuChoice::FindById) => {
                let Some(raw) = prompt(input, "Enter the UID to find: ")? else {
                    break;
                };
                clear_screen();
                match parse_uid(&raw) {
                    Ok(uid) => match service.find_by_id(uid) {
                        Some(note) => println!("{note}"),
                        None => println!("Note not found"),
                    },
                    Err(message) => println!("{message}"),
                }
            }
            Some(MenuChoice::FindByTag) => {
                let Some(tag) = prompt(input, "Enter the tag to find: ")? else {
                    break;
                };
                clear_screen();
                print_notes(&service.find_by_tag(&tag), "No notes with this tag");
            }
            Some(MenuChoice::DeleteById) => {
                let Some(raw) = prompt(input, "Enter the UID to delete: ")? else {
                    break;
                };
                clear_screen();
                match parse_uid(&raw) {
                    Ok(uid) => {
                        let outcome = service.delete_by_id(uid);
                        println!("{}", describe_delete_by_id(uid, outcome));
                        pause(PAUSE_AFTER_CHANGE);
                        clear_screen();
                    }
                    Err(message) => println!("{message}"),
                }
            }
            Some(MenuChoice::DeleteByTag) => {
                let Some(tag) = prompt(input, "Enter the tag to delete: ")? else {
                    break;
                };
                clear_screen();
                let outcome = service.delete_by_tag(&tag);
                println!("{}", describe_delete_by_tag(&tag, outcome));
                pause(PAUSE_AFTER_CHANGE);
                clear_screen();
            }
            Some(MenuChoice::Exit) => {
                clear_screen();
                println!("Exiting the notebook. Goodbye!");
                pause(PAUSE_SHORT);
                clear_screen();
                break;
            }
            None => {
                clear_screen();
                println!("Invalid choice, please try again.");
                pause(PAUSE_SHORT);
                clear_screen();
            }
        }
    }

    Ok(())
}

fn parse_choice(input: &str) -> Option<MenuChoice> {
    match input.trim() {
        "1" => Some(MenuChoice::Add),
        "2" => Some(MenuChoice::ShowAll),
        "3" => Some(MenuChoice::FindById),
        "4" => Some(MenuChoice::FindByTag),
        "5" => Some(MenuChoice::DeleteById),
        "6" => Some(MenuChoice::DeleteByTag),
        "7" => Some(MenuChoice::Exit),
        _ => None,
    }
}

/// Parses a uid prompt answer at the input boundary.
///
/// Malformed integers become a user-visible message; they never reach the
/// core.
fn parse_uid(input: &str) -> Result<NoteId, String> {
    let trimmed = input.trim();
    trimmed
        .parse::<NoteId>()
        .map_err(|_| format!("`{trimmed}` is not a valid UID; expected a whole number"))
}

fn describe_delete_by_id(uid: NoteId, outcome: DeleteOutcome) -> String {
    match outcome {
        DeleteOutcome::Deleted {
            was_first: true, ..
        } => format!("Note with UID {uid} was the first note and deleted"),
        DeleteOutcome::Deleted { .. } => format!("Note with UID {uid} deleted successfully"),
        DeleteOutcome::NotFound => format!("There is no note with UID {uid}"),
    }
}

fn describe_delete_by_tag(tag: &str, outcome: DeleteOutcome) -> String {
    match outcome {
        DeleteOutcome::Deleted { .. } => format!("Note with tag {tag} deleted"),
        DeleteOutcome::NotFound => format!("No note with tag {tag} found"),
    }
}

fn print_notes(notes: &[Note], empty_message: &str) {
    if notes.is_empty() {
        println!("{empty_message}");
        return;
    }
    for note in notes {
        println!("{note}");
    }
}

/// Prints a prompt label and reads one trimmed line.
///
/// `None` means end of input; the caller ends the shell.
fn prompt(input: &mut impl BufRead, label: &str) -> io::Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn clear_screen() {
    // ANSI clear + home; works on every terminal the shell targets.
    print!("\x1b[2J\x1b[1;1H");
    let _ = io::stdout().flush();
}

fn pause(duration: Duration) {
    thread::sleep(duration);
}
