//! Console front-end for the user directory.
//!
//! # Responsibility
//! - Collect raw text input, invoke the service, render the results.
//! - Surface boolean failures from the core as user-facing messages.
//!
//! All validation and storage rules live in `usermgr_core`; this binary is
//! a replaceable view and keeps no state of its own.

use log::info;
use std::io::{self, BufRead, Write};
use usermgr_core::{core_version, default_log_level, init_logging, User, UserService};
use usermgr_core::{InMemoryUserRepository, UserId};

fn main() {
    let log_dir = std::env::temp_dir().join("usermgr-logs");
    if let Some(dir) = log_dir.to_str() {
        if let Err(err) = init_logging(default_log_level(), dir) {
            eprintln!("warning: logging disabled: {err}");
        }
    }
    info!("event=cli_start module=cli status=ok version={}", core_version());

    let mut service = UserService::new(InMemoryUserRepository::new());
    let stdin = io::stdin();

    println!("usermgr {} - type `help` for commands", core_version());
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        let input = line.trim();
        let (command, rest) = match input.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (input, ""),
        };

        match command {
            "" => {}
            "help" => print_help(),
            "list" => render_users(&service.list_all_users()),
            "add" => {
                let (last, first, email, role) = prompt_fields(&stdin);
                if service.add_user(&last, &first, &email, &role) {
                    println!("user added");
                } else {
                    println!("add failed: check that every field is filled and the email is valid and unused");
                }
            }
            "update" => match parse_id(rest) {
                Some(id) => {
                    let (last, first, email, role) = prompt_fields(&stdin);
                    if service.update_user(id, &last, &first, &email, &role) {
                        println!("user {id} updated");
                    } else {
                        println!("update failed: unknown id or invalid fields");
                    }
                }
                None => println!("usage: update <id>"),
            },
            "delete" => match parse_id(rest) {
                Some(id) => {
                    if service.delete_user(id) {
                        println!("user {id} deleted");
                    } else {
                        println!("no user with id {id}");
                    }
                }
                None => println!("usage: delete <id>"),
            },
            "find" => match parse_id(rest) {
                Some(id) => match service.find_user_by_id(id) {
                    Some(user) => println!("{user}"),
                    None => println!("no user with id {id}"),
                },
                None => println!("usage: find <id>"),
            },
            "search" => render_users(&service.search_users_by_name(rest)),
            "quit" | "exit" => break,
            other => println!("unknown command `{other}`; type `help`"),
        }
    }

    info!("event=cli_stop module=cli status=ok");
}

fn print_help() {
    println!("commands:");
    println!("  list            show all users");
    println!("  add             add a user (prompts for each field)");
    println!("  update <id>     replace a user's fields (prompts for each field)");
    println!("  delete <id>     remove a user");
    println!("  find <id>       show one user");
    println!("  search <name>   search by last name, case-insensitive");
    println!("  quit            exit");
    println!("suggested roles: Utilisateur, Admin (any non-empty text is accepted)");
}

fn prompt_fields(stdin: &io::Stdin) -> (String, String, String, String) {
    (
        prompt(stdin, "last name"),
        prompt(stdin, "first name"),
        prompt(stdin, "email"),
        prompt(stdin, "role"),
    )
}

fn prompt(stdin: &io::Stdin, label: &str) -> String {
    print!("{label}: ");
    let _ = io::stdout().flush();
    let mut line = String::new();
    let _ = stdin.lock().read_line(&mut line);
    line.trim().to_string()
}

fn parse_id(value: &str) -> Option<UserId> {
    value.parse().ok()
}

fn render_users(users: &[User]) {
    if users.is_empty() {
        println!("no users");
        return;
    }
    for user in users {
        println!("{user}");
    }
    println!("({} total)", users.len());
}
