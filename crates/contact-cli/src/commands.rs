//! Command implementations for the contact directory.
//!
//! `run` handles process concerns (settings, logging, seed file);
//! `execute` applies one command to a store and writes the result.

use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::{info, warn};

use contact_store::{Contact, ContactId, ContactStore};
use contact_types::Settings;

use crate::cli::{Cli, Commands, SearchCommands, UpdateField};
use crate::seed::{read_seed, write_seed};

/// Run the CLI.
///
/// 1. Load configuration (defaults -> file -> env -> CLI)
/// 2. Initialize logging
/// 3. Load the seed file into a fresh store
/// 4. Execute the command, writing back on request
pub fn run(cli: Cli) -> Result<()> {
    let mut settings =
        Settings::load(cli.config.as_deref()).context("Failed to load configuration")?;

    if let Some(log_level) = cli.log_level {
        settings.log_level = log_level;
    }
    if let Some(seed) = cli.seed {
        settings.seed_path = seed;
    }
    if cli.json {
        settings.json_output = true;
    }

    init_logging(&settings.log_level)?;

    let seed_path = settings.expanded_seed_path();
    let (mut store, report) = ContactStore::from_contacts(read_seed(&seed_path)?);
    for (id, err) in &report.rejected {
        warn!("Skipped seed contact {}: {}", id, err);
    }
    info!(
        "Loaded {} contacts ({} skipped)",
        report.accepted,
        report.rejected.len()
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mutated = execute(&mut store, cli.command, settings.json_output, &mut out)?;

    if mutated && cli.write_back {
        write_seed(&seed_path, &store.get_all())?;
    }
    Ok(())
}

/// Logs go to stderr so command output stays machine-readable.
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")
}

/// Apply `command` to `store`, writing results to `out`.
///
/// Returns true when the store was changed. A rejected mutation is an
/// error carrying the store's reason.
pub fn execute<W: Write>(
    store: &mut ContactStore,
    command: Commands,
    json: bool,
    out: &mut W,
) -> Result<bool> {
    match command {
        Commands::List => {
            print_contacts(out, &store.get_all(), json)?;
            Ok(false)
        }
        Commands::Count => {
            writeln!(out, "{}", store.count())?;
            Ok(false)
        }
        Commands::Stats => {
            let stats = store.index_stats();
            writeln!(out, "Contacts:         {}", stats.contacts)?;
            writeln!(out, "First-name keys:  {}", stats.first_name_keys)?;
            writeln!(out, "Last-name keys:   {}", stats.last_name_keys)?;
            writeln!(out, "Phone keys:       {}", stats.phone_keys)?;
            Ok(false)
        }
        Commands::Get { id } => {
            let contact = store
                .get(&id)
                .with_context(|| format!("Contact not found: {}", id))?;
            print_contacts(out, &[contact], json)?;
            Ok(false)
        }
        Commands::Search { by } => {
            let results: Vec<&Contact> = match by {
                SearchCommands::First { name } => store.search_by_first_name(&name),
                SearchCommands::Last { name } => store.search_by_last_name(&name),
                SearchCommands::Phone { number } => {
                    store.search_by_phone_number(&number).into_iter().collect()
                }
                SearchCommands::Address { term } => store.search_by_address(&term),
                SearchCommands::Partial { term } => {
                    store.search_by_name_partial(&term).into_iter().collect()
                }
            };
            print_contacts(out, &results, json)?;
            Ok(false)
        }
        Commands::Add {
            first_name,
            last_name,
            id,
            phone,
            address,
        } => {
            let id = id.map(ContactId::from).unwrap_or_else(ContactId::generate);
            let mut contact = Contact::new(id.clone(), first_name, last_name);
            if let Some(phone) = phone {
                contact = contact.with_phone_number(phone);
            }
            if let Some(address) = address {
                contact = contact.with_address(address);
            }
            store
                .add(contact)
                .with_context(|| format!("Failed to add contact {}", id))?;
            writeln!(out, "Added contact {}", id)?;
            Ok(true)
        }
        Commands::Delete { id } => {
            store
                .delete(&id)
                .with_context(|| format!("Failed to delete contact {}", id))?;
            writeln!(out, "Deleted contact {}", id)?;
            Ok(true)
        }
        Commands::Update { id, field, value } => {
            let result = match field {
                UpdateField::First => store.update_first_name(&id, &value),
                UpdateField::Last => store.update_last_name(&id, &value),
                UpdateField::Phone => store.update_phone_number(&id, &value),
                UpdateField::Address => store.update_address(&id, &value),
            };
            result.with_context(|| format!("Failed to update {:?} of contact {}", field, id))?;
            writeln!(out, "Updated contact {}", id)?;
            Ok(true)
        }
    }
}

fn print_contacts<W: Write>(out: &mut W, contacts: &[&Contact], json: bool) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, contacts)?;
        writeln!(out)?;
        return Ok(());
    }
    for contact in contacts {
        writeln!(out, "{}", contact)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contact_store::StoreError;
    use pretty_assertions::assert_eq;

    fn seeded_store() -> ContactStore {
        let (store, report) = ContactStore::from_contacts(vec![
            Contact::new("1111111111", "Kevin", "Caverly")
                .with_phone_number("1234567890")
                .with_address("123 Main St"),
            Contact::new("2222222222", "John", "Doe").with_phone_number("0987654321"),
        ]);
        assert!(report.rejected.is_empty());
        store
    }

    fn run_command(
        store: &mut ContactStore,
        command: Commands,
        json: bool,
    ) -> (Result<bool>, String) {
        let mut out = Vec::new();
        let result = execute(store, command, json, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_count() {
        let mut store = seeded_store();
        let (result, output) = run_command(&mut store, Commands::Count, false);
        assert!(!result.unwrap());
        assert_eq!(output, "2\n");
    }

    #[test]
    fn test_get_prints_contact() {
        let mut store = seeded_store();
        let (result, output) = run_command(
            &mut store,
            Commands::Get {
                id: "1111111111".to_string(),
            },
            false,
        );
        result.unwrap();
        assert_eq!(output, "1111111111 | Kevin Caverly | 1234567890 | 123 Main St\n");
    }

    #[test]
    fn test_get_missing_contact_fails() {
        let mut store = seeded_store();
        let (result, _) = run_command(&mut store, Commands::Get { id: "404".to_string() }, false);
        assert!(result.unwrap_err().to_string().contains("404"));
    }

    #[test]
    fn test_search_phone_as_json() {
        let mut store = seeded_store();
        let (result, output) = run_command(
            &mut store,
            Commands::Search {
                by: SearchCommands::Phone {
                    number: "(098) 765-4321".to_string(),
                },
            },
            true,
        );
        result.unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.as_array().map(Vec::len), Some(1));
        assert_eq!(parsed[0]["contact_id"], "2222222222");
    }

    #[test]
    fn test_add_generates_id() {
        let mut store = seeded_store();
        let (result, output) = run_command(
            &mut store,
            Commands::Add {
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                id: None,
                phone: None,
                address: Some("12 St James's Sq".to_string()),
            },
            false,
        );
        assert!(result.unwrap());
        assert!(output.starts_with("Added contact "));
        assert_eq!(store.count(), 3);
        assert_eq!(store.search_by_last_name("lovelace").len(), 1);
    }

    #[test]
    fn test_add_duplicate_phone_reports_reason() {
        let mut store = seeded_store();
        let (result, output) = run_command(
            &mut store,
            Commands::Add {
                first_name: "Jane".to_string(),
                last_name: "Roe".to_string(),
                id: Some("3".to_string()),
                phone: Some("123.456.7890".to_string()),
                address: None,
            },
            false,
        );
        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<StoreError>(),
            Some(StoreError::DuplicatePhone(_))
        ));
        assert!(output.is_empty());
        assert_eq!(store.count(), 2);
    }

    #[test]
    fn test_update_and_delete() {
        let mut store = seeded_store();
        let (result, _) = run_command(
            &mut store,
            Commands::Update {
                id: "2222222222".to_string(),
                field: UpdateField::First,
                value: "Kevin".to_string(),
            },
            false,
        );
        assert!(result.unwrap());
        assert_eq!(store.search_by_first_name("kevin").len(), 2);

        let (result, output) = run_command(
            &mut store,
            Commands::Delete {
                id: "1111111111".to_string(),
            },
            false,
        );
        assert!(result.unwrap());
        assert_eq!(output, "Deleted contact 1111111111\n");
        assert_eq!(store.search_by_first_name("kevin").len(), 1);
    }

    #[test]
    fn test_update_missing_contact_fails() {
        let mut store = seeded_store();
        let (result, _) = run_command(
            &mut store,
            Commands::Update {
                id: "404".to_string(),
                field: UpdateField::Address,
                value: "1 Elm St".to_string(),
            },
            false,
        );
        let err = result.unwrap_err();
        assert!(err
            .downcast_ref::<StoreError>()
            .is_some_and(StoreError::is_not_found));
    }
}
