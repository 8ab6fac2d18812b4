use chrono::Local;
use clap::Parser;
use serene::application::{
    health, init, ComposeService, ConfigService, EntryEdit, EntryStore, ThemeService,
};
use serene::cli::{format_entry, format_entry_list, Cli, Commands};
use serene::domain::{quote, EntryPatch, NewEntry, Theme};
use serene::error::{DiaryError, Result};
use serene::infrastructure::{
    read_image_data_uri, DiaryRepository, FileKeyValueStore, FileSystemRepository,
};
use std::path::PathBuf;
use std::str::FromStr;

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            log::debug!("Command failed: {:?}", e);
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn open_store() -> Result<EntryStore<FileKeyValueStore>> {
    let repo = FileSystemRepository::discover()?;
    EntryStore::open(repo.storage())
}

fn read_images(paths: &[PathBuf]) -> Result<Vec<String>> {
    paths.iter().map(|p| read_image_data_uri(p)).collect()
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Init { path, system_theme }) => {
            let theme = Theme::from_str(&system_theme).map_err(DiaryError::Config)?;
            init::init(&path, theme)
        }
        Some(Commands::New {
            title,
            content,
            mood,
            font,
            color,
            images,
            tags,
        }) => {
            let draft = NewEntry {
                title,
                content,
                mood,
                font_family: font,
                text_color: color,
                images: Some(read_images(&images)?),
                tags,
            };

            let mut service = ComposeService::new(open_store()?);
            let entry = service.create(draft)?;
            println!("Saved entry {}", entry.id);
            Ok(())
        }
        Some(Commands::List { search, limit }) => {
            let store = open_store()?;
            let mut entries = store.search(search.as_deref().unwrap_or(""));
            if let Some(limit) = limit {
                entries.truncate(limit);
            }
            println!("{}", format_entry_list(&entries).trim_end());
            Ok(())
        }
        Some(Commands::Show { id, render }) => {
            let store = open_store()?;
            let entry = store
                .get(&id)
                .ok_or_else(|| DiaryError::EntryNotFound(id.clone()))?;
            print!("{}", format_entry(entry, render));
            Ok(())
        }
        Some(Commands::Edit {
            id,
            title,
            content,
            mood,
            font,
            color,
            add_images,
            remove_image,
            dictate,
        }) => {
            let edit = EntryEdit {
                patch: EntryPatch {
                    title,
                    content,
                    mood,
                    font_family: font,
                    text_color: color,
                    ..Default::default()
                },
                dictation: dictate,
                add_images: read_images(&add_images)?,
                remove_image,
            };

            let mut service = ComposeService::new(open_store()?);
            service.apply_edit(&id, edit)?;

            println!("Updated entry {}", id);
            Ok(())
        }
        Some(Commands::Delete { id }) => {
            let mut store = open_store()?;
            if store.delete(&id)? {
                println!("Deleted entry {}", id);
                Ok(())
            } else {
                Err(DiaryError::EntryNotFound(id))
            }
        }
        Some(Commands::Theme { value, toggle }) => {
            let repo = FileSystemRepository::discover()?;
            let config = repo.load_config()?;
            let mut service = ThemeService::new(repo.storage(), config.get_system_theme());

            let theme = if toggle {
                service.toggle()?
            } else if let Some(v) = value {
                let theme = Theme::from_str(&v).map_err(DiaryError::Config)?;
                service.set(theme)?;
                theme
            } else {
                service.current()?
            };
            println!("{}", theme);
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("system_theme = {}", config.system_theme);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: serene config [--list | <key> [<value>]]");
                println!("Valid keys: system_theme, created");
                Ok(())
            }
        }
        Some(Commands::Quote) => {
            println!("{}", quote::quote_for(Local::now().date_naive()));
            Ok(())
        }
        Some(Commands::Health) => {
            println!("{}", serde_json::to_string_pretty(&health::check())?);
            Ok(())
        }
        None => {
            println!("serene - Local rich-text diary");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
