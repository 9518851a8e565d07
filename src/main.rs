use std::{io::Result, path::Path};

use crate::core::data::{built_in_catalog, load_from_storage, write_local_db};
use crate::core::settings::Settings;

mod core;
mod pages;
mod render;
mod server;
mod types;

#[actix_web::main]
async fn main() -> Result<()> {
    let settings = Settings::load();

    if let Err(error) = init_local_files(&settings) {
        eprintln!("Could not initialize local files: {}", error);
    }

    // The catalog is loaded once; it is read-only for the life of the
    // process.
    let projects = match load_from_storage(&settings.projects_file()) {
        Ok(projects) => projects,
        Err(_) => {
            println!("Serving the built-in catalog.");
            built_in_catalog()
        }
    };

    server::start_server(
        settings.bind_addr(),
        projects,
        settings.assets_path.value.clone(),
    )
    .await
}

/// Seeds `data/projects.json` from the built-in catalog on first
/// launch so the served content can be edited without a rebuild.
fn init_local_files(settings: &Settings) -> Result<()> {
    std::fs::create_dir_all(&settings.local_projects_path.value)?;
    let projects_file = settings.projects_file();
    if !Path::new(&projects_file).exists() {
        println!("Seeding {} from the built-in catalog.", projects_file);
        write_local_db(&projects_file, built_in_catalog())?;
    }
    Ok(())
}
