use crate::prelude::{eprintln, println, *};
use blogapi_core::model::{Author, Blog};
use blogapi_core::store::EntityStore;
use colored::Colorize;
use serde::Serialize;

#[derive(Debug, clap::Parser)]
#[command(name = "seed")]
#[command(about = "Print the dataset a fresh server starts with")]
pub struct App {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
pub struct SeedOutput {
    pub authors: Vec<Author>,
    pub blogs: Vec<Blog>,
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let store = EntityStore::seeded();
    let output = SeedOutput {
        authors: store.all_authors().to_vec(),
        blogs: store.all_blogs().to_vec(),
    };

    if global.verbose {
        eprintln!(
            "Seed contains {} authors and {} blogs",
            output.authors.len(),
            output.blogs.len()
        );
    }

    if app.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let mut table = new_table();
    table.add_row(prettytable::row![
        "ID".bold().cyan(),
        "Name".bold().cyan(),
        "Email".bold().cyan()
    ]);
    for author in &output.authors {
        table.add_row(prettytable::row![
            author.id.to_string().green(),
            author.name.bright_white(),
            author.email.bright_black()
        ]);
    }
    table.printstd();
    println!();

    let mut table = new_table();
    table.add_row(prettytable::row![
        "ID".bold().cyan(),
        "Title".bold().cyan(),
        "Author".bold().cyan(),
        "Likes".bold().cyan(),
        "Dislikes".bold().cyan()
    ]);
    for blog in &output.blogs {
        table.add_row(prettytable::row![
            blog.id.to_string().green(),
            blog.title.bright_white(),
            blog.author.name.bright_yellow(),
            blog.likes,
            blog.dislikes
        ]);
    }
    table.printstd();

    Ok(())
}
