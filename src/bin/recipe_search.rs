use clap::Parser;
use recipe_finder::logging;
use recipe_finder::services::{RecipeService, DEFAULT_GATEWAY_URL};
use recipe_finder::ui::{render, render_details, RecipeSearch};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Parser)]
#[command(
    name = "recipe-search",
    version,
    about = "Find recipes for the ingredients you have, through the Recipe Finder gateway"
)]
struct Cli {
    /// Gateway API base URL
    #[arg(long, default_value = DEFAULT_GATEWAY_URL, value_name = "URL")]
    gateway: String,

    /// Show details for one recipe id
    #[arg(long, value_name = "ID")]
    details: Option<i64>,

    /// Ingredients for a one-shot search, e.g. `tomato, basil`. Without them
    /// (and without --details) an interactive prompt starts.
    ingredients: Vec<String>,
}

enum Command {
    Search(String),
    Details(i64),
    Quit,
    Invalid(String),
}

fn parse_command(line: &str) -> Command {
    let line = line.trim();
    match line {
        "quit" | "exit" => Command::Quit,
        _ => match line.strip_prefix("details") {
            Some(rest) if rest.is_empty() || rest.starts_with(char::is_whitespace) => {
                match rest.trim().parse() {
                    Ok(id) => Command::Details(id),
                    Err(_) => Command::Invalid(format!("Recipe id must be a number: {:?}", rest.trim())),
                }
            }
            _ => Command::Search(line.to_string()),
        },
    }
}

async fn show_details(search: &mut RecipeSearch<RecipeService>, id: i64) {
    match search.view_recipe_details(id).await {
        Some(details) => println!("{}", render_details(&details)),
        None => println!("{}", render(search)),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    logging::init_cli();

    let cli = Cli::parse();
    let mut search = RecipeSearch::new(RecipeService::new(cli.gateway));

    let one_shot = !cli.ingredients.is_empty() || cli.details.is_some();

    if !cli.ingredients.is_empty() {
        search.set_ingredients(cli.ingredients.join(" "));
        search.search_recipes().await;
        println!("{}", render(&search));
    }
    if let Some(id) = cli.details {
        show_details(&mut search, id).await;
    }
    if one_shot {
        return Ok(());
    }

    println!("{}", render(&search));
    println!("Type ingredients to search, `details <id>` for a recipe, `quit` to leave.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match parse_command(&line) {
            Command::Quit => break,
            Command::Details(id) => show_details(&mut search, id).await,
            Command::Invalid(message) => println!("{}", message),
            Command::Search(text) => {
                search.set_ingredients(text);
                search.search_recipes().await;
                println!("{}", render(&search));
            }
        }
    }

    Ok(())
}
