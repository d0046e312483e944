use clap::{Parser, Subcommand};

use periodic::detail::{DetailSlots, Field, Section};
use periodic::view::{GridView, ResultsPanel};
use periodic::{suggest, Block, Dataset, Viewer};

const COLUMNS: usize = 18;
const ROWS: usize = 10;

#[derive(Debug, Parser)]
#[command(author, version, about = "Periodic table lookups in the terminal")]
struct Args {
    /// Element dataset: a JSON file path or an http(s) URL.
    #[arg(long, global = true, env = "PERIODIC_DATA", default_value = "data/elements.json")]
    data: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Search by name, symbol or category.
    Search { query: Vec<String> },
    /// Up to five completions for a partial name or symbol.
    Suggest { query: String },
    /// Full details of one element.
    Show { symbol: String },
    /// Print the table, optionally filtered by block and highlighted by a search.
    Table {
        #[arg(long)]
        block: Option<Block>,
        #[arg(long)]
        query: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let (dataset, load_error) = Dataset::load_or_empty(&args.data).await;
    let mut viewer = match &load_error {
        Some(message) => Viewer::with_load_error(dataset.clone(), message),
        None => Viewer::new(dataset.clone()),
    };

    match args.command {
        Command::Search { query } => {
            viewer.submit_text(&query.join(" "));
            print_panel(&viewer.snapshot().grid.panel);
        }
        Command::Suggest { query } => {
            for s in suggest(&query, &dataset) {
                println!("{}", s.label);
            }
        }
        Command::Show { symbol } => {
            viewer.select(&symbol);
            print_detail(viewer.modal().slots());
        }
        Command::Table { block, query } => {
            viewer.highlight_block(block);
            if let Some(q) = query {
                viewer.submit_text(&q);
            }
            let grid = viewer.snapshot().grid;
            print_table(&grid);
            print_panel(&grid.panel);
        }
    }
}

fn print_panel(panel: &ResultsPanel) {
    match panel {
        ResultsPanel::Empty => {}
        ResultsPanel::Info(text) | ResultsPanel::NoResults(text) => println!("{text}"),
        ResultsPanel::Error(text) => eprintln!("{text}"),
        ResultsPanel::Cards(cards) => {
            for card in cards {
                println!("{:>4}  {:<3} {}", card.atomic_number, card.symbol, card.name);
            }
        }
    }
}

fn print_table(grid: &GridView) {
    let mut rows = vec![vec!["    ".to_string(); COLUMNS]; ROWS];
    for cell in &grid.cells {
        let Some(slot) = rows
            .get_mut(cell.position.row)
            .and_then(|r| r.get_mut(cell.position.col))
        else {
            continue;
        };
        *slot = if cell.classes.contains(&"highlighted") {
            format!("[{:<2}]", cell.symbol)
        } else if cell.classes.contains(&"dim-element") {
            "  . ".to_string()
        } else {
            format!(" {:<2} ", cell.symbol)
        };
    }
    for row in rows {
        let line = row.concat();
        if !line.trim().is_empty() {
            println!("{}", line.trim_end());
        }
    }
    if let Some(block) = grid.block {
        println!("\nshowing the {block}");
    }
}

fn print_field(label: &str, field: &Field) {
    if field.visible {
        println!("{label}: {}", field.text);
    }
}

fn print_section(title: &str, section: &Section<String>) {
    if section.visible {
        println!("\n{title}:");
        for item in &section.items {
            println!("  - {item}");
        }
    }
}

fn print_detail(slots: &DetailSlots) {
    if !slots.is_populated() {
        println!("{}", slots.name);
        return;
    }
    println!("{} {}", slots.symbol, slots.name);
    if !slots.atomic_number.is_empty() {
        println!("Atomic number: {}", slots.atomic_number);
    }
    if !slots.atomic_mass.is_empty() {
        println!("Atomic mass: {}", slots.atomic_mass);
    }
    println!("Group: {}", slots.group);
    println!("Category: {}", slots.category);
    println!("Discovered by: {}", slots.discovered_by);
    println!("Discovery year: {}", slots.discovery_year);
    print_field("Density", &slots.density);
    print_field("Melting point", &slots.melting_point);
    print_field("Boiling point", &slots.boiling_point);
    print_field("Appearance", &slots.appearance);

    if slots.isotopes.visible {
        println!("\nIsotopes:");
        for iso in &slots.isotopes.items {
            let mut line = format!("  {}", iso.label);
            if let Some(abundance) = &iso.abundance {
                line.push_str(&format!(", abundance {abundance}"));
            }
            if let Some(half_life) = &iso.half_life {
                line.push_str(&format!(", half-life {half_life}"));
            }
            println!("{line}");
        }
    }
    print_section("Key properties", &slots.key_properties);
    print_section("Uses", &slots.uses);
    if slots.compounds.visible {
        println!("\nCompounds:");
        for c in &slots.compounds.items {
            let formula = c.formula.as_deref().map(|f| format!(" ({f})")).unwrap_or_default();
            let properties = c.properties.as_deref().map(|p| format!(": {p}")).unwrap_or_default();
            println!("  - {}{formula}{properties}", c.name);
        }
    }
    print_section("Interesting facts", &slots.interesting_facts);
    print_section("Common uses", &slots.common_uses);
    if let Some(link) = &slots.detail_link {
        println!("\nMore: /{}", link.href);
    }
}
