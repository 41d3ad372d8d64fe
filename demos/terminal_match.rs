//! Play one match in the terminal.
//!
//! ```text
//! cargo run --example terminal_match            # public catalog
//! cargo run --example terminal_match -- --offline
//! RUST_LOG=portal_draft=debug cargo run --example terminal_match -- --offline
//! ```
//!
//! Drafts the first three roster members and waits out the result delay.

use portal_draft::{
    CatalogSource, DraftConfig, GameSession, HttpCatalog, SessionPhase, SessionSnapshot, Side,
    StaticCatalog,
};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let offline = std::env::args().any(|a| a == "--offline");
    let result = if offline {
        play(DraftConfig::default().with_page_count(1), StaticCatalog::sample()).await
    } else {
        play(DraftConfig::default(), HttpCatalog::from_env()).await
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn play<C: CatalogSource + 'static>(
    config: DraftConfig,
    catalog: C,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut game = GameSession::new(config, catalog)?;
    let mut updates = game.subscribe();

    game.start().await?;
    let roster = game.snapshot().await.roster;

    println!("Roster:");
    for member in roster.iter() {
        println!(
            "  {:>4}  {:<28} {:>3} HP {:>3} ATK {:>3} DEF  total {:>3} {}  [{}]",
            member.id().raw(),
            member.name(),
            member.hp,
            member.attack,
            member.defense,
            member.total,
            "*".repeat(member.rarity().stars() as usize),
            member.ability.name,
        );
    }

    for member in roster.iter().take(3) {
        game.select(member.id()).await;
    }

    while updates.borrow_and_update().phase != SessionPhase::Result {
        updates.changed().await?;
    }

    let snapshot = updates.borrow().clone();
    print_result(&snapshot);
    Ok(())
}

fn print_result(snapshot: &SessionSnapshot) {
    let names = |team: &portal_draft::Team| {
        team.iter().map(|m| m.short_name().to_string()).collect::<Vec<_>>().join(", ")
    };
    println!("\nYour team:  {}", names(&snapshot.player_team));
    println!("Rival team: {}", names(&snapshot.computer_team));

    if let Some(outcome) = snapshot.outcome {
        println!(
            "\n{} + {} bonus + {} luck = {}  vs  {} - {} penalty = {}",
            outcome.player_base,
            outcome.player_bonus,
            outcome.luck,
            outcome.player_total,
            outcome.computer_base,
            outcome.computer_penalty,
            outcome.computer_total,
        );
        match outcome.winner {
            Side::Player => println!("Victory!"),
            Side::Computer => println!("Defeat."),
        }
    }
}
