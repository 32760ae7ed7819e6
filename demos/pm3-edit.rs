use clap::Parser;
use pm3save::{Installation, SaveSlot, SlotNumber};
use std::path::PathBuf;

#[derive(Debug, Parser)]
struct Options {
    /// Path to the game installation
    game_dir: PathBuf,

    /// Save slot, 1 to 8
    #[arg(short = 'g', long = "game")]
    game: u8,

    /// List players out of contract
    #[arg(long)]
    free: bool,

    /// Audit roster references
    #[arg(long)]
    check: bool,

    /// List the first manager's squad
    #[arg(long)]
    roster: bool,

    /// Move the first manager to this club
    #[arg(long, value_name = "IDX")]
    team: Option<i32>,

    /// Set every player's aggression to the same value
    #[arg(long)]
    level_aggression: bool,

    /// Max out the first manager's staff and squad
    #[arg(long)]
    soup_up: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let options = Options::parse();

    let install = Installation::open(&options.game_dir)?;
    let saves_dir = install.saves_dir();
    let number = SlotNumber::new(options.game)?;
    let mut slot = SaveSlot::load(&saves_dir, number)?;

    println!(
        "Slot {}: {} edition, year {}, week {}",
        number,
        install.edition(),
        slot.world.year,
        slot.world.week()
    );

    if options.free {
        println!();
        println!("Free players:");
        for entry in slot.find_free_players()? {
            println!(
                "  [{:4}] {:12} {:?} {:2} {:16}",
                entry.player_idx,
                entry.player.name.to_string_lossy(),
                entry.player.kind(),
                entry.player.rating(),
                entry.club.name.to_string_lossy()
            );
        }
    }

    if options.roster {
        println!();
        println!("Squad:");
        for entry in slot.roster(0)? {
            println!(
                "  {:2} [{:4}] {:12} {:?} {:2} age {}",
                entry.slot,
                entry.player_idx,
                entry.player.name.to_string_lossy(),
                entry.player.kind(),
                entry.player.rating(),
                entry.player.age
            );
        }
    }

    if options.check {
        let report = slot.check_consistency();
        println!();
        for duplicate in &report.duplicates {
            println!(
                "Duplicate: player {} plays for clubs {} and {}",
                duplicate.player, duplicate.first_club, duplicate.second_club
            );
        }
        for player in &report.unassigned {
            println!("Unassigned: player {player}");
        }
        for dangling in &report.dangling {
            println!(
                "Dangling: club {} slot {} holds {}",
                dangling.club, dangling.slot, dangling.value
            );
        }
        if report.is_clean() {
            println!("No roster problems found");
        }
    }

    let mut dirty = false;

    if options.level_aggression {
        slot.level_aggression();
        dirty = true;
    }

    if options.soup_up {
        slot.soup_up(0)?;
        dirty = true;
    }

    if let Some(team) = options.team {
        let mut saves = install.load_saves_dir()?;
        let prefs = install.load_prefs()?;

        slot.change_club(0, team)?;
        slot.store(&saves_dir, number)?;

        saves.update_from(number, &slot.world);
        install.store_metadata(&saves, &prefs)?;
        dirty = false;
    }

    if dirty {
        slot.store(&saves_dir, number)?;
    }

    Ok(())
}
