use anyhow::Result;
use fitmarket::flows::invite::{InviteFlow, InviteState};
use fitmarket::gateway::{MarketplaceHost, ProgramCache};
use fitmarket::program::ProgramSummary;
use fitmarket::storage::SqliteProgramCache;

/// Prints host-callback events as they arrive.
struct CliHost;

impl MarketplaceHost for CliHost {
    fn on_joined(&mut self, program: &ProgramSummary) {
        println!("\nJoined \"{}\".", program.name);
        if program.program_data.is_some() {
            println!("A local copy was saved for offline use.");
        }
    }
}

pub fn run(config_path: Option<&str>, token: &str, join: bool) -> Result<()> {
    let (settings, gateway) = super::setup(config_path)?;

    // The cache is best-effort: a broken local DB must not block joining.
    let cache = match SqliteProgramCache::open(&settings.db_path()) {
        Ok(c) => Some(c),
        Err(e) => {
            tracing::warn!(error = %e, "Local cache unavailable");
            None
        }
    };

    let mut flow = InviteFlow::new(&gateway, cache.as_ref().map(|c| c as &dyn ProgramCache));
    flow.resolve(token);

    match flow.state() {
        InviteState::InvalidInvite { message } => {
            println!("Invite could not be used: {}", message);
            return Ok(());
        }
        InviteState::ProgramReady { program, .. } => print_card(program),
        _ => {}
    }

    if join {
        let mut host = CliHost;
        flow.join(&mut host);
        if let InviteState::ProgramReady {
            join_error: Some(msg),
            ..
        } = flow.state()
        {
            println!("\nJoin failed: {}", msg);
            println!("Run the command again to retry.");
        }
    } else if matches!(flow.state(), InviteState::ProgramReady { .. }) {
        println!("\nRe-run with --join to join this program.");
    }

    Ok(())
}

fn print_card(program: &ProgramSummary) {
    println!("{} {}", program.author.emoji, program.name);
    if !program.description.is_empty() {
        println!("{}", program.description);
    }
    println!(
        "{} weeks x {} days/week — by {}",
        program.weeks, program.days_per_week, program.author.name
    );
    let rating = program
        .display_rating()
        .map(|r| format!("{:.1} ({} ratings)", r, program.rating_count))
        .unwrap_or_else(|| "unrated".to_string());
    println!(
        "{} subscribers — {} — {}",
        program.subscriber_count,
        rating,
        program.visibility.as_str()
    );
}
