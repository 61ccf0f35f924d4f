use crate::cli::DataArgs;
use crate::infra::load_dashboard;
use clap::Args;
use polywatch::config::{AppConfig, DataConfig};
use polywatch::donors::{DonorPanelContent, DonorPanelState, DonorPanelView, Reveal};
use polywatch::error::AppError;
use polywatch::roster::FilterPredicate;
use polywatch::telemetry;
use polywatch::views::{Dashboard, DisclosurePanel, ProfileView, RosterView};
use serde::Serialize;
use std::io::{self, Write};

#[derive(Args, Debug)]
pub(crate) struct RosterArgs {
    /// Case-insensitive text matched against name, party and electorate
    #[arg(long, default_value = "")]
    pub(crate) text: String,
    /// Exact party name
    #[arg(long, default_value = "")]
    pub(crate) party: String,
    /// Exact chamber (House or Senate)
    #[arg(long, default_value = "")]
    pub(crate) chamber: String,
    /// Write CSV rows instead of a listing
    #[arg(long)]
    pub(crate) csv: bool,
    #[command(flatten)]
    pub(crate) data: DataArgs,
}

#[derive(Args, Debug)]
pub(crate) struct ProfileArgs {
    /// Official id as it appears in the roster feed
    #[arg(long)]
    pub(crate) id: String,
    #[command(flatten)]
    pub(crate) data: DataArgs,
}

#[derive(Args, Debug)]
pub(crate) struct DonorsArgs {
    /// Party whose donors to show
    #[arg(long)]
    pub(crate) party: Option<String>,
    /// Include donors beyond the first five
    #[arg(long)]
    pub(crate) expanded: bool,
    #[command(flatten)]
    pub(crate) data: DataArgs,
}

async fn dashboard_for_cli(data: DataArgs) -> Result<Dashboard, AppError> {
    let mut config = AppConfig::load()?;
    if let Some(data_dir) = data.data_dir {
        config.data = DataConfig::new(data_dir)?;
    }
    telemetry::init(&config.telemetry)?;
    Ok(load_dashboard(&config.data).await?)
}

pub(crate) async fn run_roster(args: RosterArgs) -> Result<(), AppError> {
    let RosterArgs {
        text,
        party,
        chamber,
        csv,
        data,
    } = args;

    let dashboard = dashboard_for_cli(data).await?;
    let view = dashboard.roster_view(&FilterPredicate::new(text, party, chamber));

    if csv {
        write_roster_csv(io::stdout().lock(), &view).map_err(io::Error::from)?;
    } else {
        render_roster(&view);
    }
    Ok(())
}

pub(crate) async fn run_profile(args: ProfileArgs) -> Result<(), AppError> {
    let dashboard = dashboard_for_cli(args.data).await?;
    match dashboard.profile(&args.id) {
        Some(view) => render_profile(&view),
        None => println!("No official with id '{}'", args.id),
    }
    Ok(())
}

pub(crate) async fn run_donors(args: DonorsArgs) -> Result<(), AppError> {
    let dashboard = dashboard_for_cli(args.data).await?;
    let state = DonorPanelState::new(args.party, Reveal::from(args.expanded));
    match dashboard.donor_panel(&state) {
        Some(panel) => render_donor_panel(&panel),
        None => println!("Donor data unavailable"),
    }
    Ok(())
}

#[derive(Serialize)]
struct RosterCsvRow<'a> {
    id: &'a str,
    name: &'a str,
    party: &'a str,
    chamber: &'a str,
    electorate: &'a str,
    featured: bool,
}

const ROSTER_CSV_HEADER: [&str; 6] = ["id", "name", "party", "chamber", "electorate", "featured"];

/// Writes the header even when the view is empty.
pub(crate) fn write_roster_csv<W: Write>(writer: W, view: &RosterView) -> Result<(), csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    writer.write_record(ROSTER_CSV_HEADER)?;
    for card in &view.officials {
        writer.serialize(RosterCsvRow {
            id: &card.id,
            name: &card.name,
            party: &card.party,
            chamber: &card.chamber,
            electorate: &card.electorate,
            featured: card.featured,
        })?;
    }
    writer.flush()?;
    Ok(())
}

fn render_roster(view: &RosterView) {
    for card in &view.officials {
        let featured = if card.featured { " [featured]" } else { "" };
        println!(
            "- {}{} | {} | {} | {}",
            card.name, featured, card.chamber, card.party, card.electorate
        );
        println!("  {}", card.link.href);
    }
    println!("\n{} results", view.count);
}

fn render_profile(view: &ProfileView) {
    let summary = &view.summary;
    println!("{}", summary.name);
    println!("{} • {}", summary.party, summary.electorate);
    println!("Chamber: {}", summary.chamber);
    println!(
        "Investments: {} | Policy signals: {} | Flags: {}",
        view.counts.investments, view.counts.policies, view.counts.flags
    );

    println!("\nInvestments");
    match view.investments.empty_state {
        Some(message) => println!("  {message}"),
        None => {
            for row in &view.investments.rows {
                println!("- {} ({}) {}", row.asset, row.date, row.source);
            }
        }
    }

    println!("\nPolicy events");
    match view.policies.empty_state {
        Some(message) => println!("  {message}"),
        None => {
            for row in &view.policies.rows {
                println!("- {} ({}) {}", row.title, row.date, row.source);
            }
        }
    }

    println!("\nFlags");
    match view.correlations.empty_state {
        Some(message) => println!("  {message}"),
        None => {
            for row in &view.correlations.rows {
                println!("- {} / {}: {}", row.policy, row.asset, row.details);
            }
        }
    }

    match &view.disclosures {
        DisclosurePanel::Hidden => {}
        DisclosurePanel::NotFound { message } => println!("\nDisclosures\n  {message}"),
        DisclosurePanel::Links { links } => {
            println!("\nDisclosures");
            for link in links {
                println!("- {}: {}", link.label, link.url);
            }
        }
    }
}

fn render_donor_panel(panel: &DonorPanelView) {
    println!("{}", panel.meta);
    if let Some(party) = &panel.selected_party {
        println!("Party: {party}");
    }

    match &panel.content {
        DonorPanelContent::NoData { message } => println!("{message}"),
        DonorPanelContent::Populated {
            donors,
            toggle,
            trend,
        } => {
            for donor in donors {
                println!("- {}: {}", donor.name, donor.amount_label);
            }
            if let Some(toggle) = toggle {
                if toggle.hidden_count > 0 {
                    println!("  ({} more; pass --expanded)", toggle.hidden_count);
                }
            }
            if !trend.is_empty() {
                println!("\nYearly totals");
                for (year, amount) in trend.years.iter().zip(&trend.amounts) {
                    println!("- {}: {}", year, polywatch::donors::format_currency(*amount));
                }
            }
        }
    }
}
