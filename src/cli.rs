// cli.rs
use anyhow::bail;
use clap::{Parser, Subcommand};
use tracing::info;

use crate::models::match_announcement::MatchAnnouncement;
use crate::models::team::{Category, CreateTeamRequest, Sport, Team};
use crate::pages::announcement_feed::AnnouncementFeed;
use crate::pages::announcement_form::{AnnouncementForm, CategoryRangeType};
use crate::state::AppState;

#[derive(Debug, Parser)]
#[command(name = "sportlink", version, about = "Teams and match announcements from the terminal")]
pub struct Cli {
    /// Overrides API_BASE_URL
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Register a new team
    CreateTeam {
        #[arg(long)]
        sport: Sport,
        #[arg(long)]
        name: String,
        #[arg(long)]
        category: Option<Category>,
        /// Player id, repeatable
        #[arg(long = "player")]
        players: Vec<String>,
    },
    /// Search teams of a sport
    SearchTeams {
        #[arg(long)]
        sport: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long = "category", value_delimiter = ',')]
        categories: Vec<Category>,
    },
    /// Show one team
    Team {
        #[arg(long)]
        sport: String,
        #[arg(long)]
        name: String,
    },
    /// Names of every team of a sport
    TeamNames {
        #[arg(long)]
        sport: Sport,
    },
    /// Publish a match announcement
    CreateAnnouncement {
        #[arg(long)]
        team: String,
        #[arg(long, default_value = "Paddle")]
        sport: Sport,
        /// YYYY-MM-DD
        #[arg(long)]
        day: String,
        /// HH:MM
        #[arg(long)]
        start: String,
        /// HH:MM
        #[arg(long)]
        end: String,
        #[arg(long, default_value = "Argentina")]
        country: String,
        #[arg(long, default_value = "Buenos Aires")]
        province: String,
        #[arg(long)]
        locality: String,
        /// Accept exactly these levels
        #[arg(long, value_delimiter = ',', conflicts_with_all = ["min_level", "max_level"])]
        categories: Vec<Category>,
        #[arg(long)]
        min_level: Option<u8>,
        #[arg(long)]
        max_level: Option<u8>,
    },
    /// Browse the announcement feed
    Announcements {
        #[arg(long = "sport", value_delimiter = ',')]
        sports: Vec<Sport>,
        /// YYYY-MM-DD, defaults to today
        #[arg(long)]
        from: Option<String>,
        #[arg(long)]
        to: Option<String>,
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Show the configured user
    Whoami,
}

pub fn render_team(team: &Team) -> String {
    format!(
        "{} [{}] {} | W{} L{} D{} | {} members",
        team.name,
        team.sport,
        team.category.label(),
        team.stats.wins,
        team.stats.losses,
        team.stats.draws,
        team.members.len()
    )
}

pub fn render_announcement(announcement: &MatchAnnouncement) -> String {
    format!(
        "{} ({}) {} {}-{} @ {} | {} | {}",
        announcement.team_name,
        announcement.sport,
        announcement.day.format("%Y-%m-%d"),
        announcement.time_slot.start_time.format("%H:%M"),
        announcement.time_slot.end_time.format("%H:%M"),
        announcement.location,
        announcement.admitted_categories.describe(),
        announcement.status.label()
    )
}

fn range_form(categories: &[Category], min_level: Option<u8>, max_level: Option<u8>, form: &mut AnnouncementForm) {
    match (min_level, max_level) {
        (Some(min), Some(max)) => {
            form.set_range_type(CategoryRangeType::Between);
            form.min_level = min;
            form.max_level = max;
        }
        (Some(min), None) => {
            form.set_range_type(CategoryRangeType::GreaterThan);
            form.min_level = min;
        }
        (None, Some(max)) => {
            form.set_range_type(CategoryRangeType::LessThan);
            form.max_level = max;
        }
        (None, None) => {
            for category in categories {
                form.toggle_category(*category);
            }
        }
    }
}

fn print_feed(feed: &AnnouncementFeed) {
    if feed.announcements().is_empty() {
        println!("No hay partidos disponibles");
        return;
    }
    for announcement in feed.announcements() {
        println!("{}", render_announcement(announcement));
    }
    if feed.show_controls() {
        let pages: Vec<String> = feed
            .visible_pages()
            .map(|page| {
                if page == feed.current_page() {
                    format!("[{}]", page)
                } else {
                    page.to_string()
                }
            })
            .collect();
        let next = if feed.show_next() { " >" } else { "" };
        println!("{}{}", pages.join(" "), next);
    }
    let pagination = feed.pagination();
    println!("page {} of {} ({} total)", pagination.number, pagination.out_of, pagination.total);
}

pub async fn run(command: Command, state: &AppState) -> anyhow::Result<()> {
    match command {
        Command::CreateTeam {
            sport,
            name,
            category,
            players,
        } => {
            let mut request = CreateTeamRequest::new(sport, name);
            if let Some(category) = category {
                request = request.with_category(category);
            }
            if !players.is_empty() {
                request = request.with_players(players);
            }
            let result = state.teams.create_team.execute(&request).await;
            match result.team {
                Some(team) if result.success => println!("Created {}", render_team(&team)),
                _ => bail!(result.error.unwrap_or_default()),
            }
        }
        Command::SearchTeams {
            sport,
            name,
            categories,
        } => {
            let result = state
                .teams
                .search_team
                .execute(&sport, name.as_deref(), &categories)
                .await;
            if !result.success {
                bail!(result.error.unwrap_or_default());
            }
            if result.teams.is_empty() {
                println!("No se encontraron equipos");
            }
            for team in &result.teams {
                println!("{}", render_team(team));
            }
        }
        Command::Team { sport, name } => {
            let result = state.teams.retrieve_team.execute(&sport, &name).await;
            match result.team {
                Some(team) if result.success => {
                    println!("{}", render_team(&team));
                    for player in &team.members {
                        println!("  {} {}", player.id, player.category.label());
                    }
                }
                _ => bail!(result.error.unwrap_or_default()),
            }
        }
        Command::TeamNames { sport } => {
            for name in state.teams.list_team_names.execute(sport).await {
                println!("{}", name);
            }
        }
        Command::CreateAnnouncement {
            team,
            sport,
            day,
            start,
            end,
            country,
            province,
            locality,
            categories,
            min_level,
            max_level,
        } => {
            let mut form = AnnouncementForm::new();
            form.sport = sport;
            form.team_name = team;
            form.day = day;
            form.start_time = start;
            form.end_time = end;
            form.country = country;
            form.province = province;
            form.locality = locality;
            range_form(&categories, min_level, max_level, &mut form);

            let result = form.submit(&state.announcements.create).await;
            match result.announcement {
                Some(announcement) if result.success => {
                    println!("Partido publicado: {}", render_announcement(&announcement))
                }
                _ => bail!(result.error.unwrap_or_default()),
            }
        }
        Command::Announcements {
            sports,
            from,
            to,
            page,
        } => {
            let mut feed = AnnouncementFeed::new();
            feed.set_sports(sports);
            feed.set_date_range(from, to);
            feed.load(&state.announcements.find).await;

            if page > 1 && feed.error().is_none() && feed.go_to_page(page) {
                info!("Jumping to page {}", feed.current_page());
                feed.load(&state.announcements.find).await;
            }
            if let Some(error) = feed.error() {
                bail!(error.to_string());
            }
            print_feed(&feed);
        }
        Command::Whoami => {
            let user = state.display_user();
            println!("{} ({}) <{}>", user.name, user.initials(), user.email);
            println!("{}", user.avatar_url);
        }
    }
    Ok(())
}
