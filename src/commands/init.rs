use anyhow::Result;
use clap::Args;
use colored::Colorize;

use crate::engine;
use crate::models::{Domain, SkillLevel, UserProfile};
use crate::storage::{self, KEY_ROADMAP, KEY_USER_DATA};

#[derive(Args)]
pub struct InitCommand {
    /// Your name
    #[arg(short, long)]
    name: String,

    /// Study domain (Game Development, AI, Drawing, Singing, Coding).
    /// Anything else falls back to Coding content.
    #[arg(short, long)]
    domain: String,

    /// Daily free hours (1-8)
    #[arg(long, default_value = "2")]
    hours: u8,

    /// Roadmap duration in months (1, 2, 3, 4, 6 or 12)
    #[arg(long, default_value = "3")]
    months: u8,

    /// Skill level (beginner, intermediate, advanced)
    #[arg(short, long, default_value = "beginner")]
    level: SkillLevelArg,

    /// Avatar id
    #[arg(long, default_value = "avatar-1")]
    avatar: String,

    /// Overwrite an existing profile and roadmap
    #[arg(short, long)]
    force: bool,
}

// clap needs a FromStr that errors on bad input, unlike the lossy
// domain parse
#[derive(Clone, Copy)]
struct SkillLevelArg(SkillLevel);

impl std::str::FromStr for SkillLevelArg {
    type Err = crate::models::ParseSkillLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(SkillLevelArg)
    }
}

impl InitCommand {
    pub async fn execute(self) -> Result<()> {
        let store = super::open_store()?;

        let existing: Option<UserProfile> = storage::get_record(&store, KEY_USER_DATA)?;
        if existing.is_some() && !self.force {
            anyhow::bail!("A profile already exists. Use --force to overwrite it, or `skillplan reset` to start over.");
        }

        let domain = Domain::parse_lossy(&self.domain);
        let profile = UserProfile::new(
            self.name,
            domain,
            self.hours,
            self.months,
            self.level.0,
            self.avatar,
        )?;

        let roadmap = engine::generate(
            profile.domain,
            profile.daily_hours,
            profile.duration_months,
            profile.skill_level,
        );

        storage::put_record(&store, KEY_USER_DATA, &profile)?;
        storage::put_record(&store, KEY_ROADMAP, &roadmap)?;

        println!(
            "Welcome, {}! Generated a {}-month {} roadmap ({}).",
            profile.name.bold(),
            profile.duration_months,
            profile.domain.to_string().cyan(),
            profile.skill_level
        );
        println!(
            "{} tasks across {} weeks. Run {} to see your plan.",
            roadmap.total_tasks,
            roadmap.duration_months as u32 * 4,
            "skillplan roadmap".green()
        );

        Ok(())
    }
}
