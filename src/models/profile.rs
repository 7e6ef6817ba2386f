use serde::{Deserialize, Serialize};

/// Study domain chosen at onboarding
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Domain {
    GameDevelopment,
    Ai,
    Drawing,
    Singing,
    Coding,
}

impl Domain {
    pub const ALL: [Domain; 5] = [
        Domain::GameDevelopment,
        Domain::Ai,
        Domain::Drawing,
        Domain::Singing,
        Domain::Coding,
    ];

    /// Parse a domain name, falling back to `Coding` for anything
    /// unrecognized. The fallback is applied here, at the boundary, so
    /// every catalog lookup downstream sees the same domain.
    pub fn parse_lossy(s: &str) -> Self {
        s.parse().unwrap_or(Domain::Coding)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown domain: {0}")]
pub struct ParseDomainError(String);

impl std::str::FromStr for Domain {
    type Err = ParseDomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "game development" | "gamedev" => Ok(Domain::GameDevelopment),
            "ai" => Ok(Domain::Ai),
            "drawing" => Ok(Domain::Drawing),
            "singing" => Ok(Domain::Singing),
            "coding" => Ok(Domain::Coding),
            _ => Err(ParseDomainError(s.to_string())),
        }
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Domain::GameDevelopment => write!(f, "Game Development"),
            Domain::Ai => write!(f, "AI"),
            Domain::Drawing => write!(f, "Drawing"),
            Domain::Singing => write!(f, "Singing"),
            Domain::Coding => write!(f, "Coding"),
        }
    }
}

/// Self-reported experience level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown skill level: {0}")]
pub struct ParseSkillLevelError(String);

impl std::str::FromStr for SkillLevel {
    type Err = ParseSkillLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(SkillLevel::Beginner),
            "intermediate" => Ok(SkillLevel::Intermediate),
            "advanced" => Ok(SkillLevel::Advanced),
            _ => Err(ParseSkillLevelError(s.to_string())),
        }
    }
}

impl std::fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkillLevel::Beginner => write!(f, "Beginner"),
            SkillLevel::Intermediate => write!(f, "Intermediate"),
            SkillLevel::Advanced => write!(f, "Advanced"),
        }
    }
}

/// Onboarding profile. Immutable once a roadmap has been generated;
/// replaced wholesale on reset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub domain: Domain,
    pub daily_hours: u8,
    pub duration_months: u8,
    pub skill_level: SkillLevel,
    pub avatar_id: String,
}

/// Allowed roadmap durations, in months
pub const VALID_DURATIONS: [u8; 6] = [1, 2, 3, 4, 6, 12];

impl UserProfile {
    pub fn new(
        name: String,
        domain: Domain,
        daily_hours: u8,
        duration_months: u8,
        skill_level: SkillLevel,
        avatar_id: String,
    ) -> anyhow::Result<Self> {
        if !(1..=8).contains(&daily_hours) {
            anyhow::bail!("daily hours must be between 1 and 8, got {}", daily_hours);
        }
        if !VALID_DURATIONS.contains(&duration_months) {
            anyhow::bail!(
                "duration must be one of {:?} months, got {}",
                VALID_DURATIONS,
                duration_months
            );
        }
        Ok(Self {
            name,
            domain,
            daily_hours,
            duration_months,
            skill_level,
            avatar_id,
        })
    }
}
