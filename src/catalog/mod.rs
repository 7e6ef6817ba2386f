//! Static content catalog: domain- and skill-level-keyed tables
//! consulted during roadmap generation. Pure data, no state.
//!
//! Every lookup clamps its index instead of failing, so generation is
//! total for any valid profile.

use crate::models::{Domain, SkillLevel};

/// Week titles cycle through this fixed list
const WEEK_TITLES: [&str; 4] = [
    "Foundation Week",
    "Practice Week",
    "Building Week",
    "Mastery Week",
];

pub fn week_title(week_index: u32) -> &'static str {
    WEEK_TITLES[((week_index.max(1) - 1) % 4) as usize]
}

/// Month titles per domain and skill level, in month order.
/// Indexes past the end reuse the last entry.
pub fn month_title(domain: Domain, level: SkillLevel, month_index: u32) -> &'static str {
    let titles: &[&str] = match (domain, level) {
        (Domain::GameDevelopment, SkillLevel::Beginner) => &[
            "Getting Started with Unity",
            "Building Your First Game",
            "Adding Features",
            "Polishing & Publishing",
        ],
        (Domain::GameDevelopment, SkillLevel::Intermediate) => &[
            "Advanced Mechanics",
            "Multiplayer Systems",
            "Performance Optimization",
            "Monetization",
        ],
        (Domain::GameDevelopment, SkillLevel::Advanced) => &[
            "VR/AR Development",
            "Advanced Graphics",
            "Game Engine Development",
            "Industry Best Practices",
        ],
        (Domain::Ai, SkillLevel::Beginner) => &[
            "Python Fundamentals",
            "Data Science Basics",
            "Machine Learning Intro",
            "Building Models",
        ],
        (Domain::Ai, SkillLevel::Intermediate) => &[
            "Deep Learning",
            "Neural Networks",
            "NLP & Computer Vision",
            "Advanced Projects",
        ],
        (Domain::Ai, SkillLevel::Advanced) => &[
            "Research Methods",
            "Advanced Architectures",
            "AI Ethics",
            "Cutting-edge Research",
        ],
        (Domain::Drawing, SkillLevel::Beginner) => &[
            "Fundamentals",
            "Shapes & Forms",
            "Perspective & Composition",
            "Putting It Together",
        ],
        (Domain::Drawing, SkillLevel::Intermediate) => &[
            "Portraits",
            "Landscapes",
            "Digital Art Basics",
            "Advanced Digital",
        ],
        (Domain::Drawing, SkillLevel::Advanced) => &[
            "Master Techniques",
            "Art Styles",
            "Professional Portfolio",
            "Industry Standards",
        ],
        (Domain::Singing, SkillLevel::Beginner) => &[
            "Vocal Basics",
            "Breathing & Support",
            "Scales & Intervals",
            "Simple Songs",
        ],
        (Domain::Singing, SkillLevel::Intermediate) => &[
            "Vocal Range",
            "Harmony & Theory",
            "Performance Skills",
            "Recording Basics",
        ],
        (Domain::Singing, SkillLevel::Advanced) => &[
            "Advanced Techniques",
            "Stage Presence",
            "Professional Recording",
            "Career Development",
        ],
        (Domain::Coding, SkillLevel::Beginner) => &[
            "HTML/CSS Basics",
            "JavaScript Fundamentals",
            "Building Projects",
            "Deployment",
        ],
        (Domain::Coding, SkillLevel::Intermediate) => &[
            "React/Vue",
            "Backend Development",
            "Full-Stack Projects",
            "Advanced Concepts",
        ],
        (Domain::Coding, SkillLevel::Advanced) => &[
            "System Design",
            "DevOps & CI/CD",
            "Architecture Patterns",
            "Leadership",
        ],
    };
    clamped(titles, month_index)
}

/// Monthly goal line per domain, in month order, clamped
pub fn monthly_goals(domain: Domain, month_index: u32) -> &'static str {
    let goals: &[&str] = match domain {
        Domain::GameDevelopment => &[
            "Master Unity basics and create your first scene",
            "Build a complete game with player controls",
            "Add game mechanics and features",
            "Polish and prepare for publishing",
        ],
        Domain::Ai => &[
            "Master Python fundamentals and data manipulation",
            "Understand machine learning basics",
            "Build and train your first model",
            "Deploy and evaluate models",
        ],
        Domain::Drawing => &[
            "Master basic shapes and forms",
            "Learn perspective and composition",
            "Develop shading and texture skills",
            "Create complete artworks",
        ],
        Domain::Singing => &[
            "Develop proper breathing and support",
            "Master basic scales and intervals",
            "Learn and perform songs",
            "Record and evaluate performances",
        ],
        Domain::Coding => &[
            "Master HTML/CSS and JavaScript basics",
            "Build interactive web projects",
            "Learn frameworks and backend",
            "Deploy full-stack applications",
        ],
    };
    clamped(goals, month_index)
}

/// Up to three suggested resources per domain
pub fn monthly_resources(domain: Domain) -> Vec<String> {
    let resources: &[&str] = match domain {
        Domain::GameDevelopment => &[
            "Unity Learn Platform",
            "Brackeys YouTube Channel",
            "Unity Documentation",
            "Game Design Books",
        ],
        Domain::Ai => &["Coursera ML Course", "Kaggle Learn", "Fast.ai", "Research Papers"],
        Domain::Drawing => &[
            "Proko YouTube Channel",
            "Drawabox Course",
            "Art Books",
            "Online Communities",
        ],
        Domain::Singing => &[
            "Vocal Coach YouTube",
            "Singing Courses",
            "Music Theory Books",
            "Practice Apps",
        ],
        Domain::Coding => &["MDN Web Docs", "FreeCodeCamp", "Codecademy", "GitHub Projects"],
    };
    resources.iter().take(3).map(|s| s.to_string()).collect()
}

/// Task titles cycle through a fixed 6-entry template list per domain
pub fn task_title(domain: Domain, task_index: u32) -> &'static str {
    let templates: &[&str; 6] = match domain {
        Domain::GameDevelopment => &[
            "Learn Unity Interface",
            "Create First Scene",
            "Add Player Movement",
            "Implement Game Mechanics",
            "Add UI Elements",
            "Polish & Test",
        ],
        Domain::Ai => &[
            "Python Basics",
            "Data Manipulation",
            "Machine Learning Intro",
            "Build First Model",
            "Evaluate & Improve",
            "Deploy Model",
        ],
        Domain::Drawing => &[
            "Basic Shapes Practice",
            "Perspective Study",
            "Shading Techniques",
            "Composition Exercise",
            "Complete Drawing",
            "Review & Improve",
        ],
        Domain::Singing => &[
            "Vocal Warm-up Routine",
            "Breathing Exercises",
            "Scale Practice",
            "Song Learning",
            "Performance Practice",
            "Recording Session",
        ],
        Domain::Coding => &[
            "Learn Concepts",
            "Practice Exercises",
            "Build Mini Project",
            "Code Review",
            "Refactor Code",
            "Deploy Project",
        ],
    };
    templates[((task_index.max(1) - 1) % 6) as usize]
}

fn clamped(entries: &[&'static str], index_one_based: u32) -> &'static str {
    let idx = (index_one_based.max(1) as usize - 1).min(entries.len() - 1);
    entries[idx]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_title_clamps_past_catalog_end() {
        // 12-month roadmaps reuse the last entry rather than indexing out of bounds
        let last = month_title(Domain::Coding, SkillLevel::Beginner, 4);
        assert_eq!(month_title(Domain::Coding, SkillLevel::Beginner, 12), last);
    }

    #[test]
    fn test_task_titles_cycle() {
        assert_eq!(
            task_title(Domain::Coding, 1),
            task_title(Domain::Coding, 7)
        );
        assert_ne!(
            task_title(Domain::Coding, 1),
            task_title(Domain::Coding, 2)
        );
    }

    #[test]
    fn test_week_titles_cycle() {
        assert_eq!(week_title(1), "Foundation Week");
        assert_eq!(week_title(5), "Foundation Week");
        assert_eq!(week_title(4), "Mastery Week");
    }

    #[test]
    fn test_resources_capped_at_three() {
        for domain in Domain::ALL {
            assert_eq!(monthly_resources(domain).len(), 3);
        }
    }
}
