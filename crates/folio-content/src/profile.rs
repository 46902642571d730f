//! Stable facts about the portfolio owner.

/// Contact points and the skill list shown on the home page.
pub struct Profile {
    pub github: &'static str,
    pub email: &'static str,
    pub skills: &'static [&'static str],
}

pub const PROFILE: Profile = Profile {
    github: "https://github.com/weilun-dev",
    email: "hello@weilun.dev",
    skills: &[
        "Rust",
        "Go",
        "TypeScript",
        "PostgreSQL",
        "Kubernetes",
        "Redis",
        "gRPC",
    ],
};
