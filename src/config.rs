// Deployment and contact configuration. The release build is exported as a
// static site under a fixed base path; local `trunk serve` runs at the root.

#[cfg(debug_assertions)]
pub fn base_path() -> &'static str {
    ""
}

#[cfg(not(debug_assertions))]
pub fn base_path() -> &'static str {
    "/personal-webs"
}

pub fn resume_url() -> String {
    format!("{}/scresume.pdf", base_path())
}

pub const GITHUB_URL: &str = "https://github.com/ShauryaChandna";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/shaurya-chandna-0a65b9236/";
pub const MAILTO_URL: &str = "mailto:shauryachandna13@gmail.com";
