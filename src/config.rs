use log::Level;

/// Root of the image assets. Override at build time with `PRITTY_ASSET_BASE`
/// to serve images from a CDN.
pub fn asset_base() -> &'static str {
    match option_env!("PRITTY_ASSET_BASE") {
        Some(base) => base,
        None => "/assets/pritty-landscapes",
    }
}

pub fn video_base() -> &'static str {
    "/videos"
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Joins a path under the asset base, e.g. `asset("logos/logo.png")`.
pub fn asset(path: &str) -> String {
    join(asset_base(), path)
}

pub fn video(path: &str) -> String {
    join(video_base(), path)
}

fn join(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

pub const COMPANY_NAME: &str = "Pritty Landscapes";
pub const EMAIL: &str = "info@prittylandscapes.com";

pub struct Office {
    pub name: &'static str,
    pub display: &'static str,
    pub tel: &'static str,
}

pub const OFFICES: [Office; 2] = [
    Office {
        name: "Markham Office",
        display: "(416) 722-0210",
        tel: "4167220210",
    },
    Office {
        name: "Collingwood Office",
        display: "(705) 984-4810",
        tel: "7059844810",
    },
];

pub const SERVICE_AREAS: [&str; 6] = [
    "Georgian Bay",
    "Muskoka",
    "Blue Mountain",
    "Collingwood",
    "Thornbury",
    "Toronto & GTA",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_normalises_slashes() {
        assert_eq!(join("/assets/", "/logos/logo.png"), "/assets/logos/logo.png");
        assert_eq!(join("/assets", "logos/logo.png"), "/assets/logos/logo.png");
    }

    #[test]
    fn video_paths_live_under_video_base() {
        assert_eq!(video("homepage-hero.mp4"), "/videos/homepage-hero.mp4");
    }
}
