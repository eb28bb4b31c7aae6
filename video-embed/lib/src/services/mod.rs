//! Built-in video services.
//!
//! Each service pairs a reference-parsing rule with a playback URL rule:
//!
//! | Service | Accepts | Player URL |
//! |---------|---------|------------|
//! | [`YouTube`] | watch, short, embed and `/v/` URLs, bare IDs | `//www.youtube.com/embed/{id}` |
//! | [`Vimeo`] | video, channel, group and album URLs, numeric IDs | `//player.vimeo.com/video/{id}` |
//! | [`Vine`] | `vine.co/v/{id}` URLs, bare IDs | `//vine.co/v/{id}/embed/{embed}` |
//! | [`Prezi`] | `prezi.com/{id}` URLs, bare IDs | `https://prezi.com/embed/{id}/...` |

mod prezi;
mod vimeo;
mod vine;
mod youtube;

pub use prezi::Prezi;
pub use vimeo::Vimeo;
pub use vine::Vine;
pub use youtube::YouTube;

use crate::service::VideoService;

/// Every built-in service paired with the name it registers under.
pub fn builtin() -> Vec<(&'static str, Box<dyn VideoService>)> {
    let mut services: Vec<(&'static str, Box<dyn VideoService>)> = Vec::with_capacity(4);
    services.push((YouTube::NAME, Box::new(YouTube)));
    services.push((Vimeo::NAME, Box::new(Vimeo)));
    services.push((Vine::NAME, Box::new(Vine)));
    services.push((Prezi::NAME, Box::new(Prezi)));
    services
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_names() {
        let names: Vec<_> = builtin().into_iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["youtube", "vimeo", "vine", "prezi"]);
    }
}
