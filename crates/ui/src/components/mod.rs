mod camera_feed;
mod fallback_panel;
mod hotspot_overlay;
mod narrator;
mod progress_header;
mod quiz_card;
mod test_mode_banner;

pub use camera_feed::CameraFeed;
pub use fallback_panel::FallbackPanel;
pub use hotspot_overlay::HotspotOverlay;
pub use narrator::VoiceNarrator;
pub use progress_header::ProgressHeader;
pub use quiz_card::QuizCard;
pub use test_mode_banner::TestModeBanner;
