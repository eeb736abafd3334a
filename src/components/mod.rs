pub mod form_parts;
pub mod home;
pub mod match_result;
pub mod navigation;
pub mod notice;
pub mod report_found;
pub mod report_missing;
pub mod service_status;
pub mod settings;

pub use home::HomeScreen;
pub use match_result::MatchResultCard;
pub use navigation::NavigationBar;
pub use notice::NoticeBanner;
pub use report_found::ReportFoundScreen;
pub use report_missing::ReportMissingScreen;
pub use service_status::ServiceStatusCard;
pub use settings::SettingsScreen;
