pub mod details_dropdown;
pub mod location_header;
pub mod search_overlay;
pub mod weather_body;
pub mod weather_display;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use details_dropdown::{DetailsDropdown, DetailsDropdownProps};
pub use location_header::{LocationHeader, LocationHeaderProps};
pub use search_overlay::{SearchOverlay, SearchOverlayProps};
pub use weather_body::{WeatherBody, WeatherBodyProps};
pub use weather_display::{WeatherDisplay, WeatherDisplayProps};
