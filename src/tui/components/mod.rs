// UI components
//
// Each component renders one region of the screen:
// - toolbar: fixed top bar with the cross-fading compact title
// - header: large title + stub buttons, first rows of the scrolled content
// - list: the remaining content rows
// - status_bar: key hints and the latest log line
// - toast: transient overlay for stub actions and help

pub mod header;
pub mod list;
pub mod status_bar;
pub mod toast;
pub mod toolbar;

pub use toast::Toast;
