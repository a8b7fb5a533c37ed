mod button;
mod container;

pub use button::{
    carousel_dot_style, fab_button_style, faq_row_style, ghost_button_style, icon_button_style,
    nav_link_style, primary_button_style,
};
pub use container::{
    backdrop_style, badge_style, card_style, footer_style, loading_veil_style, modal_card_style,
    nav_bar_style, ticket_panel_style,
};
