pub mod card_action_buttons;
pub mod filters_sidebar;
pub mod grid_view;
pub mod search_input_top_bar;
pub mod search_panel_left_view;
pub mod search_result_item_card;
