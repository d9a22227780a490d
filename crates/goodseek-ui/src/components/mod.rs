pub(crate) mod chips;
pub(crate) mod filter_panel;
pub(crate) mod org_card;
pub(crate) mod org_grid;
pub(crate) mod search_box;
pub(crate) mod session_badge;
pub(crate) mod shell;
pub(crate) mod status;
