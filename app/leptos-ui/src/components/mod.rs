pub mod layout_view;
pub mod route_loading;
pub mod skeleton;
