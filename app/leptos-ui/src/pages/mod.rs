pub mod route_page;
