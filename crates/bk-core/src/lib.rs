//! Core model for bracket's route loading views.
//!
//! Every routed page in the tournament front-end (profiles, tournaments,
//! series, teams, rankings, entry forms) declares a loading view: a static
//! placeholder tree shown while the page's data is being fetched. This crate
//! holds everything about those views that does not depend on a renderer:
//!
//! - **Layout**: the typed tree of containers and skeleton primitives
//! - **Views**: the per-route producer functions
//! - **Routes**: route identifiers and URL path resolution
//! - **Registry**: the explicit route -> loading view map
//! - **Render**: a static HTML preview of a layout tree
//! - **Config**: locale and skeleton settings loaded from TOML

pub mod config;
pub mod layout;
pub mod registry;
pub mod render;
pub mod route;
pub mod shape;
pub mod views;

pub use layout::{BlockSize, ContainerStyle, Dimension, LayoutNode, SkeletonPrimitive};
pub use registry::{LoadingRegistry, LoadingView, RegistryError, ViewIssue};
pub use route::{RouteError, RouteFamily, RouteKind, RouteMatch};
