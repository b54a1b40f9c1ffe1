//! Configuration section definitions.
//!
//! Each module corresponds to a section in `sitemap.toml`:
//!
//! | Module     | TOML Section   | Purpose                                  |
//! |------------|----------------|------------------------------------------|
//! | `site`     | `[site]`       | Hostname                                 |
//! | `build`    | `[build]`      | Output dir, filename, robots, limits     |
//! | `defaults` | `[defaults]`   | Per-route fallback lastmod/changefreq/priority |
//! | `routes`   | `routes`       | Route sources (inline, JSON file, named) |

mod build;
mod defaults;
mod routes;
mod site;

pub use build::BuildSectionConfig;
pub use defaults::DefaultsSectionConfig;
pub use routes::{NamedRoutes, RouteInput, RoutesConfig};
pub use site::SiteSectionConfig;
