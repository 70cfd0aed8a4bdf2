// Module layout (Clean Architecture style)
// - bootstrap: configuration and wiring
// - infrastructure: HTTP endpoint and cache adapters
// - presentation: footer component, viewport and motion view helpers
// - application: ports and version use cases
// - domain: core models

pub mod application;
pub mod bootstrap;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
