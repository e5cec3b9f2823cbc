// Copyright 2024-2025 hrzlgnm
// SPDX-License-Identifier: MIT-0

mod dom;
pub mod main;
mod provider;
mod styles;

pub use dom::WebDocument;
pub use provider::LeptosRoot;
pub use styles::bundled_stylesheets;
