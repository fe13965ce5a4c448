// SPDX-License-Identifier: MPL-2.0
//! UI components and design tokens.

pub mod design_tokens;
pub mod gallery;
