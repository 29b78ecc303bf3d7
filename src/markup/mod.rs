// SPDX-License-Identifier: MPL-2.0
//! In-memory markup model.
//!
//! The widget controller never touches a real document. It owns an
//! [`Element`] tree mirroring the container subtree, queries it with
//! [`Selector`]s and writes classes, attributes and text into it. A host
//! adapter mirrors the tree onto whatever actually renders it.

mod element;
mod selector;

pub use element::{Element, NodePath};
pub use selector::Selector;
