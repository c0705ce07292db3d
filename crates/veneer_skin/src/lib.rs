//! # Veneer Skin Runtime
//!
//! Turns a tree of declared skin elements into a live, renderable object
//! graph and lets a scripting layer address elements by id.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        SKIN PIPELINE                          │
//! ├──────────────────────────────────────────────────────────────┤
//! │  Attributes → Resolver Chain → initialize() → render()        │
//! │      ↓              ↓               ↓            ↓            │
//! │  Coercion      Object fields   Systems, then  Child first,    │
//! │                                  children     then attach     │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The render surface ([`RenderSurface`]) and bitmap store
//! ([`ResourceProvider`]) are supplied by the host through a
//! [`RenderContext`]; nothing in this crate is process-global.
//!
//! ## Example
//!
//! ```rust
//! use veneer_core::RenderConfig;
//! use veneer_skin::{
//!     BitmapRegistry, CommandSurface, GuiObject, Group, InitContext, KeyAllocator, Layer,
//!     RenderContext,
//! };
//!
//! let mut keys = KeyAllocator::new();
//! let mut root = Group::new(keys.next_key());
//! root.set_attribute("id", "main").unwrap();
//!
//! let mut play = Layer::new(keys.next_key());
//! play.set_attribute("id", "play").unwrap();
//! root.add_child(Box::new(play));
//!
//! let mut log: Vec<String> = Vec::new();
//! root.initialize(&mut InitContext::new(&mut log));
//!
//! let mut surface = CommandSurface::new();
//! let bitmaps = BitmapRegistry::new();
//! let config = RenderConfig::default();
//! root.render(&mut RenderContext::new(&mut surface, &bitmaps, &config));
//!
//! assert_eq!(root.find_child("PLAY").unwrap().id(), "play");
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod builder;
pub mod error;
pub mod group;
pub mod key;
pub mod layer;
pub mod layout;
pub mod lifecycle;
pub mod object;
pub mod render;
pub mod resource;
pub mod surface;
pub mod system;

pub use builder::{NodeDecl, ScriptDecl, ScriptFactory, SkinBuilder, SkinDocument};
pub use error::{BuildError, BuildResult, LookupError};
pub use group::{Group, ScriptScope};
pub use key::{KeyAllocator, ObjectKey};
pub use layer::Layer;
pub use layout::Layout;
pub use lifecycle::{InitContext, Lifecycle};
pub use object::{GuiBase, GuiObject};
pub use render::{CommandSurface, Element, RenderContext, SurfaceCommand};
pub use resource::{Bitmap, BitmapRegistry, ResourceProvider};
pub use surface::{RenderSurface, StyleProperty, SurfaceHandle};
pub use system::{NoopScript, ScriptHook, SystemObject};
